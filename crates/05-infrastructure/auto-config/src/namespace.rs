//! 命名空间根
//!
//! 根是一个模块路径，例如 `demo` 或 `my_app::resources`。完全限定名以根开头即视为位于根之下，
//! 因此根 `demo` 同样包含 `demonstration::Shadow`。

use infrastructure_common::ConfigError;
use std::fmt;

/// 已校验的命名空间根
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceRoot(String);

impl NamespaceRoot {
    /// 校验并创建命名空间根
    pub fn parse(root: &str) -> Result<Self, ConfigError> {
        if root.is_empty() {
            return Err(ConfigError::invalid_root(root, "命名空间根不能为空"));
        }
        if root.trim() != root {
            return Err(ConfigError::invalid_root(root, "命名空间根不能包含首尾空白"));
        }
        if let Some(segment) = root.split("::").find(|s| !is_identifier(s)) {
            return Err(ConfigError::invalid_root(
                root,
                format!("路径段 `{}` 不是合法标识符", segment),
            ));
        }
        Ok(Self(root.to_string()))
    }

    /// 校验一组命名空间根，空集合直接拒绝
    pub fn parse_all<S: AsRef<str>>(roots: &[S]) -> Result<Vec<Self>, ConfigError> {
        if roots.is_empty() {
            return Err(ConfigError::EmptyNamespaceRoots);
        }
        roots.iter().map(|r| Self::parse(r.as_ref())).collect()
    }

    /// 根路径
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 完全限定名是否位于此根之下
    pub fn contains(&self, name: &str) -> bool {
        name.starts_with(self.0.as_str())
    }
}

impl fmt::Display for NamespaceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
