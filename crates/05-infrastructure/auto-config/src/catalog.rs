//! 类型目录
//!
//! 构造时读取一次类型来源，保留位于命名空间根之下的全部类型。
//! 目录构建后只读。

use crate::descriptor::ClassDescriptor;
use crate::namespace::NamespaceRoot;
use crate::source::ClassSource;
use infrastructure_common::ConfigError;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// 类型目录，迭代顺序不固定
#[derive(Debug, Clone)]
pub struct Catalog {
    classes: HashMap<TypeId, ClassDescriptor>,
}

impl Catalog {
    /// 构建目录
    ///
    /// 在读取类型来源之前校验命名空间根，根集合为空时返回
    /// [`ConfigError::EmptyNamespaceRoots`]。
    pub fn build<S: AsRef<str>>(
        roots: &[S],
        source: &dyn ClassSource,
    ) -> Result<Self, ConfigError> {
        let roots = NamespaceRoot::parse_all(roots)?;

        let mut classes = HashMap::new();
        for descriptor in source.classes() {
            if roots.iter().any(|r| r.contains(descriptor.name())) {
                classes
                    .entry(descriptor.type_info.id)
                    .or_insert(descriptor);
            }
        }

        debug!(
            "类型目录构建完成，命名空间根: {:?}，类型数量: {}",
            roots.iter().map(NamespaceRoot::as_str).collect::<Vec<_>>(),
            classes.len()
        );

        Ok(Self { classes })
    }

    /// 遍历全部描述符
    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// 按类型查找描述符
    pub fn get(&self, type_id: TypeId) -> Option<&ClassDescriptor> {
        self.classes.get(&type_id)
    }

    /// 类型数量
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 全部完全限定名，按字母排序
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.values().map(ClassDescriptor::name).collect();
        names.sort_unstable();
        names
    }
}
