//! 以类型方式注册的扩展注册表

use host_abstractions::ClassRef;
use infrastructure_common::{annotations, RegistrationError, TypeInfo};
use std::any::TypeId;
use std::fmt;
use tracing::debug;

/// 以类型方式注册的扩展种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// 带 Provider 注解的类型
    Provider,
    /// 可注入提供者
    InjectableProvider,
    /// 带 Path 注解的资源类型
    Resource,
}

impl ClassKind {
    /// 种类名称
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::InjectableProvider => "injectableProvider",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已注册的类型
#[derive(Debug, Clone)]
pub struct RegisteredClass {
    /// 种类
    pub kind: ClassKind,
    /// 类型信息
    pub type_info: TypeInfo,
    /// 资源路径，仅资源类型带有
    pub path: Option<String>,
}

/// 类型注册表，同一种类中同一类型只能注册一次
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<RegisteredClass>,
}

impl ClassRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册类型
    pub fn register(
        &mut self,
        kind: ClassKind,
        class: ClassRef<'_>,
    ) -> Result<(), RegistrationError> {
        if self.contains(kind, class.type_info.id) {
            return Err(RegistrationError::DuplicateClass {
                kind: kind.to_string(),
                type_name: class.type_info.name.clone(),
            });
        }

        let path = match kind {
            ClassKind::Resource => class.annotation_value(annotations::PATH).map(str::to_string),
            _ => None,
        };

        debug!("注册{}类型: {}", kind, class.type_info.name);
        self.classes.push(RegisteredClass {
            kind,
            type_info: class.type_info.clone(),
            path,
        });
        Ok(())
    }

    /// 是否已注册
    pub fn contains(&self, kind: ClassKind, type_id: TypeId) -> bool {
        self.classes
            .iter()
            .any(|c| c.kind == kind && c.type_info.id == type_id)
    }

    /// 指定种类的已注册类型，按注册顺序
    pub fn of_kind(&self, kind: ClassKind) -> Vec<&RegisteredClass> {
        self.classes.iter().filter(|c| c.kind == kind).collect()
    }

    /// 资源路径表，按路径排序
    pub fn resource_paths(&self) -> Vec<(String, String)> {
        let mut paths: Vec<(String, String)> = self
            .classes
            .iter()
            .filter_map(|c| {
                c.path
                    .as_ref()
                    .map(|p| (p.clone(), c.type_info.name.clone()))
            })
            .collect();
        paths.sort();
        paths
    }
}
