//! 元数据定义
//!
//! 提供类型和注解的元数据信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
///
/// `name` 为完全限定名（模块路径加类型名），`id` 用于容器按类型查找绑定。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 完全限定类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
}

impl TypeInfo {
    /// 创建新的类型信息
    pub fn new(type_id: TypeId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: type_id,
        }
    }

    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            id: TypeId::of::<T>(),
        }
    }

    /// 使用显式的完全限定名创建类型信息
    pub fn named<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::new(TypeId::of::<T>(), name)
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// 获取模块路径（不包含类型名称）
    pub fn module_path(&self) -> &str {
        self.name
            .rsplit_once("::")
            .map_or("", |(module, _)| module)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 注解名称常量
pub mod annotations {
    /// 标记类型为 Provider
    pub const PROVIDER: &str = "Provider";
    /// 标记类型为 Resource，值为资源路径
    pub const PATH: &str = "Path";
}

/// 类型上声明的注解
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// 注解名称
    pub name: &'static str,
    /// 注解值
    pub value: Option<String>,
}

impl Annotation {
    /// 创建不带值的注解
    pub fn marker(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// 创建带值的注解
    pub fn with_value(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}
