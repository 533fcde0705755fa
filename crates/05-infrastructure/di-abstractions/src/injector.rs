//! 注入器抽象接口
//!
//! 自动配置引擎只通过 [`Injector`] 获取实例，不依赖具体容器。

use infrastructure_common::{DependencyError, TypeInfo};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// 注入器 trait
///
/// 按类型键解析一个完整构造的实例。没有绑定或依赖无法满足时返回
/// [`DependencyError`]。是否缓存实例由实现决定。
pub trait Injector: Send + Sync {
    /// 解析指定类型的实例
    fn get_instance(
        &self,
        type_info: &TypeInfo,
    ) -> Result<Arc<dyn Any + Send + Sync>, DependencyError>;

    /// 检查是否存在指定类型的绑定
    fn has_binding(&self, type_id: TypeId) -> bool;
}

/// 带类型的解析辅助方法
pub trait InjectorExt: Injector {
    /// 解析并向下转换为具体类型
    fn get<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<T>();
        let instance = self.get_instance(&type_info)?;
        instance
            .downcast::<T>()
            .map_err(|_| DependencyError::TypeMismatch {
                expected: type_info.name.clone(),
                actual: "<unknown>".to_string(),
            })
    }
}

impl<I: Injector + ?Sized> InjectorExt for I {}
