//! 实例解析
//!
//! 每个描述符向容器发起一次解析调用，不跨类别缓存。

use crate::descriptor::{ClassDescriptor, Instance};
use di_abstractions::Injector;
use infrastructure_common::DependencyError;
use tracing::{debug, error};

/// 实例解析器
pub struct InstanceResolver<'a> {
    injector: &'a dyn Injector,
}

impl<'a> InstanceResolver<'a> {
    /// 创建解析器
    pub fn new(injector: &'a dyn Injector) -> Self {
        Self { injector }
    }

    /// 解析描述符对应的实例
    pub fn resolve(&self, descriptor: &ClassDescriptor) -> Result<Instance, DependencyError> {
        debug!("解析实例: {}", descriptor.name());
        self.injector
            .get_instance(&descriptor.type_info)
            .map_err(|e| {
                error!("实例解析失败: {}, 原因: {}", descriptor.name(), e);
                e
            })
    }

    /// 解析实例并转换为指定的 trait 对象
    pub fn resolve_as<T: ?Sized>(
        &self,
        descriptor: &ClassDescriptor,
        expected: &str,
        cast: fn(Instance) -> Option<std::sync::Arc<T>>,
    ) -> Result<std::sync::Arc<T>, DependencyError> {
        let instance = self.resolve(descriptor)?;
        cast(instance).ok_or_else(|| DependencyError::TypeMismatch {
            expected: expected.to_string(),
            actual: descriptor.name().to_string(),
        })
    }
}

impl std::fmt::Debug for InstanceResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceResolver").finish_non_exhaustive()
    }
}
