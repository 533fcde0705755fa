//! 组件工厂抽象
//!
//! 工厂接收注入器以便解析构造函数依赖

use crate::injector::Injector;
use infrastructure_common::DependencyError;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除的组件工厂函数
pub type ComponentFactoryFn = Arc<
    dyn Fn(&dyn Injector) -> Result<Arc<dyn Any + Send + Sync>, DependencyError> + Send + Sync,
>;

/// 将带类型的工厂包装为类型擦除的工厂
pub fn erase_factory<T, F>(factory: F) -> ComponentFactoryFn
where
    T: Send + Sync + 'static,
    F: Fn(&dyn Injector) -> Result<T, DependencyError> + Send + Sync + 'static,
{
    Arc::new(move |injector: &dyn Injector| {
        let instance = factory(injector)?;
        Ok(Arc::new(instance) as Arc<dyn Any + Send + Sync>)
    })
}
