//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义自动配置引擎使用的实例解析接口。
//!
//! ## 核心接口
//!
//! - [`Injector`] - 按类型键解析实例
//! - [`InjectorExt`] - 带类型的解析辅助方法
//! - [`ResolveContext`] - 循环依赖检测与深度限制
//! - [`ComponentFactoryFn`] - 类型擦除的工厂函数

pub mod factory;
pub mod injector;
pub mod resolver;

pub use factory::*;
pub use injector::*;
pub use resolver::*;
