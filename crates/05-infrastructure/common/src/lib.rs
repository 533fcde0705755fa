//! # Infrastructure Common
//!
//! 这个 crate 提供了自动配置引擎各层共享的基础类型。
//!
//! ## 核心内容
//!
//! - [`CapabilityCategory`] - 七种固定的能力类别及其标记表
//! - [`TypeInfo`] / [`Annotation`] - 类型元数据
//! - [`Discovered`] - 编译期类型表标记
//! - [`AutoConfigError`] - 启动流程错误分类
//! - [`HealthStatus`] / [`LifecycleState`] - 宿主扩展点使用的值类型

pub mod capability;
pub mod discovery;
pub mod errors;
pub mod health;
pub mod lifecycle;
pub mod metadata;

pub use capability::*;
pub use discovery::*;
pub use errors::*;
pub use health::*;
pub use lifecycle::*;
pub use metadata::*;
