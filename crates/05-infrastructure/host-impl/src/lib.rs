//! # Host Implementation
//!
//! 宿主上下文的内存实现：功能包、健康检查、类型注册、管理端任务和托管对象生命周期。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use host_impl::{DefaultBootstrap, DefaultEnvironment};
//!
//! let mut bootstrap = DefaultBootstrap::new();
//! let mut environment = DefaultEnvironment::new();
//!
//! auto_config.initialize(&mut bootstrap, &injector)?;
//! auto_config.run(&mut environment, &injector)?;
//! bootstrap.run_bundles(&mut environment)?;
//!
//! environment.lifecycle_mut().start_all().await?;
//! ```

pub mod admin;
pub mod bootstrap;
pub mod classes;
pub mod environment;
pub mod health;
pub mod lifecycle;

pub use admin::{TaskError, TaskRegistry};
pub use bootstrap::DefaultBootstrap;
pub use classes::{ClassKind, ClassRegistry, RegisteredClass};
pub use environment::DefaultEnvironment;
pub use health::HealthCheckRegistry;
pub use lifecycle::LifecycleManager;
