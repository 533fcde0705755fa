//! # Host Abstractions
//!
//! 宿主框架抽象层：扩展点 trait 以及两个阶段的注册上下文。
//!
//! ## 核心接口
//!
//! - [`Bundle`] / [`HealthCheck`] / [`Task`] / [`Managed`] / [`InjectableProvider`] - 父类型标记
//! - [`BootstrapContext`] - 引导阶段注册调用
//! - [`Environment`] - 运行阶段注册调用

pub mod context;
pub mod extension;

pub use context::*;
pub use extension::*;
