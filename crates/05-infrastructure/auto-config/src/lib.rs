//! # Auto Config
//!
//! 自动配置引擎：扫描命名空间中已登记的类型，按能力类别分类，过滤抽象类型，
//! 通过依赖注入容器解析实例，并分两个阶段注册到宿主框架。
//!
//! ## 核心组件
//!
//! - [`Catalog`] - 构造时构建一次的只读类型目录
//! - [`classifier`] - 能力分类与具体性过滤
//! - [`InstanceResolver`] - 通过 [`Injector`](di_abstractions::Injector) 解析实例
//! - [`dispatcher`] - 按类别调用宿主注册方法
//! - [`AutoConfig`] - 两阶段编排
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use auto_config::AutoConfig;
//! use component_macros::discoverable;
//!
//! #[discoverable]
//! pub struct DemoTask;
//!
//! let auto_config = AutoConfig::new(&["demo"])?;
//! auto_config.initialize(&mut bootstrap, &container)?;
//! auto_config.run(&mut environment, &container)?;
//! ```

extern crate self as auto_config;

pub mod catalog;
pub mod classifier;
pub mod descriptor;
pub mod dispatcher;
pub mod engine;
pub mod logging;
pub mod namespace;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod table;
pub mod testing;

pub use catalog::Catalog;
pub use descriptor::{ClassDescriptor, Instance, Supertype};
pub use engine::AutoConfig;
pub use logging::{init_logging, LoggingConfig};
pub use namespace::NamespaceRoot;
pub use resolver::InstanceResolver;
pub use settings::{AutoConfigSettings, LogFormat, LoggingSettings};
pub use source::{ClassSource, RegisteredClasses, StaticClassSource};
pub use table::registered_classes;

/// `#[discoverable]` 宏展开代码使用的内部接口
#[doc(hidden)]
pub mod __private {
    pub use crate::descriptor::{ClassDescriptor, Supertype};
    pub use crate::table::probe::*;
    pub use crate::table::register_class;
    pub use infrastructure_common::{annotations, Annotation, Discovered, TypeInfo};
}
