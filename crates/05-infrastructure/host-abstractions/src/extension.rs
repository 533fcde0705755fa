//! 宿主扩展点 trait
//!
//! 每个 trait 都是一个父类型标记。它们都以 [`Discovered`] 为父 trait，
//! 因此只有经过 `#[discoverable]` 宏登记的类型才能实现。

use crate::context::{BootstrapContext, Environment};
use async_trait::async_trait;
use infrastructure_common::{Discovered, HealthStatus, RegistrationError};
use std::collections::HashMap;
use std::time::Duration;

/// 扩展点回调使用的错误类型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 任务参数，同名参数可以出现多次
pub type TaskParams = HashMap<String, Vec<String>>;

/// 可复用的功能包
///
/// 在引导阶段注册，宿主注册时调用 [`Bundle::initialize`]，运行阶段调用
/// [`Bundle::run`]。
pub trait Bundle: Discovered {
    /// 引导阶段回调
    fn initialize(&self, _bootstrap: &mut dyn BootstrapContext) {}

    /// 运行阶段回调
    fn run(&self, _environment: &mut dyn Environment) -> Result<(), RegistrationError> {
        Ok(())
    }
}

/// 健康检查
///
/// [`HealthCheck::name`] 是健康检查注册表中的键，必须唯一。
#[async_trait]
pub trait HealthCheck: Discovered {
    /// 健康检查名称
    fn name(&self) -> String;

    /// 执行健康检查
    async fn check(&self) -> HealthStatus;

    /// 单次检查的超时时间
    fn timeout(&self) -> Duration {
        Duration::from_secs(30)
    }
}

/// 管理端任务
#[async_trait]
pub trait Task: Discovered {
    /// 任务名称
    fn name(&self) -> String;

    /// 执行任务，返回写给调用方的输出
    async fn execute(&self, params: &TaskParams) -> Result<String, BoxError>;
}

/// 托管对象，由宿主负责启动和停止
#[async_trait]
pub trait Managed: Discovered {
    /// 托管对象名称，用于日志和错误信息
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// 启动
    async fn start(&self) -> Result<(), BoxError>;

    /// 停止
    async fn stop(&self) -> Result<(), BoxError>;
}

/// 可注入提供者
///
/// 以类型方式注册，由宿主自己的注入机制管理实例。
pub trait InjectableProvider: Discovered {
    /// 提供的值类型名称
    fn provided_type(&self) -> &'static str;
}
