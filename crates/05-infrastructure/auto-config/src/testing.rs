//! 测试辅助
//!
//! 记录宿主调用顺序的假上下文，用于验证自动配置的注册行为。

use host_abstractions::{
    BootstrapContext, Bundle, ClassRef, Environment, HealthCheck, Managed, Task,
};
use infrastructure_common::RegistrationError;
use std::sync::Arc;

/// 一次宿主注册调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// 添加功能包
    Bundle,
    /// 添加健康检查，记录名称
    HealthCheck(String),
    /// 注册 Provider 类型，记录完全限定名
    ProviderClass(String),
    /// 注册可注入提供者类型，记录完全限定名
    InjectableProviderClass(String),
    /// 注册 Resource 类型，记录完全限定名
    ResourceClass(String),
    /// 添加管理端任务，记录任务名称
    Task(String),
    /// 添加托管对象，记录对象名称
    Managed(String),
}

/// 记录调用的引导上下文
#[derive(Default)]
pub struct RecordingBootstrap {
    /// 调用记录
    pub calls: Vec<HostCall>,
    /// 已添加的功能包
    pub bundles: Vec<Arc<dyn Bundle>>,
}

impl BootstrapContext for RecordingBootstrap {
    fn add_bundle(&mut self, bundle: Arc<dyn Bundle>) -> Result<(), RegistrationError> {
        self.calls.push(HostCall::Bundle);
        self.bundles.push(bundle);
        Ok(())
    }
}

/// 记录调用的运行环境
///
/// 与真实宿主一样拒绝重名的健康检查。
#[derive(Default)]
pub struct RecordingEnvironment {
    /// 调用记录
    pub calls: Vec<HostCall>,
}

impl RecordingEnvironment {
    /// 指定类型调用的数量
    pub fn count(&self, matches: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(c)).count()
    }
}

impl Environment for RecordingEnvironment {
    fn add_health_check(
        &mut self,
        name: &str,
        _check: Arc<dyn HealthCheck>,
    ) -> Result<(), RegistrationError> {
        let call = HostCall::HealthCheck(name.to_string());
        if self.calls.contains(&call) {
            return Err(RegistrationError::DuplicateHealthCheck {
                name: name.to_string(),
            });
        }
        self.calls.push(call);
        Ok(())
    }

    fn register_provider_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError> {
        self.calls
            .push(HostCall::ProviderClass(class.type_info.name.clone()));
        Ok(())
    }

    fn register_injectable_provider_class(
        &mut self,
        class: ClassRef<'_>,
    ) -> Result<(), RegistrationError> {
        self.calls
            .push(HostCall::InjectableProviderClass(class.type_info.name.clone()));
        Ok(())
    }

    fn register_resource_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError> {
        self.calls
            .push(HostCall::ResourceClass(class.type_info.name.clone()));
        Ok(())
    }

    fn add_task(&mut self, task: Arc<dyn Task>) -> Result<(), RegistrationError> {
        self.calls.push(HostCall::Task(task.name()));
        Ok(())
    }

    fn add_managed(&mut self, managed: Arc<dyn Managed>) -> Result<(), RegistrationError> {
        self.calls.push(HostCall::Managed(managed.name()));
        Ok(())
    }
}
