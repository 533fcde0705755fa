//! 运行阶段环境实现

use crate::admin::{TaskError, TaskRegistry};
use crate::classes::{ClassKind, ClassRegistry};
use crate::health::HealthCheckRegistry;
use crate::lifecycle::LifecycleManager;
use host_abstractions::{ClassRef, Environment, HealthCheck, Managed, Task, TaskParams};
use infrastructure_common::{HealthCheckResult, LifecycleError, RegistrationError};
use std::sync::Arc;

/// 默认运行环境
///
/// 把每个注册调用转发到对应的内存注册表。
#[derive(Debug, Default)]
pub struct DefaultEnvironment {
    health_checks: HealthCheckRegistry,
    classes: ClassRegistry,
    tasks: TaskRegistry,
    lifecycle: LifecycleManager,
}

impl DefaultEnvironment {
    /// 创建新的运行环境
    pub fn new() -> Self {
        Self::default()
    }

    /// 健康检查注册表
    pub fn health_checks(&self) -> &HealthCheckRegistry {
        &self.health_checks
    }

    /// 类型注册表
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// 管理端任务注册表
    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// 生命周期管理器
    pub fn lifecycle(&self) -> &LifecycleManager {
        &self.lifecycle
    }

    /// 可变生命周期管理器，用于启动和停止托管对象
    pub fn lifecycle_mut(&mut self) -> &mut LifecycleManager {
        &mut self.lifecycle
    }

    /// 执行全部健康检查，结果按名称排序
    pub async fn run_health_checks(&self) -> Vec<HealthCheckResult> {
        self.health_checks.run_health_checks().await
    }

    /// 健康检查报告
    pub async fn health_report_json(&self) -> serde_json::Value {
        self.health_checks.report_json().await
    }

    /// 按名称执行管理端任务
    pub async fn execute_task(&self, name: &str, params: &TaskParams) -> Result<String, TaskError> {
        self.tasks.execute(name, params).await
    }

    /// 启动全部托管对象
    pub async fn start_all(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.start_all().await
    }

    /// 停止全部托管对象
    pub async fn stop_all(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.stop_all().await
    }
}

impl Environment for DefaultEnvironment {
    fn add_health_check(
        &mut self,
        name: &str,
        check: Arc<dyn HealthCheck>,
    ) -> Result<(), RegistrationError> {
        self.health_checks.register(name, check)
    }

    fn register_provider_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError> {
        self.classes.register(ClassKind::Provider, class)
    }

    fn register_injectable_provider_class(
        &mut self,
        class: ClassRef<'_>,
    ) -> Result<(), RegistrationError> {
        self.classes.register(ClassKind::InjectableProvider, class)
    }

    fn register_resource_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError> {
        self.classes.register(ClassKind::Resource, class)
    }

    fn add_task(&mut self, task: Arc<dyn Task>) -> Result<(), RegistrationError> {
        self.tasks.add(task)
    }

    fn add_managed(&mut self, managed: Arc<dyn Managed>) -> Result<(), RegistrationError> {
        self.lifecycle.manage(managed);
        Ok(())
    }
}
