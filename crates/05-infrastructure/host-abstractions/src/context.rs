//! 宿主上下文抽象接口
//!
//! 宿主框架在两个阶段分别提供 [`BootstrapContext`] 和 [`Environment`]，
//! 每个能力类别对应一个注册调用。注册表拒绝注册时返回 [`RegistrationError`]。

use crate::extension::{Bundle, HealthCheck, Managed, Task};
use infrastructure_common::{Annotation, RegistrationError, TypeInfo};
use std::sync::Arc;

/// 以类型方式注册时传递给宿主的类型引用
#[derive(Debug, Clone, Copy)]
pub struct ClassRef<'a> {
    /// 类型信息
    pub type_info: &'a TypeInfo,
    /// 类型上声明的注解
    pub annotations: &'a [Annotation],
}

impl<'a> ClassRef<'a> {
    /// 创建类型引用
    pub fn new(type_info: &'a TypeInfo, annotations: &'a [Annotation]) -> Self {
        Self {
            type_info,
            annotations,
        }
    }

    /// 查找指定名称注解的值
    pub fn annotation_value(&self, name: &str) -> Option<&'a str> {
        self.annotations
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }
}

/// 引导阶段上下文
pub trait BootstrapContext: Send {
    /// 添加功能包
    fn add_bundle(&mut self, bundle: Arc<dyn Bundle>) -> Result<(), RegistrationError>;
}

/// 运行阶段环境
pub trait Environment: Send {
    /// 注册健康检查
    fn add_health_check(
        &mut self,
        name: &str,
        check: Arc<dyn HealthCheck>,
    ) -> Result<(), RegistrationError>;

    /// 注册 Provider 类型
    fn register_provider_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError>;

    /// 注册可注入提供者类型
    fn register_injectable_provider_class(
        &mut self,
        class: ClassRef<'_>,
    ) -> Result<(), RegistrationError>;

    /// 注册 Resource 类型
    fn register_resource_class(&mut self, class: ClassRef<'_>) -> Result<(), RegistrationError>;

    /// 添加管理端任务
    fn add_task(&mut self, task: Arc<dyn Task>) -> Result<(), RegistrationError>;

    /// 添加托管对象
    fn add_managed(&mut self, managed: Arc<dyn Managed>) -> Result<(), RegistrationError>;
}
