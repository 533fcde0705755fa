//! 注册分发
//!
//! 按类别调用宿主的注册方法。每次成功注册后输出一条 `Added <label>: <name>` 日志。

use crate::descriptor::{ClassDescriptor, Supertype};
use crate::resolver::InstanceResolver;
use host_abstractions::{BootstrapContext, ClassRef, Environment};
use infrastructure_common::{
    AutoConfigError, CapabilityCategory, DependencyError, Marker, RegistrationStyle, SupertypeKind,
};
use tracing::info;

/// 引导阶段注册，只处理功能包
pub fn register_bootstrap(
    bootstrap: &mut dyn BootstrapContext,
    resolver: &InstanceResolver<'_>,
    category: CapabilityCategory,
    descriptor: &ClassDescriptor,
) -> Result<(), AutoConfigError> {
    match (category, descriptor.supertype(SupertypeKind::Bundle)) {
        (CapabilityCategory::Bundle, Some(Supertype::Bundle(cast))) => {
            let bundle = resolver.resolve_as(descriptor, "Bundle", *cast)?;
            bootstrap.add_bundle(bundle)?;
        }
        _ => return Err(unsupported(category, descriptor)),
    }

    log_added(category, descriptor);
    Ok(())
}

/// 运行阶段注册
///
/// 按能力表中的注册方式分派：类型方式直接登记类型，不经过注入器；
/// 实例方式先解析实例再注册。
pub fn register_run(
    environment: &mut dyn Environment,
    resolver: &InstanceResolver<'_>,
    category: CapabilityCategory,
    descriptor: &ClassDescriptor,
) -> Result<(), AutoConfigError> {
    match category.style() {
        RegistrationStyle::Class => register_class(environment, category, descriptor)?,
        RegistrationStyle::Instance => {
            register_instance(environment, resolver, category, descriptor)?;
        }
    }

    log_added(category, descriptor);
    Ok(())
}

fn register_class(
    environment: &mut dyn Environment,
    category: CapabilityCategory,
    descriptor: &ClassDescriptor,
) -> Result<(), AutoConfigError> {
    let class = ClassRef::new(&descriptor.type_info, &descriptor.annotations);

    match category {
        CapabilityCategory::Provider => environment.register_provider_class(class)?,
        CapabilityCategory::InjectableProvider => {
            environment.register_injectable_provider_class(class)?;
        }
        CapabilityCategory::Resource => environment.register_resource_class(class)?,
        _ => return Err(unsupported(category, descriptor)),
    }
    Ok(())
}

fn register_instance(
    environment: &mut dyn Environment,
    resolver: &InstanceResolver<'_>,
    category: CapabilityCategory,
    descriptor: &ClassDescriptor,
) -> Result<(), AutoConfigError> {
    let supertype = match category.marker() {
        Marker::Supertype(kind) => descriptor.supertype(kind),
        Marker::Annotation(_) => None,
    };

    match (category, supertype) {
        (CapabilityCategory::HealthCheck, Some(Supertype::HealthCheck(cast))) => {
            let check = resolver.resolve_as(descriptor, "HealthCheck", *cast)?;
            let name = check.name();
            environment.add_health_check(&name, check)?;
        }
        (CapabilityCategory::Task, Some(Supertype::Task(cast))) => {
            let task = resolver.resolve_as(descriptor, "Task", *cast)?;
            environment.add_task(task)?;
        }
        (CapabilityCategory::Managed, Some(Supertype::Managed(cast))) => {
            let managed = resolver.resolve_as(descriptor, "Managed", *cast)?;
            environment.add_managed(managed)?;
        }
        _ => return Err(unsupported(category, descriptor)),
    }
    Ok(())
}

fn log_added(category: CapabilityCategory, descriptor: &ClassDescriptor) {
    info!("Added {}: {}", category.label(), descriptor.name());
}

fn unsupported(category: CapabilityCategory, descriptor: &ClassDescriptor) -> AutoConfigError {
    DependencyError::TypeMismatch {
        expected: category.label().to_string(),
        actual: descriptor.name().to_string(),
    }
    .into()
}
