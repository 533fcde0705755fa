//! 依赖注入实现的集成测试

use di_abstractions::{Injector, InjectorExt};
use di_impl::{ContainerConfig, DiContainerImpl};
use infrastructure_common::{DependencyError, TypeInfo};
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 测试组件
#[derive(Debug)]
struct TestService {
    name: String,
}

impl TestService {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[test]
fn test_singleton_instance_resolution() {
    let mut container = DiContainerImpl::new();
    container.bind_instance(TestService::new("test"));

    assert!(container.is_registered::<TestService>());
    assert!(container.has_binding(TypeId::of::<TestService>()));

    let first = container.get::<TestService>().unwrap();
    let second = container.get::<TestService>().unwrap();
    assert_eq!(first.name, "test");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_transient_factory_creates_fresh_instances() {
    let created = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&created);

    let mut container = DiContainerImpl::new();
    container.bind(move |_| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        Ok(TestService::new(format!("instance-{n}")))
    });

    let first = container.get::<TestService>().unwrap();
    let second = container.get::<TestService>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.name, "instance-0");
    assert_eq!(second.name, "instance-1");
    assert_eq!(created.load(Ordering::SeqCst), 2);
}

#[test]
fn test_lazy_singleton_created_once() {
    let created = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&created);

    let mut container = DiContainerImpl::new();
    container.bind_lazy_singleton(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(TestService::new("lazy"))
    });
    assert_eq!(created.load(Ordering::SeqCst), 0);

    let first = container.get::<TestService>().unwrap();
    let second = container.get::<TestService>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(created.load(Ordering::SeqCst), 1);
}

#[test]
fn test_factory_error_propagates() {
    let mut container = DiContainerImpl::new();
    container.bind::<TestService, _>(|_| {
        Err(DependencyError::creation_failed(
            "TestService",
            "数据库不可用",
        ))
    });

    let err = container.get::<TestService>().unwrap_err();
    assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
    assert_eq!(container.stats().resolution_errors, 1);
}

#[test]
fn test_resolution_counts_per_type() {
    let mut container = DiContainerImpl::new();
    container.bind_instance(TestService::new("counted"));

    let type_info = TypeInfo::named::<TestService>("demo::TestService");
    container.get_instance(&type_info).unwrap();
    container.get_instance(&type_info).unwrap();

    assert_eq!(container.resolution_count(TypeId::of::<TestService>()), 2);
    assert_eq!(container.resolution_count(TypeId::of::<String>()), 0);
    assert_eq!(container.stats().resolved_components, 2);
}

#[test]
fn test_depth_limit_from_config() {
    #[derive(Debug)]
    struct Outer(Arc<TestService>);

    let mut container = DiContainerImpl::with_config(ContainerConfig {
        max_resolution_depth: 1,
    });
    container.bind_instance(TestService::new("inner"));
    container.bind(|injector| Ok(Outer(injector.get::<TestService>()?)));

    let err = container.get::<Outer>().unwrap_err();
    assert!(matches!(
        err,
        DependencyError::ResolutionDepthExceeded { max_depth: 1, .. }
    ));
}
