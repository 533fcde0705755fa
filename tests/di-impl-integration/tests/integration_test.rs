//! Centralized integration tests for di-impl crate
//!
//! 覆盖构造函数注入、循环依赖检测以及类型擦除绑定

use di_abstractions::{erase_factory, Injector, InjectorExt};
use di_impl::DiContainerImpl;
use infrastructure_common::{DependencyError, TypeInfo};
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug)]
struct Settings {
    url: String,
}

#[derive(Debug)]
struct ConnectionPool {
    settings: Arc<Settings>,
}

#[derive(Debug)]
struct UserRepository {
    pool: Arc<ConnectionPool>,
}

#[derive(Debug)]
struct Ping;

#[derive(Debug)]
struct Pong;

#[test]
fn test_constructor_injection_graph() {
    let container = DiContainerImpl::builder()
        .singleton(Settings {
            url: "postgres://localhost/app".to_string(),
        })
        .lazy_singleton(|injector| {
            Ok(ConnectionPool {
                settings: injector.get::<Settings>()?,
            })
        })
        .transient(|injector| {
            Ok(UserRepository {
                pool: injector.get::<ConnectionPool>()?,
            })
        })
        .build();

    let first = container.get::<UserRepository>().unwrap();
    let second = container.get::<UserRepository>().unwrap();

    assert_eq!(first.pool.settings.url, "postgres://localhost/app");
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.pool, &second.pool));
}

#[test]
fn test_missing_nested_dependency_fails() {
    let container = DiContainerImpl::builder()
        .transient(|injector| {
            Ok(ConnectionPool {
                settings: injector.get::<Settings>()?,
            })
        })
        .build();

    let err = container.get::<ConnectionPool>().unwrap_err();
    match err {
        DependencyError::ComponentNotRegistered { type_name } => {
            assert!(type_name.ends_with("Settings"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_circular_dependency_detected() {
    let container = DiContainerImpl::builder()
        .transient(|injector| {
            injector.get::<Pong>()?;
            Ok(Ping)
        })
        .transient(|injector| {
            injector.get::<Ping>()?;
            Ok(Pong)
        })
        .build();

    let err = container.get::<Ping>().unwrap_err();
    assert!(matches!(err, DependencyError::CircularDependency { .. }));

    // 失败后解析链已经清空，再次解析得到同样的错误而不是深度溢出
    let again = container.get::<Ping>().unwrap_err();
    assert!(matches!(again, DependencyError::CircularDependency { .. }));
}

#[test]
fn test_erased_factory_binding() {
    let mut container = DiContainerImpl::new();
    let type_info = TypeInfo::named::<Ping>("demo::Ping");
    container.bind_factory(type_info.clone(), erase_factory(|_| Ok(Ping)));

    assert!(container.has_binding(TypeId::of::<Ping>()));
    let instance = container.get_instance(&type_info).unwrap();
    assert!(instance.downcast::<Ping>().is_ok());

    let registered = container.registered_types();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].name, "demo::Ping");
}
