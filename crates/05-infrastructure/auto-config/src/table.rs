//! 全局类型表
//!
//! `#[discoverable]` 宏生成的构造函数在程序启动时把描述符写入此表。

use crate::descriptor::ClassDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static CLASS_TABLE: Lazy<RwLock<Vec<ClassDescriptor>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// 向全局类型表登记描述符
pub fn register_class(descriptor: ClassDescriptor) {
    CLASS_TABLE.write().push(descriptor);
}

/// 全局类型表的快照
pub fn registered_classes() -> Vec<ClassDescriptor> {
    CLASS_TABLE.read().clone()
}

/// 宏展开代码使用的父类型探测
///
/// 对每个父类型标记定义一对同名方法：`Via*` 只对实现了标记 trait 的类型
/// 在 `&Probe<T>` 上实现，`No*` 对所有 `Probe<T>` 实现。以 `(&&probe)`
/// 调用时方法解析优先选中 `Via*`，否则退回 `No*`。
pub mod probe {
    use crate::descriptor::Supertype;
    use host_abstractions::{Bundle, HealthCheck, InjectableProvider, Managed, Task};
    use std::marker::PhantomData;

    /// 探测目标类型
    pub struct Probe<T>(PhantomData<T>);

    impl<T> Probe<T> {
        /// 创建探测器
        pub fn new() -> Self {
            Probe(PhantomData)
        }
    }

    impl<T> Default for Probe<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    macro_rules! supertype_probe {
        ($via:ident, $no:ident, $method:ident, $marker:ident) => {
            pub trait $via {
                fn $method(&self) -> Option<Supertype>;
            }

            impl<T: $marker> $via for &Probe<T> {
                fn $method(&self) -> Option<Supertype> {
                    Some(Supertype::$method::<T>())
                }
            }

            pub trait $no {
                fn $method(&self) -> Option<Supertype>;
            }

            impl<T> $no for Probe<T> {
                fn $method(&self) -> Option<Supertype> {
                    None
                }
            }
        };
    }

    supertype_probe!(ViaBundle, NoBundle, bundle, Bundle);
    supertype_probe!(ViaHealthCheck, NoHealthCheck, health_check, HealthCheck);
    supertype_probe!(
        ViaInjectableProvider,
        NoInjectableProvider,
        injectable_provider,
        InjectableProvider
    );
    supertype_probe!(ViaManaged, NoManaged, managed, Managed);
    supertype_probe!(ViaTask, NoTask, task, Task);
}

#[cfg(test)]
mod tests {
    use super::probe::*;
    use super::*;
    use host_abstractions::InjectableProvider;
    use infrastructure_common::{Discovered, SupertypeKind, TypeInfo};

    struct Plain;

    struct TokenProvider;

    impl Discovered for TokenProvider {}

    impl InjectableProvider for TokenProvider {
        fn provided_type(&self) -> &'static str {
            "Token"
        }
    }

    #[test]
    fn test_probe_detects_implemented_markers() {
        let probe = Probe::<TokenProvider>::new();
        let found: Vec<SupertypeKind> = [
            (&&probe).bundle(),
            (&&probe).health_check(),
            (&&probe).injectable_provider(),
            (&&probe).managed(),
            (&&probe).task(),
        ]
        .into_iter()
        .flatten()
        .map(|s| s.kind())
        .collect();

        assert_eq!(found, vec![SupertypeKind::InjectableProvider]);

        let plain = Probe::<Plain>::new();
        assert!((&&plain).bundle().is_none());
        assert!((&&plain).task().is_none());
    }

    #[test]
    fn test_register_class_appends_to_table() {
        struct Registered;

        register_class(ClassDescriptor::new(TypeInfo::named::<Registered>(
            "auto_config::table::tests::Registered",
        )));

        assert!(registered_classes()
            .iter()
            .any(|d| d.name() == "auto_config::table::tests::Registered"));
    }
}
