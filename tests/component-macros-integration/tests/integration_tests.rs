//! 类型登记宏集成测试

use auto_config::{registered_classes, ClassDescriptor, StaticClassSource, AutoConfig};
use infrastructure_common::{annotations, Discovered, SupertypeKind};
use std::any::TypeId;

mod jobs {
    use async_trait::async_trait;
    use component_macros::discoverable;
    use host_abstractions::{BoxError, Task, TaskParams};

    #[discoverable]
    #[derive(Debug, Default)]
    pub struct NightlyReport {
        pub recipients: Vec<String>,
    }

    #[async_trait]
    impl Task for NightlyReport {
        fn name(&self) -> String {
            "nightly-report".to_string()
        }

        async fn execute(&self, _params: &TaskParams) -> Result<String, BoxError> {
            Ok(self.recipients.join(";"))
        }
    }

    #[discoverable(abstract)]
    pub struct ReportBase;

    pub mod nested {
        use component_macros::discoverable;

        #[discoverable]
        pub struct NightlyReport;
    }
}

mod api {
    use component_macros::discoverable;
    use host_abstractions::InjectableProvider;

    #[discoverable(path = "/users/{id}")]
    pub struct UserResource;

    #[discoverable(provider, name = "ErrorMapper")]
    pub struct DefaultErrorMapper;

    #[discoverable]
    pub struct ClockProvider;

    impl InjectableProvider for ClockProvider {
        fn provided_type(&self) -> &'static str {
            "Clock"
        }
    }
}

fn find<T: 'static>() -> ClassDescriptor {
    registered_classes()
        .into_iter()
        .find(|d| d.type_info.id == TypeId::of::<T>())
        .expect("type should be registered")
}

fn assert_discovered<T: Discovered>() {}

#[test]
fn test_discovered_marker_is_implemented() {
    assert_discovered::<jobs::NightlyReport>();
    assert_discovered::<jobs::ReportBase>();
    assert_discovered::<api::UserResource>();
}

#[test]
fn test_fully_qualified_name_uses_module_path() {
    let report = find::<jobs::NightlyReport>();
    assert_eq!(
        report.type_info.name,
        "integration_tests::jobs::NightlyReport"
    );

    let nested = find::<jobs::nested::NightlyReport>();
    assert_eq!(
        nested.type_info.name,
        "integration_tests::jobs::nested::NightlyReport"
    );
}

#[test]
fn test_name_override() {
    let mapper = find::<api::DefaultErrorMapper>();
    assert_eq!(mapper.type_info.name, "integration_tests::api::ErrorMapper");
    assert!(mapper.has_annotation(annotations::PROVIDER));
    assert!(mapper.supertypes.is_empty());
}

#[test]
fn test_supertypes_are_detected() {
    let report = find::<jobs::NightlyReport>();
    assert!(report.has_supertype(SupertypeKind::Task));
    assert_eq!(report.supertypes.len(), 1);

    let clock = find::<api::ClockProvider>();
    assert!(clock.has_supertype(SupertypeKind::InjectableProvider));
}

#[test]
fn test_abstract_flag() {
    assert!(find::<jobs::ReportBase>().is_abstract);
    assert!(!find::<jobs::NightlyReport>().is_abstract);
}

#[test]
fn test_path_annotation_value() {
    let resource = find::<api::UserResource>();
    let path = resource
        .annotations
        .iter()
        .find(|a| a.name == annotations::PATH)
        .and_then(|a| a.value.clone());

    assert_eq!(path.as_deref(), Some("/users/{id}"));
    assert!(!resource.has_annotation(annotations::PROVIDER));
}

#[test]
fn test_registered_classes_match_catalog() {
    let engine = AutoConfig::new(&["integration_tests::jobs"]).unwrap();
    assert_eq!(
        engine.catalog().names(),
        vec![
            "integration_tests::jobs::NightlyReport",
            "integration_tests::jobs::ReportBase",
            "integration_tests::jobs::nested::NightlyReport",
        ]
    );

    let fixed = StaticClassSource::new(vec![find::<api::UserResource>()]);
    let engine = AutoConfig::with_source(&["integration_tests"], &fixed).unwrap();
    assert_eq!(engine.catalog().len(), 1);
}
