use async_trait::async_trait;
use component_macros::discoverable;
use host_abstractions::{BoxError, Bundle, Managed, Task, TaskParams};
use infrastructure_common::SupertypeKind;

#[discoverable]
pub struct Worker;

#[async_trait]
impl Task for Worker {
    fn name(&self) -> String {
        "worker".to_string()
    }

    async fn execute(&self, _params: &TaskParams) -> Result<String, BoxError> {
        Ok(String::new())
    }
}

#[async_trait]
impl Managed for Worker {
    async fn start(&self) -> Result<(), BoxError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

#[discoverable]
pub struct Setup;

impl Bundle for Setup {}

fn main() {
    let classes = auto_config::registered_classes();
    let worker = classes
        .iter()
        .find(|d| d.type_info.name.ends_with("::Worker"))
        .expect("worker registered");

    assert!(worker.has_supertype(SupertypeKind::Task));
    assert!(worker.has_supertype(SupertypeKind::Managed));
    assert!(!worker.has_supertype(SupertypeKind::Bundle));
}
