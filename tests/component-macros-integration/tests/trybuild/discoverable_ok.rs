use component_macros::discoverable;

#[discoverable]
struct Plain;

#[discoverable(abstract)]
pub struct BaseTask;

#[discoverable(path = "/orders", provider)]
pub struct OrdersResource {
    _limit: usize,
}

#[discoverable(name = "Renamed")]
pub struct Original(u32);

#[discoverable]
pub struct DemoTask;

#[discoverable]
pub struct Demotask;

fn main() {
    let _ = (Plain, BaseTask, OrdersResource { _limit: 10 }, Original(1));
    let _ = (DemoTask, Demotask);

    let classes = auto_config::registered_classes();
    assert!(classes.iter().any(|d| d.type_info.name.ends_with("::Renamed")));
    assert!(!classes.iter().any(|d| d.type_info.name.ends_with("::Original")));
    assert!(classes.iter().any(|d| d.type_info.name.ends_with("::DemoTask")));
    assert!(classes.iter().any(|d| d.type_info.name.ends_with("::Demotask")));
}
