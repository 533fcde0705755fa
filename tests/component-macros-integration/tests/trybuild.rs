//! trybuild compile-time tests for component_macros

#[test]
fn trybuild_discoverable() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/discoverable_ok.rs");
    t.pass("tests/trybuild/discoverable_markers.rs");
}
