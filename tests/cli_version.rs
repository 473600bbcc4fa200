mod common;

use common::*;

#[test]
fn version_prints_package_version() {
    let env = TestEnv::new();

    let result = env.run(&["version"]);

    assert!(result.success);
    assert!(result
        .stdout
        .starts_with(&format!("depgen {}\n", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn version_json_event() {
    let env = TestEnv::new();

    let result = env.run(&["version", "--json"]);

    assert!(result.success);
    let events = result.events_named("version");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], "depgen");
    assert_eq!(events[0]["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let env = TestEnv::new();

    let result = env.run(&[]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
