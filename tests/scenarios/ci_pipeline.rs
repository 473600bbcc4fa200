//! Scenario: Manifest gate in CI
//!
//! Journey: A project adds `depgen check --strict` to CI, watches it fail on
//! a conflicting pin, fixes the manifest, and then publishes merged lists.
//!
//! Steps:
//! 1. `check` reports the conflict but passes
//! 2. `check --strict` fails with a non-zero exit
//! 3. The conflicting pin is aligned; strict check passes
//! 4. `resolve --merge` produces one list per combination

use crate::common::*;

#[test]
fn scenario_strict_gate_then_merged_lists() {
    let env = TestEnv::with_manifest(MANIFEST);

    // Step 1: conflicts are warnings by default
    let check = env.run(&["check"]);
    assert!(check.success, "stderr:\n{}", check.stderr);
    assert!(check.stdout.contains("conflicting specifiers"), "{}", check.stdout);

    // Step 2: strict turns them into a failure
    let strict = env.run(&["check", "--strict"]);
    assert!(!strict.success);
    assert_eq!(strict.exit_code, 1);
    assert!(strict.stderr.contains("Run without --strict"), "{}", strict.stderr);

    // Step 3: align the pin
    env.write_project_file(
        "dependencies.yaml",
        &MANIFEST.replace("cmake>=3.23", "cmake>=3.20"),
    );
    let strict = env.run(&["check", "--strict"]);
    assert!(strict.success, "stderr:\n{}", strict.stderr);

    // Step 4: merged lists for the conda environment
    let merged = env.run(&[
        "resolve",
        "-f",
        "build,test",
        "-o",
        "conda",
        "--merge",
        "--matrix",
        "cuda=11.6;arch=arm64",
        "--strict",
    ]);
    assert!(merged.success, "stderr:\n{}", merged.stderr);
    assert_eq!(
        merged.stdout,
        "# build+test [conda] cuda=11.6 arch=arm64\ncmake>=3.20\nninja\ncudatoolkit=11.6\npytest\n"
    );
}

#[test]
fn scenario_include_cycle_is_caught_before_resolution() {
    let env = TestEnv::with_manifest(CYCLIC_MANIFEST);

    let check = env.run(&["check"]);
    let resolve = env.run(&["resolve"]);

    for result in [&check, &resolve] {
        assert!(!result.success);
        assert!(
            result.stderr.contains("include cycle detected: a → b → a"),
            "stderr:\n{}",
            result.stderr
        );
        assert!(!result.stdout.contains("# a"), "stdout:\n{}", result.stdout);
    }
}
