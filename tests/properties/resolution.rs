//! Property tests for block resolution and merging.

use proptest::prelude::*;

use depgen::domain::entities::RawManifest;
use depgen::{validate, Engine, OutputType, ResolvePolicy};

/// One specific entry: `None` is the fallback, `Some(k)` selects `a0=v{k}`.
#[derive(Debug, Clone)]
struct Entry {
    value: Option<usize>,
    packages: Vec<String>,
}

#[derive(Debug, Clone)]
struct Block {
    common: Vec<String>,
    specific: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Model {
    a0: usize,
    a1: usize,
    blocks: Vec<Block>,
}

fn package() -> impl Strategy<Value = String> {
    prop_oneof![
        "p[0-5]",
        "p[0-5]>=1\\.[0-2]",
    ]
}

fn packages() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(package(), 0..=4)
}

fn model() -> impl Strategy<Value = Model> {
    (1usize..=3, 1usize..=3).prop_flat_map(|(a0, a1)| {
        // Selectors are unique within one specific list: slot 0 is the
        // fallback, slot k + 1 selects `a0=v{k}`.
        let specific = proptest::collection::vec(proptest::option::of(packages()), a0 + 1)
            .prop_map(|slots| {
                slots
                    .into_iter()
                    .enumerate()
                    .filter_map(|(slot, packages)| {
                        packages.map(|packages| Entry {
                            value: slot.checked_sub(1),
                            packages,
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .prop_shuffle();
        let block = (packages(), specific)
            .prop_map(|(common, specific)| Block { common, specific });
        proptest::collection::vec(block, 1..=3).prop_map(move |blocks| Model { a0, a1, blocks })
    })
}

fn yaml_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn values(n: usize) -> String {
    let v: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
    format!("[{}]", v.join(", "))
}

fn to_yaml(model: &Model) -> String {
    let mut yaml = format!(
        "matrix:\n  a0: {}\n  a1: {}\nfiles:\n  f:\n    output: conda\n    dependencies: [{}]\ndependencies:\n",
        values(model.a0),
        values(model.a1),
        (0..model.blocks.len())
            .map(|i| format!("b{i}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    for (i, block) in model.blocks.iter().enumerate() {
        yaml.push_str(&format!("  b{i}:\n    common:\n"));
        yaml.push_str(&format!(
            "      - output_types: conda\n        packages: {}\n",
            yaml_list(&block.common)
        ));
        if block.specific.is_empty() {
            continue;
        }
        yaml.push_str("    specific:\n      - output_types: conda\n        matrices:\n");
        for entry in &block.specific {
            let selector = match entry.value {
                Some(k) => format!("{{a0: v{k}}}"),
                None => "{}".to_string(),
            };
            yaml.push_str(&format!(
                "          - matrix: {}\n            packages: {}\n",
                selector,
                yaml_list(&entry.packages)
            ));
        }
    }
    yaml
}

fn engine(model: &Model, parallel: bool) -> Engine {
    let raw: RawManifest = serde_yaml_ng::from_str(&to_yaml(model)).unwrap();
    let manifest = validate(&raw, ResolvePolicy::default()).unwrap();
    Engine::new(manifest).unwrap().with_parallel(parallel)
}

/// Concatenate contributions in block order, then keep first occurrences.
fn expected(model: &Model, a0: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for block in &model.blocks {
        let matching = block
            .specific
            .iter()
            .filter(|e| e.value.is_none() || e.value == Some(a0))
            .flat_map(|e| e.packages.iter());
        for package in block.common.iter().chain(matching) {
            if !out.contains(package) {
                out.push(package.clone());
            }
        }
    }
    out
}

fn a0_index(result: &depgen::ResolvedResult) -> usize {
    let value = result.combination.get("a0").unwrap().to_string();
    value.trim_start_matches('v').parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every list equals the deduped, ordered concatenation of all
    /// matching entries, with the fallback contributing everywhere.
    #[test]
    fn property_resolution_matches_model(model in model()) {
        let results = engine(&model, false).resolve_all("f", OutputType::Conda, None).unwrap();

        prop_assert_eq!(results.len(), model.a0 * model.a1);
        for result in &results {
            let packages: Vec<String> = result.specifiers().map(str::to_string).collect();
            prop_assert_eq!(packages, expected(&model, a0_index(result)));
        }
    }

    /// PROPERTY: Resolved lists never hold the same specifier twice.
    #[test]
    fn property_lists_are_unique(model in model()) {
        let results = engine(&model, false).resolve_all("f", OutputType::Conda, None).unwrap();

        for result in &results {
            let mut specs: Vec<&str> = result.specifiers().collect();
            let total = specs.len();
            specs.sort_unstable();
            specs.dedup();
            prop_assert_eq!(specs.len(), total);
        }
    }

    /// PROPERTY: Fanning out over the thread pool does not change the output.
    #[test]
    fn property_parallel_matches_sequential(model in model()) {
        let sequential = engine(&model, false).resolve_all("f", OutputType::Conda, None).unwrap();
        let parallel = engine(&model, true).resolve_all("f", OutputType::Conda, None).unwrap();

        prop_assert_eq!(sequential, parallel);
    }

    /// PROPERTY: Axes no selector mentions do not change the list.
    #[test]
    fn property_unmentioned_axis_is_irrelevant(model in model()) {
        let results = engine(&model, false).resolve_all("f", OutputType::Conda, None).unwrap();

        for row in results.chunks(model.a1) {
            for result in row {
                prop_assert_eq!(&result.packages, &row[0].packages);
            }
        }
    }

    /// PROPERTY: An output type no entry names resolves to empty lists.
    #[test]
    fn property_other_output_type_is_empty(model in model()) {
        let results = engine(&model, false)
            .resolve_all("f", OutputType::Requirements, None)
            .unwrap();

        prop_assert_eq!(results.len(), model.a0 * model.a1);
        prop_assert!(results.iter().all(|r| r.is_empty()));
    }
}
