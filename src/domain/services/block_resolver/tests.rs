use super::*;
use crate::domain::entities::{CommonEntry, Selector, SpecificEntry, SpecificSequence};
use crate::domain::value_objects::AxisValue;

fn combo(pairs: &[(&str, Option<&str>)]) -> Combination {
    Combination::from_pairs(
        pairs
            .iter()
            .map(|(k, v)| (*k, AxisValue::from(v.map(str::to_string)))),
    )
}

fn specs(items: &[&str]) -> Vec<PackageEntry> {
    items.iter().map(|s| PackageEntry::from(*s)).collect()
}

fn strings(packages: Vec<&PackageEntry>) -> Vec<&str> {
    packages
        .into_iter()
        .filter_map(PackageEntry::as_spec)
        .map(|spec| spec.as_str())
        .collect()
}

fn cuda_block() -> DependencyBlock {
    DependencyBlock::new("cuda").with_specific(SpecificSequence::new(
        vec![OutputType::Conda],
        vec![
            SpecificEntry::new(
                Selector::exact([("cuda", AxisValue::value("11.5"))]),
                specs(&["cudatoolkit=11.5"]),
            ),
            SpecificEntry::new(
                Selector::exact([("cuda", AxisValue::value("11.6"))]),
                specs(&["cudatoolkit=11.6"]),
            ),
        ],
    ))
}

#[test]
fn picks_the_matching_cuda_row() {
    let block = cuda_block();
    let resolved = resolve_block(&block, OutputType::Conda, &combo(&[("cuda", Some("11.5"))]));
    assert_eq!(strings(resolved), vec!["cudatoolkit=11.5"]);
}

#[test]
fn all_matching_entries_contribute_not_only_the_most_specific() {
    let block = DependencyBlock::new("build").with_specific(SpecificSequence::new(
        vec![OutputType::Conda],
        vec![
            SpecificEntry::new(
                Selector::exact([("arch", AxisValue::value("x86_64"))]),
                specs(&["nvcomp"]),
            ),
            SpecificEntry::new(
                Selector::exact([
                    ("arch", AxisValue::value("x86_64")),
                    ("py", AxisValue::value("3.9")),
                ]),
                specs(&["some_amd64_39_build_dep"]),
            ),
            SpecificEntry::new(Selector::fallback(), specs(&["always"])),
        ],
    ));
    let resolved = resolve_block(
        &block,
        OutputType::Conda,
        &combo(&[("arch", Some("x86_64")), ("py", Some("3.9"))]),
    );
    assert_eq!(
        strings(resolved),
        vec!["nvcomp", "some_amd64_39_build_dep", "always"]
    );
}

#[test]
fn empty_fallback_contributes_nothing_extra() {
    let block = DependencyBlock::new("build").with_specific(SpecificSequence::new(
        vec![OutputType::Conda],
        vec![
            SpecificEntry::new(
                Selector::exact([
                    ("arch", AxisValue::value("x86_64")),
                    ("py", AxisValue::value("3.9")),
                ]),
                specs(&["some_amd64_39_build_dep"]),
            ),
            SpecificEntry::new(Selector::fallback(), vec![]),
        ],
    ));

    let arm = resolve_block(
        &block,
        OutputType::Conda,
        &combo(&[("arch", Some("arm64")), ("py", Some("3.9"))]),
    );
    assert!(arm.is_empty());

    let amd = resolve_block(
        &block,
        OutputType::Conda,
        &combo(&[("arch", Some("x86_64")), ("py", Some("3.9"))]),
    );
    assert_eq!(strings(amd), vec!["some_amd64_39_build_dep"]);
}

#[test]
fn common_comes_first_then_specific_rows() {
    let block = cuda_block().with_common(CommonEntry::new(
        vec![OutputType::Conda],
        specs(&["clang-tools=11.1.0", "spdlog>=1.8.5,<1.9"]),
    ));
    let resolved = resolve_block(&block, OutputType::Conda, &combo(&[("cuda", Some("11.6"))]));
    assert_eq!(
        strings(resolved),
        vec!["clang-tools=11.1.0", "spdlog>=1.8.5,<1.9", "cudatoolkit=11.6"]
    );
}

#[test]
fn no_matching_row_yields_only_common() {
    let block = cuda_block().with_common(CommonEntry::new(
        vec![OutputType::Conda],
        specs(&["clang-tools=11.1.0"]),
    ));
    let resolved = resolve_block(&block, OutputType::Conda, &combo(&[("cuda", Some("12.0"))]));
    assert_eq!(strings(resolved), vec!["clang-tools=11.1.0"]);
}

#[test]
fn output_type_scoping_filters_common_and_specific() {
    let block = cuda_block().with_common(CommonEntry::new(
        vec![OutputType::Requirements],
        specs(&["numpy"]),
    ));
    let combination = combo(&[("cuda", Some("11.5"))]);

    let conda = resolve_block(&block, OutputType::Conda, &combination);
    assert_eq!(strings(conda), vec!["cudatoolkit=11.5"]);

    let reqs = resolve_block(&block, OutputType::Requirements, &combination);
    assert_eq!(strings(reqs), vec!["numpy"]);
}

#[test]
fn block_level_restriction_excludes_everything() {
    let block = cuda_block()
        .with_common(CommonEntry::new(vec![OutputType::Pyproject], specs(&["x"])))
        .with_output_types(vec![OutputType::Conda]);
    let resolved = resolve_block(
        &block,
        OutputType::Pyproject,
        &combo(&[("cuda", Some("11.5"))]),
    );
    assert!(resolved.is_empty());
}

#[test]
fn duplicates_are_preserved_for_the_merge_engine() {
    let block = DependencyBlock::new("dup")
        .with_common(CommonEntry::new(vec![OutputType::Conda], specs(&["cmake"])))
        .with_specific(SpecificSequence::new(
            vec![OutputType::Conda],
            vec![SpecificEntry::new(Selector::fallback(), specs(&["cmake"]))],
        ));
    let resolved = resolve_block(&block, OutputType::Conda, &combo(&[]));
    assert_eq!(strings(resolved), vec!["cmake", "cmake"]);
}

#[test]
fn group_entries_are_carried_in_place() {
    let block = cuda_block().with_common(CommonEntry::new(
        vec![OutputType::Conda],
        vec![
            PackageEntry::from("numpy"),
            PackageEntry::group("pip", &["dgl"]),
        ],
    ));
    let resolved = resolve_block(&block, OutputType::Conda, &combo(&[("cuda", Some("11.5"))]));
    assert_eq!(
        resolved,
        vec![
            &PackageEntry::from("numpy"),
            &PackageEntry::group("pip", &["dgl"]),
            &PackageEntry::from("cudatoolkit=11.5"),
        ]
    );
}
