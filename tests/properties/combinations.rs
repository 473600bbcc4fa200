//! Property tests for the combination generator.

use proptest::prelude::*;

use depgen::domain::entities::{Axis, AxisRegistry, MatrixFilter};
use depgen::AxisValue;

/// Value counts per axis; axis `i` is named `a{i}` with values `v0..vN`.
fn shape() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..=4, 0..=4)
}

fn registry(shape: &[usize]) -> AxisRegistry {
    let axes = shape
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            Axis::new(
                format!("a{i}"),
                (0..n).map(|v| AxisValue::value(format!("v{v}"))).collect(),
            )
        })
        .collect();
    AxisRegistry::new(axes).unwrap()
}

/// Index vectors in nested-loop order, last axis fastest.
fn odometer(shape: &[usize]) -> Vec<Vec<usize>> {
    let mut out = vec![Vec::new()];
    for &n in shape {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..n).map(move |v| {
                    let mut next = prefix.clone();
                    next.push(v);
                    next
                })
            })
            .collect();
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The space yields exactly the product of the value counts.
    #[test]
    fn property_count_is_product(shape in shape()) {
        let space = registry(&shape).space();
        let expected: usize = shape.iter().product();

        prop_assert_eq!(space.len(), expected);
        prop_assert_eq!(space.iter().count(), expected);
    }

    /// PROPERTY: Combinations come in odometer order over declaration order.
    #[test]
    fn property_odometer_order(shape in shape()) {
        let space = registry(&shape).space();

        let seen: Vec<Vec<String>> = space
            .iter()
            .map(|c| c.iter().map(|(_, v)| v.to_string()).collect())
            .collect();
        let expected: Vec<Vec<String>> = odometer(&shape)
            .into_iter()
            .map(|idx| idx.into_iter().map(|v| format!("v{v}")).collect())
            .collect();

        prop_assert_eq!(seen, expected);
    }

    /// PROPERTY: Every combination assigns every axis, in registry order.
    #[test]
    fn property_combinations_are_total(shape in shape()) {
        let space = registry(&shape).space();
        let names: Vec<String> = (0..shape.len()).map(|i| format!("a{i}")).collect();

        for combination in &space {
            let axes: Vec<&str> = combination.iter().map(|(a, _)| a).collect();
            prop_assert_eq!(axes, names.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    /// PROPERTY: Iteration is restartable and deterministic.
    #[test]
    fn property_iteration_is_repeatable(shape in shape()) {
        let space = registry(&shape).space();

        let first: Vec<_> = space.iter().collect();
        let second: Vec<_> = space.iter().collect();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Narrowing keeps declaration order, whatever order the filter uses.
    #[test]
    fn property_narrowing_keeps_declaration_order(
        shape in proptest::collection::vec(1usize..=4, 1..=3),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..=4),
    ) {
        let space = registry(&shape).space();
        let n = shape[0];
        let mut allowed: Vec<usize> = picks.iter().map(|i| i.index(n)).collect();
        allowed.reverse();
        let filter = MatrixFilter::new().with_axis(
            "a0",
            allowed.iter().map(|v| AxisValue::value(format!("v{v}"))).collect(),
        );

        let narrowed = space.restrict(&filter).unwrap();
        let kept: Vec<String> = narrowed
            .values_of("a0")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut expected: Vec<usize> = allowed.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(
            kept,
            expected.into_iter().map(|v| format!("v{v}")).collect::<Vec<_>>()
        );
        prop_assert_eq!(narrowed.iter().count(), narrowed.len());
    }
}
