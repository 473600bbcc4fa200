//! Combinations and the combination generator
//!
//! A [`Combination`] assigns exactly one value to every declared axis. A
//! [`CombinationSpace`] holds the candidate values per axis and lazily yields
//! the cross product in odometer order: the first-declared axis varies
//! slowest, the last-declared axis fastest. The order depends only on
//! declaration order, so identical manifests always produce identical output.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::errors::FilterError;
use crate::domain::value_objects::AxisValue;

use super::matrix_filter::MatrixFilter;

/// One concrete assignment of a value to every axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    names: Arc<[String]>,
    values: Vec<AxisValue>,
}

impl Combination {
    /// Build a combination from explicit (axis, value) pairs.
    ///
    /// Pairs are kept in the given order; callers resolving against a
    /// manifest should list axes in registry order.
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, AxisValue)>,
    {
        let (names, values): (Vec<String>, Vec<AxisValue>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Self {
            names: Arc::from(names),
            values,
        }
    }

    /// The combination of a manifest with no axes.
    pub fn empty() -> Self {
        Self::from_pairs(Vec::<(String, AxisValue)>::new())
    }

    pub fn get(&self, axis: &str) -> Option<&AxisValue> {
        self.names
            .iter()
            .position(|n| n == axis)
            .map(|idx| &self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisValue)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (axis, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", axis, value)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis, value)?;
        }
        map.end()
    }
}

/// Candidate values per axis, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpace {
    names: Arc<[String]>,
    values: Vec<Vec<AxisValue>>,
}

impl CombinationSpace {
    pub(crate) fn new(names: Arc<[String]>, values: Vec<Vec<AxisValue>>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Number of combinations the space yields (the product of value counts).
    pub fn len(&self) -> usize {
        self.values
            .iter()
            .fold(1usize, |acc, v| acc.saturating_mul(v.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values still allowed for `axis`.
    pub fn values_of(&self, axis: &str) -> Option<&[AxisValue]> {
        self.names
            .iter()
            .position(|n| n == axis)
            .map(|idx| self.values[idx].as_slice())
    }

    /// Narrow the space to the values named by `filter`.
    ///
    /// Values keep their declaration order regardless of the order the
    /// filter lists them in. Axes the filter does not mention are untouched.
    /// An axis listed with no values is rejected, like an empty declaration.
    pub fn restrict(&self, filter: &MatrixFilter) -> Result<Self, FilterError> {
        let mut values = self.values.clone();
        for (axis, allowed) in filter.iter() {
            let idx = self
                .names
                .iter()
                .position(|n| n == axis)
                .ok_or_else(|| FilterError::UnknownAxis {
                    axis: axis.to_string(),
                })?;
            if allowed.is_empty() {
                return Err(FilterError::EmptyValues {
                    axis: axis.to_string(),
                });
            }
            if let Some(unknown) = allowed.iter().find(|v| !self.values[idx].contains(v)) {
                return Err(FilterError::UnknownValue {
                    axis: axis.to_string(),
                    value: unknown.to_string(),
                });
            }
            values[idx].retain(|v| allowed.contains(v));
        }
        Ok(Self {
            names: Arc::clone(&self.names),
            values,
        })
    }

    /// Like [`restrict`](Self::restrict), but axes and values the space does
    /// not hold are ignored instead of rejected.
    pub fn narrow(&self, filter: &MatrixFilter) -> Self {
        let mut values = self.values.clone();
        for (axis, allowed) in filter.iter() {
            if let Some(idx) = self.names.iter().position(|n| n == axis) {
                values[idx].retain(|v| allowed.contains(v));
            }
        }
        Self {
            names: Arc::clone(&self.names),
            values,
        }
    }

    /// Lazily iterate the cross product. Restartable: every call starts over.
    pub fn iter(&self) -> Combinations<'_> {
        let cursor = if self.values.iter().any(Vec::is_empty) {
            None
        } else {
            Some(vec![0; self.values.len()])
        };
        Combinations {
            space: self,
            cursor,
        }
    }
}

impl<'a> IntoIterator for &'a CombinationSpace {
    type Item = Combination;
    type IntoIter = Combinations<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the combinations of a [`CombinationSpace`].
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    space: &'a CombinationSpace,
    cursor: Option<Vec<usize>>,
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;

        let combination = Combination {
            names: Arc::clone(&self.space.names),
            values: cursor
                .iter()
                .zip(&self.space.values)
                .map(|(&i, values)| values[i].clone())
                .collect(),
        };

        // Odometer step: bump the last axis, carrying leftwards.
        let mut exhausted = true;
        for axis in (0..cursor.len()).rev() {
            cursor[axis] += 1;
            if cursor[axis] < self.space.values[axis].len() {
                exhausted = false;
                break;
            }
            cursor[axis] = 0;
        }
        if exhausted {
            self.cursor = None;
        }

        Some(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Axis, AxisRegistry};

    fn registry(axes: &[(&str, &[Option<&str>])]) -> AxisRegistry {
        AxisRegistry::new(
            axes.iter()
                .map(|(name, values)| {
                    Axis::new(
                        *name,
                        values
                            .iter()
                            .map(|v| AxisValue::from(v.map(str::to_string)))
                            .collect(),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn zero_axes_yield_one_empty_combination() {
        let space = AxisRegistry::default().space();
        let all: Vec<Combination> = space.iter().collect();
        assert_eq!(all, vec![Combination::empty()]);
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn first_axis_varies_slowest() {
        let reg = registry(&[
            ("arch", &[Some("x86_64"), Some("arm64")]),
            ("py", &[Some("3.9"), None]),
        ]);
        let rendered: Vec<String> = reg.space().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "arch=x86_64 py=3.9",
                "arch=x86_64 py=null",
                "arch=arm64 py=3.9",
                "arch=arm64 py=null",
            ]
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let reg = registry(&[("cuda", &[Some("11.5"), Some("11.6")])]);
        let space = reg.space();
        let first: Vec<Combination> = space.iter().collect();
        let second: Vec<Combination> = space.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn get_returns_axis_value() {
        let reg = registry(&[("cuda", &[Some("11.5")]), ("py", &[None])]);
        let combo = reg.space().iter().next().unwrap();
        assert_eq!(combo.get("cuda"), Some(&AxisValue::value("11.5")));
        assert_eq!(combo.get("py"), Some(&AxisValue::Absent));
        assert_eq!(combo.get("arch"), None);
    }

    #[test]
    fn restrict_keeps_declaration_order() {
        let reg = registry(&[("cuda", &[Some("11.2"), Some("11.5"), Some("11.8")])]);
        let filter = MatrixFilter::new().with_axis(
            "cuda",
            vec![AxisValue::value("11.8"), AxisValue::value("11.2")],
        );
        let restricted = reg.space().restrict(&filter).unwrap();
        assert_eq!(
            restricted.values_of("cuda").unwrap(),
            &[AxisValue::value("11.2"), AxisValue::value("11.8")]
        );
    }

    #[test]
    fn restrict_rejects_unknown_axis_and_value() {
        let reg = registry(&[("cuda", &[Some("11.5")])]);
        let space = reg.space();

        let unknown_axis = MatrixFilter::new().with_axis("arch", vec![AxisValue::value("arm64")]);
        assert_eq!(
            space.restrict(&unknown_axis).unwrap_err(),
            FilterError::UnknownAxis {
                axis: "arch".to_string()
            }
        );

        let unknown_value = MatrixFilter::new().with_axis("cuda", vec![AxisValue::value("12.0")]);
        assert_eq!(
            space.restrict(&unknown_value).unwrap_err(),
            FilterError::UnknownValue {
                axis: "cuda".to_string(),
                value: "12.0".to_string()
            }
        );
    }

    #[test]
    fn restrict_rejects_axis_with_no_values() {
        let reg = registry(&[("cuda", &[Some("11.5")])]);
        let empty = MatrixFilter::new().with_axis("cuda", Vec::new());
        assert_eq!(
            reg.space().restrict(&empty).unwrap_err(),
            FilterError::EmptyValues {
                axis: "cuda".to_string()
            }
        );
    }

    #[test]
    fn narrow_can_empty_the_space() {
        let reg = registry(&[
            ("cuda", &[Some("11.5"), Some("11.6")]),
            ("arch", &[Some("x86_64")]),
        ]);
        let only_115 = MatrixFilter::new().with_axis("cuda", vec![AxisValue::value("11.5")]);
        let only_116 = MatrixFilter::new().with_axis("cuda", vec![AxisValue::value("11.6")]);

        let narrowed = reg.space().narrow(&only_115);
        assert_eq!(narrowed.len(), 1);

        let disjoint = narrowed.narrow(&only_116);
        assert!(disjoint.is_empty());
        assert_eq!(disjoint.iter().count(), 0);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let combo = Combination::from_pairs([
            ("cuda", AxisValue::value("11.8")),
            ("arch", AxisValue::value("x86_64")),
            ("py", AxisValue::Absent),
        ]);
        assert_eq!(
            serde_json::to_string(&combo).unwrap(),
            r#"{"cuda":"11.8","arch":"x86_64","py":null}"#
        );
    }
}
