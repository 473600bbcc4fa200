//! Matrix filter
//!
//! A partial restriction of axis values, used both by a file key's own
//! `matrix:` section and by the `--matrix` CLI option.

use crate::domain::errors::FilterError;
use crate::domain::value_objects::AxisValue;

/// Allowed values per axis. Axes not listed stay unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixFilter {
    axes: Vec<(String, Vec<AxisValue>)>,
}

impl MatrixFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: impl Into<String>, values: Vec<AxisValue>) -> Self {
        self.axes.push((axis.into(), values));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AxisValue])> {
        self.axes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Parse `cuda=11.5,11.6;arch=x86_64`.
    ///
    /// Axes are separated by `;`, values by `,`. `null` or `~` selects the
    /// absent value. Repeating an axis merges its values.
    pub fn parse(spec: &str) -> Result<Self, FilterError> {
        let mut filter = Self::new();
        for part in spec.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (axis, values) = part.split_once('=').ok_or_else(|| FilterError::Malformed {
                spec: spec.to_string(),
                reason: format!("'{}' is not of the form axis=value[,value]", part),
            })?;
            let axis = axis.trim();
            if axis.is_empty() {
                return Err(FilterError::Malformed {
                    spec: spec.to_string(),
                    reason: format!("'{}' has an empty axis name", part),
                });
            }
            let parsed: Vec<AxisValue> = values
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(AxisValue::parse_literal)
                .collect();
            if parsed.is_empty() {
                return Err(FilterError::Malformed {
                    spec: spec.to_string(),
                    reason: format!("axis '{}' lists no values", axis),
                });
            }

            match filter.axes.iter_mut().find(|(name, _)| name == axis) {
                Some((_, existing)) => {
                    for value in parsed {
                        if !existing.contains(&value) {
                            existing.push(value);
                        }
                    }
                }
                None => filter.axes.push((axis.to_string(), parsed)),
            }
        }
        Ok(filter)
    }
}

impl std::str::FromStr for MatrixFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
