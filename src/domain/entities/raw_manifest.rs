//! Raw manifest tree
//!
//! The unvalidated configuration tree handed to the core by a
//! [`ManifestSource`](crate::domain::ports::ManifestSource). It mirrors the
//! shape of `dependencies.yaml` but is format-agnostic: any serde
//! deserializer that preserves map order can produce it.
//!
//! Nothing here is trusted. [`validate`](crate::domain::services::validate)
//! turns it into a [`Manifest`](super::Manifest).

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// An insertion-ordered string map.
///
/// Declaration order of axes, file keys and blocks is part of the output
/// contract, so raw maps keep the order the source wrote them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.0.push((key.into(), value));
    }

    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::new())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<RawScalar, V>()? {
                    let key = key
                        .0
                        .ok_or_else(|| de::Error::custom("map keys must not be null"))?;
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(de::Error::custom(format!("duplicate key '{}'", key)));
                    }
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

/// A string scalar that may be null.
///
/// Axis values and selector values are compared as strings. YAML reads an
/// unquoted `3.10` as the float `3.1` and `11.0` as `11`, so numbers and
/// booleans are rejected rather than turned back into text that no longer
/// matches what the author wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScalar(pub Option<String>);

impl RawScalar {
    pub fn null() -> Self {
        Self(None)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = RawScalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a quoted string or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawScalar::text(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RawScalar(Some(v)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Err(unquoted(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Err(unquoted(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Err(unquoted(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Err(unquoted(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawScalar::null())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawScalar::null())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                RawScalar::deserialize(d)
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn unquoted<E: de::Error>(value: impl fmt::Display) -> E {
    E::custom(format!(
        "unquoted value {value}: axis and selector values must be quoted strings (write \"3.10\", not 3.10)"
    ))
}

/// Output type declaration: a single name, a list of names, or `none`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawOutputTypes(pub Vec<String>);

impl RawOutputTypes {
    pub fn of(types: &[&str]) -> Self {
        Self(types.iter().map(|t| t.to_string()).collect())
    }
}

impl<'de> Deserialize<'de> for RawOutputTypes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OutputTypesVisitor;

        impl<'de> Visitor<'de> for OutputTypesVisitor {
            type Value = RawOutputTypes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an output type name or a list of output type names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == "none" {
                    Ok(RawOutputTypes(Vec::new()))
                } else {
                    Ok(RawOutputTypes(vec![v.to_string()]))
                }
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut types = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    if name != "none" {
                        types.push(name);
                    }
                }
                Ok(RawOutputTypes(types))
            }
        }

        deserializer.deserialize_any(OutputTypesVisitor)
    }
}

/// One item of a raw package list: a specifier, or a map of group key to
/// specifiers (`- pip: [dgl, pyg]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPackage {
    Spec(String),
    Groups(OrderedMap<Vec<String>>),
}

impl From<&str> for RawPackage {
    fn from(value: &str) -> Self {
        Self::Spec(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RawPackage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PackageVisitor;

        impl<'de> Visitor<'de> for PackageVisitor {
            type Value = RawPackage;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a package specifier or a map like `pip: [dgl]`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawPackage::Spec(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RawPackage::Spec(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
                let groups =
                    OrderedMap::<Vec<String>>::deserialize(de::value::MapAccessDeserializer::new(
                        access,
                    ))?;
                if groups.is_empty() {
                    return Err(de::Error::custom("package group map is empty"));
                }
                Ok(RawPackage::Groups(groups))
            }
        }

        deserializer.deserialize_any(PackageVisitor)
    }
}

/// Top-level configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawManifest {
    /// Axis registry: axis name -> declared values (`null` = absent)
    #[serde(default)]
    pub matrix: OrderedMap<Vec<RawScalar>>,

    /// File keys
    #[serde(default)]
    pub files: OrderedMap<RawFileKey>,

    /// Named dependency blocks
    #[serde(default)]
    pub dependencies: OrderedMap<RawBlock>,

    /// Conda channels; carried for renderers, ignored by the resolver
    #[serde(default)]
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFileKey {
    pub output: RawOutputTypes,

    #[serde(default)]
    pub includes: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Optional restriction of the registry's axis values for this file key
    #[serde(default)]
    pub matrix: Option<OrderedMap<Vec<RawScalar>>>,

    /// Output locations and pyproject table; read by file writers, not the resolver
    #[serde(default)]
    pub conda_dir: Option<String>,

    #[serde(default)]
    pub requirements_dir: Option<String>,

    #[serde(default)]
    pub pyproject_dir: Option<String>,

    #[serde(default)]
    pub extras: Option<RawExtras>,
}

/// Where a pyproject output lands: `table` (`project`, `build-system`,
/// `project.optional-dependencies`, ...) and, for some tables, `key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawExtras {
    pub table: String,

    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBlock {
    /// Optional block-level restriction; absent means every output type
    #[serde(default)]
    pub output_types: Option<RawOutputTypes>,

    #[serde(default)]
    pub common: Vec<RawCommonEntry>,

    #[serde(default)]
    pub specific: Vec<RawSpecificSequence>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCommonEntry {
    pub output_types: RawOutputTypes,

    #[serde(default)]
    pub packages: Option<Vec<RawPackage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpecificSequence {
    pub output_types: RawOutputTypes,

    #[serde(default)]
    pub matrices: Vec<RawSpecificEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpecificEntry {
    /// Selector; `null` or `{}` is the fallback
    #[serde(default)]
    pub matrix: Option<OrderedMap<RawScalar>>,

    /// `null` is an explicit empty list
    #[serde(default)]
    pub packages: Option<Vec<RawPackage>>,
}
