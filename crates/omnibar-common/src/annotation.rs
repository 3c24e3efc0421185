//! Typed view of an NLU recognition result.
//!
//! The NLU service returns a loosely shaped document: entity keys map to lists
//! of mentions, and a mention may carry its own nested `entities` map holding
//! the parameters that belong to it alone. Nothing in that document is
//! guaranteed to be present, so every accessor here returns an `Option` or an
//! empty slice instead of failing.

use crate::entity::EntityKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One recognition result for one input sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTree {
    /// The sentence the NLU service was asked to classify.
    #[serde(rename = "_text", alias = "text", default)]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_entities")]
    pub entities: Entities,
}

impl AnnotationTree {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Entities::default(),
        }
    }

    pub fn with_entity(mut self, kind: EntityKind, occurrences: Vec<Occurrence>) -> Self {
        self.entities.insert(kind, occurrences);
        self
    }
}

/// Entity key to mentions, in the order the NLU service reported them.
///
/// Keys that are not an [`EntityKind`] or whose value is not a list are
/// dropped while deserializing, as are individual mentions that are not
/// objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entities(BTreeMap<EntityKind, Vec<Occurrence>>);

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EntityKind, occurrences: Vec<Occurrence>) {
        self.0.insert(kind, occurrences);
    }

    pub fn with(mut self, kind: EntityKind, occurrences: Vec<Occurrence>) -> Self {
        self.insert(kind, occurrences);
        self
    }

    /// True when the key was reported, even with no mentions.
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn get(&self, kind: EntityKind) -> &[Occurrence] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first(&self, kind: EntityKind) -> Option<&Occurrence> {
        self.get(kind).first()
    }

    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Entities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, Value> = BTreeMap::deserialize(deserializer)?;
        let entities = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let kind = key.parse::<EntityKind>().ok()?;
                let Value::Array(mentions) = value else {
                    return None;
                };
                // A mention that is not an object is dropped on its own; its
                // siblings under the same key are kept.
                let occurrences = mentions
                    .into_iter()
                    .filter_map(|mention| serde_json::from_value::<Occurrence>(mention).ok())
                    .collect();
                Some((kind, occurrences))
            })
            .collect();
        Ok(Entities(entities))
    }
}

/// Top-level entities: anything other than a map (including `null`) reads as
/// no entities at all.
fn lenient_entities<'de, D>(deserializer: D) -> Result<Entities, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Reads an optional field, turning a value of the wrong shape into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A single mention of an entity.
///
/// Command mentions carry the parameters scoped to them in `entities`;
/// measured parameters such as a duration carry a `unit` next to the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub entities: Option<Entities>,
}

impl Occurrence {
    pub fn of(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn measured(value: impl Into<Value>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: Some(unit.into()),
            entities: None,
        }
    }

    pub fn scoped(entities: Entities) -> Self {
        Self {
            entities: Some(entities),
            ..Self::default()
        }
    }

    /// Parameters nested under this mention, if any were reported.
    pub fn scope(&self) -> Option<&Entities> {
        self.entities.as_ref()
    }

    /// The value rendered as text. Strings are taken verbatim, numbers and
    /// booleans are formatted; null and structured values yield nothing.
    pub fn text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The value as a non-negative whole number.
    pub fn count(&self) -> Option<u32> {
        match self.value.as_ref()? {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
        .and_then(|n| u32::try_from(n).ok())
    }

    /// The value and its unit, only when both were reported.
    pub fn measure(&self) -> Option<(Value, String)> {
        Some((self.value.clone()?, self.unit.clone()?))
    }
}
