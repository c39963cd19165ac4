//! Presence-aware field wrapper for partial updates.
//!
//! An update payload must tell "field not supplied" apart from "field
//! supplied with an empty, zero or null value". A flat `Option<T>` cannot do
//! that for nullable columns, and treating default values as "not supplied"
//! silently drops legitimate writes. [`Patch`] records presence explicitly.
//!
//! Serde integration: pair every `Patch` field with `#[serde(default)]` so a
//! missing key deserializes to [`Patch::Unchanged`]. A present key always
//! deserializes to [`Patch::Set`], including `null` when `T` is an `Option`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field of an update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// The caller did not supply the field; the stored value is kept.
    Unchanged,
    /// The caller supplied the field; the stored value is overwritten.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// Overwrite `target` if the field was supplied.
    pub fn apply_to(&self, target: &mut T)
    where
        T: Clone,
    {
        if let Patch::Set(value) = self {
            *target = value.clone();
        }
    }
}

/// `None` maps to [`Patch::Unchanged`]. Use this only for sources whose
/// `None` genuinely means "absent" (proto3 `optional`, GraphQL undefined).
impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Unchanged,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// Pair with `#[serde(skip_serializing_if = "Patch::is_unchanged")]`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Unchanged => serializer.serialize_none(),
            Patch::Set(value) => value.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
