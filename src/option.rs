//! Optional values with a JSON mapping where absence is `null`.
//!
//! [`Optional`] tracks presence separately from the value space of `T`, so a
//! present `0` or an empty string is still present. On the wire a present value
//! is written exactly as a bare `T`, which makes an `Optional<T>` field
//! interchangeable with a nullable `T` field for any JSON consumer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::error::{OptsigError, Result};

/// Either holds exactly one `T` or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// Wraps a value.
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Builds an empty container.
    pub const fn none() -> Self {
        Self::Absent
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Same answer as [`Optional::is_absent`]. Meant for
    /// `#[serde(skip_serializing_if = "Optional::is_default_for_serialization")]`,
    /// which drops the field instead of writing `null`.
    pub const fn is_default_for_serialization(&self) -> bool {
        self.is_absent()
    }

    /// Borrows the inner value, if any.
    pub const fn reference(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone> Optional<T> {
    /// Copies the referenced value out; a missing reference becomes absent.
    pub fn from_reference(reference: Option<&T>) -> Self {
        reference.cloned().into()
    }

    /// Returns the stored value, or `fallback` when absent.
    pub fn value_or_default(&self, fallback: T) -> T {
        match self {
            Self::Present(value) => value.clone(),
            Self::Absent => fallback,
        }
    }
}

impl<T: Clone + Default> Optional<T> {
    /// Returns the stored value and `true`, or `T::default()` and `false`.
    pub fn value_or_flag(&self) -> (T, bool) {
        match self {
            Self::Present(value) => (value.clone(), true),
            Self::Absent => (T::default(), false),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

/// Applies `f` to the inner value when present. `f` runs at most once.
pub fn map_value<T, U, F>(optional: Optional<T>, f: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match optional {
        Optional::Present(value) => Optional::Present(f(value)),
        Optional::Absent => Optional::Absent,
    }
}

/// Chains a computation that may itself produce nothing. The result of `f` is
/// returned as is.
pub fn flat_map_value<T, U, F>(optional: Optional<T>, f: F) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    match optional {
        Optional::Present(value) => f(value),
        Optional::Absent => Optional::Absent,
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Optional<T> {
    /// Encodes to JSON text: `null` when absent, the bare value otherwise.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(OptsigError::Encode)
    }
}

impl<T: serde::de::DeserializeOwned> Optional<T> {
    /// Decodes JSON text. `null` (surrounding whitespace ignored) is absent,
    /// anything else must decode as a `T`.
    pub fn from_json(data: &str) -> Result<Self> {
        if data.trim() == "null" {
            return Ok(Self::Absent);
        }
        serde_json::from_str(data)
            .map(Self::Present)
            .map_err(OptsigError::Decode)
    }

    /// Overwrites `self` with the decoded value. On error `self` is untouched.
    pub fn decode_json_in_place(&mut self, data: &str) -> Result<()> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}
