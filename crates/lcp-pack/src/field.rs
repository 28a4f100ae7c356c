//! # Presence-Tracking Fields
//!
//! [`Field<T>`] records whether a key was absent, present with a null
//! value, or present with a value. Use it with `#[serde(default)]` so an
//! absent key deserializes to [`Field::Missing`].
//!
//! Completeness checks look at key existence only: `country: ""` and
//! `country: ~` both count as present.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A document field whose presence matters independently of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The key does not appear in the document.
    Missing,
    /// The key appears with a null value.
    Null,
    /// The key appears with a value.
    Present(T),
}

impl<T> Field<T> {
    /// `true` if the key exists, whatever its value.
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// `true` if the key does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value, if one was given.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(v) => serializer.serialize_some(v),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default)]
        name: Field<String>,
    }

    #[test]
    fn test_absent_key_is_missing() {
        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.name, Field::Missing);
        assert!(!doc.name.is_present());
    }

    #[test]
    fn test_null_value_is_present() {
        let doc: Doc = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(doc.name, Field::Null);
        assert!(doc.name.is_present());
        assert_eq!(doc.name.value(), None);
    }

    #[test]
    fn test_empty_string_is_present() {
        let doc: Doc = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(doc.name, Field::Present(String::new()));
        assert!(doc.name.is_present());
    }

    #[test]
    fn test_value_accessor() {
        let f = Field::Present(5);
        assert_eq!(f.value(), Some(&5));
    }

    #[test]
    fn test_serialize_missing_as_null() {
        let f: Field<u8> = Field::Missing;
        assert_eq!(serde_json::to_string(&f).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Field::Present(3u8)).unwrap(), "3");
    }
}
