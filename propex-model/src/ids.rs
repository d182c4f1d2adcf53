//! Strongly typed record identifiers.
//!
//! The backing store assigns every record an opaque identifier whose
//! canonical textual form is exactly 24 lowercase hexadecimal characters.
//! Parsing accepts hex digits of either case and canonicalizes to
//! lowercase; anything else is rejected.

use crate::error::ModelError;

/// Length of the canonical identifier encoding.
pub const RECORD_ID_LEN: usize = 24;

fn parse_record_id(s: &str) -> Result<String, ModelError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ModelError::InvalidId("identifier is empty".into()));
    }
    if trimmed.len() != RECORD_ID_LEN
        || !trimmed.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(ModelError::InvalidId(format!(
            "expected a {RECORD_ID_LEN}-hex string, got {trimmed:?}"
        )));
    }
    Ok(trimmed.to_ascii_lowercase())
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse and canonicalize an identifier string.
            pub fn parse(s: &str) -> Result<Self, ModelError> {
                parse_record_id(s).map($name)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id! {
    /// Strongly typed ID for listings.
    ListingId
}

record_id! {
    /// Strongly typed ID for listing owners.
    ///
    /// Owners are never expanded by this service; the ID is carried through
    /// as an opaque reference.
    OwnerId
}

record_id! {
    /// Strongly typed ID for related-image records.
    ImageId
}
