//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe slug wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe slug ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `AsRef<str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use max_publishing_core::define_id;
/// define_id!(AuthorId);
/// define_id!(SeriesId);
///
/// let author = AuthorId::new("manzoni");
/// assert_eq!(author.as_str(), "manzoni");
///
/// // These are different types, so this won't compile:
/// // let _: AuthorId = SeriesId::new("manzoni");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a slug.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the slug.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

// Define standard entity IDs
define_id!(BookId);
define_id!(CategoryId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = BookId::new("promessi-sposi");
        assert_eq!(id.as_str(), "promessi-sposi");
        assert_eq!(id.to_string(), "promessi-sposi");
    }

    #[test]
    fn test_compare_with_str() {
        let id = CategoryId::from("fiction");
        assert!(id == *"fiction");
        assert!(id != *"poetry");
    }

    #[test]
    fn test_serde_transparent() {
        let id = BookId::new("odyssey");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"odyssey\"");
    }
}
