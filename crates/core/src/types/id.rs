//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Storefront IDs are
//! opaque strings supplied by whoever owns the product catalog.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use vitrine_core::define_id;
/// define_id!(SkuId);
/// define_id!(BundleId);
///
/// let sku = SkuId::new("p-1");
/// let bundle = BundleId::new("p-1");
/// assert_eq!(sku.as_str(), bundle.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = bundle;
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
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
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
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(AddressId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_conversions() {
        let id = ProductId::from("p-1");
        assert_eq!(id.to_string(), "p-1");
        assert_eq!(id.as_str(), "p-1");
        assert_eq!(ProductId::new(String::from("p-1")), id);
        assert_eq!(id.into_inner(), "p-1");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = AddressId::new("addr-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"addr-1\"");

        let parsed: AddressId = serde_json::from_str("\"addr-2\"").unwrap();
        assert_eq!(parsed.as_str(), "addr-2");
    }
}
