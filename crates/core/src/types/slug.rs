//! Newtype slugs for type-safe entity references.
//!
//! Use the `define_slug!` macro to create type-safe slug wrappers that prevent
//! accidentally mixing identifiers from different entity types.

/// Macro to define a type-safe slug wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>`, `AsRef<str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use ai_tools_hub_core::define_slug;
/// define_slug!(ToolSlug);
/// define_slug!(CategorySlug);
///
/// let tool = ToolSlug::new("chatgpt");
/// let category = CategorySlug::new("chat");
///
/// // These are different types, so this won't compile:
/// // let _: ToolSlug = category;
/// ```
#[macro_export]
macro_rules! define_slug {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new slug from a string value.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self(slug.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity slugs
define_slug!(ToolSlug);
define_slug!(CategorySlug);
define_slug!(TutorialId);
