//! Newtype IDs for type-safe entity references.
//!
//! Every key in the store is an opaque string (hex digests in the source data).
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()` which trims and validates caller input against the wire
///   argument name and the store's column width
/// - `new()` for trusted values read back from the store
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// # Example
///
/// ```rust
/// # use retail_analytics_core::define_id;
/// define_id!(WarehouseId, "warehouse_id", 36);
///
/// let id = WarehouseId::parse(" w-1 ").unwrap();
/// assert_eq!(id.as_str(), "w-1");
/// assert!(WarehouseId::parse("").is_err());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $argument:literal, $max_len:literal) => {
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
            /// Argument name used when this ID is supplied by a caller.
            pub const ARGUMENT: &'static str = $argument;

            /// Maximum length accepted by the store column.
            pub const MAX_LEN: usize = $max_len;

            /// Wrap a value read back from the store without validation.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Validate caller input.
            ///
            /// # Errors
            ///
            /// Returns `ArgumentError::Missing` if the value is blank and
            /// `ArgumentError::TooLong` if it exceeds the column width.
            pub fn parse(value: &str) -> ::core::result::Result<Self, $crate::ArgumentError> {
                $crate::types::argument::require_text($argument, value, $max_len)
                    .map(|v| Self(v.to_owned()))
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <String as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <String as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

// Entity keys
define_id!(CustomerId, "customer_id", 36);
define_id!(SellerId, "seller_id", 36);
define_id!(ProductId, "product_id", 36);
define_id!(OrderId, "order_id", 36);
define_id!(OrderItemId, "order_item_id", 36);

// Postal code: key of `geolocation`, shared by customers and sellers.
define_id!(ZipCode, "zip_code", 10);
