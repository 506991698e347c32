//! Macros for typed extraction.

/// Implements [`FromJson`](crate::FromJson) for a struct with `Default`.
///
/// Members present in the object overwrite the defaults; absent members keep
/// them. A present member of the wrong type is an error.
///
/// # Examples
///
/// ```
/// use json_tree::{from_str, impl_from_json};
///
/// #[derive(Debug)]
/// struct Limits {
///     max_depth: usize,
///     label: String,
/// }
///
/// impl Default for Limits {
///     fn default() -> Self {
///         Self {
///             max_depth: 64,
///             label: "default".to_string(),
///         }
///     }
/// }
///
/// impl_from_json! {
///     Limits {
///         max_depth: usize,
///         label: String,
///     }
/// }
///
/// let limits: Limits = from_str(r#"{"max_depth": 8}"#).unwrap();
/// assert_eq!(limits.max_depth, 8);
/// assert_eq!(limits.label, "default");
/// ```
#[macro_export]
macro_rules! impl_from_json {
    ($struct_name:ident { $($field:ident: $field_ty:ty),* $(,)? }) => {
        impl $crate::FromJson for $struct_name {
            fn from_json(value: &$crate::Value) -> Result<Self, $crate::ValueError> {
                let obj = value
                    .as_object()
                    .ok_or_else(|| $crate::ValueError::TypeMismatch(
                        format!(
                            "expected object for {}, found {}",
                            stringify!($struct_name),
                            value.value_type()
                        )
                    ))?;

                let mut result = Self::default();

                $(
                    if let Some(field_value) = obj.get(stringify!($field)) {
                        result.$field = <$field_ty as $crate::FromJson>::from_json(field_value)
                            .map_err(|e| $crate::ValueError::TypeMismatch(
                                format!("{}.{}: {}", stringify!($struct_name), stringify!($field), e)
                            ))?;
                    }
                )*

                Ok(result)
            }
        }
    };
}
