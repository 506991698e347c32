//! Typed extraction from value trees into Rust types.

use crate::error::ValueError;
use crate::value::{Number, Value};
use std::collections::HashMap;

/// Types that can be built from a [`Value`].
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, ValueError>;
}

/// Parses `s` and converts the root value into `T`.
///
/// ```
/// use json_tree::from_str;
///
/// let ports: Vec<u16> = from_str("[80, 443]").unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
pub fn from_str<T: FromJson>(s: &str) -> Result<T, ValueError> {
    let value = crate::parse(s)?;
    T::from_json(&value)
}

fn mismatch(expected: &str, found: &Value) -> ValueError {
    ValueError::TypeMismatch(format!("expected {}, found {}", expected, found.value_type()))
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

fn out_of_range(value: &Value, target: &str) -> ValueError {
    ValueError::TypeMismatch(format!("{} does not fit in {}", value, target))
}

// Integer targets reject values that would wrap or truncate.
macro_rules! impl_from_json_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromJson for $ty {
                fn from_json(value: &Value) -> Result<Self, ValueError> {
                    let number = value
                        .as_raw_number()
                        .ok_or_else(|| mismatch("number", value))?;
                    match number {
                        Number::Integer(i) => {
                            <$ty>::try_from(i).map_err(|_| out_of_range(value, stringify!($ty)))
                        }
                        Number::Float(_) | Number::Double(_) => {
                            let d = number.get::<f64>();
                            // MAX as f64 may round up to the next power of two
                            if d.is_finite()
                                && d.fract() == 0.0
                                && d >= <$ty>::MIN as f64
                                && d < <$ty>::MAX as f64 + 1.0
                            {
                                Ok(d as $ty)
                            } else {
                                Err(out_of_range(value, stringify!($ty)))
                            }
                        }
                    }
                }
            }
        )*
    };
}

impl_from_json_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromJson for f32 {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        value.as_number::<f32>().ok_or_else(|| mismatch("number", value))
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        value.as_number::<f64>().ok_or_else(|| mismatch("number", value))
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        let arr = value.as_array().ok_or_else(|| mismatch("array", value))?;
        arr.iter().map(T::from_json).collect()
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        if value.is_null() || value.is_unknown() {
            Ok(None)
        } else {
            Ok(Some(T::from_json(value)?))
        }
    }
}

impl<V: FromJson> FromJson for HashMap<String, V> {
    fn from_json(value: &Value) -> Result<Self, ValueError> {
        let obj = value.as_object().ok_or_else(|| mismatch("object", value))?;
        obj.iter()
            .map(|(k, v)| Ok((k.clone(), V::from_json(v)?)))
            .collect()
    }
}

/// Looks up a required member and converts it.
///
/// # Errors
///
/// [`ValueError::MissingField`] when absent, or the conversion error.
pub fn required<T: FromJson>(object: &Value, key: &str) -> Result<T, ValueError> {
    match object.get(key) {
        Some(value) => T::from_json(value),
        None => Err(ValueError::MissingField(key.to_string())),
    }
}
