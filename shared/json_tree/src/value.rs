//! JSON value representation and manipulation.

use crate::error::{Result, ValueError};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// Returned by indexing when a key or position is absent.
static ABSENT: Value = Value::Unknown;

/// Which representation a [`Number`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Integer,
    Float,
    Double,
}

/// A JSON number that remembers whether it was an integer, a 32-bit float or a 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Float(_) => NumberKind::Float,
            Number::Double(_) => NumberKind::Double,
        }
    }

    /// Converts the stored representation to `T`, with `as` cast semantics.
    ///
    /// ```
    /// use json_tree::Number;
    ///
    /// assert_eq!(Number::Double(2.75).get::<i32>(), 2);
    /// assert_eq!(Number::Integer(7).get::<f64>(), 7.0);
    /// ```
    pub fn get<T: FromNumber>(&self) -> T {
        match *self {
            Number::Integer(i) => T::from_i64(i),
            Number::Float(f) => T::from_f32(f),
            Number::Double(d) => T::from_f64(d),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

/// Primitive numeric types a [`Number`] can be read back as.
pub trait FromNumber: Copy {
    fn from_i64(value: i64) -> Self;
    fn from_f32(value: f32) -> Self;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromNumber for $ty {
                fn from_i64(value: i64) -> Self {
                    value as $ty
                }

                fn from_f32(value: f32) -> Self {
                    value as $ty
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Unknown,
    Null,
    Boolean,
    Number(NumberKind),
    String,
    Array,
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Unknown => "unknown",
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number(NumberKind::Integer) => "integer",
            ValueType::Number(NumberKind::Float) => "float",
            ValueType::Number(NumberKind::Double) => "double",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        };
        f.write_str(name)
    }
}

/// One node of a JSON document.
///
/// A fresh value is [`Value::Unknown`]: it carries no data and is not valid
/// JSON. It becomes typed through one of the constructors or by assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Untyped placeholder, also returned when indexing misses
    #[default]
    Unknown,
    /// JSON null: `null`
    Null,
    /// JSON boolean: `true` or `false`
    Bool(bool),
    /// JSON number: `42`, `2.5`, `1e3`
    Number(Number),
    /// JSON string: `"hello"`
    String(String),
    /// JSON array: `["item1", "item2"]`
    Array(Vec<Value>),
    /// JSON object: `{"key": "value"}`
    Object(HashMap<String, Value>),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn int(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }

    pub fn float(f: f32) -> Self {
        Value::Number(Number::Float(f))
    }

    pub fn double(d: f64) -> Self {
        Value::Number(Number::Double(d))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(HashMap::new())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Unknown => ValueType::Unknown,
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(n) => ValueType::Number(n.kind()),
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// True for every typed value, including `null`.
    pub fn is_valid(&self) -> bool {
        !self.is_unknown()
    }

    /// Returns true if this is JSON null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the string value if this is a JSON string, otherwise None.
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the boolean value if this is a JSON boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the stored number converted to `T`, or None if this is not a number.
    pub fn as_number<T: FromNumber>(&self) -> Option<T> {
        if let Value::Number(n) = self {
            Some(n.get())
        } else {
            None
        }
    }

    pub fn as_raw_number(&self) -> Option<Number> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_str_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }

    pub fn as_bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// Reads the number as `T`, falling back to `default` for any non-number.
    ///
    /// ```
    /// use json_tree::Value;
    ///
    /// assert_eq!(Value::double(2.5).as_number_or(0.0f32), 2.5);
    /// assert_eq!(Value::string("2.5").as_number_or(-1i32), -1);
    /// ```
    pub fn as_number_or<T: FromNumber>(&self, default: T) -> T {
        self.as_number().unwrap_or(default)
    }

    /// Returns the object value if this is a JSON object, otherwise None.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        if let Value::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the mutable object value if this is a JSON object, otherwise None.
    pub fn as_object_mut(&mut self) -> Option<&mut HashMap<String, Value>> {
        if let Value::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the array value if this is a JSON array, otherwise None.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Returns the mutable array value if this is a JSON array, otherwise None.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        if let Value::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Inserts or overwrites `key` on an object.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAnObject`] and leaves `self` untouched when this
    /// is not an object.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Object(map) => {
                map.insert(key.into(), value.into());
                Ok(())
            }
            other => Err(ValueError::NotAnObject(other.value_type())),
        }
    }

    /// Pushes onto the end of an array.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAnArray`] and leaves `self` untouched when this
    /// is not an array.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Array(arr) => {
                arr.push(value.into());
                Ok(())
            }
            other => Err(ValueError::NotAnArray(other.value_type())),
        }
    }

    /// Looks up an object member without inserting anything.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut()?.get_mut(key)
    }

    /// Looks up an array element; out-of-range positions are None.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut()?.get_mut(index)
    }

    /// Empties an array or object in place. The value keeps its type.
    pub fn clear(&mut self) {
        match self {
            Value::Array(arr) => arr.clear(),
            Value::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Number of elements or members; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Moves the value out, leaving [`Value::Unknown`] behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Gets a value from a JSON object by key path (dot notation).
    ///
    /// # Examples
    ///
    /// ```
    /// use json_tree::parse;
    ///
    /// let json = parse(r#"{"user":{"name":"Alice","profile":{"age":30}}}"#).unwrap();
    ///
    /// assert_eq!(json.get_path("user.name").and_then(|v| v.as_str()), Some("Alice"));
    /// assert_eq!(json.get_path("user.profile.age").and_then(|v| v.as_number::<i64>()), Some(30));
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for key in path.split('.') {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Gets a mutable reference to a value in a JSON object by key path.
    pub fn get_path_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut current = self;
        for key in path.split('.') {
            current = current.get_mut(key)?;
        }
        Some(current)
    }

    /// Sets a value by key path, creating intermediate objects if needed.
    ///
    /// Intermediate members that exist but are not objects are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAnObject`] if `self` is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_tree::Value;
    ///
    /// let mut json = Value::object();
    /// json.set_path("user.name", "Bob").unwrap();
    /// json.set_path("user.profile.age", 25).unwrap();
    ///
    /// assert_eq!(json.get_path("user.name").and_then(|v| v.as_str()), Some("Bob"));
    /// ```
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let (parents, leaf) = match path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, path),
        };

        let mut current = self;
        for key in parents.into_iter().flat_map(|p| p.split('.')) {
            let child = match current {
                Value::Object(map) => map.entry(key.to_string()).or_insert_with(Value::object),
                other => return Err(ValueError::NotAnObject(other.value_type())),
            };
            if !child.is_object() {
                *child = Value::object();
            }
            current = child;
        }
        current.set(leaf, value)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing keys, and indexing a non-object, yield [`Value::Unknown`].
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&ABSENT)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Out-of-range positions, and indexing a non-array, yield [`Value::Unknown`].
    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&ABSENT)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::int(i64::from(i))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::float(f)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::double(d)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_value_is_unknown() {
        let value = Value::default();
        assert!(value.is_unknown());
        assert!(!value.is_valid());
        assert_eq!(value.value_type(), ValueType::Unknown);
    }

    #[test]
    fn test_constructors_set_type() {
        assert_eq!(Value::null().value_type(), ValueType::Null);
        assert_eq!(Value::bool(true).value_type(), ValueType::Boolean);
        assert_eq!(
            Value::int(1).value_type(),
            ValueType::Number(NumberKind::Integer)
        );
        assert_eq!(
            Value::float(1.0).value_type(),
            ValueType::Number(NumberKind::Float)
        );
        assert_eq!(
            Value::double(1.0).value_type(),
            ValueType::Number(NumberKind::Double)
        );
        assert_eq!(Value::string("s").value_type(), ValueType::String);
        assert_eq!(Value::array().value_type(), ValueType::Array);
        assert_eq!(Value::object().value_type(), ValueType::Object);
        assert!(Value::array().is_empty());
        assert!(Value::object().is_empty());
    }

    #[test]
    fn test_scalar_accessors_round_trip() {
        assert_eq!(Value::string("hello").as_str_or("x"), "hello");
        assert!(Value::bool(true).as_bool_or(false));
        assert_eq!(Value::int(42).as_number_or(0i64), 42);
        assert_eq!(Value::float(1.5).as_number_or(0.0f32), 1.5);
        assert_eq!(Value::double(2.25).as_number_or(0.0f64), 2.25);
    }

    #[test]
    fn test_mismatched_accessor_returns_default() {
        assert_eq!(Value::int(42).as_str_or("fallback"), "fallback");
        assert!(!Value::string("true").as_bool_or(false));
        assert_eq!(Value::bool(true).as_number_or(-1i32), -1);
        assert_eq!(Value::null().as_number_or(7u8), 7);
        assert_eq!(Value::Unknown.as_str_or("none"), "none");
        assert_eq!(Value::array().as_number_or(0.5f64), 0.5);
    }

    #[test]
    fn test_numeric_conversion_follows_stored_kind() {
        let value = Value::double(3.99);
        assert_eq!(value.as_number::<i32>(), Some(3));
        assert_eq!(value.as_number::<f64>(), Some(3.99));

        let value = Value::int(-1);
        assert_eq!(value.as_number::<f32>(), Some(-1.0));
        assert_eq!(value.as_number::<u8>(), Some(255));

        let value = Value::float(0.5);
        assert_eq!(value.as_number::<f64>(), Some(0.5));
        assert_eq!(value.as_raw_number(), Some(Number::Float(0.5)));
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut arr = Value::array();
        arr.append(1).unwrap();
        arr.append("two").unwrap();
        arr.append(Value::null()).unwrap();

        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0], Value::int(1));
        assert_eq!(arr[1].as_str(), Some("two"));
        assert!(arr[2].is_null());
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut obj = Value::object();
        obj.set("k", 1).unwrap();
        obj.set("k", "second").unwrap();

        assert_eq!(obj.len(), 1);
        assert_eq!(obj["k"].as_str(), Some("second"));
    }

    #[test]
    fn test_container_ops_on_wrong_type() {
        let mut value = Value::int(5);
        assert_eq!(
            value.set("k", true),
            Err(ValueError::NotAnObject(ValueType::Number(NumberKind::Integer)))
        );
        assert_eq!(
            value.append(true),
            Err(ValueError::NotAnArray(ValueType::Number(NumberKind::Integer)))
        );
        assert_eq!(value, Value::int(5));

        let mut obj = Value::object();
        assert!(obj.append(1).is_err());
        assert!(obj.is_empty());
    }

    #[test]
    fn test_index_miss_is_distinguishable_from_null() {
        let mut obj = Value::object();
        obj.set("present", Value::null()).unwrap();

        assert!(obj["present"].is_null());
        assert!(obj["missing"].is_unknown());
        assert_eq!(obj.len(), 1);
        assert!(obj.get("missing").is_none());

        let arr = Value::Array(vec![Value::int(1)]);
        assert!(arr[5].is_unknown());
        assert!(arr.get_index(5).is_none());
        assert!(Value::int(1)["key"].is_unknown());
        assert!(Value::string("s")[0].is_unknown());
    }

    #[test]
    fn test_clear_keeps_container_type() {
        let mut arr = Value::Array(vec![Value::int(1), Value::int(2)]);
        arr.clear();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.value_type(), ValueType::Array);

        let mut obj = Value::object();
        obj.set("a", 1).unwrap();
        obj.clear();
        assert!(obj.is_empty());
        assert_eq!(obj.value_type(), ValueType::Object);

        let mut scalar = Value::bool(true);
        scalar.clear();
        assert_eq!(scalar, Value::bool(true));
    }

    #[test]
    fn test_reassignment_replaces_payload() {
        let mut value = Value::object();
        value.set("a", 1).unwrap();

        value = Value::string("now a string");
        assert_eq!(value.value_type(), ValueType::String);
        assert!(value.get("a").is_none());

        value.set_null();
        assert!(value.is_null());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Value::object();
        original.set("list", Value::Array(vec![Value::int(1)])).unwrap();

        let mut copy = original.clone();
        copy.get_mut("list").unwrap().append(2).unwrap();

        assert_eq!(original["list"].len(), 1);
        assert_eq!(copy["list"].len(), 2);
    }

    #[test]
    fn test_take_leaves_unknown() {
        let mut value = Value::int(3);
        let taken = value.take();
        assert_eq!(taken, Value::int(3));
        assert!(value.is_unknown());
    }

    #[test]
    fn test_get_path() {
        let mut nested = Value::object();
        nested.set("age", 30).unwrap();
        let mut json = Value::object();
        json.set("user", nested).unwrap();

        assert_eq!(
            json.get_path("user.age").and_then(|v| v.as_number::<i64>()),
            Some(30)
        );
        assert!(json.get_path("nonexistent").is_none());
        assert!(json.get_path("user.age.deeper").is_none());
    }

    #[test]
    fn test_set_path() {
        let mut json = Value::object();
        json.set_path("user.name", "Alice").unwrap();
        json.set_path("user.profile.age", 25).unwrap();

        assert_eq!(
            json.get_path("user.name").and_then(|v| v.as_str()),
            Some("Alice")
        );
        assert_eq!(
            json.get_path("user.profile.age")
                .and_then(|v| v.as_number::<i32>()),
            Some(25)
        );
    }

    #[test]
    fn test_set_path_replaces_scalar_parents() {
        let mut json = Value::object();
        json.set("user", 5).unwrap();
        json.set_path("user.name", "Carol").unwrap();
        assert_eq!(json["user"]["name"].as_str(), Some("Carol"));

        let mut scalar = Value::bool(false);
        assert!(scalar.set_path("a.b", 1).is_err());
        assert_eq!(scalar, Value::bool(false));
    }

    #[test]
    fn test_get_path_mut() {
        let mut json = Value::object();
        json.set_path("a.b", 1).unwrap();
        *json.get_path_mut("a.b").unwrap() = Value::double(1.5);
        assert_eq!(json["a"]["b"], Value::double(1.5));
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Number(NumberKind::Double).to_string(), "double");
        assert_eq!(ValueType::Object.to_string(), "object");
        assert_eq!(ValueType::Unknown.to_string(), "unknown");
    }
}
