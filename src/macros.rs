/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{doc, Value};
///
/// let value = doc!({
///     "name": "api",
///     "replicas": 3,
///     "tags": ["a", "b"]
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! doc {
    // Elements and entries are consumed one at a time so that negative
    // numbers, which span two tokens, can appear in any position.
    (@array $vec:ident) => {};

    (@array $vec:ident - $value:literal $(, $($rest:tt)*)?) => {
        $vec.push($crate::doc!(-$value));
        $crate::doc!(@array $vec $($($rest)*)?);
    };

    (@array $vec:ident $value:tt $(, $($rest:tt)*)?) => {
        $vec.push($crate::doc!($value));
        $crate::doc!(@array $vec $($($rest)*)?);
    };

    (@object $map:ident) => {};

    (@object $map:ident $key:literal : - $value:literal $(, $($rest:tt)*)?) => {
        $map.insert($key.to_string(), $crate::doc!(-$value));
        $crate::doc!(@object $map $($($rest)*)?);
    };

    (@object $map:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $map.insert($key.to_string(), $crate::doc!($value));
        $crate::doc!(@object $map $($($rest)*)?);
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elems:tt)+ ]) => {{
        let mut elements = ::std::vec::Vec::new();
        $crate::doc!(@array elements $($elems)+);
        $crate::Value::Array(elements)
    }};

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($entries:tt)+ }) => {{
        let mut object = $crate::Map::new();
        $crate::doc!(@object object $($entries)+);
        $crate::Value::Object(object)
    }};

    // Any other expression goes through the serde bridge.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_doc_macro_primitives() {
        assert_eq!(doc!(null), Value::Null);
        assert_eq!(doc!(true), Value::Bool(true));
        assert_eq!(doc!(42), Value::Number(Number::Integer(42)));
        assert_eq!(doc!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(doc!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_doc_macro_nested() {
        assert_eq!(doc!({}), Value::Object(Map::new()));

        let value = doc!({
            "name": "api",
            "ports": [80, 443],
            "meta": { "team": "core" }
        });

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get("name"), Some(&Value::from("api")));
        assert_eq!(
            obj.get("ports"),
            Some(&Value::Array(vec![Value::from(80), Value::from(443)]))
        );
        assert!(obj.get("meta").map(Value::is_object).unwrap_or(false));
    }

    #[test]
    fn test_doc_macro_negative_numbers_in_containers() {
        let value = doc!({ "a": -1, "b": [-2, 3, -0.5], "c": "x" });
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::Number(Number::Integer(-1))));
        assert_eq!(
            obj.get("b"),
            Some(&Value::Array(vec![
                Value::Number(Number::Integer(-2)),
                Value::Number(Number::Integer(3)),
                Value::Number(Number::Float(-0.5)),
            ]))
        );
        assert_eq!(obj.get("c"), Some(&Value::from("x")));
    }
}
