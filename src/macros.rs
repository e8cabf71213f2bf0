//! The [`cton!`](crate::cton) macro for building [`Value`](crate::Value)
//! trees from literal syntax.

/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// # Examples
///
/// ```rust
/// use serde_cton::cton;
///
/// let data = cton!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde", "llm"]
/// });
///
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! cton {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::cton!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::CtonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::CtonMap::new();
        $(
            object.insert($key.to_string(), $crate::cton!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
