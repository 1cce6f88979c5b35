//! Macros for ergonomic state construction.

/// Build a [`State`](crate::core::State) from literal bindings.
///
/// Values may be anything that converts into a
/// [`Value`](crate::core::Value): integers or booleans.
///
/// # Example
///
/// ```
/// use whilesem::core::Value;
/// use whilesem::state;
///
/// let s = state! { "x" => 5, "done" => false };
///
/// assert_eq!(s.lookup("x").unwrap(), &Value::Int(5));
/// assert_eq!(s.lookup("done").unwrap(), &Value::Bool(false));
/// assert!(state! {}.is_empty());
/// ```
#[macro_export]
macro_rules! state {
    () => {
        $crate::core::State::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        <$crate::core::State as ::std::iter::FromIterator<_>>::from_iter([
            $((
                ::std::string::String::from($name),
                $crate::core::Value::from($value),
            )),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Value};

    #[test]
    fn empty_state() {
        assert_eq!(state! {}, State::new());
    }

    #[test]
    fn mixed_bindings() {
        let s = state! { "n" => 3, "ok" => true, };
        assert_eq!(s.len(), 2);
        assert_eq!(s.lookup("n").unwrap(), &Value::Int(3));
        assert_eq!(s.lookup("ok").unwrap(), &Value::Bool(true));
    }

    #[test]
    fn later_bindings_win() {
        let s = state! { "x" => 1, "x" => 2 };
        assert_eq!(s, state! { "x" => 2 });
    }
}
