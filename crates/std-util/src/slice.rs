/// Asserts that a slice-like value (`Vec`, array, slice) has no elements.
#[macro_export]
macro_rules! assert_empty {
    ($slice:expr) => {{
        match &$slice[..] {
            [] => {}
            actual => panic!(
                "expected `{}` to be empty; actual={:?}",
                stringify!($slice),
                actual
            ),
        }
    }};
}
