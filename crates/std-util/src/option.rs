/// Asserts that an `Option` is `None`, printing the `Some` payload otherwise.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        if let Some(actual) = &$e {
            panic!("expected `{}` to be `None`; actual=Some({:?})", stringify!($e), actual);
        }
    };
}
