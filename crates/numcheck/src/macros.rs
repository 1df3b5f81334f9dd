//! Call-site macros that record the invoking file and line.

/// Expands to the [`SourceLocation`](crate::SourceLocation) of the invocation.
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(file!(), i64::from(line!()))
    };
}

/// [`assert_equal`](fn@crate::assert_equal) at the call site.
#[macro_export]
macro_rules! assert_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_equal(&$a, &$b, &$crate::here!())
    };
}

/// [`assert_equal_quiet`](fn@crate::assert_equal_quiet) at the call site.
#[macro_export]
macro_rules! assert_equal_quiet {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_equal_quiet(&$a, &$b, &$crate::here!())
    };
}

/// [`assert_lequal`](fn@crate::assert_lequal) at the call site.
#[macro_export]
macro_rules! assert_lequal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_lequal(&$a, &$b, &$crate::here!())
    };
}

/// [`assert_gequal`](fn@crate::assert_gequal) at the call site.
#[macro_export]
macro_rules! assert_gequal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_gequal(&$a, &$b, &$crate::here!())
    };
}

/// [`assert_almost_equal`](fn@crate::assert_almost_equal) at the call site,
/// with the default tolerance unless one is given.
#[macro_export]
macro_rules! assert_almost_equal {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_almost_equal(
            &$a,
            &$b,
            &$crate::here!(),
            <$crate::Tolerance as ::core::default::Default>::default(),
        )
    };
    ($a:expr, $b:expr, $tolerance:expr $(,)?) => {
        $crate::assert_almost_equal(&$a, &$b, &$crate::here!(), $tolerance)
    };
}

/// Sequence comparison at the call site, by value equality or by `predicate`.
#[macro_export]
macro_rules! assert_equal_ranges {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_equal_ranges($a, $b, &$crate::here!())
    };
    ($a:expr, $b:expr, $predicate:expr $(,)?) => {
        $crate::assert_equal_ranges_by($a, $b, $predicate, &$crate::here!())
    };
}

/// Requires `expression` (a `Result`) to fail with error type `kind`.
#[macro_export]
macro_rules! assert_throws {
    ($expression:expr, $kind:ty $(,)?) => {
        $crate::assert_throws::<$kind, _, _>(
            || ::core::result::Result::map_err($expression, ::core::convert::Into::into),
            &$crate::here!(),
        )
    };
}

/// Returns a known-failure marker from the enclosing function.
#[macro_export]
macro_rules! known_failure {
    () => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::known_failure(
            &$crate::here!(),
        )))
    };
}
