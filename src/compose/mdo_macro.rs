//! The `mdo!` macro: do-notation over any [`ToMonad`](super::ToMonad).
//!
//! `mdo!` expands into a call to [`run`](super::run). Each `pattern <= expr;`
//! line submits `expr` to the scope; the first failure ends the block and
//! becomes its value.
//!
//! # Syntax
//!
//! - `pattern <= expr;` - submit and bind the unwrapped value
//! - `_ <= expr;` - submit and discard the value
//! - `let pattern = expr;` - plain binding, nothing is submitted; any
//!   irrefutable pattern works, `mut` and `_` included
//! - `yield expr` - final line: wrap `expr` as the success of the block
//! - `expr` - final line: the block's value as is
//!
//! The block's type has to be known from context, usually through a type
//! annotation.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::mdo;
//! use monadkit::control::Maybe;
//!
//! let sum: Maybe<i32> = mdo! {
//!     x <= Maybe::some(5);
//!     y <= Some(10);
//!     let doubled = (x + y) * 2;
//!     yield doubled
//! };
//! assert_eq!(sum, Maybe::some(30));
//!
//! let missing: Maybe<i32> = mdo! {
//!     x <= Maybe::some(5);
//!     y <= Maybe::<i32>::None;
//!     yield x + y
//! };
//! assert_eq!(missing, Maybe::None);
//! ```

#![forbid(unsafe_code)]

/// Do-notation with short-circuit on the first failure.
///
/// See the [module documentation](crate::compose) for the syntax.
#[macro_export]
macro_rules! mdo {
    ($($body:tt)+) => {
        $crate::compose::run(|scope| $crate::__mdo_steps!(scope; $($body)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __mdo_steps {
    ($scope:ident; yield $value:expr $(;)?) => {
        $scope.pure($value)
    };

    // =========================================================================
    // Submissions
    // =========================================================================

    ($scope:ident; _ <= $monad:expr ; $($rest:tt)+) => {{
        let _ = $scope.bind($monad)?;
        $crate::__mdo_steps!($scope; $($rest)+)
    }};

    ($scope:ident; $pattern:ident <= $monad:expr ; $($rest:tt)+) => {{
        let $pattern = $scope.bind($monad)?;
        $crate::__mdo_steps!($scope; $($rest)+)
    }};

    ($scope:ident; ($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $scope.bind($monad)?;
        $crate::__mdo_steps!($scope; $($rest)+)
    }};

    // =========================================================================
    // Plain bindings
    // =========================================================================

    ($scope:ident; let $pattern:pat = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::__mdo_steps!($scope; $($rest)+)
    }};

    // =========================================================================
    // Final expression
    // =========================================================================

    ($scope:ident; $result:expr) => {{
        let _ = &$scope;
        ::core::result::Result::Ok($result)
    }};
}

#[cfg(test)]
mod tests {
    use crate::control::{Maybe, Result};
    use crate::typeclass::Identity;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn result_bind() {
        let result: Result<i32, &str> = mdo! {
            x <= Result::<i32, &str>::success(5);
            y <= Ok::<i32, &str>(10);
            yield x + y
        };
        assert_eq!(result, Result::success(15));
    }

    #[rstest]
    fn final_expression_is_returned_as_is() {
        let result: Maybe<i32> = mdo! {
            x <= Maybe::some(5);
            if x > 3 { Maybe::None } else { Maybe::some(x) }
        };
        assert_eq!(result, Maybe::None);
    }

    #[rstest]
    fn wildcard_and_tuple_patterns() {
        let result: Maybe<i32> = mdo! {
            _ <= Maybe::some("ignored");
            (a, b) <= Maybe::some((1, 2));
            let (c, d) = (3, 4);
            yield a + b + c + d
        };
        assert_eq!(result, Maybe::some(10));
    }

    #[rstest]
    fn let_accepts_mut_and_wildcard() {
        let result: Maybe<Vec<i32>> = mdo! {
            first <= Maybe::some(1);
            let mut collected = vec![first];
            let _ = collected.len();
            let Identity(second) = Identity(2);
            yield {
                collected.push(second);
                collected
            }
        };
        assert_eq!(result, Maybe::some(vec![1, 2]));
    }

    #[rstest]
    fn later_lines_are_not_evaluated_after_failure() {
        let evaluated = RefCell::new(Vec::new());
        let result: Result<i32, &str> = mdo! {
            a <= { evaluated.borrow_mut().push(1); Result::<i32, &str>::success(1) };
            b <= { evaluated.borrow_mut().push(2); Result::<i32, &str>::failure("x") };
            c <= { evaluated.borrow_mut().push(3); Result::<i32, &str>::success(2) };
            yield a + b + c
        };
        assert_eq!(result, Result::failure("x"));
        assert_eq!(*evaluated.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn plain_identity_values_bind() {
        let result: Maybe<String> = mdo! {
            name <= Identity("ada");
            yield name.to_uppercase()
        };
        assert_eq!(result, Maybe::some("ADA".to_string()));
    }
}
