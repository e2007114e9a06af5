/// Macro used for test assertions on anything with `fuzzy_eq`/`fuzzy_eq_eps` methods.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Used by [pline_closed] to count the repetitions for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a closed polyline from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use cutpath::pline_closed;
/// # use cutpath::core::math::*;
/// let polyline = pline_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0)];
/// assert_eq!(polyline.vertex_count(), 3);
/// assert_eq!(polyline[1], vec2(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! pline_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pl = $crate::polyline::Polyline::with_capacity(size);
            $(
                pl.add($x.0, $x.1);
            )*
            pl
        }
    };
}
