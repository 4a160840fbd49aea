//! Type-directed extraction of row values, including composites.
//!
//! [`Decode`] maps a span of result columns to a Rust value. Scalars and
//! strings are leaves occupying exactly one column; tuples occupy the sum of
//! their members' widths, decoded left-to-right with the column offset
//! advanced by each member's [`WIDTH`](Decode::WIDTH). Widths are constants,
//! so the layout of any composite is resolved once per type rather than per
//! row.
//!
//! Decoding is total: it never fails and never panics. NULL columns read as
//! zero, the empty string or an empty vector, and `Option` captures NULL
//! explicitly when the distinction matters.

use crate::statement::Row;

/// A value decodable from one or more consecutive result columns.
pub trait Decode {
    /// Number of columns this type occupies. Leaves are exactly 1; tuples
    /// are the sum of their members. There are no zero-width values.
    const WIDTH: usize;

    /// Decode from the columns starting at `base`.
    fn decode(row: &Row<'_>, base: usize) -> Self;
}

impl Decode for bool {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_i64(base) != 0
    }
}

macro_rules! decode_via_i32 {
    ($($t:ty),+) => {
        $(
            impl Decode for $t {
                const WIDTH: usize = 1;

                fn decode(row: &Row<'_>, base: usize) -> Self {
                    row.get_i32(base) as $t
                }
            }
        )+
    };
}

macro_rules! decode_via_i64 {
    ($($t:ty),+) => {
        $(
            impl Decode for $t {
                const WIDTH: usize = 1;

                fn decode(row: &Row<'_>, base: usize) -> Self {
                    row.get_i64(base) as $t
                }
            }
        )+
    };
}

decode_via_i32!(i8, i16, i32, u8, u16);
decode_via_i64!(i64, u32, u64, isize, usize);

impl Decode for f32 {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_f64(base) as f32
    }
}

impl Decode for f64 {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_f64(base)
    }
}

impl Decode for String {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_text(base)
    }
}

impl Decode for Vec<u8> {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_blob(base)
    }
}

impl Decode for Vec<u16> {
    const WIDTH: usize = 1;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        row.get_text16(base)
    }
}

/// `None` exactly when the leading column is NULL.
///
/// Intended for width-1 leaves; for composites only the first column is
/// inspected.
impl<T: Decode> Decode for Option<T> {
    const WIDTH: usize = T::WIDTH;

    fn decode(row: &Row<'_>, base: usize) -> Self {
        if row.is_null(base) {
            None
        } else {
            Some(T::decode(row, base))
        }
    }
}

macro_rules! impl_decode_for_tuple {
    ($($t:ident),+) => {
        impl<$($t: Decode),+> Decode for ($($t,)+) {
            const WIDTH: usize = 0 $(+ $t::WIDTH)+;

            // The trailing offset bump is dead for the last member.
            #[allow(unused_assignments)]
            fn decode(row: &Row<'_>, base: usize) -> Self {
                let mut at = base;
                ($(
                    {
                        let value = $t::decode(row, at);
                        at += $t::WIDTH;
                        value
                    },
                )+)
            }
        }
    };
}

impl_decode_for_tuple!(A);
impl_decode_for_tuple!(A, B);
impl_decode_for_tuple!(A, B, C);
impl_decode_for_tuple!(A, B, C, D);
impl_decode_for_tuple!(A, B, C, D, E);
impl_decode_for_tuple!(A, B, C, D, E, F);
impl_decode_for_tuple!(A, B, C, D, E, F, G);
impl_decode_for_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_leaves_are_one_column_wide() {
        assert_eq!(i32::WIDTH, 1);
        assert_eq!(String::WIDTH, 1);
        assert_eq!(<Vec<u8>>::WIDTH, 1);
        assert_eq!(<Option<f64>>::WIDTH, 1);
    }

    #[rstest]
    fn test_tuple_width_is_the_sum_of_member_widths() {
        assert_eq!(<(String, i64)>::WIDTH, 2);
        assert_eq!(<(String, i64, f64)>::WIDTH, 3);
        assert_eq!(<(bool, u8, u16, u32, u64, i8, i16, i32)>::WIDTH, 8);
    }

    #[rstest]
    fn test_nested_tuples_count_recursively() {
        assert_eq!(<((String, i64), f64)>::WIDTH, 3);
        assert_eq!(<((String, (i64, i64)), (f64, bool))>::WIDTH, 5);
    }
}
