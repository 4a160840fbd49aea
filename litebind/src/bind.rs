//! Typed parameter binding for prepared statements.
//!
//! Every supported Rust type implements [`Bind`] by borrowing itself as a
//! [`BindValue`], whose variants correspond one-to-one to the engine's bind
//! primitives. Which primitive a type maps to is fixed by its impl, so the
//! dispatch is resolved entirely at compile time.
//!
//! # Buffer lifetime policy
//!
//! Text and blob buffers are handed to the engine with the copying policy by
//! default: the engine duplicates the bytes before the bind call returns, so
//! any borrow is safe. Wrapping a `'static` string or slice in [`Static`]
//! opts into the zero-copy policy instead; the `'static` bound is what makes
//! handing the engine a long-lived pointer sound.
//!
//! # Multi-slot binding
//!
//! [`Params`] binds a tuple of values to consecutive slots, lowest first.
//! Binding is fail-fast: the first slot the engine rejects aborts the call
//! and later slots are never attempted. Slots bound before the failure keep
//! their values.

use crate::error::Error;
use crate::statement::Statement;

/// A borrowed view of one bind argument, one variant per engine primitive.
#[derive(Debug, Clone, Copy)]
pub enum BindValue<'a> {
    Int(i32),
    Int64(i64),
    Double(f64),
    /// UTF-8 text, copied by the engine.
    Text(&'a str),
    /// UTF-8 text with the zero-copy policy; requires `'static` data.
    StaticText(&'static str),
    /// UTF-16 text, copied by the engine.
    Text16(&'a [u16]),
    /// UTF-16 text with the zero-copy policy; requires `'static` data.
    StaticText16(&'static [u16]),
    /// Binary data, copied by the engine.
    Blob(&'a [u8]),
    /// Binary data with the zero-copy policy; requires `'static` data.
    StaticBlob(&'static [u8]),
    Null,
    /// A zero-filled blob of the given length, allocated by the engine.
    ZeroBlob(u64),
}

/// A value that can be bound to a single statement slot.
pub trait Bind {
    /// Borrow this value as the wire form the engine will receive.
    fn bind_value(&self) -> BindValue<'_>;
}

impl<T: Bind + ?Sized> Bind for &T {
    fn bind_value(&self) -> BindValue<'_> {
        (**self).bind_value()
    }
}

/// The SQL NULL placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

/// A zero-filled blob placeholder of the given byte length.
///
/// The engine allocates the blob itself; no buffer crosses the boundary.
#[derive(Debug, Clone, Copy)]
pub struct ZeroBlob(pub u64);

/// Opts a `'static` string or slice into the zero-copy bind policy.
///
/// Without this wrapper the engine copies every text/blob buffer, which is
/// always safe. `Static` skips the copy; it is only implemented for
/// `'static` data so the pointer the engine keeps can never dangle.
#[derive(Debug, Clone, Copy)]
pub struct Static<T>(pub T);

impl Bind for Null {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Null
    }
}

impl Bind for ZeroBlob {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::ZeroBlob(self.0)
    }
}

impl Bind for Static<&'static str> {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::StaticText(self.0)
    }
}

impl Bind for Static<&'static [u16]> {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::StaticText16(self.0)
    }
}

impl Bind for Static<&'static [u8]> {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::StaticBlob(self.0)
    }
}

impl<T: Bind> Bind for Option<T> {
    fn bind_value(&self) -> BindValue<'_> {
        match self {
            Some(value) => value.bind_value(),
            None => BindValue::Null,
        }
    }
}

impl Bind for bool {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Int(i32::from(*self))
    }
}

macro_rules! bind_as_int {
    ($($t:ty),+) => {
        $(
            impl Bind for $t {
                fn bind_value(&self) -> BindValue<'_> {
                    BindValue::Int(*self as i32)
                }
            }
        )+
    };
}

// Values above the signed 64-bit range wrap; the wire type is i64.
macro_rules! bind_as_int64 {
    ($($t:ty),+) => {
        $(
            impl Bind for $t {
                fn bind_value(&self) -> BindValue<'_> {
                    BindValue::Int64(*self as i64)
                }
            }
        )+
    };
}

bind_as_int!(i8, i16, i32, u8, u16);
bind_as_int64!(i64, u32, u64, isize, usize);

impl Bind for f32 {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Double(f64::from(*self))
    }
}

impl Bind for f64 {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Double(*self)
    }
}

impl Bind for str {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Text(self)
    }
}

impl Bind for String {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Text(self)
    }
}

impl Bind for [u16] {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Text16(self)
    }
}

impl Bind for Vec<u16> {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Text16(self)
    }
}

impl Bind for [u8] {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Blob(self)
    }
}

impl Bind for Vec<u8> {
    fn bind_value(&self) -> BindValue<'_> {
        BindValue::Blob(self)
    }
}

/// A set of bind arguments for consecutive slots.
///
/// Implemented for `()` and tuples of up to eight [`Bind`] values. Members
/// are bound in order starting at the base slot; the first engine rejection
/// is returned as-is and no later slot is touched.
pub trait Params {
    fn bind_all(&self, stmt: &mut Statement<'_>, base: usize) -> Result<(), Error>;
}

impl Params for () {
    fn bind_all(&self, _stmt: &mut Statement<'_>, _base: usize) -> Result<(), Error> {
        Ok(())
    }
}

macro_rules! impl_params {
    ($($idx:tt: $t:ident),+) => {
        impl<$($t: Bind),+> Params for ($($t,)+) {
            fn bind_all(&self, stmt: &mut Statement<'_>, base: usize) -> Result<(), Error> {
                $(stmt.bind_at(base + $idx, &self.$idx)?;)+
                Ok(())
            }
        }
    };
}

impl_params!(0: A);
impl_params!(0: A, 1: B);
impl_params!(0: A, 1: B, 2: C);
impl_params!(0: A, 1: B, 2: C, 3: D);
impl_params!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_params!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_params!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_params!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_small_integers_bind_as_int() {
        assert!(matches!(7i8.bind_value(), BindValue::Int(7)));
        assert!(matches!(7u16.bind_value(), BindValue::Int(7)));
        assert!(matches!(true.bind_value(), BindValue::Int(1)));
    }

    #[rstest]
    fn test_wide_integers_bind_as_int64() {
        assert!(matches!(7u32.bind_value(), BindValue::Int64(7)));
        assert!(matches!(7i64.bind_value(), BindValue::Int64(7)));
        assert!(matches!(7usize.bind_value(), BindValue::Int64(7)));
    }

    #[rstest]
    fn test_u64_above_signed_range_wraps() {
        let value = u64::MAX;
        assert!(matches!(value.bind_value(), BindValue::Int64(-1)));
    }

    #[rstest]
    fn test_text_defaults_to_copying_policy() {
        let owned = String::from("hello");
        assert!(matches!(owned.bind_value(), BindValue::Text("hello")));
        assert!(matches!("hello".bind_value(), BindValue::Text("hello")));
    }

    #[rstest]
    fn test_static_wrapper_selects_zero_copy_policy() {
        assert!(matches!(
            Static("hello").bind_value(),
            BindValue::StaticText("hello")
        ));

        static BYTES: [u8; 3] = [1, 2, 3];
        assert!(matches!(
            Static(&BYTES[..]).bind_value(),
            BindValue::StaticBlob([1, 2, 3])
        ));
    }

    #[rstest]
    fn test_option_maps_none_to_null() {
        let missing: Option<i64> = None;
        assert!(matches!(missing.bind_value(), BindValue::Null));
        assert!(matches!(Some(5i64).bind_value(), BindValue::Int64(5)));
    }

    #[rstest]
    fn test_zeroblob_carries_its_length() {
        assert!(matches!(ZeroBlob(16).bind_value(), BindValue::ZeroBlob(16)));
    }

    #[rstest]
    fn test_utf16_slices_bind_as_text16() {
        let units: Vec<u16> = "hi".encode_utf16().collect();
        assert!(matches!(units.bind_value(), BindValue::Text16(_)));
    }
}
