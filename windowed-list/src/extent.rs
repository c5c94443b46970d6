/// Conversion of a height-function result into a layout extent.
///
/// Height functions may return any primitive numeric type. Malformed values are not an
/// error: `into_extent` returns `None` for negative or NaN input (the layout then
/// uses `0`), and values larger than `u32::MAX` (including `+inf`) saturate.
pub trait IntoExtent {
    fn into_extent(self) -> Option<u32>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl IntoExtent for $t {
            #[inline]
            fn into_extent(self) -> Option<u32> {
                Some(u32::try_from(self).unwrap_or(u32::MAX))
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl IntoExtent for $t {
            #[inline]
            fn into_extent(self) -> Option<u32> {
                if self < 0 {
                    return None;
                }
                Some(u32::try_from(self).unwrap_or(u32::MAX))
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl IntoExtent for $t {
            #[inline]
            fn into_extent(self) -> Option<u32> {
                if self.is_nan() || self < 0.0 {
                    return None;
                }
                // `as` saturates for floats (and maps +inf to u32::MAX).
                Some(self as u32)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);
impl_float!(f32, f64);

/// Clamps an extent, reporting whether clamping to zero happened.
#[inline]
pub(crate) fn clamp_extent(h: impl IntoExtent) -> (u32, bool) {
    match h.into_extent() {
        Some(v) => (v, false),
        None => (0, true),
    }
}
