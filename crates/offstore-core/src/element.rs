//! Fixed-width values that can be persisted by the matrix codec.

use std::fmt;

/// A plain numeric value with a fixed on-disk width.
///
/// Encoding uses the platform's native byte order, matching the raw
/// contiguous value blocks of the persisted matrix layout.
pub trait Element: Copy + PartialEq + fmt::Debug + 'static {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Write the native-order encoding into `out`.
    ///
    /// `out.len()` must equal [`Self::WIDTH`].
    fn write_ne(self, out: &mut [u8]);

    /// Decode a value from exactly [`Self::WIDTH`] native-order bytes.
    fn read_ne(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn write_ne(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn read_ne(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
