// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of caller numeric types into [`Real`].

use alloc::vec::Vec;

/// The internal floating-point representation of data values.
pub type Real = f64;

/// A primitive numeric type that can be plotted.
pub trait IntoReal: Copy {
    /// Converts `self` to [`Real`], rounding to the nearest representable value.
    fn into_real(self) -> Real;
}

macro_rules! impl_into_real {
    (exact: $($t:ty),*) => {
        $(
            impl IntoReal for $t {
                fn into_real(self) -> Real {
                    Real::from(self)
                }
            }
        )*
    };
    (rounded: $($t:ty),*) => {
        $(
            impl IntoReal for $t {
                fn into_real(self) -> Real {
                    self as Real
                }
            }
        )*
    };
}

impl_into_real!(exact: i8, i16, i32, u8, u16, u32, f32, f64);
impl_into_real!(rounded: i64, u64, i128, u128, isize, usize);

/// Converts a slice of plottable values.
pub fn to_reals<T: IntoReal>(values: &[T]) -> Vec<Real> {
    values.iter().map(|v| v.into_real()).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_and_float_inputs_agree() {
        assert_eq!(to_reals(&[1_i32, -2, 3]), to_reals(&[1.0_f32, -2.0, 3.0]));
        assert_eq!(to_reals(&[7_usize]), [7.0]);
        assert!(u64::MAX.into_real() > 1.8e19, "wide integers round instead of wrapping");
    }
}
