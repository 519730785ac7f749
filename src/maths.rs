pub mod errors;
pub mod matrix;
pub mod vector;

use num_traits::{AsPrimitive, Num};
use std::fmt;

pub use errors::MathsError;
pub use matrix::{Matrix, Matrix2f, Matrix3f, Matrix4f, SquareMatrix};
pub use vector::{Colour, ComponentSource, Normal, Texcoords, Vector, Vector2f, Vector3f, Vector4f, Vertex};

/// Type level stand-in for a component count, so that counts can be restricted with trait bounds
pub struct Dim<const SIZE: usize>;

/// Implemented only for the dimensions vectors and matrices may have (2, 3 and 4)
pub trait SupportedDim {}

impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}
impl SupportedDim for Dim<4> {}

mod sealed
{
    pub trait Sealed {}
}

/// An arithmetic type that can be stored in a vector or matrix
///
/// Only the primitive integer and floating point types implement this, `bool` and compound types never do
pub trait Component: Num + Copy + PartialOrd + fmt::Debug + bytemuck::Pod + AsPrimitive<f64> + sealed::Sealed
{
    /// Writes the value with a decimal point, even when it is a whole number
    fn fmt_decimal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Absolute difference to `other`, taken in `Self` before widening so that no precision is lost
    ///
    /// NaN when either side is NaN.
    fn distance(self, other: Self) -> f64;
}

macro_rules! impl_float_component {
    ($($float:ty),*) => {
        $(
            impl Component for $float
            {
                fn fmt_decimal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result
                {
                    let mut text = format!("{self:?}");
                    // Debug switches to exponent form for very large and very small values, `1e16`
                    if self.is_finite() && !text.contains('.') {
                        let mantissa_end = text.find('e').unwrap_or(text.len());
                        text.insert_str(mantissa_end, ".0");
                    }
                    f.write_str(&text)
                }

                fn distance(self, other: Self) -> f64 { AsPrimitive::<f64>::as_((self - other).abs()) }
            }
        )*
    };
}

macro_rules! impl_integer_component {
    ($($integer:ty),*) => {
        $(
            impl Component for $integer
            {
                fn fmt_decimal(self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self}.0") }

                fn distance(self, other: Self) -> f64 { AsPrimitive::<f64>::as_(self.abs_diff(other)) }
            }
        )*
    };
}

macro_rules! impl_sealed {
    ($($scalar:ty),*) => {
        $(
            impl sealed::Sealed for $scalar {}
        )*
    };
}

impl_sealed!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_component!(f32, f64);
impl_integer_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
