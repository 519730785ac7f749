use crate::maths::errors::{MathsError, Result};
use crate::maths::{sealed, Component, Dim, SupportedDim};
use bytemuck::{Pod, Zeroable};
use derive_more::IntoIterator;
use num_traits::AsPrimitive;
use static_assertions::const_assert_eq;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// Largest difference two components may have and still compare equal
pub const COMPARISON_TOLERANCE: f64 = 1e-4;

/// A vector of 2, 3 or 4 components laid out contiguously, as graphics APIs expect them
#[repr(transparent)]
#[derive(Copy, Clone, Debug, IntoIterator)]
#[into_iterator(owned, ref, ref_mut)]
pub struct Vector<T: Component, const SIZE: usize>([T; SIZE])
where
    Dim<SIZE>: SupportedDim;

pub type Vector2f = Vector<f32, 2>;
pub type Vector3f = Vector<f32, 3>;
pub type Vector4f = Vector<f32, 4>;

pub type Texcoords = Vector2f;
pub type Vertex = Vector3f;
pub type Normal = Vector3f;
/// Red, green, blue and alpha, each expected in `[0, 1]`
pub type Colour = Vector4f;

const_assert_eq!(std::mem::size_of::<Vector2f>(), 8);
const_assert_eq!(std::mem::size_of::<Vector3f>(), 12);
const_assert_eq!(std::mem::size_of::<Colour>(), 16);
const_assert_eq!(std::mem::align_of::<Colour>(), std::mem::align_of::<f32>());

// Safety: repr(transparent) over an array of Pod components, so no padding and every bit pattern is valid
unsafe impl<T: Component, const SIZE: usize> Zeroable for Vector<T, SIZE> where Dim<SIZE>: SupportedDim {}
unsafe impl<T: Component, const SIZE: usize> Pod for Vector<T, SIZE> where Dim<SIZE>: SupportedDim {}

/// Something a vector can be built from: a single scalar, or the leading components of another vector
///
/// Implemented for the primitive numeric types and for vectors, anything else is rejected at compile time.
pub trait ComponentSource<T: Component>: sealed::Sealed
{
    /// Writes as many leading values as fit into `slots` and returns how many were written
    fn write_into(&self, slots: &mut [T]) -> usize;
}

macro_rules! impl_scalar_source {
    ($($scalar:ty),*) => {
        $(
            impl<T: Component> ComponentSource<T> for $scalar
            where
                $scalar: AsPrimitive<T>,
            {
                fn write_into(&self, slots: &mut [T]) -> usize
                {
                    match slots.first_mut() {
                        Some(slot) => {
                            *slot = AsPrimitive::<T>::as_(*self);
                            1
                        }
                        None => 0,
                    }
                }
            }
        )*
    };
}

impl_scalar_source!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Component, const SIZE: usize> sealed::Sealed for Vector<T, SIZE> where Dim<SIZE>: SupportedDim {}

impl<T: Component, const SIZE: usize> ComponentSource<T> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn write_into(&self, slots: &mut [T]) -> usize
    {
        let count = SIZE.min(slots.len());
        slots[..count].copy_from_slice(&self.0[..count]);
        count
    }
}

/// Builds a vector from scalars and other vectors, see [`Vector::from_sources`]
///
/// ```
/// use mtlkit::maths::{Vector2f, Vector3f};
/// use mtlkit::vector;
///
/// let texcoords: Vector2f = vector![1.0, 2.0];
/// let position: Vector3f = vector![texcoords, 5];
/// assert_eq!(position, Vector3f::new([1.0, 2.0, 5.0]));
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::maths::vector::Vector::default()
    };
    ($($source:expr),+ $(,)?) => {
        $crate::maths::vector::Vector::from_sources(
            &[$(&$source as &dyn $crate::maths::vector::ComponentSource<_>),+]
        )
    };
}

impl<T: Component, const SIZE: usize> Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    pub const fn new(values: [T; SIZE]) -> Self { Vector(values) }

    pub fn zero() -> Self { Vector([T::zero(); SIZE]) }

    /// Concatenates the components of every source, in order
    ///
    /// Scalars are converted to `T` and fill one slot each, vectors fill as many slots as they have components
    /// (or as many as are left). Slots nothing was written to are zero, sources beyond the last slot are ignored.
    pub fn from_sources(sources: &[&dyn ComponentSource<T>]) -> Self
    {
        let mut values = [T::zero(); SIZE];
        let mut filled = 0;
        for source in sources {
            filled += source.write_into(&mut values[filled..]);
        }
        Vector(values)
    }

    /// Converts to another component count, truncating or padding with zeros
    pub fn resize<const OTHER: usize>(&self) -> Vector<T, OTHER>
    where
        Dim<OTHER>: SupportedDim,
    {
        Vector::from_sources(&[self as &dyn ComponentSource<T>])
    }

    /// Copies the leading components `other` shares with `self`
    ///
    /// Unlike [`Vector::resize`], components of `self` beyond the length of `other` keep their current value.
    pub fn assign_from<const OTHER: usize>(&mut self, other: &Vector<T, OTHER>) -> &mut Self
    where
        Dim<OTHER>: SupportedDim,
    {
        other.write_into(&mut self.0);
        self
    }

    pub const fn size(&self) -> usize { SIZE }

    pub fn get(&self, index: usize) -> Option<T> { self.0.get(index).copied() }

    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> Result<T> { self.named(2, "z|b") }
    pub fn w(&self) -> Result<T> { self.named(3, "w|a") }

    pub fn u(&self) -> T { self.x() }
    pub fn v(&self) -> T { self.y() }

    pub fn r(&self) -> T { self.x() }
    pub fn g(&self) -> T { self.y() }
    pub fn b(&self) -> Result<T> { self.z() }
    pub fn a(&self) -> Result<T> { self.w() }

    pub fn set_x(&mut self, value: T) -> &mut Self
    {
        self.0[0] = value;
        self
    }

    pub fn set_y(&mut self, value: T) -> &mut Self
    {
        self.0[1] = value;
        self
    }

    pub fn set_z(&mut self, value: T) -> Result<&mut Self>
    {
        *self.named_mut(2, "z|b")? = value;
        Ok(self)
    }

    pub fn set_w(&mut self, value: T) -> Result<&mut Self>
    {
        *self.named_mut(3, "w|a")? = value;
        Ok(self)
    }

    pub fn set_u(&mut self, value: T) -> &mut Self { self.set_x(value) }
    pub fn set_v(&mut self, value: T) -> &mut Self { self.set_y(value) }

    pub fn set_r(&mut self, value: T) -> &mut Self { self.set_x(value) }
    pub fn set_g(&mut self, value: T) -> &mut Self { self.set_y(value) }
    pub fn set_b(&mut self, value: T) -> Result<&mut Self> { self.set_z(value) }
    pub fn set_a(&mut self, value: T) -> Result<&mut Self> { self.set_w(value) }

    fn named(&self, index: usize, accessor: &'static str) -> Result<T>
    {
        self.get(index)
            .ok_or(MathsError::OutOfRange { accessor, size: SIZE })
    }

    fn named_mut(&mut self, index: usize, accessor: &'static str) -> Result<&mut T>
    {
        self.0
            .get_mut(index)
            .ok_or(MathsError::OutOfRange { accessor, size: SIZE })
    }

    pub const fn as_array(&self) -> &[T; SIZE] { &self.0 }
    pub fn as_slice(&self) -> &[T] { &self.0 }
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Pointer to the first component, for APIs taking a contiguous array of `SIZE` values
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr() }
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr() }

    pub fn as_bytes(&self) -> &[u8] { bytemuck::bytes_of(self) }
    pub fn as_bytes_mut(&mut self) -> &mut [u8] { bytemuck::bytes_of_mut(self) }

    /// `+=` that hands back `self` so further operations can be chained
    pub fn add_in_place(&mut self, other: &Self) -> &mut Self
    {
        for (component, &rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *component = *component + rhs;
        }
        self
    }

    pub fn sub_in_place(&mut self, other: &Self) -> &mut Self
    {
        for (component, &rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *component = *component - rhs;
        }
        self
    }

    pub fn mul_in_place(&mut self, factor: T) -> &mut Self
    {
        for component in self.0.iter_mut() {
            *component = *component * factor;
        }
        self
    }

    /// Integer components panic on a zero divisor, like the scalar division they forward to
    pub fn div_in_place(&mut self, divisor: T) -> &mut Self
    {
        for component in self.0.iter_mut() {
            *component = *component / divisor;
        }
        self
    }
}

impl<T: Component, const SIZE: usize> Default for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn default() -> Self { Self::zero() }
}

impl<T: Component, const SIZE: usize> From<[T; SIZE]> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn from(values: [T; SIZE]) -> Self { Vector(values) }
}

impl<T: Component, const SIZE: usize> From<Vector<T, SIZE>> for [T; SIZE]
where
    Dim<SIZE>: SupportedDim,
{
    fn from(vector: Vector<T, SIZE>) -> Self { vector.0 }
}

impl<T: Component, const SIZE: usize> Index<usize> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    type Output = T;

    fn index(&self, index: usize) -> &T { &self.0[index] }
}

impl<T: Component, const SIZE: usize> IndexMut<usize> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }
}

impl<T: Component, const SIZE: usize> PartialEq for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    /// Components match when they are no further apart than [`COMPARISON_TOLERANCE`], a NaN component never matches
    fn eq(&self, other: &Self) -> bool
    {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&lhs, &rhs)| lhs.distance(rhs) <= COMPARISON_TOLERANCE)
    }
}

impl<T: Component, const SIZE: usize> fmt::Display for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("{")?;
        for (index, component) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            component.fmt_decimal(f)?;
        }
        f.write_str("}")
    }
}

impl<T: Component, const SIZE: usize> AddAssign for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn add_assign(&mut self, rhs: Self) { self.add_in_place(&rhs); }
}

impl<T: Component, const SIZE: usize> SubAssign for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn sub_assign(&mut self, rhs: Self) { self.sub_in_place(&rhs); }
}

impl<T: Component, const SIZE: usize> MulAssign<T> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn mul_assign(&mut self, rhs: T) { self.mul_in_place(rhs); }
}

impl<T: Component, const SIZE: usize> DivAssign<T> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    fn div_assign(&mut self, rhs: T) { self.div_in_place(rhs); }
}

impl<T: Component, const SIZE: usize> Add for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self
    {
        self += rhs;
        self
    }
}

impl<T: Component, const SIZE: usize> Sub for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self
    {
        self -= rhs;
        self
    }
}

impl<T: Component, const SIZE: usize> Mul<T> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self
    {
        self *= rhs;
        self
    }
}

impl<T: Component, const SIZE: usize> Div<T> for Vector<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    type Output = Self;

    fn div(mut self, rhs: T) -> Self
    {
        self /= rhs;
        self
    }
}

// scalar * vector, one impl per component type since the scalar is the foreign left hand side
macro_rules! impl_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl<const SIZE: usize> Mul<Vector<$scalar, SIZE>> for $scalar
            where
                Dim<SIZE>: SupportedDim,
            {
                type Output = Vector<$scalar, SIZE>;

                fn mul(self, rhs: Vector<$scalar, SIZE>) -> Self::Output { rhs * self }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
