use crate::maths::errors::{MathsError, Result};
use crate::maths::vector::Vector;
use crate::maths::{Component, Dim, SupportedDim};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use static_assertions::const_assert_eq;
use std::ops::{Index, IndexMut};

pub type Matrix2f = SquareMatrix<f32, 2>;
pub type Matrix3f = SquareMatrix<f32, 3>;
pub type Matrix4f = SquareMatrix<f32, 4>;

const_assert_eq!(std::mem::size_of::<Matrix4f>(), 64);

/// A `ROWS` x `COLUMNS` matrix stored column by column, the layout shaders read uniforms in
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<T: Component, const ROWS: usize, const COLUMNS: usize>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
    values: [[T; ROWS]; COLUMNS],
}

pub type SquareMatrix<T, const SIZE: usize> = Matrix<T, SIZE, SIZE>;

// Safety: repr(transparent) over nested arrays of Pod components
unsafe impl<T: Component, const ROWS: usize, const COLUMNS: usize> Zeroable for Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
}
unsafe impl<T: Component, const ROWS: usize, const COLUMNS: usize> Pod for Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
}

impl<T: Component, const ROWS: usize, const COLUMNS: usize> Default for Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
    fn default() -> Self { Matrix::filled(T::zero()) }
}

impl<T: Component, const ROWS: usize, const COLUMNS: usize> Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
    pub fn filled(value: T) -> Self { Matrix { values: [[value; ROWS]; COLUMNS] } }

    pub const fn from_columns(columns: [[T; ROWS]; COLUMNS]) -> Self { Matrix { values: columns } }

    pub const fn rows(&self) -> usize { ROWS }
    pub const fn columns(&self) -> usize { COLUMNS }

    /// Number of stored elements
    pub const fn len(&self) -> usize { ROWS * COLUMNS }
    pub const fn is_empty(&self) -> bool { false }

    pub fn get(&self, row: usize, column: usize) -> Result<T>
    {
        self.check_bounds(row, column)?;
        Ok(self.values[column][row])
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<&mut Self>
    {
        self.check_bounds(row, column)?;
        self.values[column][row] = value;
        Ok(self)
    }

    pub fn column(&self, column: usize) -> Option<Vector<T, ROWS>> { self.values.get(column).map(|&values| Vector::new(values)) }

    pub fn transpose(&self) -> Matrix<T, COLUMNS, ROWS>
    {
        let mut result = Matrix::<T, COLUMNS, ROWS>::default();
        for (column, values) in self.values.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                result.values[row][column] = value;
            }
        }
        result
    }

    /// Components in column major order
    pub fn as_slice(&self) -> &[T] { bytemuck::cast_slice(&self.values) }
    pub fn as_bytes(&self) -> &[u8] { bytemuck::bytes_of(self) }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()>
    {
        if row < ROWS && column < COLUMNS {
            return Ok(());
        }
        Err(MathsError::IndexOutOfRange { row, column, rows: ROWS, columns: COLUMNS })
    }
}

impl<T: Component, const SIZE: usize> SquareMatrix<T, SIZE>
where
    Dim<SIZE>: SupportedDim,
{
    pub fn identity() -> Self
    {
        let mut matrix = SquareMatrix::default();
        for i in 0..SIZE {
            matrix.values[i][i] = T::one();
        }
        matrix
    }

    /// Computed in `f64` by gaussian elimination with partial pivoting
    pub fn determinant(&self) -> f64
    {
        let mut rows = [[0.0_f64; SIZE]; SIZE];
        for (column, values) in self.values.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                rows[row][column] = AsPrimitive::<f64>::as_(value);
            }
        }

        let mut determinant = 1.0;
        for pivot in 0..SIZE {
            let mut best = pivot;
            for row in pivot + 1..SIZE {
                if rows[row][pivot].abs() > rows[best][pivot].abs() {
                    best = row;
                }
            }
            if rows[best][pivot] == 0.0 {
                return 0.0;
            }
            if best != pivot {
                rows.swap(best, pivot);
                determinant = -determinant;
            }

            determinant *= rows[pivot][pivot];
            for row in pivot + 1..SIZE {
                let factor = rows[row][pivot] / rows[pivot][pivot];
                for column in pivot..SIZE {
                    rows[row][column] -= factor * rows[pivot][column];
                }
            }
        }
        determinant
    }
}

impl<T: Component, const ROWS: usize, const COLUMNS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
    type Output = T;

    /// Indexed by `(row, column)`
    fn index(&self, (row, column): (usize, usize)) -> &T { &self.values[column][row] }
}

impl<T: Component, const ROWS: usize, const COLUMNS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLUMNS>
where
    Dim<ROWS>: SupportedDim,
    Dim<COLUMNS>: SupportedDim,
{
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T { &mut self.values[column][row] }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use more_asserts::assert_lt;

    fn assert_close(actual: f64, expected: f64) { assert_lt!((actual - expected).abs(), 1e-9); }

    #[test]
    fn identity_has_ones_on_the_diagonal()
    {
        let identity = Matrix4f::identity();
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(identity[(row, column)], if row == column { 1.0 } else { 0.0 });
            }
        }
        assert_close(identity.determinant(), 1.0);
    }

    #[test]
    fn dimensions()
    {
        let matrix = Matrix::<i32, 2, 4>::filled(3);
        assert_eq!((matrix.rows(), matrix.columns(), matrix.len()), (2, 4, 8));
        assert!(matrix.as_slice().iter().all(|&value| value == 3));
        assert_eq!(matrix.as_bytes().len(), 32);
    }

    #[test]
    fn get_and_set_are_bounds_checked()
    {
        let mut matrix = Matrix::<f32, 3, 2>::default();
        matrix.set(2, 1, 5.0).unwrap();
        assert_eq!(matrix.get(2, 1), Ok(5.0));
        assert_eq!(matrix[(2, 1)], 5.0);
        assert_eq!(
            matrix.get(3, 0),
            Err(MathsError::IndexOutOfRange { row: 3, column: 0, rows: 3, columns: 2 })
        );
        assert!(matrix.set(0, 2, 1.0).is_err());
    }

    #[test]
    fn storage_is_column_major()
    {
        let matrix = Matrix::<i32, 2, 3>::from_columns([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(matrix[(0, 1)], 3);
        assert_eq!(matrix[(1, 2)], 6);
        assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(matrix.column(1), Some(Vector::new([3, 4])));
        assert_eq!(matrix.column(3), None);
    }

    #[test]
    fn transpose_swaps_rows_and_columns()
    {
        let matrix = Matrix::<i32, 2, 3>::from_columns([[1, 2], [3, 4], [5, 6]]);
        let transposed: Matrix<i32, 3, 2> = matrix.transpose();
        for row in 0..2 {
            for column in 0..3 {
                assert_eq!(transposed[(column, row)], matrix[(row, column)]);
            }
        }
        assert_eq!(transposed.transpose(), matrix);
    }

    #[test]
    fn determinant_of_known_matrices()
    {
        let two = Matrix2f::from_columns([[4.0, 2.0], [7.0, 6.0]]);
        assert_close(two.determinant(), 10.0);

        // rows: [2 0 1] [1 3 2] [1 1 2]
        let three = Matrix3f::from_columns([[2.0, 1.0, 1.0], [0.0, 3.0, 1.0], [1.0, 2.0, 2.0]]);
        assert_close(three.determinant(), 6.0);
        assert_close(three.transpose().determinant(), 6.0);

        // Needs a row swap on the first pivot
        let swapped = SquareMatrix::<i32, 2>::from_columns([[0, 1], [1, 0]]);
        assert_close(swapped.determinant(), -1.0);

        let singular = Matrix3f::from_columns([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 5.0]]);
        assert_close(singular.determinant(), 0.0);
    }
}
