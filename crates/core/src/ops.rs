//! Arithmetic and comparison on [`GraphMatrix`].
//!
//! Binary operations between graphs (`+`, `-`, matrix product, ordering),
//! scalar multiplication and division can fail, so they are exposed as
//! `try_*` methods that return `Result`. Cell arithmetic is checked and an
//! out-of-range result is `GraphError::Overflow`.
//!
//! The `std::ops` impls (`Neg`, `Mul<Weight>`, `MulAssign<Weight>`), along with
//! [`GraphMatrix::negate`], [`GraphMatrix::scalar_mul`] and the increment and
//! decrement family, cannot report errors. They use two's-complement wrapping
//! arithmetic: `-i64::MIN` stays `i64::MIN` and `i64::MAX + 1` becomes
//! `i64::MIN`.
//!
//! Every value-returning operation builds a fresh matrix. The `*_assign`
//! forms compute into a copy and replace the receiver only on success.

use std::ops::{Mul, MulAssign, Neg};

use common::error::GraphError;
use common::types::{AdjacencyMatrix, Weight};

use super::graph::GraphMatrix;

impl GraphMatrix {
    /// Elementwise sum.
    ///
    /// # Errors
    /// Returns `GraphError::DimensionMismatch` if the vertex counts differ, or
    /// `GraphError::Overflow` if any cell sum leaves the `Weight` range.
    pub fn try_add(&self, other: &GraphMatrix) -> Result<GraphMatrix, GraphError> {
        self.zip_with(other, Weight::checked_add)
    }

    pub fn try_add_assign(&mut self, other: &GraphMatrix) -> Result<(), GraphError> {
        *self = self.try_add(other)?;
        Ok(())
    }

    /// Elementwise difference.
    ///
    /// # Errors
    /// Returns `GraphError::DimensionMismatch` if the vertex counts differ, or
    /// `GraphError::Overflow` if any cell difference leaves the `Weight` range.
    pub fn try_sub(&self, other: &GraphMatrix) -> Result<GraphMatrix, GraphError> {
        self.zip_with(other, Weight::checked_sub)
    }

    pub fn try_sub_assign(&mut self, other: &GraphMatrix) -> Result<(), GraphError> {
        *self = self.try_sub(other)?;
        Ok(())
    }

    /// Checked scalar multiplication.
    ///
    /// # Errors
    /// Returns `GraphError::Overflow` if any product leaves the `Weight` range.
    pub fn try_scalar_mul(&self, scalar: Weight) -> Result<GraphMatrix, GraphError> {
        self.map_checked(|value| value.checked_mul(scalar))
    }

    pub fn try_scalar_mul_assign(&mut self, scalar: Weight) -> Result<(), GraphError> {
        *self = self.try_scalar_mul(scalar)?;
        Ok(())
    }

    /// Wrapping scalar multiplication. See [`GraphMatrix::try_scalar_mul`] for
    /// the checked form.
    pub fn scalar_mul(&self, scalar: Weight) -> GraphMatrix {
        let mut result = self.clone();
        result.scalar_mul_assign(scalar);
        result
    }

    pub fn scalar_mul_assign(&mut self, scalar: Weight) {
        self.cells_mut().for_each(|value| *value = value.wrapping_mul(scalar));
    }

    /// Elementwise integer division, truncating toward zero.
    ///
    /// # Errors
    /// Returns `GraphError::DivisionByZero` if `scalar == 0`, or
    /// `GraphError::Overflow` for `i64::MIN / -1`.
    pub fn try_div(&self, scalar: Weight) -> Result<GraphMatrix, GraphError> {
        if scalar == 0 {
            return Err(GraphError::DivisionByZero);
        }
        self.map_checked(|value| value.checked_div(scalar))
    }

    pub fn try_div_assign(&mut self, scalar: Weight) -> Result<(), GraphError> {
        *self = self.try_div(scalar)?;
        Ok(())
    }

    /// Wrapping negation.
    pub fn negate(&self) -> GraphMatrix {
        self.scalar_mul(-1)
    }

    /// Unary plus: an independent copy of the graph.
    pub fn identity(&self) -> GraphMatrix {
        self.clone()
    }

    /// Standard square matrix product `self × other`.
    ///
    /// # Errors
    /// Returns `GraphError::DimensionMismatch` if the vertex counts differ, or
    /// `GraphError::Overflow` if any product or partial sum leaves the
    /// `Weight` range.
    pub fn try_matmul(&self, other: &GraphMatrix) -> Result<GraphMatrix, GraphError> {
        self.check_same_size(other)?;

        let n = self.vertices();
        let a = self.adjacency_matrix();
        let b = other.adjacency_matrix();

        let product = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        (0..n).try_fold(0, |acc: Weight, k| {
                            a[i][k]
                                .checked_mul(b[k][j])
                                .and_then(|term| acc.checked_add(term))
                                .ok_or(GraphError::Overflow)
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<AdjacencyMatrix, _>>()?;

        Ok(GraphMatrix::from_parts(product))
    }

    /// Prefix `++`: adds one to every cell, zeros included. Wraps at `i64::MAX`.
    pub fn increment(&mut self) -> &mut Self {
        self.cells_mut().for_each(|value| *value = value.wrapping_add(1));
        self
    }

    /// Postfix `++`: increments in place and returns the pre-increment snapshot.
    pub fn post_increment(&mut self) -> GraphMatrix {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Prefix `--`. Wraps at `i64::MIN`.
    pub fn decrement(&mut self) -> &mut Self {
        self.cells_mut().for_each(|value| *value = value.wrapping_sub(1));
        self
    }

    /// Postfix `--`.
    pub fn post_decrement(&mut self) -> GraphMatrix {
        let snapshot = self.clone();
        self.decrement();
        snapshot
    }

    /// Edge-presence-first ordering.
    ///
    /// Cells are scanned in row-major order. The first cell where exactly one
    /// of the two graphs has an edge decides: the graph holding the edge is
    /// greater. Without such a cell, the graph with the larger sum of cell
    /// values is greater.
    ///
    /// This is not a total order. Two graphs with the same edge pattern and
    /// equal sums compare neither greater nor less, even when they differ.
    ///
    /// # Errors
    /// Returns `GraphError::DimensionMismatch` if the vertex counts differ.
    pub fn greater_than(&self, other: &GraphMatrix) -> Result<bool, GraphError> {
        self.check_same_size(other)?;

        for (a, b) in self.cells().zip(other.cells()) {
            match (a != 0, b != 0) {
                (true, false) => return Ok(true),
                (false, true) => return Ok(false),
                _ => {}
            }
        }

        let self_sum: i128 = self.cells().map(i128::from).sum();
        let other_sum: i128 = other.cells().map(i128::from).sum();
        Ok(self_sum > other_sum)
    }

    pub fn less_than(&self, other: &GraphMatrix) -> Result<bool, GraphError> {
        other.greater_than(self)
    }

    /// Complement of [`GraphMatrix::less_than`].
    pub fn greater_or_equal(&self, other: &GraphMatrix) -> Result<bool, GraphError> {
        Ok(!self.less_than(other)?)
    }

    /// Complement of [`GraphMatrix::greater_than`].
    pub fn less_or_equal(&self, other: &GraphMatrix) -> Result<bool, GraphError> {
        Ok(!self.greater_than(other)?)
    }

    fn zip_with<F>(&self, other: &GraphMatrix, op: F) -> Result<GraphMatrix, GraphError>
    where
        F: Fn(Weight, Weight) -> Option<Weight>,
    {
        self.check_same_size(other)?;

        let matrix = self
            .adjacency_matrix()
            .iter()
            .zip(other.adjacency_matrix())
            .map(|(left, right)| {
                left.iter()
                    .zip(right)
                    .map(|(&a, &b)| op(a, b).ok_or(GraphError::Overflow))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<AdjacencyMatrix, _>>()?;

        Ok(GraphMatrix::from_parts(matrix))
    }

    fn map_checked<F>(&self, op: F) -> Result<GraphMatrix, GraphError>
    where
        F: Fn(Weight) -> Option<Weight>,
    {
        let matrix = self
            .adjacency_matrix()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| op(value).ok_or(GraphError::Overflow))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<AdjacencyMatrix, _>>()?;

        Ok(GraphMatrix::from_parts(matrix))
    }
}

impl Neg for &GraphMatrix {
    type Output = GraphMatrix;

    fn neg(self) -> GraphMatrix {
        self.negate()
    }
}

impl Neg for GraphMatrix {
    type Output = GraphMatrix;

    fn neg(mut self) -> GraphMatrix {
        self.scalar_mul_assign(-1);
        self
    }
}

impl Mul<Weight> for &GraphMatrix {
    type Output = GraphMatrix;

    fn mul(self, scalar: Weight) -> GraphMatrix {
        self.scalar_mul(scalar)
    }
}

impl Mul<Weight> for GraphMatrix {
    type Output = GraphMatrix;

    fn mul(mut self, scalar: Weight) -> GraphMatrix {
        self.scalar_mul_assign(scalar);
        self
    }
}

impl MulAssign<Weight> for GraphMatrix {
    fn mul_assign(&mut self, scalar: Weight) {
        self.scalar_mul_assign(scalar);
    }
}
