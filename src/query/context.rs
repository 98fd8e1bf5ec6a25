// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    error::{GeometryError, Result},
    geometry::vector::Vector,
    numeric::scalar::Scalar,
    query::{ClosestPoint, FindIntersection, FirstPointOfCollision, TestIntersection},
};

/// Serializable settings a [`QueryContext`] is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConfig<T: Scalar> {
    /// Absolute tolerance below which determinants, denominators and
    /// relative speeds count as zero.
    pub tolerance: T,
}

impl<T: Scalar> Default for QueryConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::default_tolerance(),
        }
    }
}

/// Stateless evaluation context: owns the tolerance every query compares
/// against and dispatches to the implementation for a pair of primitive
/// types.
///
/// ```
/// use geoquery::geometry::{Line, Vector};
/// use geoquery::query::QueryContext;
///
/// let ctx = QueryContext::<f64>::new();
/// let line = Line::new(Vector::new([0.0, 0.0, 0.0]), Vector::new([1.0, 0.0, 0.0]));
/// let p = Vector::new([7.0, -34.5, 90.53]);
/// let res = ctx.closest_point(&p, &line);
/// assert_eq!(res.u, 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "QueryConfig<T>",
        into = "QueryConfig<T>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct QueryContext<T: Scalar> {
    tolerance: T,
}

impl<T: Scalar> Default for QueryContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> QueryContext<T> {
    pub fn new() -> Self {
        Self {
            tolerance: T::default_tolerance(),
        }
    }

    pub fn with_tolerance(tolerance: T) -> Result<Self> {
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            log::debug!("rejecting query tolerance {tolerance:?}");
            return Err(GeometryError::InvalidTolerance);
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// `|value| < tolerance`.
    pub fn is_zero(&self, value: T) -> bool {
        value.abs() < self.tolerance
    }

    /// `|value| <= tolerance * scale`; used for determinants whose magnitude
    /// grows with the lengths of non-unit directions. A zero `scale` always
    /// counts as degenerate.
    pub fn is_zero_scaled(&self, value: T, scale: T) -> bool {
        value.abs() <= self.tolerance * scale
    }

    pub fn test_intersection<A, B>(&self, a: &A, b: &B) -> A::Output
    where
        A: TestIntersection<T, B>,
    {
        a.test_intersection(b, self)
    }

    pub fn find_intersection<A, B>(&self, a: &A, b: &B) -> A::Output
    where
        A: FindIntersection<T, B>,
    {
        a.find_intersection(b, self)
    }

    pub fn closest_point<A, B>(&self, a: &A, b: &B) -> A::Output
    where
        A: ClosestPoint<T, B>,
    {
        a.closest_point(b, self)
    }

    pub fn first_point_of_collision<A, B, const N: usize>(
        &self,
        a: &A,
        velocity_a: &Vector<T, N>,
        b: &B,
        velocity_b: &Vector<T, N>,
    ) -> A::Output
    where
        A: FirstPointOfCollision<T, N, B>,
    {
        a.first_point_of_collision(velocity_a, b, velocity_b, self)
    }
}

impl<T: Scalar> TryFrom<QueryConfig<T>> for QueryContext<T> {
    type Error = GeometryError;

    fn try_from(config: QueryConfig<T>) -> Result<Self> {
        Self::with_tolerance(config.tolerance)
    }
}

impl<T: Scalar> From<QueryContext<T>> for QueryConfig<T> {
    fn from(ctx: QueryContext<T>) -> Self {
        Self {
            tolerance: ctx.tolerance,
        }
    }
}
