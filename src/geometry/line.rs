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
};

/// Infinite line `origin + u * direction`, `u ∈ (-∞, ∞)`, with a unit
/// direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "LineFields<T, N>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Line<T: Scalar, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

/// Unchecked wire layout; loading goes through [`Line::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct LineFields<T: Scalar, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> TryFrom<LineFields<T, N>> for Line<T, N> {
    type Error = GeometryError;

    fn try_from(data: LineFields<T, N>) -> Result<Self> {
        Self::try_new(data.origin, data.direction)
    }
}

impl<T: Scalar, const N: usize> Line<T, N> {
    /// Normalizes `direction`. A zero direction is kept as is; queries treat
    /// such a line as the single point `origin`.
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn try_new(origin: Vector<T, N>, direction: Vector<T, N>) -> Result<Self> {
        if !(direction.length() > T::default_tolerance()) {
            return Err(GeometryError::ZeroDirection);
        }
        Ok(Self::new(origin, direction))
    }

    /// Line through `p0` and `p1`, parametrized so that `u = 0` is `p0`.
    pub fn from_points(p0: Vector<T, N>, p1: Vector<T, N>) -> Result<Self> {
        Self::try_new(p0, p1 - p0)
    }

    pub fn origin(&self) -> &Vector<T, N> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    pub fn point_at(&self, u: T) -> Vector<T, N> {
        self.origin + self.direction * u
    }
}

pub type Line2<T> = Line<T, 2>;
pub type Line3<T> = Line<T, 3>;
