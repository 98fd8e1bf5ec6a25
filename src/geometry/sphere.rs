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

/// Solid N-dimensional ball: every point within `radius` of `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "SphereFields<T, N>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Sphere<T: Scalar, const N: usize> {
    center: Vector<T, N>,
    radius: T,
}

/// Unchecked wire layout; loading goes through [`Sphere::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct SphereFields<T: Scalar, const N: usize> {
    center: Vector<T, N>,
    radius: T,
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> TryFrom<SphereFields<T, N>> for Sphere<T, N> {
    type Error = GeometryError;

    fn try_from(data: SphereFields<T, N>) -> Result<Self> {
        Self::try_new(data.center, data.radius)
    }
}

/// The solid and the surface share a representation; queries treat it as
/// solid.
pub type Ball<T, const N: usize> = Sphere<T, N>;
pub type Circle<T> = Sphere<T, 2>;
pub type Sphere3<T> = Sphere<T, 3>;

impl<T: Scalar, const N: usize> Sphere<T, N> {
    /// A negative radius is stored as its absolute value.
    pub fn new(center: Vector<T, N>, radius: T) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn try_new(center: Vector<T, N>, radius: T) -> Result<Self> {
        if !(radius >= T::zero()) || !radius.is_finite() {
            return Err(GeometryError::NegativeRadius);
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> &Vector<T, N> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn contains(&self, p: &Vector<T, N>) -> bool {
        self.center.distance_squared_to(p) <= self.radius * self.radius
    }
}
