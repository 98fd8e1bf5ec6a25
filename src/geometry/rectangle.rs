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
    geometry::{util::orthogonal_complement, vector::Vector},
    numeric::scalar::Scalar,
};

/// Planar rectangle `center + s0 * axis0 + s1 * axis1` with
/// `|s0| <= extent0` and `|s1| <= extent1`.
///
/// The axes are expected to be orthonormal; the closest-point clamp relies
/// on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RectangleFields<T, N>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Rectangle<T: Scalar, const N: usize> {
    center: Vector<T, N>,
    axes: [Vector<T, N>; 2],
    extents: [T; 2],
}

/// Unchecked wire layout; loading goes through [`Rectangle::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct RectangleFields<T: Scalar, const N: usize> {
    center: Vector<T, N>,
    axes: [Vector<T, N>; 2],
    extents: [T; 2],
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> TryFrom<RectangleFields<T, N>> for Rectangle<T, N> {
    type Error = GeometryError;

    fn try_from(data: RectangleFields<T, N>) -> Result<Self> {
        Self::try_new(data.center, data.axes, data.extents)
    }
}

pub type Rectangle3<T> = Rectangle<T, 3>;

impl<T: Scalar, const N: usize> Rectangle<T, N> {
    pub fn new(center: Vector<T, N>, axes: [Vector<T, N>; 2], extents: [T; 2]) -> Self {
        Self {
            center,
            axes,
            extents: extents.map(|e| e.abs()),
        }
    }

    pub fn try_new(center: Vector<T, N>, axes: [Vector<T, N>; 2], extents: [T; 2]) -> Result<Self> {
        if extents.iter().any(|e| !(*e >= T::zero()) || !e.is_finite()) {
            return Err(GeometryError::NegativeExtent);
        }
        let eps = T::default_tolerance();
        let unit = |a: &Vector<T, N>| (a.length_squared() - T::one()).abs() < eps;
        if !unit(&axes[0]) || !unit(&axes[1]) || axes[0].dot(&axes[1]).abs() >= eps {
            return Err(GeometryError::NonOrthonormalAxes);
        }
        Ok(Self {
            center,
            axes,
            extents,
        })
    }

    pub fn center(&self) -> &Vector<T, N> {
        &self.center
    }

    pub fn axis(&self, i: usize) -> &Vector<T, N> {
        &self.axes[i]
    }

    pub fn extent(&self, i: usize) -> T {
        self.extents[i]
    }

    pub fn point_at(&self, s0: T, s1: T) -> Vector<T, N> {
        self.center + self.axes[0] * s0 + self.axes[1] * s1
    }

    /// Corners in counter-clockwise order starting at `(-e0, -e1)`.
    pub fn vertices(&self) -> [Vector<T, N>; 4] {
        let a0 = self.axes[0] * self.extents[0];
        let a1 = self.axes[1] * self.extents[1];
        [
            self.center - a0 - a1,
            self.center + a0 - a1,
            self.center + a0 + a1,
            self.center - a0 + a1,
        ]
    }
}

impl<T: Scalar> Rectangle<T, 3> {
    /// Rectangle lying in the plane through `center` with the given normal;
    /// the in-plane axes are chosen by [`orthogonal_complement`].
    pub fn from_normal(center: Vector<T, 3>, normal: &Vector<T, 3>, extents: [T; 2]) -> Result<Self> {
        if !(normal.length() > T::default_tolerance()) {
            return Err(GeometryError::ZeroNormal);
        }
        let (u, v) = orthogonal_complement(normal);
        Self::try_new(center, [u, v], extents)
    }

    /// `axis0 × axis1`.
    pub fn normal(&self) -> Vector<T, 3> {
        self.axes[0].cross(&self.axes[1])
    }
}
