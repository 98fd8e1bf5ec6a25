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

/// Hyperplane `{ p : normal · p + offset = 0 }` with a unit normal.
///
/// The signed distance is positive on the side the normal points to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "PlaneFields<T, N>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Plane<T: Scalar, const N: usize> {
    normal: Vector<T, N>,
    offset: T,
}

/// Unchecked wire layout; loading goes through [`Plane::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct PlaneFields<T: Scalar, const N: usize> {
    normal: Vector<T, N>,
    offset: T,
}

#[cfg(feature = "serde")]
impl<T: Scalar, const N: usize> TryFrom<PlaneFields<T, N>> for Plane<T, N> {
    type Error = GeometryError;

    fn try_from(data: PlaneFields<T, N>) -> Result<Self> {
        Self::try_new(data.normal, data.offset)
    }
}

pub type Plane3<T> = Plane<T, 3>;

impl<T: Scalar, const N: usize> Plane<T, N> {
    /// Scales `normal` to unit length and `offset` by the same factor, so
    /// the plane itself is unchanged. A zero normal is kept as is.
    pub fn new(normal: Vector<T, N>, offset: T) -> Self {
        let len = normal.length();
        if len > T::zero() {
            Self {
                normal: normal / len,
                offset: offset / len,
            }
        } else {
            Self { normal, offset }
        }
    }

    pub fn try_new(normal: Vector<T, N>, offset: T) -> Result<Self> {
        if !(normal.length() > T::default_tolerance()) {
            return Err(GeometryError::ZeroNormal);
        }
        Ok(Self::new(normal, offset))
    }

    pub fn from_point_normal(point: &Vector<T, N>, normal: &Vector<T, N>) -> Result<Self> {
        if !(normal.length() > T::default_tolerance()) {
            return Err(GeometryError::ZeroNormal);
        }
        let n = normal.normalized();
        Ok(Self {
            normal: n,
            offset: -n.dot(point),
        })
    }

    pub fn normal(&self) -> &Vector<T, N> {
        &self.normal
    }

    pub fn offset(&self) -> T {
        self.offset
    }

    pub fn normal_dot(&self, v: &Vector<T, N>) -> T {
        self.normal.dot(v)
    }

    pub fn signed_distance(&self, p: &Vector<T, N>) -> T {
        self.normal.dot(p) + self.offset
    }

    pub fn distance(&self, p: &Vector<T, N>) -> T {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn closest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        *p - self.normal * self.signed_distance(p)
    }

    /// Same plane with the normal (and therefore the sign of every
    /// distance) reversed.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}

impl<T: Scalar> Plane<T, 3> {
    /// Plane through three points; the normal follows the counter-clockwise
    /// winding `p0 → p1 → p2`.
    pub fn from_points(p0: &Vector<T, 3>, p1: &Vector<T, 3>, p2: &Vector<T, 3>) -> Result<Self> {
        let normal = (*p1 - *p0).cross(&(*p2 - *p0));
        Self::from_point_normal(p0, &normal)
    }

    /// Two unit vectors spanning the plane, completing `normal` to a
    /// right-handed orthonormal basis.
    pub fn basis(&self) -> (Vector<T, 3>, Vector<T, 3>) {
        orthogonal_complement(&self.normal)
    }
}
