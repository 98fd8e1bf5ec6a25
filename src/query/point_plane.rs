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
    geometry::{plane::Plane, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryContext},
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointPlaneClosest<T: Scalar, const N: usize> {
    pub distance: T,
    /// Positive on the side the plane normal points to.
    pub signed_distance: T,
    pub cp: Vector<T, N>,
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Plane<T, N>> for Vector<T, N> {
    type Output = PointPlaneClosest<T, N>;

    fn closest_point(&self, plane: &Plane<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        let signed_distance = plane.signed_distance(self);
        PointPlaneClosest {
            distance: signed_distance.abs(),
            signed_distance,
            cp: *self - *plane.normal() * signed_distance,
        }
    }
}
