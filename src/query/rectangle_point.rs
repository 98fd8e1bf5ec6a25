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
    geometry::{rectangle::Rectangle, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryContext},
};

/// Closest point of a rectangle to a point.
///
/// `params` are the rectangle-local coordinates of `cp`, each within
/// `[-extent_i, extent_i]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectanglePointClosest<T: Scalar, const N: usize> {
    pub sq_distance: T,
    pub params: [T; 2],
    pub cp: Vector<T, N>,
}

impl<T: Scalar, const N: usize> RectanglePointClosest<T, N> {
    pub fn distance(&self) -> T {
        self.sq_distance.sqrt()
    }
}

/// Clamps the point's projection onto each axis independently, which is
/// exact because the axes are orthonormal.
pub(crate) fn clamp_to_rectangle<T: Scalar, const N: usize>(
    rect: &Rectangle<T, N>,
    point: &Vector<T, N>,
) -> RectanglePointClosest<T, N> {
    let diff = *rect.center() - *point;
    let mut sq_distance = diff.length_squared();
    let mut params = [T::zero(); 2];
    let mut cp = *rect.center();

    for (i, s) in params.iter_mut().enumerate() {
        let b = diff.dot(rect.axis(i));
        let e = rect.extent(i);
        *s = (-b).clamp_to(-e, e);
        sq_distance = sq_distance + *s * (*s + T::two() * b);
        cp += *rect.axis(i) * *s;
    }

    RectanglePointClosest {
        // Cancellation can push an on-rectangle distance slightly negative.
        sq_distance: sq_distance.max(T::zero()),
        params,
        cp,
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Vector<T, N>> for Rectangle<T, N> {
    type Output = RectanglePointClosest<T, N>;

    fn closest_point(&self, point: &Vector<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        clamp_to_rectangle(self, point)
    }
}
