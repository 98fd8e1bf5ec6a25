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
    geometry::{line::Line, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryCode, QueryContext},
};

/// Closest points between two lines.
///
/// Codes: `Success`, or `Parallel` when the directions are parallel. In the
/// parallel case `cp0` is the first line's origin and `cp1` its projection
/// onto the second line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineLineClosest<T: Scalar, const N: usize> {
    pub u0: T,
    pub u1: T,
    pub cp0: Vector<T, N>,
    pub cp1: Vector<T, N>,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> LineLineClosest<T, N> {
    pub fn distance(&self) -> T {
        self.cp0.distance_to(&self.cp1)
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Line<T, N>> for Line<T, N> {
    type Output = LineLineClosest<T, N>;

    fn closest_point(&self, other: &Line<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        let (d0, d1) = (self.direction(), other.direction());
        let w0 = *self.origin() - *other.origin();
        let a = d0.dot(d1);
        let b = d0.dot(&w0);
        let c = d1.dot(&w0);
        let det = T::one() - a * a;

        let (u0, u1, code) = if ctx.is_zero(det) {
            log::trace!("line/line closest point: parallel directions, det = {det:?}");
            (T::zero(), c, QueryCode::Parallel)
        } else {
            ((a * c - b) / det, (c - a * b) / det, QueryCode::Success)
        };

        LineLineClosest {
            u0,
            u1,
            cp0: self.point_at(u0),
            cp1: other.point_at(u1),
            code,
        }
    }
}
