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
    geometry::{line::Line, ray::Ray, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryCode, QueryContext},
};

/// Closest points between a ray and a line.
///
/// Codes: `Success`, or `Parallel`, in which case the ray's origin is paired
/// with its projection onto the line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayLineClosest<T: Scalar, const N: usize> {
    pub u_ray: T,
    pub u_line: T,
    pub cp_ray: Vector<T, N>,
    pub cp_line: Vector<T, N>,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> RayLineClosest<T, N> {
    pub fn distance(&self) -> T {
        self.cp_ray.distance_to(&self.cp_line)
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Line<T, N>> for Ray<T, N> {
    type Output = RayLineClosest<T, N>;

    fn closest_point(&self, line: &Line<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        let (dr, dl) = (self.direction(), line.direction());
        let diff = *self.origin() - *line.origin();
        let a = dr.dot(dl);
        let b = dl.dot(&diff);
        let det = T::one() - a * a;

        let (u_ray, u_line, code) = if ctx.is_zero(det) {
            log::trace!("ray/line closest point: parallel directions");
            (T::zero(), b, QueryCode::Parallel)
        } else {
            let d = dr.dot(&diff);
            let sn = a * b - d;
            if sn < T::zero() {
                // Line optimum lies behind the ray; pin the ray at its origin.
                (T::zero(), b, QueryCode::Success)
            } else {
                (sn / det, (b - a * d) / det, QueryCode::Success)
            }
        };

        RayLineClosest {
            u_ray,
            u_line,
            cp_ray: self.point_at(u_ray),
            cp_line: line.point_at(u_line),
            code,
        }
    }
}
