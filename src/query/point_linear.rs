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
    geometry::{line::Line, ray::Ray, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryContext, TestIntersection},
};

/// Projection of a point onto a line, ray or segment.
///
/// `u` is in the linear primitive's own parametrization and `cp` is the
/// point at `u`. The projection is always unique, so there is no code.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointLinearClosest<T: Scalar, const N: usize> {
    pub u: T,
    pub cp: Vector<T, N>,
}

pub type PointLineClosest<T, const N: usize> = PointLinearClosest<T, N>;
pub type PointRayClosest<T, const N: usize> = PointLinearClosest<T, N>;
pub type PointSegmentClosest<T, const N: usize> = PointLinearClosest<T, N>;

impl<T: Scalar, const N: usize> ClosestPoint<T, Line<T, N>> for Vector<T, N> {
    type Output = PointLineClosest<T, N>;

    fn closest_point(&self, line: &Line<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        let u = (*self - *line.origin()).dot(line.direction());
        PointLinearClosest {
            u,
            cp: line.point_at(u),
        }
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Ray<T, N>> for Vector<T, N> {
    type Output = PointRayClosest<T, N>;

    fn closest_point(&self, ray: &Ray<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        let u = (*self - *ray.origin()).dot(ray.direction()).max(T::zero());
        PointLinearClosest {
            u,
            cp: ray.point_at(u),
        }
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Segment<T, N>> for Vector<T, N> {
    type Output = PointSegmentClosest<T, N>;

    fn closest_point(&self, segment: &Segment<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        let d = segment.direction();
        let proj = (*self - *segment.p0()).dot(&d);
        let len_sq = d.length_squared();

        // Comparing against |d|² before dividing also covers a zero-length
        // segment, which lands in the first branch.
        let u = if proj <= T::zero() {
            T::zero()
        } else if proj >= len_sq {
            T::one()
        } else {
            proj / len_sq
        };

        PointLinearClosest {
            u,
            cp: segment.point_at(u),
        }
    }
}

/// True when the point lies on the segment, within the context tolerance.
impl<T: Scalar, const N: usize> TestIntersection<T, Segment<T, N>> for Vector<T, N> {
    type Output = bool;

    fn test_intersection(&self, segment: &Segment<T, N>, ctx: &QueryContext<T>) -> bool {
        let res = self.closest_point(segment, ctx);
        ctx.is_zero(res.cp.distance_to(self))
    }
}
