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
    geometry::{ray::Ray, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryCode, QueryContext},
};

/// Closest points between a segment and a ray.
///
/// Codes: `Success`, or `Overlapping` when the two run parallel and the
/// segment's projection onto the ray covers an interval of positive length
/// on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRayClosest<T: Scalar, const N: usize> {
    pub u_segment: T,
    pub u_ray: T,
    pub cp_segment: Vector<T, N>,
    pub cp_ray: Vector<T, N>,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> SegmentRayClosest<T, N> {
    pub fn distance(&self) -> T {
        self.cp_segment.distance_to(&self.cp_ray)
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Ray<T, N>> for Segment<T, N> {
    type Output = SegmentRayClosest<T, N>;

    fn closest_point(&self, ray: &Ray<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        let ds = self.direction();
        let dr = ray.direction();
        let w0 = *self.p0() - *ray.origin();
        let a = ds.dot(&ds);
        let b = ds.dot(dr);
        let c = ds.dot(&w0);
        let d = dr.dot(&w0);
        let denom = a - b * b;

        let finish = |u_segment: T, u_ray: T, code: QueryCode| SegmentRayClosest {
            u_segment,
            u_ray,
            cp_segment: self.point_at(u_segment),
            cp_ray: ray.point_at(u_ray),
            code,
        };

        if ctx.is_zero(a.sqrt()) {
            log::trace!("segment/ray closest point: zero-length segment");
            return finish(T::zero(), d.max(T::zero()), QueryCode::Success);
        }

        let mut code = QueryCode::Success;
        let (u_segment, u_ray) = if ctx.is_zero(denom / a) {
            // The segment covers [d, d + b] in ray units.
            if d.max(d + b) > ctx.tolerance() {
                code = QueryCode::Overlapping;
            }
            log::trace!("segment/ray closest point: parallel directions, code {code:?}");
            (T::zero(), d)
        } else {
            let sn = b * d - c;
            if sn <= T::zero() {
                (T::zero(), d)
            } else if sn >= denom {
                (T::one(), d + b)
            } else {
                (sn / denom, (a * d - b * c) / denom)
            }
        };

        if u_ray < T::zero() {
            // Ray pinned at its origin; re-solve along the segment.
            let u_segment = (-c / a).clamp_to(T::zero(), T::one());
            return finish(u_segment, T::zero(), code);
        }
        finish(u_segment, u_ray, code)
    }
}
