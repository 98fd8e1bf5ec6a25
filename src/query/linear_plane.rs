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
    geometry::{line::Line, plane::Plane, ray::Ray, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
    query::{FindIntersection, QueryCode, QueryContext, TestIntersection},
};

/// Where a line, ray or segment meets a plane.
///
/// Codes: `Intersecting` with `point` at parameter `u`; `Overlapping` when
/// the primitive lies in the plane; `NotIntersecting` when it is parallel
/// to the plane or the crossing is outside its parameter range. In both
/// non-crossing cases `u` is clamped into range (`0` when parallel) and
/// `point` is the primitive's point at `u`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearPlaneIntersection<T: Scalar, const N: usize> {
    pub u: T,
    pub point: Vector<T, N>,
    pub code: QueryCode,
}

pub type LinePlaneIntersection<T, const N: usize> = LinearPlaneIntersection<T, N>;
pub type RayPlaneIntersection<T, const N: usize> = LinearPlaneIntersection<T, N>;
pub type SegmentPlaneIntersection<T, const N: usize> = LinearPlaneIntersection<T, N>;

fn intersect<T: Scalar, const N: usize>(
    origin: &Vector<T, N>,
    direction: &Vector<T, N>,
    (lo, hi): (T, T),
    plane: &Plane<T, N>,
    ctx: &QueryContext<T>,
) -> LinearPlaneIntersection<T, N> {
    let dist = plane.signed_distance(origin);
    let denom = plane.normal_dot(direction);

    if ctx.is_zero_scaled(denom, direction.length()) {
        let code = match (ctx.is_zero(dist), ctx.is_zero(direction.length())) {
            (false, _) => QueryCode::NotIntersecting,
            // A zero-length segment on the plane is a single crossing point.
            (true, true) => QueryCode::Intersecting,
            (true, false) => QueryCode::Overlapping,
        };
        log::trace!("linear/plane intersection: parallel to plane, code {code:?}");
        return LinearPlaneIntersection {
            u: T::zero(),
            point: *origin,
            code,
        };
    }

    let u = -dist / denom;
    if u < lo || u > hi {
        let u = u.clamp_to(lo, hi);
        return LinearPlaneIntersection {
            u,
            point: *origin + *direction * u,
            code: QueryCode::NotIntersecting,
        };
    }

    LinearPlaneIntersection {
        u,
        point: *origin + *direction * u,
        code: QueryCode::Intersecting,
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Plane<T, N>> for Line<T, N> {
    type Output = LinePlaneIntersection<T, N>;

    fn find_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(
            self.origin(),
            self.direction(),
            (T::neg_infinity(), T::infinity()),
            plane,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Plane<T, N>> for Ray<T, N> {
    type Output = RayPlaneIntersection<T, N>;

    fn find_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(
            self.origin(),
            self.direction(),
            (T::zero(), T::infinity()),
            plane,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Plane<T, N>> for Segment<T, N> {
    type Output = SegmentPlaneIntersection<T, N>;

    fn find_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(
            self.origin(),
            &self.direction(),
            (T::zero(), T::one()),
            plane,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Plane<T, N>> for Line<T, N> {
    type Output = bool;

    fn test_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> bool {
        self.find_intersection(plane, ctx).code != QueryCode::NotIntersecting
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Plane<T, N>> for Ray<T, N> {
    type Output = bool;

    fn test_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> bool {
        self.find_intersection(plane, ctx).code != QueryCode::NotIntersecting
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Plane<T, N>> for Segment<T, N> {
    type Output = bool;

    fn test_intersection(&self, plane: &Plane<T, N>, ctx: &QueryContext<T>) -> bool {
        self.find_intersection(plane, ctx).code != QueryCode::NotIntersecting
    }
}
