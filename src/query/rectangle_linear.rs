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
    geometry::{line::Line, ray::Ray, rectangle::Rectangle, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, FindIntersection, QueryCode, QueryContext},
};

/// First point where a line, ray or segment meets a 3-D rectangle.
///
/// Codes: `Intersecting`, with `u` the smallest parameter of the linear
/// primitive inside the rectangle, `params` the rectangle-local
/// coordinates of `point`; or `NotIntersecting`, with `u = 0`,
/// `params = [0, 0]` and `point` at the primitive's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleLinearIntersection<T: Scalar> {
    pub u: T,
    pub params: [T; 2],
    pub point: Vector<T, 3>,
    pub code: QueryCode,
}

pub type RectangleLineIntersection<T> = RectangleLinearIntersection<T>;
pub type RectangleRayIntersection<T> = RectangleLinearIntersection<T>;
pub type RectangleSegmentIntersection<T> = RectangleLinearIntersection<T>;

/// What the rectangle query needs from the linear primitive: its
/// parametrization, its valid range and how it meets one boundary edge.
trait Linear<T: Scalar> {
    fn origin(&self) -> Vector<T, 3>;

    fn direction(&self) -> Vector<T, 3>;

    fn range(&self) -> (T, T);

    /// `(u_edge, u_self, distance)` for the closest pair between `edge` and
    /// `self`.
    fn closest_to_edge(&self, edge: &Segment<T, 3>, ctx: &QueryContext<T>) -> (T, T, T);
}

impl<T: Scalar> Linear<T> for Line<T, 3> {
    fn origin(&self) -> Vector<T, 3> {
        *Line::origin(self)
    }

    fn direction(&self) -> Vector<T, 3> {
        *Line::direction(self)
    }

    fn range(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn closest_to_edge(&self, edge: &Segment<T, 3>, ctx: &QueryContext<T>) -> (T, T, T) {
        let res = edge.closest_point(self, ctx);
        (res.u_segment, res.u_line, res.distance())
    }
}

impl<T: Scalar> Linear<T> for Ray<T, 3> {
    fn origin(&self) -> Vector<T, 3> {
        *Ray::origin(self)
    }

    fn direction(&self) -> Vector<T, 3> {
        *Ray::direction(self)
    }

    fn range(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn closest_to_edge(&self, edge: &Segment<T, 3>, ctx: &QueryContext<T>) -> (T, T, T) {
        let res = edge.closest_point(self, ctx);
        (res.u_segment, res.u_ray, res.distance())
    }
}

impl<T: Scalar> Linear<T> for Segment<T, 3> {
    fn origin(&self) -> Vector<T, 3> {
        *self.p0()
    }

    fn direction(&self) -> Vector<T, 3> {
        Segment::direction(self)
    }

    fn range(&self) -> (T, T) {
        (T::zero(), T::one())
    }

    fn closest_to_edge(&self, edge: &Segment<T, 3>, ctx: &QueryContext<T>) -> (T, T, T) {
        let res = edge.closest_point(self, ctx);
        (res.u0, res.u1, res.distance())
    }
}

fn local_params<T: Scalar>(rect: &Rectangle<T, 3>, p: &Vector<T, 3>) -> [T; 2] {
    let diff = *p - *rect.center();
    [diff.dot(rect.axis(0)), diff.dot(rect.axis(1))]
}

fn within_extents<T: Scalar>(rect: &Rectangle<T, 3>, params: &[T; 2], tol: T) -> bool {
    params
        .iter()
        .enumerate()
        .all(|(i, s)| s.abs() <= rect.extent(i) + tol)
}

fn intersect<T: Scalar, L: Linear<T>>(
    rect: &Rectangle<T, 3>,
    linear: &L,
    ctx: &QueryContext<T>,
) -> RectangleLinearIntersection<T> {
    let origin = linear.origin();
    let dir = linear.direction();
    let (lo, hi) = linear.range();
    let tol = ctx.tolerance();
    let miss = RectangleLinearIntersection {
        u: T::zero(),
        params: [T::zero(); 2],
        point: origin,
        code: QueryCode::NotIntersecting,
    };

    let normal = rect.normal();
    let denom = normal.dot(&dir);

    if !ctx.is_zero_scaled(denom, dir.length()) {
        let u = normal.dot(&(*rect.center() - origin)) / denom;
        if u < lo || u > hi {
            return miss;
        }
        let point = origin + dir * u;
        let params = local_params(rect, &point);
        if !within_extents(rect, &params, tol) {
            return miss;
        }
        return RectangleLinearIntersection {
            u,
            params,
            point,
            code: QueryCode::Intersecting,
        };
    }

    if !ctx.is_zero(normal.dot(&(origin - *rect.center()))) {
        return miss;
    }
    log::trace!("rectangle/linear intersection: primitive lies in the rectangle plane");

    // A bounded start inside the rectangle is the earliest possible hit.
    if lo.is_finite() {
        let params = local_params(rect, &origin);
        if within_extents(rect, &params, tol) {
            return RectangleLinearIntersection {
                u: lo,
                params,
                point: origin,
                code: QueryCode::Intersecting,
            };
        }
    }

    let mut best = miss;
    let one = T::one();
    for i1 in 0..2 {
        let omi1 = 1 - i1;
        for side in [-one, one] {
            let edge_center = *rect.center() + *rect.axis(i1) * (rect.extent(i1) * side);
            let half = *rect.axis(omi1) * rect.extent(omi1);
            let edge = Segment::new(edge_center - half, edge_center + half);

            let (u_edge, u, distance) = linear.closest_to_edge(&edge, ctx);
            if !ctx.is_zero(distance) {
                continue;
            }
            if best.code == QueryCode::Intersecting && u >= best.u {
                continue;
            }
            let mut params = [T::zero(); 2];
            params[i1] = side * rect.extent(i1);
            params[omi1] = (T::two() * u_edge - one) * rect.extent(omi1);
            best = RectangleLinearIntersection {
                u,
                params,
                point: edge.point_at(u_edge),
                code: QueryCode::Intersecting,
            };
        }
    }
    best
}

impl<T: Scalar> FindIntersection<T, Line<T, 3>> for Rectangle<T, 3> {
    type Output = RectangleLineIntersection<T>;

    fn find_intersection(&self, line: &Line<T, 3>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(self, line, ctx)
    }
}

impl<T: Scalar> FindIntersection<T, Ray<T, 3>> for Rectangle<T, 3> {
    type Output = RectangleRayIntersection<T>;

    fn find_intersection(&self, ray: &Ray<T, 3>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(self, ray, ctx)
    }
}

impl<T: Scalar> FindIntersection<T, Segment<T, 3>> for Rectangle<T, 3> {
    type Output = RectangleSegmentIntersection<T>;

    fn find_intersection(&self, segment: &Segment<T, 3>, ctx: &QueryContext<T>) -> Self::Output {
        intersect(self, segment, ctx)
    }
}
