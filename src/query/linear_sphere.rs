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
    geometry::{
        line::Line,
        ray::Ray,
        segment::Segment,
        sphere::Sphere,
        util::{interval_overlap, quadratic_roots},
        vector::Vector,
    },
    numeric::scalar::Scalar,
    query::{FindIntersection, QueryCode, QueryContext, TestIntersection},
};

/// Portion of a line, ray or segment inside a solid sphere.
///
/// Codes: `Intersecting`, with `u0 <= u1` bounding the inside interval
/// (clamped to the primitive's range, so `p0` is the nearest in-range
/// point) and `p0`, `p1` the points at those parameters; or
/// `NotIntersecting`, with both parameters `0` and both points at the
/// origin. A tangent contact gives `u0 == u1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSphereIntersection<T: Scalar, const N: usize> {
    pub u0: T,
    pub u1: T,
    pub p0: Vector<T, N>,
    pub p1: Vector<T, N>,
    pub code: QueryCode,
}

pub type LineSphereIntersection<T, const N: usize> = LinearSphereIntersection<T, N>;
pub type RaySphereIntersection<T, const N: usize> = LinearSphereIntersection<T, N>;
pub type SegmentSphereIntersection<T, const N: usize> = LinearSphereIntersection<T, N>;

/// Coefficients of `|o + u d - c|² - r² = a u² + 2 half_b u + cc`.
fn coefficients<T: Scalar, const N: usize>(
    origin: &Vector<T, N>,
    direction: &Vector<T, N>,
    sphere: &Sphere<T, N>,
) -> (T, T, T) {
    let diff = *origin - *sphere.center();
    let r = sphere.radius();
    (
        direction.length_squared(),
        direction.dot(&diff),
        diff.length_squared() - r * r,
    )
}

fn clip<T: Scalar, const N: usize>(
    origin: &Vector<T, N>,
    direction: &Vector<T, N>,
    (lo, hi): (T, T),
    sphere: &Sphere<T, N>,
    ctx: &QueryContext<T>,
) -> LinearSphereIntersection<T, N> {
    let miss = LinearSphereIntersection {
        u0: T::zero(),
        u1: T::zero(),
        p0: *origin,
        p1: *origin,
        code: QueryCode::NotIntersecting,
    };
    let (a, half_b, c) = coefficients(origin, direction, sphere);

    if ctx.is_zero(a.sqrt()) {
        log::trace!("linear/sphere intersection: zero-length direction");
        return if c <= T::zero() {
            LinearSphereIntersection {
                code: QueryCode::Intersecting,
                ..miss
            }
        } else {
            miss
        };
    }

    let Some((t0, t1)) = quadratic_roots(a, half_b, c) else {
        return miss;
    };
    let Some((u0, u1)) = interval_overlap(t0, t1, lo, hi) else {
        return miss;
    };

    LinearSphereIntersection {
        u0,
        u1,
        p0: *origin + *direction * u0,
        p1: *origin + *direction * u1,
        code: QueryCode::Intersecting,
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Sphere<T, N>> for Line<T, N> {
    type Output = LineSphereIntersection<T, N>;

    fn find_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        clip(
            self.origin(),
            self.direction(),
            (T::neg_infinity(), T::infinity()),
            sphere,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Sphere<T, N>> for Ray<T, N> {
    type Output = RaySphereIntersection<T, N>;

    fn find_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        clip(
            self.origin(),
            self.direction(),
            (T::zero(), T::infinity()),
            sphere,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> FindIntersection<T, Sphere<T, N>> for Segment<T, N> {
    type Output = SegmentSphereIntersection<T, N>;

    fn find_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        clip(
            self.origin(),
            &self.direction(),
            (T::zero(), T::one()),
            sphere,
            ctx,
        )
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Sphere<T, N>> for Line<T, N> {
    type Output = bool;

    fn test_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> bool {
        let (a, half_b, c) = coefficients(self.origin(), self.direction(), sphere);
        if ctx.is_zero(a.sqrt()) {
            return c <= T::zero();
        }
        half_b * half_b - a * c >= T::zero()
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Sphere<T, N>> for Ray<T, N> {
    type Output = bool;

    fn test_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> bool {
        let (a, half_b, c) = coefficients(self.origin(), self.direction(), sphere);
        if c <= T::zero() {
            return true;
        }
        // Origin outside and heading away (or not moving at all).
        if ctx.is_zero(a.sqrt()) || half_b >= T::zero() {
            return false;
        }
        half_b * half_b - a * c >= T::zero()
    }
}

impl<T: Scalar, const N: usize> TestIntersection<T, Sphere<T, N>> for Segment<T, N> {
    type Output = bool;

    fn test_intersection(&self, sphere: &Sphere<T, N>, ctx: &QueryContext<T>) -> bool {
        let (a, half_b, c) = coefficients(self.origin(), &self.direction(), sphere);
        if c <= T::zero() {
            return true;
        }
        if ctx.is_zero(a.sqrt()) {
            return false;
        }
        match quadratic_roots(a, half_b, c) {
            Some((t0, t1)) => interval_overlap(t0, t1, T::zero(), T::one()).is_some(),
            None => false,
        }
    }
}
