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
    geometry::{line::Line, sphere::Sphere, vector::Vector},
    numeric::scalar::Scalar,
    query::{FirstPointOfCollision, QueryCode, QueryContext},
};

/// Earliest contact time of two primitives moving at constant velocities.
///
/// Codes: `Intersecting` with `t` the first time of contact, or
/// `NotIntersecting` (no relative motion, separating, or passing by) with
/// `t = 0`. The primitives are assumed not to overlap at `t = 0`; that is
/// not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionTime<T: Scalar> {
    pub t: T,
    pub code: QueryCode,
}

impl<T: Scalar> CollisionTime<T> {
    fn none() -> Self {
        Self {
            t: T::zero(),
            code: QueryCode::NotIntersecting,
        }
    }
}

/// Smallest root of `|dp + t dv|² = reach²`, evaluated in a fixed order:
/// relative speed, then separation, then discriminant.
fn earliest_contact<T: Scalar, const N: usize>(
    dp: &Vector<T, N>,
    dv: &Vector<T, N>,
    reach: T,
    ctx: &QueryContext<T>,
) -> CollisionTime<T> {
    let a = dv.length_squared();
    if ctx.is_zero(a.sqrt()) {
        log::trace!("collision: no relative motion");
        return CollisionTime::none();
    }
    let half_b = dp.dot(dv);
    if half_b >= T::zero() {
        return CollisionTime::none();
    }
    let c = dp.length_squared() - reach * reach;
    let discriminant = half_b * half_b - a * c;
    if discriminant < T::zero() {
        return CollisionTime::none();
    }
    CollisionTime {
        t: (-half_b - discriminant.sqrt()) / a,
        code: QueryCode::Intersecting,
    }
}

impl<T: Scalar, const N: usize> FirstPointOfCollision<T, N, Sphere<T, N>> for Sphere<T, N> {
    type Output = CollisionTime<T>;

    fn first_point_of_collision(
        &self,
        velocity: &Vector<T, N>,
        other: &Sphere<T, N>,
        other_velocity: &Vector<T, N>,
        ctx: &QueryContext<T>,
    ) -> Self::Output {
        let dp = *other.center() - *self.center();
        let dv = *other_velocity - *velocity;
        earliest_contact(&dp, &dv, self.radius() + other.radius(), ctx)
    }
}

impl<T: Scalar, const N: usize> FirstPointOfCollision<T, N, Vector<T, N>> for Sphere<T, N> {
    type Output = CollisionTime<T>;

    fn first_point_of_collision(
        &self,
        velocity: &Vector<T, N>,
        point: &Vector<T, N>,
        point_velocity: &Vector<T, N>,
        ctx: &QueryContext<T>,
    ) -> Self::Output {
        let dp = *point - *self.center();
        let dv = *point_velocity - *velocity;
        earliest_contact(&dp, &dv, self.radius(), ctx)
    }
}

impl<T: Scalar, const N: usize> FirstPointOfCollision<T, N, Line<T, N>> for Sphere<T, N> {
    type Output = CollisionTime<T>;

    /// Motion along the line never changes the distance to it, so both the
    /// offset and the velocity are reduced to their components orthogonal
    /// to the line direction.
    fn first_point_of_collision(
        &self,
        velocity: &Vector<T, N>,
        line: &Line<T, N>,
        line_velocity: &Vector<T, N>,
        ctx: &QueryContext<T>,
    ) -> Self::Output {
        let dir = line.direction();
        let dp = (*line.origin() - *self.center()).reject_from(dir);
        let dv = (*line_velocity - *velocity).reject_from(dir);
        earliest_contact(&dp, &dv, self.radius(), ctx)
    }
}
