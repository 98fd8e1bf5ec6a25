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
    geometry::{segment::Segment, util::interval_overlap, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, QueryCode, QueryContext, TestIntersection},
};

/// Closest points between two segments.
///
/// Codes: `Success`, or `Overlapping` when the segments are parallel and
/// their projections onto each other share an interval of positive length.
/// Segments meeting tip to tip report `Success` with `cp0 == cp1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentSegmentClosest<T: Scalar, const N: usize> {
    pub u0: T,
    pub u1: T,
    pub cp0: Vector<T, N>,
    pub cp1: Vector<T, N>,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> SegmentSegmentClosest<T, N> {
    pub fn distance(&self) -> T {
        self.cp0.distance_to(&self.cp1)
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Segment<T, N>> for Segment<T, N> {
    type Output = SegmentSegmentClosest<T, N>;

    fn closest_point(&self, other: &Segment<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        let d0 = self.direction();
        let d1 = other.direction();
        let w0 = *self.p0() - *other.p0();
        let a = d0.dot(&d0);
        let b = d0.dot(&d1);
        let c = d1.dot(&d1);
        let d = d0.dot(&w0);
        let e = d1.dot(&w0);

        let finish = |u0: T, u1: T, code: QueryCode| SegmentSegmentClosest {
            u0,
            u1,
            cp0: self.point_at(u0),
            cp1: other.point_at(u1),
            code,
        };

        match (ctx.is_zero(a.sqrt()), ctx.is_zero(c.sqrt())) {
            (true, true) => {
                log::trace!("segment/segment closest point: both segments have zero length");
                return finish(T::zero(), T::zero(), QueryCode::Success);
            }
            (true, false) => {
                log::trace!("segment/segment closest point: first segment has zero length");
                let u1 = (e / c).clamp_to(T::zero(), T::one());
                return finish(T::zero(), u1, QueryCode::Success);
            }
            (false, true) => {
                log::trace!("segment/segment closest point: second segment has zero length");
                let u0 = (-d / a).clamp_to(T::zero(), T::one());
                return finish(u0, T::zero(), QueryCode::Success);
            }
            (false, false) => {}
        }

        let denom = a * c - b * b;
        let mut code = QueryCode::Success;
        let (u0, u1) = if ctx.is_zero(denom / (a * c)) {
            // First segment spans [e, e + b] / c in the second one's units.
            let (lo, hi) = (e / c, (e + b) / c);
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            if let Some((lo, hi)) = interval_overlap(lo, hi, T::zero(), T::one()) {
                if hi - lo > ctx.tolerance() {
                    code = QueryCode::Overlapping;
                }
            }
            log::trace!("segment/segment closest point: parallel directions, code {code:?}");
            (T::zero(), e / c)
        } else {
            let sn = b * e - c * d;
            if sn <= T::zero() {
                (T::zero(), e / c)
            } else if sn >= denom {
                (T::one(), (e + b) / c)
            } else {
                (sn / denom, (a * e - b * d) / denom)
            }
        };

        // Second parameter out of range: pin it and re-solve the first.
        if u1 < T::zero() {
            let u0 = (-d / a).clamp_to(T::zero(), T::one());
            finish(u0, T::zero(), code)
        } else if u1 > T::one() {
            let u0 = ((b - d) / a).clamp_to(T::zero(), T::one());
            finish(u0, T::one(), code)
        } else {
            finish(u0, u1, code)
        }
    }
}

/// Whether two 2-D segments share at least one point, collinear overlaps
/// included.
impl<T: Scalar> TestIntersection<T, Segment<T, 2>> for Segment<T, 2> {
    type Output = bool;

    fn test_intersection(&self, other: &Segment<T, 2>, ctx: &QueryContext<T>) -> bool {
        let r = self.direction();
        let s = other.direction();
        let qp = *other.p0() - *self.p0();

        if ctx.is_zero(r.length()) {
            return self.p0().test_intersection(other, ctx);
        }
        if ctx.is_zero(s.length()) {
            return other.p0().test_intersection(self, ctx);
        }

        let tol = ctx.tolerance();
        let denom = r.perp_dot(&s);
        if ctx.is_zero_scaled(denom, r.length() * s.length()) {
            if !ctx.is_zero_scaled(qp.perp_dot(&r), r.length()) {
                return false;
            }
            // Collinear: project the other segment onto this one.
            let rr = r.dot(&r);
            let t0 = qp.dot(&r) / rr;
            let t1 = t0 + s.dot(&r) / rr;
            let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            return interval_overlap(lo, hi, -tol, T::one() + tol).is_some();
        }

        let t = qp.perp_dot(&s) / denom;
        let u = qp.perp_dot(&r) / denom;
        let in_unit = |x: T| x >= -tol && x <= T::one() + tol;
        in_unit(t) && in_unit(u)
    }
}
