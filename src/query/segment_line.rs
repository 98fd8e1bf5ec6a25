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
    geometry::{line::Line, segment::Segment, vector::Vector},
    numeric::scalar::Scalar,
    query::{ClosestPoint, FindIntersection, QueryCode, QueryContext},
};

/// Closest points between a segment and a line.
///
/// Codes: `Success`, or `Parallel` when the segment runs parallel to the
/// line; then `p0` is paired with its projection onto the line. A
/// zero-length segment is treated as the point `p0` and reports `Success`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentLineClosest<T: Scalar, const N: usize> {
    pub u_segment: T,
    pub u_line: T,
    pub cp_segment: Vector<T, N>,
    pub cp_line: Vector<T, N>,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> SegmentLineClosest<T, N> {
    pub fn distance(&self) -> T {
        self.cp_segment.distance_to(&self.cp_line)
    }
}

impl<T: Scalar, const N: usize> ClosestPoint<T, Line<T, N>> for Segment<T, N> {
    type Output = SegmentLineClosest<T, N>;

    fn closest_point(&self, line: &Line<T, N>, ctx: &QueryContext<T>) -> Self::Output {
        let ds = self.direction();
        let dl = line.direction();
        let w0 = *self.p0() - *line.origin();
        let a = ds.dot(&ds);
        let b = ds.dot(dl);
        let c = ds.dot(&w0);
        let d = dl.dot(&w0);
        let denom = a - b * b;

        let (u_segment, u_line, code) = if ctx.is_zero(a.sqrt()) {
            log::trace!("segment/line closest point: zero-length segment");
            (T::zero(), d, QueryCode::Success)
        } else if ctx.is_zero(denom / a) {
            log::trace!("segment/line closest point: parallel directions");
            (T::zero(), d, QueryCode::Parallel)
        } else {
            let sn = b * d - c;
            if sn < T::zero() {
                (T::zero(), d, QueryCode::Success)
            } else if sn > denom {
                (T::one(), d + b, QueryCode::Success)
            } else {
                (sn / denom, (a * d - b * c) / denom, QueryCode::Success)
            }
        };

        SegmentLineClosest {
            u_segment,
            u_line,
            cp_segment: self.point_at(u_segment),
            cp_line: line.point_at(u_line),
            code,
        }
    }
}

/// Crossing of a 2-D segment with a line.
///
/// Codes: `Intersecting`; `Overlapping` when the segment lies on the line
/// (then `point` is `p0`); `NotIntersecting` otherwise, with `u_segment`
/// clamped to `[0, 1]` and `u_line` locating the projection of `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentLineIntersection<T: Scalar> {
    pub u_segment: T,
    pub u_line: T,
    pub point: Vector<T, 2>,
    pub code: QueryCode,
}

impl<T: Scalar> FindIntersection<T, Line<T, 2>> for Segment<T, 2> {
    type Output = SegmentLineIntersection<T>;

    fn find_intersection(&self, line: &Line<T, 2>, ctx: &QueryContext<T>) -> Self::Output {
        let ds = self.direction();
        let dl = line.direction();
        let w = *self.p0() - *line.origin();
        let denom = ds.perp_dot(dl);

        let at_origin = |code: QueryCode| SegmentLineIntersection {
            u_segment: T::zero(),
            u_line: dl.dot(&w),
            point: *self.p0(),
            code,
        };

        if ctx.is_zero(ds.length()) || ctx.is_zero_scaled(denom, ds.length()) {
            // `dl` is unit, so this is p0's distance to the line.
            let on_line = ctx.is_zero(dl.perp_dot(&w));
            let degenerate_point = ctx.is_zero(ds.length());
            log::trace!(
                "segment/line intersection: {} segment, on line = {on_line}",
                if degenerate_point { "zero-length" } else { "parallel" }
            );
            return match (on_line, degenerate_point) {
                (false, _) => at_origin(QueryCode::NotIntersecting),
                (true, true) => at_origin(QueryCode::Intersecting),
                (true, false) => at_origin(QueryCode::Overlapping),
            };
        }

        let u = dl.perp_dot(&w) / denom;
        let tol = ctx.tolerance();
        if u < -tol || u > T::one() + tol {
            let u_segment = u.clamp_to(T::zero(), T::one());
            let point = self.point_at(u_segment);
            return SegmentLineIntersection {
                u_segment,
                u_line: (point - *line.origin()).dot(dl),
                point,
                code: QueryCode::NotIntersecting,
            };
        }

        let u_segment = u.clamp_to(T::zero(), T::one());
        SegmentLineIntersection {
            u_segment,
            u_line: ds.perp_dot(&w) / denom,
            point: self.point_at(u_segment),
            code: QueryCode::Intersecting,
        }
    }
}
