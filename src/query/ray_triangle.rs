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
    geometry::{ray::Ray, triangle::Triangle},
    numeric::scalar::Scalar,
    query::{QueryContext, TestIntersection},
};

/// Ray/triangle hit test; `u` is the ray parameter of the hit, `0` on a miss.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayTriangleHit<T: Scalar> {
    pub is_intersecting: bool,
    pub u: T,
}

impl<T: Scalar> RayTriangleHit<T> {
    fn miss() -> Self {
        Self {
            is_intersecting: false,
            u: T::zero(),
        }
    }
}

impl<T: Scalar> TestIntersection<T, Triangle<T, 3>> for Ray<T, 3> {
    type Output = RayTriangleHit<T>;

    fn test_intersection(&self, triangle: &Triangle<T, 3>, ctx: &QueryContext<T>) -> Self::Output {
        let [p0, p1, p2] = *triangle.vertices();
        let dir = self.direction();
        let edge1 = p1 - p0;
        let edge2 = p2 - p0;

        let pvec = dir.cross(&edge2);
        let det = edge1.dot(&pvec);
        if ctx.is_zero_scaled(det, edge1.length() * edge2.length()) {
            log::trace!("ray/triangle test: ray parallel to triangle plane");
            return RayTriangleHit::miss();
        }
        let inv_det = det.recip();

        let tvec = *self.origin() - p0;
        let bu = tvec.dot(&pvec) * inv_det;
        if bu < T::zero() || bu > T::one() {
            return RayTriangleHit::miss();
        }

        let qvec = tvec.cross(&edge1);
        let bv = dir.dot(&qvec) * inv_det;
        if bv < T::zero() || bu + bv > T::one() {
            return RayTriangleHit::miss();
        }

        let t = edge2.dot(&qvec) * inv_det;
        if t > ctx.tolerance() {
            RayTriangleHit {
                is_intersecting: true,
                u: t,
            }
        } else {
            RayTriangleHit::miss()
        }
    }
}
