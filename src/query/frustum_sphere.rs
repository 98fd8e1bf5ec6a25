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
    geometry::{frustum::Frustum, sphere::Sphere},
    numeric::scalar::Scalar,
    query::{QueryCode, QueryContext, TestIntersection},
};

/// Classification of a sphere against a frustum.
///
/// Codes: `CompletelyInside`, `Intersecting` (the sphere crosses at least
/// one bounding plane) or `CompletelyOutside`. Conservative: a sphere near
/// a frustum corner may be reported `Intersecting` while lying outside.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrustumSphereTest {
    pub code: QueryCode,
}

impl<T: Scalar> TestIntersection<T, Sphere<T, 3>> for Frustum<T> {
    type Output = FrustumSphereTest;

    fn test_intersection(&self, sphere: &Sphere<T, 3>, _ctx: &QueryContext<T>) -> Self::Output {
        let r = sphere.radius();
        let mut code = QueryCode::CompletelyInside;
        for plane in self.planes() {
            let dist = plane.signed_distance(sphere.center());
            if dist <= -r {
                return FrustumSphereTest {
                    code: QueryCode::CompletelyOutside,
                };
            }
            if dist.abs() < r {
                code = QueryCode::Intersecting;
            }
        }
        FrustumSphereTest { code }
    }
}
