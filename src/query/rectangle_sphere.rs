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
    geometry::{rectangle::Rectangle, sphere::Sphere},
    numeric::scalar::Scalar,
    query::{QueryCode, QueryContext, TestIntersection, rectangle_point::clamp_to_rectangle},
};

/// Codes: `Intersecting` when the sphere reaches the rectangle, otherwise
/// `NotIntersecting`. `sq_distance` is from the sphere's center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleSphereTest<T: Scalar> {
    pub sq_distance: T,
    pub code: QueryCode,
}

impl<T: Scalar, const N: usize> TestIntersection<T, Sphere<T, N>> for Rectangle<T, N> {
    type Output = RectangleSphereTest<T>;

    fn test_intersection(&self, sphere: &Sphere<T, N>, _ctx: &QueryContext<T>) -> Self::Output {
        let sq_distance = clamp_to_rectangle(self, sphere.center()).sq_distance;
        let r = sphere.radius();
        let code = if sq_distance <= r * r {
            QueryCode::Intersecting
        } else {
            QueryCode::NotIntersecting
        };
        RectangleSphereTest { sq_distance, code }
    }
}
