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
    error::Result,
    geometry::{plane::Plane, vector::Vector},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<T: Scalar, const N: usize> {
    vertices: [Vector<T, N>; 3],
}

pub type Triangle3<T> = Triangle<T, 3>;

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(p0: Vector<T, N>, p1: Vector<T, N>, p2: Vector<T, N>) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    pub fn p0(&self) -> &Vector<T, N> {
        &self.vertices[0]
    }

    pub fn p1(&self) -> &Vector<T, N> {
        &self.vertices[1]
    }

    pub fn p2(&self) -> &Vector<T, N> {
        &self.vertices[2]
    }

    pub fn vertices(&self) -> &[Vector<T, N>; 3] {
        &self.vertices
    }

    /// Point with barycentric weights `(1 - u - v, u, v)`.
    pub fn point_at(&self, u: T, v: T) -> Vector<T, N> {
        let [p0, p1, p2] = self.vertices;
        p0 + (p1 - p0) * u + (p2 - p0) * v
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// Unnormalized normal, `(p1 - p0) × (p2 - p0)`.
    pub fn normal(&self) -> Vector<T, 3> {
        let [p0, p1, p2] = self.vertices;
        (p1 - p0).cross(&(p2 - p0))
    }

    pub fn area(&self) -> T {
        self.normal().length() * T::half()
    }

    /// Supporting plane; fails for a degenerate (zero-area) triangle.
    pub fn plane(&self) -> Result<Plane<T, 3>> {
        Plane::from_points(&self.vertices[0], &self.vertices[1], &self.vertices[2])
    }
}
