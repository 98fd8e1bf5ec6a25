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

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// Bounded segment `p0 + u * (p1 - p0)`, `u ∈ [0, 1]`.
///
/// The direction is deliberately not normalized: `u` is a fraction of the
/// segment, so `u = 1` is always `p1`. A segment with `p0 == p1` is valid and
/// behaves like a point in every query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<T: Scalar, const N: usize> {
    p0: Vector<T, N>,
    p1: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(p0: Vector<T, N>, p1: Vector<T, N>) -> Self {
        Self { p0, p1 }
    }

    pub fn from_origin_direction(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self::new(origin, origin + direction)
    }

    pub fn p0(&self) -> &Vector<T, N> {
        &self.p0
    }

    pub fn p1(&self) -> &Vector<T, N> {
        &self.p1
    }

    pub fn origin(&self) -> &Vector<T, N> {
        &self.p0
    }

    /// `p1 - p0`.
    pub fn direction(&self) -> Vector<T, N> {
        self.p1 - self.p0
    }

    pub fn length_squared(&self) -> T {
        self.direction().length_squared()
    }

    pub fn length(&self) -> T {
        self.direction().length()
    }

    pub fn midpoint(&self) -> Vector<T, N> {
        (self.p0 + self.p1) * T::half()
    }

    pub fn point_at(&self, u: T) -> Vector<T, N> {
        self.p0 + self.direction() * u
    }

    /// Same segment traversed from `p1` to `p0`.
    pub fn inverse(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;
