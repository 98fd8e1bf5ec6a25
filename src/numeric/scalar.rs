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

use num_traits::{Float, FloatConst};

use std::fmt::Debug;

/// Floating-point type the queries are evaluated in.
///
/// Only native IEEE-754 precision is supported; every algorithm guards its
/// divisions and square roots with the tolerance carried by a
/// [`QueryContext`](crate::query::QueryContext), whose default comes from
/// [`Scalar::default_tolerance`].
pub trait Scalar: Float + FloatConst + Debug + Default + Send + Sync + 'static {
    /// Tolerance used when the caller does not supply one.
    fn default_tolerance() -> Self;

    fn from_num_den(num: i32, den: i32) -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::from_num_den(1, 2)
    }

    /// Restricts `self` to `[lo, hi]`. Assumes `lo <= hi`.
    fn clamp_to(self, lo: Self, hi: Self) -> Self {
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }
}

impl Scalar for f32 {
    fn default_tolerance() -> Self {
        1.0e-4
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }
}

impl Scalar for f64 {
    fn default_tolerance() -> Self {
        1.0e-8
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }
}
