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

/// Two unit vectors `(u, v)` such that `(u, v, ŵ)` is a right-handed
/// orthonormal basis, where `ŵ` is `w` normalized.
///
/// The first vector is built by zeroing the smaller of `w.x`/`w.y`, which
/// keeps the normalizing length away from zero. A zero `w` yields the x and
/// y axes.
pub fn orthogonal_complement<T: Scalar>(w: &Vector<T, 3>) -> (Vector<T, 3>, Vector<T, 3>) {
    let w = w.normalized();
    let [x, y, z] = w.coords;
    if x == T::zero() && y == T::zero() && z == T::zero() {
        return (Vector::axis(0), Vector::axis(1));
    }

    let u = if x.abs() > y.abs() {
        let inv_len = (x * x + z * z).sqrt().recip();
        Vector::new([-z * inv_len, T::zero(), x * inv_len])
    } else {
        let inv_len = (y * y + z * z).sqrt().recip();
        Vector::new([T::zero(), z * inv_len, -y * inv_len])
    };
    let v = w.cross(&u);
    (u, v)
}

/// Real roots `t0 <= t1` of `a t² + 2 half_b t + c = 0`.
///
/// `a` must be strictly positive; callers reject `a ≈ 0` before getting
/// here. A negative discriminant yields `None`, so no square root of a
/// negative number is ever taken.
pub(crate) fn quadratic_roots<T: Scalar>(a: T, half_b: T, c: T) -> Option<(T, T)> {
    let discriminant = half_b * half_b - a * c;
    if discriminant < T::zero() {
        return None;
    }
    let root = discriminant.sqrt();
    Some(((-half_b - root) / a, (-half_b + root) / a))
}

/// Overlap of the closed intervals `[a0, a1]` and `[b0, b1]`, if any.
pub(crate) fn interval_overlap<T: Scalar>(a0: T, a1: T, b0: T, b1: T) -> Option<(T, T)> {
    let lo = if a0 > b0 { a0 } else { b0 };
    let hi = if a1 < b1 { a1 } else { b1 };
    if lo <= hi { Some((lo, hi)) } else { None }
}
