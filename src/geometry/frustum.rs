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
    error::{GeometryError, Result},
    geometry::{plane::Plane, vector::Vector},
    numeric::scalar::Scalar,
};

/// Index of each bounding plane inside a [`Frustum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrustumPlane {
    Near = 0,
    Far = 1,
    Left = 2,
    Right = 3,
    Top = 4,
    Bottom = 5,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Near,
        FrustumPlane::Far,
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
    ];
}

/// Convex view volume bounded by six planes whose normals point inward:
/// a point is inside when all six signed distances are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum<T: Scalar> {
    planes: [Plane<T, 3>; 6],
}

impl<T: Scalar> Frustum<T> {
    /// `planes` are indexed by [`FrustumPlane`].
    pub fn new(planes: [Plane<T, 3>; 6]) -> Self {
        Self { planes }
    }

    /// Symmetric perspective frustum with its apex at `eye`.
    ///
    /// `fov_y` is the full vertical field of view in radians and `aspect`
    /// the width/height ratio.
    pub fn perspective(
        eye: Vector<T, 3>,
        forward: Vector<T, 3>,
        up: Vector<T, 3>,
        fov_y: T,
        aspect: T,
        near: T,
        far: T,
    ) -> Result<Self> {
        let eps = T::default_tolerance();
        if !(near > T::zero()) {
            return Err(GeometryError::InvalidFrustum("near distance must be positive"));
        }
        if !(far > near) {
            return Err(GeometryError::InvalidFrustum("far distance must exceed near distance"));
        }
        if !(fov_y > T::zero() && fov_y < T::PI()) {
            return Err(GeometryError::InvalidFrustum("vertical field of view must lie in (0, pi)"));
        }
        if !(aspect > T::zero()) {
            return Err(GeometryError::InvalidFrustum("aspect ratio must be positive"));
        }
        if !(forward.length() > eps) {
            return Err(GeometryError::ZeroDirection);
        }

        let f = forward.normalized();
        let right = f.cross(&up);
        if !(right.length() > eps) {
            return Err(GeometryError::InvalidFrustum("up vector is parallel to forward"));
        }
        let r = right.normalized();
        let u = r.cross(&f);

        let half_v = (fov_y * T::half()).tan();
        let half_h = half_v * aspect;

        let through_eye = |n: Vector<T, 3>| {
            let n = n.normalized();
            Plane::new(n, -n.dot(&eye))
        };

        let near_point = eye + f * near;
        let far_point = eye + f * far;

        let planes = [
            Plane::new(f, -f.dot(&near_point)),
            Plane::new(-f, f.dot(&far_point)),
            through_eye((f - r * half_h).cross(&u)),
            through_eye(u.cross(&(f + r * half_h))),
            through_eye((f + u * half_v).cross(&r)),
            through_eye(r.cross(&(f - u * half_v))),
        ];
        Ok(Self { planes })
    }

    pub fn plane(&self, which: FrustumPlane) -> &Plane<T, 3> {
        &self.planes[which as usize]
    }

    pub fn planes(&self) -> &[Plane<T, 3>; 6] {
        &self.planes
    }

    pub fn contains_point(&self, p: &Vector<T, 3>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(p) >= T::zero())
    }
}
