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

//! Pairwise queries.
//!
//! Every supported `(A, B)` pair implements one or more of the four query
//! traits below, so an unsupported pair is a compile error rather than a
//! runtime failure. Queries never fail: degenerate input is reported through
//! a [`QueryCode`] on the result.
//!
//! Parameters (`u`, `t`) always refer to the parametrization of the primitive
//! they belong to: unit-direction for lines and rays, `[0, 1]` for segments.

pub mod code;
pub mod collision;
pub mod context;
pub mod frustum_sphere;
pub mod line_line;
pub mod linear_plane;
pub mod linear_sphere;
pub mod point_linear;
pub mod point_plane;
pub mod ray_line;
pub mod ray_ray;
pub mod ray_triangle;
pub mod rectangle_linear;
pub mod rectangle_point;
pub mod rectangle_sphere;
pub mod segment_line;
pub mod segment_ray;
pub mod segment_segment;

pub use code::QueryCode;
pub use collision::CollisionTime;
pub use context::{QueryConfig, QueryContext};
pub use frustum_sphere::FrustumSphereTest;
pub use line_line::LineLineClosest;
pub use linear_plane::{
    LinePlaneIntersection, LinearPlaneIntersection, RayPlaneIntersection,
    SegmentPlaneIntersection,
};
pub use linear_sphere::{
    LineSphereIntersection, LinearSphereIntersection, RaySphereIntersection,
    SegmentSphereIntersection,
};
pub use point_linear::{PointLineClosest, PointLinearClosest, PointRayClosest, PointSegmentClosest};
pub use point_plane::PointPlaneClosest;
pub use ray_line::RayLineClosest;
pub use ray_ray::RayRayClosest;
pub use ray_triangle::RayTriangleHit;
pub use rectangle_linear::{
    RectangleLineIntersection, RectangleLinearIntersection, RectangleRayIntersection,
    RectangleSegmentIntersection,
};
pub use rectangle_point::RectanglePointClosest;
pub use rectangle_sphere::RectangleSphereTest;
pub use segment_line::{SegmentLineClosest, SegmentLineIntersection};
pub use segment_ray::SegmentRayClosest;
pub use segment_segment::SegmentSegmentClosest;

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// Boolean-flavoured intersection test.
pub trait TestIntersection<T: Scalar, Rhs> {
    type Output;

    fn test_intersection(&self, other: &Rhs, ctx: &QueryContext<T>) -> Self::Output;
}

/// Intersection test that also reports where the primitives meet.
pub trait FindIntersection<T: Scalar, Rhs> {
    type Output;

    fn find_intersection(&self, other: &Rhs, ctx: &QueryContext<T>) -> Self::Output;
}

/// Closest points between `self` and `other`.
pub trait ClosestPoint<T: Scalar, Rhs> {
    type Output;

    fn closest_point(&self, other: &Rhs, ctx: &QueryContext<T>) -> Self::Output;
}

/// Earliest contact time of `self` and `other` moving at constant velocities.
pub trait FirstPointOfCollision<T: Scalar, const N: usize, Rhs> {
    type Output;

    fn first_point_of_collision(
        &self,
        velocity: &Vector<T, N>,
        other: &Rhs,
        other_velocity: &Vector<T, N>,
        ctx: &QueryContext<T>,
    ) -> Self::Output;
}
