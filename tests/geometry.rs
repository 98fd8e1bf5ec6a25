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

use approx::{assert_abs_diff_eq, assert_relative_eq};

use geoquery::geometry::util::orthogonal_complement;
use geoquery::geometry::{Line, Plane, Ray, Rectangle, Segment, Sphere, Triangle, Vector};
use geoquery::{GeometryError, QueryConfig, QueryContext};

fn v3(x: f64, y: f64, z: f64) -> Vector<f64, 3> {
    Vector::new([x, y, z])
}

#[test]
fn test_vector_arithmetic() {
    let a = v3(1.0, 2.0, 3.0);
    let b = v3(4.0, 5.0, 6.0);
    assert_eq!(a + b, v3(5.0, 7.0, 9.0));
    assert_eq!(b - a, v3(3.0, 3.0, 3.0));
    assert_eq!(a * 2.0, v3(2.0, 4.0, 6.0));
    assert_eq!(-a, v3(-1.0, -2.0, -3.0));
    assert_eq!(a.dot(&b), 32.0);
    assert_eq!(a.cross(&b), v3(-3.0, 6.0, -3.0));
    assert_eq!(Vector::<f64, 3>::axis(2), v3(0.0, 0.0, 1.0));

    let p = Vector::new([1.0, 0.0]);
    let q = Vector::new([0.0, 1.0]);
    assert_eq!(p.perp_dot(&q), 1.0);
    assert_eq!(p.perp(), q);
}

#[test]
fn test_vector_normalize_and_reject() {
    let v = v3(3.0, 0.0, 4.0);
    assert_relative_eq!(v.normalized().length(), 1.0);
    assert_eq!(Vector::<f64, 3>::zero().normalized(), Vector::zero());

    let r = v3(2.0, 5.0, -1.0).reject_from(&v3(0.0, 1.0, 0.0));
    assert_eq!(r, v3(2.0, 0.0, -1.0));
}

#[test]
fn test_line_and_ray_normalize_direction() {
    let line = Line::new(v3(1.0, 1.0, 1.0), v3(0.0, 3.0, 4.0));
    assert_relative_eq!(line.direction().length(), 1.0);
    assert_relative_eq!(line.point_at(5.0)[2], 5.0);

    let ray = Ray::new(v3(0.0, 0.0, 0.0), v3(0.0, 0.0, -2.0));
    assert_eq!(*ray.direction(), v3(0.0, 0.0, -1.0));

    let through = Line::from_points(v3(1.0, 0.0, 0.0), v3(3.0, 0.0, 0.0)).unwrap();
    assert_eq!(*through.origin(), v3(1.0, 0.0, 0.0));
    assert_eq!(*through.direction(), v3(1.0, 0.0, 0.0));
}

#[test]
fn test_zero_direction_is_rejected_by_try_new() {
    assert_eq!(
        Line::try_new(v3(0.0, 0.0, 0.0), Vector::zero()),
        Err(GeometryError::ZeroDirection)
    );
    assert_eq!(
        Ray::try_new(v3(0.0, 0.0, 0.0), v3(0.0, 1e-12, 0.0)),
        Err(GeometryError::ZeroDirection)
    );
    assert!(Line::from_points(v3(2.0, 2.0, 2.0), v3(2.0, 2.0, 2.0)).is_err());

    // The infallible constructor keeps the zero direction instead.
    let line = Line::new(v3(1.0, 2.0, 3.0), Vector::zero());
    assert_eq!(*line.direction(), Vector::zero());
}

#[test]
fn test_segment_accessors() {
    let seg = Segment::new(v3(0.0, 0.0, 0.0), v3(2.0, 4.0, 4.0));
    assert_eq!(seg.direction(), v3(2.0, 4.0, 4.0));
    assert_eq!(seg.length(), 6.0);
    assert_eq!(seg.length_squared(), 36.0);
    assert_eq!(seg.midpoint(), v3(1.0, 2.0, 2.0));
    assert_eq!(seg.point_at(1.0), *seg.p1());
    assert_eq!(seg.inverse().p0(), seg.p1());
    assert_eq!(Segment::from_origin_direction(v3(1.0, 1.0, 1.0), v3(1.0, 0.0, 0.0)).p1(), &v3(2.0, 1.0, 1.0));
}

#[test]
fn test_sphere_radius() {
    assert_eq!(Sphere::new(v3(0.0, 0.0, 0.0), -2.0).radius(), 2.0);
    assert_eq!(
        Sphere::try_new(v3(0.0, 0.0, 0.0), -2.0),
        Err(GeometryError::NegativeRadius)
    );
    assert_eq!(
        Sphere::try_new(v3(0.0, 0.0, 0.0), f64::NAN),
        Err(GeometryError::NegativeRadius)
    );
    let s = Sphere::try_new(v3(1.0, 0.0, 0.0), 1.0).unwrap();
    assert!(s.contains(&v3(2.0, 0.0, 0.0)));
    assert!(!s.contains(&v3(2.0, 0.1, 0.0)));
}

#[test]
fn test_plane_construction() {
    let plane = Plane::new(v3(0.0, 0.0, 2.0), -4.0);
    assert_eq!(*plane.normal(), v3(0.0, 0.0, 1.0));
    assert_eq!(plane.offset(), -2.0);
    assert_eq!(plane.signed_distance(&v3(5.0, 5.0, 3.0)), 1.0);
    assert_eq!(plane.flipped().signed_distance(&v3(5.0, 5.0, 3.0)), -1.0);
    assert_eq!(plane.closest_point(&v3(5.0, 5.0, 3.0)), v3(5.0, 5.0, 2.0));

    assert_eq!(Plane::try_new(Vector::<f64, 3>::zero(), 1.0), Err(GeometryError::ZeroNormal));

    let through = Plane::from_points(&v3(0.0, 0.0, 1.0), &v3(1.0, 0.0, 1.0), &v3(0.0, 1.0, 1.0)).unwrap();
    assert_relative_eq!(through.normal()[2], 1.0);
    assert_abs_diff_eq!(through.signed_distance(&v3(3.0, -7.0, 1.0)), 0.0);

    let collinear = Plane::from_points(&v3(0.0, 0.0, 0.0), &v3(1.0, 1.0, 1.0), &v3(2.0, 2.0, 2.0));
    assert_eq!(collinear, Err(GeometryError::ZeroNormal));
}

#[test]
fn test_triangle_normal_and_area() {
    let tri = Triangle::new(v3(0.0, 0.0, 0.0), v3(2.0, 0.0, 0.0), v3(0.0, 2.0, 0.0));
    assert_eq!(tri.normal(), v3(0.0, 0.0, 4.0));
    assert_eq!(tri.area(), 2.0);
    assert_eq!(tri.point_at(0.5, 0.5), v3(1.0, 1.0, 0.0));
    assert_eq!(*tri.plane().unwrap().normal(), v3(0.0, 0.0, 1.0));

    let flat = Triangle::new(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0), v3(2.0, 0.0, 0.0));
    assert!(flat.plane().is_err());
}

#[test]
fn test_rectangle_validation() {
    let axes = [v3(1.0, 0.0, 0.0), v3(0.0, 1.0, 0.0)];
    assert!(Rectangle::try_new(Vector::zero(), axes, [1.0, 1.0]).is_ok());
    assert_eq!(
        Rectangle::try_new(Vector::zero(), axes, [-1.0, 1.0]),
        Err(GeometryError::NegativeExtent)
    );
    assert_eq!(
        Rectangle::try_new(Vector::zero(), [v3(1.0, 0.0, 0.0), v3(1.0, 1.0, 0.0)], [1.0, 1.0]),
        Err(GeometryError::NonOrthonormalAxes)
    );
    assert_eq!(
        Rectangle::try_new(Vector::zero(), [v3(2.0, 0.0, 0.0), v3(0.0, 1.0, 0.0)], [1.0, 1.0]),
        Err(GeometryError::NonOrthonormalAxes)
    );
    assert_eq!(Rectangle::new(Vector::zero(), axes, [-3.0, 1.0]).extent(0), 3.0);
    assert!(Rectangle::from_normal(Vector::zero(), &Vector::zero(), [1.0, 1.0]).is_err());
}

#[test]
fn test_orthogonal_complement_basis() {
    for w in [
        v3(0.0, 0.0, 1.0),
        v3(1.0, 0.0, 0.0),
        v3(0.0, -3.0, 0.0),
        v3(1.0, 2.0, 3.0),
        v3(-5.0, 0.1, 0.2),
    ] {
        let (u, v) = orthogonal_complement(&w);
        let n = w.normalized();
        assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.dot(&v), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.dot(&n), 0.0, epsilon = 1e-12);
        // Right-handed: u x v points along w.
        assert_abs_diff_eq!(u.cross(&v).dot(&n), 1.0, epsilon = 1e-12);
    }

    let (u, v) = orthogonal_complement(&Vector::<f64, 3>::zero());
    assert_eq!(u, v3(1.0, 0.0, 0.0));
    assert_eq!(v, v3(0.0, 1.0, 0.0));
}

#[test]
fn test_query_context_tolerance() {
    let ctx = QueryContext::<f64>::new();
    assert_eq!(ctx.tolerance(), 1e-8);
    assert!(ctx.is_zero(1e-9));
    assert!(!ctx.is_zero(1e-7));
    assert_eq!(QueryContext::<f32>::default().tolerance(), 1e-4);

    assert_eq!(QueryContext::<f64>::with_tolerance(-1.0), Err(GeometryError::InvalidTolerance));
    assert_eq!(QueryContext::<f64>::with_tolerance(0.0), Err(GeometryError::InvalidTolerance));
    assert_eq!(QueryContext::<f64>::with_tolerance(f64::NAN), Err(GeometryError::InvalidTolerance));

    let loose = QueryContext::try_from(QueryConfig { tolerance: 1e-3 }).unwrap();
    assert!(loose.is_zero(5e-4));
    assert_eq!(QueryConfig::from(loose).tolerance, 1e-3);
}

#[test]
fn test_tolerance_changes_parallel_classification() {
    use geoquery::QueryCode;

    let l0 = Line::new(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
    let l1 = Line::new(v3(0.0, 1.0, 0.0), v3(1.0, 1e-3, 0.0));

    let strict = QueryContext::<f64>::new();
    assert_eq!(strict.closest_point(&l0, &l1).code, QueryCode::Success);

    let loose = QueryContext::with_tolerance(1e-4).unwrap();
    assert_eq!(loose.closest_point(&l0, &l1).code, QueryCode::Parallel);
}

#[test]
fn test_error_messages() {
    assert_eq!(GeometryError::ZeroDirection.to_string(), "direction vector has zero length");
    assert_eq!(
        GeometryError::InvalidFrustum("aspect ratio must be positive").to_string(),
        "invalid frustum: aspect ratio must be positive"
    );
}
