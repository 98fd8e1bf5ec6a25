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

use approx::assert_abs_diff_eq;

use geoquery::geometry::{Line, Sphere, Vector};
use geoquery::query::{QueryCode, QueryContext};

fn v3(x: f64, y: f64, z: f64) -> Vector<f64, 3> {
    Vector::new([x, y, z])
}

#[test]
fn test_moving_sphere_hits_stationary_point() {
    let ctx = QueryContext::<f64>::new();
    let sphere = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let res = ctx.first_point_of_collision(
        &sphere,
        &v3(1.0, 0.0, 0.0),
        &v3(5.0, 0.0, 0.0),
        &Vector::zero(),
    );
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 4.0);
}

#[test]
fn test_moving_point_hits_sphere() {
    let ctx = QueryContext::<f64>::new();
    let sphere = Sphere::new(v3(0.0, 0.0, 0.0), 2.0);
    let res = ctx.first_point_of_collision(
        &sphere,
        &Vector::zero(),
        &v3(0.0, 10.0, 0.0),
        &v3(0.0, -4.0, 0.0),
    );
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 2.0);
}

#[test]
fn test_sphere_sphere_head_on() {
    let ctx = QueryContext::<f64>::new();
    let s0 = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let s1 = Sphere::new(v3(10.0, 0.0, 0.0), 1.0);
    let res = ctx.first_point_of_collision(&s0, &v3(2.0, 0.0, 0.0), &s1, &v3(-2.0, 0.0, 0.0));
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 2.0);
}

#[test]
fn test_sphere_sphere_in_two_dimensions() {
    let ctx = QueryContext::<f64>::new();
    let c0 = Sphere::new(Vector::new([0.0, 0.0]), 0.5);
    let c1 = Sphere::new(Vector::new([3.0, 4.0]), 0.5);
    let res = ctx.first_point_of_collision(
        &c0,
        &Vector::new([0.3, 0.4]),
        &c1,
        &Vector::zero(),
    );
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 8.0, epsilon = 1e-12);
}

#[test]
fn test_sphere_sphere_no_collision() {
    let ctx = QueryContext::<f64>::new();
    let s0 = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let s1 = Sphere::new(v3(10.0, 0.0, 0.0), 1.0);

    let same_velocity = v3(3.0, 1.0, 0.0);
    let res = ctx.first_point_of_collision(&s0, &same_velocity, &s1, &same_velocity);
    assert_eq!(res.code, QueryCode::NotIntersecting);
    assert_eq!(res.t, 0.0);

    let separating = ctx.first_point_of_collision(&s0, &v3(-1.0, 0.0, 0.0), &s1, &Vector::zero());
    assert_eq!(separating.code, QueryCode::NotIntersecting);
    assert_eq!(separating.t, 0.0);

    let passing = Sphere::new(v3(10.0, 5.0, 0.0), 1.0);
    let res = ctx.first_point_of_collision(&s0, &v3(1.0, 0.0, 0.0), &passing, &Vector::zero());
    assert_eq!(res.code, QueryCode::NotIntersecting);
    assert_eq!(res.t, 0.0);
}

#[test]
fn test_sphere_line_orthogonal_approach() {
    let ctx = QueryContext::<f64>::new();
    let sphere = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let line = Line::new(v3(7.0, 5.0, 0.0), v3(1.0, 0.0, 0.0));

    let res = ctx.first_point_of_collision(&sphere, &v3(0.0, 1.0, 0.0), &line, &Vector::zero());
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 4.0);

    let res = ctx.first_point_of_collision(&sphere, &Vector::zero(), &line, &v3(0.0, -2.0, 0.0));
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 2.0);
}

#[test]
fn test_sphere_line_motion_along_line_never_collides() {
    let ctx = QueryContext::<f64>::new();
    let sphere = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let line = Line::new(v3(0.0, 5.0, 0.0), v3(1.0, 0.0, 0.0));
    let res = ctx.first_point_of_collision(&sphere, &v3(10.0, 0.0, 0.0), &line, &Vector::zero());
    assert_eq!(res.code, QueryCode::NotIntersecting);
    assert_eq!(res.t, 0.0);
}

#[test]
fn test_sphere_line_oblique_velocity() {
    let ctx = QueryContext::<f64>::new();
    let sphere = Sphere::new(v3(0.0, 0.0, 0.0), 1.0);
    let line = Line::new(v3(0.0, 0.0, 3.0), v3(0.0, 1.0, 0.0));
    // Only the z component of the velocity closes the gap.
    let res = ctx.first_point_of_collision(&sphere, &v3(0.0, 5.0, 1.0), &line, &Vector::zero());
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 2.0, epsilon = 1e-12);
}

#[test]
fn test_slow_f32_point_hits_small_sphere() {
    let ctx = QueryContext::<f32>::new();
    let sphere = Sphere::new(Vector::new([0.0f32, 0.0, 0.0]), 0.001);
    let res = ctx.first_point_of_collision(
        &sphere,
        &Vector::zero(),
        &Vector::new([0.01f32, 0.0, 0.0]),
        &Vector::new([-0.005f32, 0.0, 0.0]),
    );
    assert_eq!(res.code, QueryCode::Intersecting);
    assert_abs_diff_eq!(res.t, 1.8, epsilon = 1e-3);
}
