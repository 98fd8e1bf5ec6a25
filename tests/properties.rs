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

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use geoquery::geometry::{Frustum, Line, Plane, Ray, Segment, Sphere, Vector};
use geoquery::query::{QueryCode, QueryContext};

const SAMPLES: usize = 500;

fn random_point(rng: &mut StdRng) -> Vector<f64, 3> {
    Vector::new([
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    ])
}

fn random_direction(rng: &mut StdRng) -> Vector<f64, 3> {
    loop {
        let v = Vector::new([
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ]);
        if v.length() > 0.1 {
            return v;
        }
    }
}

fn random_segment(rng: &mut StdRng) -> Segment<f64, 3> {
    Segment::new(random_point(rng), random_point(rng))
}

#[test]
fn test_closest_point_symmetry() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..SAMPLES {
        let l0 = Line::new(random_point(&mut rng), random_direction(&mut rng));
        let l1 = Line::new(random_point(&mut rng), random_direction(&mut rng));
        let ab = ctx.closest_point(&l0, &l1);
        let ba = ctx.closest_point(&l1, &l0);
        assert!((ab.distance() - ba.distance()).abs() < 1e-9);

        let r0 = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let r1 = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let ab = ctx.closest_point(&r0, &r1);
        let ba = ctx.closest_point(&r1, &r0);
        assert!((ab.distance() - ba.distance()).abs() < 1e-9);

        let s0 = random_segment(&mut rng);
        let s1 = random_segment(&mut rng);
        let ab = ctx.closest_point(&s0, &s1);
        let ba = ctx.closest_point(&s1, &s0);
        assert!((ab.distance() - ba.distance()).abs() < 1e-9);
        assert_eq!(ab.code, ba.code);
    }
}

#[test]
fn test_segment_segment_is_minimal() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..SAMPLES {
        let s0 = random_segment(&mut rng);
        let s1 = random_segment(&mut rng);
        let best = ctx.closest_point(&s0, &s1).distance();
        for i in 0..=10 {
            for j in 0..=10 {
                let a = s0.point_at(i as f64 / 10.0);
                let b = s1.point_at(j as f64 / 10.0);
                assert!(best <= a.distance_to(&b) + 1e-9);
            }
        }
    }
}

#[test]
fn test_segment_ray_is_minimal() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..SAMPLES {
        let seg = random_segment(&mut rng);
        let ray = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let res = ctx.closest_point(&seg, &ray);
        assert!((0.0..=1.0).contains(&res.u_segment));
        assert!(res.u_ray >= 0.0);
        for i in 0..=10 {
            for j in 0..=20 {
                let a = seg.point_at(i as f64 / 10.0);
                let b = ray.point_at(j as f64);
                assert!(res.distance() <= a.distance_to(&b) + 1e-9);
            }
        }
    }
}

#[test]
fn test_ray_ray_is_minimal() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..SAMPLES {
        let r0 = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let r1 = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let res = ctx.closest_point(&r0, &r1);
        assert!(res.u0 >= 0.0 && res.u1 >= 0.0);
        for i in 0..=20 {
            for j in 0..=20 {
                let a = r0.point_at(i as f64);
                let b = r1.point_at(j as f64);
                assert!(res.distance() <= a.distance_to(&b) + 1e-9);
            }
        }
    }
}

#[test]
fn test_ray_line_is_minimal() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..SAMPLES {
        let ray = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let line = Line::new(random_point(&mut rng), random_direction(&mut rng));
        let res = ctx.closest_point(&ray, &line);
        assert!(res.u_ray >= 0.0);
        for i in 0..=20 {
            for j in -20..=20 {
                let a = ray.point_at(i as f64);
                let b = line.point_at(j as f64);
                assert!(res.distance() <= a.distance_to(&b) + 1e-9);
            }
        }
    }
}

#[test]
fn test_segment_line_is_minimal() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(37);

    for _ in 0..SAMPLES {
        let seg = random_segment(&mut rng);
        let line = Line::new(random_point(&mut rng), random_direction(&mut rng));
        let res = ctx.closest_point(&seg, &line);
        assert!((0.0..=1.0).contains(&res.u_segment));
        for i in 0..=10 {
            for j in -20..=20 {
                let a = seg.point_at(i as f64 / 10.0);
                let b = line.point_at(j as f64);
                assert!(res.distance() <= a.distance_to(&b) + 1e-9);
            }
        }
    }
}

#[test]
fn test_line_plane_round_trip() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..SAMPLES {
        let line = Line::new(random_point(&mut rng), random_direction(&mut rng));
        let plane = Plane::from_point_normal(&random_point(&mut rng), &random_direction(&mut rng))
            .unwrap();
        let res = ctx.find_intersection(&line, &plane);
        if res.code == QueryCode::Intersecting {
            assert!(plane.signed_distance(&res.point).abs() < 1e-6);
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SAMPLES {
        let s0 = random_segment(&mut rng);
        let s1 = random_segment(&mut rng);
        assert_eq!(ctx.closest_point(&s0, &s1), ctx.closest_point(&s0, &s1));

        let sphere = Sphere::new(random_point(&mut rng), rng.random_range(0.1..5.0));
        assert_eq!(ctx.find_intersection(&s0, &sphere), ctx.find_intersection(&s0, &sphere));

        let v = random_direction(&mut rng);
        let p = random_point(&mut rng);
        assert_eq!(
            ctx.first_point_of_collision(&sphere, &v, &p, &Vector::zero()),
            ctx.first_point_of_collision(&sphere, &v, &p, &Vector::zero())
        );
    }
}

#[test]
fn test_sphere_tests_agree_with_find() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..SAMPLES {
        let sphere = Sphere::new(random_point(&mut rng), rng.random_range(0.5..6.0));
        let seg = random_segment(&mut rng);
        let ray = Ray::new(random_point(&mut rng), random_direction(&mut rng));
        let line = Line::new(random_point(&mut rng), random_direction(&mut rng));

        let hit = |code: QueryCode| code == QueryCode::Intersecting;
        assert_eq!(ctx.test_intersection(&seg, &sphere), hit(ctx.find_intersection(&seg, &sphere).code));
        assert_eq!(ctx.test_intersection(&ray, &sphere), hit(ctx.find_intersection(&ray, &sphere).code));
        assert_eq!(ctx.test_intersection(&line, &sphere), hit(ctx.find_intersection(&line, &sphere).code));

        let res = ctx.find_intersection(&seg, &sphere);
        if hit(res.code) {
            assert!(res.u0 <= res.u1);
            assert!(res.u0 >= 0.0 && res.u1 <= 1.0);
        }
    }
}

#[test]
fn test_frustum_result_ignores_plane_order() {
    let ctx = QueryContext::<f64>::new();
    let mut rng = StdRng::seed_from_u64(42);
    let frustum = Frustum::perspective(
        Vector::zero(),
        Vector::new([0.0, 0.0, -1.0]),
        Vector::new([0.0, 1.0, 0.0]),
        1.0,
        1.5,
        0.5,
        20.0,
    )
    .unwrap();

    for _ in 0..SAMPLES {
        let sphere = Sphere::new(random_point(&mut rng), rng.random_range(0.1..3.0));
        let expected = ctx.test_intersection(&frustum, &sphere);

        let mut planes = *frustum.planes();
        planes.shuffle(&mut rng);
        assert_eq!(ctx.test_intersection(&Frustum::new(planes), &sphere), expected);
    }
}
