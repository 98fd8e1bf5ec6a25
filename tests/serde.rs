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

#![cfg(feature = "serde")]

use geoquery::geometry::{Line, Plane, Ray, Rectangle, Segment, Sphere, Vector};
use geoquery::query::{QueryCode, QueryConfig, QueryContext, SegmentSegmentClosest};

#[test]
fn test_context_loads_from_config() {
    let ctx: QueryContext<f64> = serde_json::from_str(r#"{"tolerance":1e-6}"#).unwrap();
    assert_eq!(ctx.tolerance(), 1e-6);
    let json = serde_json::to_string(&ctx).unwrap();
    let config: QueryConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(config.tolerance, 1e-6);
}

#[test]
fn test_context_rejects_invalid_tolerance() {
    let err = serde_json::from_str::<QueryContext<f64>>(r#"{"tolerance":-1.0}"#).unwrap_err();
    assert!(err.to_string().contains("tolerance"));

    // The plain config carries no validation of its own.
    let config: QueryConfig<f64> = serde_json::from_str(r#"{"tolerance":-1.0}"#).unwrap();
    assert!(QueryContext::try_from(config).is_err());
}

#[test]
fn test_vectors_serialize_as_tuples() {
    let v = Vector::new([1.0, 2.5, -3.0]);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.5,-3.0]");
    let back: Vector<f64, 3> = serde_json::from_str("[1.0,2.5,-3.0]").unwrap();
    assert_eq!(back, v);
    assert!(serde_json::from_str::<Vector<f64, 3>>("[1.0,2.5]").is_err());
}

#[test]
fn test_primitives_round_trip() {
    let sphere = Sphere::new(Vector::new([0.0, 1.0, 2.0]), 3.0);
    let json = serde_json::to_string(&sphere).unwrap();
    assert_eq!(serde_json::from_str::<Sphere<f64, 3>>(&json).unwrap(), sphere);

    let line = Line::new(Vector::new([0.0, 0.0]), Vector::new([0.0, 2.0]));
    let json = serde_json::to_string(&line).unwrap();
    assert_eq!(serde_json::from_str::<Line<f64, 2>>(&json).unwrap(), line);
}

#[test]
fn test_results_serialize() {
    let ctx = QueryContext::<f64>::new();
    let s0 = Segment::new(Vector::new([0.0, 0.0]), Vector::new([1.0, 0.0]));
    let s1 = Segment::new(Vector::new([1.0, 0.0]), Vector::new([2.0, 0.0]));
    let res = ctx.closest_point(&s0, &s1);

    let json = serde_json::to_string(&res).unwrap();
    assert!(json.contains(r#""code":"Success""#));
    let back: SegmentSegmentClosest<f64, 2> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, res);
    assert_eq!(serde_json::to_string(&QueryCode::Parallel).unwrap(), r#""Parallel""#);
}

#[test]
fn test_loaded_directions_are_normalized() {
    let ctx = QueryContext::<f64>::new();
    let line: Line<f64, 3> =
        serde_json::from_str(r#"{"origin":[0.0,0.0,0.0],"direction":[2.0,0.0,0.0]}"#).unwrap();
    assert_eq!(*line.direction(), Vector::new([1.0, 0.0, 0.0]));
    let res = ctx.closest_point(&Vector::new([7.0, -34.5, 90.53]), &line);
    assert_eq!(res.u, 7.0);
    assert_eq!(res.cp, Vector::new([7.0, 0.0, 0.0]));

    let ray: Ray<f64, 2> = serde_json::from_str(r#"{"origin":[1.0,1.0],"direction":[0.0,-5.0]}"#).unwrap();
    assert_eq!(*ray.direction(), Vector::new([0.0, -1.0]));

    let plane: Plane<f64, 3> =
        serde_json::from_str(r#"{"normal":[0.0,0.0,2.0],"offset":-4.0}"#).unwrap();
    assert_eq!(*plane.normal(), Vector::new([0.0, 0.0, 1.0]));
    assert_eq!(plane.offset(), -2.0);
}

#[test]
fn test_invalid_primitives_are_rejected_on_load() {
    let zero_dir = r#"{"origin":[0.0,0.0,0.0],"direction":[0.0,0.0,0.0]}"#;
    assert!(serde_json::from_str::<Line<f64, 3>>(zero_dir).is_err());
    assert!(serde_json::from_str::<Ray<f64, 3>>(zero_dir).is_err());

    let err = serde_json::from_str::<Sphere<f64, 3>>(r#"{"center":[0.0,0.0,0.0],"radius":-3.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("radius"));

    let flat = r#"{"normal":[0.0,0.0,0.0],"offset":1.0}"#;
    assert!(serde_json::from_str::<Plane<f64, 3>>(flat).is_err());

    let skewed = r#"{"center":[0.0,0.0,0.0],"axes":[[1.0,0.0,0.0],[1.0,1.0,0.0]],"extents":[1.0,1.0]}"#;
    assert!(serde_json::from_str::<Rectangle<f64, 3>>(skewed).is_err());
    let negative = r#"{"center":[0.0,0.0,0.0],"axes":[[1.0,0.0,0.0],[0.0,1.0,0.0]],"extents":[-1.0,1.0]}"#;
    assert!(serde_json::from_str::<Rectangle<f64, 3>>(negative).is_err());
    let valid = r#"{"center":[0.0,0.0,0.0],"axes":[[1.0,0.0,0.0],[0.0,1.0,0.0]],"extents":[2.0,1.0]}"#;
    assert_eq!(serde_json::from_str::<Rectangle<f64, 3>>(valid).unwrap().extent(0), 2.0);
}
