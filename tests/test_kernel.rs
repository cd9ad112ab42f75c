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

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use dcel2d::geometry::Point2;
use dcel2d::kernel::predicates::{point_in_polygon, polar_angle, signed_area};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

#[test]
fn test_polar_angle_covers_all_quadrants() {
    let o = p(0.0, 0.0);
    assert_eq!(polar_angle(&o, &p(1.0, 0.0)), 0.0);
    assert_eq!(polar_angle(&o, &p(1.0, 1.0)), FRAC_PI_4);
    assert_eq!(polar_angle(&o, &p(0.0, 1.0)), FRAC_PI_2);
    assert_eq!(polar_angle(&o, &p(-1.0, 0.0)), PI);
    assert_eq!(polar_angle(&o, &p(0.0, -1.0)), -FRAC_PI_2);
}

#[test]
fn test_polar_angle_is_translation_invariant() {
    assert_eq!(
        polar_angle(&p(3.0, -2.0), &p(4.0, -2.0)),
        polar_angle(&p(0.0, 0.0), &p(1.0, 0.0))
    );
}

#[test]
fn test_signed_area_tracks_orientation() {
    let ccw = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
    let cw = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
    assert_eq!(signed_area(&ccw), 0.5);
    assert_eq!(signed_area(&cw), -0.5);
}

#[test]
fn test_signed_area_of_degenerate_loops_is_zero() {
    let empty: [Point2<f64>; 0] = [];
    assert_eq!(signed_area(&empty), 0.0);
    assert_eq!(signed_area(&[p(0.0, 0.0), p(1.0, 0.0)]), 0.0);
    // Pendant bounce: out and back along the same segment.
    assert_eq!(
        signed_area(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(1.0, 0.0)]),
        0.0
    );
}

#[test]
fn test_point_in_polygon_even_odd_crossings() {
    let square = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
    assert!(point_in_polygon(&p(1.0, 1.0), &square));
    assert!(!point_in_polygon(&p(3.0, 1.0), &square));
    assert!(!point_in_polygon(&p(-0.5, 0.5), &square));
    assert!(!point_in_polygon(&p(1.0, -1.0), &square));

    // Concave chevron: the notch is outside.
    let chevron = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(2.0, 1.0), p(0.0, 4.0)];
    assert!(point_in_polygon(&p(1.0, 1.0), &chevron));
    assert!(!point_in_polygon(&p(2.0, 3.0), &chevron));
}
