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

use dcel2d::dcel::Dcel;

/// 4x4 outer square with a small triangle floating inside it.
fn square_with_floating_triangle() -> Dcel<f64> {
    Dcel::from_points_edges(
        &[
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 4.0],
            [1.0, 1.0],
            [2.0, 1.0],
            [1.0, 2.0],
        ],
        &[[0, 1], [1, 2], [2, 3], [3, 0], [4, 5], [5, 6], [6, 4]],
    )
    .unwrap()
}

#[test]
fn test_classification_follows_the_area_sign() {
    let mut dcel = square_with_floating_triangle();
    dcel.validate_connectivity();

    let mut internal: Vec<f64> = dcel
        .internal_faces()
        .into_iter()
        .map(|f| dcel.face_area(f))
        .collect();
    internal.sort_by(f64::total_cmp);
    assert_eq!(internal, vec![0.5, 16.0]);

    let mut external: Vec<f64> = dcel
        .external_faces()
        .into_iter()
        .map(|f| dcel.face_area(f))
        .collect();
    external.sort_by(f64::total_cmp);
    assert_eq!(external, vec![-16.0, -0.5]);
}

#[test]
fn test_internal_and_external_area_sums_cancel() {
    let mut dcel = square_with_floating_triangle();

    let internal_sum: f64 = dcel
        .internal_faces()
        .into_iter()
        .map(|f| dcel.face_area(f))
        .sum();
    let external_sum: f64 = dcel
        .external_faces()
        .into_iter()
        .map(|f| dcel.face_area(f))
        .sum();
    assert_eq!(internal_sum + external_sum, 0.0);
}

#[test]
fn test_floating_triangle_is_a_hole_of_the_square_interior() {
    let mut dcel = square_with_floating_triangle();

    let mut internal = dcel.internal_faces();
    internal.sort_by_key(|&f| dcel.face_area(f) as i64);
    let (small, big) = (internal[0], internal[1]);

    // The triangle's outer (negative) cycle lies inside the square's
    // interior; the square's own unbounded cycle does not.
    let holes = dcel.face_holes(big);
    assert_eq!(holes.len(), 1);
    assert!(dcel.faces[holes[0]].is_external());
    assert_eq!(dcel.face_area(holes[0]), -0.5);

    // The triangle interior contains nothing.
    assert!(dcel.face_holes(small).is_empty());
}

#[test]
fn test_floating_segment_is_a_hole() {
    let mut dcel = Dcel::from_points_edges(
        &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]],
        &[[0, 1], [1, 2], [2, 3], [3, 0]],
    )
    .unwrap();
    dcel.add_edge(1.0, 1.0, 2.0, 2.0).unwrap();
    dcel.validate_connectivity();

    let big = dcel
        .internal_faces()
        .into_iter()
        .find(|&f| dcel.face_area(f) == 16.0)
        .unwrap();
    let holes = dcel.face_holes(big);
    assert_eq!(holes.len(), 1);
    assert_eq!(dcel.face_area(holes[0]), 0.0);
}

#[test]
fn test_hole_caches_refresh_after_mutations() {
    let mut dcel = square_with_floating_triangle();

    let big = dcel
        .internal_faces()
        .into_iter()
        .find(|&f| dcel.face_area(f) == 16.0)
        .unwrap();
    assert_eq!(dcel.face_holes(big).len(), 1);

    // Cutting the triangle open replaces its two cycles with one
    // zero-area cycle, still a hole of the square interior.
    assert!(dcel.remove_edge(1.0, 1.0, 2.0, 1.0));
    dcel.validate_connectivity();
    let holes = dcel.face_holes(big);
    assert_eq!(holes.len(), 1);
    assert_eq!(dcel.face_area(holes[0]), 0.0);

    // Dropping the remaining two edges empties the square interior.
    assert!(dcel.remove_edge(2.0, 1.0, 1.0, 2.0));
    assert!(dcel.remove_edge(1.0, 2.0, 1.0, 1.0));
    dcel.validate_connectivity();
    assert!(dcel.face_holes(big).is_empty());
    assert_eq!(dcel.vertex_count(), 4);
}

#[test]
fn test_split_edge_leaves_hole_caches_valid() {
    let mut dcel = square_with_floating_triangle();

    let big = dcel
        .internal_faces()
        .into_iter()
        .find(|&f| dcel.face_area(f) == 16.0)
        .unwrap();
    let holes_before = dcel.face_holes(big);

    dcel.split_edge(0.0, 0.0, 4.0, 0.0, 2.0, 0.0).unwrap();
    dcel.validate_connectivity();

    assert_eq!(dcel.face_holes(big), holes_before);
    assert_eq!(dcel.face_area(big), 16.0);
}
