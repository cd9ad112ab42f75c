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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Angle of the vector `to - from`, in `(-pi, pi]`.
#[inline]
pub fn polar_angle<T: Scalar>(from: &Point2<T>, to: &Point2<T>) -> T {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Shoelace signed area of the polygon traced by `poly`. CCW is positive.
/// Fewer than three vertices yields zero.
pub fn signed_area<T: Scalar>(poly: &[Point2<T>]) -> T {
    if poly.len() < 3 {
        return T::zero();
    }

    let mut acc = T::zero();
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        acc = acc + poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    acc / T::two()
}

/// Even-odd crossing test. Points on the boundary are not handled
/// specially; callers wanting a strict-interior answer must pick query
/// points away from the polygon edges.
pub fn point_in_polygon<T: Scalar>(p: &Point2<T>, poly: &[Point2<T>]) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (pi, pj) = (&poly[i], &poly[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pi.x + (p.y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
