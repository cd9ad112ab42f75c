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

use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// A subdivision vertex.
///
/// `incident` holds the outgoing half-edges (`hedge.origin == this`),
/// kept sorted counter-clockwise by the polar angle toward the far
/// endpoint (`hedge.twin.origin`). Colinear spokes keep their insertion
/// order; the splice logic indexes into this list, so the sort must be
/// stable.
#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar> {
    pub position: Point2<T>,
    pub incident: SmallVec<[usize; 8]>,
    pub removed: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point2<T>) -> Self {
        Self {
            position,
            incident: SmallVec::new(),
            removed: false,
        }
    }

    /// Spoke count of a live vertex.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub fn dispose(&mut self) {
        self.incident.clear();
        self.removed = true;
    }
}
