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

use crate::numeric::scalar::Scalar;

/// A face of the subdivision, identified by one half-edge (`wedge`) on its
/// boundary. The boundary is the cycle `wedge, wedge.next, ...` back to
/// `wedge`.
///
/// `vertex_list`, `area` and `holes` are caches derived from the boundary
/// walk. `vertex_list` (and with it `area`) goes stale only when an edge
/// on the boundary is split; `holes` goes stale whenever an external face
/// anywhere in the subdivision appears or disappears. The [`Dcel`]
/// refreshes both on demand.
///
/// [`Dcel`]: crate::dcel::Dcel
#[derive(Clone, Debug)]
pub struct Face<T: Scalar> {
    pub wedge: usize,
    pub(crate) vertex_list: Vec<usize>,
    pub(crate) area: T,
    pub(crate) holes: Vec<usize>,
    pub(crate) vertex_list_dirty: bool,
    pub(crate) holes_dirty: bool,
    pub removed: bool,
}

impl<T: Scalar> Face<T> {
    pub fn new(wedge: usize) -> Self {
        Self {
            wedge,
            vertex_list: Vec::new(),
            area: T::zero(),
            holes: Vec::new(),
            vertex_list_dirty: true,
            holes_dirty: true,
            removed: false,
        }
    }

    /// Positive oriented area. The cached sign survives edge splits, so
    /// classification never needs a cache refresh.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.area > T::zero()
    }

    /// Zero or negative oriented area: a hole or the unbounded face.
    #[inline]
    pub fn is_external(&self) -> bool {
        !self.is_internal()
    }

    /// Drops the caches. Half-edge `face` pointers are left alone; the
    /// caller reassigns or removes every half-edge of the old boundary.
    pub fn dispose(&mut self) {
        self.vertex_list.clear();
        self.holes.clear();
        self.vertex_list_dirty = true;
        self.holes_dirty = true;
        self.removed = true;
    }
}
