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

use tracing::warn;

use crate::dcel::core::Dcel;
use crate::dcel::error::DcelError;
use crate::dcel::half_edge::Hedge;
use crate::dcel::vertex::Vertex;
use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

impl<T: Scalar> Dcel<T> {
    /// Inserts the undirected edge `(x1, y1) - (x2, y2)`, creating either
    /// endpoint vertex if it does not exist yet, and rebuilds the faces
    /// bordering the insertion. Returns the mated half-edge pair
    /// `(x1y1 -> x2y2, x2y2 -> x1y1)`.
    ///
    /// Loop edges and edges already present are rejected before any state
    /// is touched.
    pub fn add_edge(
        &mut self,
        x1: T,
        y1: T,
        x2: T,
        y2: T,
    ) -> Result<(usize, usize), DcelError> {
        if Point2::new(x1, y1) == Point2::new(x2, y2) {
            return Err(DcelError::LoopEdge);
        }
        if let (Some(a), Some(b)) = (self.find_vertex(x1, y1), self.find_vertex(x2, y2)) {
            if self.edge_map.contains_key(&(a, b)) {
                return Err(DcelError::DuplicateEdge { from: a, to: b });
            }
        }

        let (v1, new1) = self.find_or_create_vertex(x1, y1);
        let (v2, new2) = self.find_or_create_vertex(x2, y2);

        let (e, f) = self.new_pair(v1, v2);
        self.sort_incident(v1);
        self.sort_incident(v2);

        // A fresh endpoint has a single spoke: the walk bounces straight
        // back. An existing endpoint gets the pair spliced between its
        // angular neighbors.
        if new1 {
            self.hedges[e].prev = f;
            self.hedges[f].next = e;
        } else {
            self.splice_ring(v1, e);
        }
        if new2 {
            self.hedges[f].prev = e;
            self.hedges[e].next = f;
        } else {
            self.splice_ring(v2, f);
        }

        let head_e = self.hedges[e].next;
        let head_f = self.hedges[f].next;

        // The faces the insertion cut through are rebuilt from the two
        // cycle heads. When both heads close the same cycle the edge did
        // not separate anything (pendant or bridge) and one face covers
        // both sides.
        let mut external_delta = false;
        for head in [head_e, head_f] {
            if let Some(fc) = self.hedges[head].face {
                self.remove_face(fc, &mut external_delta);
            }
        }

        let f1 = self.register_face(head_e);
        if self.faces[f1].is_external() {
            external_delta = true;
        }
        if !self.cycle_contains(head_e, head_f) {
            let f2 = self.register_face(head_f);
            if self.faces[f2].is_external() {
                external_delta = true;
            }
        }

        // Hole membership can shift globally whenever an external face
        // appears or disappears.
        if external_delta {
            self.mark_all_holes_dirty();
        }

        Ok((e, f))
    }

    /// Removes the edge carrying the half-edge `(x1, y1) -> (x2, y2)`.
    /// Endpoint vertices left without spokes are removed with it. On an
    /// unknown edge this warns and returns `false` without mutating.
    pub fn remove_edge(&mut self, x1: T, y1: T, x2: T, y2: T) -> bool {
        let Some(e) = self.find_hedge(x1, y1, x2, y2) else {
            warn!(
                "remove_edge: no half-edge ({:?}, {:?}) -> ({:?}, {:?})",
                x1, y1, x2, y2
            );
            return false;
        };
        let f = self.hedges[e].twin;
        let u = self.hedges[e].origin;
        let w = self.hedges[f].origin;

        // Heads of the cycles surviving on either side, saved before the
        // rings are unspliced.
        let head_e = self.hedges[e].next;
        let head_f = self.hedges[f].next;

        let mut external_delta = false;
        if let Some(fc) = self.hedges[e].face {
            self.remove_face(fc, &mut external_delta);
        }
        if let Some(fc) = self.hedges[f].face {
            self.remove_face(fc, &mut external_delta);
        }

        self.edge_map.remove(&(u, w));
        self.edge_map.remove(&(w, u));
        self.unsplice_ring(u, e);
        self.unsplice_ring(w, f);
        self.hedges[e].removed = true;
        self.hedges[f].removed = true;

        // A head equal to the removed pair means that side collapsed to a
        // bare vertex and yields no face.
        let mut first: Option<usize> = None;
        for head in [head_e, head_f] {
            if head == e || head == f {
                continue;
            }
            if let Some(done) = first {
                if self.cycle_contains(self.faces[done].wedge, head) {
                    continue;
                }
            }
            let idx = self.register_face(head);
            if self.faces[idx].is_external() {
                external_delta = true;
            }
            first.get_or_insert(idx);
        }

        if external_delta {
            self.mark_all_holes_dirty();
        }
        true
    }

    /// Splits the edge carrying `(x1, y1) -> (x2, y2)` at `(sx, sy)`,
    /// replacing its two half-edges with four around the new vertex. Both
    /// incident faces keep their identity; only their boundary caches go
    /// stale. Returns the new vertex.
    ///
    /// The split point is expected to lie on the open segment; the
    /// rotational order at the endpoints is preserved on that assumption.
    /// An unknown edge, or a split point equal to an endpoint, warns and
    /// returns `None` without mutating.
    pub fn split_edge(&mut self, x1: T, y1: T, x2: T, y2: T, sx: T, sy: T) -> Option<usize> {
        let Some(h) = self.find_hedge(x1, y1, x2, y2) else {
            warn!(
                "split_edge: no half-edge ({:?}, {:?}) -> ({:?}, {:?})",
                x1, y1, x2, y2
            );
            return None;
        };
        let s_pos = Point2::new(sx, sy);
        if s_pos == Point2::new(x1, y1) || s_pos == Point2::new(x2, y2) {
            warn!("split_edge: split point {:?} coincides with an endpoint", s_pos);
            return None;
        }

        let t = self.hedges[h].twin;
        let u = self.hedges[h].origin;
        let w = self.hedges[t].origin;

        let s = self.vertices.len();
        self.vertices.push(Vertex::new(s_pos));

        // Four replacement half-edges: u -> s, s -> w on the side of `h`,
        // w -> s, s -> u on the side of its twin.
        let ha = self.hedges.len();
        let (hb, hc, hd) = (ha + 1, ha + 2, ha + 3);
        self.hedges.push(Hedge::new(u));
        self.hedges.push(Hedge::new(s));
        self.hedges.push(Hedge::new(w));
        self.hedges.push(Hedge::new(s));
        self.hedges[ha].twin = hd;
        self.hedges[hd].twin = ha;
        self.hedges[hb].twin = hc;
        self.hedges[hc].twin = hb;

        let fh = self.hedges[h].face;
        let ft = self.hedges[t].face;
        self.hedges[ha].face = fh;
        self.hedges[hb].face = fh;
        self.hedges[hc].face = ft;
        self.hedges[hd].face = ft;
        if let Some(fc) = fh {
            if self.faces[fc].wedge == h {
                self.faces[fc].wedge = ha;
            }
            self.faces[fc].vertex_list_dirty = true;
        }
        if let Some(fc) = ft {
            if self.faces[fc].wedge == t {
                self.faces[fc].wedge = hc;
            }
            self.faces[fc].vertex_list_dirty = true;
        }

        let hp = self.hedges[h].prev;
        let hn = self.hedges[h].next;
        let tp = self.hedges[t].prev;
        let tn = self.hedges[t].next;

        // Cycle relink. A pendant edge has its twin as neighbor in the
        // cycle; the conditionals fold those turns onto the replacements.
        self.hedges[ha].next = hb;
        self.hedges[hb].prev = ha;
        self.hedges[hc].next = hd;
        self.hedges[hd].prev = hc;

        let ha_prev = if hp != t { hp } else { hd };
        self.hedges[ha].prev = ha_prev;
        self.hedges[ha_prev].next = ha;

        let hb_next = if hn != t { hn } else { hc };
        self.hedges[hb].next = hb_next;
        self.hedges[hb_next].prev = hb;

        let hc_prev = if tp != h { tp } else { hb };
        self.hedges[hc].prev = hc_prev;
        self.hedges[hc_prev].next = hc;

        let hd_next = if tn != h { tn } else { ha };
        self.hedges[hd].next = hd_next;
        self.hedges[hd_next].prev = hd;

        // The replacements keep the slots of the replaced spokes at `u`
        // and `w`; the direction toward `s` is the direction the old edge
        // had, so the rotational order is untouched.
        self.replace_spoke(u, h, ha);
        self.replace_spoke(w, t, hc);
        self.vertices[s].incident.push(hb);
        self.vertices[s].incident.push(hd);
        self.sort_incident(s);

        self.edge_map.remove(&(u, w));
        self.edge_map.remove(&(w, u));
        self.edge_map.insert((u, s), ha);
        self.edge_map.insert((s, w), hb);
        self.edge_map.insert((w, s), hc);
        self.edge_map.insert((s, u), hd);

        self.hedges[h].removed = true;
        self.hedges[t].removed = true;

        Some(s)
    }

    // ------------------------------------------------------------------
    // Ring maintenance
    // ------------------------------------------------------------------

    /// Splices the freshly sorted spoke `h` between its angular neighbors
    /// at `v`: the walk arriving on `h.twin` turns onto the
    /// clockwise-previous spoke, and the counter-clockwise-next spoke's
    /// twin now turns onto `h`. The vertex must already carry at least one
    /// other spoke.
    fn splice_ring(&mut self, v: usize, h: usize) {
        let i = self.ring_position(v, h);
        let k = self.vertices[v].incident.len();
        let a = self.vertices[v].incident[(i + k - 1) % k];
        let b = self.vertices[v].incident[(i + 1) % k];

        let twin_b = self.hedges[b].twin;
        let twin_h = self.hedges[h].twin;
        self.hedges[twin_b].next = h;
        self.hedges[h].prev = twin_b;
        self.hedges[twin_h].next = a;
        self.hedges[a].prev = twin_h;
    }

    /// Drops spoke `h` from the ring at `v`, rejoining its angular
    /// neighbors across the gap. A vertex left without spokes is removed.
    fn unsplice_ring(&mut self, v: usize, h: usize) {
        let i = self.ring_position(v, h);
        self.vertices[v].incident.remove(i);

        let k = self.vertices[v].incident.len();
        if k == 0 {
            self.vertices[v].dispose();
            return;
        }
        let a = self.vertices[v].incident[(i + k - 1) % k];
        let b = self.vertices[v].incident[i % k];
        let twin_b = self.hedges[b].twin;
        self.hedges[twin_b].next = a;
        self.hedges[a].prev = twin_b;
    }

    /// In-place spoke substitution preserving ring order.
    fn replace_spoke(&mut self, v: usize, old: usize, new: usize) {
        let i = self.ring_position(v, old);
        self.vertices[v].incident[i] = new;
    }

    fn ring_position(&self, v: usize, h: usize) -> usize {
        self.vertices[v]
            .incident
            .iter()
            .position(|&s| s == h)
            .unwrap_or_else(|| panic!("spoke {} missing from the ring of vertex {}", h, v))
    }
}
