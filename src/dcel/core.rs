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

use ahash::{AHashMap, AHashSet};

use crate::dcel::error::DcelError;
use crate::dcel::face::Face;
use crate::dcel::half_edge::Hedge;
use crate::dcel::vertex::Vertex;
use crate::geometry::Point2;
use crate::kernel::predicates::{point_in_polygon, polar_angle, signed_area};
use crate::numeric::scalar::Scalar;

/// A planar subdivision.
///
/// Vertices, half-edges and faces live in index arenas; `edge_map` keys
/// every live half-edge by its directed vertex pair `(origin, target)`,
/// which is what makes duplicate-edge rejection and `find_hedge` O(1).
/// Entities are removed by tombstoning (`removed` flag), so indices held
/// by the caller stay valid until `dispose`.
#[derive(Debug, Clone)]
pub struct Dcel<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub hedges: Vec<Hedge>,
    pub faces: Vec<Face<T>>,

    pub(crate) edge_map: AHashMap<(usize, usize), usize>,
}

impl<T: Scalar> Dcel<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            hedges: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
        }
    }

    /// Builds a subdivision from `points` and undirected `edges` (pairs of
    /// indices into `points`).
    ///
    /// Loop edges, repeated edges and out-of-range indices are rejected
    /// before any linkage is installed.
    pub fn from_points_edges(
        points: &[[T; 2]],
        edges: &[[usize; 2]],
    ) -> Result<Self, DcelError> {
        let mut dcel = Self::new();

        for p in points {
            dcel.vertices.push(Vertex::new(Point2::new(p[0], p[1])));
        }

        for e in edges {
            let (a, b) = (e[0], e[1]);
            if a >= points.len() || b >= points.len() {
                return Err(DcelError::EdgeOutOfRange {
                    from: a,
                    to: b,
                    len: points.len(),
                });
            }
            if a == b {
                return Err(DcelError::LoopEdge);
            }
            if dcel.edge_map.contains_key(&(a, b)) {
                return Err(DcelError::DuplicateEdge { from: a, to: b });
            }
            dcel.new_pair(a, b);
        }

        for v in 0..dcel.vertices.len() {
            dcel.sort_incident(v);
            dcel.thread_ring(v);
        }

        // Face identification: one face per untagged next-cycle.
        for h in 0..dcel.hedges.len() {
            if dcel.hedges[h].face.is_none() {
                dcel.register_face(h);
            }
        }

        Ok(dcel)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn source(&self, h: usize) -> usize {
        self.hedges[h].origin
    }

    #[inline]
    pub fn target(&self, h: usize) -> usize {
        self.hedges[self.hedges[h].twin].origin
    }

    /// First live vertex with exactly these coordinates, or `None`.
    pub fn find_vertex(&self, x: T, y: T) -> Option<usize> {
        let p = Point2::new(x, y);
        self.vertices
            .iter()
            .enumerate()
            .find(|(_, v)| !v.removed && v.position == p)
            .map(|(i, _)| i)
    }

    /// The half-edge directed `(x1, y1) -> (x2, y2)`, or `None`. Lookups
    /// are not symmetric; callers supply the direction they want.
    pub fn find_hedge(&self, x1: T, y1: T, x2: T, y2: T) -> Option<usize> {
        let v1 = self.find_vertex(x1, y1)?;
        let v2 = self.find_vertex(x2, y2)?;
        self.half_edge_between(v1, v2)
    }

    /// The half-edge directed `a -> b` between two vertex indices.
    pub fn half_edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_map.get(&(a, b)).copied()
    }

    /// Faces with positive oriented area.
    pub fn internal_faces(&self) -> Vec<usize> {
        self.live_faces().filter(|&f| self.faces[f].is_internal()).collect()
    }

    /// Faces with zero or negative oriented area (holes and the unbounded
    /// face).
    pub fn external_faces(&self) -> Vec<usize> {
        self.live_faces().filter(|&f| self.faces[f].is_external()).collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.removed).count()
    }

    pub fn hedge_count(&self) -> usize {
        self.hedges.iter().filter(|h| !h.removed).count()
    }

    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.removed).count()
    }

    pub(crate) fn live_faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.removed)
            .map(|(i, _)| i)
    }

    // ------------------------------------------------------------------
    // Face caches
    // ------------------------------------------------------------------

    /// Oriented area of face `f`, refreshing the boundary cache if an edge
    /// split left it stale.
    pub fn face_area(&mut self, f: usize) -> T {
        self.refresh_face(f);
        self.faces[f].area
    }

    /// Boundary vertices of face `f` in walk order.
    pub fn face_vertices(&mut self, f: usize) -> &[usize] {
        self.refresh_face(f);
        &self.faces[f].vertex_list
    }

    /// External faces whose boundary lies strictly inside face `f`.
    ///
    /// A candidate counts as inside when one of its boundary vertices that
    /// is not shared with `f` passes the even-odd crossing test against
    /// `f`'s boundary polygon.
    pub fn face_holes(&mut self, f: usize) -> Vec<usize> {
        self.refresh_holes(f);
        self.faces[f].holes.clone()
    }

    pub(crate) fn refresh_face(&mut self, f: usize) {
        assert!(!self.faces[f].removed, "face {} is removed", f);
        if !self.faces[f].vertex_list_dirty {
            return;
        }

        let cycle = self.cycle_hedges(self.faces[f].wedge);
        let verts: Vec<usize> = cycle.iter().map(|&h| self.hedges[h].origin).collect();
        let poly: Vec<Point2<T>> = verts.iter().map(|&v| self.vertices[v].position).collect();

        let face = &mut self.faces[f];
        face.area = signed_area(&poly);
        face.vertex_list = verts;
        face.vertex_list_dirty = false;
    }

    fn refresh_holes(&mut self, f: usize) {
        self.refresh_face(f);
        if !self.faces[f].holes_dirty {
            return;
        }

        let boundary: Vec<Point2<T>> = self.faces[f]
            .vertex_list
            .iter()
            .map(|&v| self.vertices[v].position)
            .collect();
        let on_boundary: AHashSet<usize> =
            self.faces[f].vertex_list.iter().copied().collect();

        let candidates: Vec<usize> = self.live_faces().filter(|&g| g != f).collect();
        let mut holes = Vec::new();
        for g in candidates {
            if self.faces[g].is_internal() {
                continue;
            }
            self.refresh_face(g);
            let rep = self.faces[g]
                .vertex_list
                .iter()
                .copied()
                .find(|v| !on_boundary.contains(v));
            let Some(rep) = rep else {
                // Every boundary vertex is shared with `f`; not strictly inside.
                continue;
            };
            if point_in_polygon(&self.vertices[rep].position, &boundary) {
                holes.push(g);
            }
        }

        let face = &mut self.faces[f];
        face.holes = holes;
        face.holes_dirty = false;
    }

    pub(crate) fn mark_all_holes_dirty(&mut self) {
        for face in self.faces.iter_mut().filter(|f| !f.removed) {
            face.holes_dirty = true;
        }
    }

    // ------------------------------------------------------------------
    // Construction machinery (shared with the incremental operations)
    // ------------------------------------------------------------------

    /// Creates the mated pair `a -> b`, `b -> a`, registers both in the
    /// incident lists and the edge map. Rotational linkage is not touched.
    pub(crate) fn new_pair(&mut self, a: usize, b: usize) -> (usize, usize) {
        let e = self.hedges.len();
        let f = e + 1;

        let mut hedge_ab = Hedge::new(a);
        hedge_ab.twin = f;
        let mut hedge_ba = Hedge::new(b);
        hedge_ba.twin = e;
        self.hedges.push(hedge_ab);
        self.hedges.push(hedge_ba);

        self.vertices[a].incident.push(e);
        self.vertices[b].incident.push(f);
        self.edge_map.insert((a, b), e);
        self.edge_map.insert((b, a), f);

        (e, f)
    }

    /// Stable CCW sort of the outgoing spokes at `v`. Colinear spokes keep
    /// their insertion order.
    pub(crate) fn sort_incident(&mut self, v: usize) {
        let mut incident = std::mem::take(&mut self.vertices[v].incident);
        let origin = self.vertices[v].position;
        incident.sort_by(|&a, &b| {
            let pa = self.vertices[self.target(a)].position;
            let pb = self.vertices[self.target(b)].position;
            T::cmp_ref(&polar_angle(&origin, &pa), &polar_angle(&origin, &pb))
        });
        self.vertices[v].incident = incident;
    }

    /// Installs the rotational linkage at `v` from scratch: a walk arriving
    /// on the twin of spoke `b` turns onto the clockwise-previous spoke
    /// `a`, so for adjacent spokes the turn is `b.twin -> a`. With a single
    /// spoke this degenerates to the pendant turn `a.twin -> a`.
    pub(crate) fn thread_ring(&mut self, v: usize) {
        let k = self.vertices[v].incident.len();
        for j in 0..k {
            let a = self.vertices[v].incident[j];
            let b = self.vertices[v].incident[(j + 1) % k];
            let twin_b = self.hedges[b].twin;
            self.hedges[twin_b].next = a;
            self.hedges[a].prev = twin_b;
        }
    }

    /// Half-edges of the `next`-cycle through `start`, in walk order.
    /// Fatal if the cycle does not close: that is a broken-linkage contract
    /// bug, not a recoverable condition.
    pub(crate) fn cycle_hedges(&self, start: usize) -> Vec<usize> {
        let cap = self.hedges.len();
        let mut cycle = Vec::new();
        let mut cur = start;
        loop {
            assert!(
                cur < self.hedges.len() && !self.hedges[cur].removed,
                "half-edge cycle through {} reached dead slot {}",
                start,
                cur
            );
            cycle.push(cur);
            cur = self.hedges[cur].next;
            if cur == start {
                break;
            }
            assert!(cycle.len() <= cap, "half-edge cycle through {} does not close", start);
        }
        cycle
    }

    /// Two boundary cycles describe the same face precisely when one start
    /// is reachable from the other by walking `next`.
    pub(crate) fn cycle_contains(&self, start: usize, needle: usize) -> bool {
        let cap = self.hedges.len();
        let mut steps = 0usize;
        let mut cur = start;
        loop {
            if cur == needle {
                return true;
            }
            cur = self.hedges[cur].next;
            if cur == start {
                return false;
            }
            steps += 1;
            assert!(steps <= cap, "half-edge cycle through {} does not close", start);
        }
    }

    /// Instantiates the face bounded by the cycle through `wedge`, stamps
    /// every half-edge on the cycle, and fills the boundary caches.
    pub(crate) fn register_face(&mut self, wedge: usize) -> usize {
        let idx = self.faces.len();
        let cycle = self.cycle_hedges(wedge);

        let verts: Vec<usize> = cycle.iter().map(|&h| self.hedges[h].origin).collect();
        let poly: Vec<Point2<T>> = verts.iter().map(|&v| self.vertices[v].position).collect();

        let mut face = Face::new(wedge);
        face.area = signed_area(&poly);
        face.vertex_list = verts;
        face.vertex_list_dirty = false;
        self.faces.push(face);

        for h in cycle {
            self.hedges[h].face = Some(idx);
        }
        idx
    }

    /// Tombstones face `f`, recording whether an external face went away.
    pub(crate) fn remove_face(&mut self, f: usize, external_delta: &mut bool) {
        if self.faces[f].removed {
            return;
        }
        if self.faces[f].is_external() {
            *external_delta = true;
        }
        self.faces[f].dispose();
    }

    pub(crate) fn find_or_create_vertex(&mut self, x: T, y: T) -> (usize, bool) {
        if let Some(v) = self.find_vertex(x, y) {
            return (v, false);
        }
        let v = self.vertices.len();
        self.vertices.push(Vertex::new(Point2::new(x, y)));
        (v, true)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Releases everything in one explicit pass. The linkage graph is
    /// cyclic, so teardown never relies on entity-to-entity ownership.
    pub fn dispose(&mut self) {
        for v in &mut self.vertices {
            v.dispose();
        }
        for f in &mut self.faces {
            f.dispose();
        }
        for h in &mut self.hedges {
            h.removed = true;
        }
        self.vertices.clear();
        self.hedges.clear();
        self.faces.clear();
        self.edge_map.clear();
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Asserts the full connectivity contract. Intended for tests and for
    /// embedders debugging their own edit sequences.
    pub fn validate_connectivity(&self) {
        // For every half-edge, check twin/next/prev consistency:
        for (i, he) in self.hedges.iter().enumerate() {
            if he.removed {
                continue;
            }
            assert!(he.twin != i, "he {} is its own twin", i);
            assert_eq!(
                self.hedges[he.twin].twin, i,
                "he {} twin -> twin mismatch",
                i
            );
            assert_eq!(
                self.hedges[he.next].prev, i,
                "he {} next -> prev mismatch",
                i
            );
            assert_eq!(
                self.hedges[he.prev].next, i,
                "he {} prev -> next mismatch",
                i
            );
            assert_eq!(
                self.hedges[he.next].origin,
                self.target(i),
                "he {} next does not start at its head",
                i
            );
            assert!(
                he.origin != self.target(i),
                "he {} is a loop at vertex {}",
                i,
                he.origin
            );

            // face must match the one it's stored on:
            let f = he.face.unwrap_or_else(|| panic!("he {} has no face", i));
            assert!(!self.faces[f].removed, "he {} points at removed face {}", i, f);
            assert!(
                self.cycle_contains(self.faces[f].wedge, i),
                "he {} not on the boundary cycle of face {}",
                i,
                f
            );
        }

        // No duplicate directed edges, and the edge map mirrors the arena:
        let mut edge_set = AHashSet::new();
        let mut live = 0usize;
        for (i, he) in self.hedges.iter().enumerate() {
            if he.removed {
                continue;
            }
            live += 1;
            let key = (he.origin, self.target(i));
            assert!(edge_set.insert(key), "duplicate half-edge {:?}", key);
            assert_eq!(
                self.edge_map.get(&key).copied(),
                Some(i),
                "edge map entry for {:?} is stale",
                key
            );
        }
        assert_eq!(self.edge_map.len(), live, "edge map carries dead entries");

        // Every face boundary is a single cycle stamped with that face:
        for (fi, face) in self.faces.iter().enumerate() {
            if face.removed {
                continue;
            }
            for h in self.cycle_hedges(face.wedge) {
                assert_eq!(
                    self.hedges[h].face,
                    Some(fi),
                    "face {} half-edge {} points at wrong face",
                    fi,
                    h
                );
            }
        }

        // Rotational order and threading at every vertex. Together with
        // the per-spoke origin check, spoke uniqueness plus the total count
        // pins every live half-edge to exactly one ring slot.
        let mut spokes_seen = AHashSet::new();
        for (vi, v) in self.vertices.iter().enumerate() {
            if v.removed {
                continue;
            }
            for &h in &v.incident {
                assert!(spokes_seen.insert(h), "spoke {} listed twice", h);
            }
            let k = v.incident.len();
            for j in 0..k {
                let h = v.incident[j];
                assert!(!self.hedges[h].removed, "vertex {} lists dead spoke {}", vi, h);
                assert_eq!(
                    self.hedges[h].origin, vi,
                    "vertex {} lists spoke {} that starts elsewhere",
                    vi, h
                );

                let next = v.incident[(j + 1) % k];
                assert_eq!(
                    self.hedges[self.hedges[next].twin].next,
                    h,
                    "vertex {} ring broken between spokes {} and {}",
                    vi,
                    h,
                    next
                );

                if j + 1 < k {
                    let pa = self.vertices[self.target(h)].position;
                    let pb = self.vertices[self.target(next)].position;
                    let (a, b) = (
                        polar_angle(&v.position, &pa),
                        polar_angle(&v.position, &pb),
                    );
                    assert!(
                        T::cmp_ref(&a, &b) != std::cmp::Ordering::Greater,
                        "vertex {} spokes {} and {} out of rotational order",
                        vi,
                        h,
                        next
                    );
                }
            }
        }
        assert_eq!(
            spokes_seen.len(),
            live,
            "some live half-edge is missing from its origin's ring"
        );
    }
}

impl<T: Scalar> Default for Dcel<T> {
    fn default() -> Self {
        Self::new()
    }
}
