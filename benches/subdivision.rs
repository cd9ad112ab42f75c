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

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use dcel2d::dcel::Dcel;

fn lattice(n: usize) -> (Vec<[f64; 2]>, Vec<[usize; 2]>) {
    let mut points = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            points.push([c as f64, r as f64]);
        }
    }
    let at = |r: usize, c: usize| r * n + c;
    let mut edges = Vec::new();
    for r in 0..n {
        for c in 0..n {
            if c + 1 < n {
                edges.push([at(r, c), at(r, c + 1)]);
            }
            if r + 1 < n {
                edges.push([at(r, c), at(r + 1, c)]);
            }
        }
    }
    (points, edges)
}

fn construct_lattice(c: &mut Criterion) {
    let (points, edges) = lattice(16);
    c.bench_function("construct_lattice_16", |b| {
        b.iter(|| Dcel::from_points_edges(black_box(&points), black_box(&edges)).unwrap())
    });
}

fn diagonal_churn(c: &mut Criterion) {
    let (points, edges) = lattice(8);
    c.bench_function("diagonal_churn_8", |b| {
        b.iter_batched(
            || Dcel::from_points_edges(&points, &edges).unwrap(),
            |mut dcel| {
                for r in 0..7 {
                    for col in 0..7 {
                        let (x, y) = (col as f64, r as f64);
                        dcel.add_edge(x, y, x + 1.0, y + 1.0).unwrap();
                    }
                }
                for r in 0..7 {
                    for col in 0..7 {
                        let (x, y) = (col as f64, r as f64);
                        dcel.remove_edge(x, y, x + 1.0, y + 1.0);
                    }
                }
                dcel
            },
            BatchSize::SmallInput,
        )
    });
}

fn split_churn(c: &mut Criterion) {
    let (points, edges) = lattice(8);
    c.bench_function("split_churn_8", |b| {
        b.iter_batched(
            || Dcel::from_points_edges(&points, &edges).unwrap(),
            |mut dcel| {
                for r in 0..8 {
                    for col in 0..7 {
                        let (x, y) = (col as f64, r as f64);
                        dcel.split_edge(x, y, x + 1.0, y, x + 0.5, y).unwrap();
                    }
                }
                dcel
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, construct_lattice, diagonal_churn, split_churn);
criterion_main!(benches);
