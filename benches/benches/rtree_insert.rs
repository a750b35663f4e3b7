// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rtree::{Fanout, MinFill, RTree, Rect};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect<f64, 2>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new_2d(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

fn gen_grid_rects_i64(n: usize, cell: i64) -> Vec<Rect<i64, 2>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as i64 * cell;
            let y0 = y as i64 * cell;
            out.push(Rect::new_2d(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects_3d(count: usize, extent: f64, size: f64) -> Vec<Rect<f64, 3>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let min = [
            rng.next_f64() * extent,
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ];
        out.push(Rect::new(min, [min[0] + size, min[1] + size, min[2] + size]));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rect<f64, 2>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let x = cx + (rng.next_f64() - 0.5) * spread;
            let y = cy + (rng.next_f64() - 0.5) * spread;
            out.push(Rect::new_2d(x, y, x + 12.0, y + 12.0));
        }
    }
    out
}

fn bench_insert_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_f64_insert");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                RTree::<f64, u32, 2>::new,
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_insert_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_i64_insert");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects_i64(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                RTree::<i64, u32, 2>::new,
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_f64_fanout");
    let rects = gen_clustered_rects(16, 256, 128.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    for &(max, min) in &[(4usize, 2usize), (8, 4), (16, 8), (32, 16)] {
        for fill in [MinFill::Unenforced, MinFill::Guttman] {
            let fanout = Fanout::new(max, min).unwrap().with_min_fill(fill).unwrap();
            group.bench_function(format!("clustered_max{}_{:?}", max, fill), |b| {
                b.iter_batched(
                    || RTree::<f64, u32, 2>::with_fanout(fanout),
                    |mut tree| {
                        for (i, r) in rects.iter().copied().enumerate() {
                            tree.insert(r, i as u32);
                        }
                        black_box(tree.height());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_insert_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_f64_3d_insert");
    let rects = gen_random_rects_3d(4096, 1000.0, 5.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("random", |b| {
        b.iter_batched(
            RTree::<f64, u32, 3>::new,
            |mut tree| {
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                black_box(tree.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_f64,
    bench_insert_i64,
    bench_fanout,
    bench_insert_3d,
);
criterion_main!(benches);
