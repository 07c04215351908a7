// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pyrange::enumerate::enumerate;
use pyrange::range::range;
use pyrange::robin::Robin;
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_benchmark");

    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sum", n), &n, |b, &n| {
            let r = range(n as u64);
            b.iter(|| black_box(&r).iter().sum::<u64>())
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_benchmark");

    for n in SIZES {
        let data: Vec<u64> = (0..n as u64).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("weighted_sum", n), &data, |b, data| {
            b.iter(|| {
                enumerate(black_box(data))
                    .iter()
                    .map(|(i, x)| i as u64 * x)
                    .sum::<u64>()
            })
        });
    }
    group.finish();
}

fn bench_robin(c: &mut Criterion) {
    let mut group = c.benchmark_group("robin_benchmark");

    for n in SIZES {
        let rr = Robin::new(n);
        // Skip the middle part so the traversal wraps around.
        let excluded = n / 2;
        group.throughput(Throughput::Elements((n - 1) as u64));
        group.bench_with_input(BenchmarkId::new("exclude", n), &excluded, |b, &k| {
            b.iter(|| black_box(&rr).exclude(black_box(k)).iter().sum::<usize>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_range, bench_enumerate, bench_robin);
criterion_main!(benches);
