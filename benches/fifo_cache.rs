use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{FifoPageCache, PageId};

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo_access");
    for capacity in [8usize, 64, 1024] {
        let requests: Vec<PageId> = (0..10_000u32)
            .map(|i| PageId::new(i.wrapping_mul(2_654_435_761) % (capacity as u32 * 2)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(capacity), &requests, |b, reqs| {
            let mut cache = FifoPageCache::new(capacity).unwrap();
            b.iter(|| {
                for &page in reqs {
                    black_box(cache.access(page));
                }
                cache.reset();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_access);
criterion_main!(benches);
