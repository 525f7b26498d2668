use a5hash::{a5hash, a5hash128, a5hash32, hash_many, A5Rand, A5HashMap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Short keys, where per-call latency matters most
fn bench_short_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_keys");
    let data: Vec<u8> = (0..64u8).collect();

    for len in [0usize, 3, 4, 8, 16, 17, 32, 64] {
        let msg = &data[..len];
        group.bench_with_input(BenchmarkId::new("a5hash", len), msg, |b, msg| {
            b.iter(|| a5hash(black_box(msg), black_box(0)))
        });
        group.bench_with_input(BenchmarkId::new("a5hash32", len), msg, |b, msg| {
            b.iter(|| a5hash32(black_box(msg), black_box(0)))
        });
        group.bench_with_input(BenchmarkId::new("a5hash128", len), msg, |b, msg| {
            b.iter(|| a5hash128(black_box(msg), black_box(0)))
        });
    }

    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    let mut rng = A5Rand::with_warmup(1, 2);
    let data: Vec<u8> = (0..1 << 20).map(|_| rng.next_u64() as u8).collect();

    for len in [1024usize, 65536, 1 << 20] {
        let msg = &data[..len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("a5hash", len), msg, |b, msg| {
            b.iter(|| a5hash(black_box(msg), 0))
        });
        group.bench_with_input(BenchmarkId::new("a5hash128", len), msg, |b, msg| {
            b.iter(|| a5hash128(black_box(msg), 0))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let keys: Vec<String> = (0..100_000).map(|i| format!("key:{i}")).collect();

    c.bench_function("hash_many_100k", |b| b.iter(|| hash_many(black_box(&keys), 0)));

    c.bench_function("hashmap_insert_10k", |b| {
        b.iter(|| {
            let mut map: A5HashMap<&str, usize> = A5HashMap::default();
            for (i, k) in keys.iter().take(10_000).enumerate() {
                map.insert(k.as_str(), i);
            }
            map
        })
    });
}

fn bench_rand(c: &mut Criterion) {
    let mut rng = A5Rand::new(0, 0);
    c.bench_function("a5rand_next_u64", |b| b.iter(|| black_box(rng.next_u64())));
}

criterion_group!(benches, bench_short_keys, bench_bulk, bench_batch, bench_rand);
criterion_main!(benches);
