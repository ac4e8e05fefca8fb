use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use legacy_md5::{digest_batch, hmac, md5_digest, Md5};
use rand::Rng;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5");
    for size in [16usize, 64, 1024, 16 * 1024] {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("one_shot", size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streaming", size), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Md5::new();
                for chunk in data.chunks(100) {
                    hasher.update(black_box(chunk));
                }
                hasher.finalize()
            })
        });
    }
    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let key = random_bytes(32);
    let data = random_bytes(1024);
    c.bench_function("hmac_md5_1k", |b| {
        b.iter(|| hmac(black_box(&key), black_box(&data)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<Vec<u8>> = (0..256).map(|_| random_bytes(512)).collect();
    c.bench_function("md5_batch_256x512", |b| {
        b.iter(|| digest_batch(black_box(&inputs)))
    });
}

criterion_group!(benches, bench_md5, bench_hmac, bench_batch);
criterion_main!(benches);
