use criterion::{black_box, criterion_group, criterion_main, Criterion};
use legacy_md5::encoding::{to_base64, to_hex, to_radix, Alphabet, HexCase, BASE36, BASE58};
use legacy_md5::md5_digest;

fn bench_encoders(c: &mut Criterion) {
    let digest = md5_digest(b"The quick brown fox jumps over the lazy dog");
    let base36 = Alphabet::new(BASE36).unwrap();
    let base58 = Alphabet::new(BASE58).unwrap();

    c.bench_function("hex", |b| b.iter(|| to_hex(black_box(&digest), HexCase::Lower)));
    c.bench_function("base64", |b| {
        b.iter(|| to_base64(black_box(&digest), Some("=")))
    });
    c.bench_function("base36", |b| b.iter(|| to_radix(black_box(&digest), &base36)));
    c.bench_function("base58", |b| b.iter(|| to_radix(black_box(&digest), &base58)));
}

criterion_group!(benches, bench_encoders);
criterion_main!(benches);
