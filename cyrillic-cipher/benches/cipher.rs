//! Benchmarks for cipher and analysis throughput.
//!
//! Measures encrypt/decrypt over a fixed Russian text and the frequency
//! analyzer's counting pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cyrillic_cipher::{char_frequencies, UpgradeCaesar};

/// Key used consistently across all benchmarks.
const BENCH_KEY: &str = "КЛЮЧ";

/// One sentence repeated to a few kilobytes of text.
fn bench_text() -> String {
    "СЪЕШЬ ЖЕ ЕЩЕ ЭТИХ МЯГКИХ БУЛОК, ДА ВЫПЕЙ ЧАЮ!\n".repeat(64)
}

/// Benchmarks `encrypt()` over the fixed text.
fn bench_encrypt(c: &mut Criterion) {
    let cipher = UpgradeCaesar::with_key(BENCH_KEY).unwrap();
    let text = bench_text();

    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("repeated_sentence", |b| {
        b.iter(|| cipher.encrypt(black_box(&text)).unwrap());
    });
    group.finish();
}

/// Benchmarks `decrypt()` over the matching ciphertext.
fn bench_decrypt(c: &mut Criterion) {
    let cipher = UpgradeCaesar::with_key(BENCH_KEY).unwrap();
    let ciphertext = cipher.encrypt(&bench_text()).unwrap();

    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Bytes(ciphertext.len() as u64));
    group.bench_function("repeated_sentence", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext)).unwrap());
    });
    group.finish();
}

/// Benchmarks the frequency analyzer's full counting pass.
fn bench_frequencies(c: &mut Criterion) {
    let text = bench_text();

    let mut group = c.benchmark_group("char_frequencies");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("repeated_sentence", |b| {
        b.iter(|| char_frequencies(black_box(&text)));
    });
    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_frequencies);
criterion_main!(benches);
