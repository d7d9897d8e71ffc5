use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digipal::engine::{find_longest_palindrome, is_palindrome};
use digipal::types::DigitSequence;

fn sequence(len: usize) -> DigitSequence {
    // Two-symbol alphabet keeps expansions long, close to the quadratic worst case.
    DigitSequence::from_digits((0..len).map(|i| (i % 2) as u8).collect()).unwrap()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_palindrome");
    for len in [64usize, 256, 1024] {
        let seq = sequence(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| find_longest_palindrome(black_box(seq)))
        });
    }
    group.finish();

    let seq = sequence(4096);
    c.bench_function("is_palindrome/4096", |b| b.iter(|| is_palindrome(black_box(&seq))));
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
