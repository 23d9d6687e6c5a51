use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use palimpsest::alignment::{EditCosts, align, distance, semi_global_align};
use palimpsest::spelling::deletion::DeletionIndex;
use palimpsest::spelling::dictionary::WordDictionary;
use palimpsest::spelling::symspell::sym_suggest;

fn generate_line(length: usize, seed: usize) -> Vec<char> {
    let alphabet: Vec<char> = "αβγδεζηθικλμνξοπρστυφχψω ".chars().collect();
    (0..length)
        .map(|i| alphabet[(i * 7 + seed * 13 + i / 3) % alphabet.len()])
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let costs = EditCosts::default();
    let mut group = c.benchmark_group("distance");

    for length in [16, 64, 256] {
        let truth = generate_line(length, 1);
        let ocr = generate_line(length, 2);
        group.bench_with_input(BenchmarkId::new("rolling", length), &length, |b, _| {
            b.iter(|| distance(black_box(&truth), black_box(&ocr), &costs))
        });
        group.bench_with_input(BenchmarkId::new("align", length), &length, |b, _| {
            b.iter(|| align(black_box(&truth), black_box(&ocr), &costs))
        });
    }

    group.finish();
}

fn bench_semi_global(c: &mut Criterion) {
    let costs = EditCosts::default();
    let fragment = generate_line(12, 3);
    let context = generate_line(400, 4);

    c.bench_function("semi_global_12_in_400", |b| {
        b.iter(|| semi_global_align(black_box(&fragment), black_box(&context), &costs))
    });
}

fn bench_sym_suggest(c: &mut Criterion) {
    let words: Vec<String> = (0..2000)
        .map(|i| generate_line(5 + i % 6, i).into_iter().collect())
        .collect();
    let dictionary = WordDictionary::from_words(words.iter().cloned());
    let index = DeletionIndex::build(dictionary.words(), 2);

    c.bench_function("sym_suggest_depth_2", |b| {
        b.iter(|| sym_suggest(black_box("αβγδεζ"), &dictionary, &index, 2))
    });
}

criterion_group!(benches, bench_distance, bench_semi_global, bench_sym_suggest);
criterion_main!(benches);
