use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordle_rescue::core::{Pattern, Word, bucket_sizes};
use wordle_rescue::solver::Solver;
use wordle_rescue::wordlists::loader::parse_words;

fn fixture() -> Vec<Word> {
    parse_words(include_str!("../tests/fixtures/words.txt"))
}

fn bench_pattern(c: &mut Criterion) {
    let guess = Word::new("speed").unwrap();
    let secret = Word::new("abide").unwrap();

    c.bench_function("pattern_calculate", |b| {
        b.iter(|| Pattern::calculate(black_box(&guess), black_box(&secret)));
    });
}

fn bench_buckets(c: &mut Criterion) {
    let words = fixture();
    let guess = Word::new("irate").unwrap();

    c.bench_function("bucket_sizes", |b| {
        b.iter(|| bucket_sizes(black_box(&guess), black_box(&words)));
    });
}

fn bench_best_guess(c: &mut Criterion) {
    let words = fixture();
    let solver = Solver::new(&words, None).unwrap();

    c.bench_function("best_guess_opening", |b| {
        b.iter(|| solver.best_guess(black_box(1)).unwrap());
    });

    let mut narrowed = Solver::new(&words, None).unwrap();
    let opening = narrowed.best_guess(1).unwrap();
    narrowed.update(opening, Pattern::new(0));

    c.bench_function("best_guess_after_miss", |b| {
        b.iter(|| narrowed.best_guess(black_box(2)).unwrap());
    });
}

criterion_group!(benches, bench_pattern, bench_buckets, bench_best_guess);
criterion_main!(benches);
