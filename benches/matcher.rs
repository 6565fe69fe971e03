use criterion::{criterion_group, criterion_main, Criterion};
use regex_nfa::Nfa;

fn bench_matcher(c: &mut Criterion) {
    let nfa = Nfa::new("(a|b)*abb").unwrap();
    let input = "ab".repeat(64) + "abb";

    c.bench_function("closure over alternation", |b| {
        b.iter(|| nfa.is_match(&input))
    });

    let nested = Nfa::new("(a*b*)*c").unwrap();
    let miss = "ab".repeat(64);

    c.bench_function("nested closures without a match", |b| {
        b.iter(|| nested.is_match(&miss))
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
