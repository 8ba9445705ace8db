use completion_trie::Trie;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

const NUM_OF_WORDS: usize = 1000;

fn random_words() -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_WORDS)
        .map(|_| {
            let len = rng.gen_range(1, 12);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0, 26)) as char)
                .collect::<String>()
        })
        .collect()
}

fn bench_trie_build(c: &mut Criterion) {
    let words = random_words();
    c.bench_function("bench trie build", move |b| {
        b.iter(|| Trie::new(black_box(&words)).len())
    });
}

fn bench_trie_complete(c: &mut Criterion) {
    let words = random_words();
    c.bench_function("bench trie complete", move |b| {
        let trie = Trie::new(&words);
        b.iter(|| {
            for word in &words {
                black_box(trie.complete(&word[..1]));
            }
        })
    });
}

criterion_group!(benches, bench_trie_build, bench_trie_complete);
criterion_main!(benches);
