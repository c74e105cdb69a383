use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strview::{search, StrView};

fn random_haystack(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

fn naive_find(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
        .unwrap_or(haystack.len())
}

fn benchmark_short_needle_tiers(c: &mut Criterion) {
    let haystack = random_haystack(64 * 1024, b"abcdefgh", 7);
    let mut group = c.benchmark_group("short needle tiers");
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    for needle in [&b"z"[..], b"zy", b"zyx", b"zyxw"] {
        group.bench_with_input(
            BenchmarkId::from_parameter(needle.len()),
            needle,
            |b, needle| {
                b.iter(|| search::find(black_box(&haystack), black_box(needle)));
            },
        );
    }
    group.finish();
}

fn benchmark_two_way_vs_naive(c: &mut Criterion) {
    let haystack = random_haystack(64 * 1024, b"ab", 11);
    let needle = b"abbabaabba";
    let mut group = c.benchmark_group("long needle search");
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    group.bench_function("two-way", |b| {
        b.iter(|| search::find(black_box(&haystack), black_box(needle)));
    });
    group.bench_function("naive windows", |b| {
        b.iter(|| naive_find(black_box(&haystack), black_box(needle)));
    });
    group.finish();
}

fn benchmark_pathological_periodic(c: &mut Criterion) {
    // a^n with an a^k b needle: the memoized path's worst case.
    let haystack = vec![b'a'; 64 * 1024];
    let mut needle = vec![b'a'; 255];
    needle.push(b'b');
    let mut group = c.benchmark_group("pathological periodic");
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    group.bench_function("two-way memoized", |b| {
        b.iter(|| search::find(black_box(&haystack), black_box(&needle)));
    });
    group.finish();
}

fn benchmark_reverse_search(c: &mut Criterion) {
    let haystack = random_haystack(64 * 1024, b"abcdefgh", 13);
    let mut group = c.benchmark_group("reverse search");
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    group.bench_function("rfind 2-byte", |b| {
        b.iter(|| search::rfind(black_box(&haystack), black_box(b"zy")));
    });
    group.bench_function("rfind 8-byte", |b| {
        b.iter(|| search::rfind(black_box(&haystack), black_box(b"zyxwvuts")));
    });
    group.finish();
}

fn benchmark_class_scans(c: &mut Criterion) {
    let haystack = random_haystack(64 * 1024, b"abcdefgh", 17);
    let view = StrView::new(&haystack);
    let set = StrView::new(b"xyz0123");
    let mut group = c.benchmark_group("class scans");
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    group.bench_function("find_first_of", |b| {
        b.iter(|| black_box(view).find_first_of(black_box(set)));
    });
    group.bench_function("find_last_of", |b| {
        b.iter(|| black_box(view).find_last_of(black_box(set)));
    });
    group.finish();
}

fn benchmark_tokenizer(c: &mut Criterion) {
    let mut source = Vec::new();
    for i in 0..4096 {
        source.extend_from_slice(if i % 7 == 0 { b"::::" } else { b"::" });
        source.extend_from_slice(b"field");
    }
    let view = StrView::new(&source);
    let delim = StrView::new(b"::");
    let mut group = c.benchmark_group("tokenizer");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("forward walk", |b| {
        b.iter(|| black_box(view).tokens(black_box(delim)).count());
    });
    group.bench_function("reverse walk", |b| {
        b.iter(|| black_box(view).rtokens(black_box(delim)).count());
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_short_needle_tiers,
    benchmark_two_way_vs_naive,
    benchmark_pathological_periodic,
    benchmark_reverse_search,
    benchmark_class_scans,
    benchmark_tokenizer
);
criterion_main!(benches);
