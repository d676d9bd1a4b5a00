use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wikistat_core::{CutoffPolicy, FrequencyDigester, SectionParser, SectionIndex, decode_section_html};

fn corpus(words: usize) -> String {
    let vocabulary = ["cat", "The", "domestic", "species,", "\"felis\"", "is", "small", "mammal.", "of", "carnivorous"];
    (0..words).map(|i| vocabulary[(i * 7 + i / 3) % vocabulary.len()]).collect::<Vec<_>>().join(" ")
}

fn bench_digest(c: &mut Criterion) {
    let digester = FrequencyDigester::default();
    let mut group = c.benchmark_group("digest");

    for words in [1_000, 10_000, 100_000] {
        let text = corpus(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| digester.digest(black_box(text)))
        });
    }

    group.finish();
}

fn bench_parse_section(c: &mut Criterion) {
    let body = std::fs::read_to_string("../../tests/fixtures/section_etymology.json").unwrap();
    let html = decode_section_html(&body).unwrap();
    let parser = SectionParser::default();
    let index = SectionIndex::new("1");

    c.bench_function("parse_section", |b| b.iter(|| parser.parse(black_box(&index), black_box(&html))));
}

fn bench_cutoff(c: &mut Criterion) {
    let table = FrequencyDigester::default().digest(&corpus(10_000));
    let policy = CutoffPolicy::new(500).group_below_cutoff(true);

    c.bench_function("cutoff_grouping", |b| b.iter(|| policy.apply(black_box(&table))));
}

criterion_group!(benches, bench_digest, bench_parse_section, bench_cutoff);
criterion_main!(benches);
