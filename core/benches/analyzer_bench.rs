use criterion::{criterion_group, criterion_main, Criterion};
use watson_core::Analyzer;

const PAGE: &str = "The Washington Post is an American daily newspaper published \
in Washington, D.C. It is the most widely circulated newspaper in the Washington \
metropolitan area and has a large national audience. Daily broadsheet editions are \
printed for D.C., Maryland, and Virginia. The newspaper has won 76 Pulitzer Prizes, \
including separate Pulitzers for its investigation of the Watergate scandal. \
== History == The newspaper was founded in 1877 and struggled financially for \
decades before the Meyer family purchased it at a bankruptcy auction in 1933.";

fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::new();
    c.bench_function("analyze_wiki_page", |b| b.iter(|| analyzer.analyze(PAGE)));
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
