use criterion::{black_box, criterion_group, criterion_main, Criterion};

use analyze_redirects::redirect_analyzer::{normalize_url, RedirectAnalyzer, RedirectRecord};

fn normalize_benchmark(c: &mut Criterion) {
    c.bench_function("normalize_url", |b| {
        b.iter(|| normalize_url(black_box("/category/sub-category//page?utm_source=x#top")))
    });
}

fn analyze_benchmark(c: &mut Criterion) {
    // Synthetic workload with plenty of duplicate and conflicting keys
    let records: Vec<RedirectRecord> = (0..1000)
        .map(|i| RedirectRecord {
            old_url: format!("/category/page-{}", i % 250),
            new_url: format!("https://example.com/pages/{}/", i % 400),
        })
        .collect();
    let analyzer = RedirectAnalyzer::new();

    c.bench_function("analyze_1000_mappings", |b| {
        b.iter(|| analyzer.analyze(black_box(&records)))
    });
}

criterion_group!(benches, normalize_benchmark, analyze_benchmark);
criterion_main!(benches);
