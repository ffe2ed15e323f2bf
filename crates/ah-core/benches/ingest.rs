use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ah_core::{rebuild, SourceLines};

fn blocklist(count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count + 2);
    lines.push("# generated blocklist".to_string());
    lines.push("127.0.0.1 localhost".to_string());
    for i in 0..count {
        lines.push(format!("0.0.0.0 ads{}.tracker{}.example # entry", i, i % 97));
    }
    lines
}

fn bench_rebuild(c: &mut Criterion) {
    let existing = b"127.0.0.1 localhost\n10.0.0.1 nas.local\n";
    let first = blocklist(50_000);
    let second = blocklist(25_000);

    c.bench_function("rebuild_75k_lines", |b| {
        b.iter(|| {
            let result = rebuild(
                black_box(&existing[..]),
                [
                    SourceLines::fetched("first", first.clone()),
                    SourceLines::fetched("second", second.clone()),
                ],
            );
            black_box(result.content.len())
        })
    });
}

criterion_group!(benches, bench_rebuild);
criterion_main!(benches);
