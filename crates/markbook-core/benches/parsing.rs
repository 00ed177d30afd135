use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markbook_core::format::{parse_marks, render_marks};

fn marks_text(records: usize) -> String {
    let mut text = format!("{records}\n");
    for i in 0..records {
        text.push_str(&format!("{:04},Student Number{i},18,19,20,35\n", 1000 + i));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_marks");

    for size in [10, 100, 1000] {
        let text = marks_text(size);
        group.bench_function(format!("records={size}"), |b| {
            b.iter(|| parse_marks(black_box(&text)).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let records = parse_marks(&marks_text(1000)).unwrap();

    c.bench_function("render_marks/records=1000", |b| {
        b.iter(|| render_marks(black_box(&records)))
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
