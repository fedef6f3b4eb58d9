use criterion::{criterion_group, criterion_main, Criterion};
use simplejson_core::{parse, JsonArray, JsonObject};
use std::hint::black_box;

/// A document of `rows` records, each with a few primitives and a small array.
fn sample_document(rows: usize) -> String {
    let mut records = JsonArray::new();
    for i in 0..rows {
        let mut record = JsonObject::new();
        record.put("id", i as i64);
        record.put("name", format!("user-{i}"));
        record.put("score", i as f64 / 4.0);
        record.put("active", i % 2 == 0);
        record.put("tags", ["a,b", "{c}", "d"].into_iter().collect::<JsonArray>());
        records.add(record);
    }
    let mut doc = JsonObject::new();
    doc.put("records", records);
    doc.render()
}

fn bench_parse(c: &mut Criterion) {
    let small = sample_document(10);
    let medium = sample_document(200);

    c.bench_function("parse_10_records", |b| {
        b.iter(|| parse(black_box(&small)).unwrap())
    });
    c.bench_function("parse_200_records", |b| {
        b.iter(|| parse(black_box(&medium)).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = parse(&sample_document(200)).unwrap();
    c.bench_function("render_200_records", |b| b.iter(|| black_box(&doc).render()));
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
