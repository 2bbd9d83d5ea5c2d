mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;

fn operation_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_parse");

    group.throughput(Throughput::Bytes(fixtures::KITCHEN_SINK_QUERY.len() as u64));
    group.bench_function("kitchen sink", |b| {
        b.iter(|| black_box(graphql_syntax::parse(fixtures::KITCHEN_SINK_QUERY)))
    });

    let nested = fixtures::nested_query(64);
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("nested (depth 64)", |b| {
        b.iter(|| black_box(graphql_syntax::parse(nested.as_str())))
    });

    group.finish();
}

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.throughput(Throughput::Bytes(fixtures::KITCHEN_SINK_SCHEMA.len() as u64));
    group.bench_function("kitchen sink", |b| {
        b.iter(|| black_box(graphql_syntax::parse(fixtures::KITCHEN_SINK_SCHEMA)))
    });

    let synthetic = fixtures::synthetic_schema(200);
    group.throughput(Throughput::Bytes(synthetic.len() as u64));
    group.bench_function("synthetic (200 types)", |b| {
        b.iter(|| black_box(graphql_syntax::parse(synthetic.as_str())))
    });

    group.finish();
}

fn error_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_path");

    group.bench_function("early syntax error", |b| {
        b.iter(|| black_box(graphql_syntax::parse("{ ...on }").unwrap_err()))
    });

    group.finish();
}

criterion_group!(benches, operation_parse, schema_parse, error_path);
criterion_main!(benches);
