use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paramdoc::{
    to_fragment, to_string, to_string_with_options, to_value, Format, Options, Value,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Target {
    expr: String,
    datasource: String,
    legend: String,
}

#[derive(Serialize, Clone)]
struct Panel {
    id: u32,
    title: String,
    span: u32,
    datasource: String,
    targets: Vec<Target>,
    tags: Vec<String>,
}

fn panels(count: u32) -> Value {
    let panels: Vec<Panel> = (0..count)
        .map(|i| Panel {
            id: i,
            title: format!("Panel {}", i),
            span: 4 + i % 8,
            datasource: "prometheus".to_string(),
            targets: vec![Target {
                expr: format!("rate(requests_total{{panel=\"{}\"}}[5m])", i),
                datasource: "prometheus".to_string(),
                legend: "{{instance}}".to_string(),
            }],
            tags: vec!["ops".to_string(), "eu-west-1".to_string()],
        })
        .collect();
    let mut root = paramdoc::Map::new();
    root.insert("panels".to_string(), to_value(&panels).unwrap());
    Value::Object(root)
}

fn benchmark_plain(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain");

    for size in [10, 50, 100, 500].iter() {
        let doc = panels(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution");
    let doc = panels(100);

    for format in [Format::ExtVar, Format::LetBinding, Format::Module] {
        let options = Options::new()
            .with_format(format)
            .with_param("datasource", "prometheus")
            .with_param("region", "eu-west-1");
        group.bench_function(format!("{:?}", format), |b| {
            b.iter(|| to_string_with_options(black_box(&doc), &options))
        });
    }
    group.finish();
}

fn benchmark_raw_fragments(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_fragments");
    let fragment = to_fragment(&panels(20)).unwrap();

    for compact in [true, false] {
        let mut root = paramdoc::Map::new();
        root.insert("embedded".to_string(), Value::raw(fragment.clone(), compact));
        let doc = Value::Object(root);
        let name = if compact { "compact" } else { "reindent" };
        group.bench_function(name, |b| b.iter(|| to_string(black_box(&doc))));
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let doc = panels(100);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("paramdoc_plain", |b| {
        b.iter(|| paramdoc::to_string(black_box(&doc)))
    });

    group.bench_function("json_pretty", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&doc)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_plain,
    benchmark_substitution,
    benchmark_raw_fragments,
    benchmark_comparison_with_json
);
criterion_main!(benches);
