use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vela_panchang::{PanchangRequest, compute_panchang, resolve, tithi_at};

fn reference_request() -> PanchangRequest {
    PanchangRequest::new(2024, 4, 14, 6, 0, 0.0, 17.385, 78.4867, 5.5)
        .expect("valid reference request")
}

fn resolve_bench(c: &mut Criterion) {
    let request = reference_request();
    let mut group = c.benchmark_group("panchang_resolve");
    group.bench_function("resolve", |b| b.iter(|| resolve(black_box(&request))));
    group.finish();
}

fn boundary_bench(c: &mut Criterion) {
    let request = reference_request();
    let pos = resolve(&request);
    let mut group = c.benchmark_group("panchang_boundary");
    group.bench_function("tithi_at", |b| {
        b.iter(|| tithi_at(black_box(&pos)).expect("tithi search should succeed"))
    });
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let request = reference_request();
    let mut group = c.benchmark_group("panchang_pipeline");
    group.sample_size(20);
    group.bench_function("compute_panchang", |b| {
        b.iter(|| compute_panchang(black_box(&request)).expect("pipeline should succeed"))
    });
    group.finish();
}

criterion_group!(benches, resolve_bench, boundary_bench, pipeline_bench);
criterion_main!(benches);
