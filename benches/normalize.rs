//! Benchmarks for normalization
//!
//! This benchmark measures:
//! - Classification of dynamic values into response/rejection shapes
//! - Response and error normalization
//! - The full wrapper on an already-resolved future

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use safe_await::{
    normalize_error, normalize_response, safe_await, Config, RawResponse, Rejection,
};

fn bench_classify(c: &mut Criterion) {
    let envelope = json!({"data": {"id": 5, "tags": ["a", "b"]}, "status": 200, "headers": {"x-id": "5"}});
    let lean = json!({"statusCode": 404, "body": {"msg": "not found"}, "headers": {"content-type": "application/json"}});

    c.bench_function("classify_envelope", |b| {
        b.iter(|| RawResponse::classify(black_box(envelope.clone())))
    });
    c.bench_function("classify_lean_rejection", |b| {
        b.iter(|| Rejection::classify(black_box(lean.clone())))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let config = Config::default();
    let raw = RawResponse::classify(json!({"statusCode": 200, "body": {"rows": [1, 2, 3]}}));
    let rejection = Rejection::classify(json!({
        "isAxiosError": true,
        "message": "Request failed",
        "response": {"data": {"e": 1}, "status": 502},
        "config": {"url": "/x"}
    }));

    c.bench_function("normalize_response_lean", |b| {
        b.iter(|| normalize_response(black_box(raw.clone()), &config))
    });
    c.bench_function("normalize_error_client", |b| {
        b.iter(|| normalize_error(black_box(rejection.clone())))
    });
}

fn bench_wrapper(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    c.bench_function("safe_await_resolved", |b| {
        b.to_async(&rt).iter(|| async {
            let call = async { Ok::<_, Rejection>(json!({"data": [1, 2, 3], "status": 200})) };
            black_box(safe_await(call, None).await)
        })
    });
}

criterion_group!(benches, bench_classify, bench_normalize, bench_wrapper);
criterion_main!(benches);
