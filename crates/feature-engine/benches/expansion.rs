use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::{FeatureExpander, Preprocessor, StandardScaler, INPUT_WIDTH};
use ndarray::Array2;

fn bench_expand(c: &mut Criterion) {
    let expander = FeatureExpander::new();
    let answers: Vec<f64> = (0..INPUT_WIDTH).map(|i| (i % 5 + 1) as f64).collect();

    c.bench_function("expand_single", |b| {
        b.iter(|| expander.expand(black_box(&answers)))
    });

    let batch = Array2::from_shape_fn((256, INPUT_WIDTH), |(r, c)| ((r + c) % 5 + 1) as f64);
    c.bench_function("expand_batch_256", |b| {
        b.iter(|| expander.transform(black_box(batch.view())))
    });

    let scaler = StandardScaler::new(vec![3.0; INPUT_WIDTH], vec![1.2; INPUT_WIDTH]).unwrap();
    let pipeline = Preprocessor::new(Some(scaler)).unwrap();
    c.bench_function("preprocess_single", |b| {
        b.iter(|| pipeline.transform(black_box(&answers)))
    });
}

criterion_group!(benches, bench_expand);
criterion_main!(benches);
