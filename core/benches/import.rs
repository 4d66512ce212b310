use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dataset::{csv_string_to_classification, csv_string_to_data, Dialect, LabelPosition};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ROWS: usize = 10_000;
const BATCH_SIZE: usize = 256;

/// Renders a random matrix with an integer class label in the first column.
fn generate(columns: usize, separator: char) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut text = String::with_capacity(ROWS * columns * 10);

    for _ in 0..ROWS {
        text.push_str(&rng.gen_range(0..10).to_string());
        for _ in 0..columns {
            text.push(separator);
            text.push_str(&format!("{:.6}", rng.gen_range(-1.0..1.0)));
        }
        text.push('\n');
    }

    text
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for columns in [4, 32, 128] {
        let text = generate(columns, ',');
        let dialect = Dialect::default();

        group.bench_with_input(BenchmarkId::new("data", columns), &text, |b, text| {
            b.iter(|| csv_string_to_data(black_box(text), &dialect, BATCH_SIZE).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("classification", columns),
            &text,
            |b, text| {
                b.iter(|| {
                    csv_string_to_classification(
                        black_box(text),
                        LabelPosition::First,
                        &dialect,
                        BATCH_SIZE,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_import);
criterion_main!(benches);
