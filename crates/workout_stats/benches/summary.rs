use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use workout_stats::read_package;

fn bench_render_reference_packages(c: &mut Criterion) {
    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];
    c.bench_function("read_and_render_packages", |b| {
        b.iter(|| {
            for (code, data) in packages {
                let training = read_package(black_box(code), black_box(data)).expect("package");
                black_box(training.summary().render());
            }
        })
    });
}

criterion_group!(benches, bench_render_reference_packages);
criterion_main!(benches);
