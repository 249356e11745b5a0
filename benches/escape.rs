#[macro_use]
extern crate criterion;
extern crate mandelzoom;
extern crate num;

use criterion::Criterion;
use mandelzoom::{compute_field, escape_time, ScreenRect, ViewState};
use num::Complex;

fn bench_escape_time(c: &mut Criterion) {
    c.bench_function("escape_exterior", |b| {
        b.iter(|| escape_time(Complex::new(0.3, 0.6), 1000))
    });
    c.bench_function("escape_interior", |b| {
        b.iter(|| escape_time(Complex::new(-0.5, 0.0), 1000))
    });
}

fn bench_field(c: &mut Criterion) {
    let view = ViewState::new(Complex::new(-0.5, 0.0), 4.0, 50, 0).unwrap();
    c.bench_function("field_160x120", move |b| {
        b.iter(|| compute_field(&view, ScreenRect::new(160, 120)))
    });
}

criterion_group!(benches, bench_escape_time, bench_field);
criterion_main!(benches);
