use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_barista::core::{generate_customers, Customer, Order, SimpleRng};
use tui_barista::engine::screens;
use tui_barista::term::{encode_rows_into, wrap, FrameView};
use tui_barista::types::Frame;

fn bench_wrap(c: &mut Criterion) {
    let text = "Answer in under five seconds for the full tip, ".repeat(8);

    c.bench_function("wrap_400_chars", |b| {
        b.iter(|| wrap(black_box(&text), black_box(96)))
    });
}

fn bench_render_order(c: &mut Criterion) {
    let view = FrameView::default();
    let customer = Customer::new("Zoe", true, Order::new("Brown Sugar Boba"));
    let frame = screens::order(&customer);

    c.bench_function("render_order_frame", |b| {
        b.iter(|| view.render(black_box(&frame)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let view = FrameView::default();
    let rows = view.render(&screens::tutorial());
    let mut buf = Vec::with_capacity(16 * 1024);

    c.bench_function("encode_full_redraw", |b| {
        b.iter(|| {
            buf.clear();
            encode_rows_into(black_box(&rows), &mut buf).unwrap();
        })
    });
}

fn bench_long_frame(c: &mut Criterion) {
    let view = FrameView::default();
    let lines: Vec<String> = (0..40).map(|i| format!("line {i} ").repeat(15)).collect();
    let frame = Frame::new(lines);

    c.bench_function("render_overflowing_frame", |b| {
        b.iter(|| view.render(black_box(&frame)))
    });
}

fn bench_generate_day(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_customers_5", |b| {
        b.iter(|| generate_customers(&mut rng, black_box(5), 0.2))
    });
}

criterion_group!(
    benches,
    bench_wrap,
    bench_render_order,
    bench_encode,
    bench_long_frame,
    bench_generate_day
);
criterion_main!(benches);
