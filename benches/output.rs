use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tintlog::{ColorConsole, ColorMode, Context, Logger, MemorySink, PlainConsole};

fn bench_color_console_emit(c: &mut Criterion) {
    let out = MemorySink::new();
    let console = ColorConsole::builder()
        .stdout(out.clone())
        .stderr(out.clone())
        .colors(ColorMode::Never)
        .build();
    let ctx = Context::new();

    c.bench_function("ColorConsole::info/memory", |b| {
        b.iter(|| {
            console.info(black_box("Application started"), &ctx);
            out.clear();
        });
    });
}

fn bench_plain_console_emit(c: &mut Criterion) {
    let out = MemorySink::new();
    let console = PlainConsole::with_sinks(out.clone(), out.clone());
    let ctx = Context::new();

    c.bench_function("PlainConsole::info/memory", |b| {
        b.iter(|| {
            console.info(black_box("Application started"), &ctx);
            out.clear();
        });
    });
}

criterion_group!(benches, bench_color_console_emit, bench_plain_console_emit);
criterion_main!(benches);
