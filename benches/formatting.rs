use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use tintlog::{ColorConsole, ColorMode, Context, FixedClock, LogEvent, substitute};

fn bench_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute");

    let ctx = Context::new().with("user", "ada").with("count", 42);
    group.bench_function("two_tokens", |b| {
        b.iter(|| substitute(black_box("user {{user}} sent {{count}} messages"), &ctx));
    });

    group.bench_function("no_tokens", |b| {
        b.iter(|| substitute(black_box("plain message with no placeholders"), &ctx));
    });

    group.finish();
}

fn bench_format_line(c: &mut Criterion) {
    let console = ColorConsole::builder()
        .clock(FixedClock::from_hms_milli(14, 7, 43, 41).unwrap())
        .colors(ColorMode::Always)
        .build();
    let ctx = Context::new().with("x", "cool");

    c.bench_function("ColorConsole::format", |b| {
        b.iter(|| {
            let event = LogEvent::new("info", "some {{x}} thing").with_context(&ctx);
            console.format(black_box(&event), true)
        });
    });

    c.bench_function("ColorConsole::format/payload", |b| {
        b.iter(|| {
            let event = LogEvent::new("info", "some {{x}} thing")
                .with_context(&ctx)
                .with_data(&json!({"foo": "bar", "n": [1, 2, 3]}));
            console.format(black_box(&event), true)
        });
    });
}

criterion_group!(benches, bench_substitute, bench_format_line);
criterion_main!(benches);
