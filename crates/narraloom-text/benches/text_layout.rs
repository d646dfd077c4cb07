//! Benchmarks for bitmap-font layout and quad emission

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use narraloom_text::{
    BitmapFont, LayoutRequest, LayoutResult, QuadBuffer, TextBatch, bmfont, layout_into,
};

/// Printable ASCII, 8px cells, 9px advance.
fn ascii_font() -> BitmapFont {
    let mut descriptor = String::from("common lineHeight=18 scaleW=256 scaleH=128\n");
    for (i, code) in (32u32..127).enumerate() {
        let x = (i % 32) * 8;
        let y = (i / 32) * 16;
        descriptor.push_str(&format!(
            "char id={code} x={x} y={y} width=8 height=16 xoffset=0 yoffset=0 xadvance=9\n"
        ));
    }
    bmfont::parse(&descriptor).expect("benchmark font")
}

fn bench_layout(c: &mut Criterion) {
    let font = ascii_font();
    let mut group = c.benchmark_group("layout");

    let long_text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let texts: Vec<(&str, &str)> = vec![
        ("single_word", "Hello"),
        ("sentence", "Narraloom is alive."),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        group.throughput(Throughput::Elements(content.len() as u64));
        group.bench_function(name, |b| {
            let mut result = LayoutResult::default();
            let request = LayoutRequest::new(content, 600.0);
            b.iter(|| {
                layout_into(black_box(&request), &font, &mut result);
                black_box(result.glyphs.len())
            });
        });
    }

    group.finish();
}

fn bench_typewriter_reveal(c: &mut Criterion) {
    let font = ascii_font();
    let mut group = c.benchmark_group("typewriter_reveal");
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(8);

    for visible in [0usize, 40, 160, 360] {
        group.bench_with_input(BenchmarkId::from_parameter(visible), &visible, |b, &visible| {
            let mut batch = TextBatch::new();
            let request = LayoutRequest::new(&text, 600.0).with_visible_chars(visible);
            b.iter(|| black_box(batch.prepare(black_box(&request), &font)));
        });
    }

    group.finish();
}

fn bench_quad_emission(c: &mut Criterion) {
    let font = ascii_font();
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let mut result = LayoutResult::default();
    layout_into(&LayoutRequest::new(&text, 600.0), &font, &mut result);

    c.bench_function("quad_emission", |b| {
        let mut quads = QuadBuffer::with_capacity(result.glyphs.len());
        b.iter(|| {
            quads.clear();
            quads.extend(black_box(&result.glyphs), 1.0, (&font).into());
            black_box(quads.vertex_count())
        });
    });
}

criterion_group!(
    benches,
    bench_layout,
    bench_typewriter_reveal,
    bench_quad_emission
);
criterion_main!(benches);
