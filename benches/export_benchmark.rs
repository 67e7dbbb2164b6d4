//! Benchmarks for basichtml export performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks export synthetic documents mixing paragraphs, lists,
//! frames and formatted runs.

use basichtml::model::{
    Block, CharFormat, Document, Font, ListFormat, ListStyle, Run, WEIGHT_BOLD,
};
use basichtml::{EmissionStrategy, ExportOptions, TableMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(section_count: usize) -> Document {
    let mut builder = Document::builder(Font::default());
    let bullets = builder.add_list(ListFormat::new(ListStyle::Disc));
    let steps = builder.add_list(ListFormat::new(ListStyle::Decimal));

    for i in 0..section_count {
        let mut heading = CharFormat::sized(2);
        heading.font_weight = Some(WEIGHT_BOLD);
        builder.push_block(
            Block::new().with_run(Run::styled(format!("Section {}", i + 1), heading)),
        );

        builder.push_block(
            Block::with_text("Benchmark content with ")
                .with_run(Run::styled("bold", CharFormat::bold()))
                .with_run(Run::text(", "))
                .with_run(Run::styled("italic", CharFormat::italic()))
                .with_run(Run::text(" & <escaped> text.\u{2028}Second line.")),
        );

        for item in 0..3 {
            let list = if item % 2 == 0 { bullets } else { steps };
            builder.push_block(Block::with_text(format!("Item {}", item)).in_list(list));
        }

        builder.begin_frame();
        builder.push_block(
            Block::new()
                .with_run(Run::styled("link", CharFormat::link("https://example.org")))
                .with_run(Run::image("figure.png")),
        );
        builder.push_block(Block::new());
        builder.end_frame();

        builder.begin_table(2);
        for cell in 0..4 {
            builder.begin_frame();
            builder.push_block(Block::with_text(format!("Cell {}", cell)));
            builder.end_frame();
        }
        builder.end_frame();
    }

    builder.finish()
}

/// Benchmark export at various document sizes.
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for section_count in [1, 10, 100].iter() {
        let doc = create_test_document(*section_count);

        group.bench_function(format!("attribute_{}_sections", section_count), |b| {
            let options = ExportOptions::default();
            b.iter(|| basichtml::to_html(black_box(&doc), &options));
        });

        group.bench_function(format!("semantic_{}_sections", section_count), |b| {
            let options = ExportOptions::new()
                .with_strategy(EmissionStrategy::SemanticTag)
                .with_fragment_markers(true)
                .with_table_mode(TableMode::Render);
            b.iter(|| basichtml::to_html(black_box(&doc), &options));
        });
    }

    group.finish();
}

/// Benchmark document construction and indexing.
fn bench_indexing(c: &mut Criterion) {
    c.bench_function("build_100_sections", |b| {
        b.iter(|| create_test_document(black_box(100)));
    });
}

/// Benchmark format differencing.
fn bench_format_difference(c: &mut Criterion) {
    let default = CharFormat::export_default(&Font::default());
    let mut target = CharFormat::sized(1);
    target.font_italic = Some(true);
    target.font_weight = Some(WEIGHT_BOLD);

    c.bench_function("format_difference", |b| {
        b.iter(|| black_box(&default).difference(black_box(&target)));
    });
}

criterion_group!(
    benches,
    bench_export,
    bench_indexing,
    bench_format_difference,
);
criterion_main!(benches);
