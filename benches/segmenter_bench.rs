use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use bionic::pos::Classifier;
use bionic::{glyphs_from_text, BionicConfig, BionicPainter, Glyph, LexiconTagger, SegmentContext, Segmenter};

const SHORT_LINE: &str = "The quick brown fox jumps over the lazy dog.";
const LONG_LINE: &str = "Extraordinary circumstances occasionally necessitate reconsidering \
    previously established organizational responsibilities, particularly when international \
    collaboration introduces unanticipated communication difficulties.";

// Kerned Glyph Run
// WHY: PDF text often carries a small spacing adjustment between every character
fn kerned(text: &str) -> Vec<Glyph> {
    glyphs_from_text(text)
        .into_iter()
        .flat_map(|glyph| [glyph, Glyph::spacing(-12.0)])
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for (name, text) in [("short", SHORT_LINE), ("long", LONG_LINE)] {
        for (variant, glyphs) in [("plain", glyphs_from_text(text)), ("kerned", kerned(text))] {
            // Warm classifier cache reflects steady-state page rendering
            let mut segmenter = Segmenter::with_default_tagger().unwrap();
            group.throughput(Throughput::Elements(glyphs.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, variant), &glyphs, |b, glyphs| {
                b.iter(|| {
                    let result = segmenter.segment(black_box(glyphs), SegmentContext::default());
                    black_box(result.spans.len())
                })
            });
        }
    }

    group.finish();
}

fn bench_painter_segment(c: &mut Criterion) {
    let glyphs = glyphs_from_text(LONG_LINE);
    let config = BionicConfig {
        highlight_verbs: true,
        highlight_nouns: true,
        ..Default::default()
    };
    let mut painter = BionicPainter::with_default_tagger().unwrap();

    c.bench_function("painter_segment_highlighted", |b| {
        b.iter(|| black_box(painter.segment(black_box(&glyphs), &config).len()))
    });
}

fn bench_classify_cold(c: &mut Criterion) {
    let words: Vec<&str> = LONG_LINE.split_whitespace().collect();

    c.bench_function("classify_cold_cache", |b| {
        b.iter_batched(
            || Classifier::new(LexiconTagger::new().unwrap()),
            |mut classifier| {
                for word in &words {
                    black_box(classifier.classify(word));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_analyze_context(c: &mut Criterion) {
    let mut classifier = Classifier::new(LexiconTagger::new().unwrap());
    let text = format!("{SHORT_LINE} {LONG_LINE}");

    c.bench_function("analyze_context", |b| {
        b.iter(|| black_box(classifier.analyze_context(black_box(&text)).len()))
    });
}

criterion_group!(
    benches,
    bench_segment,
    bench_painter_segment,
    bench_classify_cold,
    bench_analyze_context
);
criterion_main!(benches);
