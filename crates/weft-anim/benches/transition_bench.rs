//! Benchmarks for the field transition driver and definition cache.
//!
//! Run with: `cargo bench -p weft-anim --bench transition_bench`

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weft_anim::{DefinitionCache, FieldColors, FieldTransition, InputPhase, TransitionDefinition};
use weft_style::FieldTheme;

const FRAME: Duration = Duration::from_millis(16);

fn bench_tick_and_sample(c: &mut Criterion) {
    let colors = FieldColors::from_theme(&FieldTheme::light());

    c.bench_function("field_tick_sample_settled", |b| {
        let mut field = FieldTransition::new(colors);
        b.iter(|| {
            field.tick(black_box(FRAME));
            black_box(field.sample())
        });
    });

    c.bench_function("field_tick_sample_animating", |b| {
        let mut field = FieldTransition::new(colors);
        let mut focused = false;
        b.iter(|| {
            // Flip focus every iteration so a tween is always in flight.
            focused = !focused;
            field.set_inputs(focused, true);
            field.tick(black_box(FRAME));
            black_box(field.sample())
        });
    });

    c.bench_function("field_full_transition", |b| {
        b.iter(|| {
            let mut field = FieldTransition::new(black_box(colors));
            field.set_phase(InputPhase::Focused);
            for _ in 0..10 {
                field.tick(FRAME);
            }
            black_box(field.sample())
        });
    });
}

fn bench_definitions(c: &mut Criterion) {
    let colors = FieldColors::from_theme(&FieldTheme::light());

    c.bench_function("definition_generate", |b| {
        b.iter(|| black_box(TransitionDefinition::generate(black_box(colors))));
    });

    c.bench_function("definition_cache_hit", |b| {
        let mut cache = DefinitionCache::new();
        let _ = cache.get_or_generate(colors);
        b.iter(|| black_box(cache.get_or_generate(black_box(colors))));
    });
}

criterion_group!(benches, bench_tick_and_sample, bench_definitions);
criterion_main!(benches);
