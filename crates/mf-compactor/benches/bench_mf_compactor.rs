use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_compactor::{ModeFormatter, PlainMarkup};
use mf_core::{ModeEntry, ScheduleInput};
use rand::Rng;

fn random_week(rng: &mut impl Rng) -> ModeEntry {
    let slots = (0..7).map(|_| match rng.gen_range(0..4) {
        0 => String::new(),
        1 => "0;24".to_string(),
        2 => format!("{};{}", rng.gen_range(7..11), rng.gen_range(17..23)),
        _ => format!("{};13;14;{}", rng.gen_range(7..11), rng.gen_range(17..23)),
    });
    ModeEntry::new(slots)
}

fn generate_input(categories: usize, variants: usize) -> ScheduleInput {
    let mut rng = rand::thread_rng();
    (0..categories)
        .map(|i| {
            let entries: Vec<Option<ModeEntry>> =
                (0..variants).map(|_| Some(random_week(&mut rng))).collect();
            (format!("type{i}"), Some(entries))
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let formatter = ModeFormatter::default();
    for &(name, categories, variants) in &[("small", 5, 1), ("medium", 50, 3), ("large", 500, 5)] {
        let input = generate_input(categories, variants);
        c.bench_function(&format!("render_html_{name}"), |b| {
            b.iter(|| black_box(formatter.render(black_box(&input))))
        });
        c.bench_function(&format!("render_plain_{name}"), |b| {
            b.iter(|| black_box(formatter.render_with(black_box(&input), &PlainMarkup)))
        });
    }
}

fn bench_merge_heavy(c: &mut Criterion) {
    let formatter = ModeFormatter::default();
    let week = ModeEntry::new(["9;18", "9;18", "9;18", "9;18", "9;18", "", ""]);
    let input: ScheduleInput = (0..200)
        .map(|i| (format!("type{i}"), Some(vec![Some(week.clone())])))
        .collect();
    c.bench_function("render_200_identical", |b| {
        b.iter(|| black_box(formatter.render(black_box(&input))))
    });
}

criterion_group!(benches, bench_render, bench_merge_heavy);
criterion_main!(benches);
