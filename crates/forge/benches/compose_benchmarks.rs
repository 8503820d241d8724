use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use forge::{Board, EditorSession, ForgeConfig, XorShiftRng};
use tilecss::{ActiveAttribute, catalog, compose};

fn random_attributes(count: usize) -> Vec<ActiveAttribute> {
    let mut session = EditorSession::with_rng(ForgeConfig::default(), XorShiftRng::seeded(42));
    for _ in 0..count {
        session.add_random_attribute();
    }
    session.attributes().to_vec()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for count in [1, 5, 20] {
        let attributes = random_attributes(count);
        group.bench_with_input(BenchmarkId::new("random", count), &attributes, |b, attrs| {
            b.iter(|| compose(black_box(attrs)))
        });
    }

    let every: Vec<_> = catalog::all()
        .iter()
        .enumerate()
        .map(|(i, def)| ActiveAttribute::new(format!("attr-{i}"), def))
        .collect();
    group.bench_function("full_catalog_defaults", |b| b.iter(|| compose(black_box(&every))));
    group.finish();
}

fn bench_cell_styles(c: &mut Criterion) {
    let mut session = EditorSession::with_rng(ForgeConfig::default(), XorShiftRng::seeded(7));
    session.add_attribute("blend").unwrap();
    session.add_attribute("borderRadius").unwrap();
    session.add_attribute("boxShadow").unwrap();
    session.save_to_palette();
    session.clear_attributes();
    session.save_to_palette();
    session.randomize_grid().unwrap();
    let board: &Board = session.board();
    let (rows, cols) = board.grid().dimensions();

    c.bench_function("cell_style_full_grid", |b| {
        b.iter(|| {
            for row in 0..rows {
                for col in 0..cols {
                    black_box(board.cell_style(row, col));
                }
            }
        })
    });

    c.bench_function("export_full_grid", |b| b.iter(|| black_box(board.export())));
}

criterion_group!(benches, bench_compose, bench_cell_styles);
criterion_main!(benches);
