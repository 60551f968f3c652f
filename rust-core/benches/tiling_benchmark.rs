use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quasi_tiler::lattice::{AcceptanceWindow, VertexStore};
use quasi_tiler::tiling::{Enumerator, NullReporter, TileAssembler};
use quasi_tiler::{QuasiTiling, TilingConfig, ViewExtent};
use std::hint::black_box;

/// Full builds for the two reference stars at growing view sizes.
fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_build");
    group.sample_size(20);

    for extent in [5.0, 10.0, 20.0] {
        group.bench_with_input(BenchmarkId::new("penrose", extent), &extent, |b, &extent| {
            b.iter(|| QuasiTiling::build(black_box(TilingConfig::penrose(ViewExtent::square(extent))), &mut NullReporter))
        });
        group.bench_with_input(BenchmarkId::new("ammann_beenker", extent), &extent, |b, &extent| {
            b.iter(|| {
                QuasiTiling::build(
                    black_box(TilingConfig::ammann_beenker(ViewExtent::square(extent))),
                    &mut NullReporter,
                )
            })
        });
    }

    group.finish();
}

/// Enumeration and assembly measured separately on a fixed Penrose view.
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let config = TilingConfig::penrose(ViewExtent::square(10.0));
    let tiling = QuasiTiling::build(config.clone(), &mut NullReporter).expect("reference build");
    let space = tiling.space();

    group.bench_function("enumerate", |b| {
        b.iter(|| {
            let enumerator = Enumerator::new(space, &config.enumeration).expect("valid view");
            let mut store = VertexStore::new(space.dimension());
            enumerator.run(&mut store, &mut NullReporter).expect("enumeration");
            black_box(store.len())
        })
    });

    group.bench_function("assemble", |b| {
        b.iter(|| TileAssembler::new(space, black_box(tiling.vertices())).assemble())
    });

    let window = AcceptanceWindow::new(space);
    let points: Vec<Vec<i32>> = tiling.vertices().iter().map(<[i32]>::to_vec).collect();
    group.bench_function("acceptance_test", |b| {
        b.iter(|| points.iter().filter(|point| window.accepts(point).unwrap_or(false)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_full_build, bench_stages);
criterion_main!(benches);
