//! Benchmark: measure step() cost under various grid conditions.
//!
//! A 256x256 step should stay well under a 60 Hz frame (16.7 ms) so the
//! renderer keeps most of the budget.
//!
//! Active benchmarks use `iter_batched` to re-seed the grid before every
//! iteration so we measure moving material, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use particle_sim::{MaterialKind, SimConfig, Simulation, Universe};

fn config() -> SimConfig {
    SimConfig::default().with_size(256, 256).with_seed(1)
}

fn fresh() -> Simulation {
    Simulation::new(config()).expect("valid bench config")
}

/// Air-only grid: baseline cost of visiting 64K cells with air shuffling.
fn bench_step_empty(c: &mut Criterion) {
    c.bench_function("step_empty_256x256", |b| {
        let mut sim = fresh();
        b.iter(|| {
            sim.step();
            black_box(sim.grid());
        });
    });
}

/// Sand in the top 20%, all of it falling.
fn bench_step_sand_falling(c: &mut Criterion) {
    c.bench_function("step_sand_falling_256x256", |b| {
        b.iter_batched(
            || {
                let mut sim = fresh();
                for y in 1..51 {
                    for x in 1..255 {
                        sim.grid_mut().set(x, y, MaterialKind::Sand);
                    }
                }
                sim
            },
            |mut sim| {
                sim.step();
                black_box(sim.grid());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Bottom half water with open air above, so the surface keeps flowing.
fn bench_step_water_body(c: &mut Criterion) {
    c.bench_function("step_water_body_256x256", |b| {
        b.iter_batched(
            || {
                let mut sim = fresh();
                for y in 128..255 {
                    for x in 1..255 {
                        sim.grid_mut().set(x, y, MaterialKind::Water);
                    }
                }
                sim
            },
            |mut sim| {
                sim.step();
                black_box(sim.grid());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Interleaved sand, water, steam and concrete: every rule gets exercised.
fn bench_step_mixed_active(c: &mut Criterion) {
    c.bench_function("step_mixed_active_256x256", |b| {
        b.iter_batched(
            || {
                let mut sim = fresh();
                for y in 1..255 {
                    for x in 1..255 {
                        let kind = match (x + y) % 5 {
                            0 => MaterialKind::Sand,
                            1 => MaterialKind::Water,
                            2 => MaterialKind::Steam,
                            3 if y % 17 == 0 => MaterialKind::Concrete,
                            _ => MaterialKind::Air,
                        };
                        sim.grid_mut().set(x, y, kind);
                    }
                }
                sim
            },
            |mut sim| {
                sim.step();
                black_box(sim.grid());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Full Universe::tick() including the RGBA refresh the browser reads.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_mixed_256x256", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::from_config(config()).expect("valid bench config");
                for y in (8..248).step_by(16) {
                    for x in (8..248).step_by(16) {
                        let id = ((x * 7 + y * 13) % 3) as u8 + 1;
                        universe.paint(id, x, y, 6);
                    }
                }
                universe
            },
            |mut universe| {
                universe.tick();
                black_box(universe.pixels());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_empty,
    bench_step_sand_falling,
    bench_step_water_body,
    bench_step_mixed_active,
    bench_universe_tick,
);
criterion_main!(benches);
