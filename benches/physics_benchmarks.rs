use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;

use orrery::physics::integrators::IntegratorRegistry;
use orrery::physics::{ForceModel, PairwiseGravity};
use orrery::simulation::Simulation;
use orrery::test_utils::{lattice_system, solar_system};
use orrery::{SimulationConfig, presets::Preset};

fn bench_force_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_gravity");

    for &count in &[2usize, 9, 32, 128, 512] {
        let system = lattice_system(count);
        let gravity = PairwiseGravity::from(system.constants());
        let mut bodies = system.bodies().to_vec();

        group.bench_with_input(BenchmarkId::new("bodies", count), &count, |b, _| {
            b.iter(|| {
                gravity.compute_accelerations(black_box(&mut bodies));
            });
        });
    }

    group.finish();
}

fn bench_integrators(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_step");
    let registry = IntegratorRegistry::default();

    for name in registry.list_available() {
        let integrator = registry.create(&name).unwrap();
        let mut system = solar_system();

        group.bench_function(BenchmarkId::new("solar_system", &name), |b| {
            b.iter(|| {
                system.step_with(black_box(integrator.as_ref()));
            });
        });
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_frame");

    for preset in [Preset::SolarSystem, Preset::Random] {
        let mut config = SimulationConfig::default();
        config.system.preset = preset;
        config.system.seed = Some(42);
        config.system.random_body_count = 64;
        config.diagnostics.enabled = false;
        let mut simulation = Simulation::from_config(&config).unwrap();

        group.bench_function(BenchmarkId::new("preset", preset), |b| {
            b.iter(|| simulation.advance_frame().unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_force_evaluation,
    bench_integrators,
    bench_frames
);
criterion_main!(benches);
