use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gameoflive::World;

fn make_world(size: usize) -> World {
    let mut world = World::new(size, size);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            if (x + y) % 3 == 0 {
                world.set_alive(x, y, true);
            }
        }
    }
    world
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [16, 64, 256] {
        let world = make_world(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, world| {
            b.iter_batched(
                || world.clone(),
                |mut world| world.step(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_neighbours(c: &mut Criterion) {
    let world = make_world(64);
    c.bench_function("living_neighbours/64", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for y in 0..64 {
                for x in 0..64 {
                    total += u32::from(world.living_neighbours(x, y));
                }
            }
            total
        });
    });
}

criterion_group!(benches, bench_step, bench_neighbours);
criterion_main!(benches);
