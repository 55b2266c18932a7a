//! # ORR-02 Body Teardown Benchmarks
//!
//! Workloads:
//! - Removing the root of a deep primary chain
//! - Removing the root of a wide random tree
//! - Walking a graph whose primaries form one large cycle

use criterion::{black_box, BenchmarkId, Criterion};
use orr_02_body_teardown::{
    BodyDescriptor, BodyTeardownApi, BodyTeardownService, InMemoryScene, NextTickScheduler,
};
use rand::Rng;
use shared_types::BodyId;

type Service = BodyTeardownService<InMemoryScene, NextTickScheduler>;

fn spawn_bodies(count: usize) -> (Service, Vec<BodyId>) {
    let mut svc = BodyTeardownService::new(InMemoryScene::new(), NextTickScheduler::new());
    let bodies = (0..count)
        .map(|i| {
            let name = format!("Body{i}_Body");
            let object = svc.scene_mut().spawn(&name);
            svc.register_body(BodyDescriptor::new(name, object))
                .expect("unique names")
        })
        .collect();
    (svc, bodies)
}

/// Body `i` orbits body `i - 1`.
pub fn chain(count: usize) -> (Service, BodyId) {
    let (mut svc, bodies) = spawn_bodies(count);
    for pair in bodies.windows(2) {
        svc.set_primary(pair[1], Some(pair[0])).expect("known bodies");
    }
    (svc, bodies[0])
}

/// Each body orbits a random earlier body.
pub fn random_tree(count: usize) -> (Service, BodyId) {
    let mut rng = rand::thread_rng();
    let (mut svc, bodies) = spawn_bodies(count);
    for i in 1..bodies.len() {
        let primary = bodies[rng.gen_range(0..i)];
        svc.set_primary(bodies[i], Some(primary)).expect("known bodies");
    }
    (svc, bodies[0])
}

/// Chain closed into a ring.
pub fn ring(count: usize) -> (Service, BodyId) {
    let (mut svc, bodies) = spawn_bodies(count);
    for i in 0..bodies.len() {
        let primary = bodies[(i + bodies.len() - 1) % bodies.len()];
        svc.set_primary(bodies[i], Some(primary)).expect("known bodies");
    }
    (svc, bodies[0])
}

pub fn bench_remove_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("orr-02-remove-body");

    for size in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("chain", size), &size, |b, &size| {
            b.iter_batched(
                || chain(size),
                |(mut svc, root)| black_box(svc.remove_body(root)),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("random_tree", size), &size, |b, &size| {
            b.iter_batched(
                || random_tree(size),
                |(mut svc, root)| black_box(svc.remove_body(root)),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("ring", size), &size, |b, &size| {
            b.iter_batched(
                || ring(size),
                |(mut svc, root)| black_box(svc.remove_body(root)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ring_removes_every_body() {
        let (mut svc, root) = ring(50);
        let report = svc.remove_body(root).unwrap();
        assert_eq!(report.deactivated.len(), 50);
        assert_eq!(report.cycles, vec![root]);
    }

    proptest! {
        #[test]
        fn prop_random_tree_removes_every_body(size in 1usize..200) {
            let (mut svc, root) = random_tree(size);
            let report = svc.remove_body(root).unwrap();
            prop_assert_eq!(report.deactivated.len(), size);
            prop_assert!(report.cycles.is_empty());
            prop_assert!(svc.live_bodies().is_empty());
        }
    }
}
