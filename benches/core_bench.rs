use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use nbv_curves::core::fibonacci_sphere;
use nbv_curves::shared::{arc_length, bezier};
use nbv_curves::{build_network, parse_scene, CurveOptions, NodeSet, TopologyPolicy};
use std::hint::black_box;

fn bench_scene_parsing(c: &mut Criterion) {
    let toml_content = include_str!("../tests/fixtures/simple_scene.toml");

    c.bench_function("scene_parse_simple", |b| {
        b.iter(|| {
            let scene = parse_scene(black_box(toml_content)).expect("Scene parse failed");
            black_box(scene.nodes.len())
        })
    });
}

fn build_helix_control_points(count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.4;
            DVec3::new(t.cos(), t.sin(), i as f64 * 0.1)
        })
        .collect()
}

fn bench_bezier_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier_sampling");

    for &degree in &[3usize, 10, 40] {
        let control = build_helix_control_points(degree + 1);

        group.bench_with_input(
            BenchmarkId::new("sample_100", degree),
            &control,
            |b, control| {
                b.iter(|| {
                    let curve = bezier::sample(black_box(control), 100).expect("sample failed");
                    black_box(curve.len())
                })
            },
        );
    }

    let curve = bezier::sample(&build_helix_control_points(8), 1000).expect("sample failed");
    group.bench_function("resample_equidistant_1000_to_64", |b| {
        b.iter(|| {
            let points =
                arc_length::resample_equidistant(black_box(&curve), 64).expect("resample failed");
            black_box(points.len())
        })
    });

    group.finish();
}

fn bench_nearest_neighbor_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_network");
    group.sample_size(10);

    for &node_count in &[1_000usize, 10_000usize] {
        let set = NodeSet::new(fibonacci_sphere(node_count, 10.0, 0.6))
            .expect("synthetic node set invalid");
        let options = CurveOptions {
            n_times: 20,
            topology: TopologyPolicy::NearestNeighbors { k: 4 },
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::new("build_network_k4", node_count),
            &set,
            |b, set| {
                b.iter(|| {
                    let network = build_network(black_box(set), &options).expect("build failed");
                    black_box(network.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_scene_parsing,
    bench_bezier_sampling,
    bench_nearest_neighbor_network
);
criterion_main!(core_benches);
