use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use diagram_layout::{DiagramArchetype, EdgeSpec, LayoutConfig, NodeSpec, generate_layout};
use std::hint::black_box;

fn chain_graph(nodes: usize, extra_edges: usize) -> (Vec<NodeSpec>, Vec<EdgeSpec>) {
    let specs: Vec<NodeSpec> = (0..nodes)
        .map(|i| NodeSpec::new(format!("n{i}"), format!("Step {i}")))
        .collect();
    let mut edges: Vec<EdgeSpec> = (1..nodes)
        .map(|i| EdgeSpec::new(format!("n{}", i - 1), format!("n{i}")))
        .collect();
    let mut count = 0usize;
    'outer: for i in 0..nodes {
        for j in (i + 2)..nodes {
            if count >= extra_edges {
                break 'outer;
            }
            edges.push(EdgeSpec::new(format!("n{i}"), format!("n{j}")));
            count += 1;
        }
    }
    (specs, edges)
}

fn crowded_graph(nodes: usize) -> (Vec<NodeSpec>, Vec<EdgeSpec>) {
    // Long labels widen every box, forcing the resolver to work.
    let specs: Vec<NodeSpec> = (0..nodes)
        .map(|i| NodeSpec::new(format!("n{i}"), "a long transcription segment label here"))
        .collect();
    (specs, Vec::new())
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_layout");
    let config = LayoutConfig::default();
    let archetypes = [
        DiagramArchetype::Flow,
        DiagramArchetype::Tree,
        DiagramArchetype::Timeline,
        DiagramArchetype::Matrix,
        DiagramArchetype::Cycle,
    ];
    for archetype in archetypes {
        for size in [6usize, 12, 20] {
            let (nodes, edges) = chain_graph(size, size / 2);
            let name = format!("{}_{}", archetype.as_str(), size);
            group.bench_with_input(BenchmarkId::from_parameter(name), &size, |b, _| {
                b.iter(|| {
                    let result =
                        generate_layout(black_box(&nodes), black_box(&edges), archetype, &config);
                    black_box(result.nodes.len());
                });
            });
        }
    }
    group.finish();
}

fn bench_resolution_pressure(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_resolution");
    let config = LayoutConfig::default();
    for size in [8usize, 14, 20] {
        let (nodes, edges) = crowded_graph(size);
        let name = format!("crowded_matrix_{size}");
        group.bench_with_input(BenchmarkId::from_parameter(name), &size, |b, _| {
            b.iter(|| {
                let result = generate_layout(
                    black_box(&nodes),
                    black_box(&edges),
                    DiagramArchetype::Matrix,
                    &config,
                );
                black_box(result.metrics.overlap_count);
            });
        });
    }
    group.finish();
}

fn bench_edge_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_routing");
    let config = LayoutConfig::default();
    for (nodes, extra_edges) in [(10usize, 20usize), (16, 60), (20, 120)] {
        let (specs, edges) = chain_graph(nodes, extra_edges);
        let name = format!("dense_{}_{}", nodes, extra_edges);
        group.bench_with_input(BenchmarkId::from_parameter(name), &nodes, |b, _| {
            b.iter(|| {
                let result = generate_layout(
                    black_box(&specs),
                    black_box(&edges),
                    DiagramArchetype::Flow,
                    &config,
                );
                black_box(result.edges.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_generate, bench_resolution_pressure, bench_edge_routing
);
criterion_main!(benches);
