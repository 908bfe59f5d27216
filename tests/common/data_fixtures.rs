//! 测试数据生成模块
//!
//! 提供固定测试图、随机图生成和暴力求解参照

use graphpath::{Edge, Weight, WeightedGraph};
use rand::rngs::StdRng;
use rand::Rng;

/// 由边列表创建图
pub fn graph(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> WeightedGraph {
    WeightedGraph::from_edges(vertex_count, edges.iter().copied()).expect("测试图应该合法")
}

/// 4个顶点的有向图，0到2的最短路径经过3
pub fn four_vertex_graph() -> WeightedGraph {
    graph(
        4,
        &[
            (0, 1, 3),
            (1, 0, 2),
            (0, 3, 5),
            (1, 3, 4),
            (2, 1, 1),
            (2, 2, 0),
            (3, 2, 2),
            (3, 3, 0),
        ],
    )
}

/// 总权重为-2的4顶点负权环
pub fn negative_cycle_graph() -> WeightedGraph {
    graph(4, &[(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 0, -1)])
}

/// 单顶点无边的图
pub fn single_vertex_graph() -> WeightedGraph {
    graph(1, &[])
}

/// 随机生成非负权图，不含自环
pub fn random_non_negative_graph(
    rng: &mut StdRng,
    vertex_count: usize,
    edge_probability: f64,
    max_weight: Weight,
) -> WeightedGraph {
    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v && rng.gen_bool(edge_probability) {
                edges.push(Edge::new(u, v, rng.gen_range(0..=max_weight)));
            }
        }
    }
    WeightedGraph::from_edges(vertex_count, edges).expect("随机图应该合法")
}

/// 随机生成可能含负权边、但不含负权环的图
///
/// 边权为 w + p(u) - p(v)，其中 w 非负、p 为顶点势能。任意环上势能项相互抵消，
/// 环的总权重等于非负部分之和。
pub fn random_graph_without_negative_cycle(
    rng: &mut StdRng,
    vertex_count: usize,
    edge_probability: f64,
    max_weight: Weight,
) -> WeightedGraph {
    let potentials: Vec<Weight> = (0..vertex_count)
        .map(|_| rng.gen_range(-max_weight..=max_weight))
        .collect();

    let mut edges = Vec::new();
    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v && rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(0..=max_weight) + potentials[u] - potentials[v];
                edges.push(Edge::new(u, v, weight));
            }
        }
    }
    WeightedGraph::from_edges(vertex_count, edges).expect("随机图应该合法")
}

/// 枚举所有简单路径，求从起点到各顶点的最小总权重
pub fn brute_force_distances(graph: &WeightedGraph, source: usize) -> Vec<Option<Weight>> {
    let n = graph.vertex_count();
    let mut best = vec![None; n];
    let mut on_path = vec![false; n];
    visit(graph, source, 0, &mut on_path, &mut best);
    best
}

fn visit(
    graph: &WeightedGraph,
    vertex: usize,
    cost: Weight,
    on_path: &mut [bool],
    best: &mut [Option<Weight>],
) {
    if best[vertex].map_or(true, |b| cost < b) {
        best[vertex] = Some(cost);
    }
    on_path[vertex] = true;
    for (next, weight) in graph.neighbors(vertex).expect("顶点应该在范围内") {
        if !on_path[next] {
            visit(graph, next, cost + weight, on_path, best);
        }
    }
    on_path[vertex] = false;
}
