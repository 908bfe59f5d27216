//! 最短路径算法集成测试
//!
//! 测试范围:
//! - Dijkstra / Bellman-Ford / Floyd-Warshall 在固定图上的结果
//! - 负权环检测与路径重建
//! - 随机图上各算法结果一致性

mod common;

use common::assertions::{
    assert_distances, assert_err_with, assert_found, assert_matrix, assert_ok, assert_path_weight,
};
use common::data_fixtures::{
    brute_force_distances, four_vertex_graph, graph, negative_cycle_graph,
    random_graph_without_negative_cycle, random_non_negative_graph, single_vertex_graph,
};

use graphpath::api::demo;
use graphpath::{
    BellmanFord, Dijkstra, Distance, FloydWarshall, MultiSourceShortestPath, PathOutcome,
    PathReconstructor, SingleSourceAlgorithm,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ==================== 固定图测试 ====================

#[test]
fn test_demo_graph_dijkstra_and_bellman_ford_agree() {
    let graph = assert_ok(demo::dijkstra_graph());

    let dijkstra = assert_ok(Dijkstra::shortest_paths(&graph, 0));
    let bellman_ford = assert_ok(BellmanFord::shortest_paths(&graph, 0));

    assert_distances(
        &dijkstra,
        &[Some(0), Some(3), Some(1), Some(2), Some(4), Some(4), Some(3), None, None],
    );
    assert_eq!(dijkstra.distances, bellman_ford.distances);
    assert!(!bellman_ford.has_negative_cycle);

    // 0->3->6 与 0->2->3->6 等长，两种算法都保留先找到的前驱
    for result in [&dijkstra, &bellman_ford] {
        let path = assert_found(assert_ok(result.path_to(6)));
        assert_eq!(path, vec![0, 3, 6]);
        assert_path_weight(&graph, &path, 3);
    }
}

#[test]
fn test_demo_graph_with_negative_edge() {
    let graph = assert_ok(demo::bellman_ford_graph());
    let result = assert_ok(BellmanFord::shortest_paths(&graph, 0));

    assert!(!result.has_negative_cycle);
    assert_distances(
        &result,
        &[Some(0), Some(1), Some(-1), Some(0), Some(2), Some(2), Some(1), None, None],
    );
    assert_eq!(assert_found(assert_ok(result.path_to(6))), vec![0, 2, 3, 6]);

    assert_err_with(Dijkstra::shortest_paths(&graph, 0), "负权边");
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let graph = assert_ok(demo::bellman_ford_negative_cycle_graph());
    let result = assert_ok(BellmanFord::shortest_paths(&graph, 0));

    assert!(result.has_negative_cycle);
    assert_eq!(assert_ok(result.path_to(6)), PathOutcome::NegativeCycle);

    let cycle = assert_ok(BellmanFord::find_negative_cycle(&graph)).expect("应该找到负权环");
    let mut members = cycle.clone();
    members.sort_unstable();
    members.dedup();
    assert!(members.contains(&0) && members.contains(&2) && members.contains(&3));
}

#[test]
fn test_floyd_warshall_detects_negative_cycle() {
    let result = assert_ok(FloydWarshall::shortest_paths(&negative_cycle_graph()));

    assert!(result.has_negative_cycle);
    assert_eq!(
        assert_ok(result.path(&negative_cycle_graph(), 0, 2)),
        PathOutcome::NegativeCycle
    );
}

#[test]
fn test_floyd_warshall_four_vertex_graph() {
    let graph = four_vertex_graph();
    let result = assert_ok(FloydWarshall::shortest_paths(&graph));

    assert!(!result.has_negative_cycle);
    assert_matrix(
        &result,
        &[
            vec![Some(0), Some(3), Some(7), Some(5)],
            vec![Some(2), Some(0), Some(6), Some(4)],
            vec![Some(3), Some(1), Some(0), Some(5)],
            vec![Some(5), Some(3), Some(2), Some(0)],
        ],
    );

    // 边是 2->1 而不是 1->2，所以 0 到 2 只能经过 3
    let path = assert_found(assert_ok(result.path(&graph, 0, 2)));
    assert_eq!(path, vec![0, 3, 2]);
    assert_path_weight(&graph, &path, 7);
}

#[test]
fn test_floyd_warshall_route_through_vertex_one() {
    let graph = graph(
        4,
        &[
            (0, 1, 3),
            (1, 0, 2),
            (0, 3, 5),
            (1, 3, 4),
            (1, 2, 1),
            (2, 1, 1),
            (3, 2, 2),
        ],
    );
    let result = assert_ok(FloydWarshall::shortest_paths(&graph));

    assert_eq!(assert_ok(result.distance(0, 2)), Distance::Finite(4));
    assert_eq!(assert_found(assert_ok(result.path(&graph, 0, 2))), vec![0, 1, 2]);
}

#[test]
fn test_single_vertex_graph() {
    let graph = single_vertex_graph();

    for algorithm in [SingleSourceAlgorithm::Dijkstra, SingleSourceAlgorithm::BellmanFord] {
        let result = assert_ok(algorithm.run(&graph, 0));
        assert_distances(&result, &[Some(0)]);
        assert_eq!(assert_ok(PathReconstructor::reconstruct(&result, 0)), PathOutcome::Found(vec![0]));
    }

    let all_pairs = assert_ok(FloydWarshall::shortest_paths(&graph));
    assert_matrix(&all_pairs, &[vec![Some(0)]]);
}

#[test]
fn test_unreachable_vertices_keep_sentinel() {
    let graph = graph(4, &[(0, 1, 2), (2, 3, 1)]);

    let result = assert_ok(BellmanFord::shortest_paths(&graph, 0));
    assert_distances(&result, &[Some(0), Some(2), None, None]);
    assert_eq!(assert_ok(result.path_to(3)), PathOutcome::Unreachable);

    let all_pairs = assert_ok(FloydWarshall::shortest_paths(&graph));
    assert_eq!(assert_ok(all_pairs.distance(0, 3)), Distance::Unreachable);
    assert_eq!(assert_ok(all_pairs.path(&graph, 0, 3)), PathOutcome::Unreachable);
}

#[test]
fn test_extreme_weights_agree_across_algorithms() {
    let graph = graph(3, &[(0, 1, i64::MAX), (0, 2, 5), (1, 2, 1)]);
    let expected = [Some(0), Some(i64::MAX), Some(5)];

    for algorithm in [SingleSourceAlgorithm::Dijkstra, SingleSourceAlgorithm::BellmanFord] {
        let result = assert_ok(algorithm.run(&graph, 0));
        assert_distances(&result, &expected);
        assert_eq!(assert_found(assert_ok(result.path_to(2))), vec![0, 2]);
    }

    let all_pairs = assert_ok(FloydWarshall::shortest_paths(&graph));
    assert_eq!(all_pairs.distances[0], expected.map(Distance::from).to_vec());

    let cycle = common::data_fixtures::graph(2, &[(0, 1, i64::MIN / 2), (1, 0, i64::MIN / 2)]);
    assert!(assert_ok(BellmanFord::shortest_paths(&cycle, 0)).has_negative_cycle);
    assert!(assert_ok(FloydWarshall::shortest_paths(&cycle)).has_negative_cycle);
}

#[test]
fn test_out_of_range_source() {
    let graph = graph(3, &[(0, 1, 1)]);

    assert_err_with(Dijkstra::shortest_paths(&graph, 3), "顶点越界");
    assert_err_with(BellmanFord::shortest_paths(&graph, 9), "顶点越界");
}

#[test]
fn test_runs_are_idempotent() {
    let graph = assert_ok(demo::bellman_ford_graph());

    assert_eq!(
        assert_ok(BellmanFord::shortest_paths(&graph, 0)),
        assert_ok(BellmanFord::shortest_paths(&graph, 0))
    );
    assert_eq!(
        assert_ok(FloydWarshall::shortest_paths(&graph)),
        assert_ok(FloydWarshall::shortest_paths(&graph))
    );

    let graph = assert_ok(demo::dijkstra_graph());
    assert_eq!(
        assert_ok(Dijkstra::shortest_paths(&graph, 4)),
        assert_ok(Dijkstra::shortest_paths(&graph, 4))
    );
}

// ==================== 随机图测试 ====================

#[test]
fn test_random_non_negative_dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let graph = random_non_negative_graph(&mut rng, 12, 0.25, 20);
        for source in 0..graph.vertex_count() {
            let dijkstra = assert_ok(Dijkstra::shortest_paths(&graph, source));
            let bellman_ford = assert_ok(BellmanFord::shortest_paths(&graph, source));
            assert_eq!(dijkstra.distances, bellman_ford.distances);

            for target in dijkstra.reachable_vertices() {
                let path = assert_found(assert_ok(dijkstra.path_to(target)));
                let expected = dijkstra.distances[target].value().expect("可达顶点应该有距离");
                assert_path_weight(&graph, &path, expected);
            }
        }
    }
}

#[test]
fn test_random_bellman_ford_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..40 {
        let graph = random_graph_without_negative_cycle(&mut rng, 6, 0.4, 10);
        for source in 0..graph.vertex_count() {
            let result = assert_ok(BellmanFord::shortest_paths(&graph, source));
            assert!(!result.has_negative_cycle);
            assert_distances(&result, &brute_force_distances(&graph, source));
        }
    }
}

#[test]
fn test_random_floyd_warshall_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..30 {
        let graph = random_graph_without_negative_cycle(&mut rng, 9, 0.3, 15);
        let all_pairs = assert_ok(FloydWarshall::shortest_paths(&graph));
        assert!(!all_pairs.has_negative_cycle);

        let from_each_vertex = assert_ok(MultiSourceShortestPath::all_pairs(
            &graph,
            SingleSourceAlgorithm::BellmanFord,
        ));
        assert_eq!(all_pairs.distances, from_each_vertex.distances);

        for source in 0..graph.vertex_count() {
            for target in 0..graph.vertex_count() {
                if let PathOutcome::Found(path) = assert_ok(all_pairs.path(&graph, source, target)) {
                    let expected = all_pairs.distances[source][target]
                        .value()
                        .expect("找到路径时应该有距离");
                    assert_path_weight(&graph, &path, expected);
                }
            }
        }
    }
}
