//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphpath::{AllPairsResult, Distance, PathOutcome, ShortestPathResult, Weight, WeightedGraph};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言单源距离数组，None表示不可达
pub fn assert_distances(result: &ShortestPathResult, expected: &[Option<Weight>]) {
    let expected: Vec<Distance> = expected.iter().copied().map(Distance::from).collect();
    assert_eq!(
        result.distances, expected,
        "从顶点{}出发的距离不匹配",
        result.source
    );
}

/// 断言全源距离矩阵，None表示不可达
pub fn assert_matrix(result: &AllPairsResult, expected: &[Vec<Option<Weight>>]) {
    assert_eq!(result.vertex_count(), expected.len(), "矩阵阶数不匹配");
    for (i, row) in expected.iter().enumerate() {
        let row: Vec<Distance> = row.iter().copied().map(Distance::from).collect();
        assert_eq!(result.distances[i], row, "第{}行距离不匹配", i);
    }
}

/// 断言找到路径并返回路径顶点
pub fn assert_found(outcome: PathOutcome) -> Vec<usize> {
    match outcome {
        PathOutcome::Found(path) => path,
        other => panic!("应该找到路径, 实际是 {:?}", other),
    }
}

/// 断言路径是图中真实存在的路径，且总权重等于期望值
pub fn assert_path_weight(graph: &WeightedGraph, path: &[usize], expected: Weight) {
    let mut total = 0;
    for pair in path.windows(2) {
        let weight = graph
            .weight(pair[0], pair[1])
            .expect("路径顶点应该在范围内")
            .unwrap_or_else(|| panic!("边 {} -> {} 不存在", pair[0], pair[1]));
        total += weight;
    }
    assert_eq!(total, expected, "路径 {:?} 的总权重不匹配", path);
}
