use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

use super::distance::Weight;

/// A directed weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, destination, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// Immutable weighted directed graph over vertices `0..vertex_count`
///
/// Backed by a dense row-major adjacency matrix. An absent edge (`None`) is
/// distinct from a zero-weight edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    vertex_count: usize,
    adjacency: Vec<Option<Weight>>,
}

impl WeightedGraph {
    /// Build a graph from a directed edge list
    ///
    /// Fails on out-of-range endpoints and on parallel edges.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut adjacency = vec![None; vertex_count * vertex_count];

        for edge in edges {
            let edge = edge.into();
            GraphError::check_vertex(edge.source, vertex_count)?;
            GraphError::check_vertex(edge.destination, vertex_count)?;

            let slot = &mut adjacency[edge.source * vertex_count + edge.destination];
            if slot.is_some() {
                return Err(GraphError::DuplicateEdge {
                    from: edge.source,
                    to: edge.destination,
                });
            }
            *slot = Some(edge.weight);
        }

        Ok(Self {
            vertex_count,
            adjacency,
        })
    }

    /// Build a graph where each edge is traversable in both directions
    pub fn from_undirected_edges<I, E>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut directed = Vec::new();
        for edge in edges {
            let edge = edge.into();
            directed.push(edge);
            if edge.source != edge.destination {
                directed.push(Edge::new(edge.destination, edge.source, edge.weight));
            }
        }
        Self::from_edges(vertex_count, directed)
    }

    /// Build a graph from a square adjacency matrix, `None` meaning no edge
    pub fn from_matrix(rows: &[Vec<Option<Weight>>]) -> GraphResult<Self> {
        let vertex_count = rows.len();
        let mut adjacency = Vec::with_capacity(vertex_count * vertex_count);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != vertex_count {
                return Err(GraphError::InvalidGraph(format!(
                    "邻接矩阵第{}行长度为{}，应为{}",
                    i,
                    row.len(),
                    vertex_count
                )));
            }
            adjacency.extend_from_slice(row);
        }

        Ok(Self {
            vertex_count,
            adjacency,
        })
    }

    /// Build a graph from a square matrix where `no_edge` marks absent edges
    pub fn from_marked_matrix(rows: &[Vec<Weight>], no_edge: Weight) -> GraphResult<Self> {
        let converted: Vec<Vec<Option<Weight>>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&w| if w == no_edge { None } else { Some(w) })
                    .collect()
            })
            .collect();
        Self::from_matrix(&converted)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Weight of the edge `u -> v`, `None` if there is no such edge
    pub fn weight(&self, u: usize, v: usize) -> GraphResult<Option<Weight>> {
        GraphError::check_vertex(u, self.vertex_count)?;
        GraphError::check_vertex(v, self.vertex_count)?;
        Ok(self.adjacency[u * self.vertex_count + v])
    }

    /// All edges in row-major order
    ///
    /// The order is fixed, so relaxation sequences that depend on it are
    /// reproducible. Call again (or clone the iterator) to restart.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            graph: self,
            cursor: 0,
            remaining: self.edge_count(),
        }
    }

    /// Outgoing edges of `u` as `(destination, weight)` in destination order
    pub fn neighbors(&self, u: usize) -> GraphResult<Neighbors<'_>> {
        GraphError::check_vertex(u, self.vertex_count)?;
        let row = &self.adjacency[u * self.vertex_count..(u + 1) * self.vertex_count];
        Ok(Neighbors {
            row: row.iter().enumerate(),
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|w| w.is_some()).count()
    }

    /// Smallest edge weight in the graph
    pub fn min_weight(&self) -> Option<Weight> {
        self.adjacency.iter().flatten().copied().min()
    }

    /// First negative edge in enumeration order, if any
    pub fn first_negative_edge(&self) -> Option<Edge> {
        self.edges().find(|edge| edge.weight < 0)
    }
}

/// Row-major edge iterator over a [`WeightedGraph`]
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    graph: &'a WeightedGraph,
    cursor: usize,
    remaining: usize,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.graph.vertex_count;
        while self.cursor < self.graph.adjacency.len() {
            let index = self.cursor;
            self.cursor += 1;
            if let Some(weight) = self.graph.adjacency[index] {
                self.remaining -= 1;
                return Some(Edge::new(index / n, index % n, weight));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}

/// Outgoing edges of a single vertex
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    row: std::iter::Enumerate<std::slice::Iter<'a, Option<Weight>>>,
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, Weight);

    fn next(&mut self) -> Option<(usize, Weight)> {
        self.row
            .by_ref()
            .find_map(|(v, w)| w.map(|weight| (v, weight)))
    }
}
