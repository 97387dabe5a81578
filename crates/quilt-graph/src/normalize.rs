//! Adjacency normalization passes.
//!
//! Three independent transforms over any adjacency matrix, all
//! zero-safe: an all-zero row or zero-degree node normalizes to zero,
//! never to NaN or infinity.

use crate::matrix::AdjacencyMatrix;

/// Scale-invariant normalization: divide each row by its maximum, so
/// the strongest edge of every non-isolated node has weight 1.
///
/// Note this turns an undirected matrix into a directed one: the two
/// directions of an edge normalize against different row maxima.
pub fn scale_invariant(adj: &AdjacencyMatrix) -> AdjacencyMatrix {
    let n = adj.node_count();
    let mut out = AdjacencyMatrix::new(n);
    for i in 0..n {
        let row_max = adj.row(i).iter().cloned().fold(0.0f64, f64::max);
        if row_max > 0.0 {
            for j in 0..n {
                out.set(i, j, adj.get(i, j) / row_max);
            }
        }
    }
    out
}

/// Add `value` to every diagonal entry.
pub fn with_self_loops(adj: &AdjacencyMatrix, value: f64) -> AdjacencyMatrix {
    let mut out = adj.clone();
    for i in 0..adj.node_count() {
        out.set(i, i, adj.get(i, i) + value);
    }
    out
}

/// Symmetric normalization: `D^(-1/2) · A · D^(-1/2)` with `D` the
/// diagonal degree matrix. Zero-degree nodes keep all-zero rows and
/// columns.
pub fn symmetric_normalized(adj: &AdjacencyMatrix) -> AdjacencyMatrix {
    let n = adj.node_count();
    let d_inv_sqrt: Vec<f64> = (0..n)
        .map(|i| {
            let d = adj.degree(i);
            if d > 0.0 {
                1.0 / d.sqrt()
            } else {
                0.0
            }
        })
        .collect();

    let mut out = AdjacencyMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            out.set(i, j, d_inv_sqrt[i] * adj.get(i, j) * d_inv_sqrt[j]);
        }
    }
    out
}
