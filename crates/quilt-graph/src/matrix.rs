//! Dense weighted adjacency matrix.

use quilt_core::ShapeError;

/// A dense, row-major `N×N` weighted adjacency matrix.
///
/// Entry `(i, j)` is 0 iff nodes `i` and `j` are not adjacent; positive
/// entries carry the weighting policy's edge weight. Weights are never
/// negative. The diagonal is zero unless a self-loop pass adds it.
///
/// # Examples
///
/// ```
/// use quilt_graph::AdjacencyMatrix;
///
/// let mut adj = AdjacencyMatrix::new(3);
/// adj.set_symmetric(0, 1, 2.5);
/// assert_eq!(adj.get(1, 0), 2.5);
/// assert_eq!(adj.degree(0), 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    n: usize,
    data: Vec<f64>,
}

impl AdjacencyMatrix {
    /// An all-zero `n×n` matrix.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Build from explicit rows. Returns [`ShapeError`] if any row's
    /// length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            if row.len() != n {
                return Err(ShapeError {
                    what: "adjacency row",
                    expected: n,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// The weight of edge `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Set the weight of edge `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, weight: f64) {
        self.data[i * self.n + j] = weight;
    }

    /// Set both `(i, j)` and `(j, i)` to `weight`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        self.set(i, j, weight);
        self.set(j, i, weight);
    }

    /// Row `i` as a slice of `n` weights.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Weighted degree of node `i` (sum of its row).
    pub fn degree(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Whether the matrix equals its transpose within `eps`.
    pub fn is_symmetric(&self, eps: f64) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if (self.get(i, j) - self.get(j, i)).abs() > eps {
                    return false;
                }
            }
        }
        true
    }

    /// The flat row-major weight buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}
