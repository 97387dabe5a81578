//! Fixed-length strided node selection.

use quilt_core::Slot;

/// Select a fixed-length sequence of node indices ordered by rank.
///
/// `sequence[k]` is the node with the `k * stride`-th highest rank,
/// ties broken by ascending original index. When the graph runs out of
/// nodes the remaining entries are [`Slot::Padding`]; an out-of-range
/// index is never produced.
///
/// # Examples
///
/// ```
/// use quilt_core::Slot;
/// use quilt_field::node_sequence;
///
/// // Two real nodes, four requested: trailing entries pad.
/// let seq = node_sequence(&[1.0, 0.0], 4, 1);
/// assert_eq!(
///     seq,
///     vec![Slot::Node(0), Slot::Node(1), Slot::Padding, Slot::Padding],
/// );
/// ```
pub fn node_sequence(ranks: &[f64], num_nodes: usize, stride: usize) -> Vec<Slot> {
    let n = ranks.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]).then(a.cmp(&b)));

    (0..num_nodes)
        .map(|k| {
            let pos = k * stride;
            if pos < n {
                Slot::Node(order[pos])
            } else {
                Slot::Padding
            }
        })
        .collect()
}
