//! Batch extraction worker pool.
//!
//! The pipeline is data-parallel across images: every image's run is
//! independent and stateless, so a batch maps onto a small pool of
//! worker threads fed through a crossbeam channel. Workers pull image
//! indices, run the full pipeline, and send `(index, result)` pairs
//! back; results are reassembled in submission order. Dropping the
//! task sender shuts the pool down cleanly.

use quilt_core::{Image, PipelineError};
use quilt_segment::Segmentation;
use std::thread;

use crate::pipeline::{GraphPipeline, GraphSample};

/// Run the full pipeline over a batch of images on `workers` threads.
///
/// Returns one result per image, in input order. A failing image
/// carries its own error at its position; it does not abort the rest
/// of the batch.
///
/// `workers` is clamped to `[1, images.len()]`.
pub fn assemble_batch<S>(
    pipeline: &GraphPipeline<S>,
    images: &[Image],
    workers: usize,
) -> Vec<Result<GraphSample, PipelineError>>
where
    S: Segmentation + Sync,
{
    if images.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, images.len());

    let (task_tx, task_rx) = crossbeam_channel::bounded::<usize>(images.len());
    let (result_tx, result_rx) = crossbeam_channel::unbounded();

    let mut slots: Vec<Option<Result<GraphSample, PipelineError>>> =
        (0..images.len()).map(|_| None).collect();

    thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok(index) = task_rx.recv() {
                    let result = pipeline.assemble_graph(&images[index]);
                    if result_tx.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(task_rx);
        drop(result_tx);

        for index in 0..images.len() {
            // Capacity equals the batch size, so sends never block.
            task_tx
                .send(index)
                .expect("task channel open while workers run");
        }
        drop(task_tx);

        for (index, result) in result_rx.iter() {
            slots[index] = Some(result);
        }
    });

    slots
        .into_iter()
        .map(|slot| slot.expect("every image produces exactly one result"))
        .collect()
}
