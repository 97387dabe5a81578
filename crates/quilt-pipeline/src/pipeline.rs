//! The composed image-to-graph pipeline.
//!
//! [`GraphPipeline`] wires the stages end to end: segmentation backend
//! → superpixel extraction → adjacency construction → node labeling →
//! sequence selection → neighborhood assembly. Each stage consumes
//! only the previous stage's output; the adjacency matrix is the
//! single shared artifact the ordering stages read.

use quilt_core::{FeatureVec, Image, LabelMask, PipelineError, Slot};
use quilt_field::{node_sequence, receptive_fields, ReceptiveField};
use quilt_graph::{build_adjacency, AdjacencyMatrix};
use quilt_segment::{extract_superpixels, Segmentation, NODE_CHANNELS};

use crate::config::PipelineConfig;

/// The extracted graph representation of one image.
///
/// `nodes` has one [`NODE_CHANNELS`]-wide feature vector per
/// superpixel; `sequence` and `neighborhoods` are fixed-size
/// regardless of how many superpixels the image produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSample {
    nodes: Vec<FeatureVec>,
    sequence: Vec<Slot>,
    neighborhoods: Vec<Vec<Slot>>,
}

impl GraphSample {
    /// Per-superpixel feature vectors in node-index order.
    pub fn nodes(&self) -> &[FeatureVec] {
        &self.nodes
    }

    /// The selected root sequence (`num_nodes` entries).
    pub fn sequence(&self) -> &[Slot] {
        &self.sequence
    }

    /// One neighborhood row per sequence entry
    /// (`num_nodes × neighborhood_size`).
    pub fn neighborhoods(&self) -> &[Vec<Slot>] {
        &self.neighborhoods
    }

    /// Materialize the `[num_nodes, neighborhood_size, NODE_CHANNELS]`
    /// receptive-field tensor.
    pub fn receptive_field(&self) -> ReceptiveField {
        receptive_fields(&self.nodes, &self.neighborhoods, NODE_CHANNELS)
            .expect("superpixel features always have NODE_CHANNELS entries")
    }
}

/// End-to-end pipeline over a segmentation backend.
pub struct GraphPipeline<S> {
    backend: S,
    config: PipelineConfig,
}

impl<S: Segmentation> GraphPipeline<S> {
    /// Build a pipeline, validating the configuration eagerly.
    pub fn new(backend: S, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Segment `image` and build its node features and adjacency.
    pub fn create_graph(
        &self,
        image: &Image,
    ) -> Result<(Vec<FeatureVec>, AdjacencyMatrix), PipelineError> {
        let mask = self.backend.segment(image, &self.config.segmentation)?;
        self.graph_from_mask(image, &mask)
    }

    /// Build node features and adjacency from a precomputed mask.
    pub fn graph_from_mask(
        &self,
        image: &Image,
        mask: &LabelMask,
    ) -> Result<(Vec<FeatureVec>, AdjacencyMatrix), PipelineError> {
        let superpixels = extract_superpixels(image, mask, self.config.connectivity)?;
        let nodes = superpixels.values().map(|sp| sp.features()).collect();
        let adjacency = build_adjacency(&superpixels, self.config.adjacency)?;
        Ok((nodes, adjacency))
    }

    /// Run the full pipeline on one image.
    pub fn assemble_graph(&self, image: &Image) -> Result<GraphSample, PipelineError> {
        let mask = self.backend.segment(image, &self.config.segmentation)?;
        self.assemble_from_mask(image, &mask)
    }

    /// Run the graph stages on a precomputed mask.
    pub fn assemble_from_mask(
        &self,
        image: &Image,
        mask: &LabelMask,
    ) -> Result<GraphSample, PipelineError> {
        let (nodes, adjacency) = self.graph_from_mask(image, mask)?;

        let ranks = self.config.node_labeling.ranks(&adjacency);
        let sequence = node_sequence(&ranks, self.config.num_nodes, self.config.node_stride);
        let neighborhoods = self.config.neighborhood_assembly.assemble(
            &adjacency,
            &sequence,
            self.config.neighborhood_size,
        )?;

        Ok(GraphSample {
            nodes,
            sequence,
            neighborhoods,
        })
    }
}
