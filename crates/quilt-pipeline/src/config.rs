//! Pipeline configuration.

use quilt_core::ConfigError;
use quilt_field::{NeighborhoodAssembly, NodeLabeling};
use quilt_graph::AdjacencyPolicy;
use quilt_segment::{Connectivity, SegmentationParams};

/// Full configuration surface of the graph-extraction pipeline.
///
/// Validation is eager: [`PipelineConfig::validate`] runs at pipeline
/// construction, so a degenerate size or stride is rejected before any
/// image is processed. Policy names parse through each enum's
/// `FromStr`, which rejects unknown names at the same point.
///
/// # Examples
///
/// ```
/// use quilt_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.num_nodes, 100);
/// assert_eq!(config.neighborhood_size, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Node ranking policy. Default: identity.
    pub node_labeling: NodeLabeling,
    /// Length of the node sequence. Default: 100.
    pub num_nodes: usize,
    /// Stride through the ranked node order. Default: 1.
    pub node_stride: usize,
    /// Neighborhood selection policy. Default: by_weight.
    pub neighborhood_assembly: NeighborhoodAssembly,
    /// Neighbors collected per root, including the root. Default: 7.
    pub neighborhood_size: usize,
    /// Edge weighting policy. Default: unweighted.
    pub adjacency: AdjacencyPolicy,
    /// Pixel connectivity for neighbor discovery. Default: eight.
    pub connectivity: Connectivity,
    /// Parameters forwarded to the segmentation backend.
    pub segmentation: SegmentationParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            node_labeling: NodeLabeling::Identity,
            num_nodes: 100,
            node_stride: 1,
            neighborhood_assembly: NeighborhoodAssembly::ByWeight,
            neighborhood_size: 7,
            adjacency: AdjacencyPolicy::Unweighted,
            connectivity: Connectivity::Eight,
            segmentation: SegmentationParams::default(),
        }
    }
}

impl PipelineConfig {
    /// Check the numeric surface for degenerate values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_nodes == 0 {
            return Err(ConfigError::InvalidNumNodes {
                value: self.num_nodes,
            });
        }
        if self.node_stride == 0 {
            return Err(ConfigError::InvalidStride {
                value: self.node_stride,
            });
        }
        if self.neighborhood_size == 0 {
            return Err(ConfigError::InvalidNeighborhoodSize {
                value: self.neighborhood_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_num_nodes_is_rejected() {
        let config = PipelineConfig {
            num_nodes: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidNumNodes { value: 0 }
        );
    }

    #[test]
    fn zero_stride_is_rejected() {
        let config = PipelineConfig {
            node_stride: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidStride { value: 0 }
        );
    }

    #[test]
    fn zero_neighborhood_size_is_rejected() {
        let config = PipelineConfig {
            neighborhood_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidNeighborhoodSize { value: 0 }
        );
    }

    #[test]
    fn policy_names_resolve_through_from_str() {
        let config = PipelineConfig {
            node_labeling: "degree".parse().unwrap(),
            neighborhood_assembly: "nearest_scanline".parse().unwrap(),
            adjacency: "euclidean_distance".parse().unwrap(),
            ..Default::default()
        };
        assert_eq!(config.node_labeling, NodeLabeling::Degree);
        assert!("centrality".parse::<NodeLabeling>().is_err());
    }
}
