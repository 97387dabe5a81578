//! Error types for the Quilt graph-extraction pipeline.
//!
//! Organized by subsystem: segmentation (mask handling and superpixel
//! extraction), graph (adjacency and feature gathering), and
//! configuration. All variants represent caller bugs or malformed
//! input and are checked eagerly; none are retryable in-process.

use std::error::Error;
use std::fmt;

/// A buffer length does not match the dimensions it was declared with.
///
/// Returned by the [`Image`](crate::Image) and
/// [`LabelMask`](crate::LabelMask) constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeError {
    /// What was being constructed (e.g. `"image"`, `"label mask"`).
    pub what: &'static str,
    /// Expected buffer length for the declared dimensions.
    pub expected: usize,
    /// Actual buffer length supplied.
    pub actual: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} buffer has {} elements, dimensions require {}",
            self.what, self.actual, self.expected
        )
    }
}

impl Error for ShapeError {}

/// Errors from segmentation and superpixel extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// The label mask shape does not match the image shape.
    InvalidMask {
        /// Image dimensions as `(height, width)`.
        image: (usize, usize),
        /// Mask dimensions as `(height, width)`.
        mask: (usize, usize),
    },
    /// The mask contains no labels (empty image or zero-area mask).
    EmptySegmentation,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMask { image, mask } => write!(
                f,
                "label mask shape {}x{} does not match image shape {}x{}",
                mask.0, mask.1, image.0, image.1
            ),
            Self::EmptySegmentation => write!(f, "segmentation produced no labels"),
        }
    }
}

impl Error for SegmentError {}

/// Errors from adjacency construction and feature gathering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Feature-vector lengths differ across nodes.
    DimensionMismatch {
        /// Channel length of node 0.
        expected: usize,
        /// Channel length of the offending node.
        actual: usize,
        /// Index of the offending node.
        node: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                expected,
                actual,
                node,
            } => write!(
                f,
                "node {node} has {actual} feature channels, expected {expected}"
            ),
        }
    }
}

impl Error for GraphError {}

/// Errors from pipeline configuration.
///
/// All configuration is validated at pipeline construction so that a
/// mistyped policy name or degenerate size surfaces immediately rather
/// than mid-traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An unregistered node-labeling policy name was requested.
    UnknownLabeling {
        /// The requested policy name.
        name: String,
    },
    /// An unregistered neighborhood-assembly policy name was requested.
    UnknownAssembly {
        /// The requested policy name.
        name: String,
    },
    /// An unregistered adjacency-weighting policy name was requested.
    UnknownAdjacency {
        /// The requested policy name.
        name: String,
    },
    /// `neighborhood_size` must be at least 1.
    InvalidNeighborhoodSize {
        /// The rejected value.
        value: usize,
    },
    /// `num_nodes` must be at least 1.
    InvalidNumNodes {
        /// The rejected value.
        value: usize,
    },
    /// `node_stride` must be at least 1.
    InvalidStride {
        /// The rejected value.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabeling { name } => write!(f, "unknown node labeling '{name}'"),
            Self::UnknownAssembly { name } => {
                write!(f, "unknown neighborhood assembly '{name}'")
            }
            Self::UnknownAdjacency { name } => {
                write!(f, "unknown adjacency policy '{name}'")
            }
            Self::InvalidNeighborhoodSize { value } => {
                write!(f, "neighborhood_size must be >= 1, got {value}")
            }
            Self::InvalidNumNodes { value } => {
                write!(f, "num_nodes must be >= 1, got {value}")
            }
            Self::InvalidStride { value } => {
                write!(f, "node_stride must be >= 1, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Union of the subsystem errors, surfaced by the composed pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// Segmentation or superpixel extraction failed.
    Segment(SegmentError),
    /// Adjacency construction or feature gathering failed.
    Graph(GraphError),
    /// Configuration validation failed.
    Config(ConfigError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment(e) => write!(f, "segmentation failed: {e}"),
            Self::Graph(e) => write!(f, "graph construction failed: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Segment(e) => Some(e),
            Self::Graph(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<SegmentError> for PipelineError {
    fn from(e: SegmentError) -> Self {
        Self::Segment(e)
    }
}

impl From<GraphError> for PipelineError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_mask() {
        let e = SegmentError::InvalidMask {
            image: (4, 6),
            mask: (4, 5),
        };
        assert_eq!(
            e.to_string(),
            "label mask shape 4x5 does not match image shape 4x6"
        );
    }

    #[test]
    fn display_dimension_mismatch() {
        let e = GraphError::DimensionMismatch {
            expected: 2,
            actual: 3,
            node: 7,
        };
        assert_eq!(e.to_string(), "node 7 has 3 feature channels, expected 2");
    }

    #[test]
    fn pipeline_error_source_chains() {
        let e = PipelineError::Config(ConfigError::InvalidStride { value: 0 });
        assert!(e.source().is_some());
        assert!(e.to_string().contains("node_stride"));
    }

    #[test]
    fn from_impls_wrap_subsystem_errors() {
        let e: PipelineError = SegmentError::EmptySegmentation.into();
        assert_eq!(e, PipelineError::Segment(SegmentError::EmptySegmentation));
    }
}
