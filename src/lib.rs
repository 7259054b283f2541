//! RegionBox decodes the raw output of grid-and-anchor detection networks
//! into filtered bounding boxes.
//!
//! The pipeline has four stages: a pure tensor decode (sigmoid/exp/softmax
//! per anchor and grid cell), deterministic confidence ranking, greedy
//! non-maximum suppression, and a coordinate remap that undoes letterbox
//! resizing. Batch images are decoded independently, with optional
//! parallelism via the `rayon` feature.

pub mod candidate;
pub mod decode;
pub mod diag;
pub mod remap;
pub mod tensor;
pub mod util;

pub use candidate::iou::bbox_iou;
pub use candidate::nms::suppress;
pub use candidate::rank::Candidate;
pub use decode::{decode_cells, Anchor, BoxDecoder, DecoderConfig, NetworkInfo};
pub use diag::{DiagSink, NullSink, Severity};
#[cfg(feature = "tracing")]
pub use diag::TracingSink;
pub use remap::{to_bounding_boxes, BoundingBox, LetterboxTransform};
pub use tensor::TensorView;
pub use util::{RegionBoxError, RegionBoxResult};
