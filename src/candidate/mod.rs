//! Candidate ranking and pruning.
//!
//! Includes descending-score ranking, center-form IoU, and greedy
//! non-maximum suppression.

pub(crate) mod iou;
pub(crate) mod nms;
pub(crate) mod rank;
