//! Decoding of raw network output into ranked, suppressed candidates.
//!
//! The network emits one prediction per `(anchor, grid cell)` pair,
//! parameterized relative to the cell origin and the anchor dimensions.
//! Decoding applies the sigmoid/exp/softmax transform, ranks the resulting
//! candidates by combined confidence, and prunes overlaps with greedy NMS.
//! The raw buffer is never modified.

use crate::candidate::nms::suppress;
use crate::candidate::rank::Candidate;
use crate::diag::{DiagSink, NullSink, Severity};
use crate::tensor::TensorView;
use crate::util::math::{sigmoid, softmax_max};
use crate::util::{RegionBoxError, RegionBoxResult};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Anchor box template in grid-cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Anchor width in grid cells.
    pub width: f32,
    /// Anchor height in grid cells.
    pub height: f32,
}

impl Anchor {
    /// Creates an anchor from its width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Parses a flat interleaved `(w, h, w, h, ...)` sequence.
    pub fn from_flat(values: &[f32]) -> RegionBoxResult<Vec<Anchor>> {
        if values.len() % 2 != 0 {
            return Err(RegionBoxError::OddAnchorList { len: values.len() });
        }
        Ok(values
            .chunks_exact(2)
            .map(|pair| Anchor::new(pair[0], pair[1]))
            .collect())
    }
}

/// Read-only configuration the decoder needs from the network object.
pub trait NetworkInfo {
    /// Anchor templates, one per predictor.
    fn anchors(&self) -> &[Anchor];
    /// Number of object classes.
    fn num_classes(&self) -> usize;
    /// Number of anchors per grid cell.
    fn num_anchors(&self) -> usize;
}

/// Thresholds and execution options for decoding.
#[derive(Clone, Copy, Debug)]
pub struct DecoderConfig {
    /// Minimum combined score for a candidate to survive.
    pub conf_thresh: f32,
    /// IoU above which a lower-ranked overlap is suppressed.
    pub nms_thresh: f32,
    /// Decode batch images in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            conf_thresh: 0.25,
            nms_thresh: 0.4,
            parallel: false,
        }
    }
}

/// Decodes raw network output into per-image survivor lists.
pub struct BoxDecoder {
    anchors: Vec<Anchor>,
    num_classes: usize,
    config: DecoderConfig,
    sink: Box<dyn DiagSink>,
}

impl BoxDecoder {
    /// Creates a decoder from explicit anchors and class count.
    ///
    /// Thresholds outside `[0, 1]` are rejected up front.
    pub fn new(
        anchors: Vec<Anchor>,
        num_classes: usize,
        config: DecoderConfig,
    ) -> RegionBoxResult<Self> {
        validate_threshold("conf_thresh", config.conf_thresh)?;
        validate_threshold("nms_thresh", config.nms_thresh)?;
        Ok(Self {
            anchors,
            num_classes,
            config,
            sink: Box::new(NullSink),
        })
    }

    /// Creates a decoder from a network collaborator.
    ///
    /// The network's declared anchor count must match the anchors it exposes.
    pub fn from_network<N: NetworkInfo>(
        network: &N,
        config: DecoderConfig,
    ) -> RegionBoxResult<Self> {
        if network.anchors().len() != network.num_anchors() {
            return Err(RegionBoxError::AnchorCountMismatch {
                expected: network.num_anchors(),
                got: network.anchors().len(),
            });
        }
        Self::new(network.anchors().to_vec(), network.num_classes(), config)
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the anchor templates.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Returns the number of object classes.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Returns the channel count the output tensor must carry.
    pub fn expected_channels(&self) -> usize {
        self.anchors.len() * (5 + self.num_classes)
    }

    /// Decodes and suppresses a whole batch.
    ///
    /// Returns one survivor list per batch image, each in descending-score
    /// order. An empty batch or an image with no survivors yields empty
    /// output, not an error.
    pub fn decode(&self, output: TensorView<'_>) -> RegionBoxResult<Vec<Vec<Candidate>>> {
        if output.channels() != self.expected_channels() {
            return Err(RegionBoxError::ChannelMismatch {
                expected: self.expected_channels(),
                got: output.channels(),
            });
        }

        self.sink.log(
            Severity::Info,
            &format!(
                "decoding batch of {} ({}x{} grid, {} anchors, {} classes)",
                output.batch(),
                output.width(),
                output.height(),
                self.anchors.len(),
                self.num_classes
            ),
        );

        let decode_one = |b: usize| -> Vec<Candidate> {
            let candidates = decode_cells(&output, b, &self.anchors, self.num_classes);
            let survivors = suppress(&candidates, self.config.conf_thresh, self.config.nms_thresh);
            self.sink.log(
                Severity::Debug,
                &format!(
                    "image {b}: {} candidates, {} survivors",
                    candidates.len(),
                    survivors.len()
                ),
            );
            survivors
        };

        #[cfg(feature = "rayon")]
        if self.config.parallel {
            return Ok((0..output.batch()).into_par_iter().map(decode_one).collect());
        }

        Ok((0..output.batch()).map(decode_one).collect())
    }
}

fn validate_threshold(name: &'static str, value: f32) -> RegionBoxResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RegionBoxError::ThresholdOutOfRange { name, value });
    }
    Ok(())
}

/// Decodes every `(anchor, cell)` prediction of one batch image.
///
/// The result has exactly `anchors.len() * H * W` entries in contiguous
/// `(anchor, row, col)` order, so the position of a candidate is its linear
/// index `a*H*W + r*W + c`. `b` must be below `output.batch()` and
/// `output.channels()` must equal `anchors.len() * (5 + num_classes)`.
pub fn decode_cells(
    output: &TensorView<'_>,
    b: usize,
    anchors: &[Anchor],
    num_classes: usize,
) -> Vec<Candidate> {
    debug_assert!(b < output.batch());
    debug_assert_eq!(output.channels(), anchors.len() * (5 + num_classes));

    let height = output.height();
    let width = output.width();
    let stride = 5 + num_classes;

    let mut candidates = Vec::with_capacity(anchors.len() * height * width);
    let mut logits = vec![0.0f32; num_classes];

    for (a, anchor) in anchors.iter().enumerate() {
        let base = a * stride;
        for row in 0..height {
            for col in 0..width {
                let cx = (sigmoid(output.at(b, base, row, col)) + col as f32) / width as f32;
                let cy = (sigmoid(output.at(b, base + 1, row, col)) + row as f32) / height as f32;
                let w = output.at(b, base + 2, row, col).exp() * anchor.width / width as f32;
                let h = output.at(b, base + 3, row, col).exp() * anchor.height / height as f32;
                let objectness = sigmoid(output.at(b, base + 4, row, col));

                let (score, class_id) = if num_classes > 1 {
                    for (k, logit) in logits.iter_mut().enumerate() {
                        *logit = output.at(b, base + 5 + k, row, col);
                    }
                    let (max_prob, argmax) = softmax_max(&logits);
                    (objectness * max_prob, argmax)
                } else {
                    (objectness, 0)
                };

                candidates.push(Candidate {
                    cx,
                    cy,
                    w,
                    h,
                    score,
                    class_id,
                });
            }
        }
    }

    candidates
}
