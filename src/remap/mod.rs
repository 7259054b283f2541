//! Mapping of normalized candidates into original-image pixel space.
//!
//! Detection networks run on a fixed input size; the original image is
//! letterboxed into that size (scaled to fit, centered, padded). Remapping
//! undoes that embedding so boxes line up with the original image again.

use crate::candidate::rank::Candidate;

/// How image-space coordinates were embedded into network-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterboxTransform {
    /// Uniform scale applied to the image before padding.
    pub scale: f32,
    /// Horizontal padding in network pixels.
    pub pad_x: f32,
    /// Vertical padding in network pixels.
    pub pad_y: f32,
}

impl LetterboxTransform {
    /// The no-op transform (image already matches the network input).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            pad_x: 0.0,
            pad_y: 0.0,
        }
    }

    /// Derives the transform that embedded `img_size` into `net_size`.
    ///
    /// The image was scaled uniformly so the binding axis exactly fills the
    /// network input, then centered; padding is truncated to whole pixels the
    /// way the resize step truncates it.
    pub fn for_sizes(net_size: (u32, u32), img_size: (u32, u32)) -> Self {
        let (net_w, net_h) = net_size;
        let (im_w, im_h) = img_size;
        if im_w == net_w && im_h == net_h {
            return Self::identity();
        }

        let net_w = net_w as f32;
        let net_h = net_h as f32;
        let im_w = im_w as f32;
        let im_h = im_h as f32;
        let scale = if im_w / net_w >= im_h / net_h {
            net_w / im_w
        } else {
            net_h / im_h
        };
        Self {
            scale,
            pad_x: ((net_w - im_w * scale) / 2.0).floor(),
            pad_y: ((net_h - im_h * scale) / 2.0).floor(),
        }
    }
}

/// Final detection in original-image pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// X coordinate of the top-left corner.
    pub x_top_left: f32,
    /// Y coordinate of the top-left corner.
    pub y_top_left: f32,
    /// Box width in pixels.
    pub width: f32,
    /// Box height in pixels.
    pub height: f32,
    /// Confidence as a percentage in `[0, 100]`.
    pub confidence: f32,
    /// Index of the predicted class.
    pub class_id: usize,
    /// Human-readable class label, when a label map was supplied.
    pub label: Option<String>,
}

/// Converts survivors of one image into absolute bounding boxes.
///
/// `net_size` is the `(width, height)` the network ran at. When `img_size`
/// differs from it, the letterbox embedding is undone so coordinates land in
/// the original image; when absent, network pixels are returned as-is.
/// `label_map` resolves class indices to names; without a map (or for an
/// index beyond it) only the numeric `class_id` is carried.
pub fn to_bounding_boxes(
    survivors: &[Candidate],
    net_size: (u32, u32),
    img_size: Option<(u32, u32)>,
    label_map: Option<&[&str]>,
) -> Vec<BoundingBox> {
    let transform = match img_size {
        Some(size) => LetterboxTransform::for_sizes(net_size, size),
        None => LetterboxTransform::identity(),
    };
    let net_w = net_size.0 as f32;
    let net_h = net_size.1 as f32;

    survivors
        .iter()
        .map(|c| {
            let x_top_left = ((c.cx - c.w / 2.0) * net_w - transform.pad_x) / transform.scale;
            let y_top_left = ((c.cy - c.h / 2.0) * net_h - transform.pad_y) / transform.scale;
            BoundingBox {
                x_top_left,
                y_top_left,
                width: c.w * net_w / transform.scale,
                height: c.h * net_h / transform.scale,
                confidence: c.score * 100.0,
                class_id: c.class_id,
                label: label_map
                    .and_then(|map| map.get(c.class_id))
                    .map(|&name| name.to_owned()),
            }
        })
        .collect()
}
