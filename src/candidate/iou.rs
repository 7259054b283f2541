//! Intersection-over-union for center-form boxes.

use crate::candidate::rank::Candidate;

/// Computes IoU between two center-form boxes.
///
/// Uses the enclosing-extents identity: the union width/height is the span of
/// both boxes' corners, and the intersection width/height falls out as
/// `w1 + w2 - union_w` / `h1 + h2 - union_h`. For overlapping boxes this is
/// equal to the usual min/max overlap formula; a non-positive intersection
/// dimension means the boxes are disjoint on that axis.
pub fn bbox_iou(a: &Candidate, b: &Candidate) -> f32 {
    let min_x = (a.cx - a.w / 2.0).min(b.cx - b.w / 2.0);
    let max_x = (a.cx + a.w / 2.0).max(b.cx + b.w / 2.0);
    let min_y = (a.cy - a.h / 2.0).min(b.cy - b.h / 2.0);
    let max_y = (a.cy + a.h / 2.0).max(b.cy + b.h / 2.0);

    let union_w = max_x - min_x;
    let union_h = max_y - min_y;
    let iw = a.w + b.w - union_w;
    let ih = a.h + b.h - union_h;
    if iw <= 0.0 || ih <= 0.0 {
        return 0.0;
    }

    let inter = iw * ih;
    let union = a.w * a.h + b.w * b.h - inter;
    inter / union
}
