//! Decoded candidates and deterministic score ranking.

use std::cmp::Ordering;

/// Decoded detection candidate in normalized image-fraction coordinates.
///
/// One candidate exists per `(anchor, grid cell)` pair. Coordinates are
/// center-form: `(cx, cy)` is the box center and `(w, h)` its size, all as
/// fractions of the network input. `score` is the combined
/// objectness-times-class confidence in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Box center x as a fraction of image width.
    pub cx: f32,
    /// Box center y as a fraction of image height.
    pub cy: f32,
    /// Box width as a fraction of image width.
    pub w: f32,
    /// Box height as a fraction of image height.
    pub h: f32,
    /// Combined confidence score.
    pub score: f32,
    /// Index of the winning class.
    pub class_id: usize,
}

/// Returns candidate indices ordered by descending score.
///
/// Ties are broken by the original linear index `a*H*W + r*W + c`, which is
/// the position in `candidates`, so the ordering is fully deterministic for
/// any input. The candidate list itself is left untouched.
pub(crate) fn rank_descending(candidates: &[Candidate]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .score
            .total_cmp(&candidates[a].score)
            .then_with(|| a.cmp(&b))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::{rank_descending, Candidate};

    fn candidate(score: f32) -> Candidate {
        Candidate {
            cx: 0.5,
            cy: 0.5,
            w: 0.1,
            h: 0.1,
            score,
            class_id: 0,
        }
    }

    #[test]
    fn ranks_by_descending_score() {
        let candidates = [candidate(0.2), candidate(0.9), candidate(0.5)];
        assert_eq!(rank_descending(&candidates), vec![1, 2, 0]);
    }

    #[test]
    fn ties_break_on_original_index() {
        let candidates = [candidate(0.5), candidate(0.9), candidate(0.5)];
        assert_eq!(rank_descending(&candidates), vec![1, 0, 2]);
    }
}
