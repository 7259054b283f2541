//! Greedy non-maximum suppression over ranked candidates.

use crate::candidate::iou::bbox_iou;
use crate::candidate::rank::{rank_descending, Candidate};

/// Suppression state of a ranked candidate.
///
/// The reference behavior is expressed with an explicit state per rank
/// position rather than a negative-score sentinel, so a legitimately
/// negative-looking score can never be mistaken for "already suppressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SuppressionState {
    Active,
    Suppressed,
    Emitted,
}

/// Runs greedy NMS over one image's candidates.
///
/// Candidates are ranked by descending score (ties by original linear index)
/// and walked once. Each surviving candidate suppresses later still-active
/// candidates whose IoU with it exceeds `nms_thresh`. Because the ranking is
/// descending, the first score below `conf_thresh` ends the outer walk, and
/// the first below-threshold score ends each inner scan.
///
/// Suppression is class-agnostic: an overlap suppresses regardless of the
/// predicted class, matching the reference behavior.
///
/// Survivors are returned in descending-score order.
pub fn suppress(candidates: &[Candidate], conf_thresh: f32, nms_thresh: f32) -> Vec<Candidate> {
    let order = rank_descending(candidates);
    let mut state = vec![SuppressionState::Active; order.len()];
    let mut survivors = Vec::new();

    for i in 0..order.len() {
        if state[i] == SuppressionState::Suppressed {
            continue;
        }
        let winner = &candidates[order[i]];
        if winner.score < conf_thresh {
            break;
        }
        state[i] = SuppressionState::Emitted;
        survivors.push(*winner);

        for j in (i + 1)..order.len() {
            if state[j] == SuppressionState::Suppressed {
                continue;
            }
            let other = &candidates[order[j]];
            if other.score < conf_thresh {
                break;
            }
            if bbox_iou(winner, other) > nms_thresh {
                state[j] = SuppressionState::Suppressed;
            }
        }
    }

    survivors
}

#[cfg(test)]
mod tests {
    use super::suppress;
    use crate::candidate::rank::Candidate;

    fn candidate(cx: f32, cy: f32, score: f32) -> Candidate {
        Candidate {
            cx,
            cy,
            w: 0.2,
            h: 0.2,
            score,
            class_id: 0,
        }
    }

    #[test]
    fn empty_input_yields_no_survivors() {
        assert!(suppress(&[], 0.5, 0.4).is_empty());
    }

    #[test]
    fn below_threshold_candidates_never_survive() {
        let candidates = [candidate(0.2, 0.2, 0.4), candidate(0.8, 0.8, 0.6)];
        let survivors = suppress(&candidates, 0.5, 0.4);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].score, 0.6);
    }

    #[test]
    fn identical_boxes_keep_only_the_best() {
        let candidates = [candidate(0.5, 0.5, 0.7), candidate(0.5, 0.5, 0.9)];
        let survivors = suppress(&candidates, 0.1, 0.5);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].score, 0.9);
    }

    #[test]
    fn score_tie_keeps_lower_original_index() {
        let mut first = candidate(0.5, 0.5, 0.8);
        first.class_id = 1;
        let second = candidate(0.5, 0.5, 0.8);
        let survivors = suppress(&[first, second], 0.1, 0.5);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].class_id, 1);
    }

    #[test]
    fn disjoint_boxes_all_survive_in_score_order() {
        let candidates = [
            candidate(0.1, 0.1, 0.6),
            candidate(0.5, 0.5, 0.9),
            candidate(0.9, 0.9, 0.7),
        ];
        let survivors = suppress(&candidates, 0.1, 0.5);
        let scores: Vec<f32> = survivors.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![0.9, 0.7, 0.6]);
    }

    #[test]
    fn suppression_is_class_agnostic() {
        let mut cat = candidate(0.5, 0.5, 0.9);
        cat.class_id = 3;
        let mut dog = candidate(0.5, 0.5, 0.8);
        dog.class_id = 7;
        let survivors = suppress(&[cat, dog], 0.1, 0.5);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].class_id, 3);
    }

    #[test]
    fn suppressed_candidate_cannot_suppress_others() {
        // b overlaps both a and c beyond the threshold; c overlaps a only
        // slightly. Once a suppresses b, b must not take c down with it.
        let a = candidate(0.30, 0.5, 0.9);
        let b = candidate(0.40, 0.5, 0.8);
        let c = candidate(0.47, 0.5, 0.7);
        let survivors = suppress(&[a, b, c], 0.1, 0.3);
        let scores: Vec<f32> = survivors.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![0.9, 0.7]);
    }
}
