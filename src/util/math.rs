//! Numeric helpers for decoding activations.

/// Logistic sigmoid.
pub(crate) fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Numerically stable softmax over `logits`, returning `(max_prob, argmax)`.
///
/// Only the winning probability and its index are needed downstream, so the
/// full probability vector is never materialized. The max logit is subtracted
/// before exponentiation, which makes the winning term `exp(0) == 1` and the
/// result `1 / sum(exp(logit - max))`.
pub(crate) fn softmax_max(logits: &[f32]) -> (f32, usize) {
    debug_assert!(!logits.is_empty());
    let mut argmax = 0usize;
    let mut max = logits[0];
    for (idx, &logit) in logits.iter().enumerate().skip(1) {
        if logit > max {
            max = logit;
            argmax = idx;
        }
    }

    let mut sum = 0.0f32;
    for &logit in logits {
        sum += (logit - max).exp();
    }
    (1.0 / sum, argmax)
}
