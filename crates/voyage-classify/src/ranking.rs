use crate::error::{ClassifyError, Result};
use crate::labels::Labels;
use crate::prediction::Prediction;

/// Numerically stable softmax.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return vec![0.0; logits.len()];
    }

    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Pair every score with its label and keep the `top_k` best, highest first.
///
/// Equal scores keep model output order.
pub fn rank(scores: &[f32], labels: &Labels, top_k: usize) -> Result<Vec<Prediction>> {
    if scores.len() != labels.len() {
        return Err(ClassifyError::Model(format!(
            "model produced {} scores for {} labels",
            scores.len(),
            labels.len()
        )));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    Ok(order
        .into_iter()
        .take(top_k)
        .filter_map(|i| labels.get(i).map(|label| Prediction::new(label, scores[i])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }
}
