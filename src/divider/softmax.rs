/// Turns raw scores into probabilities. Shifted by the maximum so large raw
/// scores cannot overflow `exp`.
///
/// Non-finite scores get probability 0; if no score is finite the result is
/// uniform.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let max = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return vec![1.0 / scores.len() as f64; scores.len()];
    }
    let exps: Vec<f64> = scores
        .iter()
        .map(|&s| if s.is_finite() { (s - max).exp() } else { 0.0 })
        .collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the first maximum. NaN entries never win.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((probs[3] - 0.6439142598879722).abs() < 1e-12);
    }

    #[test]
    fn test_softmax_survives_large_scores() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert_eq!(probs, vec![0.5, 0.5]);
    }

    #[test]
    fn test_non_finite_scores_get_zero_probability() {
        let probs = softmax(&[f64::NAN, 1.0, f64::INFINITY, 1.0]);
        assert_eq!(probs, vec![0.0, 0.5, 0.0, 0.5]);
        assert_eq!(argmax(&probs), Some(1));
    }

    #[test]
    fn test_all_non_finite_scores_are_uniform() {
        let probs = softmax(&[f64::NAN, f64::NEG_INFINITY]);
        assert_eq!(probs, vec![0.5, 0.5]);
    }

    #[test]
    fn test_argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some(1));
        assert_eq!(argmax(&[f64::NAN, 0.1]), Some(1));
        assert_eq!(argmax(&[]), None);
    }
}
