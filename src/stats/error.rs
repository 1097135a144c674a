use crate::{rank::round_to_three_places, Score};

/// Expects a sampled rank vector's scores and the iterated ones, indexed alike.
/// Returns (mean, median, max) absolute error and mean absolute percentage error.
pub fn mean_med_max_pctg_errors(approx: &[Score], exact: &[Score]) -> (f64, f64, f64, f64) {
    let mean = mean_abs_error(approx, exact);
    let median = median_abs_error(approx, exact);
    let max = max_abs_error(approx, exact);
    let percentage = mean_abs_pctg_error(approx, exact);
    (mean, median, max, percentage)
}

fn abs_errors(approximation: &[Score], truth: &[Score]) -> Vec<f64> {
    assert!(approximation.len() == truth.len());
    approximation
        .iter()
        .zip(truth.iter())
        .map(|(value, t)| (t - value).abs())
        .collect()
}

fn mean_abs_error(approximation: &[Score], truth: &[Score]) -> f64 {
    if approximation.is_empty() {
        return 0.0;
    }
    abs_errors(approximation, truth).iter().sum::<f64>() / approximation.len() as f64
}

fn median_abs_error(approximation: &[Score], truth: &[Score]) -> f64 {
    let mut abs_diff_pred_true = abs_errors(approximation, truth);
    if abs_diff_pred_true.is_empty() {
        return 0.0;
    }
    abs_diff_pred_true.sort_by(f64::total_cmp);
    let mid = abs_diff_pred_true.len() / 2;
    abs_diff_pred_true[mid]
}

/// Largest per-page disagreement
pub fn max_abs_error(approximation: &[Score], truth: &[Score]) -> f64 {
    abs_errors(approximation, truth)
        .into_iter()
        .fold(0.0, f64::max)
}

// Sensitive to relative errors, so small pages count as much as large ones.
fn mean_abs_pctg_error(approximation: &[Score], truth: &[Score]) -> f64 {
    if approximation.is_empty() {
        return 0.0;
    }
    let epsilon: f64 = f64::EPSILON; // keeps pages with zero rank defined
    let mut average_percentage_error = 0.0;
    for (value, t) in approximation.iter().zip(truth.iter()) {
        let abs_diff: f64 = (t - value).abs();
        let max = epsilon.max(*t);
        average_percentage_error += abs_diff / max;
    }
    round_to_three_places((1.0 / (approximation.len() as f64)) * average_percentage_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    // test cases from https://scikit-learn.org/stable/modules/model_evaluation.html
    #[test]
    fn mean_error() {
        let prediction = vec![3.0, -0.5, 2.0, 7.0];
        let truth = vec![2.5, 0.0, 2.0, 8.0];
        let actual = mean_abs_error(&prediction, &truth);
        let expected = 0.5;
        assert_eq!(expected, actual);
    }

    #[test]
    fn median_error() {
        let prediction = vec![2.5, 0.0, 2.0, 8.0];
        let truth = vec![3.0, -0.5, 2.0, 7.0];
        let actual = median_abs_error(&prediction, &truth);
        let expected = 0.5;
        assert_eq!(expected, actual);
    }

    #[test]
    fn max_error() {
        let prediction = vec![0.25, 0.25, 0.5];
        let truth = vec![0.2, 0.3, 0.5];
        let actual = max_abs_error(&prediction, &truth);
        approx::assert_abs_diff_eq!(0.05, actual, epsilon = 1e-12);
    }

    #[test]
    fn percentage_error() {
        let truth = vec![1.0, 10.0, 1e6];
        let prediction = vec![0.9, 15.0, 1.2e6];
        let actual = mean_abs_pctg_error(&prediction, &truth);
        let expected = 0.266;
        assert_eq!(expected, actual);
    }

    #[test]
    fn identical_vectors_have_no_error() {
        let ranks = vec![0.1, 0.2, 0.7];
        assert_eq!(
            (0.0, 0.0, 0.0, 0.0),
            mean_med_max_pctg_errors(&ranks, &ranks)
        );
    }

    #[test]
    fn empty_vectors_have_no_error() {
        assert_eq!((0.0, 0.0, 0.0, 0.0), mean_med_max_pctg_errors(&[], &[]));
    }
}
