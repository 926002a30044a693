//! Custom test assertions

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-9_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

/// Assert a JSON array of history entries is ordered by `result`
pub fn assert_results_ordered(entries: &[serde_json::Value], descending: bool) {
    let results: Vec<f64> = entries
        .iter()
        .map(|e| e["result"].as_f64().expect("entry without numeric result"))
        .collect();

    for pair in results.windows(2) {
        if descending {
            assert!(pair[0] >= pair[1], "results not non-increasing: {:?}", results);
        } else {
            assert!(pair[0] <= pair[1], "results not non-decreasing: {:?}", results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_macro() {
        assert_approx_eq!(1.0, 1.0);
        assert_approx_eq!(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_approx_eq_failure() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn test_results_ordered() {
        let entries = vec![
            serde_json::json!({"result": 3.0}),
            serde_json::json!({"result": 3.0}),
            serde_json::json!({"result": 1.0}),
        ];
        assert_results_ordered(&entries, true);
    }
}
