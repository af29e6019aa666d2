use argminmax::ArgMinMax;

/// Largest value. `vec` must not be empty.
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Upper y bound for a bar chart: tallest bar plus a margin for value labels.
/// Falls back to 1.0 so an all-zero chart still has a visible axis.
pub fn padded_upper_bound(values: &[f64], headroom_pct: f64) -> f64 {
    if values.is_empty() {
        return 1.0;
    }
    let max = get_max(values);
    if max <= 0.0 {
        return 1.0;
    }
    max * (1.0 + headroom_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_max() {
        assert_eq!(get_max(&[3.0, 9.0, 1.0, 4.0]), 9.0);
    }

    #[test]
    fn test_padded_upper_bound() {
        assert!((padded_upper_bound(&[100.0, 200.0], 0.1) - 220.0).abs() < 1e-9);
        assert_eq!(padded_upper_bound(&[], 0.1), 1.0);
        assert_eq!(padded_upper_bound(&[0.0, 0.0], 0.1), 1.0);
    }
}
