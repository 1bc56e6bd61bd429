/// Tolerance for comparing computed lengths, in inches.
pub const EPSILON: f32 = 1e-4;

/// Robust floating point comparison for layout calculations.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Collapses rounding noise around zero to exactly zero.
pub fn snap_to_zero(value: f32) -> f32 {
    if value.abs() < EPSILON { 0.0 } else { value }
}

/// `a >= b`, forgiving rounding noise.
pub fn approx_ge(a: f32, b: f32) -> bool {
    a >= b - EPSILON
}

/// Helper for comparing slices of lengths (e.g., block heights).
pub fn float_slices_fuzzy_eq(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_zero() {
        assert_eq!(snap_to_zero(5.7e-7), 0.0);
        assert_eq!(snap_to_zero(-3.0e-5), 0.0);
        assert_eq!(snap_to_zero(0.01), 0.01);
        assert_eq!(snap_to_zero(-0.5), -0.5);
    }
}
