//! Sample-grid helpers for reactor IVP tasks.

use crate::ReactorsIVP::IsomReactorIVP::ReactorError;

/// Half-open arithmetic grid: start, start + step, ... up to but excluding stop.
///
/// Degenerate inputs (non-positive step, non-finite bounds, stop ≤ start) yield an
/// empty grid, which `validate_grid` rejects before any solver runs.
pub fn arange_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if stop <= start {
        return Vec::new();
    }
    // tolerate representation error when (stop - start) is a near-exact multiple of step
    let n = ((stop - start) / step - 1e-10).floor() as usize + 1;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Evenly spaced grid of n points with both endpoints included; the last point is
/// set to stop exactly.
pub fn linspace_grid(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

/// Validate a requested sample grid
///
/// Checks:
/// - at least two sample points
/// - every point is finite
/// - points are strictly increasing
pub fn validate_grid(grid: &[f64]) -> Result<(), ReactorError> {
    if grid.is_empty() {
        return Err(ReactorError::MalformedGrid("empty sample grid".to_string()));
    }
    if grid.len() < 2 {
        return Err(ReactorError::MalformedGrid(format!(
            "grid must contain at least two sample points, got {}",
            grid.len()
        )));
    }
    for (i, x) in grid.iter().enumerate() {
        if !x.is_finite() {
            return Err(ReactorError::MalformedGrid(format!(
                "non-finite sample point at index {}",
                i
            )));
        }
    }
    for pair in grid.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ReactorError::MalformedGrid(format!(
                "sample points must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

/////////////////////////////////////////TESTS/////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arange_excludes_stop() {
        // the volume grid of the study: 0, 0.1, ..., 5.0
        let grid = arange_grid(0.0, 5.1, 0.1);
        assert_eq!(grid.len(), 51);
        assert_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[50], 5.0, max_relative = 1e-12);

        // an exact multiple of the step is excluded as well
        let grid = arange_grid(0.0, 5.0, 0.1);
        assert_eq!(grid.len(), 50);
        assert_relative_eq!(grid[49], 4.9, max_relative = 1e-12);
    }

    #[test]
    fn arange_degenerate_inputs_yield_empty_grid() {
        assert!(arange_grid(0.0, 5.0, 0.0).is_empty());
        assert!(arange_grid(0.0, 5.0, -0.1).is_empty());
        assert!(arange_grid(5.0, 0.0, 0.1).is_empty());
        assert!(arange_grid(0.0, f64::NAN, 0.1).is_empty());
    }

    #[test]
    fn linspace_hits_both_endpoints() {
        // the length grid of the study
        let grid = linspace_grid(0.0, 1.5923, 10);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[9], 1.5923);
        assert_relative_eq!(grid[1], 1.5923 / 9.0, max_relative = 1e-12);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace_grid(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace_grid(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn validate_rejects_malformed_grids() {
        assert!(matches!(
            validate_grid(&[]),
            Err(ReactorError::MalformedGrid(_))
        ));
        assert!(matches!(
            validate_grid(&[1.0]),
            Err(ReactorError::MalformedGrid(_))
        ));
        assert!(matches!(
            validate_grid(&[0.0, 1.0, 0.5]),
            Err(ReactorError::MalformedGrid(_))
        ));
        assert!(matches!(
            validate_grid(&[0.0, 0.0, 1.0]),
            Err(ReactorError::MalformedGrid(_))
        ));
        assert!(matches!(
            validate_grid(&[0.0, f64::NAN, 1.0]),
            Err(ReactorError::MalformedGrid(_))
        ));
    }

    #[test]
    fn validate_accepts_strictly_increasing_grid() {
        assert!(validate_grid(&[0.0, 0.2, 0.5, 1.7]).is_ok());
        assert!(validate_grid(&arange_grid(0.0, 5.1, 0.1)).is_ok());
        assert!(validate_grid(&linspace_grid(0.0, 1.5923, 10)).is_ok());
    }
}
