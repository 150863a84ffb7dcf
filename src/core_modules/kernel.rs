// THEORY:
// The `BlurKernel` precomputes the 1-D Gaussian weight sequence the
// convolution engine reads on every tap. It is built once, owned as a plain
// value, and never mutated — there is no process-wide kernel state. One
// stored array serves both the -offset and +offset taps of a separable pass,
// which makes the kernel's symmetry structural rather than something to
// verify numerically.
//
// Key principles:
// 1.  Value ownership: `BlurKernel::build` returns the sequence; whoever
//     needs it holds it. Nothing is lazily initialized or global.
// 2.  No build-time normalization: the engine divides by the total weight
//     per pixel, so the stored weights are the raw Gaussian falloff.
// 3.  Exact channel arithmetic: weights are snapped to the fixed-point grid
//     of multiples of 2^-20. Products with 8-bit channel values and their
//     running sums then stay exact in f64, so a region of constant color
//     divides back to exactly its own value and survives the truncating
//     narrow unchanged. The snap moves any weight by less than 5e-7.

/// The tap radius used when no other radius is configured.
pub const DEFAULT_RADIUS: u32 = 50;

/// Default falloff steepness: sigma^2 = radius^2 * DEFAULT_SIGMA_SCALE.
pub const DEFAULT_SIGMA_SCALE: f64 = 0.125;

// 2^20. Weights become integer multiples of its reciprocal.
const WEIGHT_GRID: f64 = 1_048_576.0;

/// The symmetric 1-D Gaussian weight sequence for one blur radius.
///
/// `weights[i]` is the weight of the taps at offsets -(i+1) and +(i+1) from
/// the center pixel. The center tap itself has implicit weight 1.0 and is
/// not stored. Taps beyond the radius are truncated, not computed.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurKernel {
    radius: u32,
    weights: Vec<f64>,
}

impl BlurKernel {
    /// Builds the weight sequence `exp(-offset^2 / (2 * radius^2 * sigma_scale))`
    /// for offsets `1..=radius`.
    pub fn build(radius: u32, sigma_scale: f64) -> Self {
        assert!(radius >= 1, "blur radius must be at least 1");
        assert!(
            sigma_scale.is_finite() && sigma_scale > 0.0,
            "sigma scale must be > 0 and finite"
        );

        let two_sigma_squared = 2.0 * radius as f64 * radius as f64 * sigma_scale;
        let weights = (1..=radius)
            .map(|offset| {
                let offset = offset as f64;
                let weight = (-(offset * offset) / two_sigma_squared).exp();
                (weight * WEIGHT_GRID).round() / WEIGHT_GRID
            })
            .collect();

        Self { radius, weights }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The weight of the taps at +-`offset`, for `offset` in `1..=radius`.
    #[inline]
    pub fn weight(&self, offset: u32) -> f64 {
        self.weights[(offset - 1) as usize]
    }

    /// All stored weights in ascending tap order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The per-pixel normalization divisor: the implicit center weight 1.0
    /// plus 2x every tap weight, folded in ascending tap order — the same
    /// fold the engine performs while accumulating.
    pub fn total_weight(&self) -> f64 {
        let mut sum = 1.0;
        for weight in &self.weights {
            sum += 2.0 * weight;
        }
        sum
    }
}

impl Default for BlurKernel {
    fn default() -> Self {
        Self::build(DEFAULT_RADIUS, DEFAULT_SIGMA_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_one_weight_per_tap_offset() {
        let kernel = BlurKernel::build(50, DEFAULT_SIGMA_SCALE);
        assert_eq!(kernel.radius(), 50);
        assert_eq!(kernel.weights().len(), 50);
    }

    #[test]
    fn symmetry_is_structural() {
        // Both sides of the center read the same stored array, so the weight
        // for -offset is the weight for +offset by construction.
        let kernel = BlurKernel::build(10, DEFAULT_SIGMA_SCALE);
        for offset in 1..=10 {
            assert_eq!(kernel.weight(offset), kernel.weights()[(offset - 1) as usize]);
        }
    }

    #[test]
    fn falloff_is_strictly_decreasing_and_positive() {
        let kernel = BlurKernel::build(50, DEFAULT_SIGMA_SCALE);
        for pair in kernel.weights().windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(kernel.weights().iter().all(|&weight| weight > 0.0));
    }

    #[test]
    fn outermost_tap_is_exp_minus_four() {
        // With sigma^2 = radius^2 / 8, the tap at the radius always weighs
        // exp(-radius^2 / (radius^2 / 4)) = exp(-4), whatever the radius.
        let expected = (-4.0f64).exp();
        for radius in [1, 2, 10, 50] {
            let kernel = BlurKernel::build(radius, DEFAULT_SIGMA_SCALE);
            let outermost = kernel.weight(radius);
            assert!((outermost - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn weights_sit_on_the_fixed_point_grid() {
        let kernel = BlurKernel::build(50, DEFAULT_SIGMA_SCALE);
        for &weight in kernel.weights() {
            let scaled = weight * 1_048_576.0;
            assert_eq!(scaled, scaled.trunc());
        }
    }

    #[test]
    fn total_weight_matches_the_accumulation_fold() {
        let kernel = BlurKernel::build(5, DEFAULT_SIGMA_SCALE);
        let mut expected = 1.0;
        for offset in 1..=5 {
            expected += 2.0 * kernel.weight(offset);
        }
        assert_eq!(kernel.total_weight(), expected);
    }

    #[test]
    #[should_panic(expected = "blur radius must be at least 1")]
    fn rejects_zero_radius() {
        let _ = BlurKernel::build(0, DEFAULT_SIGMA_SCALE);
    }

    #[test]
    #[should_panic(expected = "sigma scale must be > 0 and finite")]
    fn rejects_non_positive_sigma_scale() {
        let _ = BlurKernel::build(10, 0.0);
    }
}
