//! Chromatic cross-correlation matching
//!
//! Both chromatic channels arrive standardised (zero mean, unit standard
//! deviation), so their correlation is just the mean of their product.
//!
//! If `z1` and `z2` are uncorrelated standardised variables, then
//!
//! ```text
//! a1 = sqrt((1+R)/2)·z1 + sqrt((1-R)/2)·z2
//! a2 = sqrt((1+R)/2)·z1 - sqrt((1-R)/2)·z2
//! ```
//!
//! are standardised with correlation `R`. Inverting this for the target's
//! correlation and re-applying it with the source's gives a symmetric mix
//!
//! ```text
//! n1 = W1·a1 + W2·a2
//! n2 = W1·a2 + W2·a1
//! ```
//!
//! which keeps unit variance and moves the correlation to the source's. The
//! limited form caps `|W2|` at `limit·|W1|` and renormalises, so the result
//! keeps unit variance but only partly matches.

use reinhard_core::consts::MAX_CORRELATION;
use reinhard_core::Plane;

use crate::parallel;

/// Mean of the elementwise product of two standardised channels, clamped to
/// `±MAX_CORRELATION`
pub fn cross_correlation(a: &Plane, b: &Plane) -> f32 {
    let raw = parallel::zip_sum(a, b, |x, y| x as f64 * y as f64) / a.len() as f64;
    clamp_correlation(raw as f32)
}

/// Keep a correlation away from ±1, where the weight formulas divide by zero
pub fn clamp_correlation(r: f32) -> f32 {
    if r.is_nan() {
        return 0.0;
    }
    r.clamp(-MAX_CORRELATION, MAX_CORRELATION)
}

/// Weights of the symmetric channel mix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentWeights {
    pub w1: f32,
    pub w2: f32,
    /// Whether `W2` hit the limit and the pair was renormalised
    pub clamped: bool,
}

impl AdjustmentWeights {
    /// Weights that take a pair with correlation `target` to `source`,
    /// with `|W2|` capped at `limit·|W1|`
    pub fn solve(target: f32, source: f32, limit: f32) -> Self {
        let (t, s) = (clamp_correlation(target), clamp_correlation(source));

        let plus = 0.5 * ((1.0 + s) / (1.0 + t)).sqrt();
        let minus = 0.5 * ((1.0 - s) / (1.0 - t)).sqrt();
        let mut w1 = plus + minus;
        let mut w2 = plus - minus;

        let cap = limit * w1.abs();
        if w2.abs() > cap {
            w2 = cap.copysign(w2);
            let norm = 1.0 / (w1 * w1 + w2 * w2 + 2.0 * w1 * w2 * t).sqrt();
            w1 *= norm;
            w2 *= norm;
            return Self {
                w1,
                w2,
                clamped: true,
            };
        }

        Self {
            w1,
            w2,
            clamped: false,
        }
    }

    /// `[W1·a + W2·b, W1·b + W2·a]`
    pub fn apply(&self, a: &Plane, b: &Plane) -> [Plane; 2] {
        let (w1, w2) = (self.w1, self.w2);
        [
            parallel::zip_map(a, b, |x, y| w1 * x + w2 * y),
            parallel::zip_map(a, b, |x, y| w1 * y + w2 * x),
        ]
    }

    /// Correlation the mix produces from standardised inputs correlated at `r`
    #[cfg(test)]
    fn resulting_correlation(&self, r: f32) -> f32 {
        let (w1, w2) = (self.w1, self.w2);
        let cov = 2.0 * w1 * w2 + (w1 * w1 + w2 * w2) * r;
        let var = w1 * w1 + w2 * w2 + 2.0 * w1 * w2 * r;
        cov / var
    }
}

/// Result of one covariance adjustment
#[derive(Debug, Clone)]
pub struct CovarianceOutcome {
    pub planes: [Plane; 2],
    pub target_correlation: f32,
    pub source_correlation: f32,
    pub weights: AdjustmentWeights,
}

/// A strategy for moving the target's chromatic correlation toward the source's
pub trait CovarianceAdjustment: Send + Sync {
    /// Adjust two standardised target channels given the source correlation
    fn adjust(&self, target: [&Plane; 2], source_correlation: f32) -> CovarianceOutcome;
}

/// Symmetric mix with `|W2|` capped at `limit·|W1|`
///
/// A limit of 0 leaves the channels unchanged; 1 matches the source fully
/// unless the cap still binds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limited {
    pub limit: f32,
}

impl Limited {
    pub fn new(limit: f32) -> Self {
        Self { limit }
    }
}

impl CovarianceAdjustment for Limited {
    fn adjust(&self, [a, b]: [&Plane; 2], source_correlation: f32) -> CovarianceOutcome {
        let target_correlation = cross_correlation(a, b);
        let source_correlation = clamp_correlation(source_correlation);
        let weights = AdjustmentWeights::solve(target_correlation, source_correlation, self.limit);

        tracing::debug!(
            target_correlation,
            source_correlation,
            limit = self.limit,
            w1 = weights.w1,
            w2 = weights.w2,
            clamped = weights.clamped,
            "limited covariance adjustment"
        );

        CovarianceOutcome {
            planes: weights.apply(a, b),
            target_correlation,
            source_correlation,
            weights,
        }
    }
}

/// Full match: decorrelate the target pair into independent variables, then
/// recorrelate them at the source's correlation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Decorrelating;

impl CovarianceAdjustment for Decorrelating {
    fn adjust(&self, [a, b]: [&Plane; 2], source_correlation: f32) -> CovarianceOutcome {
        let t = cross_correlation(a, b);
        let s = clamp_correlation(source_correlation);

        let (tp, tq) = (((1.0 + t) / 2.0).sqrt(), ((1.0 - t) / 2.0).sqrt());
        let (sp, sq) = (((1.0 + s) / 2.0).sqrt(), ((1.0 - s) / 2.0).sqrt());

        let z1 = parallel::zip_map(a, b, |x, y| (x + y) / (2.0 * tp));
        let z2 = parallel::zip_map(a, b, |x, y| (x - y) / (2.0 * tq));

        let n1 = parallel::zip_map(&z1, &z2, |u, v| sp * u + sq * v);
        let n2 = parallel::zip_map(&z1, &z2, |u, v| sp * u - sq * v);

        let weights = AdjustmentWeights {
            w1: 0.5 * (sp / tp + sq / tq),
            w2: 0.5 * (sp / tp - sq / tq),
            clamped: false,
        };

        tracing::debug!(
            target_correlation = t,
            source_correlation = s,
            "decorrelating covariance adjustment"
        );

        CovarianceOutcome {
            planes: [n1, n2],
            target_correlation: t,
            source_correlation: s,
            weights,
        }
    }
}

/// Adjust the target pair against the source pair with the limited mix
pub fn adjust_covariance(target: [&Plane; 2], source: [&Plane; 2], limit: f32) -> [Plane; 2] {
    let source_correlation = cross_correlation(source[0], source[1]);
    Limited::new(limit).adjust(target, source_correlation).planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{standardize, ChannelStats};
    use reinhard_core::Dimensions;

    /// Deterministic pseudo-random samples (xorshift)
    fn noise(seed: u32, n: usize) -> Vec<f32> {
        let mut state = seed.max(1);
        (0..n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state as f32 / u32::MAX as f32) - 0.5
            })
            .collect()
    }

    /// A standardised pair with correlation near `mix`'s induced value
    fn correlated_pair(seed: u32, mix: f32, n: usize) -> [Plane; 2] {
        let dims = Dimensions::new(n as u32, 1);
        let u = noise(seed, n);
        let v = noise(seed.wrapping_mul(7919).wrapping_add(13), n);
        let a: Vec<f32> = u.clone();
        let b: Vec<f32> = u.iter().zip(&v).map(|(x, y)| mix * x + (1.0 - mix) * y).collect();

        let a = Plane::new(dims, a).unwrap();
        let b = Plane::new(dims, b).unwrap();
        [
            standardize(&a, &ChannelStats::of(&a)),
            standardize(&b, &ChannelStats::of(&b)),
        ]
    }

    #[test]
    fn test_weights_identity_when_correlations_agree() {
        let w = AdjustmentWeights::solve(0.3, 0.3, 1.0);
        assert!((w.w1 - 1.0).abs() < 1e-6);
        assert!(w.w2.abs() < 1e-6);
        assert!(!w.clamped);
    }

    #[test]
    fn test_unclamped_weights_hit_source_correlation() {
        for (t, s) in [(0.1, 0.6), (-0.4, 0.2), (0.7, -0.5)] {
            let w = AdjustmentWeights::solve(t, s, 10.0);
            assert!(!w.clamped);
            assert!((w.resulting_correlation(t) - s).abs() < 1e-5);
            // Unit variance preserved
            let var = w.w1 * w.w1 + w.w2 * w.w2 + 2.0 * w.w1 * w.w2 * t;
            assert!((var - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_clamped_weights_renormalise() {
        let t = 0.0;
        let w = AdjustmentWeights::solve(t, 0.8, 0.25);
        assert!(w.clamped);
        assert!((w.w2.abs() - 0.25 * w.w1.abs()).abs() < 1e-6);
        let var = w.w1 * w.w1 + w.w2 * w.w2 + 2.0 * w.w1 * w.w2 * t;
        assert!((var - 1.0).abs() < 1e-5);
        // Only part of the way to the source correlation
        let r = w.resulting_correlation(t);
        assert!(r > 0.0 && r < 0.8);
    }

    #[test]
    fn test_boundary_correlations_stay_finite() {
        let w = AdjustmentWeights::solve(1.0, -1.0, 1.0);
        assert!(w.w1.is_finite() && w.w2.is_finite());
        assert_eq!(clamp_correlation(f32::NAN), 0.0);
        assert_eq!(clamp_correlation(1.5), MAX_CORRELATION);
    }

    #[test]
    fn test_full_limit_preserves_variance_and_matches_source() {
        let [t1, t2] = correlated_pair(11, 0.2, 4096);
        let [s1, s2] = correlated_pair(23, 0.8, 4096);
        let scorr = cross_correlation(&s1, &s2);

        let [n1, n2] = adjust_covariance([&t1, &t2], [&s1, &s2], 1.0);

        let st1 = ChannelStats::of(&n1);
        let st2 = ChannelStats::of(&n2);
        assert!((st1.std_dev - 1.0).abs() < 1e-3, "std {}", st1.std_dev);
        assert!((st2.std_dev - 1.0).abs() < 1e-3, "std {}", st2.std_dev);
        assert!((cross_correlation(&n1, &n2) - scorr).abs() < 1e-3);
    }

    #[test]
    fn test_zero_limit_is_a_no_op() {
        let [t1, t2] = correlated_pair(5, 0.5, 2048);
        let [s1, s2] = correlated_pair(9, 0.9, 2048);
        let tcorr = cross_correlation(&t1, &t2);

        let outcome = Limited::new(0.0).adjust([&t1, &t2], cross_correlation(&s1, &s2));
        assert_eq!(outcome.weights.w2, 0.0);
        assert!((outcome.weights.w1 - 1.0).abs() < 1e-6);

        let [n1, n2] = &outcome.planes;
        for (a, b) in t1.as_slice().iter().zip(n1.as_slice()) {
            assert!((a - b).abs() < 1e-5);
        }
        for (a, b) in t2.as_slice().iter().zip(n2.as_slice()) {
            assert!((a - b).abs() < 1e-5);
        }
        assert!((cross_correlation(n1, n2) - tcorr).abs() < 1e-5);
    }

    #[test]
    fn test_decorrelating_matches_limited_at_full_strength() {
        let [t1, t2] = correlated_pair(41, 0.3, 1024);
        let [s1, s2] = correlated_pair(77, 0.6, 1024);
        let scorr = cross_correlation(&s1, &s2);

        let limited = Limited::new(1.0).adjust([&t1, &t2], scorr);
        assert!(!limited.weights.clamped);
        let full = Decorrelating.adjust([&t1, &t2], scorr);

        assert!((limited.weights.w1 - full.weights.w1).abs() < 1e-5);
        assert!((limited.weights.w2 - full.weights.w2).abs() < 1e-5);
        for k in 0..2 {
            for (a, b) in limited.planes[k].as_slice().iter().zip(full.planes[k].as_slice()) {
                assert!((a - b).abs() < 1e-4, "{} vs {}", a, b);
            }
        }
    }
}
