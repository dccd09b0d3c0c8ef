//! Threshold-dispatched elementwise passes and reductions over planes
//!
//! Small planes run sequentially; anything at or above
//! `PARALLEL_THRESHOLD` samples is split across rayon workers. Reductions
//! accumulate in f64, so the parallel and sequential paths differ only by
//! summation order.

use rayon::prelude::*;
use reinhard_core::consts::PARALLEL_THRESHOLD;
use reinhard_core::Plane;

/// `f(x)` for every sample
pub fn map<F>(plane: &Plane, f: F) -> Plane
where
    F: Fn(f32) -> f32 + Sync + Send,
{
    let src = plane.as_slice();
    let data: Vec<f32> = if src.len() >= PARALLEL_THRESHOLD {
        src.par_iter().map(|&x| f(x)).collect()
    } else {
        src.iter().map(|&x| f(x)).collect()
    };
    Plane::with_data_of(plane, data)
}

/// `f(a, b)` for every pair of co-located samples
pub fn zip_map<F>(a: &Plane, b: &Plane, f: F) -> Plane
where
    F: Fn(f32, f32) -> f32 + Sync + Send,
{
    assert_eq!(a.dimensions, b.dimensions);

    let (sa, sb) = (a.as_slice(), b.as_slice());
    let data: Vec<f32> = if sa.len() >= PARALLEL_THRESHOLD {
        sa.par_iter().zip(sb.par_iter()).map(|(&x, &y)| f(x, y)).collect()
    } else {
        sa.iter().zip(sb.iter()).map(|(&x, &y)| f(x, y)).collect()
    };
    Plane::with_data_of(a, data)
}

/// Sum of `f(x)` over the plane
pub fn sum<F>(plane: &Plane, f: F) -> f64
where
    F: Fn(f32) -> f64 + Sync + Send,
{
    let src = plane.as_slice();
    if src.len() >= PARALLEL_THRESHOLD {
        src.par_iter().map(|&x| f(x)).sum()
    } else {
        src.iter().map(|&x| f(x)).sum()
    }
}

/// Sum of `f(a, b)` over co-located samples
pub fn zip_sum<F>(a: &Plane, b: &Plane, f: F) -> f64
where
    F: Fn(f32, f32) -> f64 + Sync + Send,
{
    assert_eq!(a.dimensions, b.dimensions);

    let (sa, sb) = (a.as_slice(), b.as_slice());
    if sa.len() >= PARALLEL_THRESHOLD {
        sa.par_iter().zip(sb.par_iter()).map(|(&x, &y)| f(x, y)).sum()
    } else {
        sa.iter().zip(sb.iter()).map(|(&x, &y)| f(x, y)).sum()
    }
}

/// Smallest and largest sample
pub fn min_max(plane: &Plane) -> (f32, f32) {
    let src = plane.as_slice();
    let identity = || (f32::INFINITY, f32::NEG_INFINITY);
    let merge = |a: (f32, f32), b: (f32, f32)| (a.0.min(b.0), a.1.max(b.1));

    if src.len() >= PARALLEL_THRESHOLD {
        src.par_iter()
            .fold(identity, |acc, &x| merge(acc, (x, x)))
            .reduce(identity, merge)
    } else {
        src.iter().fold(identity(), |acc, &x| merge(acc, (x, x)))
    }
}
