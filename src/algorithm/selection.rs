//! Weighted random selection and weighted shuffling
//!
//! The traversal orders the four neighbors of every pixel by a weighted
//! shuffle: candidates are drawn without replacement, each draw choosing a
//! candidate with probability proportional to its share of the remaining
//! weight. Heavier directions tend to come first without being deterministic.

use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Pick an index with probability proportional to its weight
///
/// Draws a number in `[0, total)` and returns the index whose cumulative
/// interval contains it. When every weight is zero the choice is uniform.
/// Negative or non-numeric weights count as zero. Returns `None` for an empty
/// slice.
pub fn weighted_random_index<W, R>(weights: &[W], rng: &mut R) -> Option<usize>
where
    W: ToPrimitive,
    R: Rng + ?Sized,
{
    if weights.is_empty() {
        return None;
    }

    let weights: Vec<f64> = weights.iter().map(weight_value).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Some(rng.random_range(0..weights.len()));
    }

    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if target < cumulative {
            return Some(i);
        }
    }

    // Rounding can leave the target just past the last boundary
    weights.iter().rposition(|&w| w > 0.0)
}

/// Produce a weight-biased random permutation of `items`
///
/// Items are paired with weights positionally; extra items or weights beyond
/// the shorter of the two are dropped. Each step draws one of the remaining
/// candidates with [`weighted_random_index`] and removes it, so the cost is
/// quadratic in the number of items.
pub fn weighted_shuffle<T, W, R>(items: &[T], weights: &[W], rng: &mut R) -> Vec<T>
where
    T: Clone,
    W: ToPrimitive,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<(T, f64)> = items
        .iter()
        .cloned()
        .zip(weights.iter().map(weight_value))
        .collect();
    let mut result = Vec::with_capacity(candidates.len());

    while !candidates.is_empty() {
        let remaining: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
        let Some(index) = weighted_random_index(&remaining, rng) else {
            break;
        };
        if index >= candidates.len() {
            break;
        }
        result.push(candidates.remove(index).0);
    }

    result
}

fn weight_value<W: ToPrimitive>(weight: &W) -> f64 {
    weight
        .to_f64()
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(0.0)
}

/// Seeded random source for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted random permutation of `items`
    pub fn weighted_shuffle<T: Clone, W: ToPrimitive>(&mut self, items: &[T], weights: &[W]) -> Vec<T> {
        weighted_shuffle(items, weights, &mut self.rng)
    }

    /// Mutable access to the underlying generator
    pub const fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
