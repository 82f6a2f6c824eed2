use cv_version::{Comparison, MIN_SEGMENTS, Version};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use super::{Result, compare::print_comparison};
use crate::config::Config;

/// Generates a pair of versions and prints their comparison.
///
/// With `equal` set the right side is a copy of the left, so the result is always 0.
pub fn random(config: &Config, equal: bool, segments: usize, seed: Option<u64>) -> Result<()> {
    if (1..MIN_SEGMENTS).contains(&segments) {
        warn!("Versions with fewer than {MIN_SEGMENTS} segments cannot be parsed back by cv");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let left = Version::random_with_segments(&mut rng, segments)?;
    let right = if equal {
        left.clone()
    } else {
        Version::random_with_segments(&mut rng, segments)?
    };
    info!("Generated {left} and {right}");

    print_comparison(config, &Comparison::new(left, right))
}
