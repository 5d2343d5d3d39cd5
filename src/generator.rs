//! Random task generation.
//!
//! Produces raw records with values drawn uniformly from the ranges of a
//! [`GeneratorConfig`]. Pass a seeded RNG for reproducible batches.

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::models::RawTaskRecord;

/// Generates `count` random task records.
///
/// Records carry no `id` (the validator assigns positions). Ranges are
/// taken as-is; check them with [`GeneratorConfig::validate`] first if
/// they come from user input.
///
/// # Panics
/// Panics if a range in `config` is inverted (`min > max`).
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_energy_schedule::config::GeneratorConfig;
/// use u_energy_schedule::generator::generate_tasks;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let records = generate_tasks(5, &GeneratorConfig::default(), &mut rng);
/// assert_eq!(records.len(), 5);
/// ```
pub fn generate_tasks<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<RawTaskRecord> {
    (0..count)
        .map(|_| {
            RawTaskRecord::new(
                rng.random_range(config.arrival.as_range()),
                rng.random_range(config.burst.as_range()),
                rng.random_range(config.power.as_range()),
            )
            .with_priority(rng.random_range(config.priority.as_range()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_tasks;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneratorConfig::default();
        let tasks = validate_tasks(&generate_tasks(200, &config, &mut rng)).unwrap();

        assert_eq!(tasks.len(), 200);
        for t in &tasks {
            assert!(t.arrival() <= 20);
            assert!((1..=10).contains(&t.burst()));
            assert!((1..=5).contains(&t.power()));
            assert!((1..=5).contains(&t.priority()));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GeneratorConfig::default();
        let a = generate_tasks(20, &config, &mut StdRng::seed_from_u64(9));
        let b = generate_tasks(20, &config, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = GeneratorConfig::new()
            .with_arrival(3, 3)
            .with_burst(2, 2)
            .with_power(0, 0)
            .with_priority(-1, -1);
        let mut rng = StdRng::seed_from_u64(1);
        let tasks = validate_tasks(&generate_tasks(3, &config, &mut rng)).unwrap();

        for t in &tasks {
            assert_eq!(t.arrival(), 3);
            assert_eq!(t.burst(), 2);
            assert_eq!(t.power(), 0);
            assert_eq!(t.priority(), -1);
        }
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_tasks(0, &GeneratorConfig::default(), &mut rng).is_empty());
    }
}
