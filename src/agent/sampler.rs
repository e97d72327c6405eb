//! Categorical sampling over action probabilities

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::infra::AgentError;

/// A categorical distribution built from a probability vector
#[derive(Debug, Clone)]
pub struct Categorical {
    index: WeightedIndex<f32>,
    probs: Vec<f32>,
}

impl Categorical {
    /// Probabilities need not sum to one but must be finite, non-negative
    /// and not all zero.
    pub fn new(probs: &[f32]) -> Result<Self, AgentError> {
        if let Some(bad) = probs.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(AgentError::InvalidDistribution(format!(
                "probability {} is not a finite non-negative number",
                bad
            )));
        }
        let index = WeightedIndex::new(probs)
            .map_err(|err| AgentError::InvalidDistribution(err.to_string()))?;

        Ok(Self {
            index,
            probs: probs.to_vec(),
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }

    /// Log-probability of an outcome under the normalized distribution
    pub fn log_prob(&self, outcome: usize) -> f32 {
        let total: f32 = self.probs.iter().sum();
        match self.probs.get(outcome) {
            Some(&p) if total > 0.0 => (p / total).ln(),
            _ => f32::NEG_INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_degenerate_distribution_always_samples_mass() {
        let dist = Categorical::new(&[0.0, 0.0, 1.0, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 2);
        }
        assert_eq!(dist.log_prob(2), 0.0);
        assert_eq!(dist.log_prob(0), f32::NEG_INFINITY);
    }

    #[test]
    fn test_rejects_invalid_probabilities() {
        assert!(matches!(
            Categorical::new(&[0.0, 0.0]),
            Err(AgentError::InvalidDistribution(_))
        ));
        assert!(Categorical::new(&[0.5, f32::NAN]).is_err());
        assert!(Categorical::new(&[1.5, -0.5]).is_err());
        assert!(Categorical::new(&[]).is_err());
    }

    #[test]
    fn test_unnormalized_weights() {
        let dist = Categorical::new(&[1.0, 3.0]).unwrap();
        assert!((dist.log_prob(0) - 0.25f32.ln()).abs() < 1e-6);
        assert!((dist.log_prob(1) - 0.75f32.ln()).abs() < 1e-6);
    }
}
