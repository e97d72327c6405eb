//! Policy model interface - the actor-critic network as seen by the agent

use std::path::Path;

use ndarray::{Array2, Array4};

use crate::infra::AgentError;

/// One forward pass for a batch of one
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyOutput {
    /// Critic's estimate of the state value
    pub value: f32,
    /// Probability of each discrete action
    pub action_probs: Vec<f32>,
    /// Normalized screen x coordinate in [0, 1]
    pub x: f32,
    /// Normalized screen y coordinate in [0, 1]
    pub y: f32,
}

/// An actor-critic network. Weights are owned by the implementation and
/// persisted through its own checkpoint format.
pub trait PolicyModel {
    /// scalar: [1, SCALAR_FEATURES], spatial: [1, height, width, SPATIAL_CHANNELS]
    fn forward(
        &self,
        scalar: &Array2<f32>,
        spatial: &Array4<f32>,
    ) -> Result<PolicyOutput, AgentError>;

    fn save(&self, path: &Path) -> Result<(), AgentError>;

    fn load(&mut self, path: &Path) -> Result<(), AgentError>;
}

/// Network stand-in that assigns every action the same probability
#[derive(Debug, Clone)]
pub struct UniformPolicy {
    n_actions: usize,
}

impl UniformPolicy {
    pub fn new(n_actions: usize) -> Self {
        Self { n_actions }
    }
}

impl PolicyModel for UniformPolicy {
    fn forward(
        &self,
        _scalar: &Array2<f32>,
        _spatial: &Array4<f32>,
    ) -> Result<PolicyOutput, AgentError> {
        let p = 1.0 / self.n_actions as f32;
        Ok(PolicyOutput {
            value: 0.0,
            action_probs: vec![p; self.n_actions],
            x: 0.5,
            y: 0.5,
        })
    }

    fn save(&self, path: &Path) -> Result<(), AgentError> {
        tracing::debug!("Uniform policy has no weights to save to {}", path.display());
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<(), AgentError> {
        tracing::debug!("Uniform policy has no weights to load from {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_policy_probabilities() {
        let policy = UniformPolicy::new(4);
        let output = policy
            .forward(&Array2::zeros((1, 10)), &Array4::zeros((1, 2, 2, 10)))
            .unwrap();
        assert_eq!(output.action_probs, vec![0.25; 4]);
        assert_eq!(output.value, 0.0);
    }
}
