use crate::state::Observation;

use super::{AgentError, FunctionCall};

/// Result of advancing the environment by one tick
#[derive(Debug, Clone)]
pub struct TimeStep {
    pub observation: Observation,
    pub reward: f32,
    /// True on the final step of an episode
    pub last: bool,
}

/// The game the agent plays against. Yields observations and accepts one
/// command per tick.
pub trait Environment {
    /// Start a new episode and return its first observation
    fn reset(&mut self) -> Result<Observation, AgentError>;

    /// Apply a command and advance one tick
    fn step(&mut self, call: FunctionCall) -> Result<TimeStep, AgentError>;

    /// Screen size as (height, width)
    fn screen_size(&self) -> (usize, usize);
}
