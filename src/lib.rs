pub mod agent;
pub mod game;
pub mod infra;
pub mod state;

// Re-export commonly used types for convenience
pub use agent::{Agent, ObservationEncoder, PolicyModel, UniformPolicy};
pub use game::Game;
pub use infra::{AgentConfig, AgentError, Environment, FunctionCall, Position};
pub use state::Observation;
