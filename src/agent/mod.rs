//! Actor-critic policy agent
//!
//! # Architecture
//!
//! ```text
//! Observation
//!     │
//!     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ObservationEncoder                                         │
//! │  - scalar features [10]                                     │
//! │  - spatial features [height, width, 10]                     │
//! └─────────────────────────────────────────────────────────────┘
//!     │
//!     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PolicyModel                                                │
//! │  - (value, action probabilities, x, y) for a batch of one   │
//! └─────────────────────────────────────────────────────────────┘
//!     │
//!     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Agent::choose_action                                       │
//! │  - categorical sample over action probabilities             │
//! └─────────────────────────────────────────────────────────────┘
//!     │
//!     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ActionSpace                                                │
//! │  - action index → macro-action → FunctionCall               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod action_space;
pub mod actions;
#[allow(clippy::module_inception)]
mod agent;
pub mod encoder;
pub mod policy;
pub mod sampler;

// Burn-dependent modules
#[cfg(feature = "rl")]
pub mod model;

pub use action_space::ActionSpace;
pub use actions::{MacroAction, MacroActionType, MacroOutcome};
pub use agent::{Agent, SampledAction};
pub use encoder::{EncodedObservation, ObservationEncoder, ScalarFeatures};
pub use policy::{PolicyModel, PolicyOutput, UniformPolicy};
pub use sampler::Categorical;

#[cfg(feature = "rl")]
pub use model::{ActorCritic, ActorCriticConfig, BurnPolicy};
