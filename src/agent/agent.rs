//! Policy agent - encodes observations, samples actions and issues commands

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::infra::{AgentConfig, AgentError, FunctionCall, Position};
use crate::state::Observation;

use super::action_space::ActionSpace;
use super::actions::{MacroActionType, MacroOutcome};
use super::encoder::{
    EncodedObservation, ObservationEncoder, SCALAR_FEATURES, SPATIAL_CHANNELS,
};
use super::policy::PolicyModel;
use super::sampler::Categorical;

/// Outcome of one `choose_action` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledAction {
    /// Index in [0, n_actions)
    pub index: usize,
    /// Normalized screen coordinates returned alongside the probabilities
    pub x: f32,
    pub y: f32,
    pub value: f32,
    pub log_prob: f32,
}

impl SampledAction {
    /// Target position on a screen of the given size
    pub fn target(&self, height: usize, width: usize) -> Position {
        Position::from_normalized(self.x, self.y, width, height)
    }
}

pub struct Agent<M: PolicyModel> {
    config: AgentConfig,
    model: M,
    encoder: ObservationEncoder,
    action_space: ActionSpace,
    rng: StdRng,
    /// Most recently sampled action, kept for inspection by callers
    last_action: Option<SampledAction>,
}

impl<M: PolicyModel> Agent<M> {
    pub fn new(config: AgentConfig, model: M) -> Result<Self, AgentError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            action_space: ActionSpace::new(config.n_actions),
            encoder: ObservationEncoder::new(),
            config,
            model,
            rng,
            last_action: None,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    pub fn last_action(&self) -> Option<SampledAction> {
        self.last_action
    }

    /// Run the network on a batch of one and sample an action index from
    /// the returned probabilities.
    pub fn choose_action(
        &mut self,
        encoded: &EncodedObservation,
    ) -> Result<SampledAction, AgentError> {
        if encoded.scalar.len() != SCALAR_FEATURES {
            return Err(AgentError::ShapeMismatch {
                what: "scalar features",
                expected: vec![SCALAR_FEATURES],
                actual: encoded.scalar.shape().to_vec(),
            });
        }
        if encoded.spatial.shape()[2] != SPATIAL_CHANNELS {
            return Err(AgentError::ShapeMismatch {
                what: "spatial features",
                expected: vec![
                    encoded.spatial.shape()[0],
                    encoded.spatial.shape()[1],
                    SPATIAL_CHANNELS,
                ],
                actual: encoded.spatial.shape().to_vec(),
            });
        }

        let output = self
            .model
            .forward(&encoded.scalar_batch(), &encoded.spatial_batch())?;
        debug!("action probabilities: {:?}", output.action_probs);

        if output.action_probs.len() != self.config.n_actions {
            return Err(AgentError::ShapeMismatch {
                what: "action probabilities",
                expected: vec![self.config.n_actions],
                actual: vec![output.action_probs.len()],
            });
        }

        let distribution = Categorical::new(&output.action_probs)?;
        let index = distribution.sample(&mut self.rng);
        let sampled = SampledAction {
            index,
            x: output.x,
            y: output.y,
            value: output.value,
            log_prob: distribution.log_prob(index),
        };
        self.last_action = Some(sampled);

        Ok(sampled)
    }

    pub fn save_models(&self) -> Result<(), AgentError> {
        info!("... saving models to {} ...", self.config.checkpoint_file);
        self.model.save(Path::new(&self.config.checkpoint_file))
    }

    pub fn load_models(&mut self) -> Result<(), AgentError> {
        info!("... loading models from {} ...", self.config.checkpoint_file);
        self.model.load(Path::new(&self.config.checkpoint_file))
    }

    /// Training hook. The network is trained elsewhere; this does nothing.
    pub fn learn(
        &mut self,
        _state: &Observation,
        reward: f32,
        _next_state: &Observation,
        done: bool,
    ) {
        trace!("learn: reward {}, done {}", reward, done);
    }

    /// Handle one environment tick: encode, sample, and answer with a command.
    ///
    /// Unless `dispatch_actions` is set the sampled action is only recorded
    /// and the answer is always a no-op.
    pub fn step(&mut self, obs: &Observation) -> Result<FunctionCall, AgentError> {
        let encoded = self.encoder.encode(obs)?;
        let sampled = self.choose_action(&encoded)?;
        let valid = self
            .action_space
            .mask(obs)
            .get(sampled.index)
            .copied()
            .unwrap_or(false);
        debug!(
            "sampled action {} at ({:.3}, {:.3}), value {:.3}, valid {}",
            sampled.index, sampled.x, sampled.y, sampled.value, valid
        );

        if !self.config.dispatch_actions {
            return Ok(FunctionCall::NoOp);
        }

        let target = sampled.target(obs.feature_screen.height(), obs.feature_screen.width());
        let (call, outcome) = self.dispatch(sampled.index, obs, target);
        if outcome != MacroOutcome::Executed {
            debug!(
                "{:?} downgraded to no-op: {:?}",
                MacroActionType::from_index(sampled.index),
                outcome
            );
        }
        Ok(call)
    }

    /// Run the macro-action at `index` against the observation
    pub fn dispatch(
        &mut self,
        index: usize,
        obs: &Observation,
        target: Position,
    ) -> (FunctionCall, MacroOutcome) {
        self.action_space.dispatch(index, obs, target, &mut self.rng)
    }

    fn macro_action(
        &mut self,
        action_type: MacroActionType,
        obs: &Observation,
        target: Position,
    ) -> FunctionCall {
        let (call, _) = action_type
            .build()
            .execute(obs, target, &mut self.rng);
        call
    }

    pub fn select_command(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::SelectCommandCenter, obs, Position::default())
    }

    pub fn train_scv(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::TrainScv, obs, Position::default())
    }

    pub fn select_scv(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::SelectScv, obs, Position::default())
    }

    pub fn move_scv(&mut self, obs: &Observation, position: impl Into<Position>) -> FunctionCall {
        self.macro_action(MacroActionType::MoveScv, obs, position.into())
    }

    pub fn build_baracks(
        &mut self,
        obs: &Observation,
        position: impl Into<Position>,
    ) -> FunctionCall {
        self.macro_action(MacroActionType::BuildBarracks, obs, position.into())
    }

    pub fn select_barracks(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::SelectBarracks, obs, Position::default())
    }

    pub fn build_supply(
        &mut self,
        obs: &Observation,
        position: impl Into<Position>,
    ) -> FunctionCall {
        self.macro_action(MacroActionType::BuildSupplyDepot, obs, position.into())
    }

    pub fn train_marine(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::TrainMarine, obs, Position::default())
    }

    pub fn select_all_marines(&mut self, obs: &Observation) -> FunctionCall {
        self.macro_action(MacroActionType::SelectAllMarines, obs, Position::default())
    }

    pub fn move_marines(
        &mut self,
        obs: &Observation,
        position: impl Into<Position>,
    ) -> FunctionCall {
        self.macro_action(MacroActionType::MoveMarines, obs, position.into())
    }

    pub fn no_op(&self) -> FunctionCall {
        FunctionCall::NoOp
    }
}
