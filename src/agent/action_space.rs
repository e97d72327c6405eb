//! Action space management - maps sampled action indices onto macro-actions

use rand::RngCore;

use crate::infra::{FunctionCall, Position};
use crate::state::Observation;

use super::actions::{MacroAction, MacroActionType, MacroOutcome, NoOpAction};

/// Dispatch table from action index to macro-action.
/// Indices past the macro-action library resolve to no-op.
#[derive(Debug)]
pub struct ActionSpace {
    actions: Vec<Box<dyn MacroAction>>,
}

impl ActionSpace {
    pub fn new(n_actions: usize) -> Self {
        let actions = (0..n_actions)
            .map(|index| match MacroActionType::from_index(index) {
                Some(action_type) => action_type.build(),
                None => Box::new(NoOpAction) as Box<dyn MacroAction>,
            })
            .collect();

        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn MacroAction> {
        self.actions.get(index).map(|action| action.as_ref())
    }

    /// Run the macro-action at `index`. Out-of-range indices are no-ops.
    pub fn dispatch(
        &self,
        index: usize,
        obs: &Observation,
        target: Position,
        rng: &mut dyn RngCore,
    ) -> (FunctionCall, MacroOutcome) {
        match self.get(index) {
            Some(action) => action.execute(obs, target, rng),
            None => (FunctionCall::NoOp, MacroOutcome::PreconditionNotMet),
        }
    }

    /// Which actions would currently execute rather than degrade to no-op
    pub fn mask(&self, obs: &Observation) -> Vec<bool> {
        self.actions
            .iter()
            .map(|action| action.precondition(obs).is_ok())
            .collect()
    }
}
