//! NoOp action - leave the game untouched for one tick

use rand::RngCore;

use crate::infra::{FunctionCall, Position};
use crate::state::Observation;

use super::{MacroAction, MacroActionType, MacroOutcome};

#[derive(Debug, Clone, Copy)]
pub struct NoOpAction;

impl MacroAction for NoOpAction {
    fn precondition(&self, _obs: &Observation) -> Result<(), MacroOutcome> {
        Ok(())
    }

    fn perform(
        &self,
        _obs: &Observation,
        _target: Position,
        _rng: &mut dyn RngCore,
    ) -> FunctionCall {
        FunctionCall::NoOp
    }

    fn name(&self) -> String {
        "NoOp".to_string()
    }

    fn action_type(&self) -> MacroActionType {
        MacroActionType::NoOp
    }
}
