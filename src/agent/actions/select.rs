//! Select actions - click on a random visible unit of a given type

use rand::RngCore;

use crate::infra::{FunctionCall, Position, SelectPointAct, UnitType};
use crate::state::Observation;

use super::helpers::random_unit_position;
use super::{MacroAction, MacroActionType, MacroOutcome};

#[derive(Debug, Clone)]
pub struct SelectUnitAction {
    action_type: MacroActionType,
    pub unit_type: UnitType,
    pub mode: SelectPointAct,
}

impl SelectUnitAction {
    pub fn new(action_type: MacroActionType, unit_type: UnitType, mode: SelectPointAct) -> Self {
        Self {
            action_type,
            unit_type,
            mode,
        }
    }
}

impl MacroAction for SelectUnitAction {
    fn precondition(&self, obs: &Observation) -> Result<(), MacroOutcome> {
        if obs.feature_units.iter().any(|unit| unit.is_type(self.unit_type)) {
            Ok(())
        } else {
            Err(MacroOutcome::PreconditionNotMet)
        }
    }

    fn perform(
        &self,
        obs: &Observation,
        _target: Position,
        rng: &mut dyn RngCore,
    ) -> FunctionCall {
        match random_unit_position(obs, self.unit_type, rng) {
            Some(target) => FunctionCall::SelectPoint {
                mode: self.mode,
                target,
            },
            None => FunctionCall::NoOp,
        }
    }

    fn name(&self) -> String {
        format!("Select({:?}, {})", self.unit_type, self.mode.as_str_name())
    }

    fn action_type(&self) -> MacroActionType {
        self.action_type
    }
}
