//! Train actions - queue a unit from the selected production building

use rand::RngCore;

use crate::infra::{FunctionCall, Position, Queued, TrainableUnit, UnitType};
use crate::state::Observation;

use super::helpers::unit_type_is_selected;
use super::{MacroAction, MacroActionType, MacroOutcome};

#[derive(Debug, Clone)]
pub struct TrainUnitAction {
    pub unit: TrainableUnit,
    /// Building that must be selected first, if the game does not already
    /// gate the command through its available actions
    pub producer: Option<UnitType>,
}

impl TrainUnitAction {
    pub fn scv() -> Self {
        Self {
            unit: TrainableUnit::Scv,
            producer: None,
        }
    }

    pub fn marine() -> Self {
        Self {
            unit: TrainableUnit::Marine,
            producer: Some(UnitType::Barracks),
        }
    }
}

impl MacroAction for TrainUnitAction {
    fn precondition(&self, obs: &Observation) -> Result<(), MacroOutcome> {
        if let Some(producer) = self.producer {
            if !unit_type_is_selected(obs, producer) {
                return Err(MacroOutcome::PreconditionNotMet);
            }
        }
        if !obs.is_available(self.unit.function_id()) {
            return Err(MacroOutcome::ActionUnavailable);
        }
        Ok(())
    }

    fn perform(
        &self,
        _obs: &Observation,
        _target: Position,
        _rng: &mut dyn RngCore,
    ) -> FunctionCall {
        FunctionCall::TrainQuick {
            unit: self.unit,
            queued: Queued::Now,
        }
    }

    fn name(&self) -> String {
        format!("Train({:?})", self.unit)
    }

    fn action_type(&self) -> MacroActionType {
        match self.unit {
            TrainableUnit::Scv => MacroActionType::TrainScv,
            TrainableUnit::Marine => MacroActionType::TrainMarine,
        }
    }
}
