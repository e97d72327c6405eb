//! Move actions - send the current selection to a screen position

use rand::RngCore;

use crate::infra::{FunctionCall, Position, Queued, UnitType};
use crate::state::Observation;

use super::helpers::unit_type_is_selected;
use super::{MacroAction, MacroActionType, MacroOutcome};

#[derive(Debug, Clone)]
pub struct MoveSelectedAction {
    action_type: MacroActionType,
    pub unit_type: UnitType,
}

impl MoveSelectedAction {
    pub fn new(action_type: MacroActionType, unit_type: UnitType) -> Self {
        Self {
            action_type,
            unit_type,
        }
    }
}

impl MacroAction for MoveSelectedAction {
    fn precondition(&self, obs: &Observation) -> Result<(), MacroOutcome> {
        if unit_type_is_selected(obs, self.unit_type) {
            Ok(())
        } else {
            Err(MacroOutcome::PreconditionNotMet)
        }
    }

    fn perform(
        &self,
        _obs: &Observation,
        target: Position,
        _rng: &mut dyn RngCore,
    ) -> FunctionCall {
        FunctionCall::MoveScreen {
            queued: Queued::Now,
            target,
        }
    }

    fn name(&self) -> String {
        format!("Move({:?})", self.unit_type)
    }

    fn action_type(&self) -> MacroActionType {
        self.action_type
    }

    fn uses_target(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FeatureScreen, SelectedUnit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_move_marines_with_multi_select() {
        let mut obs = Observation::new(FeatureScreen::zeros(8, 8));
        obs.multi_select = vec![
            SelectedUnit::new(UnitType::Marine, 45),
            SelectedUnit::new(UnitType::Marine, 45),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let action = MoveSelectedAction::new(MacroActionType::MoveMarines, UnitType::Marine);
        let (call, outcome) = action.execute(&obs, Position::new(30, 2), &mut rng);
        assert_eq!(outcome, MacroOutcome::Executed);
        assert_eq!(
            call,
            FunctionCall::MoveScreen {
                queued: Queued::Now,
                target: Position::new(30, 2),
            }
        );

        let scv_move = MoveSelectedAction::new(MacroActionType::MoveScv, UnitType::Scv);
        let (call, outcome) = scv_move.execute(&obs, Position::new(30, 2), &mut rng);
        assert_eq!(call, FunctionCall::NoOp);
        assert_eq!(outcome, MacroOutcome::PreconditionNotMet);
    }
}
