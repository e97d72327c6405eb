//! Build actions - order the selected SCV to place a structure

use rand::RngCore;

use crate::infra::{FunctionCall, Position, Queued, Structure, UnitType};
use crate::state::Observation;

use super::helpers::unit_type_is_selected;
use super::{MacroAction, MacroActionType, MacroOutcome};

#[derive(Debug, Clone)]
pub struct BuildStructureAction {
    pub structure: Structure,
}

impl BuildStructureAction {
    pub fn barracks() -> Self {
        Self {
            structure: Structure::Barracks,
        }
    }

    pub fn supply_depot() -> Self {
        Self {
            structure: Structure::SupplyDepot,
        }
    }
}

impl MacroAction for BuildStructureAction {
    fn precondition(&self, obs: &Observation) -> Result<(), MacroOutcome> {
        if !unit_type_is_selected(obs, UnitType::Scv) {
            return Err(MacroOutcome::PreconditionNotMet);
        }
        if !obs.is_available(self.structure.function_id()) {
            return Err(MacroOutcome::ActionUnavailable);
        }
        Ok(())
    }

    fn perform(
        &self,
        _obs: &Observation,
        target: Position,
        _rng: &mut dyn RngCore,
    ) -> FunctionCall {
        FunctionCall::BuildScreen {
            structure: self.structure,
            queued: Queued::Now,
            target,
        }
    }

    fn name(&self) -> String {
        format!("Build({:?})", self.structure)
    }

    fn action_type(&self) -> MacroActionType {
        match self.structure {
            Structure::Barracks => MacroActionType::BuildBarracks,
            Structure::SupplyDepot => MacroActionType::BuildSupplyDepot,
        }
    }

    fn uses_target(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::FunctionId;
    use crate::state::{FeatureScreen, SelectedUnit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_supply_depot_requires_scv() {
        let mut obs = Observation::new(FeatureScreen::zeros(8, 8));
        obs.available_actions
            .insert(FunctionId::BuildSupplyDepotScreen.id());
        obs.single_select = vec![SelectedUnit::new(UnitType::Marine, 45)];
        let mut rng = StdRng::seed_from_u64(5);
        let action = BuildStructureAction::supply_depot();

        let (call, outcome) = action.execute(&obs, Position::new(4, 4), &mut rng);
        assert_eq!(call, FunctionCall::NoOp);
        assert_eq!(outcome, MacroOutcome::PreconditionNotMet);

        obs.single_select = vec![SelectedUnit::new(UnitType::Scv, 45)];
        let (call, outcome) = action.execute(&obs, Position::new(4, 4), &mut rng);
        assert_eq!(outcome, MacroOutcome::Executed);
        assert_eq!(
            call,
            FunctionCall::BuildScreen {
                structure: Structure::SupplyDepot,
                queued: Queued::Now,
                target: Position::new(4, 4),
            }
        );
        assert_eq!(call.function_id(), FunctionId::BuildSupplyDepotScreen);
    }

    #[test]
    fn test_action_type_follows_structure() {
        assert_eq!(
            BuildStructureAction::barracks().action_type(),
            MacroActionType::BuildBarracks
        );
        assert_eq!(
            BuildStructureAction::supply_depot().action_type(),
            MacroActionType::BuildSupplyDepot
        );
    }
}
