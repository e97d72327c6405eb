//! Macro-action library: parameterized game commands dispatched by action index
//!
//! Every macro-action follows the same two phases: check its precondition
//! against the observation, then emit its command with `Queued::Now`. A failed
//! precondition never errors; it downgrades to a no-op and reports why.

mod build;
pub mod helpers;
mod movement;
mod no_op;
mod select;
mod train;

pub use build::BuildStructureAction;
pub use movement::MoveSelectedAction;
pub use no_op::NoOpAction;
pub use select::SelectUnitAction;
pub use train::TrainUnitAction;

use rand::RngCore;

use crate::infra::{FunctionCall, Position};
use crate::state::Observation;

/// Why a macro-action produced the command it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroOutcome {
    /// The intended command was emitted
    Executed,
    /// The required unit is missing or not selected
    PreconditionNotMet,
    /// The game does not currently offer the command
    ActionUnavailable,
}

pub trait MacroAction: std::fmt::Debug + Send + Sync {
    /// Check whether the command can be issued in the current observation
    fn precondition(&self, obs: &Observation) -> Result<(), MacroOutcome>;

    /// Build the command. Only called once the precondition holds.
    fn perform(&self, obs: &Observation, target: Position, rng: &mut dyn RngCore) -> FunctionCall;

    /// Human-readable name for logging/debugging
    fn name(&self) -> String;

    fn action_type(&self) -> MacroActionType;

    /// True when the command uses the target screen position
    fn uses_target(&self) -> bool {
        false
    }

    fn execute(
        &self,
        obs: &Observation,
        target: Position,
        rng: &mut dyn RngCore,
    ) -> (FunctionCall, MacroOutcome) {
        match self.precondition(obs) {
            Ok(()) => (self.perform(obs, target, rng), MacroOutcome::Executed),
            Err(outcome) => {
                tracing::trace!("{} declined: {:?}", self.name(), outcome);
                (FunctionCall::NoOp, outcome)
            }
        }
    }
}

/// Macro-action enumeration in action-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroActionType {
    NoOp = 0,
    SelectCommandCenter = 1,
    TrainScv = 2,
    SelectScv = 3,
    MoveScv = 4,
    BuildBarracks = 5,
    SelectBarracks = 6,
    BuildSupplyDepot = 7,
    TrainMarine = 8,
    SelectAllMarines = 9,
    MoveMarines = 10,
}

impl MacroActionType {
    pub const COUNT: usize = 11;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(MacroActionType::NoOp),
            1 => Some(MacroActionType::SelectCommandCenter),
            2 => Some(MacroActionType::TrainScv),
            3 => Some(MacroActionType::SelectScv),
            4 => Some(MacroActionType::MoveScv),
            5 => Some(MacroActionType::BuildBarracks),
            6 => Some(MacroActionType::SelectBarracks),
            7 => Some(MacroActionType::BuildSupplyDepot),
            8 => Some(MacroActionType::TrainMarine),
            9 => Some(MacroActionType::SelectAllMarines),
            10 => Some(MacroActionType::MoveMarines),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Instantiate the macro-action for this type
    pub fn build(self) -> Box<dyn MacroAction> {
        use crate::infra::{SelectPointAct, UnitType};

        match self {
            MacroActionType::NoOp => Box::new(NoOpAction),
            MacroActionType::SelectCommandCenter => Box::new(SelectUnitAction::new(
                self,
                UnitType::CommandCenter,
                SelectPointAct::Select,
            )),
            MacroActionType::TrainScv => Box::new(TrainUnitAction::scv()),
            MacroActionType::SelectScv => Box::new(SelectUnitAction::new(
                self,
                UnitType::Scv,
                SelectPointAct::Select,
            )),
            MacroActionType::MoveScv => Box::new(MoveSelectedAction::new(self, UnitType::Scv)),
            MacroActionType::BuildBarracks => Box::new(BuildStructureAction::barracks()),
            MacroActionType::SelectBarracks => Box::new(SelectUnitAction::new(
                self,
                UnitType::Barracks,
                SelectPointAct::Select,
            )),
            MacroActionType::BuildSupplyDepot => Box::new(BuildStructureAction::supply_depot()),
            MacroActionType::TrainMarine => Box::new(TrainUnitAction::marine()),
            MacroActionType::SelectAllMarines => Box::new(SelectUnitAction::new(
                self,
                UnitType::Marine,
                SelectPointAct::SelectAllType,
            )),
            MacroActionType::MoveMarines => {
                Box::new(MoveSelectedAction::new(self, UnitType::Marine))
            }
        }
    }
}
