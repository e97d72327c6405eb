//! Commands sent back to the game environment

use super::{FunctionId, Position, Structure, TrainableUnit};

/// Whether a command replaces the current order or is queued behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queued {
    Now,
    Queued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPointAct {
    /// Select the single unit under the point
    Select,
    /// Select every visible unit of the same type as the one under the point
    SelectAllType,
}

impl SelectPointAct {
    pub fn as_str_name(self) -> &'static str {
        match self {
            SelectPointAct::Select => "select",
            SelectPointAct::SelectAllType => "select_all_type",
        }
    }
}

/// A single environment command. Carries at most one screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCall {
    NoOp,
    SelectPoint {
        mode: SelectPointAct,
        target: Position,
    },
    TrainQuick {
        unit: TrainableUnit,
        queued: Queued,
    },
    BuildScreen {
        structure: Structure,
        queued: Queued,
        target: Position,
    },
    MoveScreen {
        queued: Queued,
        target: Position,
    },
}

impl FunctionCall {
    pub fn function_id(&self) -> FunctionId {
        match self {
            FunctionCall::NoOp => FunctionId::NoOp,
            FunctionCall::SelectPoint { .. } => FunctionId::SelectPoint,
            FunctionCall::TrainQuick { unit, .. } => unit.function_id(),
            FunctionCall::BuildScreen { structure, .. } => structure.function_id(),
            FunctionCall::MoveScreen { .. } => FunctionId::MoveScreen,
        }
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            FunctionCall::SelectPoint { target, .. }
            | FunctionCall::BuildScreen { target, .. }
            | FunctionCall::MoveScreen { target, .. } => Some(*target),
            FunctionCall::NoOp | FunctionCall::TrainQuick { .. } => None,
        }
    }

    pub fn is_no_op(&self) -> bool {
        matches!(self, FunctionCall::NoOp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_ids() {
        assert_eq!(FunctionCall::NoOp.function_id(), FunctionId::NoOp);
        let train = FunctionCall::TrainQuick {
            unit: TrainableUnit::Marine,
            queued: Queued::Now,
        };
        assert_eq!(train.function_id(), FunctionId::TrainMarineQuick);
        let build = FunctionCall::BuildScreen {
            structure: Structure::SupplyDepot,
            queued: Queued::Now,
            target: Position::new(3, 4),
        };
        assert_eq!(build.function_id().id(), 91);
    }

    #[test]
    fn test_every_train_and_build_payload_has_its_own_id() {
        let scv = FunctionCall::TrainQuick {
            unit: TrainableUnit::Scv,
            queued: Queued::Now,
        };
        let marine = FunctionCall::TrainQuick {
            unit: TrainableUnit::Marine,
            queued: Queued::Now,
        };
        assert_eq!(scv.function_id(), FunctionId::TrainScvQuick);
        assert_ne!(scv.function_id(), marine.function_id());

        let barracks = FunctionCall::BuildScreen {
            structure: Structure::Barracks,
            queued: Queued::Now,
            target: Position::default(),
        };
        let depot = FunctionCall::BuildScreen {
            structure: Structure::SupplyDepot,
            queued: Queued::Now,
            target: Position::default(),
        };
        assert_eq!(barracks.function_id(), FunctionId::BuildBarracksScreen);
        assert_ne!(barracks.function_id(), depot.function_id());
    }

    #[test]
    fn test_target_only_on_screen_commands() {
        let moved = FunctionCall::MoveScreen {
            queued: Queued::Now,
            target: Position::new(10, 12),
        };
        assert_eq!(moved.target(), Some(Position::new(10, 12)));
        assert_eq!(FunctionCall::NoOp.target(), None);
        assert!(FunctionCall::NoOp.is_no_op());
        assert!(!moved.is_no_op());
    }
}
