/// A point on the feature screen, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale normalized coordinates onto a screen of the given size.
    /// Values are clamped to [0, 1]; non-finite values collapse to 0.
    pub fn from_normalized(x: f32, y: f32, width: usize, height: usize) -> Self {
        fn scale(value: f32, extent: usize) -> i32 {
            if extent == 0 {
                return 0;
            }
            let value = if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let max = (extent - 1) as f32;
            (value * max).round() as i32
        }

        Self {
            x: scale(x, width),
            y: scale(y, height),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Unit type identifiers as reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum UnitType {
    CommandCenter = 18,
    SupplyDepot = 19,
    Barracks = 21,
    Scv = 45,
    Marine = 48,
    MineralField = 341,
}

impl UnitType {
    pub fn id(self) -> u32 {
        self as u32
    }

}

/// Units that can be queued with a `*_quick` train command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainableUnit {
    Scv,
    Marine,
}

impl TrainableUnit {
    pub fn unit_type(self) -> UnitType {
        match self {
            TrainableUnit::Scv => UnitType::Scv,
            TrainableUnit::Marine => UnitType::Marine,
        }
    }

    pub fn function_id(self) -> FunctionId {
        match self {
            TrainableUnit::Scv => FunctionId::TrainScvQuick,
            TrainableUnit::Marine => FunctionId::TrainMarineQuick,
        }
    }
}

/// Structures an SCV can place with a `Build_*_screen` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Barracks,
    SupplyDepot,
}

impl Structure {
    pub fn unit_type(self) -> UnitType {
        match self {
            Structure::Barracks => UnitType::Barracks,
            Structure::SupplyDepot => UnitType::SupplyDepot,
        }
    }

    pub fn function_id(self) -> FunctionId {
        match self {
            Structure::Barracks => FunctionId::BuildBarracksScreen,
            Structure::SupplyDepot => FunctionId::BuildSupplyDepotScreen,
        }
    }
}

/// Game function identifiers used by the macro-action library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FunctionId {
    NoOp = 0,
    SelectPoint = 2,
    BuildBarracksScreen = 42,
    BuildSupplyDepotScreen = 91,
    MoveScreen = 331,
    TrainMarineQuick = 477,
    TrainScvQuick = 490,
}

impl FunctionId {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn as_str_name(self) -> &'static str {
        match self {
            FunctionId::NoOp => "no_op",
            FunctionId::SelectPoint => "select_point",
            FunctionId::BuildBarracksScreen => "Build_Barracks_screen",
            FunctionId::BuildSupplyDepotScreen => "Build_SupplyDepot_screen",
            FunctionId::MoveScreen => "Move_screen",
            FunctionId::TrainMarineQuick => "Train_Marine_quick",
            FunctionId::TrainScvQuick => "Train_SCV_quick",
        }
    }
}

/// Screen feature layers, in the order the game stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenFeature {
    HeightMap = 0,
    VisibilityMap = 1,
    Creep = 2,
    Power = 3,
    PlayerId = 4,
    PlayerRelative = 5,
    UnitType = 6,
    Selected = 7,
    UnitHitPoints = 8,
    UnitHitPointsRatio = 9,
    UnitEnergy = 10,
    UnitEnergyRatio = 11,
    UnitShields = 12,
    UnitShieldsRatio = 13,
    UnitDensity = 14,
    UnitDensityAa = 15,
    Effects = 16,
    Hallucinations = 17,
    Cloaked = 18,
    Blip = 19,
    Buffs = 20,
    BuffDuration = 21,
    Active = 22,
    BuildProgress = 23,
    Pathable = 24,
    Buildable = 25,
    Placeholder = 26,
}

impl ScreenFeature {
    pub const COUNT: usize = 27;

    pub fn index(self) -> usize {
        self as usize
    }
}
