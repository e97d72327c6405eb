use std::collections::HashSet;

use ndarray::{Array3, ArrayView2, Axis};

use crate::infra::{AgentError, FunctionId, ScreenFeature, UnitType};

/// Player economy counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub minerals: i32,
    pub vespene: i32,
    pub food_used: i32,
    pub food_cap: i32,
    pub food_army: i32,
    pub food_workers: i32,
    pub idle_worker_count: i32,
    pub army_count: i32,
}

impl PlayerStats {
    pub fn supply_remaining(&self) -> i32 {
        self.food_cap - self.food_used
    }
}

/// A unit visible on the feature screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureUnit {
    pub unit_type: u32,
    pub x: i32,
    pub y: i32,
    /// Construction progress, 100 once finished
    pub build_progress: u8,
    pub is_selected: bool,
}

impl FeatureUnit {
    pub fn new(unit_type: UnitType, x: i32, y: i32) -> Self {
        Self {
            unit_type: unit_type.id(),
            x,
            y,
            build_progress: 100,
            is_selected: false,
        }
    }

    pub fn with_build_progress(mut self, build_progress: u8) -> Self {
        self.build_progress = build_progress;
        self
    }

    pub fn is_type(&self, unit_type: UnitType) -> bool {
        self.unit_type == unit_type.id()
    }
}

/// Entry of the single- or multi-selection panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedUnit {
    pub unit_type: u32,
    pub health: i32,
}

impl SelectedUnit {
    pub fn new(unit_type: UnitType, health: i32) -> Self {
        Self {
            unit_type: unit_type.id(),
            health,
        }
    }
}

/// Screen feature layers stacked as `[layer, height, width]`
#[derive(Debug, Clone)]
pub struct FeatureScreen {
    layers: Array3<i32>,
}

impl FeatureScreen {
    pub fn new(layers: Array3<i32>) -> Self {
        Self { layers }
    }

    /// An all-zero screen carrying every layer
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            layers: Array3::zeros((ScreenFeature::COUNT, height, width)),
        }
    }

    pub fn height(&self) -> usize {
        self.layers.len_of(Axis(1))
    }

    pub fn width(&self) -> usize {
        self.layers.len_of(Axis(2))
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len_of(Axis(0))
    }

    pub fn layer(&self, feature: ScreenFeature) -> Result<ArrayView2<'_, i32>, AgentError> {
        if feature.index() >= self.num_layers() {
            return Err(AgentError::MissingLayer {
                feature,
                available: self.num_layers(),
            });
        }
        Ok(self.layers.index_axis(Axis(0), feature.index()))
    }

    pub fn set(&mut self, feature: ScreenFeature, y: usize, x: usize, value: i32) {
        self.layers[[feature.index(), y, x]] = value;
    }
}

/// One snapshot of the game at a decision point
#[derive(Debug, Clone)]
pub struct Observation {
    pub player: PlayerStats,
    pub feature_units: Vec<FeatureUnit>,
    /// Raw ids of every function the game currently accepts
    pub available_actions: HashSet<u16>,
    pub feature_screen: FeatureScreen,
    pub single_select: Vec<SelectedUnit>,
    pub multi_select: Vec<SelectedUnit>,
}

impl Observation {
    /// An observation with no units, no selection and no available functions
    pub fn new(feature_screen: FeatureScreen) -> Self {
        Self {
            player: PlayerStats::default(),
            feature_units: Vec::new(),
            available_actions: HashSet::new(),
            feature_screen,
            single_select: Vec::new(),
            multi_select: Vec::new(),
        }
    }

    pub fn is_available(&self, function: FunctionId) -> bool {
        self.available_actions.contains(&function.id())
    }

    pub fn count_units(&self, predicate: impl Fn(&FeatureUnit) -> bool) -> usize {
        self.feature_units.iter().filter(|unit| predicate(unit)).count()
    }
}
