mod observation;

pub use observation::{FeatureScreen, FeatureUnit, Observation, PlayerStats, SelectedUnit};
