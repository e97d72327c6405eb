//! Observation encoder - converts an Observation into the network's input tensors

use ndarray::{Array1, Array2, Array3, Array4, ArrayView2, Axis, stack};

use crate::infra::{AgentError, ScreenFeature, UnitType};
use crate::state::Observation;

/// Number of entries in the scalar feature vector
pub const SCALAR_FEATURES: usize = 10;

/// Number of channels in the spatial feature stack
pub const SPATIAL_CHANNELS: usize = 10;

/// Unit types that get their own presence mask, in channel order 1..=5
const MASKED_UNIT_TYPES: [UnitType; 5] = [
    UnitType::CommandCenter,
    UnitType::Marine,
    UnitType::Scv,
    UnitType::MineralField,
    UnitType::Barracks,
];

/// Economy and unit counts feeding the scalar branch of the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarFeatures {
    pub minerals: i32,
    pub food_used: i32,
    pub food_cap: i32,
    pub supply_remaining: i32,
    pub scvs: usize,
    pub marines: usize,
    pub barracks: usize,
    pub barracks_building: usize,
    pub supply_depots: usize,
    pub supply_depots_building: usize,
}

impl ScalarFeatures {
    pub fn from_observation(obs: &Observation) -> Self {
        let completed = |unit_type: UnitType| {
            obs.count_units(|unit| unit.is_type(unit_type) && unit.build_progress == 100)
        };
        let in_progress = |unit_type: UnitType| {
            obs.count_units(|unit| unit.is_type(unit_type) && unit.build_progress < 100)
        };

        Self {
            minerals: obs.player.minerals,
            food_used: obs.player.food_used,
            food_cap: obs.player.food_cap,
            supply_remaining: obs.player.supply_remaining(),
            scvs: obs.count_units(|unit| unit.is_type(UnitType::Scv)),
            marines: obs.count_units(|unit| unit.is_type(UnitType::Marine)),
            barracks: completed(UnitType::Barracks),
            barracks_building: in_progress(UnitType::Barracks),
            supply_depots: completed(UnitType::SupplyDepot),
            supply_depots_building: in_progress(UnitType::SupplyDepot),
        }
    }

    /// Flatten in network order: minerals, food used, food cap, supply
    /// remaining, SCVs, marines, barracks, barracks building, depots,
    /// depots building.
    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_vec(vec![
            self.minerals as f32,
            self.food_used as f32,
            self.food_cap as f32,
            self.supply_remaining as f32,
            self.scvs as f32,
            self.marines as f32,
            self.barracks as f32,
            self.barracks_building as f32,
            self.supply_depots as f32,
            self.supply_depots_building as f32,
        ])
    }
}

/// Both network inputs for one decision step
#[derive(Debug, Clone)]
pub struct EncodedObservation {
    /// Scalar features [SCALAR_FEATURES]
    pub scalar: Array1<f32>,
    /// Spatial features [height, width, SPATIAL_CHANNELS]
    pub spatial: Array3<f32>,
}

impl EncodedObservation {
    /// Scalar features as a batch of one [1, SCALAR_FEATURES]
    pub fn scalar_batch(&self) -> Array2<f32> {
        self.scalar.clone().insert_axis(Axis(0))
    }

    /// Spatial features as a batch of one [1, height, width, SPATIAL_CHANNELS]
    pub fn spatial_batch(&self) -> Array4<f32> {
        self.spatial.clone().insert_axis(Axis(0))
    }
}

/// Stateless encoder; every call rebuilds both tensors from the given observation
#[derive(Debug, Clone, Default)]
pub struct ObservationEncoder;

impl ObservationEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, obs: &Observation) -> Result<EncodedObservation, AgentError> {
        Ok(EncodedObservation {
            scalar: self.encode_scalar(obs),
            spatial: self.encode_spatial(obs)?,
        })
    }

    pub fn encode_scalar(&self, obs: &Observation) -> Array1<f32> {
        ScalarFeatures::from_observation(obs).to_array()
    }

    /// Channels: unit type id, presence masks for command center, marine,
    /// SCV, mineral field and barracks, then selected, unit density, active
    /// and pathable.
    pub fn encode_spatial(&self, obs: &Observation) -> Result<Array3<f32>, AgentError> {
        let screen = &obs.feature_screen;
        let unit_type = screen.layer(ScreenFeature::UnitType)?;

        let mut channels: Vec<Array2<f32>> = Vec::with_capacity(SPATIAL_CHANNELS);
        channels.push(Self::to_float(unit_type.view()));
        for masked in MASKED_UNIT_TYPES {
            let id = masked.id() as i32;
            channels.push(unit_type.mapv(|value| if value == id { 1.0 } else { 0.0 }));
        }
        for feature in [
            ScreenFeature::Selected,
            ScreenFeature::UnitDensity,
            ScreenFeature::Active,
            ScreenFeature::Pathable,
        ] {
            channels.push(Self::to_float(screen.layer(feature)?));
        }

        let views: Vec<ArrayView2<f32>> = channels.iter().map(|c| c.view()).collect();
        stack(Axis(2), &views).map_err(|_| AgentError::ShapeMismatch {
            what: "spatial channel",
            expected: vec![screen.height(), screen.width()],
            actual: views
                .iter()
                .find(|view| view.shape() != [screen.height(), screen.width()])
                .map(|view| view.shape().to_vec())
                .unwrap_or_default(),
        })
    }

    fn to_float(layer: ArrayView2<i32>) -> Array2<f32> {
        layer.mapv(|value| value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FeatureScreen, FeatureUnit};

    fn observation() -> Observation {
        let mut screen = FeatureScreen::zeros(16, 24);
        screen.set(ScreenFeature::UnitType, 2, 3, UnitType::CommandCenter.id() as i32);
        screen.set(ScreenFeature::UnitType, 5, 7, UnitType::Marine.id() as i32);
        screen.set(ScreenFeature::UnitType, 6, 8, UnitType::Scv.id() as i32);
        screen.set(ScreenFeature::UnitType, 9, 1, UnitType::MineralField.id() as i32);
        screen.set(ScreenFeature::UnitType, 10, 20, UnitType::Barracks.id() as i32);
        screen.set(ScreenFeature::Selected, 6, 8, 1);
        screen.set(ScreenFeature::UnitDensity, 6, 8, 2);
        screen.set(ScreenFeature::Active, 5, 7, 1);
        screen.set(ScreenFeature::Pathable, 0, 0, 1);

        let mut obs = Observation::new(screen);
        obs.player.minerals = 125;
        obs.player.food_used = 13;
        obs.player.food_cap = 15;
        obs.feature_units = vec![
            FeatureUnit::new(UnitType::Scv, 8, 6),
            FeatureUnit::new(UnitType::Scv, 9, 6),
            FeatureUnit::new(UnitType::Marine, 7, 5),
            FeatureUnit::new(UnitType::Barracks, 20, 10),
            FeatureUnit::new(UnitType::Barracks, 22, 12).with_build_progress(40),
            FeatureUnit::new(UnitType::SupplyDepot, 1, 1).with_build_progress(99),
            FeatureUnit::new(UnitType::SupplyDepot, 2, 1),
            FeatureUnit::new(UnitType::SupplyDepot, 3, 1),
        ];
        obs
    }

    #[test]
    fn test_scalar_features_order() {
        let scalar = ObservationEncoder::new().encode_scalar(&observation());
        assert_eq!(scalar.len(), SCALAR_FEATURES);
        assert_eq!(
            scalar.to_vec(),
            vec![125.0, 13.0, 15.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0]
        );
    }

    #[test]
    fn test_scalar_features_empty_observation() {
        let obs = Observation::new(FeatureScreen::zeros(4, 4));
        let features = ScalarFeatures::from_observation(&obs);
        assert_eq!(features, ScalarFeatures::default());
        assert_eq!(features.to_array().len(), SCALAR_FEATURES);
    }

    #[test]
    fn test_spatial_stack_shape_matches_screen() {
        let spatial = ObservationEncoder::new()
            .encode_spatial(&observation())
            .unwrap();
        assert_eq!(spatial.shape(), &[16, 24, SPATIAL_CHANNELS]);
    }

    #[test]
    fn test_spatial_channels() {
        let spatial = ObservationEncoder::new()
            .encode_spatial(&observation())
            .unwrap();

        // raw unit type
        assert_eq!(spatial[[6, 8, 0]], UnitType::Scv.id() as f32);
        // presence masks
        assert_eq!(spatial[[2, 3, 1]], 1.0);
        assert_eq!(spatial[[5, 7, 2]], 1.0);
        assert_eq!(spatial[[6, 8, 3]], 1.0);
        assert_eq!(spatial[[9, 1, 4]], 1.0);
        assert_eq!(spatial[[10, 20, 5]], 1.0);
        assert_eq!(spatial[[6, 8, 1]], 0.0);
        // each mask marks exactly one pixel in this fixture
        for channel in 1..=5 {
            let total: f32 = spatial.index_axis(Axis(2), channel).sum();
            assert_eq!(total, 1.0, "channel {}", channel);
        }
        // pass-through layers
        assert_eq!(spatial[[6, 8, 6]], 1.0);
        assert_eq!(spatial[[6, 8, 7]], 2.0);
        assert_eq!(spatial[[5, 7, 8]], 1.0);
        assert_eq!(spatial[[0, 0, 9]], 1.0);
    }

    #[test]
    fn test_missing_layer_propagates() {
        let obs = Observation::new(FeatureScreen::new(Array3::zeros((10, 4, 4))));
        let result = ObservationEncoder::new().encode(&obs);
        assert!(matches!(result, Err(AgentError::MissingLayer { .. })));
    }

    #[test]
    fn test_batch_of_one() {
        let encoded = ObservationEncoder::new().encode(&observation()).unwrap();
        assert_eq!(encoded.scalar_batch().shape(), &[1, SCALAR_FEATURES]);
        assert_eq!(
            encoded.spatial_batch().shape(),
            &[1, 16, 24, SPATIAL_CHANNELS]
        );
    }
}
