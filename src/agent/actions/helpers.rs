use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::infra::{Position, UnitType};
use crate::state::{FeatureUnit, Observation};

/// All visible units of the given type, in observation order
pub fn get_units_by_type(obs: &Observation, unit_type: UnitType) -> Vec<FeatureUnit> {
    obs.feature_units
        .iter()
        .filter(|unit| unit.is_type(unit_type))
        .copied()
        .collect()
}

/// True when the first entry of the single or multi selection has this type
pub fn unit_type_is_selected(obs: &Observation, unit_type: UnitType) -> bool {
    let first_matches = |selection: &[crate::state::SelectedUnit]| {
        selection
            .first()
            .is_some_and(|unit| unit.unit_type == unit_type.id())
    };
    first_matches(&obs.single_select) || first_matches(&obs.multi_select)
}

/// Screen position of a randomly chosen unit of the given type
pub fn random_unit_position(
    obs: &Observation,
    unit_type: UnitType,
    rng: &mut dyn RngCore,
) -> Option<Position> {
    get_units_by_type(obs, unit_type)
        .choose(rng)
        .map(|unit| Position::new(unit.x, unit.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FeatureScreen, SelectedUnit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn observation() -> Observation {
        let mut obs = Observation::new(FeatureScreen::zeros(8, 8));
        obs.feature_units = vec![
            FeatureUnit::new(UnitType::Scv, 1, 1),
            FeatureUnit::new(UnitType::Marine, 2, 2),
            FeatureUnit::new(UnitType::Scv, 3, 3),
            FeatureUnit::new(UnitType::CommandCenter, 4, 4),
            FeatureUnit::new(UnitType::Scv, 5, 5),
        ];
        obs
    }

    #[test]
    fn test_get_units_by_type_preserves_order() {
        let scvs = get_units_by_type(&observation(), UnitType::Scv);
        let xs: Vec<i32> = scvs.iter().map(|unit| unit.x).collect();
        assert_eq!(xs, vec![1, 3, 5]);
        assert!(scvs.iter().all(|unit| unit.is_type(UnitType::Scv)));
    }

    #[test]
    fn test_get_units_by_type_none_present() {
        assert!(get_units_by_type(&observation(), UnitType::Barracks).is_empty());
    }

    #[test]
    fn test_unit_type_is_selected_single_and_multi() {
        let mut obs = observation();
        assert!(!unit_type_is_selected(&obs, UnitType::Scv));

        obs.single_select = vec![SelectedUnit::new(UnitType::Scv, 45)];
        assert!(unit_type_is_selected(&obs, UnitType::Scv));
        assert!(!unit_type_is_selected(&obs, UnitType::Marine));

        obs.single_select.clear();
        obs.multi_select = vec![
            SelectedUnit::new(UnitType::Marine, 45),
            SelectedUnit::new(UnitType::Scv, 45),
        ];
        assert!(unit_type_is_selected(&obs, UnitType::Marine));
        // only the first entry counts
        assert!(!unit_type_is_selected(&obs, UnitType::Scv));
    }

    #[test]
    fn test_random_unit_position_picks_matching_unit() {
        let obs = observation();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pos = random_unit_position(&obs, UnitType::Scv, &mut rng).unwrap();
            assert!([1, 3, 5].contains(&pos.x));
            assert_eq!(pos.x, pos.y);
        }
        assert!(random_unit_position(&obs, UnitType::Barracks, &mut rng).is_none());
    }
}
