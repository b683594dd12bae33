//! Liquid evaporation: an exposed liquid cell may turn into steam.

use crate::api::CellApi;
use crate::config::EvaporationNeighbors;
use crate::material::MaterialKind;
use crate::rng::SimRng;

/// Evaporate with probability `chance` when the required neighbours are all
/// gas. Returns true if the cell turned to steam.
pub fn try_evaporate<R: SimRng + ?Sized>(
    api: &mut CellApi,
    rng: &mut R,
    chance: f64,
    neighbors: EvaporationNeighbors,
) -> bool {
    let exposed = match neighbors {
        EvaporationNeighbors::AboveAndLeft => gas_at(api, 0, -1) && gas_at(api, -1, 0),
        EvaporationNeighbors::AboveAndSides => {
            gas_at(api, 0, -1) && gas_at(api, -1, 0) && gas_at(api, 1, 0)
        }
    };
    if !exposed || !rng.chance(chance) {
        return false;
    }
    api.transform(MaterialKind::Steam);
    true
}

fn gas_at(api: &CellApi, dx: i32, dy: i32) -> bool {
    api.get(dx, dy).kind.is_gas()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimulationRng;
    use crate::Grid;
    use rand::SeedableRng;

    fn water_at_center() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, MaterialKind::Water);
        grid
    }

    #[test]
    fn exposed_water_evaporates_at_full_chance() {
        let mut grid = water_at_center();
        let mut rng = SimulationRng::seed_from_u64(3);
        let mut api = CellApi::new(&mut grid, 2, 2);
        assert!(try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndSides));
        assert_eq!(grid.kind(2, 2), MaterialKind::Steam);
    }

    #[test]
    fn zero_chance_never_evaporates() {
        let mut grid = water_at_center();
        let mut rng = SimulationRng::seed_from_u64(3);
        let mut api = CellApi::new(&mut grid, 2, 2);
        for _ in 0..1000 {
            assert!(!try_evaporate(&mut api, &mut rng, 0.0, EvaporationNeighbors::AboveAndSides));
        }
        assert_eq!(grid.kind(2, 2), MaterialKind::Water);
    }

    #[test]
    fn covered_water_stays_liquid() {
        let mut grid = water_at_center();
        grid.set(2, 1, MaterialKind::Sand);
        let mut rng = SimulationRng::seed_from_u64(3);
        let mut api = CellApi::new(&mut grid, 2, 2);
        assert!(!try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndLeft));
        assert!(!try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndSides));
    }

    #[test]
    fn right_neighbour_only_matters_when_checking_both_sides() {
        let mut grid = water_at_center();
        grid.set(3, 2, MaterialKind::Water);
        let mut rng = SimulationRng::seed_from_u64(3);

        let mut api = CellApi::new(&mut grid, 2, 2);
        assert!(!try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndSides));
        assert!(try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndLeft));
    }

    #[test]
    fn steam_counts_as_exposure() {
        let mut grid = water_at_center();
        grid.set(2, 1, MaterialKind::Steam);
        grid.set(1, 2, MaterialKind::Steam);
        let mut rng = SimulationRng::seed_from_u64(3);
        let mut api = CellApi::new(&mut grid, 2, 2);
        assert!(try_evaporate(&mut api, &mut rng, 1.0, EvaporationNeighbors::AboveAndSides));
    }
}
