//! Gas-only rules: buoyant rise and steam decay.

use crate::api::CellApi;
use crate::material::{MaterialKind, Phase};
use crate::rng::SimRng;

/// Swap upward into a gas that is strictly heavier than this cell.
pub fn try_rise(api: &mut CellApi) -> bool {
    let above = api.material(0, -1);
    if above.phase == Phase::Gas && above.density > api.me().density {
        api.swap(0, -1);
        return true;
    }
    false
}

/// Revert to air with probability `chance`.
pub fn try_decay<R: SimRng + ?Sized>(api: &mut CellApi, rng: &mut R, chance: f64) -> bool {
    if rng.chance(chance) {
        api.transform(MaterialKind::Air);
        return true;
    }
    false
}
