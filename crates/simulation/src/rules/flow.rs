//! Lateral flow for liquids and gases.

use crate::api::CellApi;
use crate::rng::SimRng;

/// Step one cell sideways into a neighbour that is lighter or is any gas,
/// trying the coin-flipped side first.
pub fn try_flow<R: SimRng + ?Sized>(api: &mut CellApi, rng: &mut R) -> bool {
    let (first, second) = if rng.coin() { (1, -1) } else { (-1, 1) };
    for dx in [first, second] {
        if displaceable(api, dx) {
            api.swap(dx, 0);
            return true;
        }
    }
    false
}

fn displaceable(api: &CellApi, dx: i32) -> bool {
    api.lighter(dx, 0) || api.get(dx, 0).kind.is_gas()
}
