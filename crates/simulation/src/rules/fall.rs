//! Gravity: sink straight down, else slide diagonally down.

use crate::api::CellApi;
use crate::rng::SimRng;

/// Swap with the cell below if it is strictly lighter.
pub fn try_sink(api: &mut CellApi) -> bool {
    if api.lighter(0, 1) {
        api.swap(0, 1);
        return true;
    }
    false
}

/// Swap into the first strictly lighter diagonal-below cell, checking the
/// two sides in coin-flip order.
pub fn try_slide<R: SimRng + ?Sized>(api: &mut CellApi, rng: &mut R) -> bool {
    let (first, second) = if rng.coin() { (1, -1) } else { (-1, 1) };
    for dx in [first, second] {
        if api.lighter(dx, 1) {
            api.swap(dx, 1);
            return true;
        }
    }
    false
}
