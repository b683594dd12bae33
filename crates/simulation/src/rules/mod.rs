//! Per-cell rule pipeline dispatched from the sweep.
//!
//! Rules run in a fixed order and the first one that acts ends the cell's
//! turn:
//!
//! 1. mark the cell updated
//! 2. evaporation (liquids)
//! 3. sink into a lighter cell below
//! 4. rise into a heavier gas above (gases)
//! 5. slide into a lighter diagonal-below cell
//! 6. steam decay
//! 7. lateral flow (liquids and gases)

mod fall;
mod flow;
mod gas;
mod liquid;


use crate::api::CellApi;
use crate::config::SimConfig;
use crate::material::{MaterialKind, Phase};
use crate::rng::SimRng;

/// Run the pipeline for one pending cell. The caller has already checked
/// that the cell is mobile and not yet updated this sweep.
pub fn update_cell<R: SimRng + ?Sized>(api: &mut CellApi, rng: &mut R, config: &SimConfig) {
    api.mark_updated();
    let phase = api.me().phase;

    if phase == Phase::Liquid
        && liquid::try_evaporate(api, rng, config.evaporation_chance, config.evaporation_neighbors)
    {
        return;
    }
    if fall::try_sink(api) {
        return;
    }
    if phase == Phase::Gas && gas::try_rise(api) {
        return;
    }
    if fall::try_slide(api, rng) {
        return;
    }
    if api.kind() == MaterialKind::Steam && gas::try_decay(api, rng, config.steam_decay_chance) {
        return;
    }
    if matches!(phase, Phase::Liquid | Phase::Gas) {
        flow::try_flow(api, rng);
    }
}
