use crate::entities::Solution;
use crate::io::ext_repr::{ExtPosition, ExtSequencePair, ExtSolution};
use itertools::Itertools;
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(solution: &Solution, epoch: Instant) -> ExtSolution {
    let fp = &solution.floorplan;
    let sp = &solution.sequence_pair;
    ExtSolution {
        positions: fp
            .placed
            .iter()
            .map(|p| ExtPosition {
                id: p.id,
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                rotated: p.rotated,
            })
            .collect_vec(),
        bounding_box: fp.bounding_box,
        area: fp.area,
        density: fp.density(),
        sequence_pair: ExtSequencePair {
            g_plus: sp.g_plus.clone(),
            g_minus: sp.g_minus.clone(),
            rotations: sp.rotations.clone(),
        },
        run_time_sec: solution.time_stamp.saturating_duration_since(epoch).as_secs(),
    }
}
