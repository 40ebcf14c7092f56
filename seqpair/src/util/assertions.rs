use crate::entities::{Floorplan, Problem, SequencePair, Solution};
use crate::util::FPA;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn problem_ids_correct(problem: &Problem) -> bool {
    problem.rectangles.iter().enumerate().all(|(i, r)| r.id == i)
        && problem.fixed_blocks.iter().enumerate().all(|(i, b)| b.id == i)
}

/// No rectangle overlaps another rectangle or a fixed block, and the bounding box is tight.
pub fn floorplan_is_valid(problem: &Problem, floorplan: &Floorplan) -> bool {
    if floorplan.placed.len() != problem.n() {
        error!(
            "floorplan contains {} rectangles, problem has {}",
            floorplan.placed.len(),
            problem.n()
        );
        return false;
    }
    if !floorplan.placed.iter().enumerate().all(|(i, p)| p.id == i) {
        error!("floorplan is not indexed by rectangle id");
        return false;
    }
    if let Some((a, b)) = floorplan
        .placed
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.rect().almost_collides_with(&b.rect()))
    {
        error!("rectangles {} and {} overlap: {:?}, {:?}", a.id, b.id, a, b);
        return false;
    }
    for p in &floorplan.placed {
        if let Some(block) = problem
            .fixed_blocks
            .iter()
            .find(|fb| p.rect().almost_collides_with(&fb.rect()))
        {
            error!("rectangle {} overlaps fixed block {}", p.id, block.id);
            return false;
        }
    }
    bounding_box_is_tight(floorplan)
}

/// The bounding box equals the maximum extent of the placed rectangles
pub fn bounding_box_is_tight(floorplan: &Floorplan) -> bool {
    let x_max = floorplan
        .placed
        .iter()
        .map(|p| p.x + p.width)
        .fold(0.0f32, f32::max);
    let y_max = floorplan
        .placed
        .iter()
        .map(|p| p.y + p.height)
        .fold(0.0f32, f32::max);
    FPA(x_max) == FPA(floorplan.bounding_box.0)
        && FPA(y_max) == FPA(floorplan.bounding_box.1)
        && FPA(x_max * y_max) == FPA(floorplan.area)
}

pub fn sequence_pair_is_valid(problem: &Problem, sp: &SequencePair) -> bool {
    sp.validate(problem.n()).is_ok()
}

pub fn solution_is_consistent(problem: &Problem, solution: &Solution) -> bool {
    match crate::decode(problem, &solution.sequence_pair) {
        Ok(fp) => fp == solution.floorplan,
        Err(e) => {
            error!("solution does not decode: {e}");
            false
        }
    }
}
