use crate::DecodeError;
use crate::entities::{Floorplan, PlacedRect, Problem, SequencePair};
use crate::geometry::Rect;
use crate::util::assertions::floorplan_is_valid;
use itertools::Itertools;

/// Decodes a sequence pair into a floorplan. Pure function: identical inputs always yield identical floorplans.
///
/// Rectangles are visited in `G+` order, which is a topological order of both the horizontal and the vertical
/// constraint graph. Every rectangle is pushed right of all its horizontal predecessors and above all
/// its vertical predecessors (longest path), after which it is shifted out of any fixed block it collides with.
/// Because successors are placed against the final (possibly shifted) coordinates of their predecessors,
/// no two rectangles overlap.
pub fn decode(problem: &Problem, sp: &SequencePair) -> Result<Floorplan, DecodeError> {
    let n = problem.n();
    sp.validate(n)?;

    let minus_pos = sp.minus_positions();
    let blocks = problem.fixed_blocks.iter().map(|b| b.rect()).collect_vec();

    //rectangles in the order they were placed, which is the order of G+
    let mut placed: Vec<PlacedRect> = Vec::with_capacity(n);

    for &j in &sp.g_plus {
        let rotated = sp.rotations[j];
        let (width, height) = problem.rectangle(j).dims(rotated);

        let (mut x, mut y) = (0.0f32, 0.0f32);
        for pred in &placed {
            match minus_pos[pred.id] < minus_pos[j] {
                //precedes in both sequences: left of j
                true => x = x.max(pred.x + pred.width),
                //precedes in G+, follows in G-: below j
                false => y = y.max(pred.y + pred.height),
            }
        }

        let (x, y) = avoid_fixed_blocks(x, y, width, height, &blocks);

        placed.push(PlacedRect {
            id: j,
            x,
            y,
            width,
            height,
            rotated: rotated && problem.rectangle(j).rotatable,
        });
    }

    placed.sort_by_key(|p| p.id);
    let floorplan = Floorplan::new(placed);

    debug_assert!(floorplan_is_valid(problem, &floorplan));

    Ok(floorplan)
}

/// Shifts a rectangle with its lower-left corner at `(x, y)` until it no longer collides with any fixed block.
/// For every colliding block the smallest displacement (right or up) is taken, ties go right.
/// Coordinates only grow and always land on a block edge, so at most `2 * blocks.len()` shifts occur.
fn avoid_fixed_blocks(mut x: f32, mut y: f32, width: f32, height: f32, blocks: &[Rect]) -> (f32, f32) {
    while let Some(block) = blocks
        .iter()
        .find(|b| Rect::from_corner(x, y, width, height).collides_with(b))
    {
        let dx = block.x_max - x;
        let dy = block.y_max - y;
        if dx <= dy {
            x = block.x_max;
        } else {
            y = block.y_max;
        }
    }
    (x, y)
}
