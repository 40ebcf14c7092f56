use crate::entities::{Floorplan, Problem};
use crate::geometry::Rect;
use crate::io::svg::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Rectangle as SvgRect, Text, Title};

/// Renders a floorplan together with the fixed blocks of its problem.
/// The y-axis is flipped so that the origin ends up in the lower-left corner.
pub fn floorplan_to_svg(problem: &Problem, floorplan: &Floorplan, options: SvgDrawOptions) -> Document {
    let colors = options.theme.colors();

    //region to show: the bounding box, all fixed blocks and the origin
    let extent = problem
        .fixed_blocks
        .iter()
        .map(|fb| fb.rect())
        .chain(floorplan.placed.iter().map(|p| p.rect()))
        .fold(
            Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: floorplan.bounding_box.0.max(1.0),
                y_max: floorplan.bounding_box.1.max(1.0),
            },
            |acc, r| Rect::bounding_rectangle(&acc, &r),
        );
    let vbox = extent.scale(1.05);
    let stroke_width = f32::min(vbox.width(), vbox.height()) * 0.001 * colors.stroke_width_multiplier;

    //converts a rectangle in floorplan coordinates to (x, y, w, h) in svg coordinates
    let flip = |r: &Rect| (r.x_min, extent.y_max - r.y_max, r.width(), r.height());

    let background = {
        let (x, y, w, h) = flip(&vbox);
        SvgRect::new()
            .set("x", x)
            .set("y", y)
            .set("width", w)
            .set("height", h)
            .set("fill", colors.background_fill)
    };

    let block_group = problem
        .fixed_blocks
        .iter()
        .fold(Group::new().set("id", "fixed_blocks"), |group, fb| {
            let (x, y, w, h) = flip(&fb.rect());
            group.add(
                SvgRect::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", colors.block_fill)
                    .set("fill-opacity", "0.8")
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!(
                        "fixed block, id: {}, [top: {}, left: {}, bottom: {}, right: {}]",
                        fb.id, fb.top, fb.left, fb.bottom, fb.right
                    ))),
            )
        });

    let rect_group = floorplan
        .placed
        .iter()
        .fold(Group::new().set("id", "rectangles"), |group, p| {
            let (x, y, w, h) = flip(&p.rect());
            let fill = match p.rotated {
                true => colors.rotated_rect_fill,
                false => colors.rect_fill,
            };
            let group = group.add(
                SvgRect::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!(
                        "rectangle, id: {}, x: {:.3}, y: {:.3}, {}x{}{}",
                        p.id,
                        p.x,
                        p.y,
                        p.width,
                        p.height,
                        if p.rotated { ", rotated" } else { "" }
                    ))),
            );
            match options.labels {
                true => group.add(
                    Text::new(format!("{}", p.id))
                        .set("x", x + w / 2.0)
                        .set("y", y + h / 2.0)
                        .set("font-size", f32::min(w, h) * 0.4)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                ),
                false => group,
            }
        });

    let mut document = Document::new()
        .set("viewBox", flip(&vbox))
        .add(background)
        .add(block_group)
        .add(rect_group);

    if options.bounding_box && floorplan.area > 0.0 {
        let (x, y, w, h) = flip(&Rect::from_corner(
            0.0,
            0.0,
            floorplan.bounding_box.0,
            floorplan.bounding_box.1,
        ));
        document = document.add(
            SvgRect::new()
                .set("x", x)
                .set("y", y)
                .set("width", w)
                .set("height", h)
                .set("fill", "none")
                .set("stroke", colors.bbox_stroke)
                .set("stroke-width", 2.0 * stroke_width)
                .set("stroke-dasharray", 5.0 * stroke_width)
                .add(Title::new(format!(
                    "bounding box: {} x {}, area: {}",
                    floorplan.bounding_box.0, floorplan.bounding_box.1, floorplan.area
                ))),
        );
    }

    document
}
