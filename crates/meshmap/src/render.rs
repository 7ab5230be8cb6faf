//! Output back ends
//!
//! Consumes a [`PaintPlan`] and produces either an SVG document (one
//! filled rectangle per cell) or an upscaled raster image (one pixel per
//! cell). Both back ends write append-only in the command sequence's
//! order; later commands overdraw earlier ones, which is how the paint
//! order becomes visually meaningful.

use crate::paint::PaintPlan;
use image::{imageops, RgbImage};
use svg::node::element::Rectangle;
use svg::Document;

/// Mirroring transform applied to every cell before emission
///
/// Flips both axes, compensating for the projection's chirality. Applied
/// unconditionally by both back ends.
pub fn mirrored(nx: u32, ny: u32, i: u32, j: u32) -> (u32, u32) {
    (nx - i - 1, ny - j - 1)
}

/// Render the plan as a vector document
///
/// The larger output dimension equals `max_size`; each cell becomes one
/// axis-aligned filled rectangle with no stroke.
pub fn svg_document(plan: &PaintPlan, max_size: f32) -> Document {
    let scale = max_size / plan.nx.max(plan.ny) as f32;
    let width = plan.nx as f32 * scale;
    let height = plan.ny as f32 * scale;

    let mut document = Document::new().set("width", width).set("height", height);
    for command in &plan.commands {
        let (out_x, out_y) = mirrored(plan.nx, plan.ny, command.i, command.j);
        let rect = Rectangle::new()
            .set("x", out_x as f32 * scale)
            .set("y", out_y as f32 * scale)
            .set("width", scale)
            .set("height", scale)
            .set("fill", command.color.to_css())
            .set("stroke", "none");
        document = document.add(rect);
    }
    document
}

/// Render the plan as a raster image
///
/// Paints one pixel per cell into an (nx, ny) buffer on a black
/// background, then upscales by `upscale` using nearest-neighbor
/// replication.
pub fn raster_image(plan: &PaintPlan, upscale: u32) -> RgbImage {
    let mut img = RgbImage::new(plan.nx, plan.ny);
    for command in &plan.commands {
        let (out_x, out_y) = mirrored(plan.nx, plan.ny, command.i, command.j);
        img.put_pixel(out_x, out_y, command.color.to_pixel());
    }

    if upscale > 1 {
        imageops::resize(
            &img,
            plan.nx * upscale,
            plan.ny * upscale,
            imageops::FilterType::Nearest,
        )
    } else {
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::paint::PaintCommand;

    fn command(i: u32, j: u32, color: Color) -> PaintCommand {
        PaintCommand {
            i,
            j,
            color,
            height: 0.0,
        }
    }

    fn full_plan(nx: u32, ny: u32) -> PaintPlan {
        let mut commands = Vec::new();
        for i in 0..nx {
            for j in 0..ny {
                commands.push(command(i, j, Color::new(10, 20, 30)));
            }
        }
        PaintPlan { nx, ny, commands }
    }

    #[test]
    fn test_mirroring_flips_both_axes() {
        assert_eq!(mirrored(4, 3, 0, 0), (3, 2));
        assert_eq!(mirrored(4, 3, 3, 2), (0, 0));
        assert_eq!(mirrored(1, 1, 0, 0), (0, 0));
    }

    #[test]
    fn test_full_grid_covers_every_pixel_once() {
        let plan = full_plan(4, 3);
        let mut seen = vec![0u32; 12];
        for command in &plan.commands {
            let (x, y) = mirrored(plan.nx, plan.ny, command.i, command.j);
            seen[(y * plan.nx + x) as usize] += 1;
        }
        assert!(seen.iter().all(|count| *count == 1));
    }

    #[test]
    fn test_raster_paints_mirrored_pixel() {
        let mut plan = full_plan(3, 2);
        plan.commands = vec![command(0, 0, Color::new(255, 0, 0))];
        let img = raster_image(&plan, 1);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &image::Rgb([255, 0, 0]));
        // Unpainted cells stay on the black background.
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
    }

    #[test]
    fn test_raster_later_commands_overdraw() {
        let mut plan = full_plan(1, 1);
        plan.commands = vec![
            command(0, 0, Color::new(1, 1, 1)),
            command(0, 0, Color::new(200, 100, 50)),
        ];
        let img = raster_image(&plan, 1);
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([200, 100, 50]));
    }

    #[test]
    fn test_raster_upscale_replicates_pixels() {
        let mut plan = full_plan(1, 1);
        plan.commands = vec![command(0, 0, Color::new(40, 80, 120))];
        let img = raster_image(&plan, 6);
        assert_eq!(img.dimensions(), (6, 6));
        for pixel in img.pixels() {
            assert_eq!(pixel, &image::Rgb([40, 80, 120]));
        }
    }

    #[test]
    fn test_svg_document_size_and_rects() {
        let plan = full_plan(4, 2);
        let document = svg_document(&plan, 4000.0);
        let rendered = document.to_string();
        // Larger dimension hits the bound; the other scales with it.
        assert!(rendered.contains("width=\"4000\""));
        assert!(rendered.contains("height=\"2000\""));
        assert_eq!(rendered.matches("<rect").count(), 8);
        assert!(rendered.contains("fill=\"rgb(10,20,30)\""));
        assert!(rendered.contains("stroke=\"none\""));
    }
}
