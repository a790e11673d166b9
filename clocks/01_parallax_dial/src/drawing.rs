//! Drawing module - paints the clock scene graph
//!
//! Walks the scene in paint order and fills each drawable rectangle, shadow
//! first. Stage coordinates (top-left origin, y down) are mapped into
//! nannou's centered, y-up window space.

use clock_core::{Affine2, ClockStyle, DropShadow, Point, SceneGraph, Style};
use nannou::prelude::*;

/// Shadow offset direction, down and to the right on screen
const SHADOW_ANGLE_DEG: f32 = 45.0;

/// Number of layers used to fake a blurred shadow edge
const SHADOW_LAYERS: usize = 3;

/// Color palette for banners
pub mod colors {
    use nannou::prelude::*;

    pub const BANNER_BG: Srgb<u8> = Srgb {
        red: 60,
        green: 24,
        blue: 24,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
}

/// Split 0xRRGGBB into an sRGB color with the given alpha
fn hex_color(rgb: u32, alpha: f32) -> Srgba<u8> {
    srgba(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Map a stage point into window space
fn to_window(p: Point, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + p.x, window_rect.top() - p.y)
}

/// Corners of a `width` x `height` rectangle at the node origin, in stage space
fn rect_corners(world: &Affine2, width: f32, height: f32, grow: f32) -> [Point; 4] {
    [
        Point::new(-grow, -grow),
        Point::new(width + grow, -grow),
        Point::new(width + grow, height + grow),
        Point::new(-grow, height + grow),
    ]
    .map(|p| world.transform_point2(p))
}

/// Paint the whole scene
pub fn draw_scene(draw: &Draw, scene: &SceneGraph, style: &ClockStyle, window_rect: Rect) {
    draw.background().color(hex_color(style.dial, 1.0));

    scene.visit(|node, world| {
        if let Some(drawable) = node.drawable() {
            let size = drawable.size;
            draw_rect(draw, world, size.width, size.height, &drawable.style, window_rect);
        }
    });
}

fn draw_rect(
    draw: &Draw,
    world: &Affine2,
    width: f32,
    height: f32,
    style: &Style,
    window_rect: Rect,
) {
    if let Some(shadow) = style.shadow {
        draw_shadow(draw, world, width, height, &shadow, window_rect);
    }

    let corners = rect_corners(world, width, height, 0.0);
    draw.polygon()
        .points(corners.iter().map(|&p| to_window(p, window_rect)))
        .color(hex_color(style.fill, 1.0));
}

/// Offset, layered copies of the rectangle approximating a soft shadow
fn draw_shadow(
    draw: &Draw,
    world: &Affine2,
    width: f32,
    height: f32,
    shadow: &DropShadow,
    window_rect: Rect,
) {
    let angle = SHADOW_ANGLE_DEG.to_radians();
    let offset = Point::from_angle(angle) * shadow.distance;
    let layer_alpha = shadow.alpha / SHADOW_LAYERS as f32;

    for layer in 0..SHADOW_LAYERS {
        // Outer layers spread further, stacking into a darker core
        let grow = shadow.blur * layer as f32 / SHADOW_LAYERS as f32;
        let corners = rect_corners(world, width, height, grow);
        draw.polygon()
            .points(corners.iter().map(|&p| to_window(p + offset, window_rect)))
            .color(hex_color(shadow.color, layer_alpha));
    }
}

/// Draw a message banner across the top of the window
pub fn draw_status_banner(draw: &Draw, message: &str, window_rect: Rect) {
    let banner_h = 36.0;
    let banner = Rect::from_x_y_w_h(
        window_rect.x(),
        window_rect.top() - banner_h / 2.0,
        window_rect.w(),
        banner_h,
    );

    draw.rect()
        .xy(banner.xy())
        .wh(banner.wh())
        .color(colors::BANNER_BG);

    draw.text(message)
        .xy(banner.xy())
        .color(colors::TEXT_PRIMARY)
        .font_size(14)
        .w(banner.w() - 20.0);
}
