
extern crate tinyraster;

mod common;

use common::{red, vtx};
use tinyraster::{Rasterizer, Rgba};
use tinyraster::{BlendMode, FillMode, GeometryMode};

fn half_red() -> Rgba {
    Rgba::new(1.0, 0.0, 0.0, 0.5)
}

fn scene() -> Rasterizer {
    let mut ras = Rasterizer::new(32, 32);
    ras.clear(Rgba::white());
    ras.set_blend_mode(BlendMode::AlphaBlend);
    ras.set_fill_mode(FillMode::SolidFilled);
    ras
}

#[test]
fn t05_blended_fill() {
    let mut ras = scene();
    let c = half_red();
    ras.scanline_fill_polygon(&[vtx(2.0, 2.0, c), vtx(30.0, 2.0, c), vtx(16.0, 30.0, c)]);
    let fb = ras.framebuffer();
    assert_eq!(fb.pixel(16, 10), Some(Rgba::new(1.0, 0.5, 0.5, 0.75)));
    assert_eq!(fb.pixel(0, 0), Some(Rgba::white()));
    assert_eq!(ras.blend_mode(), BlendMode::AlphaBlend);
    common::save(fb, "t05_blended_fill.png");
}

#[test]
fn t05_line_geometry_does_not_blend() {
    let mut ras = scene();
    ras.draw_line(&vtx(0.0, 5.0, half_red()), &vtx(20.0, 5.0, half_red()), 1);
    assert_eq!(ras.framebuffer().pixel(10, 5), Some(half_red()));
}

#[test]
fn t05_polygon_geometry_blends() {
    let mut ras = scene();
    ras.set_geometry_mode(GeometryMode::Polygon);
    ras.draw_line(&vtx(0.0, 5.0, half_red()), &vtx(20.0, 5.0, half_red()), 1);
    assert_eq!(ras.framebuffer().pixel(10, 5), Some(Rgba::new(1.0, 0.5, 0.5, 0.75)));

    // Blending again moves further towards the new color
    ras.draw_line(&vtx(0.0, 5.0, half_red()), &vtx(20.0, 5.0, half_red()), 1);
    assert_eq!(ras.framebuffer().pixel(10, 5), Some(Rgba::new(1.0, 0.25, 0.25, 0.625)));
}

#[test]
fn t05_no_blend_writes_raw_color() {
    let mut ras = scene();
    ras.set_blend_mode(BlendMode::NoBlend);
    let c = half_red();
    ras.scanline_fill_polygon(&[vtx(2.0, 2.0, c), vtx(30.0, 2.0, c), vtx(16.0, 30.0, c)]);
    assert_eq!(ras.framebuffer().pixel(16, 10), Some(c));
    assert_eq!(ras.framebuffer().pixel(16, 10).map(|p| p.r), Some(red().r));
}
