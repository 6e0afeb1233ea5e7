
extern crate tinyraster;

mod common;

use tinyraster::{Circle2D, Point, Rasterizer, Rgba, CIRCLE_SEGMENTS};
use tinyraster::{FillMode, GeometryMode};

#[test]
fn t04_circle_vertices_on_radius() {
    let c = Circle2D::new(Point::new(40.0, 30.0), 17.5, common::blue());
    let v = c.vertices();
    assert_eq!(v.len(), CIRCLE_SEGMENTS);
    assert_eq!(v.len(), 30);
    for p in v.iter() {
        assert!((p.position.distance(&c.centre) - 17.5).abs() < 1e-9);
        assert_eq!(p.color, common::blue());
    }
    // Uniform angular steps
    let step = v[0].position.distance(&v[1].position);
    for i in 0 .. v.len() {
        let d = v[i].position.distance(&v[(i + 1) % v.len()].position);
        assert!((d - step).abs() < 1e-9);
    }
}

#[test]
fn t04_unfilled_circle() {
    let mut ras = Rasterizer::new(64, 64);
    ras.clear(Rgba::black());
    ras.set_fill_mode(FillMode::SolidFilled);
    let c = Circle2D::new(Point::new(32.0, 32.0), 20.0, common::red());
    ras.draw_circle(&c, false);
    let px = common::drawn(ras.framebuffer(), Rgba::black());
    assert!(! px.is_empty());
    for &(x, y) in px.iter() {
        let d = Point::new(x as f64, y as f64).distance(&c.centre);
        assert!(d > 17.5 && d < 22.0, "{:?} at {}", (x, y), d);
    }
    assert_eq!(ras.framebuffer().pixel(32, 32), Some(Rgba::black()));
    assert_eq!(ras.framebuffer().pixel(52, 32), Some(common::red()));
}

#[test]
fn t04_filled_circle() {
    let mut ras = Rasterizer::new(64, 64);
    ras.clear(Rgba::white());
    let c = Circle2D::new(Point::new(32.0, 32.0), 20.0, common::red());
    ras.draw_circle(&c, true);
    let fb = ras.framebuffer();
    assert_eq!(fb.pixel(32, 32), Some(common::red()));
    common::assert_rows_solid(fb, Rgba::white(), 14 ..= 50);
    for &(x, y) in common::drawn(fb, Rgba::white()).iter() {
        let d = Point::new(x as f64, y as f64).distance(&c.centre);
        assert!(d < 22.0);
    }
    // Overrides are scoped to the call
    assert_eq!(ras.geometry_mode(), GeometryMode::Line);
    assert_eq!(ras.fill_mode(), FillMode::Unfilled);
    common::save(fb, "t04_filled_circle.png");
}

#[test]
fn t04_degenerate_circles() {
    let mut ras = Rasterizer::new(16, 16);
    ras.clear(Rgba::black());
    ras.set_fill_mode(FillMode::SolidFilled);
    ras.draw_circle(&Circle2D::new(Point::new(8.0, 8.0), -3.0, common::red()), true);
    ras.draw_circle(&Circle2D::new(Point::new(8.0, 8.0), std::f64::NAN, common::red()), true);
    assert!(common::drawn(ras.framebuffer(), Rgba::black()).is_empty());

    ras.draw_circle(&Circle2D::new(Point::new(8.0, 8.0), 0.0, common::red()), true);
    let px = common::drawn(ras.framebuffer(), Rgba::black());
    assert_eq!(px.into_iter().collect::<Vec<_>>(), vec![(8, 8)]);
}
