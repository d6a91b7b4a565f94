
extern crate agl;

use agl::{Canvas, Point, PrimitiveType, Rgb8};
use agl::Pixel;

use std::f64::consts::PI;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
    std::fs::create_dir_all("tests/tmp").unwrap();
}

fn sierpinski(canvas: &mut Canvas, p1: Point, p2: Point, p3: Point, n: usize, filled: bool) {
    canvas.begin(PrimitiveType::OutlinedTriangles);
    canvas.vertex_point(p1);
    canvas.vertex_point(p2);
    canvas.vertex_point(p3);
    canvas.end();

    let p1p2 = canvas.mid_point(&p1, &p2);
    let p1p3 = canvas.mid_point(&p1, &p3);
    let p2p3 = canvas.mid_point(&p2, &p3);

    if filled {
        canvas.begin(PrimitiveType::Triangles);
        canvas.vertex_point(p1p2);
        canvas.vertex_point(p2p3);
        canvas.vertex_point(p1p3);
        canvas.end();
    }
    if n > 1 {
        sierpinski(canvas, p1, p1p2, p1p3, n-1, filled);
        sierpinski(canvas, p1p2, p2, p2p3, n-1, filled);
        sierpinski(canvas, p1p3, p2p3, p3, n-1, filled);
    }
}

fn fractal_hexagon(canvas: &mut Canvas, c: Point, v: Point, n: usize, filled: bool, k: &mut u8) {
    if n == 1 {
        *k = k.wrapping_add(37);
        let c = c.with_color(Rgb8::new(*k, k.wrapping_mul(3), 255 - *k));
        let kind = if filled { PrimitiveType::Polygons } else { PrimitiveType::OutlinedPolygons };
        canvas.begin(kind);
        canvas.center_point(c);
        canvas.side(6);
        canvas.orientation(v.x, v.y);
        canvas.end();
        canvas.clear_polygon_vertices();
        return;
    }
    canvas.polygon(c, v, 6);
    let p = canvas.polygon_vertices().to_vec();
    canvas.clear_polygon_vertices();
    for i in 0 .. 6 {
        let next = p[(i + 1) % 6];
        let new_c = canvas.mid_point(&p[i], &next);
        let new_v = canvas.directional_vector(&new_c, &next);
        fractal_hexagon(canvas, new_c, new_v, n-1, filled, k);
    }
}

#[test]
fn sierpinski_triangle() {
    setup();
    let mut canvas = Canvas::new(320, 320);
    canvas.background_corners(Rgb8::new(255,2,142), Rgb8::new(255,152,25),
                              Rgb8::new(135,198,255), Rgb8::new(116,255,168));
    canvas.begin(PrimitiveType::OutlinedPolygons);
    canvas.center(160, 180);
    canvas.side(3);
    canvas.orientation(0, -120);
    canvas.end();

    let v = canvas.polygon_vertices().to_vec();
    assert_eq!(v.len(), 3);
    canvas.clear_polygon_vertices();
    let p1 = v[0].with_color(Rgb8::new(0,255,255));
    let p2 = v[1].with_color(Rgb8::new(230,0,230));
    let p3 = v[2].with_color(Rgb8::new(255,255,0));

    sierpinski(&mut canvas, p1, p2, p3, 5, true);
    assert_eq!(canvas.primitive(), PrimitiveType::Undefined);
    // Apex
    assert_eq!(canvas.pixel_color(60, 160), p1.color);
    canvas.save("tests/tmp/sierpinski.png").unwrap();
}

#[test]
fn sierpinski_wallpaper() {
    setup();
    let mut canvas = Canvas::new(320, 160);
    let (y, m, c) = (Rgb8::new(255,255,0), Rgb8::new(255,0,255), Rgb8::new(0,255,255));
    for i in 0 .. 5 {
        for j in 0 .. 11 {
            let (p1, p2, p3) = if j % 2 == 0 {
                (Point::new(j*32, i*32, y), Point::new((j-1)*32, (i+1)*32, m), Point::new((j+1)*32, (i+1)*32, c))
            } else {
                (Point::new(j*32, (i+1)*32, y), Point::new((j-1)*32, i*32, m), Point::new((j+1)*32, i*32, c))
            };
            sierpinski(&mut canvas, p1, p2, p3, 4, false);
        }
    }
    // Shared corner in the last row, the last triangle drawn wins
    assert_eq!(canvas.pixel_color(128, 256), m);
    // Center of a triangle is left open
    assert_eq!(canvas.pixel_color(21, 64), Rgb8::black());
    canvas.save("tests/tmp/sierpinski_wallpaper.ppm").unwrap();
}

#[test]
fn fractal_hexagon_tiling() {
    setup();
    let mut canvas = Canvas::new(320, 320);
    canvas.background(Rgb8::white());
    let mut k = 0;
    fractal_hexagon(&mut canvas, Point::xy(160, 160), Point::xy(160, 0), 3, true, &mut k);
    assert!(canvas.polygon_vertices().is_empty());
    let white = canvas.pixels().data().chunks(3).filter(|p| **p == [255u8, 255, 255][..]).count();
    assert!(white < 320 * 320);
    canvas.save("tests/tmp/hexagon_filled.png").unwrap();

    canvas.background(Rgb8::black());
    fractal_hexagon(&mut canvas, Point::xy(160, 160), Point::xy(160, 0), 3, false, &mut k);
    assert!(canvas.pixels().data().iter().any(|&v| v != 0));
    canvas.save("tests/tmp/hexagon.png").unwrap();
}

#[test]
fn pokemon_ball() {
    setup();
    let white = Rgb8::white();
    let red = Rgb8::new(255,31,31);
    let black = Rgb8::black();
    let mut canvas = Canvas::new(200, 200);
    canvas.background(Rgb8::new(21,0,255));

    canvas.begin(PrimitiveType::Sectors);
    canvas.color(255,255,255);
    canvas.center(100, 100);
    canvas.orientation(70, 0);
    canvas.angle(PI);
    canvas.color(255,31,31);
    canvas.center(100, 100);
    canvas.orientation(-70, 0);
    canvas.angle(PI);
    canvas.end();
    // Rotation runs clockwise on screen, the first half covers the bottom
    assert_eq!(canvas.pixel_color(150, 100), white);
    assert_eq!(canvas.pixel_color(50, 100), red);

    canvas.begin(PrimitiveType::OutlinedCircles);
    canvas.color(0,0,0);
    for r in 70 .. 74 {
        canvas.center(100, 100);
        canvas.radius(r);
    }
    canvas.end();

    canvas.begin(PrimitiveType::Lines);
    for dy in -2 ..= 2 {
        canvas.vertex(30, 100 + dy);
        canvas.vertex(170, 100 + dy);
    }
    canvas.end();

    canvas.begin(PrimitiveType::Circles);
    canvas.center(100, 100);
    canvas.radius(24);
    canvas.color(255,255,255);
    canvas.center(100, 100);
    canvas.radius(16);
    canvas.end();

    assert_eq!(canvas.pixel_color(100, 100), white);
    assert_eq!(canvas.pixel_color(100, 120), black);
    assert_eq!(canvas.pixel_color(100, 40), black);
    assert_eq!(canvas.pixel_color(100, 160), black);
    assert_eq!(canvas.pixels().get(0, 0), Rgb8::new(21,0,255));
    canvas.save("tests/tmp/pokemon_ball.png").unwrap();
}
