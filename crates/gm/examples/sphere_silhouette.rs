//! ASCII render of a lit sphere: one ray per character cell.
//!
//! Purpose
//! - Exercise the ray–sphere query the way a tiny ray tracer would: hit point,
//!   surface normal via `normalized`, Lambert term via `dot`, and `clamp`.
//!
//! Run with `cargo run -p gm --example sphere_silhouette`.

use gm::{cord_mul, Line3, Sphere, Vector3};

const WIDTH: usize = 48;
const HEIGHT: usize = 24;
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() {
    let sphere = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
    let eye = Vector3::new(0.0, 0.0, -4.0);
    let light = Vector3::new(-1.0, 1.0, -1.0)
        .normalized()
        .expect("light direction is non-zero");
    // Character cells are roughly twice as tall as wide.
    let aspect = Vector3::new(1.0, 2.0, 1.0);

    let mut hits = 0usize;
    for row in 0..HEIGHT {
        let mut line = String::with_capacity(WIDTH);
        for col in 0..WIDTH {
            let u = (col as f64 + 0.5) / WIDTH as f64 * 2.0 - 1.0;
            let v = 1.0 - (row as f64 + 0.5) / HEIGHT as f64 * 2.0;
            let screen = cord_mul(&Vector3::new(u * 0.8, v * 0.4, 1.0), &aspect);
            let ray = Line3::new(eye, screen);
            let shade = match sphere.closest_intersection(&ray) {
                Some(hit) => {
                    hits += 1;
                    let normal = (hit - sphere.center())
                        .normalized()
                        .expect("hit point is on the sphere");
                    let mut lambert = Vector3::splat(normal.dot(&light));
                    lambert.clamp(0.0, 1.0);
                    let idx = (lambert.x() * (SHADES.len() - 1) as f64).round() as usize;
                    SHADES[idx.max(1)]
                }
                None => b' ',
            };
            line.push(shade as char);
        }
        println!("{line}");
    }
    println!("hits: {hits} / {}", WIDTH * HEIGHT);
}
