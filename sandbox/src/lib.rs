//! **sandbox**
#![deny(
    missing_debug_implementations,
    trivial_casts, trivial_numeric_casts,
    unsafe_code,
    unused_import_braces, unused_qualifications
)]


// External Dependencies ------------------------------------------------------
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;


// Internal Dependencies ------------------------------------------------------
use lighting::{Point2, Scene};


// Sandbox Runner -------------------------------------------------------------

/// Relights `scene` once per frame and returns the time spent in
/// milliseconds. A `seed` makes the shadow jitter reproducible.
pub fn run(scene: &mut Scene, frames: u32, seed: Option<u64>) -> u64 {

    let start = clock_ticks::precise_time_ms();

    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..frames {
                scene.relight_with(&mut rng);
            }
        },
        None => {
            for _ in 0..frames {
                scene.relight();
            }
        }
    }

    let elapsed = clock_ticks::precise_time_ms() - start;
    info!("[Sandbox] Relit {} frame(s) in {}ms", frames, elapsed);
    elapsed

}

/// One line per occluder with its position, last intensity and colors.
pub fn report(scene: &Scene) -> String {

    let light = scene.light().position();
    let mut out = format!(
        "light ({:.1}, {:.1}) strength {:.2}\n",
        light.x, light.y, scene.light().strength()
    );

    for (i, o) in scene.occluders().iter().enumerate() {
        let p = o.position();
        let intensity = match o.intensity() {
            Some(intensity) => format!("{:.3}", intensity),
            None => "-".to_string()
        };
        out.push_str(&format!(
            "#{} ({:.1}, {:.1}) r={:.1} intensity {} base {:?} -> {:?}\n",
            i, p.x, p.y, o.radius(),
            intensity,
            o.base_color().to_array(),
            o.current_color().to_array()
        ));
    }

    out

}

/// Parses `X,Y` into a point, as taken by `--light`.
pub fn parse_point(value: &str) -> Result<Point2, String> {
    let mut parts = value.splitn(2, ',');
    match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => {
            let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
            let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
            Ok(Point2::new(x, y))
        },
        _ => Err(format!("expected X,Y but got '{}'", value))
    }
}
