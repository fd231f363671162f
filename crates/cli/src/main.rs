use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use gm::algo::{
    distance2_point_line, distance_point_line_2d, line_intersection, ray_line_intersection,
    solve_quadratic,
};
use gm::{Line2, Line3, Sphere, Vector2, Vector3};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;
mod provenance;

use args::{parse_vec2, parse_vec3};

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(about = "Evaluate geometry queries and print the result as JSON")]
struct Cmd {
    /// Also write the result to this path, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Closest intersection of a ray with a sphere
    Sphere {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        center: Vector3<f64>,
        #[arg(long)]
        radius: f64,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        start: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vector3<f64>,
    },
    /// Intersection of two infinite 2D lines
    Lines {
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        a_start: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        a_dir: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        b_start: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        b_dir: Vector2<f64>,
    },
    /// Intersection of a 2D ray with an infinite line
    RayLine {
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        ray_start: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        ray_dir: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        line_start: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        line_dir: Vector2<f64>,
    },
    /// Squared distance from a point to a 3D line
    Distance {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        start: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        point: Vector3<f64>,
    },
    /// Distance (not squared) from a point to a 2D line
    Distance2d {
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        start: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        dir: Vector2<f64>,
        #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
        point: Vector2<f64>,
    },
    /// Real roots of a·x² + b·x + c
    Quadratic {
        #[arg(long, allow_hyphen_values = true)]
        a: f64,
        #[arg(long, allow_hyphen_values = true)]
        b: f64,
        #[arg(long, allow_hyphen_values = true)]
        c: f64,
    },
    /// Print library version and code revision
    Report,
}

/// One evaluated query: what was asked and what came back.
#[derive(Serialize, Debug)]
struct Outcome {
    query: &'static str,
    params: Value,
    result: Value,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = evaluate(&cmd.action)?;
    let text = serde_json::to_string_pretty(&outcome)?;
    println!("{text}");
    if let Some(out) = &cmd.out {
        write_outcome(out, &outcome, &text)?;
    }
    Ok(())
}

fn write_outcome(out: &Path, outcome: &Outcome, text: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, outcome.query, &outcome.params)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote result");
    Ok(())
}

fn nonzero2(v: Vector2<f64>, what: &str) -> Result<Vector2<f64>> {
    ensure!(v != Vector2::zeros(), "{what} must be non-zero");
    Ok(v)
}

fn nonzero3(v: Vector3<f64>, what: &str) -> Result<Vector3<f64>> {
    ensure!(v != Vector3::zeros(), "{what} must be non-zero");
    Ok(v)
}

fn hit_json<const N: usize>(query: &str, hit: Option<gm::Vector<f64, N>>) -> Value {
    match hit {
        Some(p) => json!(p.coords().to_vec()),
        None => {
            tracing::debug!(query, "no result");
            Value::Null
        }
    }
}

fn evaluate(action: &Action) -> Result<Outcome> {
    let outcome = match *action {
        Action::Sphere {
            center,
            radius,
            start,
            dir,
        } => {
            tracing::info!(%center, radius, %start, %dir, "sphere");
            ensure!(radius.is_finite() && radius >= 0.0, "radius must be finite and >= 0");
            let sphere = Sphere::new(center, radius);
            let ray = Line3::new(start, nonzero3(dir, "ray direction")?);
            Outcome {
                query: "sphere",
                params: json!({
                    "center": center.coords(),
                    "radius": radius,
                    "start": start.coords(),
                    "dir": dir.coords(),
                }),
                result: json!({ "hit": hit_json("sphere", sphere.closest_intersection(&ray)) }),
            }
        }
        Action::Lines {
            a_start,
            a_dir,
            b_start,
            b_dir,
        } => {
            tracing::info!(%a_start, %a_dir, %b_start, %b_dir, "lines");
            let a = Line2::new(a_start, nonzero2(a_dir, "line A direction")?);
            let b = Line2::new(b_start, nonzero2(b_dir, "line B direction")?);
            Outcome {
                query: "lines",
                params: json!({
                    "a_start": a_start.coords(),
                    "a_dir": a_dir.coords(),
                    "b_start": b_start.coords(),
                    "b_dir": b_dir.coords(),
                }),
                result: json!({ "hit": hit_json("lines", line_intersection(&a, &b)) }),
            }
        }
        Action::RayLine {
            ray_start,
            ray_dir,
            line_start,
            line_dir,
        } => {
            tracing::info!(%ray_start, %ray_dir, %line_start, %line_dir, "ray-line");
            let ray = Line2::new(ray_start, nonzero2(ray_dir, "ray direction")?);
            let line = Line2::new(line_start, nonzero2(line_dir, "line direction")?);
            Outcome {
                query: "ray-line",
                params: json!({
                    "ray_start": ray_start.coords(),
                    "ray_dir": ray_dir.coords(),
                    "line_start": line_start.coords(),
                    "line_dir": line_dir.coords(),
                }),
                result: json!({ "hit": hit_json("ray-line", ray_line_intersection(&ray, &line)) }),
            }
        }
        Action::Distance { start, dir, point } => {
            tracing::info!(%start, %dir, %point, "distance");
            let line = Line3::new(start, nonzero3(dir, "line direction")?);
            Outcome {
                query: "distance",
                params: json!({
                    "start": start.coords(),
                    "dir": dir.coords(),
                    "point": point.coords(),
                }),
                result: json!({ "distance2": distance2_point_line(&point, &line) }),
            }
        }
        Action::Distance2d { start, dir, point } => {
            tracing::info!(%start, %dir, %point, "distance2d");
            let line = Line2::new(start, nonzero2(dir, "line direction")?);
            Outcome {
                query: "distance2d",
                params: json!({
                    "start": start.coords(),
                    "dir": dir.coords(),
                    "point": point.coords(),
                }),
                result: json!({ "distance": distance_point_line_2d(&point, &line) }),
            }
        }
        Action::Quadratic { a, b, c } => {
            tracing::info!(a, b, c, "quadratic");
            let roots = solve_quadratic(a, b, c);
            Outcome {
                query: "quadratic",
                params: json!({ "a": a, "b": b, "c": c }),
                result: json!({ "count": roots.count(), "roots": roots.roots() }),
            }
        }
        Action::Report => Outcome {
            query: "report",
            params: json!({}),
            result: json!({
                "gm_version": gm::VERSION,
                "code_rev": provenance::current_git_rev(),
            }),
        },
    };
    Ok(outcome)
}
