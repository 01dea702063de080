//! Ranks a handful of targets around a sentry and reports which it can see.
//!
//! Usage:
//! ```text
//! cargo run --example rank_targets                       # Magnitude, nearest first
//! cargo run --example rank_targets -- clockwise farthest
//! RUST_LOG=azimuth=trace cargo run --example rank_targets
//! ```

use azimuth::math::{Point2, Point3};
use azimuth::ranking::ranked;
use azimuth::{FieldOfView, Locatable, Pose, RankContext, RankMode, TieBreak, ViewCone};

/// A named scene object, adapted to the ranking traits.
struct Prop {
    name: &'static str,
    position: Point3,
}

impl Locatable for Prop {
    fn position_2d(&self) -> Point2 {
        self.position.position_2d()
    }
}

fn parse_mode(arg: Option<&str>) -> RankMode {
    match arg {
        Some("clockwise") => RankMode::Clockwise,
        Some("counter-clockwise" | "ccw") => RankMode::CounterClockwise,
        _ => RankMode::Magnitude,
    }
}

fn parse_tie_break(arg: Option<&str>) -> TieBreak {
    match arg {
        Some("none") => TieBreak::None,
        Some("farthest") => TieBreak::Farthest,
        _ => TieBreak::Nearest,
    }
}

fn main() -> azimuth::Result<()> {
    // Default: WARN for everything, INFO for azimuth.
    // Override with RUST_LOG env var (e.g. RUST_LOG=azimuth=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("rank_targets=info".parse().unwrap_or_default())
        .add_directive("azimuth=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_mode(args.first().map(String::as_str));
    let tie_break = parse_tie_break(args.get(1).map(String::as_str));

    let sentry = Pose::from_yaw(Point3::new(0.0, 1.7, 0.0), 30.0);
    let fov = FieldOfView::new(110.0)?;
    let cone = ViewCone::from_observer(&sentry, fov);
    let ctx = RankContext::from_observer(&sentry, mode, tie_break);

    let props = [
        Prop {
            name: "crate",
            position: Point3::new(4.0, 0.0, 6.0),
        },
        Prop {
            name: "barrel",
            position: Point3::new(-3.0, 0.0, 5.0),
        },
        Prop {
            name: "door",
            position: Point3::new(8.0, 2.5, 0.5),
        },
        Prop {
            name: "lamp",
            position: Point3::new(2.0, 4.0, 3.0),
        },
        Prop {
            name: "cart",
            position: Point3::new(0.0, 0.0, -7.0),
        },
    ];

    for (rank, prop) in ranked(&ctx, props.iter()).enumerate() {
        tracing::info!(
            rank,
            name = prop.name,
            key = ctx.key(prop),
            visible = cone.contains(prop),
            "target"
        );
    }
    Ok(())
}
