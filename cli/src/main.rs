//! `sunkist` CLI: headless dashboard runs and config export.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::types::{point, Point};
use dashboard_core::{Dashboard, DashboardConfig, DrawList};
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sunkist", about = "Headless Sunkist OS dashboard runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the dashboard without a window and report frame statistics.
    Run {
        /// Simulated wall-clock duration
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Random seed for reproducibility
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Scripted pointer movement
        #[arg(long, value_enum, default_value = "orbit")]
        pointer: PointerScript,
        /// JSON config overriding the stock layout
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write statistics and the final log panel to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default configuration as JSON.
    DefaultConfig {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Where the simulated cursor is at time `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PointerScript {
    /// Cursor outside the window
    Idle,
    /// Circles the particle emitter (radius 120 px, 4 s per turn)
    Orbit,
    /// Slides down the sidebar button column (3 s per pass)
    Sweep,
}

impl PointerScript {
    fn position(self, t: f32, config: &DashboardConfig) -> Option<Point> {
        match self {
            PointerScript::Idle => None,
            PointerScript::Orbit => {
                let angle = t * TAU / 4.0;
                Some(point(config.particles.origin) + Point::new(angle.cos(), angle.sin()) * 120.0)
            }
            PointerScript::Sweep => {
                let sb = &config.sidebar;
                let span = sb.spacing * sb.icons.len() as f32;
                Some(Point::new(
                    sb.origin[0] + sb.size / 2.0,
                    sb.origin[1] + (t / 3.0).fract() * span,
                ))
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seconds,
            fps,
            seed,
            pointer,
            config,
            output,
        } => {
            let config = DashboardConfig::load_or_default(config.as_deref())
                .context("could not load the dashboard config")?;
            run_headless(config, seconds, fps, seed, pointer, output.as_deref())?;
        }
        Commands::DefaultConfig { output } => {
            let json = DashboardConfig::default().to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("could not write {}", path.display()))?;
                    println!("Default config saved to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn run_headless(
    config: DashboardConfig,
    seconds: f32,
    fps: f32,
    seed: u64,
    script: PointerScript,
    output_path: Option<&Path>,
) -> Result<()> {
    if !(fps.is_finite() && fps > 0.0) || !(seconds.is_finite() && seconds >= 0.0) {
        bail!("--fps must be positive and --seconds non-negative, both finite");
    }

    let dt = 1.0 / fps;
    let frames = (seconds * fps).round() as u64;
    let mut dashboard = Dashboard::new(config.clone(), seed);

    println!(
        "Running dashboard headless: {seconds:.1}s @ {fps:.1}fps (seed={seed}, pointer={script:?})..."
    );
    let start = std::time::Instant::now();

    let mut t = 0.0f32;
    for _ in 0..frames {
        dashboard.tick(dt, script.position(t, &config));
        t += dt;
    }

    let mut list = DrawList::new();
    dashboard.draw(&mut list, "headless");
    let elapsed = start.elapsed();

    let stats = dashboard.stats();
    tracing::info!(
        frames = stats.frames,
        respawned = stats.particles_respawned,
        "Headless run finished"
    );
    println!(
        "Done: {} frames, {} respawns, {} log lines appended, {} hover frames, elapsed={:.3}s",
        stats.frames,
        stats.particles_respawned,
        stats.log_appends,
        stats.hover_frames,
        elapsed.as_secs_f64(),
    );
    println!("Last frame: {} draw commands", list.len());
    println!("Log panel ({} / {}):", dashboard.log().len(), dashboard.log().max_lines());
    for msg in dashboard.log().messages() {
        println!("  {}", msg.text);
    }

    if let Some(opath) = output_path {
        let log: Vec<_> = dashboard.log().messages().collect();
        let json = serde_json::json!({
            "seed": seed,
            "fps": fps,
            "pointer": format!("{script:?}").to_lowercase(),
            "stats": stats,
            "draw_commands": list.len(),
            "log": log,
            "elapsed_s": elapsed.as_secs_f64(),
        });
        std::fs::write(opath, serde_json::to_string_pretty(&json)?)?;
        println!("Metrics saved to {}", opath.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_stays_in_button_column() {
        let cfg = DashboardConfig::default();
        for i in 0..300 {
            let p = PointerScript::Sweep.position(i as f32 * 0.01, &cfg).unwrap();
            assert_eq!(p.x, 50.0);
            assert!(p.y >= 100.0 && p.y < 500.0);
        }
    }

    #[test]
    fn orbit_circles_the_emitter() {
        let cfg = DashboardConfig::default();
        let p = PointerScript::Orbit.position(1.0, &cfg).unwrap();
        assert!(((p - point(cfg.particles.origin)).norm() - 120.0).abs() < 1e-3);
        assert_eq!(PointerScript::Idle.position(1.0, &cfg), None);
    }

    #[test]
    fn headless_run_writes_metrics() {
        let path = std::env::temp_dir().join(format!("sunkist-run-{}.json", std::process::id()));
        run_headless(
            DashboardConfig::default(),
            4.0,
            60.0,
            7,
            PointerScript::Sweep,
            Some(&path),
        )
        .unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["stats"]["frames"], 240);
        assert_eq!(json["pointer"], "sweep");
        assert_eq!(json["log"].as_array().unwrap().len(), 2);
        assert!(json["stats"]["hover_frames"].as_u64().unwrap() > 0);
    }

    #[test]
    fn rejects_non_positive_fps() {
        let err = run_headless(DashboardConfig::default(), 1.0, 0.0, 1, PointerScript::Idle, None);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_infinite_fps_and_duration() {
        let cfg = DashboardConfig::default();
        let run = |seconds, fps| {
            run_headless(cfg.clone(), seconds, fps, 1, PointerScript::Idle, None)
        };
        assert!(run(1.0, f32::INFINITY).is_err());
        assert!(run(f32::INFINITY, 60.0).is_err());
        assert!(run(f32::NAN, 60.0).is_err());
    }
}
