//! Terminal heatmap demo
//!
//! Builds a synthetic temperature series (a hot spot spreading and cooling,
//! from a closed-form expression plus noise) and shows it either as a live
//! heatmap updated frame by frame or as a 2x2 snapshot grid.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless -- --mode live --steps 200
//! cargo run --package demo-headless -- --mode snapshots --colormap hot
//! ```

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use heat_view_core::{
    Colormap, Field, ImageStyle, LiveHeatmap, Presenter, RenderError, Seconds, SnapshotGrid,
    TerminalPresenter, TimeSeries,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ambient temperature of the synthetic field in °C
const AMBIENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// One panel redrawn at every time step
    Live,
    /// Four frames of the whole series in a 2x2 grid
    Snapshots,
}

/// Heatmap demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "heat-view-demo")]
#[command(about = "Terminal heatmap demo on a synthetic temperature field", long_about = None)]
struct Args {
    /// Display mode
    #[arg(short, long, value_enum, default_value_t = Mode::Live)]
    mode: Mode,

    /// Grid rows
    #[arg(long, default_value_t = 40)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 60)]
    cols: usize,

    /// Number of time steps
    #[arg(short, long, default_value_t = 120)]
    steps: usize,

    /// Time step in seconds
    #[arg(long, default_value_t = 0.05)]
    dt: f64,

    /// Colormap (jet, hot, gray)
    #[arg(short, long, default_value = "jet")]
    colormap: Colormap,

    /// Peak temperature rise of the hot spot in °C
    #[arg(long, default_value_t = 300.0)]
    peak: f64,

    /// Spread rate of the hot spot (cells² per second)
    #[arg(long, default_value_t = 40.0)]
    diffusivity: f64,

    /// Noise amplitude in °C
    #[arg(long, default_value_t = 1.5)]
    noise: f64,

    /// Random seed for the noise
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Delay between live frames in milliseconds
    #[arg(long, default_value_t = 40)]
    frame_ms: u64,

    /// How long to keep the final picture on screen in milliseconds
    #[arg(long, default_value_t = 3000)]
    hold_ms: u64,
}

/// Closed-form spreading Gaussian hot spot centered in the grid
fn sample_series(args: &Args) -> Result<TimeSeries, RenderError> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let noise = args.noise.abs();
    let center_r = args.rows as f64 / 2.0;
    let center_c = args.cols as f64 / 3.0;
    let sigma0_sq = (args.rows.min(args.cols) as f64 / 12.0).max(1.0).powi(2);

    let mut series = TimeSeries::default();
    for step in 0..args.steps {
        let t = step as f64 * args.dt;
        let sigma_sq = sigma0_sq + 2.0 * args.diffusivity * t;
        let amplitude = args.peak * sigma0_sq / sigma_sq;
        let field = Field::from_fn(args.rows, args.cols, |r, c| {
            let dr = r as f64 - center_r;
            let dc = c as f64 - center_c;
            let spot = amplitude * (-(dr * dr + dc * dc) / (2.0 * sigma_sq)).exp();
            AMBIENT + spot + rng.random_range(-noise..=noise)
        });
        series.push(field)?;
    }
    Ok(series)
}

fn run_live<P: Presenter>(
    series: &TimeSeries,
    dt: Seconds,
    style: ImageStyle,
    presenter: P,
    frame_delay: Duration,
) -> Result<(), RenderError> {
    let mut heatmap = LiveHeatmap::with_style(series.frame_at(0)?.clone(), presenter, style)?;
    for (step, field) in series.iter().enumerate().skip(1) {
        heatmap.update(field.clone(), dt.at_step(step as isize))?;
        thread::sleep(frame_delay);
    }
    info!("Live demo finished after {} updates", heatmap.updates());
    Ok(())
}

fn run_snapshots<P: Presenter>(
    series: &TimeSeries,
    dt: Seconds,
    style: ImageStyle,
    presenter: P,
) -> Result<(), RenderError> {
    let mut grid = SnapshotGrid::with_style(presenter, style);
    grid.plot(series, dt)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout belongs to the terminal UI, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let series = match sample_series(&args) {
        Ok(series) if !series.is_empty() => series,
        Ok(_) => {
            eprintln!("Nothing to show: --steps must be at least 1");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to build sample series: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Built {} frames of {}x{}, dt={}",
        series.len(),
        args.rows,
        args.cols,
        Seconds::new(args.dt)
    );

    let style = ImageStyle::default().with_colormap(args.colormap);
    let dt = Seconds::new(args.dt);
    let mut presenter = TerminalPresenter::from_terminal(ratatui::init());

    let result = match args.mode {
        Mode::Live => run_live(
            &series,
            dt,
            style,
            &mut presenter,
            Duration::from_millis(args.frame_ms),
        ),
        Mode::Snapshots => run_snapshots(&series, dt, style, &mut presenter),
    };
    if result.is_ok() {
        thread::sleep(Duration::from_millis(args.hold_ms));
    }
    ratatui::restore();

    match result {
        Ok(()) => {
            println!("Drew {} frames", presenter.frames_drawn());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
