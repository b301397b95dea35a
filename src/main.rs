//! Headless driver: generate a cage, print its info card and stats,
//! optionally step the viewer for a number of frames and export the
//! geometry as JSON.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use bucky::engine::ViewerEngine;
use bucky::error::BuckyError;
use bucky::molecule::MoleculeKind;
use bucky::options::Options;
use bucky::util::frame_timing::FrameTiming;
use clap::Parser;

/// Simulated frame step (60 fps).
const FRAME_DT: f32 = 1.0 / 60.0;

/// Viewport used for camera aspect when no window exists.
const VIEWPORT: (u32, u32) = (1280, 720);

#[derive(Parser)]
#[command(
    name = "bucky",
    version,
    about = "Fullerene cage generator and ball-and-stick viewer driver"
)]
struct Cli {
    /// Molecule to generate: c60, c70 or c84 (unknown tags fall back to
    /// C60)
    molecule: Option<String>,

    /// Options TOML file
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Step the viewer this many frames at 60 fps
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    frames: u32,

    /// Write the generated cage as pretty JSON
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Print the options JSON schema and exit
    #[arg(long)]
    schema: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp(None)
    .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BuckyError> {
    let mut out = std::io::stdout().lock();

    if cli.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        writeln!(out, "{schema}")?;
        return Ok(());
    }

    let mut options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(tag) = &cli.molecule {
        options.display.molecule = MoleculeKind::from_tag(tag);
    }

    let mut engine = ViewerEngine::new(options, VIEWPORT);
    write_summary(&mut out, &engine)?;

    if cli.frames > 0 {
        let mut timing = FrameTiming::new(0);
        let mut bytes = 0;
        for _ in 0..cli.frames {
            engine.update(FRAME_DT);
            let frame = engine.prepare_frame();
            bytes = frame.sphere_bytes().len() + frame.cylinder_bytes().len();
            let _ = timing.end_frame();
        }
        let [x, y, z] = engine.state().euler();
        writeln!(
            out,
            "after {frames} frames: rotation ({x:.4}, {y:.4}, {z:.4}), \
             {bytes} instance bytes/frame",
            frames = cli.frames
        )?;
        log::debug!("prepared frames at {:.0} fps", timing.fps());
    }

    if let Some(path) = &cli.export {
        std::fs::write(path, engine.molecule().to_json()?)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn write_summary(
    out: &mut impl Write,
    engine: &ViewerEngine,
) -> Result<(), BuckyError> {
    let molecule = engine.molecule();
    let lengths: Vec<f32> = molecule
        .bonds()
        .iter()
        .filter_map(|bond| bond.length(molecule.atoms()))
        .collect();
    let shortest = lengths.iter().copied().fold(f32::INFINITY, f32::min);
    let longest = lengths.iter().copied().fold(0.0, f32::max);

    writeln!(out, "{}", molecule.info())?;
    writeln!(out)?;
    writeln!(out, "atoms:           {}", molecule.atoms().len())?;
    writeln!(
        out,
        "bonds:           {} (threshold {:.2})",
        molecule.bonds().len(),
        molecule.bond_threshold()
    )?;
    if !lengths.is_empty() {
        writeln!(out, "bond length:     {shortest:.3} .. {longest:.3}")?;
    }
    writeln!(out, "bounding radius: {:.3}", molecule.bounding_radius())?;
    Ok(())
}
