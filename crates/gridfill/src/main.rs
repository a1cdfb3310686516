use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use flexi_logger::Logger;
use gridfill_engine::FillStrategy;

mod demos;
mod renderer;
mod scene_file;

use demos::Demo;
use renderer::TerminalRenderer;
use scene_file::SceneFile;

#[derive(Parser, Debug)]
#[command(version, about = "Draws lines and circles on a dot grid and flood fills the regions they enclose.")]
pub struct Args {
    /// TOML scene file; runs a built-in demo when omitted
    #[arg(value_name = "SCENE")]
    scene: Option<PathBuf>,

    #[arg(help = "Built-in demo to run when no scene file is given (tutor, circles).", long, default_value_t = Demo::default())]
    demo: Demo,

    #[arg(
        help = "Use this strategy for every fill (recursive, depth_first_stack, breadth_first_queue, scanline_span).",
        long
    )]
    strategy: Option<FillStrategy>,

    #[arg(help = "Stroke width in cells for lines, circles and points.", long)]
    stroke_width: Option<u32>,

    #[arg(help = "Pause in milliseconds after every filled cell, redrawing the grid each time.", long, default_value_t = 0)]
    delay_ms: u64,

    #[arg(help = "Disable ANSI colors.", long, default_value_t = false)]
    no_color: bool,

    #[arg(help = "Print the scene as TOML and exit.", long, default_value_t = false)]
    print_scene: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str("info")
        .context("Invalid log specification")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;

    let mut file = match &args.scene {
        Some(path) => SceneFile::load(path)?,
        None => args.demo.scene_file(),
    };
    if let Some(strategy) = args.strategy {
        file.override_strategy(strategy);
    }
    if let Some(width) = args.stroke_width {
        file.stroke_width = width;
    }

    if args.print_scene {
        print!("{}", file.to_toml()?);
        return Ok(());
    }

    let (mut grid, scene) = file.build()?;
    log::info!(
        "Running scene on {}x{} grid: {} primitives, {} fills",
        grid.columns(),
        grid.rows(),
        scene.primitives.len(),
        scene.fills.len()
    );

    let mut renderer = TerminalRenderer::new(io::stdout().lock(), grid.columns(), grid.rows())
        .with_color(!args.no_color)
        .with_delay(args.delay_ms);
    let report = scene.run(&mut grid, &mut renderer)?;
    renderer.present().context("Failed to write grid")?;
    drop(renderer);

    println!();
    println!("{} primitives drawn, {} skipped", report.drawn, report.skipped);
    for (request, trace) in scene.fills.iter().zip(&report.traces) {
        println!("fill at {}: {trace}", request.seed);
    }
    Ok(())
}
