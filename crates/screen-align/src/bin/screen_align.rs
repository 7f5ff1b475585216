use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use screen_align::core::{init_with_level, render_checkerboard};
use screen_align::{
    load_gray, save_gray, AlignmentChecker, AlignmentReport, CheckConfig, CornerSetFile,
};

#[derive(Parser)]
#[command(
    name = "screen-align",
    version,
    about = "Checkerboard alignment checks for camera/projector calibration"
)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare a test capture against a reference capture.
    Check {
        /// JSON config describing the run (images, corner sets, tolerances).
        #[arg(long)]
        config: PathBuf,
        /// Write the JSON report here, overriding the config.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Render the reference checkerboard pattern to an image file.
    Render {
        /// Interior-corner rows.
        #[arg(long, default_value_t = 7)]
        rows: usize,
        /// Interior-corner columns.
        #[arg(long, default_value_t = 7)]
        cols: usize,
        /// Square side length in pixels.
        #[arg(long, default_value_t = 100)]
        square_px: usize,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = init_with_level(level);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Check { config, report } => run_check(&config, report),
        Command::Render {
            rows,
            cols,
            square_px,
            output,
        } => {
            let board = render_checkerboard(rows, cols, square_px);
            save_gray(&board, &output)?;
            println!(
                "wrote {}x{} checkerboard to {}",
                board.width,
                board.height,
                output.display()
            );
            Ok(true)
        }
    }
}

fn run_check(config: &PathBuf, report_override: Option<PathBuf>) -> Result<bool, Box<dyn Error>> {
    let cfg = CheckConfig::load_json(config)?;
    let params = cfg.params.unwrap_or_default();

    let reference = load_gray(&cfg.reference_image)?;
    let test = load_gray(&cfg.test_image)?;
    let reference_corners = CornerSetFile::load_json(&cfg.reference_corners)?;
    let test_corners = CornerSetFile::load_json(&cfg.test_corners)?;

    let checker = AlignmentChecker::new(params);
    let report = checker.check_corners(
        &reference.view(),
        reference_corners.points(),
        &test.view(),
        test_corners.points(),
    )?;

    print_report(&report);

    let report_path = report_override.or_else(|| cfg.report_path.as_ref().map(PathBuf::from));
    if let Some(path) = report_path {
        report.write_json(&path)?;
        println!("report written to {}", path.display());
    }

    Ok(report.verdict.is_aligned)
}

fn print_report(report: &AlignmentReport) {
    let mark = |ok: bool| if ok { "ok" } else { "FAIL" };
    let verdict = &report.verdict;
    let diff = &report.differences;
    let borders = &report.borders;

    println!(
        "border intensities: top {:.1} bottom {:.1} left {:.1} right {:.1}",
        borders.top.intensity,
        borders.bottom.intensity,
        borders.left.intensity,
        borders.right.intensity
    );
    println!("screen borders: {}", mark(verdict.no_screen_borders));
    println!(
        "horizontal difference: {:.3} {}",
        diff.horizontal_difference,
        mark(verdict.is_horizontal_aligned)
    );
    println!(
        "vertical difference: {:.3} {}",
        diff.vertical_difference,
        mark(verdict.is_vertical_aligned)
    );
    println!(
        "width ratio: {:.3} vs {:.3}, height ratio: {:.3} vs {:.3} {}",
        report.reference.width_ratio,
        report.test.width_ratio,
        report.reference.height_ratio,
        report.test.height_ratio,
        mark(verdict.is_scale_aligned)
    );
    println!(
        "rotation error: {:.2} deg {}",
        diff.rotation_error_deg,
        mark(verdict.is_rotation_aligned)
    );
    println!(
        "overall: {}",
        if verdict.is_aligned { "PASS" } else { "FAIL" }
    );
}
