extern crate mcs_heat_loss;

use clap::Parser;
use mcs_heat_loss::output::FileOutput;
use mcs_heat_loss::{run_project, ProjectFlags};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct McsArgs {
    /// Project JSON describing the building and its rooms
    input_file: String,
    /// Directory to write results to (defaults to the input file's directory)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    /// Treat walls to other rooms as external walls
    #[arg(long, default_value_t = false)]
    no_inter_room: bool,
    /// Also write a per-room CSV breakdown
    #[arg(long, short, default_value_t = false)]
    detailed_output: bool,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = McsArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input_file = Path::new(args.input_file.as_str());
    let input_file_stem = input_file
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("project");
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => input_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mut flags = ProjectFlags::empty();
    if !args.no_inter_room {
        flags.insert(ProjectFlags::INTER_ROOM_TRANSFER);
    }
    if args.detailed_output {
        flags.insert(ProjectFlags::DETAILED_OUTPUT);
    }

    let output = FileOutput::new(output_dir, format!("{input_file_stem}__results_{{}}.{{}}"));

    let results = run_project(BufReader::new(File::open(input_file)?), &output, flags)?;

    info!(
        "{}: design heat loss {:.2} kW",
        results.building.building_name,
        results.building.total_heat_loss.watts / 1000.
    );
    if let Some(heat_pump) = results.heat_pump {
        info!(
            "required heat pump capacity {:.2} kW",
            heat_pump.sizing.required_capacity_kw
        );
    }

    Ok(())
}
