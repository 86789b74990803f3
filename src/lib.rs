#![allow(clippy::too_many_arguments)]

pub mod core;
pub mod corpus;
pub mod errors;
pub mod external_conditions;
pub mod input;
pub mod output;

pub use crate::corpus::RunResults;
use crate::corpus::Corpus;
use crate::errors::{McsError, OutputError};
use crate::input::ingest_input;
use crate::output::Output;
use bitflags::bitflags;
use csv::WriterBuilder;
use std::io::{Read, Write};
use tracing::info;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ProjectFlags: u32 {
        /// Resolve walls bordering other rooms against those rooms' design temperatures
        const INTER_ROOM_TRANSFER = 0b1;
        /// Write a per-room breakdown alongside the summary
        const DETAILED_OUTPUT = 0b10;
    }
}

impl Default for ProjectFlags {
    fn default() -> Self {
        ProjectFlags::INTER_ROOM_TRANSFER
    }
}

pub fn run_project(
    input: impl Read,
    output: impl Output,
    flags: ProjectFlags,
) -> Result<RunResults, McsError> {
    let input = ingest_input(input)?;
    let corpus = Corpus::from_inputs(&input)?;

    let results = corpus.run(flags)?;

    if !output.is_noop() {
        write_summary_file(&output, &results).map_err(|err| {
            McsError::ErrorInOutput(OutputError::new(err))
        })?;
        if flags.contains(ProjectFlags::DETAILED_OUTPUT) {
            write_rooms_file(&output, &results)
                .map_err(|err| McsError::ErrorInOutput(OutputError::new(err)))?;
        }
    }

    Ok(results)
}

fn write_summary_file(output: &impl Output, results: &RunResults) -> anyhow::Result<()> {
    info!("writing out summary");
    let mut writer = output.writer_for_location_key("summary", "json")?;
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;

    Ok(())
}

const ROOMS_HEADINGS: [&str; 15] = [
    "Room",
    "Room type",
    "Design temp",
    "Volume",
    "Walls",
    "Windows",
    "Floors",
    "Inter-room",
    "Thermal bridging",
    "Fabric",
    "Ventilation",
    "Total",
    "Fabric annual",
    "Ventilation annual",
    "Total annual",
];

const ROOMS_UNITS: [&str; 15] = [
    "", "", "[deg C]", "[m3]", "[W]", "[W]", "[W]", "[W]", "[W]", "[W]", "[W]", "[W]", "[kWh]",
    "[kWh]", "[kWh]",
];

fn write_rooms_file(output: &impl Output, results: &RunResults) -> anyhow::Result<()> {
    info!("writing out per-room breakdown");
    let writer = output.writer_for_location_key("rooms", "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(ROOMS_HEADINGS)?;
    writer.write_record(ROOMS_UNITS)?;

    for room in &results.building.rooms {
        let fabric = &room.fabric_loss.watts;
        let mut row = vec![room.room_name.clone(), room.room_type.clone()];
        row.extend(
            [
                room.design_temp,
                room.volume,
                fabric.walls,
                fabric.windows,
                fabric.floors,
                fabric.inter_room,
                fabric.thermal_bridging,
                fabric.total,
                room.ventilation_loss.watts,
                room.total_loss.watts,
                room.fabric_loss.kwh.total,
                room.ventilation_loss.kwh,
                room.total_loss.kwh,
            ]
            .iter()
            .map(|val| val.to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}
