use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use svg::Document;

use crate::EPOCH;
use rectnest::io::ext_repr::{PartDescriptor, RegionDescriptor, SheetDescriptor};

pub mod cli;
pub mod output;

/// Input of a `place` job: parts to nest on one sheet.
#[derive(Serialize, Deserialize, Clone)]
pub struct PlaceJob {
    pub parts: Vec<PartDescriptor>,
    pub sheet: SheetDescriptor,
    /// Regions already cut out of the sheet, avoided by new placements
    #[serde(default)]
    pub existing_cut_areas: Vec<RegionDescriptor>,
}

/// Input of a `select` job: parts and the sheet catalog to pick from.
#[derive(Serialize, Deserialize, Clone)]
pub struct SelectJob {
    pub parts: Vec<PartDescriptor>,
    pub sheets: Vec<SheetDescriptor>,
}

pub fn read_place_job(path: &Path) -> Result<PlaceJob> {
    let file =
        File::open(path).with_context(|| format!("could not open job file: {path:?}"))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect place job format")
}

pub fn read_select_job(path: &Path) -> Result<SelectJob> {
    let file =
        File::open(path).with_context(|| format!("could not open job file: {path:?}"))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect select job format")
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not create output file: {path:?}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), output)
        .with_context(|| format!("could not write output file: {path:?}"))?;
    info!("json written to {:?}", std::fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {path:?}"))?;
    info!("svg written to {:?}", std::fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}
