use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rectnest::io::export;
use rectnest::io::ext_repr::RegionDescriptor;
use rectnest::io::import;
use rectnest::io::svg::{cut_drawing, master_drawing};
use rectnest::nesting::NestingEngine;
use rectnest::selection::{SelectionOutcome, SheetSelector};
use rectnest_cli::config::CliConfig;
use rectnest_cli::io;
use rectnest_cli::io::cli::{Cli, JobVariant};
use rectnest_cli::io::output::{PlaceOutput, SelectOutput};
use rectnest_cli::io::{PlaceJob, SelectJob, read_place_job, read_select_job};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config {
        None => {
            warn!("[MAIN] no config file provided, use --config to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] successfully parsed config: {config:?}");

    let input_stem = args
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("input file has no usable stem: {:?}", args.input))?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output)
            .with_context(|| format!("could not create output folder: {:?}", args.output))?;
    }

    match args.job {
        JobVariant::Place => {
            let job = read_place_job(&args.input)?;
            main_place(job, config, input_stem, &args.output)
        }
        JobVariant::Select => {
            let job = read_select_job(&args.input)?;
            main_select(job, config, input_stem, &args.output)
        }
    }
}

fn main_place(
    job: PlaceJob,
    config: CliConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let engine = NestingEngine::new(config.selection.nest.clone())?;
    let layout = engine.place(&job.parts, &job.sheet, &job.existing_cut_areas);
    let sheet = import::sheet_from_descriptor(&job.sheet, 0);
    let draw_options = config.svg_draw_options;

    // The master drawing shows the sheet's full history: the cut areas the
    // job arrived with plus everything this run cut.
    let all_cut_areas: Vec<RegionDescriptor> = job
        .existing_cut_areas
        .iter()
        .cloned()
        .chain(layout.new_cut_areas.iter().map(export::export_cut_area))
        .collect();

    {
        let output = PlaceOutput {
            layout: export::export_layout(&layout),
            job,
            config,
        };
        io::write_json(
            &output,
            &output_folder.join(format!("{input_stem}_layout.json")),
        )?;
    }

    {
        let svg = cut_drawing(&layout, &sheet, &draw_options);
        io::write_svg(&svg, &output_folder.join(format!("{input_stem}_cut.svg")))?;
    }

    {
        let svg = master_drawing(&sheet, &all_cut_areas, &draw_options);
        io::write_svg(&svg, &output_folder.join(format!("{input_stem}_master.svg")))?;
    }

    Ok(())
}

fn main_select(
    job: SelectJob,
    config: CliConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let selector = SheetSelector::new(config.selection.clone())?;
    let outcome = selector.find_optimal_sheet(&job.parts, &job.sheets);
    let draw_options = config.svg_draw_options;

    {
        let output = SelectOutput {
            selection: export::export_selection(&outcome),
            job,
            config,
        };
        io::write_json(
            &output,
            &output_folder.join(format!("{input_stem}_selection.json")),
        )?;
    }

    if let SelectionOutcome::Selected { best, .. } = &outcome {
        io::write_json(
            &export::export_layout(&best.layout),
            &output_folder.join(format!("{input_stem}_layout.json")),
        )?;

        let svg = cut_drawing(&best.layout, &best.sheet, &draw_options);
        io::write_svg(&svg, &output_folder.join(format!("{input_stem}_cut.svg")))?;

        let cut_areas: Vec<RegionDescriptor> = best
            .layout
            .new_cut_areas
            .iter()
            .map(export::export_cut_area)
            .collect();
        let svg = master_drawing(&best.sheet, &cut_areas, &draw_options);
        io::write_svg(&svg, &output_folder.join(format!("{input_stem}_master.svg")))?;
    }

    Ok(())
}
