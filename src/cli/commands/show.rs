//! Show command implementation for the parameter loader CLI
//!
//! Loads one or all parameter tables for a record key and prints the
//! decoded sets in human-readable or JSON form.

use super::shared::setup_logging;
use crate::app::models::{BsplineAeroParams, LiftDragParams, PhiParams};
use crate::cli::args::{OutputFormat, ShowArgs, TableKind};
use crate::config::Config;
use crate::{ParamTable, RecordReader};
use anyhow::Context;
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;

/// Parameter sets loaded for one record key
#[derive(Debug, Serialize)]
pub struct ParamReport {
    /// Record key the sets were loaded for
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift_drag: Option<LiftDragParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bspline_aero: Option<BsplineAeroParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi_aero: Option<PhiParams>,
}

/// Show command runner
pub fn run_show(args: ShowArgs) -> anyhow::Result<ExitCode> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = args.resolve_config()?;
    info!(
        "Loading parameter sets from {}",
        config.database_path().display()
    );

    let report = build_report(&config, args.table, args.id)?;

    match args.output_format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn build_report(config: &Config, table: Option<TableKind>, id: i64) -> anyhow::Result<ParamReport> {
    let wanted = |kind| table.is_none() || table == Some(kind);

    let mut report = ParamReport {
        id,
        lift_drag: None,
        bspline_aero: None,
        phi_aero: None,
    };

    if wanted(TableKind::LiftDrag) {
        report.lift_drag = Some(load_table::<LiftDragParams>(config, id)?);
    }
    if wanted(TableKind::BsplineAero) {
        report.bspline_aero = Some(load_table::<BsplineAeroParams>(config, id)?);
    }
    if wanted(TableKind::PhiAero) {
        report.phi_aero = Some(load_table::<PhiParams>(config, id)?);
    }

    Ok(report)
}

fn load_table<T: ParamTable>(config: &Config, id: i64) -> anyhow::Result<T> {
    RecordReader::<T>::new(config)?
        .load(id)
        .with_context(|| format!("loading table '{}'", T::TABLE))
}

fn print_human_report(report: &ParamReport) {
    println!("Parameter sets for record {}", report.id);

    if let Some(params) = &report.lift_drag {
        println!("\n{}:", LiftDragParams::TABLE);
        println!("  sigmoid_blend: {}", params.sigmoid_blend());
        println!("  cl_alpha_0:    {}", params.cl_alpha_0());
        println!("  cl_alpha:      {}", params.cl_alpha());
        println!("  alpha_stall:   {}", params.alpha_stall());
        println!("  eff:           {}", params.eff());
        println!("  cd_0:          {}", params.cd_0());
        println!("  cd_flat_plate: {}", params.cd_flat_plate());
        println!("  cy_beta:       {}", params.cy_beta());
        println!("  cl_beta_loss:  {}", params.cl_beta_loss());
        println!("  scale_factor:  {}", params.scale_factor());
    }

    if let Some(params) = &report.bspline_aero {
        println!("\n{}:", BsplineAeroParams::TABLE);
        print_sequence("cx_coefs", params.cx_coefs());
        print_sequence("cx_knots", params.cx_knots());
        print_sequence("cz_coefs", params.cz_coefs());
        print_sequence("cz_knots", params.cz_knots());
        println!("  scale_factor: {}", params.scale_factor());
    }

    if let Some(params) = &report.phi_aero {
        println!("\n{}:", PhiParams::TABLE);
        for row in params.matrix() {
            println!("  [{:>10}, {:>10}, {:>10}]", row[0], row[1], row[2]);
        }
    }
}

fn print_sequence(name: &str, values: &[f64]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("  {} ({} values): [{}]", name, values.len(), rendered.join(", "));
}
