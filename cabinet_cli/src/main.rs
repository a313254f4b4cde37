//! # Cabinet Calc CLI
//!
//! Command-line front end for cabinet_core. Each subcommand builds one or
//! more `CalculationRequest`s from its arguments and the shop settings, runs
//! them, and prints a text summary (or JSON with `--json`).
//!
//! Settings resolve in this order: built-in defaults, then `--settings FILE`,
//! then `CABINET_OVERLAY` / `CABINET_GAP` / `CABINET_FIT` or their flags.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides
//! the default filter.

mod args;
mod report;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use cabinet_core::calculations::door_drawer::{calculate_door_dimensions, calculate_single_door};
use cabinet_core::{
    evaluate, evaluate_batch, CalcError, CalcResult, CalculationRequest, DoorDimensions, DrawerOptions,
    OpeningDimensions, ShopSettings,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{Cli, Commands, GlobalArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={level},cabinet_core={level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = resolve_settings(&cli.global)?;
    debug!(?settings, "resolved shop settings");

    if let Commands::Eval(eval) = &cli.command {
        return run_eval(&eval.input);
    }

    let requests = build_requests(&cli.command, &settings);
    info!(count = requests.len(), "running calculations");

    for request in &requests {
        let output = evaluate(request);
        if cli.global.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            report::print_output(request, &output);
        }
    }
    Ok(())
}

/// Merge the settings file and the flag/env overrides over the defaults.
fn resolve_settings(global: &GlobalArgs) -> CalcResult<ShopSettings> {
    let mut settings = match &global.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
            serde_json::from_str(&text)?
        }
        None => ShopSettings::default(),
    };

    if let Some(overlay) = global.overlay {
        settings.overlay = overlay;
    }
    if let Some(gap) = global.gap {
        settings.gap = gap;
    }
    if let Some(fit) = global.fit {
        settings.fit = fit;
    }
    Ok(settings)
}

fn build_requests(command: &Commands, settings: &ShopSettings) -> Vec<CalculationRequest> {
    let options = settings.door_options();

    match command {
        Commands::Door(args) => {
            let opening = OpeningDimensions::new(args.width, args.height);
            let (sizing, door) = if args.single {
                (
                    CalculationRequest::SingleDoor { opening, options },
                    calculate_single_door(&opening, &options),
                )
            } else {
                (
                    CalculationRequest::DoorDimensions { opening, options },
                    calculate_door_dimensions(&opening, &options),
                )
            };
            vec![
                sizing,
                CalculationRequest::DoorMaterialCuts {
                    door,
                    part_name: args.part_name.clone(),
                    quantity: args.quantity,
                },
            ]
        }
        Commands::DoubleDoors(args) => vec![CalculationRequest::DoubleDoors {
            opening: OpeningDimensions::new(args.width, args.height),
            options,
            gap_between: args.gap_between,
        }],
        Commands::DrawerFront(args) => vec![CalculationRequest::DrawerFrontMaterialCuts {
            // Only the opening width matters for a drawer front
            opening: OpeningDimensions::new(args.width, args.front_height),
            options: DrawerOptions {
                box_height: args.box_height,
                front_height: args.front_height,
                overlay: settings.overlay,
                gap: settings.gap,
                fit: settings.fit,
            },
            part_name: args.part_name.clone(),
            quantity: args.quantity,
        }],
        Commands::Handle(args) => vec![CalculationRequest::HandlePlacement {
            door: DoorDimensions::new(args.door_width, args.door_height),
            offset_x: args.offset_x.unwrap_or(settings.handle_offset_x),
            offset_y: args.offset_y.unwrap_or(settings.handle_offset_y),
        }],
        Commands::Hinges(args) => vec![CalculationRequest::HingePlacements {
            door: DoorDimensions::new(args.door_width, args.door_height),
            count: args.count,
            edge_offset: args.edge_offset.unwrap_or(settings.hinge_edge_offset),
        }],
        Commands::ClipTop(args) => vec![CalculationRequest::BlumClipTopHingePlate {
            door_height: args.door_height,
            hinge_type: args.hinge_type,
            top_gap: args.top_gap,
            bottom_gap: args.bottom_gap,
        }],
        Commands::Tandembox(args) => vec![CalculationRequest::BlumTandemboxDrillPoints {
            drawer_box_width: args.box_width,
            drawer_box_depth: args.box_depth,
            slide_length: args.slide_length.unwrap_or(args.box_depth),
            model: args.model.clone(),
        }],
        Commands::Shaker(args) => {
            let door = DoorDimensions::new(args.door_width, args.door_height);
            if args.components {
                vec![CalculationRequest::ShakerDoorComponents {
                    door,
                    stile_width: args.stile_width,
                    rail_width: args.rail_width,
                }]
            } else {
                vec![CalculationRequest::ShakerDoorParts {
                    door,
                    rail_width: args.rail_width,
                    stile_width: args.stile_width,
                    panel_gap: args.panel_gap.unwrap_or(settings.panel_gap),
                }]
            }
        }
        Commands::Eval(_) => Vec::new(),
    }
}

/// Evaluate a JSON request document; always prints JSON.
fn run_eval(input: &str) -> CalcResult<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        buf
    } else {
        fs::read_to_string(input).map_err(|e| CalcError::file_error("read", input, e.to_string()))?
    };

    let value: serde_json::Value = serde_json::from_str(&text)?;
    let json = if value.is_array() {
        let requests: Vec<CalculationRequest> = serde_json::from_value(value)?;
        info!(count = requests.len(), "evaluating request batch");
        serde_json::to_string_pretty(&evaluate_batch(&requests))?
    } else {
        let request: CalculationRequest = serde_json::from_value(value)?;
        serde_json::to_string_pretty(&evaluate(&request))?
    };
    println!("{}", json);
    Ok(())
}
