// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
//! Command line tool for inspecting logger bindings.
//!
//! Search path is taken from `--path` arguments, `LOG_BINDING_PATH` is used if none given.
//! Log output of the `log` binding and of the library is filtered with `RUST_LOG`, `info` by default.

use pico_args::Arguments;
use rust_log_binding::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
log_binding_tool - inspect logger bindings on a search path

USAGE:
  log_binding_tool <COMMAND> [OPTIONS]

COMMANDS:
  scan                  List marker resources found on the search path
  resolve <NAME>        Resolve logger and print selected binding
  init <DIR>            Create marker resource in search path entry

OPTIONS:
  -p, --path <DIR>      Search path entry, may be repeated
  --detect <BOOL>       Multiple-binding detection (resolve only)
  --binding <NAME>      Binding name written by init [default: simple]
  --api-version <VER>   API version written by init
  -h, --help            Print help
";

/// Tool command with its arguments.
#[derive(Debug, PartialEq)]
enum Command {
    Scan {
        search_path: Vec<PathBuf>,
    },
    Resolve {
        name: String,
        search_path: Vec<PathBuf>,
        detection: Option<bool>,
    },
    Init {
        dir: PathBuf,
        descriptor: BindingDescriptor,
    },
    Help,
}

fn parse_path(s: &str) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(s))
}

fn parse_bool(s: &str) -> Result<bool, String> {
    s.trim()
        .to_ascii_lowercase()
        .parse::<bool>()
        .map_err(|_| format!("expected true or false, got {s:?}"))
}

fn parse_args(mut args: Arguments) -> Result<Command, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let subcommand = args.subcommand().map_err(|e| e.to_string())?;
    let command = match subcommand.as_deref() {
        Some("scan") => Command::Scan {
            search_path: args
                .values_from_fn(["-p", "--path"], parse_path)
                .map_err(|e| e.to_string())?,
        },
        Some("resolve") => {
            let search_path = args
                .values_from_fn(["-p", "--path"], parse_path)
                .map_err(|e| e.to_string())?;
            let detection = args
                .opt_value_from_fn("--detect", parse_bool)
                .map_err(|e| e.to_string())?;
            let name: String = args.free_from_str().map_err(|e| e.to_string())?;
            Command::Resolve {
                name,
                search_path,
                detection,
            }
        }
        Some("init") => {
            let binding: Option<String> = args
                .opt_value_from_str("--binding")
                .map_err(|e| e.to_string())?;
            let api_version: Option<String> = args
                .opt_value_from_str("--api-version")
                .map_err(|e| e.to_string())?;
            let dir: PathBuf = args.free_from_str().map_err(|e| e.to_string())?;

            let mut descriptor = match binding {
                Some(binding) => BindingDescriptor::new(&binding),
                None => BindingDescriptor::default(),
            };
            if let Some(api_version) = api_version {
                descriptor = descriptor.with_api_version(&api_version);
            }
            Command::Init { dir, descriptor }
        }
        Some(other) => return Err(format!("unknown command: {other}")),
        None => return Ok(Command::Help),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    Ok(command)
}

/// Build scanner from explicit entries, environment if none.
fn scanner(search_path: Vec<PathBuf>) -> SearchPathScanner {
    if search_path.is_empty() {
        SearchPathScanner::from_env()
    } else {
        SearchPathScannerBuilder::new()
            .search_path(search_path)
            .build()
    }
}

fn scan(search_path: Vec<PathBuf>) -> Result<(), ErrorCode> {
    let scanner = scanner(search_path);
    let locations = scanner.find_resources(MARKER_RESOURCE)?;
    if locations.is_empty() {
        println!("no bindings found");
        return Ok(());
    }

    for (idx, location) in locations.iter().enumerate() {
        let binding = match scanner
            .read_resource(location)
            .and_then(|content| BindingDescriptor::parse(&content))
        {
            Ok(descriptor) => descriptor.binding,
            Err(e) => format!("<invalid: {e:?}>"),
        };
        let marker = if idx == 0 { "*" } else { " " };
        println!("{marker} {binding:<10} {location}");
    }

    Ok(())
}

fn resolve(name: &str, search_path: Vec<PathBuf>, detection: Option<bool>) {
    let mut builder = BindingResolverBuilder::new().scanner(Box::new(scanner(search_path)));
    if let Some(detection) = detection {
        builder = builder.detect_multiple_bindings(DetectionToggle::from(detection));
    }
    let resolver = builder.build();

    let logger = resolver.resolve(name);
    println!("logger: {}", logger.name());
    println!("binding: {}", logger.binding());
    logger.info("resolved by log_binding_tool");
}

fn init(dir: PathBuf, descriptor: BindingDescriptor) -> Result<(), ErrorCode> {
    let marker_path = SearchPathScanner::marker_path(&dir, MARKER_RESOURCE);
    if let Some(parent) = marker_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&marker_path, descriptor.to_json()?)?;
    println!("created {}", marker_path.display());
    Ok(())
}

/// Install `env_logger` as `log` backend.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Scan { search_path } => scan(search_path).map_err(|e| format!("{e:?}")),
        Command::Resolve {
            name,
            search_path,
            detection,
        } => {
            resolve(&name, search_path, detection);
            Ok(())
        }
        Command::Init { dir, descriptor } => init(dir, descriptor).map_err(|e| format!("{e:?}")),
        Command::Help => {
            print!("{HELP}");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    match parse_args(Arguments::from_env()).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
