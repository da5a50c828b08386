//! Senary MCP Server
//!
//! Model Context Protocol (2025-11-25) server over stdio
//!
//! Tools:
//! - convert: Convert one measurement between units and systems
//! - sync_panels: Show one value in SI, US customary and seximal at once
//! - to_seximal / from_seximal / convert_base: Base-6 numeral codec
//! - list_dimensions / list_units: Unit discovery
//! - help / list_functions: Function documentation

mod config;
mod server;

use std::io::{self, BufRead, Write};

use senary::Senary;
use tracing::{debug, error, info};

use config::ServerConfig;
use server::{handle_request, McpRequest, McpResponse};

fn main() {
    config::init_logging();

    let config = ServerConfig::from_env();
    let senary = Senary::with_standard_library().with_precision(config.precision);
    info!(
        version = server::SERVER_VERSION,
        precision = config.precision,
        functions = senary.registry().function_names().len(),
        "senary MCP server starting"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "failed to read stdin");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<McpRequest>(&line) {
            Ok(request) => {
                debug!(method = %request.method, "request");
                // Notifications get no response
                if request.id.is_none() {
                    continue;
                }
                handle_request(&senary, &request)
            }
            Err(e) => {
                error!(error = %e, "malformed request");
                McpResponse::parse_error(&e)
            }
        };

        if let Err(e) = write_response(&mut stdout, &response) {
            error!(error = %e, "failed to write response");
            break;
        }
    }

    info!("stdin closed, shutting down");
}

fn write_response(out: &mut impl Write, response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    writeln!(out, "{}", json)?;
    out.flush()
}
