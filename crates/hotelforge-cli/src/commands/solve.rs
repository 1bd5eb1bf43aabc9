use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use hotelforge::{handle_request, load_solver, Solver, SolverConfig, SolveRequest, SolveResponse};

use super::constraint_source;

pub struct SolveArgs {
    pub request: PathBuf,
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub tenant: Option<String>,
    pub pretty: bool,
}

pub fn solve(args: &SolveArgs) -> anyhow::Result<ExitCode> {
    let source = constraint_source(args.catalog.as_deref())?;
    let solver = match &args.config {
        Some(path) => {
            let config = SolverConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Solver::new(source).with_config(config)
        }
        None => load_solver(source),
    };

    let body = read_request(&args.request)?;
    let (status, response) = match SolveRequest::from_json(&body) {
        Ok(mut request) => {
            if let Some(tenant) = &args.tenant {
                request.tenant_id = tenant.clone();
            }
            handle_request(&solver, request)
        }
        Err(err) => (err.http_status(), SolveResponse::failure(err.to_string())),
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(match status {
        200 if response.success => ExitCode::SUCCESS,
        200 => ExitCode::from(1),
        _ => ExitCode::from(2),
    })
}

fn read_request(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read request from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))
}
