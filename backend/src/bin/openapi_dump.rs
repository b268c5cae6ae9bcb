//! Print the OpenAPI document as JSON, or YAML with `--yaml`.

use std::process::ExitCode;

use clap::Parser;
use engage_local::doc::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the OpenAPI dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the Engage Local OpenAPI document")]
struct Cli {
    /// Emit YAML instead of pretty-printed JSON.
    #[arg(long)]
    yaml: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let document = ApiDoc::openapi();
    let rendered = if cli.yaml {
        document.to_yaml().map_err(|err| err.to_string())
    } else {
        document.to_pretty_json().map_err(|err| err.to_string())
    };

    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("failed to render OpenAPI document: {message}");
            ExitCode::FAILURE
        }
    }
}
