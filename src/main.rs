//! Purpose: `curio` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::io::Write;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Value, json};

use curio::api::{
    AthleteCatalog, CarCatalog, EntityService, Error, ErrorKind, ProductCatalog, to_exit_code,
};
use curio::serve::{ServeConfig, serve};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage).with_message(err.to_string()));
            }
        },
    };

    match cli.command {
        Command::Serve {
            bind,
            allow_non_loopback,
            max_body_bytes,
            cors_origin,
        } => {
            let bind = bind.parse().map_err(|_| {
                Error::new(ErrorKind::Usage)
                    .with_message(format!("invalid bind address: {bind}"))
                    .with_hint("Use host:port, e.g. 127.0.0.1:8080.")
            })?;
            let config = ServeConfig {
                bind,
                allow_non_loopback,
                max_body_bytes,
                cors_origins: cors_origin,
            };
            run_serve(config)?;
            Ok(RunOutcome::ok())
        }
        Command::Show { catalog } => {
            let value = show_catalog(catalog)?;
            let rendered = serde_json::to_string_pretty(&value).map_err(|err| {
                Error::new(ErrorKind::Internal)
                    .with_message("failed to render catalog json")
                    .with_source(err)
            })?;
            println!("{rendered}");
            Ok(RunOutcome::ok())
        }
        Command::Completion { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}

fn run_serve(config: ServeConfig) -> Result<(), Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to start async runtime")
                .with_source(err)
        })?;
    runtime.block_on(serve(config))
}

fn show_catalog(catalog: ShowCatalog) -> Result<Value, Error> {
    let value = match catalog {
        ShowCatalog::Athletes => serde_json::to_value(AthleteCatalog::seeded().records()),
        ShowCatalog::Cars => serde_json::to_value(CarCatalog::seeded().records()),
        ShowCatalog::Products => serde_json::to_value(ProductCatalog::seeded().records()),
        ShowCatalog::Books => serde_json::to_value(EntityService::books().list().data.unwrap_or_default()),
        ShowCatalog::Games => serde_json::to_value(EntityService::games().list().data.unwrap_or_default()),
        ShowCatalog::Movies => serde_json::to_value(EntityService::movies().list().data.unwrap_or_default()),
    };
    value.map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode catalog json")
            .with_source(err)
    })
}

fn emit_error(err: &Error) {
    let mut body = json!({
        "error": {
            "kind": format!("{:?}", err.kind()).to_lowercase(),
            "message": err.message().unwrap_or("error"),
        }
    });
    if let Some(hint) = err.hint() {
        body["error"]["hint"] = json!(hint);
    }
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{body}");
}

#[derive(Parser)]
#[command(
    name = "curio",
    version,
    about = "Record catalogs and a small directory REST server",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShowCatalog {
    Athletes,
    Cars,
    Products,
    Books,
    Games,
    Movies,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Serve the directory REST API over HTTP (loopback default)",
        after_help = r#"EXAMPLES
  $ curio serve
  $ curio serve --bind 127.0.0.1:8080
  $ curio serve --bind 0.0.0.0:8080 --allow-non-loopback

NOTES
  - Loopback is the default; non-loopback binds require --allow-non-loopback
  - Mutations require Authorization: Bearer <token> from POST /user/login
  - Use repeatable --cors-origin to allow browser clients from specific origins"#
    )]
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080", help = "Bind address")]
        bind: String,
        #[arg(long, help = "Allow non-loopback binds")]
        allow_non_loopback: bool,
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_BODY_BYTES,
            help = "Max request body size in bytes"
        )]
        max_body_bytes: u64,
        #[arg(
            long = "cors-origin",
            value_name = "ORIGIN",
            help = "Allow browser requests from this origin (repeatable, explicit list)"
        )]
        cors_origin: Vec<String>,
    },
    #[command(
        arg_required_else_help = true,
        about = "Print a seeded catalog as JSON",
        after_help = r#"EXAMPLES
  $ curio show athletes
  $ curio show movies | jq '.[].name'"#
    )]
    Show {
        #[arg(value_enum, help = "Catalog to print")]
        catalog: ShowCatalog,
    },
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        after_help = r#"EXAMPLES
  $ curio completion bash > ~/.local/share/bash-completion/completions/curio"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;
