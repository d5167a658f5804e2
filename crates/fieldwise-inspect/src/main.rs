//! Prints the registries of a bundled catalogue of sample types.
//!
//! Type names of generic types, tuples and arrays are recovered from
//! `core::any::type_name`, whose output is not guaranteed stable across
//! compiler releases. Running `fieldwise-inspect list` shows what the current
//! toolchain produces.

use anyhow::bail;
use clap::{Parser, Subcommand};

mod catalogue;
mod render;

use render::Format;

/// CLI arguments for the inspector
#[derive(Parser, Debug)]
#[command(name = "fieldwise-inspect")]
#[command(about = "Print fieldwise registries of the bundled sample types")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every type in the catalogue
    List,
    /// Show one type's registry
    Show {
        /// Display name of the type, e.g. `Leaf` or `(i32, f64, String)`
        name: String,

        /// Include fields inherited from parent registries
        #[arg(long)]
        full: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output = match &args.command {
        Command::List => render::list(&catalogue::catalogue(), args.format)?,
        Command::Show { name, full } => {
            let Some(info) = catalogue::find(name) else {
                bail!("no type named `{name}` in the catalogue (try `fieldwise-inspect list`)");
            };
            log::debug!("found {} ({} fields)", info.name(), info.field_count());
            render::show(info, args.format, *full)?
        }
    };

    print!("{output}");
    if args.format == Format::Json {
        println!();
    }
    Ok(())
}
