//! Text and JSON rendering of registries.

use std::fmt::Write as _;

use clap::ValueEnum;
use fieldwise::{FieldInfo, TypeInfo};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// One summary line per registry.
pub fn list(entries: &[&'static TypeInfo], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => {
            let schemas: Vec<_> = entries.iter().map(|info| info.schema()).collect();
            Ok(serde_json::to_string_pretty(&schemas)?)
        }
        Format::Text => {
            let mut out = String::new();
            for info in entries {
                log::trace!("listing {}", info.name());
                writeln!(
                    out,
                    "{:<20} {:<12} {} own / {} total",
                    info.name(),
                    info.kind,
                    info.field_count(),
                    info.full_field_count()
                )?;
            }
            Ok(out)
        }
    }
}

/// Full description of one registry.
///
/// With `full`, ancestor fields are listed too, root ancestor first.
pub fn show(info: &TypeInfo, format: Format, full: bool) -> anyhow::Result<String> {
    log::trace!("rendering {} (full: {full})", info.name());

    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&info.schema())?),
        Format::Text => {
            let mut out = String::new();
            writeln!(out, "{} [{}]", info.name(), info.kind)?;
            if let Some(parent) = info.parent {
                writeln!(out, "  parent: {}", parent.name())?;
            }

            if full {
                for level in info.lineage() {
                    writeln!(out, "  from {}:", level.name())?;
                    write_fields(&mut out, level.fields, "    ")?;
                }
            } else {
                write_fields(&mut out, info.fields, "  ")?;
            }

            if info.fields.is_empty() && !full {
                writeln!(out, "  (no fields)")?;
            }
            Ok(out)
        }
    }
}

fn write_fields(out: &mut String, fields: &[FieldInfo], indent: &str) -> std::fmt::Result {
    for field in fields {
        writeln!(
            out,
            "{indent}#{} {}: {}",
            field.index(),
            field.label(),
            field.ty().canonical_name()
        )?;
    }
    Ok(())
}
