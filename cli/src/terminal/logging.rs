use std::fmt::Debug;

use colored::*;
use localconnect_common::PRINT_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Installs the global subscriber.
///
/// Operator-facing output on [`PRINT_TARGET`] is always shown. Diagnostics
/// from the directory crates default to `warn`; each `-v` lowers that by one
/// level. `RUST_LOG` overrides both.
pub fn init_logging(verbose: u8) {
    let diagnostics = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{diagnostics},{PRINT_TARGET}=info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ShellFormatter)
        .with_writer(std::io::stdout)
        .init();
}

pub struct ShellFormatter;

impl<S, N> FormatEvent<S, N> for ShellFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut fields = PrintFields::default();
            event.record(&mut fields);

            if let Some(raw) = fields.raw_msg {
                return writeln!(writer, "{raw}");
            }

            let symbol: ColoredString = match (fields.status.as_deref(), *meta.level()) {
                (Some("success"), _) => "[+]".green().bold(),
                (_, Level::ERROR) => "[-]".red().bold(),
                (_, Level::WARN) => "[!]".yellow().bold(),
                _ => "[*]".blue().bold(),
            };
            return writeln!(writer, "{} {}", symbol, fields.message.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} {} ", color_func(symbol.into()), meta.target().dimmed())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct PrintFields {
    raw_msg: Option<String>,
    status: Option<String>,
    message: Option<String>,
}

impl Visit for PrintFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "raw_msg" => self.raw_msg = Some(format!("{value:?}")),
            "status" => self.status = Some(format!("{value:?}")),
            "message" => self.message = Some(format!("{value:?}")),
            _ => {}
        }
    }
}
