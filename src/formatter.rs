//! Custom tracing formatter with tick counter integration

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Global atomic counter of scheduler ticks, shown in every log line.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Maximum value for tick counter display (16-bit hex)
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// ANSI styles used by the formatter.
#[derive(Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Color(&'static str),
}

impl Style {
    const fn prefix(self) -> &'static str {
        match self {
            Style::Dim => "\x1b[2m",
            Style::Bold => "\x1b[1m",
            Style::Color(code) => code,
        }
    }
}

/// Writes `value` wrapped in `style` when the writer supports ANSI, plain otherwise.
fn paint(writer: &mut Writer<'_>, style: Style, value: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{}{}\x1b[0m", style.prefix(), value)
    } else {
        write!(writer, "{}", value)
    }
}

/// A formatter printing a timestamp, the hexadecimal tick counter, the level, span scope and fields.
///
/// The tick counter makes it easy to line up log lines emitted during the same scheduler pass.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|e| {
            eprintln!("Failed to format timestamp: {}", e);
            fmt::Error
        })?;
        paint(&mut writer, Style::Dim, formatted_time)?;
        writer.write_char(' ')?;

        paint(&mut writer, Style::Dim, format_args!("0x{:04X}", get_tick_count() & TICK_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        let (color, label) = level_style(meta.level());
        paint(&mut writer, Style::Color(color), label)?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut saw_any = false;
            for span in scope.from_root() {
                paint(&mut writer, Style::Bold, span.metadata().name())?;
                saw_any = true;
                let ext = span.extensions();
                if let Some(fields) = &ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        paint(&mut writer, Style::Bold, "{")?;
                        write!(writer, "{}", fields)?;
                        paint(&mut writer, Style::Bold, "}")?;
                    }
                }
                paint(&mut writer, Style::Dim, ':')?;
            }
            if saw_any {
                writer.write_char(' ')?;
            }
        }

        paint(&mut writer, Style::Dim, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Color and right-aligned five character label for a level.
fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}

/// Increment the global tick counter by 1
///
/// Called by every animator tick system, once per pass.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

/// Get the current tick count
pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
