//! Format layer creation

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};

/// Timestamp source that can be switched off without changing the layer type.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timer {
    enabled: bool,
}

impl Timer {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl FormatTime for Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        if self.enabled {
            SystemTime.format_time(w)
        } else {
            Ok(())
        }
    }
}

/// Builds a text format layer with the common display options.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_timer($crate::builder::format::Timer::new($display.time))
    }};
}

/// JSON format layer (has additional options)
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .flatten_event($display.flatten)
            .with_ansi(false)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_timer($crate::builder::format::Timer::new($display.time))
    }};
}

pub(crate) use {create_fmt_layer, create_json_layer};
