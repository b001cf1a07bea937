/// Destination for non-fatal failures (storage access, parsing, serialization).
///
/// The widget never surfaces these to the user; they are only reported here.
pub trait DiagnosticSink {
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Writes to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn warn(&self, msg: &str) {
        web_sys::console::warn_1(&format!("Portfolio: {}", msg).into());
    }

    fn error(&self, msg: &str) {
        web_sys::console::error_1(&format!("Portfolio: {}", msg).into());
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingSink;
