//! Line-oriented output channel for progress and summary messages.

use std::io::Write;

/// Write-only, append-only message channel.
///
/// The clean engine reports progress through this trait so it can run inside
/// any host: a terminal, an IDE output pane, or nothing at all. Output is
/// informational only and must never influence the clean run itself.
pub trait OutputSink {
    /// Append text without a trailing newline.
    fn write(&mut self, text: &str);
    /// Append text followed by a newline.
    fn write_line(&mut self, line: &str);
}

/// Sink that discards everything, for hosts with no output channel.
#[derive(Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write(&mut self, _text: &str) {}
    fn write_line(&mut self, _line: &str) {}
}

/// Sink backed by any `io::Write`, typically stdout.
///
/// Write errors are swallowed: a broken pipe or full disk on the log channel
/// must not abort a deletion batch.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write(&mut self, text: &str) {
        let _ = write!(self.inner, "{}", text);
        let _ = self.inner.flush();
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.inner, "{}", line);
    }
}

/// In-memory sink for tests and hosts that capture output.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.lines()
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_joins_partial_writes() {
        let mut sink = BufferSink::new();
        sink.write("deleting obj ... ");
        sink.write_line("done");
        sink.write_line("clean finished");

        assert_eq!(sink.contents(), "deleting obj ... done\nclean finished\n");
        assert_eq!(
            sink.lines().collect::<Vec<_>>(),
            vec!["deleting obj ... done", "clean finished"]
        );
    }

    #[test]
    fn test_null_sink_accepts_writes() {
        let mut sink = NullSink;
        sink.write("ignored");
        sink.write_line("also ignored");
    }

    #[test]
    fn test_writer_sink_writes_through() {
        let mut out = Vec::new();
        {
            let mut sink = WriterSink::new(&mut out);
            sink.write("a");
            sink.write_line("b");
        }
        assert_eq!(String::from_utf8(out).unwrap(), "ab\n");
    }
}
