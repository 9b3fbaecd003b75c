//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes each transformed text as is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, document: &Document) -> Result<()> {
        self.writer.write_all(document.text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
