//! Document persistence behind the `DocumentSink` trait.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::packet::Document;
use crate::CzmlResult;

/// Accepts a fully assembled [`Document`] for persistence.
///
/// Sinks are handed complete documents only — assembly never interleaves
/// with writing, so a failed write leaves no partial output attributable to
/// the builder.
pub trait DocumentSink {
    fn write(&mut self, document: &Document) -> CzmlResult<()>;
}

/// Writes the document as pretty-printed JSON to a file path.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for JsonFileSink {
    fn write(&mut self, document: &Document) -> CzmlResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        log::debug!("wrote {} packets to {}", document.len(), self.path.display());
        Ok(())
    }
}
