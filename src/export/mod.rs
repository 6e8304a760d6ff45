pub mod error;
pub mod float;
pub mod json;
pub mod legacy;
pub mod record;

use std::io::{self, Write};

use crate::config::{ExportConfig, FaultPolicy, OutputFormat};
use crate::source::SceneSource;

pub use error::ExportError;
pub use record::{build_record, EmptyRecord, ExportRecord, MeshRecord, ModifierRecord};

/// Turns finished records into bytes. `encode` must write a record in full
/// or not at all.
pub trait RecordEncoder {
    fn begin(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn encode(&mut self, out: &mut dyn Write, record: &ExportRecord) -> Result<(), ExportError>;
    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub meshes: usize,
    pub empties: usize,
    pub unsupported: usize,
    pub faulty: usize,
}

impl ExportSummary {
    pub fn records(&self) -> usize {
        self.meshes + self.empties
    }
}

pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Writes every mesh and empty of `scene` to `out`, in scene order.
    ///
    /// Under [`FaultPolicy::Abort`] the first faulty object ends the export
    /// with an error. The records before it are already written and the
    /// closing bracket is not, so the output must be treated as invalid.
    pub fn export<S, W>(&self, scene: &S, out: &mut W) -> Result<ExportSummary, ExportError>
    where
        S: SceneSource + ?Sized,
        W: Write,
    {
        let mut encoder: Box<dyn RecordEncoder> = match self.config.format {
            OutputFormat::Legacy => Box::new(legacy::LegacyEncoder),
            OutputFormat::Json => Box::new(json::JsonEncoder::default()),
        };

        let mut summary = ExportSummary::default();
        encoder.begin(out)?;

        for object in scene.objects() {
            let record = match build_record(scene, object, &self.config.default_material) {
                Ok(Some(record)) => record,
                Ok(None) => {
                    log::debug!(
                        "Skipping '{}' of unsupported type {}",
                        object.name,
                        object.type_name()
                    );
                    summary.unsupported += 1;
                    continue;
                }
                Err(err) if err.is_fault() && self.config.on_fault == FaultPolicy::Skip => {
                    log::warn!("Skipping '{}': {}", object.name, err);
                    summary.faulty += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            encoder.encode(out, &record)?;
            match record {
                ExportRecord::Mesh(_) => summary.meshes += 1,
                ExportRecord::Empty(_) => summary.empties += 1,
            }
        }

        encoder.finish(out)?;
        out.flush()?;

        Ok(summary)
    }

    /// Convenience wrapper that collects the output into a string.
    pub fn export_to_string<S>(&self, scene: &S) -> Result<String, ExportError>
    where
        S: SceneSource + ?Sized,
    {
        let mut out = Vec::new();
        self.export(scene, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}
