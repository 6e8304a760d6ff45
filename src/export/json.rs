use std::io::{self, Write};

use crate::export::error::ExportError;
use crate::export::record::ExportRecord;
use crate::export::RecordEncoder;

/// Strict JSON: one compact record per line, commas only between records.
#[derive(Debug, Default)]
pub struct JsonEncoder {
    records_written: usize,
}

impl RecordEncoder for JsonEncoder {
    fn begin(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.records_written = 0;
        out.write_all(b"[\n")
    }

    fn encode(&mut self, out: &mut dyn Write, record: &ExportRecord) -> Result<(), ExportError> {
        let line = serde_json::to_vec(record)?;
        if self.records_written > 0 {
            out.write_all(b",\n")?;
        }
        out.write_all(&line)?;
        self.records_written += 1;
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.records_written > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(b"]\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::record::{EmptyRecord, MeshRecord};

    fn encode_all(records: &[ExportRecord]) -> String {
        let mut encoder = JsonEncoder::default();
        let mut out = Vec::new();
        encoder.begin(&mut out).unwrap();
        for record in records {
            encoder.encode(&mut out, record).unwrap();
        }
        encoder.finish(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(encode_all(&[]), "[\n]\n");
    }

    #[test]
    fn test_records_are_valid_json() {
        let mesh = ExportRecord::Mesh(MeshRecord {
            name: "Cube".into(),
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            location: [0.0, 0.0, 0.0],
            render: true,
            material: "material.000".into(),
            modifiers: Vec::new(),
        });
        let empty = ExportRecord::Empty(EmptyRecord {
            name: "Spawner".into(),
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            location: [0.0, 0.0, 0.0],
            render: false,
            object: "Prop_A".into(),
        });

        let text = encode_all(&[mesh, empty]);
        assert_eq!(text.lines().count(), 4);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["material"], "material.000");
        assert_eq!(records[1]["object"], "Prop_A");
        assert_eq!(records[1]["render"], false);
    }

    #[test]
    fn test_field_order_matches_legacy() {
        let text = encode_all(&[ExportRecord::Empty(EmptyRecord {
            name: "E".into(),
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            location: [0.0, 0.0, 0.0],
            render: true,
            object: "O".into(),
        })]);
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            r#"{"name":"E","scale":[1.0,1.0,1.0],"rotation":[0.0,0.0,0.0,1.0],"location":[0.0,0.0,0.0],"render":true,"object":"O"}"#
        );
    }
}
