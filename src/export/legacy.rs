//! The legacy dump format: Python-literal-like mappings, single quoted
//! strings, lowercase booleans, a trailing comma after every record and
//! every modifier entry.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use itertools::Itertools;

use crate::export::error::ExportError;
use crate::export::float::format_float;
use crate::export::record::{EmptyRecord, ExportRecord, MeshRecord, ModifierRecord};
use crate::export::RecordEncoder;

#[derive(Debug, Default)]
pub struct LegacyEncoder;

impl RecordEncoder for LegacyEncoder {
    fn begin(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"[\n")
    }

    fn encode(&mut self, out: &mut dyn Write, record: &ExportRecord) -> Result<(), ExportError> {
        out.write_all(encode_record(record).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"]\n")
    }
}

/// Renders a whole record, closing `},` line included.
pub fn encode_record(record: &ExportRecord) -> String {
    let mut text = String::new();
    let written = match record {
        ExportRecord::Mesh(mesh) => write_mesh(&mut text, mesh),
        ExportRecord::Empty(empty) => write_empty(&mut text, empty),
    };
    // fmt::Write for String never returns an error.
    debug_assert!(written.is_ok());
    text
}

fn write_mesh(text: &mut String, mesh: &MeshRecord) -> fmt::Result {
    text.push_str("{\n");
    write_common(text, &mesh.name, &mesh.scale, &mesh.rotation, &mesh.location, mesh.render)?;
    writeln!(text, "\t'material':{},", quote(&mesh.material))?;
    text.push_str("\t'modifiers':[\n");
    for modifier in &mesh.modifiers {
        write_modifier(text, modifier)?;
    }
    text.push_str("\t]\n");
    text.push_str("},\n");
    Ok(())
}

fn write_empty(text: &mut String, empty: &EmptyRecord) -> fmt::Result {
    text.push_str("{\n");
    write_common(
        text,
        &empty.name,
        &empty.scale,
        &empty.rotation,
        &empty.location,
        empty.render,
    )?;
    writeln!(text, "\t'object':{},", quote(&empty.object))?;
    text.push_str("},\n");
    Ok(())
}

fn write_common(
    text: &mut String,
    name: &str,
    scale: &[f64],
    rotation: &[f64],
    location: &[f64],
    render: bool,
) -> fmt::Result {
    writeln!(text, "\t'name':{},", quote(name))?;
    writeln!(text, "\t'scale':{},", list(scale))?;
    writeln!(text, "\t'rotation':{},", list(rotation))?;
    writeln!(text, "\t'location':{},", list(location))?;
    writeln!(text, "\t'render':{},", render)
}

fn write_modifier(text: &mut String, modifier: &ModifierRecord) -> fmt::Result {
    text.push_str("\t{\n");
    writeln!(text, "\t\t'type':{},", quote(modifier.type_name()))?;
    match modifier {
        ModifierRecord::Boolean { operation, object } => {
            writeln!(text, "\t\t'operation':{},", quote(operation))?;
            writeln!(text, "\t\t'object':{},", quote(object))?;
        }
        ModifierRecord::Array { offset, count } => {
            writeln!(text, "\t\t'offset':{},", list(offset))?;
            writeln!(text, "\t\t'count':{}", count)?;
        }
        ModifierRecord::Other { .. } => {}
    }
    text.push_str("\t},\n");
    Ok(())
}

fn list(values: &[f64]) -> String {
    format!("[{}]", values.iter().map(|v| format_float(*v)).join(","))
}

/// Single quotes a string, escaping backslashes and single quotes.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> MeshRecord {
        MeshRecord {
            name: "Cube".into(),
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            location: [0.0, 0.0, 0.0],
            render: true,
            material: "material.000".into(),
            modifiers: Vec::new(),
        }
    }

    #[test]
    fn test_mesh_without_modifiers() {
        let text = encode_record(&ExportRecord::Mesh(cube()));
        assert_eq!(
            text,
            "{\n\
             \t'name':'Cube',\n\
             \t'scale':[1.0,1.0,1.0],\n\
             \t'rotation':[0.0,0.0,0.0,1.0],\n\
             \t'location':[0.0,0.0,0.0],\n\
             \t'render':true,\n\
             \t'material':'material.000',\n\
             \t'modifiers':[\n\
             \t]\n\
             },\n"
        );
    }

    #[test]
    fn test_modifier_entries() {
        let mut mesh = cube();
        mesh.render = false;
        mesh.modifiers = vec![
            ModifierRecord::Array {
                offset: [1.0, 0.0, 0.0],
                count: 3,
            },
            ModifierRecord::Boolean {
                operation: "DIFFERENCE".into(),
                object: "Knife".into(),
            },
            ModifierRecord::Other {
                type_name: "BEVEL".into(),
            },
        ];

        let text = encode_record(&ExportRecord::Mesh(mesh));
        assert!(text.contains("\t'render':false,\n"));
        assert!(text.contains(
            "\t'modifiers':[\n\
             \t{\n\
             \t\t'type':'ARRAY',\n\
             \t\t'offset':[1.0,0.0,0.0],\n\
             \t\t'count':3\n\
             \t},\n\
             \t{\n\
             \t\t'type':'BOOLEAN',\n\
             \t\t'operation':'DIFFERENCE',\n\
             \t\t'object':'Knife',\n\
             \t},\n\
             \t{\n\
             \t\t'type':'BEVEL',\n\
             \t},\n\
             \t]\n\
             },\n"
        ));
    }

    #[test]
    fn test_empty_record() {
        let empty = EmptyRecord {
            name: "Spawner".into(),
            scale: [1.5, 1.5, 1.5],
            rotation: [0.0, 0.0, 0.5, 0.5],
            location: [-2.0, 0.25, 3.0],
            render: true,
            object: "Prop_A".into(),
        };

        assert_eq!(
            encode_record(&ExportRecord::Empty(empty)),
            "{\n\
             \t'name':'Spawner',\n\
             \t'scale':[1.5,1.5,1.5],\n\
             \t'rotation':[0.0,0.0,0.5,0.5],\n\
             \t'location':[-2.0,0.25,3.0],\n\
             \t'render':true,\n\
             \t'object':'Prop_A',\n\
             },\n"
        );
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Cube"), "'Cube'");
        assert_eq!(quote("O'Brien"), r"'O\'Brien'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
    }
}
