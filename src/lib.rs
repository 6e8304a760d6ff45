//! Dumps the meshes and empties of a 3D scene as a Python-literal-like
//! listing (or strict JSON): transforms, render flag, material and the
//! boolean/array modifier stack.

pub mod config;
pub mod export;
pub mod import;
pub mod reader;
pub mod scene_graph;
pub mod source;

pub use config::{ExportConfig, FaultPolicy, OutputFormat};
pub use export::{ExportError, ExportSummary, Exporter};
pub use import::{load_scene, ImportError};
pub use scene_graph::Scene;
pub use source::SceneSource;
