use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("Invalid extras on node '{node}': {source}")]
    InvalidExtras {
        node: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown boolean operation '{operation}' on '{object}'")]
    UnknownBooleanOperation { object: String, operation: String },

    #[error("Object '{object}' lists {count} layers, at most {max} are supported")]
    TooManyLayers {
        object: String,
        count: usize,
        max: usize,
    },

    #[error("No scenes in glTF document")]
    NoScene,

    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),
}
