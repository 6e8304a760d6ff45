use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty '{object}' has no duplication group")]
    MissingDupliGroup { object: String },

    #[error("duplication group '{group}' of empty '{object}' has no members")]
    EmptyDupliGroup { object: String, group: String },

    #[error("boolean modifier #{index} on '{object}' has no target object")]
    MissingBooleanTarget { object: String, index: usize },
}

impl ExportError {
    /// Faults come from the scene data and can be skipped per object.
    /// Everything else is an output failure.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            ExportError::MissingDupliGroup { .. }
                | ExportError::EmptyDupliGroup { .. }
                | ExportError::MissingBooleanTarget { .. }
        )
    }
}
