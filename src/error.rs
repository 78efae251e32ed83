use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't read schedule file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed schedule data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("the schedule data is empty")]
    Empty,
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown course `{course}` in `{category}`")]
    UnknownCourse { category: String, course: String },
    #[error("unknown group `{group}` in `{category}` / `{course}`")]
    UnknownGroup {
        category: String,
        course: String,
        group: String,
    },
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}
