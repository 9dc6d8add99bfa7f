use itertools::Itertools;
use thiserror::Error;

fn fmt_path(path: &[usize]) -> String {
    format!("[{}]", path.iter().join(", "))
}

#[derive(Error, Debug)]
pub enum TreeError {
    #[error(
        "index path {} is out of range: position {} of {} siblings at depth {}",
        fmt_path(.path),
        .position,
        .len,
        .depth
    )]
    PathOutOfRange {
        path: Vec<usize>,
        depth: usize,
        position: usize,
        len: usize,
    },

    #[error("{} requires a non-empty index path", .operation)]
    EmptyPath { operation: &'static str },
}

pub type TreeResult<T> = Result<T, TreeError>;
