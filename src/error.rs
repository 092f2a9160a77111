// src/error.rs
use crate::types::Point3D;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Degenerate view direction: camera at {position:?} coincides with the target")]
    DegenerateDirection { position: Point3D },
}

pub type RigResult<T> = Result<T, RigError>;
