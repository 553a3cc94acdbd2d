#![allow(clippy::uninlined_format_args)]

//! Error related data structures to be shared and used.
//!
//! This module contains the [`Error`] enum, which is used to represent
//! errors that can occur within the dotmatrix domain.

use std::{
    fmt::{self, Display, Formatter},
    io,
};

/// Top level enum for error handling within dotmatrix.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidData,
    RomSize,
    IllegalOpcode(u16, u8),
    FrameOverrun,
    InvalidParameter(String),
    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::InvalidData => String::from("Invalid data format"),
            Error::RomSize => String::from("Invalid ROM size"),
            Error::IllegalOpcode(pc, opcode) => {
                format!("Illegal opcode 0x{:02x} at 0x{:04x}", opcode, pc)
            }
            Error::FrameOverrun => String::from("Frame overrun, LCD produced no frame"),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => String::from(message),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::CustomError(value.to_string())
    }
}
