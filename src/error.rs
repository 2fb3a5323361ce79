//! Error types for host terminal operations.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtyError {
    #[error("Failed to read terminal attributes: {0}")]
    GetAttributes(#[source] nix::Error),

    #[error("Failed to set terminal attributes: {0}")]
    SetAttributes(#[source] nix::Error),

    #[error("Failed to query window size: {0}")]
    WindowSize(#[source] io::Error),

    #[error("Failed to install resize handler: {0}")]
    SignalHandler(#[source] nix::Error),

    #[error("Output is not connected to an interactive terminal")]
    NotInteractive,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
