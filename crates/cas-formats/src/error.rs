//! CAS encoder error types

use thiserror::Error;

/// CAS-specific error type
#[derive(Debug, Error)]
pub enum CasError {
    /// Binary payload would extend past the top of the 16-bit address space
    #[error("binary of {length} bytes loaded at 0x{load_addr:04X} ends past 0xFFFF")]
    AddressOverflow {
        /// Address the payload would be loaded at
        load_addr: u16,
        /// Payload length in bytes
        length: usize,
    },

    /// I/O error from the underlying sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CAS encoding operations
pub type CasResult<T> = Result<T, CasError>;
