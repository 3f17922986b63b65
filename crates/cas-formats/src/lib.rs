//! Builder for the CAS cassette container format used by MSX tape loaders
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for wire-level emission
//!
//! A CAS file is a byte-accurate image of the data blocks an MSX stores on
//! cassette tape. The stream has no global header or index: it is a plain
//! concatenation of blocks, each one framed by a fixed eight byte
//! synchronisation marker that the tape loading routine scans for. Appending
//! another logical file to a tape is therefore nothing more than writing its
//! blocks behind the existing ones.
//!
//! This crate provides the block encoder ([`CasEntry`]) and an append-only
//! file sink ([`TapeWriter`]). Reading CAS files back is out of scope.
//!
//! # Example
//!
//! ```
//! use cas_formats::{BlockName, CasEntry};
//!
//! let entry = CasEntry::Binary {
//!     name: BlockName::new("HELLO"),
//!     load_addr: 0x4000,
//!     exec_addr: 0x4000,
//!     data: b"HELLO".to_vec(),
//! };
//! let bytes = entry.to_bytes()?;
//! assert_eq!(&bytes[..8], &cas_formats::SYNC_MARKER);
//! # Ok::<(), cas_formats::CasError>(())
//! ```

#![warn(missing_docs)]

mod constants;
mod entry;
mod error;
mod name;
mod writer;

pub use constants::{ASCII_CHUNK_SIZE, ASCII_EOF_PAD, DEFAULT_ADDR, SYNC_MARKER};
pub use entry::CasEntry;
pub use error::{CasError, CasResult};
pub use name::BlockName;
pub use writer::{OpenMode, TapeWriter};
