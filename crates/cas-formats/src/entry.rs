//! CAS tape entries and the block encoder
//!
//! A [`CasEntry`] is one logical file on the tape. Encoding an entry appends
//! its header and data blocks to a sink; the sink is only ever written at
//! its current position, never seeked.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::{
    ASCII_CHUNK_SIZE, ASCII_EOF_PAD, ASCII_FILL, BASIC_FILL, BINARY_FILL, SYNC_MARKER,
};
use crate::error::{CasError, CasResult};
use crate::name::BlockName;

/// A logical file to be written onto the tape.
///
/// The five file types form a closed set and each variant carries exactly
/// the fields its wire format needs. `Binary`, `Basic` and `Ascii` produce a
/// named header block followed by data blocks; the two custom variants are
/// escape hatches with no structural guarantees of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasEntry {
    /// Machine-code image, loaded with `BLOAD "CAS:",R`.
    Binary {
        /// Name stored in the header block.
        name: BlockName,
        /// Memory address the payload is loaded at.
        load_addr: u16,
        /// Address execution jumps to after loading.
        exec_addr: u16,
        /// Raw payload bytes.
        data: Vec<u8>,
    },

    /// Tokenised BASIC program, loaded with `CLOAD`.
    Basic {
        /// Name stored in the header block.
        name: BlockName,
        /// Raw payload bytes, written with no further framing.
        data: Vec<u8>,
    },

    /// ASCII text file, loaded with `LOAD "CAS:"`. The payload is split
    /// into 256 byte chunks, each chunk behind its own marker, and the last
    /// chunk is padded with 0x1A up to the full chunk size.
    Ascii {
        /// Name stored in the header block.
        name: BlockName,
        /// Raw payload bytes.
        data: Vec<u8>,
    },

    /// Raw payload behind a minimal load-address/length header. No marker,
    /// no type run, no name.
    CustomHeader {
        /// Memory address the payload is loaded at.
        load_addr: u16,
        /// Raw payload bytes.
        data: Vec<u8>,
    },

    /// Raw payload written verbatim, with no framing at all.
    Custom {
        /// Raw payload bytes.
        data: Vec<u8>,
    },
}

impl CasEntry {
    /// Encode the entry and append its blocks to `writer`.
    ///
    /// The binary address span is validated before the first byte goes out,
    /// so a failing call leaves the sink untouched.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> CasResult<()> {
        match self {
            Self::Binary {
                name,
                load_addr,
                exec_addr,
                data,
            } => {
                let end_addr = binary_end_addr(*load_addr, data.len())?;

                writer.write_all(&SYNC_MARKER)?;
                writer.write_all(&[BINARY_FILL; 10])?;
                writer.write_all(name.as_bytes())?;

                writer.write_all(&SYNC_MARKER)?;
                writer.write_u16::<LittleEndian>(*load_addr)?;
                writer.write_u16::<LittleEndian>(end_addr)?;
                writer.write_u16::<LittleEndian>(*exec_addr)?;
                writer.write_all(data)?;
            }

            Self::Basic { name, data } => {
                writer.write_all(&SYNC_MARKER)?;
                writer.write_all(&[BASIC_FILL; 10])?;
                writer.write_all(name.as_bytes())?;

                writer.write_all(&SYNC_MARKER)?;
                writer.write_all(data)?;
            }

            Self::Ascii { name, data } => {
                writer.write_all(&SYNC_MARKER)?;
                writer.write_all(&[ASCII_FILL; 10])?;
                writer.write_all(name.as_bytes())?;

                for chunk in data.chunks(ASCII_CHUNK_SIZE) {
                    writer.write_all(&SYNC_MARKER)?;
                    writer.write_all(chunk)?;
                }

                // The last chunk is padded up to the full 256 bytes. An
                // exact multiple of the chunk size (including the empty
                // file) gets a whole extra padding block behind its own
                // marker; existing loaders depend on that layout.
                let padding = [ASCII_EOF_PAD; ASCII_CHUNK_SIZE];
                let tail = data.len() % ASCII_CHUNK_SIZE;
                if tail == 0 {
                    writer.write_all(&SYNC_MARKER)?;
                    writer.write_all(&padding)?;
                } else {
                    writer.write_all(&padding[tail..])?;
                }
            }

            Self::CustomHeader { load_addr, data } => {
                writer.write_u16::<LittleEndian>(*load_addr)?;
                writer.write_u16::<LittleEndian>(data.len() as u16)?;
                writer.write_all(data)?;
            }

            Self::Custom { data } => {
                writer.write_all(data)?;
            }
        }

        Ok(())
    }

    /// Encode the entry into a fresh byte buffer.
    pub fn to_bytes(&self) -> CasResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Name recorded in the header block, if this entry type has one.
    pub fn name(&self) -> Option<&BlockName> {
        match self {
            Self::Binary { name, .. } | Self::Basic { name, .. } | Self::Ascii { name, .. } => {
                Some(name)
            }
            Self::CustomHeader { .. } | Self::Custom { .. } => None,
        }
    }

    /// Length of the raw payload in bytes.
    pub fn payload_len(&self) -> usize {
        match self {
            Self::Binary { data, .. }
            | Self::Basic { data, .. }
            | Self::Ascii { data, .. }
            | Self::CustomHeader { data, .. }
            | Self::Custom { data } => data.len(),
        }
    }
}

/// Last address occupied by a binary payload loaded at `load_addr`.
///
/// The image must fit below 0x10000. The empty payload is accepted and
/// yields the degenerate span ending just before the load address.
fn binary_end_addr(load_addr: u16, length: usize) -> CasResult<u16> {
    let span = u64::from(load_addr) + length as u64;
    if span > 0x1_0000 {
        return Err(CasError::AddressOverflow { load_addr, length });
    }
    Ok(span.saturating_sub(1) as u16)
}
