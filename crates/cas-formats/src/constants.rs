//! Wire-level constants of the CAS container format.

/// Synchronisation marker framing every tape block.
///
/// The tape loading routine scans for this exact byte run to find the next
/// block, so it is written byte for byte on every occurrence.
pub const SYNC_MARKER: [u8; 8] = [0x1F, 0xA6, 0xDE, 0xBA, 0xCC, 0x13, 0x7D, 0x74];

/// Fill byte of the 10-byte type run announcing a machine-code image.
pub(crate) const BINARY_FILL: u8 = 0xD0;

/// Fill byte of the 10-byte type run announcing a tokenised BASIC program.
pub(crate) const BASIC_FILL: u8 = 0xD3;

/// Fill byte of the 10-byte type run announcing an ASCII text file.
pub(crate) const ASCII_FILL: u8 = 0xEA;

/// ASCII files are written in chunks of this many bytes, each chunk behind
/// its own synchronisation marker.
pub const ASCII_CHUNK_SIZE: usize = 256;

/// Pad byte filling the last ASCII chunk up to a full 256 bytes. This is the
/// CP/M style end-of-file marker, which is how text loaders know where the
/// file really ends.
pub const ASCII_EOF_PAD: u8 = 0x1A;

/// Default load and exec address for binary images (start of page 1 RAM).
pub const DEFAULT_ADDR: u16 = 0x4000;
