// src/envelope.rs
//! Binary envelope codec — format version 2
//!
//! Layout, integers little-endian:
//!
//! ```text
//! [version: u16][metadata len: u32][iterations: u32]
//! [symmetric salt len: u16][signing salt len: u16]
//! [symmetric salt][signing salt][IV: 16][metadata][MAC][ciphertext...]
//! ```
//!
//! The MAC length is not stored; both sides take it from the configured
//! MAC algorithm. Decoding checks every offset against the buffer and
//! never panics on hostile input.

use crate::consts::{FIXED_HEADER_LEN, IV_LEN};
use crate::error::{CipherError, Result};

/// The 14 bytes at the front of every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    pub version: u16,
    pub metadata_len: u32,
    pub iterations: u32,
    pub symmetric_salt_len: u16,
    pub signing_salt_len: u16,
}

impl FixedHeader {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let header = bytes
            .get(..FIXED_HEADER_LEN)
            .ok_or(CipherError::TruncatedEnvelope {
                needed: FIXED_HEADER_LEN,
                actual: bytes.len(),
            })?;

        Ok(Self {
            version: u16::from_le_bytes([header[0], header[1]]),
            metadata_len: u32::from_le_bytes([header[2], header[3], header[4], header[5]]),
            iterations: u32::from_le_bytes([header[6], header[7], header[8], header[9]]),
            symmetric_salt_len: u16::from_le_bytes([header[10], header[11]]),
            signing_salt_len: u16::from_le_bytes([header[12], header[13]]),
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.metadata_len.to_le_bytes());
        out.extend_from_slice(&self.iterations.to_le_bytes());
        out.extend_from_slice(&self.symmetric_salt_len.to_le_bytes());
        out.extend_from_slice(&self.signing_salt_len.to_le_bytes());
    }

    /// Bytes from the start of the envelope to the first ciphertext byte
    fn prefix_len(&self, mac_len: usize) -> Option<usize> {
        FIXED_HEADER_LEN
            .checked_add(self.symmetric_salt_len as usize)?
            .checked_add(self.signing_salt_len as usize)?
            .checked_add(IV_LEN)?
            .checked_add(usize::try_from(self.metadata_len).ok()?)?
            .checked_add(mac_len)
    }
}

/// Read only the version field, without decoding anything else
pub fn peek_version(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

/// A decoded (or to-be-encoded) envelope, borrowing its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub version: u16,
    pub iterations: u32,
    pub symmetric_salt: &'a [u8],
    pub signing_salt: &'a [u8],
    pub iv: &'a [u8],
    pub metadata: &'a [u8],
    pub mac: &'a [u8],
    pub ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    pub fn encoded_len(&self) -> usize {
        FIXED_HEADER_LEN
            + self.symmetric_salt.len()
            + self.signing_salt.len()
            + self.iv.len()
            + self.metadata.len()
            + self.mac.len()
            + self.ciphertext.len()
    }

    fn header(&self) -> Result<FixedHeader> {
        let salt_len = |salt: &[u8]| {
            u16::try_from(salt.len()).map_err(|_| {
                CipherError::InvalidConfiguration(format!(
                    "salt of {} bytes does not fit the 16-bit length field",
                    salt.len()
                ))
            })
        };
        let metadata_len = u32::try_from(self.metadata.len()).map_err(|_| {
            CipherError::InvalidConfiguration(format!(
                "metadata of {} bytes does not fit the 32-bit length field",
                self.metadata.len()
            ))
        })?;

        Ok(FixedHeader {
            version: self.version,
            metadata_len,
            iterations: self.iterations,
            symmetric_salt_len: salt_len(self.symmetric_salt)?,
            signing_salt_len: salt_len(self.signing_salt)?,
        })
    }

    /// Serialize in wire order
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.iv.len() != IV_LEN {
            return Err(CipherError::InvalidIvLength(self.iv.len()));
        }
        let header = self.header()?;

        let mut out = Vec::with_capacity(self.encoded_len());
        header.write(&mut out);
        out.extend_from_slice(self.symmetric_salt);
        out.extend_from_slice(self.signing_salt);
        out.extend_from_slice(self.iv);
        out.extend_from_slice(self.metadata);
        out.extend_from_slice(self.mac);
        out.extend_from_slice(self.ciphertext);
        Ok(out)
    }

    /// Parse `bytes`, accepting only `expected_version`.
    ///
    /// The version is checked before any length field is trusted; the
    /// whole prefix up to the ciphertext must be present before any field
    /// is sliced out.
    pub fn decode(bytes: &'a [u8], expected_version: u16, mac_len: usize) -> Result<Self> {
        let header = FixedHeader::parse(bytes)?;
        if header.version != expected_version {
            return Err(CipherError::UnsupportedVersion {
                found: header.version,
                expected: expected_version,
            });
        }

        let needed = header
            .prefix_len(mac_len)
            .ok_or(CipherError::TruncatedEnvelope {
                needed: usize::MAX,
                actual: bytes.len(),
            })?;
        if bytes.len() < needed {
            return Err(CipherError::TruncatedEnvelope {
                needed,
                actual: bytes.len(),
            });
        }

        let mut fields = Fields::new(bytes, FIXED_HEADER_LEN);
        let symmetric_salt = fields.take(header.symmetric_salt_len as usize)?;
        let signing_salt = fields.take(header.signing_salt_len as usize)?;
        let iv = fields.take(IV_LEN)?;
        let metadata = fields.take(header.metadata_len as usize)?;
        let mac = fields.take(mac_len)?;
        let ciphertext = fields.rest();

        Ok(Self {
            version: header.version,
            iterations: header.iterations,
            symmetric_salt,
            signing_salt,
            iv,
            metadata,
            mac,
            ciphertext,
        })
    }
}

/// Bounds-checked forward cursor
struct Fields<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Fields<'a> {
    fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(len);
        let field = end
            .and_then(|end| self.buf.get(self.pos..end))
            .ok_or(CipherError::TruncatedEnvelope {
                needed: end.unwrap_or(usize::MAX),
                actual: self.buf.len(),
            })?;
        self.pos += len;
        Ok(field)
    }

    fn rest(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or_default()
    }
}
