//! Encapsulated CDR, as used by ROS 2 for message payloads.
//!
//! Every payload starts with a 4-byte encapsulation header: a 2-byte
//! representation identifier followed by 2 option bytes. The CDR body follows,
//! with alignment measured from the end of that header.

use byteorder::{BigEndian, LittleEndian};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Size of the encapsulation header that precedes the CDR body.
pub const ENCAPSULATION_HEADER_LEN: usize = 4;

#[derive(thiserror::Error, Debug)]
pub enum CdrError {
    #[error("payload of {0} bytes is too short for a CDR encapsulation header")]
    ShortEncapsulation(usize),

    #[error("unsupported CDR representation identifier {0:02x?}")]
    UnsupportedRepresentation([u8; 2]),

    #[error(transparent)]
    Cdr(#[from] cdr_encoding::Error),
}

/// The plain (non parameter-list) CDR representations used for user data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepresentationIdentifier {
    CdrBigEndian,
    CdrLittleEndian,
}

impl RepresentationIdentifier {
    pub fn from_bytes(bytes: [u8; 2]) -> Result<Self, CdrError> {
        match bytes {
            [0x00, 0x00] => Ok(Self::CdrBigEndian),
            [0x00, 0x01] => Ok(Self::CdrLittleEndian),
            _ => Err(CdrError::UnsupportedRepresentation(bytes)),
        }
    }

    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            Self::CdrBigEndian => [0x00, 0x00],
            Self::CdrLittleEndian => [0x00, 0x01],
        }
    }

    pub fn is_big_endian(self) -> bool {
        self == Self::CdrBigEndian
    }
}

/// Decode a message from an encapsulated CDR payload.
///
/// Trailing bytes after the message are ignored; publishers are allowed to pad.
pub fn try_decode_message<T: DeserializeOwned>(buf: &[u8]) -> Result<T, CdrError> {
    let Some((header, body)) = buf.split_first_chunk::<ENCAPSULATION_HEADER_LEN>() else {
        return Err(CdrError::ShortEncapsulation(buf.len()));
    };

    let representation = RepresentationIdentifier::from_bytes([header[0], header[1]])?;

    let (message, _bytes_read) = if representation.is_big_endian() {
        cdr_encoding::from_bytes::<T, BigEndian>(body)?
    } else {
        cdr_encoding::from_bytes::<T, LittleEndian>(body)?
    };

    Ok(message)
}

/// Encode a message as an encapsulated CDR payload.
pub fn encode_message<T: Serialize>(
    message: &T,
    representation: RepresentationIdentifier,
) -> Result<Vec<u8>, CdrError> {
    let body = if representation.is_big_endian() {
        cdr_encoding::to_vec::<T, BigEndian>(message)?
    } else {
        cdr_encoding::to_vec::<T, LittleEndian>(message)?
    };

    let [id_hi, id_lo] = representation.to_bytes();
    let mut payload = Vec::with_capacity(ENCAPSULATION_HEADER_LEN + body.len());
    payload.extend_from_slice(&[id_hi, id_lo, 0x00, 0x00]);
    payload.extend_from_slice(&body);
    Ok(payload)
}
