use std::collections::BTreeMap;

use bytes::Bytes;

/// Wire type for varint values (ints, bools, enums).
pub const WIRE_VARINT: u8 = 0;
/// Wire type for 64-bit fixed values.
pub const WIRE_FIXED64: u8 = 1;
/// Wire type for length-delimited values (strings, bytes, nested messages).
pub const WIRE_LEN: u8 = 2;
/// Wire type for 32-bit fixed values.
pub const WIRE_FIXED32: u8 = 5;

/// Failure to read a field a typed decoder declares required.
///
/// These are the only decode failure modes: unknown fields, unknown type
/// codes and malformed trailing data are all tolerated, so an error here
/// always means a required part of the packet could not be read consistently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("packet truncated: {0} could not be read")]
    Truncated(&'static str),
    #[error("field {field} ({what}) has the wrong wire type")]
    TypeMismatch { field: u32, what: &'static str },
}

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Varint(u64),
    Fixed32(u32),
    Fixed64(u64),
    /// Strings, opaque byte blobs and nested messages all arrive as
    /// length-delimited bytes; without a schema they are indistinguishable,
    /// so they stay opaque until an accessor interprets them.
    Bytes(Bytes),
}

/// A decoded tagged-field tree: field number → values in arrival order.
/// Immutable once decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    fields: BTreeMap<u32, Vec<Value>>,
}

/// Decode a varint, advancing the buffer. `None` on underrun or overflow.
pub fn decode_varint(buf: &mut &[u8]) -> Option<u64> {
    let mut result: u64 = 0;
    let mut shift = 0;
    loop {
        let (&byte, rest) = buf.split_first()?;
        *buf = rest;
        result |= ((byte & 0x7F) as u64) << shift;
        if byte & 0x80 == 0 {
            return Some(result);
        }
        shift += 7;
        if shift >= 64 {
            return None;
        }
    }
}

/// Decode a field tag, returning (field number, wire type).
pub fn decode_tag(buf: &mut &[u8]) -> Option<(u32, u8)> {
    let tag = decode_varint(buf)?;
    Some(((tag >> 3) as u32, (tag & 0x07) as u8))
}

fn decode_length_delimited<'a>(buf: &mut &'a [u8]) -> Option<&'a [u8]> {
    let len = decode_varint(buf)? as usize;
    if buf.len() < len {
        return None;
    }
    let (data, rest) = buf.split_at(len);
    *buf = rest;
    Some(data)
}

impl Envelope {
    /// Decode a buffer into a field tree.
    ///
    /// Decoding is total: every cleanly-readable field is kept regardless of
    /// its number, and a malformed or truncated tail stops the parse with
    /// everything read so far intact. Whether a missing field matters is the
    /// caller's call, made through the `require_*` accessors.
    pub fn decode(packet: &[u8]) -> Envelope {
        let mut fields: BTreeMap<u32, Vec<Value>> = BTreeMap::new();
        let mut buf = packet;
        while !buf.is_empty() {
            let Some((field, wire_type)) = decode_tag(&mut buf) else {
                break;
            };
            if field == 0 {
                break; // field numbers start at 1; this is not a field stream
            }
            let value = match wire_type {
                WIRE_VARINT => match decode_varint(&mut buf) {
                    Some(v) => Value::Varint(v),
                    None => break,
                },
                WIRE_FIXED64 => {
                    let Some((raw, rest)) = buf.split_at_checked(8) else {
                        break;
                    };
                    buf = rest;
                    Value::Fixed64(u64::from_le_bytes(raw.try_into().unwrap()))
                }
                WIRE_LEN => match decode_length_delimited(&mut buf) {
                    Some(data) => Value::Bytes(Bytes::copy_from_slice(data)),
                    None => break,
                },
                WIRE_FIXED32 => {
                    let Some((raw, rest)) = buf.split_at_checked(4) else {
                        break;
                    };
                    buf = rest;
                    Value::Fixed32(u32::from_le_bytes(raw.try_into().unwrap()))
                }
                _ => break,
            };
            fields.entry(field).or_default().push(value);
        }
        Envelope { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First value of a field, if present.
    pub fn first(&self, field: u32) -> Option<&Value> {
        self.fields.get(&field).and_then(|values| values.first())
    }

    /// All values of a (repeated) field, in arrival order.
    pub fn repeated(&self, field: u32) -> &[Value] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First value of a field as an unsigned integer.
    pub fn uint(&self, field: u32) -> Option<u64> {
        match self.first(field)? {
            Value::Varint(v) => Some(*v),
            Value::Fixed32(v) => Some(*v as u64),
            Value::Fixed64(v) => Some(*v),
            Value::Bytes(_) => None,
        }
    }

    /// Required unsigned integer field.
    pub fn require_uint(&self, field: u32, what: &'static str) -> Result<u64, DecodeError> {
        match self.first(field) {
            Some(Value::Varint(v)) => Ok(*v),
            Some(Value::Fixed32(v)) => Ok(*v as u64),
            Some(Value::Fixed64(v)) => Ok(*v),
            Some(Value::Bytes(_)) => Err(DecodeError::TypeMismatch { field, what }),
            None => Err(DecodeError::Truncated(what)),
        }
    }

    /// First value of a field as raw bytes.
    pub fn bytes(&self, field: u32) -> Option<&Bytes> {
        match self.first(field)? {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    /// Required bytes field.
    pub fn require_bytes(&self, field: u32, what: &'static str) -> Result<&Bytes, DecodeError> {
        match self.first(field) {
            Some(Value::Bytes(data)) => Ok(data),
            Some(_) => Err(DecodeError::TypeMismatch { field, what }),
            None => Err(DecodeError::Truncated(what)),
        }
    }

    /// First value of a field as text. The protocol's strings are not all
    /// valid UTF-8 (some carry GBK), so this is lossy by design.
    pub fn text(&self, field: u32) -> Option<String> {
        self.bytes(field)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    /// First value of a field decoded as a nested envelope.
    pub fn embedded(&self, field: u32) -> Option<Envelope> {
        self.bytes(field).map(|data| Envelope::decode(data))
    }

    /// Required nested-envelope field.
    pub fn require_embedded(&self, field: u32, what: &'static str) -> Result<Envelope, DecodeError> {
        self.require_bytes(field, what).map(|data| Envelope::decode(data))
    }
}
