//! Field encoding, the mirror of `envelope`. Outgoing protocol commands and
//! test fixtures build packets with these helpers.

use crate::envelope::{WIRE_LEN, WIRE_VARINT};

/// Append a varint.
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Append a field tag.
pub fn encode_tag(field: u32, wire_type: u8, buf: &mut Vec<u8>) {
    encode_varint(((field as u64) << 3) | (wire_type as u64), buf);
}

/// Append an unsigned integer field.
pub fn encode_uint(field: u32, value: u64, buf: &mut Vec<u8>) {
    encode_tag(field, WIRE_VARINT, buf);
    encode_varint(value, buf);
}

/// Append a bytes field.
pub fn encode_bytes(field: u32, data: &[u8], buf: &mut Vec<u8>) {
    encode_tag(field, WIRE_LEN, buf);
    encode_varint(data.len() as u64, buf);
    buf.extend_from_slice(data);
}

/// Append a string field (same wire shape as bytes).
pub fn encode_string(field: u32, text: &str, buf: &mut Vec<u8>) {
    encode_bytes(field, text.as_bytes(), buf);
}

/// Append an already-encoded nested message field.
pub fn encode_message(field: u32, message: &[u8], buf: &mut Vec<u8>) {
    encode_bytes(field, message, buf);
}
