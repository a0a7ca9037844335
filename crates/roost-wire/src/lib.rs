/// roost-wire: tagged-field binary envelope codec.
///
/// Notice packets use a protobuf-style wire format: every field is a varint
/// tag (field number + wire type) followed by the value. `Envelope` decodes a
/// buffer into a generic field tree without any schema, so unknown fields the
/// server starts sending never break decoding; typed decoders then pull the
/// fields they declare required through the `require_*` accessors.

pub mod encode;
pub mod envelope;

pub use encode::{
    encode_bytes, encode_message, encode_string, encode_tag, encode_uint, encode_varint,
};
pub use envelope::{decode_tag, decode_varint, DecodeError, Envelope, Value};
