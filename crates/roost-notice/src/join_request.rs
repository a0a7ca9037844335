//! Decoder for active join requests (group system message, sub-type 1).
//!
//! The system message also lists the admin actions the server offers
//! (approve / reject / ignore descriptors); those matter to the command
//! layer answering the request, not to event emission, so they ride along
//! as unread envelope fields.

use roost_wire::{DecodeError, Envelope};

use crate::draft::DraftEvent;
use crate::schema::{struct_msg, system_msg};

/// Decode a `struct_msg` envelope into exactly one `JoinRequest` draft.
///
/// The registry only routes sub-type 1 here, so the decode is unconditional:
/// requester and target group are required, the human-readable fields
/// default to empty when the server omits them.
pub fn decode(envelope: &Envelope) -> Result<Vec<DraftEvent>, DecodeError> {
    let payload = envelope.require_embedded(struct_msg::SYSTEM_MSG, "system msg")?;

    let from_uin = envelope.require_uint(struct_msg::REQ_UIN, "req uin")?;
    let group_uin = payload.require_uint(system_msg::GROUP_CODE, "group code")?;

    Ok(vec![DraftEvent::JoinRequest {
        seq: envelope.uint(struct_msg::MSG_SEQ).unwrap_or(0),
        from_uin,
        from_nick: payload.text(system_msg::REQ_UIN_NICK).unwrap_or_default(),
        group_uin,
        group_name: payload.text(system_msg::GROUP_NAME).unwrap_or_default(),
        message: payload.text(system_msg::ADDITIONAL).unwrap_or_default(),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_wire::{encode_message, encode_string, encode_uint};

    fn request_packet(with_group: bool) -> Vec<u8> {
        let mut payload = Vec::new();
        encode_uint(system_msg::SUB_TYPE, 1, &mut payload);
        encode_string(system_msg::ADDITIONAL, "verification message", &mut payload);
        if with_group {
            encode_uint(system_msg::GROUP_CODE, 2230203, &mut payload);
        }
        encode_string(system_msg::REQ_UIN_NICK, "user1", &mut payload);
        encode_string(system_msg::GROUP_NAME, "testtest", &mut payload);

        let mut packet = Vec::new();
        encode_uint(struct_msg::MSG_TYPE, 2, &mut packet);
        encode_uint(struct_msg::MSG_SEQ, 16300, &mut packet);
        encode_uint(struct_msg::REQ_UIN, 1230001, &mut packet);
        encode_message(struct_msg::SYSTEM_MSG, &payload, &mut packet);
        packet
    }

    #[test]
    fn emits_one_draft_with_verbatim_fields() {
        let env = Envelope::decode(&request_packet(true));
        let drafts = decode(&env).unwrap();
        assert_eq!(
            drafts,
            vec![DraftEvent::JoinRequest {
                seq: 16300,
                from_uin: 1230001,
                from_nick: "user1".into(),
                group_uin: 2230203,
                group_name: "testtest".into(),
                message: "verification message".into(),
            }]
        );
    }

    #[test]
    fn missing_group_code_fails_that_packet_only() {
        let env = Envelope::decode(&request_packet(false));
        assert_eq!(decode(&env), Err(DecodeError::Truncated("group code")));
    }
}
