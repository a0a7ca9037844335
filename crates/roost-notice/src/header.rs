use roost_wire::{DecodeError, Envelope};

use crate::schema::{msg, msg_head};

/// Routing context shared by all common-container notices: who the notice is
/// about, which bot it was pushed to, and the server's type/sequence/time.
/// Read once per decode pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeHeader {
    /// Source of the notice; a group uin for group notices.
    pub from_uin: u64,
    /// The receiving bot's uin.
    pub to_uin: u64,
    pub msg_type: u64,
    pub msg_seq: u64,
    pub msg_time: u64,
    /// The user the notice concerns (e.g. the joining member), when present.
    pub auth_uin: u64,
    pub auth_nick: String,
}

impl NoticeHeader {
    /// Extract the header from a common message envelope. The source,
    /// destination and type code are required; everything else defaults.
    pub fn read(envelope: &Envelope) -> Result<NoticeHeader, DecodeError> {
        let head = envelope.require_embedded(msg::HEAD, "msg head")?;
        Ok(NoticeHeader {
            from_uin: head.require_uint(msg_head::FROM_UIN, "from uin")?,
            to_uin: head.require_uint(msg_head::TO_UIN, "to uin")?,
            msg_type: head.require_uint(msg_head::MSG_TYPE, "msg type")?,
            msg_seq: head.uint(msg_head::MSG_SEQ).unwrap_or(0),
            msg_time: head.uint(msg_head::MSG_TIME).unwrap_or(0),
            auth_uin: head.uint(msg_head::AUTH_UIN).unwrap_or(0),
            auth_nick: head.text(msg_head::AUTH_NICK).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_wire::{encode_message, encode_string, encode_uint};

    fn head_packet(with_type: bool) -> Vec<u8> {
        let mut head = Vec::new();
        encode_uint(msg_head::FROM_UIN, 2230203, &mut head);
        encode_uint(msg_head::TO_UIN, 1230003, &mut head);
        if with_type {
            encode_uint(msg_head::MSG_TYPE, 33, &mut head);
        }
        encode_uint(msg_head::AUTH_UIN, 1230001, &mut head);
        encode_string(msg_head::AUTH_NICK, "user1", &mut head);

        let mut packet = Vec::new();
        encode_message(msg::HEAD, &head, &mut packet);
        packet
    }

    #[test]
    fn reads_routing_context() {
        let env = Envelope::decode(&head_packet(true));
        let header = NoticeHeader::read(&env).unwrap();
        assert_eq!(header.from_uin, 2230203);
        assert_eq!(header.to_uin, 1230003);
        assert_eq!(header.msg_type, 33);
        assert_eq!(header.auth_uin, 1230001);
        assert_eq!(header.auth_nick, "user1");
        assert_eq!(header.msg_seq, 0);
    }

    #[test]
    fn missing_required_field_is_truncated() {
        let env = Envelope::decode(&head_packet(false));
        assert_eq!(
            NoticeHeader::read(&env),
            Err(DecodeError::Truncated("msg type"))
        );
    }
}
