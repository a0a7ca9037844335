use std::collections::HashMap;

use roost_wire::{DecodeError, Envelope};

use crate::draft::DraftEvent;
use crate::schema::{msg_type, system_msg_type};
use crate::{group_change, join_request};

/// Which server channel delivered the packet. The session layer knows the
/// originating command, so this arrives alongside the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    /// Group system message (`struct_msg` shape).
    System,
    /// Common message container (`msg` shape).
    Common,
}

/// Registry key: envelope kind plus the numeric type/sub-type codes.
/// Common-container notices have no outer sub-type; theirs is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchKey {
    pub kind: EnvelopeKind,
    pub msg_type: u64,
    pub sub_type: u64,
}

impl DispatchKey {
    pub const fn system(msg_type: u64, sub_type: u64) -> DispatchKey {
        DispatchKey { kind: EnvelopeKind::System, msg_type, sub_type }
    }

    pub const fn common(msg_type: u64) -> DispatchKey {
        DispatchKey { kind: EnvelopeKind::Common, msg_type, sub_type: 0 }
    }
}

/// A typed notice decoder: consumes the parsed envelope and yields zero or
/// more drafts. Decoders are pure; they never touch session state.
pub type NoticeDecoder = fn(&Envelope) -> Result<Vec<DraftEvent>, DecodeError>;

/// Dispatch keys the protocol defines but this pipeline deliberately does not
/// decode, with the reason. A missing registry entry for one of these is a
/// designed no-op, not drift.
pub const INTENTIONALLY_UNHANDLED: &[(DispatchKey, &str)] = &[
    (
        DispatchKey::system(system_msg_type::GROUP, system_msg_type::SUB_JOIN_DECIDED),
        "join request already decided by another admin; a rejection outcome has no domain event",
    ),
    (
        DispatchKey::system(system_msg_type::GROUP, system_msg_type::SUB_INVITE_OFFER),
        "invitation offer to the bot itself; answered by the command layer, not a group notice",
    ),
];

/// Static table mapping dispatch keys to typed decoders. Built once at
/// session start; lookups are read-only and safe to share across workers.
pub struct DecoderRegistry {
    entries: HashMap<DispatchKey, NoticeDecoder>,
}

impl DecoderRegistry {
    /// The standard notice table.
    pub fn standard() -> DecoderRegistry {
        let mut entries: HashMap<DispatchKey, NoticeDecoder> = HashMap::new();
        entries.insert(
            DispatchKey::system(system_msg_type::GROUP, system_msg_type::SUB_JOIN_REQUEST),
            join_request::decode,
        );
        entries.insert(
            DispatchKey::common(msg_type::MEMBER_INCREASE),
            group_change::decode_increase,
        );
        entries.insert(
            DispatchKey::common(msg_type::MEMBER_DECREASE),
            group_change::decode_decrease,
        );
        DecoderRegistry { entries }
    }

    /// Look up the decoder for a key. `None` means the packet is consumed
    /// with zero events.
    pub fn resolve(&self, key: DispatchKey) -> Option<NoticeDecoder> {
        self.entries.get(&key).copied()
    }

    /// Keys with a registered decoder.
    pub fn handled_keys(&self) -> impl Iterator<Item = DispatchKey> + '_ {
        self.entries.keys().copied()
    }
}
