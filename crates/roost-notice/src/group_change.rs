//! Decoders for membership-change notices (common container, msg types 33
//! and 34).
//!
//! The outer envelope only routes: which group, which bot, who the change is
//! about. The change itself sits in `msg_body.msg_content` as a fixed-layout
//! blob that is NOT tagged-field encoded — it must be read independently of
//! the outer schema:
//!
//! ```text
//! [0..4]   group uin (u32 BE)
//! [4]      reserved marker
//! [5..9]   target member uin (u32 BE)
//! [9]      change kind
//! [10..14] operator uin (u32 BE)
//! [14..]   length-prefixed role text (GBK) and a hex token; not read
//! ```

use roost_wire::{DecodeError, Envelope};

use crate::draft::DraftEvent;
use crate::header::NoticeHeader;
use crate::schema::{msg, msg_body};

/// Shortest blob that still carries the three uins and the kind byte.
const BLOB_MIN_LEN: usize = 14;

/// Member-increase kind: admin approved the request, or the member joined
/// directly because the group allows anyone. The wire does not say which.
const KIND_JOINED: u8 = 0x02;
/// Member-increase kind: joined through a member's invitation. Needs invitor
/// context this pipeline does not carry; consumed with zero drafts.
const KIND_JOINED_INVITED: u8 = 0x03;

/// Member-decrease kind: left on their own.
const KIND_QUIT: u8 = 0x01;
/// Member-decrease kinds: removed by the operator.
const KIND_KICKED: u8 = 0x02;
const KIND_KICKED_OFFLINE: u8 = 0x03;

/// The fixed-layout membership blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipBlob {
    pub group_uin: u64,
    pub target_uin: u64,
    pub kind: u8,
    pub operator_uin: u64,
}

impl MembershipBlob {
    /// Read the blob's fixed prefix; the role text and token that follow are
    /// allowed to be absent or truncated.
    pub fn read(blob: &[u8]) -> Result<MembershipBlob, DecodeError> {
        if blob.len() < BLOB_MIN_LEN {
            return Err(DecodeError::Truncated("membership blob"));
        }
        let uin_at = |at: usize| u32::from_be_bytes(blob[at..at + 4].try_into().unwrap()) as u64;
        Ok(MembershipBlob {
            group_uin: uin_at(0),
            target_uin: uin_at(5),
            kind: blob[9],
            operator_uin: uin_at(10),
        })
    }
}

fn read_blob(envelope: &Envelope) -> Result<(NoticeHeader, MembershipBlob), DecodeError> {
    let header = NoticeHeader::read(envelope)?;
    let body = envelope.require_embedded(msg::BODY, "msg body")?;
    let content = body.require_bytes(msg_body::MSG_CONTENT, "msg content")?;
    let blob = MembershipBlob::read(content)?;
    Ok((header, blob))
}

/// Decode a member-increase notice (msg type 33).
pub fn decode_increase(envelope: &Envelope) -> Result<Vec<DraftEvent>, DecodeError> {
    let (header, blob) = read_blob(envelope)?;
    match blob.kind {
        KIND_JOINED => Ok(vec![DraftEvent::JoinActive {
            group_uin: blob.group_uin,
            target_uin: blob.target_uin,
            target_nick: header.auth_nick,
            operator_uin: blob.operator_uin,
        }]),
        KIND_JOINED_INVITED => {
            tracing::debug!(
                group_uin = blob.group_uin,
                target_uin = blob.target_uin,
                "invited-join notice consumed without an event"
            );
            Ok(Vec::new())
        }
        kind => {
            tracing::debug!(kind, group_uin = blob.group_uin, "unknown member-increase kind");
            Ok(Vec::new())
        }
    }
}

/// Decode a member-decrease notice (msg type 34).
pub fn decode_decrease(envelope: &Envelope) -> Result<Vec<DraftEvent>, DecodeError> {
    let (_header, blob) = read_blob(envelope)?;
    let operator_uin = match blob.kind {
        KIND_QUIT => None,
        KIND_KICKED | KIND_KICKED_OFFLINE => Some(blob.operator_uin),
        kind => {
            tracing::debug!(kind, group_uin = blob.group_uin, "unknown member-decrease kind");
            return Ok(Vec::new());
        }
    };
    Ok(vec![DraftEvent::Leave {
        group_uin: blob.group_uin,
        target_uin: blob.target_uin,
        operator_uin,
    }])
}
