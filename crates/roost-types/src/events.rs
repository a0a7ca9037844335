use serde::{Deserialize, Serialize};

use crate::models::Member;

/// Finalized notice events, emitted only after the state cache has been
/// cross-checked and mutated. Member payloads are snapshots taken at the
/// moment of emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NoticeEvent {
    /// Someone asked to join a group; an admin decision is still pending.
    /// Carries no member snapshot — a request is not membership.
    MemberJoinRequest {
        /// Server sequence of the system message, used to answer the request.
        seq: u64,
        from_uin: u64,
        from_nick: String,
        group_uin: u64,
        group_name: String,
        /// The requester's free-text verification message.
        message: String,
    },

    /// A member entered the group, either approved by an admin or directly
    /// because the group allows anyone to join. The wire does not distinguish
    /// the two causes.
    MemberJoinActive { group_uin: u64, member: Member },

    /// A member left the group. `operator_uin` is the removing admin for a
    /// kick, `None` for a voluntary quit.
    MemberLeave {
        group_uin: u64,
        member: Member,
        operator_uin: Option<u64>,
    },
}

impl NoticeEvent {
    /// The group this event is scoped to.
    pub fn group_uin(&self) -> u64 {
        match self {
            Self::MemberJoinRequest { group_uin, .. } => *group_uin,
            Self::MemberJoinActive { group_uin, .. } => *group_uin,
            Self::MemberLeave { group_uin, .. } => *group_uin,
        }
    }
}
