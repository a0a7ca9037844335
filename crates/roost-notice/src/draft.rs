/// Unfinalized decode results. A draft carries only wire-derived fields; the
/// cache mutator cross-checks it against session state and either discards it
/// or finalizes it into a `NoticeEvent`. Drafts live inside a single decode
/// call and are never published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// Someone asked to join a group (system message, sub-type 1).
    JoinRequest {
        seq: u64,
        from_uin: u64,
        from_nick: String,
        group_uin: u64,
        group_name: String,
        message: String,
    },

    /// A member entered a group. Covers both admin approval and direct join
    /// under an anyone-may-join setting; the wire collapses the two.
    JoinActive {
        group_uin: u64,
        target_uin: u64,
        /// Best display name the packet offers for the new member.
        target_nick: String,
        operator_uin: u64,
    },

    /// A member left a group. `operator_uin` is set when an admin removed
    /// them, absent for a voluntary quit.
    Leave {
        group_uin: u64,
        target_uin: u64,
        operator_uin: Option<u64>,
    },
}

impl DraftEvent {
    /// The group this draft must be validated against.
    pub fn group_uin(&self) -> u64 {
        match self {
            Self::JoinRequest { group_uin, .. } => *group_uin,
            Self::JoinActive { group_uin, .. } => *group_uin,
            Self::Leave { group_uin, .. } => *group_uin,
        }
    }
}
