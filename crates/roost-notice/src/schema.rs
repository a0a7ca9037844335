//! Field numbers and type codes for the notice envelopes.
//!
//! Two outer shapes reach this pipeline:
//!
//! - the common message container (`msg`), whose header routes by `msg_type`
//!   and whose body may carry an opaque inner blob;
//! - the group system message (`struct_msg`), which nests the join-request
//!   payload under field 50.
//!
//! Only the fields this client reads are named; everything else the server
//! sends rides along as unknown fields in the envelope.

/// Common message container.
pub mod msg {
    pub const HEAD: u32 = 1;
    pub const CONTENT_HEAD: u32 = 2;
    pub const BODY: u32 = 3;
}

/// Common message header.
pub mod msg_head {
    pub const FROM_UIN: u32 = 1;
    pub const TO_UIN: u32 = 2;
    pub const MSG_TYPE: u32 = 3;
    pub const MSG_SEQ: u32 = 5;
    pub const MSG_TIME: u32 = 6;
    pub const MSG_UID: u32 = 7;
    pub const AUTH_UIN: u32 = 15;
    pub const AUTH_NICK: u32 = 16;
    pub const EXT_GROUP_KEY_INFO: u32 = 25;
}

/// Group-key counters nested in the common header.
pub mod ext_group_key_info {
    pub const CUR_MAX_SEQ: u32 = 1;
    pub const CUR_TIME: u32 = 2;
}

/// Common message body.
pub mod msg_body {
    pub const RICH_TEXT: u32 = 1;
    /// Opaque bytes; for membership-change notices this holds the
    /// fixed-layout blob decoded by `group_change`.
    pub const MSG_CONTENT: u32 = 2;
}

/// Group system message (join requests and their outcomes).
pub mod struct_msg {
    pub const VERSION: u32 = 1;
    pub const MSG_TYPE: u32 = 2;
    pub const MSG_SEQ: u32 = 3;
    pub const MSG_TIME: u32 = 4;
    pub const REQ_UIN: u32 = 5;
    pub const SYSTEM_MSG: u32 = 50;
}

/// Payload of a group system message.
pub mod system_msg {
    pub const SUB_TYPE: u32 = 1;
    pub const TITLE: u32 = 2;
    pub const DESCRIBE: u32 = 3;
    /// The requester's free-text verification message.
    pub const ADDITIONAL: u32 = 4;
    pub const SRC_ID: u32 = 7;
    pub const SUB_SRC_ID: u32 = 8;
    pub const ACTIONS: u32 = 9;
    pub const GROUP_CODE: u32 = 10;
    pub const GROUP_MSG_TYPE: u32 = 12;
    pub const GROUP_INFO: u32 = 15;
    pub const GROUP_FLAG_EXT3: u32 = 29;
    pub const REQ_UIN_FACE_ID: u32 = 34;
    pub const REQ_UIN_NICK: u32 = 35;
    pub const GROUP_NAME: u32 = 36;
    pub const GROUP_EXT_FLAG: u32 = 40;
}

/// One admin action offered on a pending system message.
pub mod system_msg_action {
    pub const NAME: u32 = 1;
    pub const RESULT: u32 = 2;
    pub const INFO: u32 = 3;
    pub const DETAIL_NAME: u32 = 4;
}

/// Action descriptor details.
pub mod system_msg_action_info {
    pub const TYPE: u32 = 1;
    pub const GROUP_CODE: u32 = 2;

    /// Approve the request.
    pub const TYPE_APPROVE: u64 = 11;
    /// Reject the request. Produces no domain event.
    pub const TYPE_REJECT: u64 = 12;
    /// Ignore the request. Produces no domain event.
    pub const TYPE_IGNORE: u64 = 14;
}

/// `msg_head.msg_type` codes routed by the dispatch registry.
pub mod msg_type {
    /// A member entered a group (admin approval or direct join).
    pub const MEMBER_INCREASE: u64 = 33;
    /// A member left a group (quit or kick).
    pub const MEMBER_DECREASE: u64 = 34;
}

/// `struct_msg.msg_type` / `system_msg.sub_type` codes.
pub mod system_msg_type {
    /// Group-scoped system message.
    pub const GROUP: u64 = 2;
    /// Sub-type: an active, still-pending join request.
    pub const SUB_JOIN_REQUEST: u64 = 1;
    /// Sub-type: the request was already decided by another admin.
    pub const SUB_JOIN_DECIDED: u64 = 2;
    /// Sub-type: an invitation offer to this bot.
    pub const SUB_INVITE_OFFER: u64 = 3;
}
