//! Packet builders for the pipeline tests, producing the same envelopes the
//! server pushes (values taken from captured sessions).

#![allow(dead_code)]

use roost_notice::schema::{
    ext_group_key_info, msg, msg_body, msg_head, struct_msg, system_msg, system_msg_action,
    system_msg_action_info,
};
use roost_notice::{BotSession, StateCache};
use roost_types::Permission;
use roost_wire::{encode_bytes, encode_message, encode_string, encode_uint};

pub const BOT_UIN: u64 = 1230003;
pub const GROUP_UIN: u64 = 2230203;
pub const GROUP_NAME: &str = "testtest";
pub const OWNER_UIN: u64 = 1230002;
pub const REQUESTER_UIN: u64 = 1230001;

/// Captured member-increase content blob: group 2230203, target 1230001,
/// kind 0x02, operator 1230003, GBK role text, hex token.
pub const CAPTURED_INCREASE_BLOB: &str = "002207bb010012c4b1020012c4b306b9dcc0edd4b10030443832414332463330364644343530303638324636413832303138344142304343303243413333374131303843323636";

/// A session where the bot is an administrator of the test group and the
/// owner is the only member, matching the captured scenario.
pub fn seeded_session() -> BotSession {
    let mut cache = StateCache::new(BOT_UIN);
    cache
        .add_group(GROUP_UIN, OWNER_UIN, GROUP_NAME, Permission::Administrator)
        .add_member(OWNER_UIN, "user2", Permission::Owner);
    BotSession::new(cache)
}

pub fn captured_increase_blob() -> Vec<u8> {
    hex::decode(CAPTURED_INCREASE_BLOB).unwrap()
}

/// Build a membership blob with the fixed prefix only; the trailing role
/// text is optional on the wire.
pub fn membership_blob(group_uin: u32, target_uin: u32, kind: u8, operator_uin: u32) -> Vec<u8> {
    let mut blob = Vec::with_capacity(14);
    blob.extend_from_slice(&group_uin.to_be_bytes());
    blob.push(0x01);
    blob.extend_from_slice(&target_uin.to_be_bytes());
    blob.push(kind);
    blob.extend_from_slice(&operator_uin.to_be_bytes());
    blob
}

fn action(name: &str, result: &str, action_type: u64, buf: &mut Vec<u8>) {
    let mut info = Vec::new();
    encode_uint(system_msg_action_info::TYPE, action_type, &mut info);
    encode_uint(system_msg_action_info::GROUP_CODE, GROUP_UIN, &mut info);

    let mut act = Vec::new();
    encode_string(system_msg_action::NAME, name, &mut act);
    encode_string(system_msg_action::RESULT, result, &mut act);
    encode_message(system_msg_action::INFO, &info, &mut act);
    encode_string(system_msg_action::DETAIL_NAME, name, &mut act);

    encode_message(system_msg::ACTIONS, &act, buf);
}

/// A group system message as pushed for a join request, with the full set of
/// admin-action descriptors the server offers.
pub fn join_request_packet(sub_type: u64, message: &str) -> Vec<u8> {
    let mut payload = Vec::new();
    encode_uint(system_msg::SUB_TYPE, sub_type, &mut payload);
    encode_string(system_msg::TITLE, "加群申请", &mut payload);
    encode_string(system_msg::DESCRIBE, "申请加入 %group_name%", &mut payload);
    encode_string(system_msg::ADDITIONAL, message, &mut payload);
    encode_uint(system_msg::SRC_ID, 1, &mut payload);
    encode_uint(system_msg::SUB_SRC_ID, 5, &mut payload);
    action("拒绝", "已拒绝", system_msg_action_info::TYPE_REJECT, &mut payload);
    action("同意", "已同意", system_msg_action_info::TYPE_APPROVE, &mut payload);
    action("忽略", "已忽略", system_msg_action_info::TYPE_IGNORE, &mut payload);
    encode_uint(system_msg::GROUP_CODE, GROUP_UIN, &mut payload);
    encode_uint(system_msg::GROUP_MSG_TYPE, 1, &mut payload);
    encode_uint(system_msg::GROUP_FLAG_EXT3, 128, &mut payload);
    encode_uint(system_msg::REQ_UIN_FACE_ID, 7425, &mut payload);
    encode_string(system_msg::REQ_UIN_NICK, "user1", &mut payload);
    encode_string(system_msg::GROUP_NAME, GROUP_NAME, &mut payload);
    encode_uint(system_msg::GROUP_EXT_FLAG, 1075905600, &mut payload);

    let mut packet = Vec::new();
    encode_uint(struct_msg::VERSION, 1, &mut packet);
    encode_uint(struct_msg::MSG_TYPE, 2, &mut packet);
    encode_uint(struct_msg::MSG_SEQ, 16300, &mut packet);
    encode_uint(struct_msg::MSG_TIME, 1630, &mut packet);
    encode_uint(struct_msg::REQ_UIN, REQUESTER_UIN, &mut packet);
    encode_message(struct_msg::SYSTEM_MSG, &payload, &mut packet);
    packet
}

/// A common message container carrying a membership blob, as pushed for
/// member-increase (33) and member-decrease (34) notices.
pub fn membership_packet(msg_type: u64, content: &[u8]) -> Vec<u8> {
    let mut key_info = Vec::new();
    encode_uint(ext_group_key_info::CUR_MAX_SEQ, 1628, &mut key_info);
    encode_uint(ext_group_key_info::CUR_TIME, 1630, &mut key_info);

    let mut head = Vec::new();
    encode_uint(msg_head::FROM_UIN, GROUP_UIN, &mut head);
    encode_uint(msg_head::TO_UIN, BOT_UIN, &mut head);
    encode_uint(msg_head::MSG_TYPE, msg_type, &mut head);
    encode_uint(msg_head::MSG_SEQ, 45, &mut head);
    encode_uint(msg_head::MSG_TIME, 16, &mut head);
    encode_uint(msg_head::MSG_UID, 1441, &mut head);
    encode_uint(msg_head::AUTH_UIN, REQUESTER_UIN, &mut head);
    encode_string(msg_head::AUTH_NICK, "user1", &mut head);
    encode_message(msg_head::EXT_GROUP_KEY_INFO, &key_info, &mut head);

    let mut body = Vec::new();
    encode_message(msg_body::RICH_TEXT, &[], &mut body);
    encode_bytes(msg_body::MSG_CONTENT, content, &mut body);

    let mut packet = Vec::new();
    encode_message(msg::HEAD, &head, &mut packet);
    encode_message(msg::CONTENT_HEAD, &[], &mut packet);
    encode_message(msg::BODY, &body, &mut packet);
    packet
}
