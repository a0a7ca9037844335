use std::collections::hash_map::Entry;
use std::collections::HashMap;

use roost_types::{Group, Member, NoticeEvent, Permission};

use crate::draft::DraftEvent;

/// One bot session's mirror of the groups and members the server has told it
/// about. All mutation goes through `apply`; subscribers read it through the
/// session's accessors and never write.
#[derive(Debug, Clone)]
pub struct StateCache {
    bot_uin: u64,
    groups: HashMap<u64, Group>,
}

impl StateCache {
    pub fn new(bot_uin: u64) -> StateCache {
        StateCache { bot_uin, groups: HashMap::new() }
    }

    pub fn bot_uin(&self) -> u64 {
        self.bot_uin
    }

    /// Record a group the session has learned of, returning it for member
    /// setup. Replaces any previous record with the same uin.
    pub fn add_group(
        &mut self,
        uin: u64,
        owner_uin: u64,
        name: impl Into<String>,
        bot_permission: Permission,
    ) -> &mut Group {
        let group = Group::new(uin, owner_uin, name, bot_permission);
        match self.groups.entry(uin) {
            Entry::Occupied(mut entry) => {
                entry.insert(group);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(group),
        }
    }

    /// Forget a group the bot has left or lost.
    pub fn remove_group(&mut self, uin: u64) -> Option<Group> {
        self.groups.remove(&uin)
    }

    pub fn group(&self, uin: u64) -> Option<&Group> {
        self.groups.get(&uin)
    }

    pub fn group_mut(&mut self, uin: u64) -> Option<&mut Group> {
        self.groups.get_mut(&uin)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Cross-check a draft against the cache, mutate, and finalize.
    ///
    /// `None` means the draft was consumed without an event: the group is
    /// unknown (stale or out-of-order notice), or the cache already reflects
    /// the change (duplicate delivery). Insertion plus emission happen in one
    /// call, so a finalized join always corresponds to exactly one insertion.
    pub fn apply(&mut self, draft: DraftEvent) -> Option<NoticeEvent> {
        let group_uin = draft.group_uin();
        let Some(group) = self.groups.get_mut(&group_uin) else {
            tracing::debug!(group_uin, ?draft, "notice for unknown group dropped");
            return None;
        };

        match draft {
            // A request is not membership: nothing to mutate, always
            // finalized once the group is known.
            DraftEvent::JoinRequest { seq, from_uin, from_nick, group_uin, group_name, message } => {
                Some(NoticeEvent::MemberJoinRequest {
                    seq,
                    from_uin,
                    from_nick,
                    group_uin,
                    group_name,
                    message,
                })
            }

            DraftEvent::JoinActive { group_uin, target_uin, target_nick, operator_uin: _ } => {
                if group.members.contains_key(&target_uin) {
                    tracing::debug!(group_uin, target_uin, "member already present, duplicate join skipped");
                    return None;
                }
                // A join notice never grants more than the default role.
                let member = group.add_member(target_uin, target_nick, Permission::Member).clone();
                Some(NoticeEvent::MemberJoinActive { group_uin, member })
            }

            DraftEvent::Leave { group_uin, target_uin, operator_uin } => {
                let Some(member) = group.members.remove(&target_uin) else {
                    tracing::debug!(group_uin, target_uin, "member already absent, duplicate leave skipped");
                    return None;
                };
                Some(NoticeEvent::MemberLeave { group_uin, member, operator_uin })
            }
        }
    }
}
