use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-member role within a group, ordered `Member < Administrator < Owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Permission {
    #[default]
    Member,
    Administrator,
    Owner,
}

impl Permission {
    /// Whether this role may act on join requests and remove members.
    pub fn is_operator(self) -> bool {
        self >= Permission::Administrator
    }
}

/// A member of one group. Holds only the owning group's uin as a
/// back-reference — never a pointer into `Group` — so the cache stays
/// an acyclic tree resolved by id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub uin: u64,
    pub group_uin: u64,
    pub nick: String,
    pub permission: Permission,
}

/// A group the bot's session knows about. Exclusively owns its member map;
/// at most one member per uin, and the mutator never inserts a second Owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub uin: u64,
    pub name: String,
    pub owner_uin: u64,
    /// The bot's own role in this group.
    pub bot_permission: Permission,
    /// Group setting: anyone may join without an admin decision.
    pub allow_anyone_join: bool,
    pub members: HashMap<u64, Member>,
}

impl Group {
    pub fn new(uin: u64, owner_uin: u64, name: impl Into<String>, bot_permission: Permission) -> Self {
        Self {
            uin,
            name: name.into(),
            owner_uin,
            bot_permission,
            allow_anyone_join: false,
            members: HashMap::new(),
        }
    }

    /// Insert a member record, replacing any previous one with the same uin.
    pub fn add_member(&mut self, uin: u64, nick: impl Into<String>, permission: Permission) -> &mut Member {
        let member = Member {
            uin,
            group_uin: self.uin,
            nick: nick.into(),
            permission,
        };
        match self.members.entry(uin) {
            Entry::Occupied(mut entry) => {
                entry.insert(member);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(member),
        }
    }

    pub fn member(&self, uin: u64) -> Option<&Member> {
        self.members.get(&uin)
    }
}
