pub mod events;
pub mod models;

pub use events::NoticeEvent;
pub use models::{Group, Member, Permission};
