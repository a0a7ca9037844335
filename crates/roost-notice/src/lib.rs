/// roost-notice: server-pushed notice processing.
///
/// Turns raw notice packets into finalized domain events while keeping the
/// per-session group/member cache consistent:
///
/// ```text
/// bytes → Envelope → dispatch registry → typed decoder → DraftEvent
///       → StateCache::apply → NoticeEvent(s), in arrival order
/// ```
///
/// Decoding is pure and shares nothing; all cache mutation for one bot
/// session happens under a single logical writer (`BotSession`). Every
/// failure mode short of a truncated required field degrades to "fewer
/// events", never a crash: unknown type codes, unknown groups and duplicate
/// deliveries are consumed with zero events.

pub mod cache;
pub mod draft;
pub mod group_change;
pub mod header;
pub mod join_request;
pub mod pipeline;
pub mod registry;
pub mod schema;

pub use cache::StateCache;
pub use draft::DraftEvent;
pub use header::NoticeHeader;
pub use pipeline::{BotSession, NoticeProcessor};
pub use registry::{DecoderRegistry, DispatchKey, EnvelopeKind};
pub use roost_wire::DecodeError;
