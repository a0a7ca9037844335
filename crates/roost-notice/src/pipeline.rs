use std::sync::Mutex;

use roost_types::{Group, NoticeEvent};
use roost_wire::{DecodeError, Envelope};

use crate::cache::StateCache;
use crate::registry::{DecoderRegistry, DispatchKey, EnvelopeKind};
use crate::schema::{msg, msg_head, struct_msg, system_msg};

/// The decode side of the pipeline: envelope → dispatch → typed decoder.
/// Stateless apart from the read-only registry, so one processor can serve
/// any number of concurrent decode calls.
pub struct NoticeProcessor {
    registry: DecoderRegistry,
}

impl Default for NoticeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeProcessor {
    pub fn new() -> NoticeProcessor {
        NoticeProcessor { registry: DecoderRegistry::standard() }
    }

    /// Process one notice packet against a session cache, returning the
    /// finalized events in the order their drafts were produced.
    ///
    /// Zero, one or many events can come out of a single packet. A miss in
    /// the dispatch table consumes the packet with zero events; only a
    /// truncated or inconsistent required field is an error, and it aborts
    /// this packet alone.
    pub fn process(
        &self,
        cache: &mut StateCache,
        kind: EnvelopeKind,
        packet: &[u8],
    ) -> Result<Vec<NoticeEvent>, DecodeError> {
        let envelope = Envelope::decode(packet);
        let key = dispatch_key(kind, &envelope)?;

        let Some(decoder) = self.registry.resolve(key) else {
            tracing::debug!(?key, "no decoder registered, notice consumed");
            return Ok(Vec::new());
        };

        let drafts = decoder(&envelope)?;
        let mut events = Vec::with_capacity(drafts.len());
        for draft in drafts {
            if let Some(event) = cache.apply(draft) {
                events.push(event);
            }
        }
        Ok(events)
    }
}

/// Read the routing codes the dispatch table keys on.
fn dispatch_key(kind: EnvelopeKind, envelope: &Envelope) -> Result<DispatchKey, DecodeError> {
    match kind {
        EnvelopeKind::System => {
            let msg_type = envelope.require_uint(struct_msg::MSG_TYPE, "system msg type")?;
            let sub_type = envelope
                .embedded(struct_msg::SYSTEM_MSG)
                .and_then(|payload| payload.uint(system_msg::SUB_TYPE))
                .unwrap_or(0);
            Ok(DispatchKey::system(msg_type, sub_type))
        }
        EnvelopeKind::Common => {
            let head = envelope.require_embedded(msg::HEAD, "msg head")?;
            Ok(DispatchKey::common(head.require_uint(msg_head::MSG_TYPE, "msg type")?))
        }
    }
}

/// One logged-in bot's notice pipeline: the processor plus its session cache
/// behind a mutex, so the check-mutate-emit sequence for each packet is
/// atomic. Independent sessions own independent caches and never contend.
pub struct BotSession {
    processor: NoticeProcessor,
    cache: Mutex<StateCache>,
}

impl BotSession {
    /// Wrap a cache the transport layer initialized for the authenticated
    /// bot identity.
    pub fn new(cache: StateCache) -> BotSession {
        BotSession { processor: NoticeProcessor::new(), cache: Mutex::new(cache) }
    }

    pub fn bot_uin(&self) -> u64 {
        self.lock().bot_uin()
    }

    /// Process one packet under the session's single logical writer.
    pub fn process(&self, kind: EnvelopeKind, packet: &[u8]) -> Result<Vec<NoticeEvent>, DecodeError> {
        self.processor.process(&mut self.lock(), kind, packet)
    }

    /// Read-only access to the session cache for subscribers resolving ids.
    pub fn with_cache<T>(&self, read: impl FnOnce(&StateCache) -> T) -> T {
        read(&self.lock())
    }

    /// Snapshot one group's current state.
    pub fn group(&self, uin: u64) -> Option<Group> {
        self.lock().group(uin).cloned()
    }

    /// Seed or update session state; for the transport layer's sync paths,
    /// not for subscribers.
    pub fn update_cache<T>(&self, update: impl FnOnce(&mut StateCache) -> T) -> T {
        update(&mut self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StateCache> {
        // Cache mutation never panics mid-update; a poisoned lock still
        // holds a consistent cache.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
