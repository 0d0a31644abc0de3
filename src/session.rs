//! Conversation table keyed by conversation id.

use crate::conversation::ChatContext;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info, instrument};

/// Opaque identifier of one conversation (a chat id on most transports).
pub type ConversationId = i64;

/// Owns every conversation's context for the lifetime of the process.
///
/// Callers must not run two turns of the same conversation at once; the
/// table does no locking of its own.
#[derive(Debug, Clone, Default)]
pub struct ConversationTable {
    conversations: HashMap<ConversationId, ChatContext>,
}

impl ConversationTable {
    /// Creates an empty table.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating conversation table");
        Self::default()
    }

    /// Gets a conversation's context.
    #[instrument(skip(self))]
    pub fn get(&self, id: ConversationId) -> Option<&ChatContext> {
        let context = self.conversations.get(&id);
        if context.is_none() {
            debug!(conversation_id = id, "Conversation not found");
        }
        context
    }

    /// Gets a conversation's context, creating it on first contact.
    ///
    /// The flag is `true` when the context was just created.
    #[instrument(skip(self))]
    pub fn open(&mut self, id: ConversationId) -> (&mut ChatContext, bool) {
        match self.conversations.entry(id) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                info!(conversation_id = id, "Conversation created");
                (entry.insert(ChatContext::new()), true)
            }
        }
    }

    /// Lists all conversation ids, in no particular order.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<ConversationId> {
        let ids: Vec<_> = self.conversations.keys().copied().collect();
        debug!(count = ids.len(), "Listed conversations");
        ids
    }

    /// Number of known conversations.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// True when no conversation has started.
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
