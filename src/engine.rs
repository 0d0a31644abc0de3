//! Turn driver: one incoming text in, the bot's replies out.

use crate::config::EngineConfig;
use crate::conversation::{BotState, ChatContext, Reply, StateError, Turn};
use crate::random::{GameRng, RandomSource};
use crate::session::{ConversationId, ConversationTable};
use tracing::{debug, info, instrument};

/// The conversational game engine.
///
/// Holds every conversation and the random source behind computer moves.
/// Turns run to completion synchronously.
#[derive(Debug)]
pub struct Lowdie<R = GameRng> {
    conversations: ConversationTable,
    rng: R,
    config: EngineConfig,
}

impl Lowdie<GameRng> {
    /// Creates an engine seeded from `config`, or from entropy when it has no seed.
    #[instrument(skip(config))]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed().map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), "Creating engine");
        Self::with_rng(config, rng)
    }
}

impl Default for Lowdie<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> Lowdie<R> {
    /// Creates an engine around an explicit random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            conversations: ConversationTable::new(),
            rng,
            config,
        }
    }

    /// Handles one message from `conversation_id` and returns the replies.
    ///
    /// The first message of a conversation (or the restart command) only
    /// produces the greeting. Otherwise the current state consumes the
    /// trimmed text, the next state's lines are produced, and the last line
    /// carries the input hint. The invalid state is never stored, so the
    /// next message retries the state that rejected this one.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] when a state finds the conversation's game
    /// data inconsistent while producing its lines.
    #[instrument(skip(self))]
    pub fn answer(
        &mut self,
        conversation_id: ConversationId,
        raw_text: &str,
    ) -> Result<Vec<Reply>, StateError> {
        let text = raw_text.trim();
        let mut turn = Turn::new(
            &mut self.rng,
            *self.config.board_encoding(),
            *self.config.code_fence(),
        );

        let restart = text == self.config.restart_command();
        let (context, created) = self.conversations.open(conversation_id);
        let next = if created || restart {
            if restart && !created {
                info!(conversation_id, "Restarting conversation");
                *context = ChatContext::new();
            }
            BotState::START_CONVERSATION
        } else {
            let current = *context.key();
            match current.on_user_answer(context, text, &mut turn) {
                Some(next) => next,
                None => {
                    debug!(state = %current, "No next state; ending turn silently");
                    return Ok(Vec::new());
                }
            }
        };

        let mut texts = next.texts(context, &mut turn)?;
        let question = next.on_user_question(context);
        if next != BotState::INVALID {
            context.set_key(next);
        }
        debug!(state = %next, lines = texts.len(), "Turn complete");

        let Some(last) = texts.pop() else {
            return Ok(Vec::new());
        };
        let mut replies: Vec<Reply> = texts.into_iter().map(Reply::bare).collect();
        replies.push(Reply::closing(last, question));
        Ok(replies)
    }

    /// The context of a conversation, if it has started.
    pub fn context(&self, conversation_id: ConversationId) -> Option<&ChatContext> {
        self.conversations.get(conversation_id)
    }

    /// The state a conversation is waiting in, if it has started.
    pub fn state(&self, conversation_id: ConversationId) -> Option<BotState> {
        self.context(conversation_id).map(|c| *c.key())
    }

    /// All conversations.
    pub fn conversations(&self) -> &ConversationTable {
        &self.conversations
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
