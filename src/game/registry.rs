//! Running sessions, at most one per chat

use super::Session;
use crate::frontend::ChatId;
use rustc_hash::FxHashMap;

/// Active sessions keyed by chat
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: FxHashMap<ChatId, Session>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, chat: ChatId) -> bool {
        self.sessions.contains_key(&chat)
    }

    #[must_use]
    pub fn get(&self, chat: ChatId) -> Option<&Session> {
        self.sessions.get(&chat)
    }

    pub fn get_mut(&mut self, chat: ChatId) -> Option<&mut Session> {
        self.sessions.get_mut(&chat)
    }

    /// Register a session, replacing any previous one for the same chat
    pub fn insert(&mut self, session: Session) -> Option<Session> {
        self.sessions.insert(session.chat(), session)
    }

    pub fn remove(&mut self, chat: ChatId) -> Option<Session> {
        self.sessions.remove(&chat)
    }

    /// Remove the session of `chat` if it is finished
    pub fn release_finished(&mut self, chat: ChatId) -> Option<Session> {
        if self.sessions.get(&chat).is_some_and(Session::is_finished) {
            self.sessions.remove(&chat)
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::frontend::MemoryMessenger;
    use crate::game::{GameMode, Guess};
    use crate::language::fixtures;
    use std::sync::Arc;

    #[tokio::test]
    async fn only_finished_sessions_are_released() {
        let messenger = MemoryMessenger::new();
        let mut session = Session::new(
            ChatId(3),
            GameMode::RandomWord,
            Arc::new(fixtures::english()),
            6,
        );
        session
            .start_with(Word::new("amigo"), &messenger)
            .await
            .unwrap();

        let mut registry = SessionRegistry::new();
        assert!(registry.insert(session).is_none());
        assert!(registry.release_finished(ChatId(3)).is_none());
        assert!(registry.contains(ChatId(3)));

        let guess = Guess {
            message: messenger.allocate_ref(),
            text: "amigo".into(),
            author: "ana".into(),
        };
        registry
            .get_mut(ChatId(3))
            .unwrap()
            .process(&guess, &messenger)
            .await
            .unwrap();

        assert!(registry.release_finished(ChatId(3)).is_some());
        assert!(registry.is_empty());
    }
}
