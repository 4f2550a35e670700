use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ParticipantId;

/// Простая генерация ID на основе монотонных счётчиков.
/// Участникам id выдаются по порядку, начиная с 1.
#[derive(Debug)]
pub struct IdGenerator {
    participant_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор, начинающий с 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            participant_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_participant_id(&self) -> ParticipantId {
        self.participant_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
