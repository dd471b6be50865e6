//! Named participant with a running score.

use super::types::Mark;
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// A named player holding one mark for its whole lifetime.
///
/// The name and mark never change; renaming means building a new player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark this player places.
    mark: Mark,
    /// Rounds won.
    #[new(value = "0")]
    score: u32,
}

impl Player {
    /// Awards one point.
    #[instrument(skip(self), fields(name = %self.name, mark = %self.mark))]
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Sets the score back to zero.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
