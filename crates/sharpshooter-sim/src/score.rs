//! Running score. Hits only ever go up; nothing is persisted.

use sharpshooter_core::state::ScoreView;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTracker {
    hits: u32,
    shots_fired: u32,
    misses: u32,
}

impl ScoreTracker {
    /// Count a confirmed hit and return the new score.
    pub fn on_hit(&mut self) -> u32 {
        self.hits += 1;
        self.hits
    }

    pub fn on_shot(&mut self) {
        self.shots_fired += 1;
    }

    pub fn on_miss(&mut self) {
        self.misses += 1;
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            hits: self.hits,
            shots_fired: self.shots_fired,
            misses: self.misses,
        }
    }
}
