use std::time::Duration;

/// Which phase of the typewriter loop is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Delays between ticks, one per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(120),
            delete_delay: Duration::from_millis(75),
            hold_delay: Duration::from_millis(3000),
        }
    }
}

/// Typewriter state machine: types a phrase out character by character,
/// holds it, deletes it, then advances to the next phrase (wrapping),
/// forever.
///
/// This is pure state - the owning component is responsible for calling
/// [`TextCycler::tick`] after each [`TextCycler::delay`] and for clearing
/// any pending timer on unmount. At most one timer should ever be
/// outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCycler {
    phrases: Vec<String>,
    timing: Timing,
    active: usize,
    cursor: usize,
    phase: Phase,
}

impl TextCycler {
    /// Returns `None` for an empty phrase list - callers render nothing and
    /// schedule nothing in that case.
    pub fn new(phrases: Vec<String>, timing: Timing) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            timing,
            active: 0,
            cursor: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of characters currently revealed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn active_phrase(&self) -> &str {
        &self.phrases[self.active]
    }

    fn active_len(&self) -> usize {
        self.active_phrase().chars().count()
    }

    /// The revealed prefix of the active phrase. Indexed by characters, not
    /// bytes, so phrases with accents reveal cleanly.
    pub fn visible(&self) -> &str {
        let phrase = self.active_phrase();
        match phrase.char_indices().nth(self.cursor) {
            Some((i, _)) => &phrase[..i],
            None => phrase,
        }
    }

    /// How long to wait before the next call to [`TextCycler::tick`].
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_delay,
            Phase::Holding => self.timing.hold_delay,
            Phase::Deleting => self.timing.delete_delay,
        }
    }

    /// Advance the state machine by exactly one step.
    ///
    /// Typing reveals one character until the phrase is complete, then moves
    /// to Holding. Holding expires into Deleting. Deleting removes one
    /// character until none remain, then wraps to the next phrase and starts
    /// Typing again.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.cursor < self.active_len() {
                    self.cursor += 1;
                } else {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                } else {
                    self.active = (self.active + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(phrases: &[&str]) -> TextCycler {
        TextCycler::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            Timing::default(),
        )
        .expect("non-empty phrase list")
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert!(TextCycler::new(Vec::new(), Timing::default()).is_none());
    }

    #[test]
    fn types_out_phrase_one_character_per_tick() {
        let mut c = cycler(&["hey"]);
        assert_eq!(c.visible(), "");
        c.tick();
        assert_eq!(c.visible(), "h");
        c.tick();
        assert_eq!(c.visible(), "he");
        c.tick();
        assert_eq!(c.visible(), "hey");
        assert_eq!(c.phase(), Phase::Typing);
        // Completed phrase: next tick transitions to Holding without
        // changing the text.
        c.tick();
        assert_eq!(c.phase(), Phase::Holding);
        assert_eq!(c.visible(), "hey");
    }

    #[test]
    fn holding_expires_into_deleting() {
        let mut c = cycler(&["ab"]);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.phase(), Phase::Holding);
        c.tick();
        assert_eq!(c.phase(), Phase::Deleting);
        c.tick();
        assert_eq!(c.visible(), "a");
        c.tick();
        assert_eq!(c.visible(), "");
    }

    #[test]
    fn full_cycle_advances_active_index_by_one() {
        let mut c = cycler(&["ab", "xyz"]);
        // Typing len+1 ticks (incl. transition), 1 hold expiry, len deletes,
        // 1 wrap tick.
        for _ in 0..(2 * 2 + 3) {
            c.tick();
        }
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.phase(), Phase::Typing);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn single_phrase_wraps_back_to_itself() {
        let mut c = cycler(&["hola"]);
        for _ in 0..(2 * 4 + 3) {
            c.tick();
        }
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.phase(), Phase::Typing);
    }

    #[test]
    fn cursor_stays_in_bounds_forever() {
        let phrases = ["Hola, soy Mario", "hi"];
        let mut c = cycler(&phrases);
        for _ in 0..500 {
            c.tick();
            let active_len = phrases[c.active_index()].chars().count();
            assert!(c.cursor() <= active_len);
            assert_eq!(c.visible().chars().count(), c.cursor());
        }
    }

    #[test]
    fn accented_phrases_reveal_on_char_boundaries() {
        let mut c = cycler(&["más"]);
        c.tick();
        assert_eq!(c.visible(), "m");
        c.tick();
        assert_eq!(c.visible(), "má");
        c.tick();
        assert_eq!(c.visible(), "más");
    }

    #[test]
    fn delay_follows_phase() {
        let timing = Timing::default();
        let mut c = cycler(&["ab"]);
        assert_eq!(c.delay(), timing.type_delay);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.delay(), timing.hold_delay);
        c.tick();
        assert_eq!(c.delay(), timing.delete_delay);
    }
}
