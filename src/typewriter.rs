use std::time::Duration;

use crate::timing::{step, Timed, Timestamp};

/// Byte offset of the first `chars` characters of `s`.
fn char_prefix(s: &str, chars: usize) -> &str {
    let end = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    &s[..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub text: String,
    /// Wait before the reveal starts.
    pub delay: Duration,
    /// Interval between characters.
    pub speed: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            delay: Duration::ZERO,
            speed: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterState {
    pub revealed: usize,
    pub complete: bool,
}

/// One-shot reveal of a string, one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    total: usize,
    revealed: usize,
    complete: bool,
    speed: Duration,
    next_at: Option<Timestamp>,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig, start: Timestamp) -> Self {
        let total = config.text.chars().count();
        let speed = step(config.speed);
        let first = if total == 0 {
            start + config.delay
        } else {
            start + config.delay + speed
        };
        Self {
            text: config.text,
            total,
            revealed: 0,
            complete: false,
            speed,
            next_at: Some(first),
        }
    }

    /// The currently revealed prefix.
    pub fn text(&self) -> &str {
        char_prefix(&self.text, self.revealed)
    }

    pub fn state(&self) -> TypewriterState {
        TypewriterState {
            revealed: self.revealed,
            complete: self.complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Timed for Typewriter {
    type Output = TypewriterState;

    fn next_deadline(&self) -> Option<Timestamp> {
        self.next_at
    }

    fn fire(&mut self, now: Timestamp) -> Option<TypewriterState> {
        let at = self.next_at?;
        if now < at {
            return None;
        }
        if self.revealed < self.total {
            self.revealed += 1;
        }
        if self.revealed == self.total {
            self.complete = true;
            self.next_at = None;
        } else {
            self.next_at = Some(at + self.speed);
        }
        Some(self.state())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclingConfig {
    /// Typed once before the words start rotating.
    pub prefix: String,
    pub words: Vec<String>,
    pub delay: Duration,
    pub prefix_speed: Duration,
    pub type_speed: Duration,
    pub delete_speed: Duration,
    /// How long a fully typed word stays on screen.
    pub dwell: Duration,
}

impl Default for CyclingConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            words: Vec::new(),
            delay: Duration::ZERO,
            prefix_speed: Duration::from_millis(100),
            type_speed: Duration::from_millis(150),
            delete_speed: Duration::from_millis(50),
            dwell: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Prefix,
    Typing,
    Holding,
    Deleting,
    Parked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclingState {
    pub prefix_revealed: usize,
    pub word_index: usize,
    pub char_count: usize,
    pub deleting: bool,
}

/// Types a static prefix, then types and deletes each word in turn, forever.
#[derive(Debug, Clone)]
pub struct CyclingTypewriter {
    prefix: String,
    prefix_total: usize,
    words: Vec<String>,
    prefix_speed: Duration,
    type_speed: Duration,
    delete_speed: Duration,
    dwell: Duration,
    prefix_revealed: usize,
    word_index: usize,
    char_count: usize,
    phase: Phase,
    next_at: Option<Timestamp>,
}

impl CyclingTypewriter {
    pub fn new(config: CyclingConfig, start: Timestamp) -> Self {
        Self {
            prefix_total: config.prefix.chars().count(),
            prefix: config.prefix,
            words: config.words,
            prefix_speed: step(config.prefix_speed),
            type_speed: step(config.type_speed),
            delete_speed: step(config.delete_speed),
            dwell: step(config.dwell),
            prefix_revealed: 0,
            word_index: 0,
            char_count: 0,
            phase: Phase::Waiting,
            next_at: Some(start + config.delay),
        }
    }

    pub fn prefix_text(&self) -> &str {
        char_prefix(&self.prefix, self.prefix_revealed)
    }

    pub fn word_text(&self) -> &str {
        self.words
            .get(self.word_index)
            .map_or("", |w| char_prefix(w, self.char_count))
    }

    pub fn state(&self) -> CyclingState {
        CyclingState {
            prefix_revealed: self.prefix_revealed,
            word_index: self.word_index,
            char_count: self.char_count,
            deleting: self.phase == Phase::Deleting,
        }
    }

    fn word_len(&self) -> usize {
        self.words
            .get(self.word_index)
            .map_or(0, |w| w.chars().count())
    }

    fn start_words(&mut self, at: Timestamp) {
        if self.words.is_empty() {
            self.phase = Phase::Parked;
            self.next_at = None;
        } else {
            self.phase = Phase::Typing;
            self.next_at = Some(at + self.type_speed);
        }
    }
}

impl Timed for CyclingTypewriter {
    type Output = CyclingState;

    fn next_deadline(&self) -> Option<Timestamp> {
        self.next_at
    }

    fn fire(&mut self, now: Timestamp) -> Option<CyclingState> {
        let at = self.next_at?;
        if now < at {
            return None;
        }
        match self.phase {
            Phase::Waiting => {
                if self.prefix_total == 0 {
                    self.start_words(at);
                } else {
                    self.phase = Phase::Prefix;
                    self.next_at = Some(at + self.prefix_speed);
                }
            }
            Phase::Prefix => {
                self.prefix_revealed += 1;
                if self.prefix_revealed >= self.prefix_total {
                    self.start_words(at);
                } else {
                    self.next_at = Some(at + self.prefix_speed);
                }
            }
            Phase::Typing => {
                let len = self.word_len();
                if self.char_count < len {
                    self.char_count += 1;
                }
                if self.char_count >= len {
                    self.phase = Phase::Holding;
                    self.next_at = Some(at + self.dwell);
                } else {
                    self.next_at = Some(at + self.type_speed);
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.next_at = Some(at + self.delete_speed);
            }
            Phase::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.next_at = Some(at + self.type_speed);
                } else {
                    self.next_at = Some(at + self.delete_speed);
                }
            }
            Phase::Parked => {
                self.next_at = None;
                return None;
            }
        }
        Some(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::drain_until;

    fn ms(v: u64) -> Timestamp {
        Timestamp::from_millis(v)
    }

    fn writer(text: &str, delay: u64, speed: u64) -> Typewriter {
        Typewriter::new(
            TypewriterConfig {
                text: text.to_string(),
                delay: Duration::from_millis(delay),
                speed: Duration::from_millis(speed),
            },
            Timestamp::ZERO,
        )
    }

    #[test]
    fn test_typewriter_reveals_one_char_per_tick() {
        let mut tw = writer("Hey, I am", 800, 100);
        assert_eq!(tw.text(), "");
        // nothing before delay + first interval
        assert!(tw.fire(ms(850)).is_none());

        let steps = drain_until(&mut tw, ms(10_000));
        assert_eq!(steps.len(), 9);

        let mut last = 0;
        for (i, (at, st)) in steps.iter().enumerate() {
            assert_eq!(at.as_millis(), 800 + 100 * (i as u64 + 1));
            assert!(st.revealed > last);
            last = st.revealed;
            // completion only on the final tick
            assert_eq!(st.complete, i == 8);
        }
        assert_eq!(tw.text(), "Hey, I am");
        assert!(tw.is_complete());
        assert_eq!(tw.next_deadline(), None);
    }

    #[test]
    fn test_typewriter_completion_fires_once() {
        let mut tw = writer("ab", 0, 10);
        let steps = drain_until(&mut tw, ms(100));
        let completions = steps.iter().filter(|(_, s)| s.complete).count();
        assert_eq!(completions, 1);
        // further firing is inert
        assert!(tw.fire(ms(1_000)).is_none());
        assert!(drain_until(&mut tw, ms(5_000)).is_empty());
    }

    #[test]
    fn test_typewriter_counts_characters_not_bytes() {
        let mut tw = writer("héllo✨", 0, 10);
        drain_until(&mut tw, ms(20));
        assert_eq!(tw.text(), "hé");
        drain_until(&mut tw, ms(60));
        assert_eq!(tw.text(), "héllo✨");
        assert!(tw.is_complete());
    }

    #[test]
    fn test_typewriter_empty_text_completes_after_delay() {
        let mut tw = writer("", 200, 100);
        assert_eq!(tw.next_deadline(), Some(ms(200)));
        let steps = drain_until(&mut tw, ms(200));
        assert_eq!(
            steps,
            vec![(
                ms(200),
                TypewriterState {
                    revealed: 0,
                    complete: true
                }
            )]
        );
    }

    fn cycler(words: &[&str]) -> CyclingTypewriter {
        CyclingTypewriter::new(
            CyclingConfig {
                prefix: "I am a ".to_string(),
                words: words.iter().map(|w| w.to_string()).collect(),
                delay: Duration::from_millis(500),
                ..Default::default()
            },
            Timestamp::ZERO,
        )
    }

    #[test]
    fn test_cycling_types_prefix_then_word() {
        let mut ct = cycler(&["dev.", "student."]);
        // 500 delay + 7 prefix chars at 100ms
        drain_until(&mut ct, ms(1_200));
        assert_eq!(ct.prefix_text(), "I am a ");
        assert_eq!(ct.word_text(), "");

        // four chars of "dev." at 150ms each
        drain_until(&mut ct, ms(1_800));
        assert_eq!(ct.word_text(), "dev.");
        assert!(!ct.state().deleting);

        // holds for the dwell time
        drain_until(&mut ct, ms(3_799));
        assert_eq!(ct.word_text(), "dev.");
        assert!(!ct.state().deleting);
        drain_until(&mut ct, ms(3_800));
        assert!(ct.state().deleting);

        // deletes at 50ms per char, then moves to the next word
        drain_until(&mut ct, ms(3_850));
        assert_eq!(ct.word_text(), "dev");
        drain_until(&mut ct, ms(4_000));
        assert_eq!(ct.word_text(), "");
        assert_eq!(ct.state().word_index, 1);
        assert!(!ct.state().deleting);
        assert_eq!(ct.prefix_text(), "I am a ");
    }

    #[test]
    fn test_cycling_wraps_word_index() {
        let mut ct = cycler(&["a", "b"]);
        let mut seen = Vec::new();
        for (_, st) in drain_until(&mut ct, ms(20_000)) {
            if seen.last() != Some(&st.word_index) {
                seen.push(st.word_index);
            }
        }
        assert!(seen.starts_with(&[0, 1, 0, 1]));
    }

    #[test]
    fn test_cycling_empty_words_parks_after_prefix() {
        let mut ct = cycler(&[]);
        drain_until(&mut ct, ms(5_000));
        assert_eq!(ct.prefix_text(), "I am a ");
        assert_eq!(ct.next_deadline(), None);
        let before = ct.state();
        assert!(ct.fire(ms(60_000)).is_none());
        assert_eq!(ct.state(), before);
        assert_eq!(ct.word_text(), "");
    }

    #[test]
    fn test_cycling_zero_speeds_still_progress() {
        let mut ct = CyclingTypewriter::new(
            CyclingConfig {
                prefix: String::new(),
                words: vec!["x".to_string()],
                prefix_speed: Duration::ZERO,
                type_speed: Duration::ZERO,
                delete_speed: Duration::ZERO,
                dwell: Duration::ZERO,
                ..Default::default()
            },
            Timestamp::ZERO,
        );
        // clamped to 1ms steps, so draining a finite window terminates
        let steps = drain_until(&mut ct, ms(10));
        assert!(!steps.is_empty());
        assert!(steps.len() <= 11);
    }
}
