// Typewriter effect: reveals one candidate string a character at a time and,
// when looping, erases it again before moving on to the next candidate.

use super::constants::{DELETING_SPEED_MS, PAUSE_DURATION_MS, TYPING_SPEED_MS};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    /// Hold time at full length before deleting starts (looping only).
    pub pause: Duration,
    pub looping: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(TYPING_SPEED_MS),
            deleting_speed: Duration::from_millis(DELETING_SPEED_MS),
            pause: Duration::from_millis(PAUSE_DURATION_MS),
            looping: false,
        }
    }
}

impl TypingConfig {
    pub fn looping() -> Self {
        Self {
            looping: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypingSession {
    texts: Vec<String>,
    index: usize,
    /// Revealed length in chars, always <= current text's char count.
    revealed: usize,
    mode: Mode,
    /// Fully typed and waiting out the pause before the first deletion.
    holding: bool,
    config: TypingConfig,
}

impl TypingSession {
    pub fn new<I, S>(texts: I, config: TypingConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: collect_texts(texts),
            index: 0,
            revealed: 0,
            mode: Mode::Typing,
            holding: false,
            config,
        }
    }

    pub fn single(text: impl Into<String>, config: TypingConfig) -> Self {
        Self::new([text.into()], config)
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_text(&self) -> &str {
        &self.texts[self.index]
    }

    /// The prefix of the current text that is shown.
    pub fn revealed(&self) -> &str {
        let text = self.current_text();
        let end = text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        &text[..end]
    }

    /// Fully typed and not looping: no further ticks change anything.
    pub fn is_finished(&self) -> bool {
        !self.config.looping && self.mode == Mode::Typing && self.revealed >= self.current_len()
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Delay before the next tick when (re)arming from scratch. Honors a
    /// pause that is still in progress.
    pub fn initial_delay(&self) -> Duration {
        self.delay_for_mode()
    }

    /// Apply one transition and return the delay until the next one, or
    /// `None` once the session has reached its terminal state.
    pub fn tick(&mut self) -> Option<Duration> {
        match self.mode {
            Mode::Deleting => {
                self.holding = false;
                if self.revealed > 0 {
                    self.revealed -= 1;
                } else {
                    self.mode = Mode::Typing;
                    if self.config.looping {
                        self.index = (self.index + 1) % self.texts.len();
                    }
                }
                Some(self.delay_for_mode())
            }
            Mode::Typing => {
                if self.revealed < self.current_len() {
                    self.revealed += 1;
                    Some(self.config.typing_speed)
                } else if self.config.looping {
                    self.mode = Mode::Deleting;
                    self.holding = true;
                    Some(self.config.pause)
                } else {
                    None
                }
            }
        }
    }

    /// Swap timing/loop settings without losing progress.
    pub fn set_config(&mut self, config: TypingConfig) {
        self.config = config;
    }

    /// Swap the candidate list, keeping index and progress where they still fit.
    pub fn set_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.texts = collect_texts(texts);
        self.index %= self.texts.len();
        self.revealed = self.revealed.min(self.current_len());
    }

    fn current_len(&self) -> usize {
        self.current_text().chars().count()
    }

    fn delay_for_mode(&self) -> Duration {
        if self.holding {
            return self.config.pause;
        }
        match self.mode {
            Mode::Typing => self.config.typing_speed,
            Mode::Deleting => self.config.deleting_speed,
        }
    }
}

fn collect_texts<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut texts: Vec<String> = texts.into_iter().map(Into::into).collect();
    if texts.is_empty() {
        texts.push(String::new());
    }
    texts
}
