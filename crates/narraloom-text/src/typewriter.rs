//! Typewriter reveal state.
//!
//! [`Typewriter`] turns elapsed frame time into the visible-character budget
//! of a [`LayoutRequest`](crate::LayoutRequest). It owns no clock; the caller
//! passes the frame delta.

/// Reveal speed settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterConfig {
    /// Seconds between two revealed characters.
    pub seconds_per_char: f64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            seconds_per_char: 0.03,
        }
    }
}

impl TypewriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal `rate` characters per second.
    pub fn with_chars_per_second(mut self, rate: f64) -> Self {
        self.seconds_per_char = 1.0 / rate;
        self
    }

    pub fn with_seconds_per_char(mut self, seconds: f64) -> Self {
        self.seconds_per_char = seconds;
        self
    }
}

/// Progressive reveal of a text of known length.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    config: TypewriterConfig,
    total: usize,
    revealed: usize,
    elapsed: f64,
}

impl Typewriter {
    /// Start revealing a text of `total_chars` characters from nothing.
    pub fn new(total_chars: usize, config: TypewriterConfig) -> Self {
        Self {
            config,
            total: total_chars,
            revealed: 0,
            elapsed: 0.0,
        }
    }

    /// Typewriter for `text`, counted in `char`s.
    pub fn for_text(text: &str, config: TypewriterConfig) -> Self {
        Self::new(text.chars().count(), config)
    }

    /// Advance by `delta` seconds. Returns how many characters were revealed.
    ///
    /// Leftover time carries into the next call, so the reveal speed does
    /// not depend on the frame rate.
    pub fn update(&mut self, delta: f64) -> usize {
        if self.is_finished() {
            return 0;
        }
        if self.config.seconds_per_char <= 0.0 {
            return self.skip();
        }

        self.elapsed += delta.max(0.0);
        let steps = (self.elapsed / self.config.seconds_per_char).floor();
        let revealed = (steps as usize).min(self.total - self.revealed);
        self.elapsed -= revealed as f64 * self.config.seconds_per_char;
        self.revealed += revealed;

        if self.is_finished() {
            self.elapsed = 0.0;
            tracing::trace!("Typewriter finished ({} chars)", self.total);
        }
        revealed
    }

    /// Reveal everything at once. Returns how many characters were revealed.
    pub fn skip(&mut self) -> usize {
        let revealed = self.total - self.revealed;
        self.revealed = self.total;
        self.elapsed = 0.0;
        revealed
    }

    /// Restart with a new text length.
    pub fn reset(&mut self, total_chars: usize) {
        self.total = total_chars;
        self.revealed = 0;
        self.elapsed = 0.0;
    }

    /// Visible-character budget for the next layout.
    pub fn visible_chars(&self) -> usize {
        self.revealed
    }

    pub fn total_chars(&self) -> usize {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }
}
