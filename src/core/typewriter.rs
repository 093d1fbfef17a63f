//! Typewriter text cycling through `|`-separated phrases

use tracing::trace;

use super::config::TypewriterConfig;

/// Text to show now and how long to wait before the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    /// Number of characters currently shown
    shown: usize,
    deleting: bool,
    config: TypewriterConfig,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().filter(|p| !p.is_empty()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            config,
        })
    }

    /// Parse a `data-texts` attribute value.
    pub fn from_attribute(texts: &str, config: TypewriterConfig) -> Option<Self> {
        Self::new(texts.split('|').map(str::to_string).collect(), config)
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase]
    }

    pub fn tick(&mut self) -> TypewriterStep {
        let len = self.current_phrase().chars().count();

        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                trace!(phrase = self.phrase, "Typewriter moving to next phrase");
                self.config.next_ms
            } else {
                self.config.delete_ms
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                self.config.hold_ms
            } else {
                self.config.type_ms
            }
        };

        TypewriterStep {
            text: self.visible_text(),
            delay_ms,
        }
    }

    fn visible_text(&self) -> String {
        // After wrapping to the next phrase `shown` is 0, so this is empty.
        self.current_phrase().chars().take(self.shown).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(texts: &str) -> Typewriter {
        Typewriter::from_attribute(texts, TypewriterConfig::default()).expect("phrases")
    }

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut tw = writer("ab|c");

        assert_eq!(tw.tick(), TypewriterStep { text: "a".into(), delay_ms: 90 });
        assert_eq!(tw.tick(), TypewriterStep { text: "ab".into(), delay_ms: 2000 });
        assert_eq!(tw.tick(), TypewriterStep { text: "a".into(), delay_ms: 60 });
        assert_eq!(tw.tick(), TypewriterStep { text: "".into(), delay_ms: 500 });
        assert_eq!(tw.current_phrase(), "c");
        assert_eq!(tw.tick(), TypewriterStep { text: "c".into(), delay_ms: 2000 });
        assert_eq!(tw.tick(), TypewriterStep { text: "".into(), delay_ms: 500 });
        // Wrapped back to the first phrase
        assert_eq!(tw.current_phrase(), "ab");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = writer("héllo");
        assert_eq!(tw.tick().text, "h");
        assert_eq!(tw.tick().text, "hé");
        assert_eq!(tw.tick().text, "hél");
    }

    #[test]
    fn test_empty_phrases_disable() {
        assert!(Typewriter::from_attribute("", TypewriterConfig::default()).is_none());
        assert!(Typewriter::from_attribute("||", TypewriterConfig::default()).is_none());
        let tw = writer("|x|");
        assert_eq!(tw.current_phrase(), "x");
    }
}
