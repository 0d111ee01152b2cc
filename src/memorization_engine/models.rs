use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Content primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub arabic: String,
    pub english: String,
}

impl Word {
    pub fn new(arabic: impl Into<String>, english: impl Into<String>) -> Self {
        Word { arabic: arabic.into(), english: english.into() }
    }

    /// Surface form shown for the given display format.
    pub fn text(&self, format: DisplayFormat) -> &str {
        match format {
            DisplayFormat::Arabic  => &self.arabic,
            DisplayFormat::English => &self.english,
        }
    }
}

/// One verse. `words` is never empty for validated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    pub id: u32,
    pub arabic: String,
    pub english: String,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub id: String,
    pub name: String,
    pub name_arabic: String,
    pub number_of_ayahs: usize,
    pub ayahs: Vec<Ayah>,
}

impl fmt::Display for Surah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.id, self.name, self.name_arabic)
    }
}

// ---------------------------------------------------------------------------
// Externally configured parameters
// ---------------------------------------------------------------------------

/// Fraction of words blanked, in tenths: 0 = none, 10 = every word.
///
/// Values above 10 are clamped on construction and on deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(0);
    pub const MAX: Difficulty = Difficulty(10);

    pub fn new(level: u8) -> Self {
        Difficulty(level.min(Self::MAX.0))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// One step harder, saturating at [`Difficulty::MAX`].
    pub fn next(self) -> Self {
        Difficulty::new(self.0.saturating_add(1))
    }

    /// `round(level / 10 * total_words)`, halves rounded up.
    pub fn blank_count(self, total_words: usize) -> usize {
        (self.0 as usize * total_words + 5) / 10
    }
}

impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        Difficulty::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.0, Self::MAX.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Arabic,
    English,
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayFormat::Arabic  => write!(f, "arabic"),
            DisplayFormat::English => write!(f, "english"),
        }
    }
}

/// Everything the presentation layer chooses before a learning round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub surah_id: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub display_format: DisplayFormat,
    /// `Some` makes blanks, options and ids reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Start from the stored progress record instead of the first ayah.
    #[serde(default)]
    pub resume: bool,
}

impl SessionRequest {
    /// Defaults: difficulty 0, Arabic, entropy seed, start at the first ayah.
    pub fn new(surah_id: impl Into<String>) -> Self {
        SessionRequest {
            surah_id: surah_id.into(),
            difficulty: Difficulty::MIN,
            display_format: DisplayFormat::Arabic,
            rng_seed: None,
            resume: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Quiz session state
// ---------------------------------------------------------------------------

/// One entry of the multiple-choice picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOption {
    pub word: String,
    pub translation: String,
    /// Position of this word in the verse.
    pub source_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Unresolved,
    Correct,
    Incorrect,
}

/// Per-position state inside one quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordState {
    pub index: usize,
    pub is_blank: bool,
    pub is_selected: bool,
    pub resolution: Resolution,
}

impl WordState {
    /// A blank that still accepts a pick (unanswered or answered wrongly).
    pub fn is_open(&self) -> bool {
        self.is_blank && self.resolution != Resolution::Correct
    }
}

/// What a presentation layer needs to draw one word.
/// `text` is `None` while the word is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHint {
    pub text: Option<String>,
    pub is_blank: bool,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    pub completed_count: usize,
    pub total_blanks: usize,
    pub is_complete: bool,
}

/// Result of one pick from the option picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub index: usize,
    pub is_correct: bool,
    /// True only for the pick that completed the verse.
    pub completes_verse: bool,
}

/// Running tally for one learning round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStats {
    pub correct: u32,
    pub incorrect: u32,
    pub hints: u32,
}

impl AnswerStats {
    /// Percentage of correct picks, 0 when nothing was answered.
    pub fn accuracy(&self) -> u32 {
        let total = (self.correct + self.incorrect).max(1);
        (self.correct as f64 / total as f64 * 100.0).round() as u32
    }
}

// ---------------------------------------------------------------------------
// Progress and progression
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// 1-based number of the ayah being worked on.
    pub current_ayah: usize,
    pub difficulty: Difficulty,
    pub completed: bool,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        ProgressRecord { current_ayah: 1, difficulty: Difficulty::MIN, completed: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AyahStatus {
    Completed,
    InProgress,
    Pending,
}

/// What the learner does after finishing a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NextAction {
    #[serde(rename_all = "camelCase")]
    IncreaseDifficulty { new_difficulty: Difficulty },
    #[serde(rename_all = "camelCase")]
    AdvanceVerse { next_index: usize, reset_difficulty: Difficulty },
    SurahComplete,
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextAction::IncreaseDifficulty { new_difficulty } =>
                write!(f, "Ayah completed! Difficulty rises to {new_difficulty}"),
            NextAction::AdvanceVerse { next_index, .. } =>
                write!(f, "Ayah mastered! Moving to ayah {}", next_index + 1),
            NextAction::SurahComplete =>
                write!(f, "Surah completed!"),
        }
    }
}
