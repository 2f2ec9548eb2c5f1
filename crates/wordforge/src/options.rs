use core::fmt;
use std::path::{Path, PathBuf};

/// Minimum word length used when none is supplied.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Maximum word length used when none is supplied.
pub const DEFAULT_MAX_LENGTH: usize = 12;

/// Output file used when none is supplied.
pub const DEFAULT_OUTPUT_PATH: &str = "wordlist.txt";

/// Default cap on the number of seed tokens.
///
/// Three-token permutations grow as `n * (n - 1) * (n - 2)`; 64 seeds already
/// yield roughly a quarter million combinations before variants.
pub const DEFAULT_MAX_SEEDS: usize = 64;

/// How unparsable or inconsistent length bounds are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LengthPolicy {
    /// Unparsable bounds silently fall back to their defaults, and `min > max`
    /// produces an empty list.
    #[default]
    Lenient,
    /// Unparsable bounds and `min > max` are reported as errors.
    Strict,
}

/// Identifies which length bound an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthField {
    Min,
    Max,
}

impl fmt::Display for LengthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("minimum"),
            Self::Max => f.write_str("maximum"),
        }
    }
}

/// Inclusive byte-length range a word must fall in to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns `true` if the byte length of `word` lies within `[min, max]`.
    pub fn contains(&self, word: &str) -> bool {
        (self.min..=self.max).contains(&word.len())
    }

    /// Returns `true` if no word can satisfy these bounds.
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

/// Input record for a single generation run.
///
/// Field order matters: seed tokens are collected from first names, last
/// names, related words and finally the birthday, each in input order.
/// Length bounds are kept as the raw strings the front end received so that
/// [`LengthPolicy`] can decide how to treat malformed values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub birthday: Vec<String>,
    pub related_words: Vec<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub leet: bool,
    pub capitalize: bool,
    pub output: Option<PathBuf>,
    pub length_policy: LengthPolicy,
    /// Maximum number of seed tokens; `None` disables the check.
    pub max_seeds: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            first_names: Vec::new(),
            last_names: Vec::new(),
            birthday: Vec::new(),
            related_words: Vec::new(),
            min_length: None,
            max_length: None,
            leet: false,
            capitalize: false,
            output: None,
            length_policy: LengthPolicy::default(),
            max_seeds: Some(DEFAULT_MAX_SEEDS),
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// The configured output path, or [`DEFAULT_OUTPUT_PATH`].
    pub fn output_path(&self) -> &Path {
        self.output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH))
    }
}

/// Consuming builder for [`Options`].
///
/// ```
/// use wordforge::{LengthPolicy, Options};
///
/// let options = Options::builder()
///     .first_names(["jo"])
///     .last_names(["doe"])
///     .min_length("2")
///     .max_length("20")
///     .length_policy(LengthPolicy::Strict)
///     .build();
///
/// assert_eq!(options.first_names, ["jo"]);
/// assert_eq!(options.output_path().to_str(), Some("wordlist.txt"));
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OptionsBuilder {
    inner: Options,
}

impl OptionsBuilder {
    pub fn first_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.first_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn last_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.last_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Birthday components in input order, e.g. `["01", "02", "1990"]`.
    pub fn birthday<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.birthday = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn related_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.related_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_length(mut self, raw: impl Into<String>) -> Self {
        self.inner.min_length = Some(raw.into());
        self
    }

    pub fn max_length(mut self, raw: impl Into<String>) -> Self {
        self.inner.max_length = Some(raw.into());
        self
    }

    pub fn leet(mut self, enabled: bool) -> Self {
        self.inner.leet = enabled;
        self
    }

    pub fn capitalize(mut self, enabled: bool) -> Self {
        self.inner.capitalize = enabled;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner.output = Some(path.into());
        self
    }

    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.inner.length_policy = policy;
        self
    }

    pub fn max_seeds(mut self, limit: Option<usize>) -> Self {
        self.inner.max_seeds = limit;
        self
    }

    pub fn build(self) -> Options {
        self.inner
    }
}
