use core::ops::Deref;
use std::path::PathBuf;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Collected, LengthBounds, Options, Result, collect, combine, expand, finalize, write_wordlist,
};

/// The final, deduplicated and length-filtered list of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    bounds: LengthBounds,
}

impl Wordlist {
    /// The length bounds the list was filtered with.
    pub const fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

impl Deref for Wordlist {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl IntoIterator for Wordlist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Runs the whole engine without touching the filesystem.
///
/// Seeds and their combinations form the pool, variants of that pool are
/// appended, and the result is deduplicated and length-filtered. The output
/// depends on nothing but `options`.
///
/// ```
/// use wordforge::{Options, generate};
///
/// let options = Options::builder()
///     .first_names(["jo"])
///     .last_names(["doe"])
///     .min_length("2")
///     .max_length("20")
///     .build();
///
/// let wordlist = generate(&options)?;
/// assert_eq!(&wordlist[..4], ["jo", "Jo", "doe", "Doe"]);
/// assert!(wordlist.contains(&"joDoe".to_string()));
/// # Ok::<(), wordforge::Error>(())
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(options)))]
pub fn generate(options: &Options) -> Result<Wordlist> {
    let Collected { seeds, bounds } = collect(options)?;

    let combinations = combine(&seeds);
    let mut pool = seeds;
    pool.extend(combinations);

    let variants = expand(&pool, options.leet, options.capitalize);
    pool.extend(variants);

    #[cfg(feature = "tracing")]
    let pooled = pool.len();
    let words = finalize(pool, bounds);

    #[cfg(feature = "tracing")]
    tracing::debug!(pooled, kept = words.len(), "finalized wordlist");
    Ok(Wordlist { words, bounds })
}

/// Generates the wordlist and writes it to [`Options::output_path`].
///
/// Returns the path that was written.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(options)))]
pub fn run(options: &Options) -> Result<PathBuf> {
    let wordlist = generate(options)?;
    let path = options.output_path().to_path_buf();
    write_wordlist(&path, wordlist.as_slice())?;
    Ok(path)
}
