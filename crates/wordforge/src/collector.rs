//! Turns raw [`Options`] fields into the ordered seed tokens and resolved
//! length bounds that drive the rest of the pipeline.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, Error, LengthBounds, LengthField, LengthPolicy,
    Options, Result,
};

/// Seed counts above this are logged as a warning even when under the cap.
pub const SEED_WARN_THRESHOLD: usize = 24;

/// Output of the token collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    pub seeds: Vec<String>,
    pub bounds: LengthBounds,
}

/// Collects seed tokens and resolves length bounds, enforcing the seed cap.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(options)))]
pub fn collect(options: &Options) -> Result<Collected> {
    let bounds = resolve_bounds(options)?;
    let seeds = seed_tokens(options);

    if let Some(limit) = options.max_seeds {
        if seeds.len() > limit {
            return Err(Error::TooManySeeds {
                count: seeds.len(),
                limit,
            });
        }
    }

    #[cfg(feature = "tracing")]
    {
        if seeds.len() > SEED_WARN_THRESHOLD {
            tracing::warn!(
                seeds = seeds.len(),
                "large seed set; combination output grows cubically"
            );
        }
        tracing::debug!(seeds = seeds.len(), ?bounds, "collected seed tokens");
    }

    Ok(Collected { seeds, bounds })
}

/// Flattens the input fields into seed tokens in insertion order.
///
/// Names and related words are followed by their capitalized form when it
/// differs. A non-empty birthday contributes its concatenated components,
/// then each component on its own. Empty strings never become tokens.
pub fn seed_tokens(options: &Options) -> Vec<String> {
    let mut seeds = Vec::new();

    let named = options
        .first_names
        .iter()
        .chain(&options.last_names)
        .chain(&options.related_words)
        .filter(|word| !word.is_empty());
    for word in named {
        seeds.push(word.clone());
        let capitalized = capitalize(word);
        if capitalized != *word {
            seeds.push(capitalized);
        }
    }

    let components: Vec<&str> = options
        .birthday
        .iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect();
    if !components.is_empty() {
        seeds.push(components.concat());
        seeds.extend(components.iter().map(|part| (*part).to_owned()));
    }

    seeds
}

/// Upper-cases the first character and lower-cases the rest (ASCII only).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Resolves the configured length bounds according to the length policy.
pub fn resolve_bounds(options: &Options) -> Result<LengthBounds> {
    let policy = options.length_policy;
    let min = parse_length(
        options.min_length.as_deref(),
        LengthField::Min,
        DEFAULT_MIN_LENGTH,
        policy,
    )?;
    let max = parse_length(
        options.max_length.as_deref(),
        LengthField::Max,
        DEFAULT_MAX_LENGTH,
        policy,
    )?;

    let bounds = LengthBounds::new(min, max);
    if bounds.is_empty() {
        if policy == LengthPolicy::Strict {
            return Err(Error::InvalidBounds { min, max });
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(min, max, "minimum length exceeds maximum; wordlist will be empty");
    }
    Ok(bounds)
}

fn parse_length(
    raw: Option<&str>,
    field: LengthField,
    default: usize,
    policy: LengthPolicy,
) -> Result<usize> {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<usize>() {
        Ok(value) => Ok(value),
        Err(_) if policy == LengthPolicy::Lenient => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%field, value = raw, default, "unparsable length, using default");
            Ok(default)
        }
        Err(_) => Err(Error::InvalidLength {
            field,
            value: raw.to_owned(),
        }),
    }
}
