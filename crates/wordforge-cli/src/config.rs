use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use wordforge::{DEFAULT_MAX_SEEDS, LengthPolicy, Options};

use crate::form::{Field, RawForm};
use crate::prompt::Answers;

/// Command-line arguments for the `wordforge` binary.
///
/// Every input field can also be supplied through an environment variable or
/// a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordforge",
    version,
    about = "Generate targeted password wordlists from personal information",
    long_about = "Creates candidate passwords by combining names, birthday \
                  components and related words, with optional leet (1337) \
                  and capitalization variants."
)]
pub struct CliArgs {
    /// First name, plus middle names if needed, separated by spaces.
    #[arg(short, long = "firstname", env = "WORDFORGE_FIRSTNAME", default_value = "")]
    pub first_name: String,

    /// Last name(s), separated by spaces.
    #[arg(short, long = "lastname", env = "WORDFORGE_LASTNAME", default_value = "")]
    pub last_name: String,

    /// Birthday with components separated by '/', e.g. 07/03/1994.
    #[arg(short, long, env = "WORDFORGE_BIRTHDAY", default_value = "")]
    pub birthday: String,

    /// Related words separated by commas.
    #[arg(short = 'w', long = "words", env = "WORDFORGE_WORDS", default_value = "")]
    pub related_words: String,

    /// Minimum password length (default 6).
    #[arg(long = "min", env = "WORDFORGE_MIN", default_value = "")]
    pub min_length: String,

    /// Maximum password length (default 12).
    #[arg(long = "max", env = "WORDFORGE_MAX", default_value = "")]
    pub max_length: String,

    /// Output file path (default wordlist.txt).
    #[arg(short, long, env = "WORDFORGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Add leet-speak (1337) variations.
    #[arg(long, default_value_t = false)]
    pub leet: bool,

    /// Add inverted-case variations.
    #[arg(long, default_value_t = false)]
    pub caps: bool,

    /// Reject malformed input instead of falling back to defaults.
    ///
    /// Applies the full form validation (birthday format, comma separated
    /// words, positive ordered lengths) and makes the engine fail on lengths
    /// it cannot parse.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Maximum number of seed tokens before generation is refused; 0 disables
    /// the limit.
    #[arg(long, env = "WORDFORGE_MAX_SEEDS", default_value_t = DEFAULT_MAX_SEEDS)]
    pub max_seeds: usize,

    /// Prompt for the input fields on the terminal.
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub form: RawForm,
    pub output: Option<PathBuf>,
    pub leet: bool,
    pub caps: bool,
    pub strict: bool,
    pub max_seeds: Option<usize>,
    pub interactive: bool,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let form = RawForm {
            first_name: args.first_name,
            last_name: args.last_name,
            birthday: args.birthday,
            related_words: args.related_words,
            min_length: args.min_length,
            max_length: args.max_length,
        };

        // interactive mode validates whatever the user types instead
        if !args.interactive {
            let checked = if args.strict {
                form.validate()
            } else {
                form.validate_names()
            };
            if let Err(err) = checked {
                bail!("{err} (use --help for more information)");
            }
        }

        Ok(Self {
            form,
            output: args.output,
            leet: args.leet,
            caps: args.caps,
            strict: args.strict,
            max_seeds: (args.max_seeds > 0).then_some(args.max_seeds),
            interactive: args.interactive,
        })
    }
}

impl AppConfig {
    /// Replaces the input fields with the answers collected interactively.
    pub fn with_answers(self, answers: Answers) -> Self {
        Self {
            form: answers.form,
            output: answers.output.or(self.output),
            leet: answers.leet,
            caps: answers.caps,
            ..self
        }
    }

    pub fn options(&self) -> Options {
        let mut builder = Options::builder()
            .first_names(self.form.first_names())
            .last_names(self.form.last_names())
            .birthday(self.form.birthday_components())
            .related_words(self.form.related())
            .leet(self.leet)
            .capitalize(self.caps)
            .length_policy(if self.strict {
                LengthPolicy::Strict
            } else {
                LengthPolicy::Lenient
            })
            .max_seeds(self.max_seeds);
        if let Some(min) = self.form.length(Field::MinLength) {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.form.length(Field::MaxLength) {
            builder = builder.max_length(max);
        }
        if let Some(output) = &self.output {
            builder = builder.output(output.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("wordforge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_onto_options() {
        let args = parse(&[
            "-f", "jo ann", "-l", "doe", "-b", "07/03/1994", "-w", "rex, tesla", "--min", "4",
            "--max", "16", "-o", "out.txt", "--leet", "--caps",
        ]);
        let options = AppConfig::try_from(args).unwrap().options();

        assert_eq!(options.first_names, ["jo", "ann"]);
        assert_eq!(options.last_names, ["doe"]);
        assert_eq!(options.birthday, ["07", "03", "1994"]);
        assert_eq!(options.related_words, ["rex", "tesla"]);
        assert_eq!(options.min_length.as_deref(), Some("4"));
        assert_eq!(options.max_length.as_deref(), Some("16"));
        assert_eq!(options.output_path(), Path::new("out.txt"));
        assert!(options.leet && options.capitalize);
        assert_eq!(options.length_policy, LengthPolicy::Lenient);
        assert_eq!(options.max_seeds, Some(DEFAULT_MAX_SEEDS));
    }

    #[test]
    fn names_are_required_outside_interactive_mode() {
        let err = AppConfig::try_from(parse(&["-f", "jo"])).unwrap_err();
        assert!(err.to_string().contains("last name cannot be empty"));

        let config = AppConfig::try_from(parse(&["-i"])).unwrap();
        assert!(config.interactive);
    }

    #[test]
    fn lenient_mode_passes_raw_lengths_through() {
        let args = parse(&["-f", "jo", "-l", "doe", "--min", "abc", "-b", "1990"]);
        let options = AppConfig::try_from(args).unwrap().options();
        assert_eq!(options.min_length.as_deref(), Some("abc"));
        assert_eq!(options.birthday, ["1990"]);
    }

    #[test]
    fn strict_mode_applies_form_rules() {
        let args = parse(&["-f", "jo", "-l", "doe", "-b", "1990", "--strict"]);
        let err = AppConfig::try_from(args).unwrap_err();
        assert!(err.to_string().contains("separated with '/'"));

        let args = parse(&["-f", "jo", "-l", "doe", "--strict"]);
        let options = AppConfig::try_from(args).unwrap().options();
        assert_eq!(options.length_policy, LengthPolicy::Strict);
    }

    #[test]
    fn zero_disables_the_seed_cap() {
        let args = parse(&["-f", "jo", "-l", "doe", "--max-seeds", "0"]);
        assert_eq!(AppConfig::try_from(args).unwrap().max_seeds, None);
    }

    #[test]
    fn interactive_answers_replace_flag_fields() {
        let config = AppConfig::try_from(parse(&["-i", "-o", "flag.txt"])).unwrap();
        let answers = Answers {
            form: RawForm {
                first_name: "ada".into(),
                last_name: "lovelace".into(),
                ..RawForm::default()
            },
            leet: true,
            caps: false,
            output: None,
        };
        let options = config.with_answers(answers).options();
        assert_eq!(options.first_names, ["ada"]);
        assert!(options.leet);
        assert_eq!(options.output_path(), Path::new("flag.txt"));
    }

    #[test]
    fn parsed_flags_write_the_expected_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let args = parse(&[
            "-f", "jo", "-l", "doe", "--min", "2", "--max", "20", "--leet", "-o",
            path.to_str().unwrap(),
        ]);
        let options = AppConfig::try_from(args).unwrap().options();

        let written = wordforge::run(&options).unwrap();
        assert_eq!(written, path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("jo\nJo\ndoe\nDoe\njoJo\n"));
        assert!(contents.ends_with('\n'));
        assert!(contents.lines().any(|w| w == "joJodoe"));
        assert!(contents.lines().any(|w| w == "j0J0d03"));

        let expected = wordforge::generate(&options).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, expected.as_slice());
    }
}
