//! Line-based interactive collection of the input form.
//!
//! Every field is asked in order and the complete form is validated at the
//! end. On a rule violation the error is shown and prompting resumes at the
//! offending field, keeping the answers before it. A [`session`] wraps this
//! in a summary/confirm step and returns to the form whenever generation
//! fails, so the user can correct the input and resubmit.

use core::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::form::{Field, RawForm};

/// Typed as an answer, clears a field that currently holds a value.
pub const CLEAR: &str = "-";

/// Everything the interactive session collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub form: RawForm,
    pub leet: bool,
    pub caps: bool,
    pub output: Option<PathBuf>,
}

/// Runs the form, confirm and generate loop until `generate` succeeds.
///
/// After the first pass every prompt offers the previous answer, so going
/// back (`b` at the confirmation) or recovering from a failed generation only
/// requires retyping what needs to change.
pub fn session<R, W, F, T, E>(input: &mut R, out: &mut W, mut generate: F) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Answers) -> Result<T, E>,
    E: fmt::Display,
{
    let mut answers = collect(input, out)?;
    loop {
        summarize(out, &answers)?;
        let choice = ask(input, out, "Generate wordlist? [Y/n, b to go back and edit]")?;
        match choice.to_ascii_lowercase().as_str() {
            "b" | "back" => {
                answers = revise(input, out, answers)?;
                continue;
            }
            "n" | "no" => bail!("wordlist generation cancelled"),
            _ => {}
        }

        writeln!(out, "Generating wordlist...")?;
        match generate(&answers) {
            Ok(value) => return Ok(value),
            Err(err) => {
                writeln!(out, "error: could not generate wordlist: {err}")?;
                answers = revise(input, out, answers)?;
            }
        }
    }
}

/// Asks for every field starting from an empty form.
pub fn collect<R, W>(input: &mut R, out: &mut W) -> anyhow::Result<Answers>
where
    R: BufRead,
    W: Write,
{
    revise(input, out, Answers::default())
}

/// Asks for every field again, offering the current answers as defaults.
pub fn revise<R, W>(input: &mut R, out: &mut W, mut answers: Answers) -> anyhow::Result<Answers>
where
    R: BufRead,
    W: Write,
{
    let mut start = 0;
    loop {
        for field in &Field::ALL[start..] {
            let value = ask_with(input, out, field.prompt(), answers.form.get(*field))?;
            answers.form.set(*field, value);
        }
        match answers.form.validate() {
            Ok(()) => break,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                start = err.field().index();
            }
        }
    }

    let current = answers
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let output = ask_with(input, out, "Output file (default wordlist.txt)", &current)?;
    answers.output = (!output.is_empty()).then(|| PathBuf::from(output));
    answers.leet = confirm(input, out, "Enable leet variations?", answers.leet)?;
    answers.caps = confirm(input, out, "Enable capitalization variations?", answers.caps)?;
    Ok(answers)
}

fn summarize<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Summary")?;
    for field in Field::ALL {
        writeln!(out, "  {:<32} {}", field.prompt(), shown(answers.form.get(field)))?;
    }
    let output = answers
        .output
        .as_ref()
        .map_or_else(|| "wordlist.txt".to_owned(), |path| path.display().to_string());
    writeln!(out, "  {:<32} {}", "Output file", output)?;
    writeln!(out, "  {:<32} {}", "Leet variations", yes_no(answers.leet))?;
    writeln!(out, "  {:<32} {}", "Capitalization variations", yes_no(answers.caps))?;
    writeln!(out)
}

fn shown(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn ask<R, W>(input: &mut R, out: &mut W, label: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        bail!("input closed before the form was complete");
    }
    Ok(line.trim().to_owned())
}

/// Blank keeps `current`, [`CLEAR`] empties the field.
fn ask_with<R, W>(input: &mut R, out: &mut W, label: &str, current: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    let answer = if current.is_empty() {
        ask(input, out, label)?
    } else {
        ask(input, out, &format!("{label} [{current}]"))?
    };
    Ok(match answer.as_str() {
        "" => current.to_owned(),
        CLEAR => String::new(),
        _ => answer,
    })
}

fn confirm<R, W>(input: &mut R, out: &mut W, label: &str, current: bool) -> anyhow::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let hint = if current { "[Y/n]" } else { "[y/N]" };
    let answer = ask(input, out, &format!("{label} {hint}"))?;
    Ok(match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => current,
    })
}
