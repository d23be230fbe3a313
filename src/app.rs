use crate::config::Config;
use crate::error::AppResult;
use crate::form::{ErrorState, FieldName, FormValidationEngine, Snapshot};
use log::*;
use std::io::{BufRead, Write};

const THANK_YOU: &str = "Thank you for contacting us. We will get back to you soon.";

/// How a form session ended.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Submit passed validation; the snapshot was printed
    Submitted(Snapshot),
    /// Submit failed validation; the errors were printed
    Rejected(ErrorState),
    /// Input ran out before a submit succeeded
    Abandoned,
}

impl Outcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Outcome::Submitted(_))
    }
}

/// Oversees a form session: feeds input into the engine, submits, and
/// reports the result. Snapshots go to `out` as JSON, everything meant for
/// the user goes to `ui`.
///
pub struct App {
    engine: FormValidationEngine,
}

impl App {
    /// Start a new session with the rule thresholds from the configuration.
    ///
    pub fn new(config: &Config) -> Self {
        App {
            engine: FormValidationEngine::with_rules(config.rules),
        }
    }

    pub fn engine(&self) -> &FormValidationEngine {
        &self.engine
    }

    /// Store values given up front, e.g. from command-line flags.
    ///
    pub fn prefill(&mut self, inputs: &[(FieldName, String)]) {
        for (field, value) in inputs {
            self.engine.input(*field, value);
        }
    }

    /// Submit whatever has been filled in, once.
    ///
    pub fn run_once<O: Write, U: Write>(&mut self, out: &mut O, ui: &mut U) -> AppResult<Outcome> {
        self.submit(out, ui)
    }

    /// Prompt for every empty field, submit, and keep prompting for the
    /// failing fields until a submit succeeds or the input ends.
    ///
    pub fn run_interactive<I: BufRead, O: Write, U: Write>(
        &mut self,
        mut input: I,
        out: &mut O,
        ui: &mut U,
    ) -> AppResult<Outcome> {
        debug!("Starting interactive form session...");
        writeln!(ui, "Contact form")?;
        writeln!(ui, "We would love to hear from you")?;

        let mut pending: Vec<FieldName> = FieldName::ALL
            .iter()
            .copied()
            .filter(|field| self.engine.value(*field).is_empty())
            .collect();

        loop {
            for field in &pending {
                match self.prompt(*field, &mut input, ui)? {
                    Some(value) => {
                        self.engine.input(*field, &value);
                        if field.is_multiline() {
                            writeln!(ui, "  {}", self.engine.char_count_label(*field))?;
                        }
                    }
                    None => {
                        debug!("Input closed before submit.");
                        return Ok(Outcome::Abandoned);
                    }
                }
            }

            match self.submit(out, ui)? {
                Outcome::Rejected(errors) => pending = errors.fields(),
                outcome => return Ok(outcome),
            }
        }
    }

    /// Ask for one field value. Returns `None` at end of input.
    ///
    fn prompt<I: BufRead, U: Write>(
        &self,
        field: FieldName,
        input: &mut I,
        ui: &mut U,
    ) -> AppResult<Option<String>> {
        write!(ui, "{} * [{}]: ", field.label(), field.placeholder())?;
        ui.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let value = line.trim_end_matches(['\r', '\n']).to_string();

        if let Some(max) = self.engine.rules().max_input_length(field) {
            let count = value.chars().count();
            if count > max {
                writeln!(ui, "  ({}/{}, text past the limit was cut)", count, max)?;
            }
        }
        Ok(Some(value))
    }

    fn submit<O: Write, U: Write>(&mut self, out: &mut O, ui: &mut U) -> AppResult<Outcome> {
        match self.engine.submit() {
            Ok(snapshot) => {
                serde_json::to_writer_pretty(&mut *out, &snapshot)?;
                writeln!(out)?;
                writeln!(ui, "{}", THANK_YOU)?;
                Ok(Outcome::Submitted(snapshot))
            }
            Err(failed) => {
                for (field, error) in failed.errors().iter() {
                    writeln!(ui, "{}: {}", field, error)?;
                }
                Ok(Outcome::Rejected(failed.errors))
            }
        }
    }
}
