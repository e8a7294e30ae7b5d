//! Interactive value collection
//!
//! Generic over the input/output streams so the retry loop can be driven
//! from a byte buffer in tests.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::config::DefaultsSection;
use crate::error::{Result, ScaffoldError};
use crate::fields::{self, FieldSpec, FieldValue};
use crate::values::ScaffoldValues;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until `spec` accepts the answer
    pub fn ask(&mut self, spec: &FieldSpec) -> Result<FieldValue> {
        loop {
            write!(self.output, "{}", spec.prompt_text())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ScaffoldError::InputClosed);
            }

            match spec.parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(field = spec.key, error = ?e, "rejected answer");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Ask every interactive field in order
    pub fn collect(&mut self, defaults: &DefaultsSection) -> Result<ScaffoldValues> {
        let mut answers = BTreeMap::new();
        for spec in fields::interactive_fields(defaults) {
            let value = self.ask(&spec)?;
            answers.insert(spec.key, value);
        }
        Ok(ScaffoldValues::from_answers(answers))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Collect values from the process's stdin/stdout
pub fn collect_from_terminal(defaults: &DefaultsSection) -> Result<ScaffoldValues> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Prompter::new(stdin.lock(), stdout.lock()).collect(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_required_field_reprompts_on_empty() {
        let spec = FieldSpec::text("name", "Package name");
        let mut p = prompter("\n   \nmypkg\n");

        assert_eq!(p.ask(&spec).unwrap(), FieldValue::Text("mypkg".into()));
        let out = transcript(p);
        assert_eq!(out.matches("Package name: ").count(), 3);
        assert_eq!(out.matches("Field required").count(), 2);
    }

    #[test]
    fn test_required_field_default_does_not_reprompt() {
        let spec = FieldSpec::text("author_name", "Author name").with_default("Jane");
        let mut p = prompter("\n");

        assert_eq!(p.ask(&spec).unwrap(), FieldValue::Text("Jane".into()));
        let out = transcript(p);
        assert_eq!(out, "Author name [Jane]: ");
    }

    #[test]
    fn test_boolean_rejects_then_accepts() {
        let spec = FieldSpec::boolean("console_script", "Is this a console script [yes]")
            .with_default("yes");
        let mut p = prompter("maybe\nNo\n");

        assert_eq!(p.ask(&spec).unwrap(), FieldValue::Bool(false));
        let out = transcript(p);
        assert_eq!(out.matches("console script [yes]? ").count(), 2);
        assert!(out.contains("must be a boolean response"));
    }

    #[test]
    fn test_input_closed() {
        let spec = FieldSpec::text("name", "Package name");
        let mut p = prompter("\n");
        assert!(matches!(p.ask(&spec), Err(ScaffoldError::InputClosed)));
    }

    #[test]
    fn test_collect_full_session() {
        let input = "  mypkg  \n\nJane Doe\njane@example.com\nA tiny package\nmaybe\nY\n";
        let mut p = prompter(input);

        let values = p.collect(&DefaultsSection::default()).unwrap();
        assert_eq!(
            values,
            ScaffoldValues {
                name: "mypkg".into(),
                repository: String::new(),
                author_name: "Jane Doe".into(),
                author_email: "jane@example.com".into(),
                description: "A tiny package".into(),
                console_script: true,
            }
        );
    }

    #[test]
    fn test_collect_uses_config_defaults() {
        let defaults = DefaultsSection {
            author_name: Some("Jane Doe".into()),
            author_email: Some("jane@example.com".into()),
            ..Default::default()
        };
        let mut p = prompter("mypkg\n\n\n\n\n\n");

        let values = p.collect(&defaults).unwrap();
        assert_eq!(values.author_name, "Jane Doe");
        assert_eq!(values.author_email, "jane@example.com");
        assert!(values.console_script);
    }
}
