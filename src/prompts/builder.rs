use super::template::FilterTemplate;

// Policy sentences shared between the instruction prompts.
pub const NO_EXTRA_FIELDS: &str = "Don't include any fields that are not in the template.";
pub const EMPTY_OR_ZERO_MEANS_UNSET: &str =
    "If you don't have information for a field, leave it empty or set to 0 (for numbers).";
pub const EMPTY_MEANS_UNSET: &str = "If you don't have information for a field, leave it empty.";
pub const JSON_ONLY: &str = "Don't include any explanations, only respond with the JSON file.";

/// Assembles an instruction block one line at a time.
///
/// The rendered text starts and ends with a newline.
#[derive(Debug, Default, Clone)]
pub struct InstructionBuilder {
    lines: Vec<String>,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn lines<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Adds `The json template of the {label} is: {json}.`
    pub fn template(self, label: &str, template: &FilterTemplate) -> Self {
        let line = template_line(label, template);
        self.line(line)
    }

    pub fn build(self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
        let mut out = String::with_capacity(capacity);
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

pub fn template_line(label: &str, template: &FilterTemplate) -> String {
    format!("The json template of the {label} is: {}.", template.to_json())
}
