use std::sync::LazyLock;

use super::builder::{EMPTY_OR_ZERO_MEANS_UNSET, InstructionBuilder, JSON_ONLY, NO_EXTRA_FIELDS};
use super::template::{FilterTemplate, TemplateField};

/// Fields a people search can be filtered on.
pub static PERSON_TEMPLATE: FilterTemplate = FilterTemplate::new(&PERSON_FIELDS);

static PERSON_FIELDS: [TemplateField; 13] = [
    TemplateField::text("jobTitles"),
    TemplateField::text("excludedJobTitles"),
    TemplateField::text("location"),
    TemplateField::text("excludedLocations"),
    TemplateField::text("seniorityLevels"),
    TemplateField::text("excludedSeniorityLevels"),
    TemplateField::range("yearsInCurrentRole"),
    TemplateField::range("yearsAtCurrentCompany"),
    TemplateField::text("universities"),
    TemplateField::text("excludedUniversities"),
    TemplateField::text("name"),
    TemplateField::text("skills"),
    TemplateField::text("excludedSkills"),
];

pub const GOAL: &str = "Your job is to convert the user query into JSON and apply the filters (only if available). This is a json file meant to search through a database of people.";
pub const INFER_SKILLS: &str = "If the skills are empty, try to infer them from the job title.";
pub const IGNORE_COMPANY_SIGNALS: &str = "If you see information that indicates filter for a company (like company size, industry, etc.), ignore that information.";

static PERSON_PROMPT: LazyLock<String> = LazyLock::new(|| {
    log::debug!("building person filter prompt");
    InstructionBuilder::new()
        .line(GOAL)
        .line("Additional rules:")
        .line(INFER_SKILLS)
        .template("filters", &PERSON_TEMPLATE)
        .lines([NO_EXTRA_FIELDS, EMPTY_OR_ZERO_MEANS_UNSET, IGNORE_COMPANY_SIGNALS, JSON_ONLY])
        .build()
});

/// Instruction turning a free-text query into person search filters.
pub fn person_prompt() -> &'static str {
    &PERSON_PROMPT
}
