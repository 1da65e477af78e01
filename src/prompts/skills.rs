use std::sync::LazyLock;

use super::builder::{EMPTY_MEANS_UNSET, InstructionBuilder, NO_EXTRA_FIELDS};
use super::template::{FilterTemplate, TemplateField};

/// Skill categories an enhanced profile is sorted into.
pub static SKILLS_TEMPLATE: FilterTemplate = FilterTemplate::new(&SKILL_FIELDS);

static SKILL_FIELDS: [TemplateField; 5] = [
    TemplateField::text("coreSkills"),
    TemplateField::text("specializedSkills"),
    TemplateField::text("technicalSkills"),
    TemplateField::text("transferableSkills"),
    TemplateField::text("toolsAndPlatforms"),
];

pub const ENHANCE_RULES: [&str; 10] = [
    "Your job is to parse JSON that contains a description of a person and improve the \"skills\" field.",
    "You should enhance the list of skills by adding any relevant or related skills that might be missing.",
    "Think about related tools and technologies commonly associated with the provided skills.",
    "Think about related methodologies commonly associated with the provided skills.",
    "Think about related frameworks commonly associated with the provided skills.",
    "Think about skills that professionals in similar roles often possess.",
    "Think about skills that would enhance the person's effectiveness in their role.",
    "Always consider industry trends and best practices. Use modern skills that are relevant to the person's role.",
    "Always use the job title and other fields in the original JSON to infer any additional skills that would be relevant for the role.",
    "If you don't think any skills are missing, just return the original list.",
];
pub const SKILLS_JSON_ONLY: &str =
    "Don't include any explanations, only respond with the skills JSON file.";

static ENHANCE_SKILLS_PROMPT: LazyLock<String> = LazyLock::new(|| {
    log::debug!("building skill enhancement prompt");
    InstructionBuilder::new()
        .lines(ENHANCE_RULES)
        .template("skills", &SKILLS_TEMPLATE)
        .lines([NO_EXTRA_FIELDS, EMPTY_MEANS_UNSET, SKILLS_JSON_ONLY])
        .build()
});

/// Instruction asking for a person's skills to be enlarged by category.
pub fn enhance_skills_prompt() -> &'static str {
    &ENHANCE_SKILLS_PROMPT
}
