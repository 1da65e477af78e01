use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::builder::{EMPTY_OR_ZERO_MEANS_UNSET, InstructionBuilder, JSON_ONLY, NO_EXTRA_FIELDS};
use super::template::{FilterTemplate, TemplateField};

/// Legal form of a company, as tokens the generative side may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyType {
    Partnership,
    Public,
    Private,
    Nonprofit,
    Government,
    SelfEmployed,
}

impl CompanyType {
    pub const ALL: [CompanyType; 6] = [
        CompanyType::Partnership,
        CompanyType::Public,
        CompanyType::Private,
        CompanyType::Nonprofit,
        CompanyType::Government,
        CompanyType::SelfEmployed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CompanyType::Partnership => "partnership",
            CompanyType::Public => "public",
            CompanyType::Private => "private",
            CompanyType::Nonprofit => "nonprofit",
            CompanyType::Government => "government",
            CompanyType::SelfEmployed => "self-employed",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown company type '{s}'"))
    }
}

pub static COMPANY_TYPE_TOKENS: [&str; 6] = [
    CompanyType::Partnership.as_str(),
    CompanyType::Public.as_str(),
    CompanyType::Private.as_str(),
    CompanyType::Nonprofit.as_str(),
    CompanyType::Government.as_str(),
    CompanyType::SelfEmployed.as_str(),
];

/// Fields a company search can be filtered on.
///
/// `excludedCompanyTypes` is free text rather than the `companyType` token set.
pub static COMPANY_TEMPLATE: FilterTemplate = FilterTemplate::new(&COMPANY_FIELDS);

static COMPANY_FIELDS: [TemplateField; 10] = [
    TemplateField::text("companyNames"),
    TemplateField::text("excludedCompanyNames"),
    TemplateField::range("headcount"),
    TemplateField::text("industries"),
    TemplateField::text("excludedIndustries"),
    TemplateField::one_of("companyType", &COMPANY_TYPE_TOKENS),
    TemplateField::text("excludedCompanyTypes"),
    TemplateField::text("location"),
    TemplateField::text("excludedLocations"),
    TemplateField::text("companySpecialties"),
];

pub const GOAL: [&str; 3] = [
    "Your job is to parse a description of a person and identify relevant company search filters based on that description.",
    "Consider factors such as industry, company size (headcount), company type, location, and specialties that would align with the person's profile.",
    "Generate a JSON file that includes these company search filters. This is a json file meant to search through a database of companies.",
];
pub const IGNORE_PERSON_SIGNALS: &str = "If you see information that indicates filter for a person (like job title, skills, etc.), ignore that information.";
pub const TEMPLATE_VALUES_ONLY: &str = "Important: For fields that specify list of values (such as companyType, etc.), use only the values provided in the template.";

static COMPANY_PROMPT: LazyLock<String> = LazyLock::new(|| {
    log::debug!("building company filter prompt");
    InstructionBuilder::new()
        .lines(GOAL)
        .template("filters", &COMPANY_TEMPLATE)
        .lines([
            NO_EXTRA_FIELDS,
            EMPTY_OR_ZERO_MEANS_UNSET,
            IGNORE_PERSON_SIGNALS,
            TEMPLATE_VALUES_ONLY,
            JSON_ONLY,
        ])
        .build()
});

/// Instruction turning a person description into company search filters.
pub fn company_prompt() -> &'static str {
    &COMPANY_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::validator::extract_embedded_json;
    use crate::prompts::template::FieldKind;
    use serde_json::{Value, json};

    #[test]
    fn prompt_matches_expected_text() {
        let expected = concat!(
            "\nYour job is to parse a description of a person and identify relevant company search filters based on that description.\n",
            "Consider factors such as industry, company size (headcount), company type, location, and specialties that would align with the person's profile.\n",
            "Generate a JSON file that includes these company search filters. This is a json file meant to search through a database of companies.\n",
            "The json template of the filters is: {\"companyNames\":[\"string\"],\"excludedCompanyNames\":[\"string\"],\"headcount\":{\"min\":0,\"max\":0},\"industries\":[\"string\"],\"excludedIndustries\":[\"string\"],\"companyType\":[\"partnership\",\"public\",\"private\",\"nonprofit\",\"government\",\"self-employed\"],\"excludedCompanyTypes\":[\"string\"],\"location\":[\"string\"],\"excludedLocations\":[\"string\"],\"companySpecialties\":[\"string\"]}.\n",
            "Don't include any fields that are not in the template.\n",
            "If you don't have information for a field, leave it empty or set to 0 (for numbers).\n",
            "If you see information that indicates filter for a person (like job title, skills, etc.), ignore that information.\n",
            "Important: For fields that specify list of values (such as companyType, etc.), use only the values provided in the template.\n",
            "Don't include any explanations, only respond with the JSON file.\n",
        );
        assert_eq!(company_prompt(), expected);
    }

    #[test]
    fn embedded_company_type_lists_six_tokens_in_order() {
        let embedded = extract_embedded_json(company_prompt()).unwrap();
        let parsed: Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(
            parsed["companyType"],
            json!(["partnership", "public", "private", "nonprofit", "government", "self-employed"])
        );
        assert_eq!(parsed["headcount"], json!({"min": 0, "max": 0}));
    }

    #[test]
    fn excluded_company_types_stay_free_text() {
        assert_eq!(
            COMPANY_TEMPLATE.field("excludedCompanyTypes").map(|f| f.kind),
            Some(FieldKind::Text)
        );
        assert_eq!(
            COMPANY_TEMPLATE.permitted_values("companyType"),
            Some(&COMPANY_TYPE_TOKENS[..])
        );
    }

    #[test]
    fn company_type_tokens_round_trip() {
        for t in CompanyType::ALL {
            assert_eq!(t.as_str().parse::<CompanyType>(), Ok(t));
        }
        assert_eq!(CompanyType::SelfEmployed.to_string(), "self-employed");
        assert!("Public".parse::<CompanyType>().is_err());
    }

    #[test]
    fn prompt_is_stable_across_reads() {
        assert!(std::ptr::eq(company_prompt(), company_prompt()));
    }
}
