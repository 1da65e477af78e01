//! Instruction prompts for turning free-text people and company searches
//! into JSON filters, plus helpers for checking the JSON that comes back.

pub mod config;
pub mod error;
pub mod filters;
pub mod json {
    pub mod schema_utils;
    pub mod validator;
}
pub mod prompts {
    pub mod builder;
    pub mod company;
    pub mod person;
    pub mod skills;
    pub mod template;
}

pub use json::validator::{JsonParse, is_valid_json, parse_json};
pub use prompts::company::company_prompt;
pub use prompts::person::person_prompt;
pub use prompts::skills::{SKILLS_TEMPLATE, enhance_skills_prompt};
