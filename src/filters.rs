//! Typed shapes of the JSON the generative side sends back for each template.
//!
//! Decoding is lenient: missing fields default to "no filter", unknown
//! fields are dropped and enumerated values are not checked.

use crate::error::FilterError;
use crate::json::schema_utils;
use crate::json::validator::parse_reply;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive numeric bounds. A bound of 0 is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
}

impl NumericRange {
    pub fn is_unset(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// `(min, max)` with open ends as `None`, or `None` when no bound is set.
    pub fn bounds(&self) -> Option<(Option<u32>, Option<u32>)> {
        if self.is_unset() {
            return None;
        }
        let open = |v: u32| (v != 0).then_some(v);
        Some((open(self.min), open(self.max)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonFilters {
    pub job_titles: Vec<String>,
    pub excluded_job_titles: Vec<String>,
    pub location: Vec<String>,
    pub excluded_locations: Vec<String>,
    pub seniority_levels: Vec<String>,
    pub excluded_seniority_levels: Vec<String>,
    pub years_in_current_role: NumericRange,
    pub years_at_current_company: NumericRange,
    pub universities: Vec<String>,
    pub excluded_universities: Vec<String>,
    pub name: Vec<String>,
    pub skills: Vec<String>,
    pub excluded_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyFilters {
    pub company_names: Vec<String>,
    pub excluded_company_names: Vec<String>,
    pub headcount: NumericRange,
    pub industries: Vec<String>,
    pub excluded_industries: Vec<String>,
    /// One of: partnership, public, private, nonprofit, government, self-employed.
    pub company_type: Vec<String>,
    pub excluded_company_types: Vec<String>,
    pub location: Vec<String>,
    pub excluded_locations: Vec<String>,
    pub company_specialties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillSet {
    pub core_skills: Vec<String>,
    pub specialized_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub transferable_skills: Vec<String>,
    pub tools_and_platforms: Vec<String>,
}

/// Shared decode and schema helpers for the reply shapes.
pub trait ReplyShape: DeserializeOwned + JsonSchema {
    fn from_reply(text: &str) -> Result<Self, FilterError> {
        let value = parse_reply(text).into_result().inspect_err(|e| {
            log::warn!("reply is not JSON: {e}");
        })?;
        serde_json::from_value(value).map_err(|e| {
            log::warn!("reply did not decode: {e}");
            FilterError::InvalidJson(e.to_string())
        })
    }

    fn response_schema() -> Result<Value, FilterError> {
        Ok(schema_utils::clean_schema(schema_for!(Self))?)
    }
}

impl ReplyShape for PersonFilters {}
impl ReplyShape for CompanyFilters {}
impl ReplyShape for SkillSet {}
