//! Gear catalog form parsing and validation.
//!
//! The add and edit forms both submit the full record, so a single
//! [`GearForm`] validates into a single [`GearFields`] used for insert and
//! full-replacement update alike.

use serde::{Deserialize, Serialize};

use crate::fields::{
    check_max_length, check_optional_max_length, normalize_optional, require, MAX_NOTES_LENGTH,
    MAX_SHORT_TEXT_LENGTH,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Condition stored when the form leaves it blank.
pub const DEFAULT_CONDITION: &str = "Good";

/// Conditions offered by the gear form. Free text is still accepted.
pub const CONDITIONS: &[&str] = &["New", "Excellent", "Good", "Fair", "Poor"];

/// Categories suggested by the gear form, merged with those already in use.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Shelter",
    "Sleep System",
    "Cooking",
    "Clothing",
    "Lighting",
    "Navigation",
    "Climbing",
    "Water",
    "First Aid",
    "Other",
];

/// Query value meaning "no category filter".
pub const CATEGORY_FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Raw gear form as submitted (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GearForm {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub weight: Option<String>,
    pub condition: Option<String>,
    pub notes: Option<String>,
}

/// Validated gear fields ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearFields {
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub weight_grams: Option<i32>,
    pub condition: String,
    pub notes: Option<String>,
}

impl GearForm {
    /// Validate and normalize the submitted fields.
    pub fn validate(&self) -> Result<GearFields, String> {
        let name = require("Name", self.name.as_deref())?;
        check_max_length("Name", &name, MAX_SHORT_TEXT_LENGTH)?;

        let category = require("Category", self.category.as_deref())?;
        check_max_length("Category", &category, MAX_SHORT_TEXT_LENGTH)?;

        let brand = normalize_optional(self.brand.as_deref());
        check_optional_max_length("Brand", brand.as_ref(), MAX_SHORT_TEXT_LENGTH)?;

        let condition = normalize_optional(self.condition.as_deref())
            .unwrap_or_else(|| DEFAULT_CONDITION.to_string());
        check_max_length("Condition", &condition, MAX_SHORT_TEXT_LENGTH)?;

        let notes = normalize_optional(self.notes.as_deref());
        check_optional_max_length("Notes", notes.as_ref(), MAX_NOTES_LENGTH)?;

        let weight_grams = parse_weight(self.weight.as_deref())?;

        Ok(GearFields {
            name,
            brand,
            category,
            weight_grams,
            condition,
            notes,
        })
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse a weight in grams. Blank or absent input means "unknown".
pub fn parse_weight(input: Option<&str>) -> Result<Option<i32>, String> {
    let Some(raw) = normalize_optional(input) else {
        return Ok(None);
    };
    let grams: i32 = raw
        .parse()
        .map_err(|_| format!("Weight must be a whole number of grams, got '{raw}'"))?;
    if grams < 0 {
        return Err("Weight cannot be negative".to_string());
    }
    Ok(Some(grams))
}

/// Resolve the `?category=` query value into an optional filter.
///
/// `all`, blank, and absent all disable filtering.
pub fn category_filter(input: Option<&str>) -> Option<String> {
    normalize_optional(input).filter(|c| !c.eq_ignore_ascii_case(CATEGORY_FILTER_ALL))
}

/// Category choices for the gear form: suggestions first, then any
/// in-use categories not already suggested.
pub fn category_choices(in_use: &[String]) -> Vec<String> {
    let mut choices: Vec<String> = SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for category in in_use {
        if !choices.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            choices.push(category.clone());
        }
    }
    choices
}
