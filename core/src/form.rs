use regex::Regex;
use reqwest::Url;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::{Difficulty, Recipe, RecipePayload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid form: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == name)
    }

    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Which rule set a recipe form is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

struct Rules {
    min_ingredient: usize,
    min_instruction: usize,
    require_rows: bool,
    trim_rows: bool,
    min_calories: i64,
    image_required: bool,
}

impl FormMode {
    fn rules(self) -> Rules {
        match self {
            FormMode::Create => Rules {
                min_ingredient: 1,
                min_instruction: 1,
                require_rows: true,
                trim_rows: true,
                min_calories: 1,
                image_required: false,
            },
            FormMode::Edit => Rules {
                min_ingredient: 2,
                min_instruction: 5,
                require_rows: false,
                trim_rows: false,
                min_calories: 0,
                image_required: true,
            },
        }
    }
}

const MIN_NAME: usize = 3;

/// Raw recipe input as typed by the user, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeForm {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub meal_type: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub calories_per_serving: i64,
    pub image: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            tags: Vec::new(),
            meal_type: Vec::new(),
            prep_time_minutes: 10,
            cook_time_minutes: 10,
            servings: 1,
            difficulty: Difficulty::Easy,
            cuisine: None,
            calories_per_serving: 100,
            image: String::new(),
        }
    }
}

impl From<&Recipe> for RecipeForm {
    fn from(r: &Recipe) -> Self {
        Self {
            name: r.name.clone(),
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            tags: r.tags.clone().unwrap_or_default(),
            meal_type: r.meal_type.clone().unwrap_or_default(),
            prep_time_minutes: r.prep_time_minutes.into(),
            cook_time_minutes: r.cook_time_minutes.into(),
            servings: r.servings.into(),
            difficulty: r.difficulty,
            cuisine: Some(r.cuisine.clone()),
            calories_per_serving: r.calories_per_serving.into(),
            image: r.image.clone(),
        }
    }
}

fn push_row(rows: &mut Vec<String>, field: &str) -> Result<(), FieldError> {
    if rows.last().is_some_and(|last| last.trim().is_empty()) {
        return Err(FieldError::new(
            format!("{}[{}]", field, rows.len() - 1),
            "complete this entry before adding another",
        ));
    }
    rows.push(String::new());
    Ok(())
}

fn check_positive(errors: &mut FormErrors, field: &str, value: i64, min: i64) -> u32 {
    if value < min {
        errors.push(field, format!("must be at least {}", min));
    }
    u32::try_from(value).unwrap_or_else(|_| {
        if value >= min {
            errors.push(field, "is too large");
        }
        0
    })
}

fn check_rows(
    errors: &mut FormErrors,
    field: &str,
    rows: &[String],
    min_len: usize,
    rules: &Rules,
) {
    if rules.require_rows && rows.is_empty() {
        errors.push(field, "at least one entry is required");
    }
    for (i, row) in rows.iter().enumerate() {
        let row = if rules.trim_rows { row.trim() } else { row.as_str() };
        if row.chars().count() < min_len {
            let message = if min_len == 1 {
                "must not be empty".to_string()
            } else {
                format!("must have at least {} characters", min_len)
            };
            errors.push(format!("{}[{}]", field, i), message);
        }
    }
}

pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

impl RecipeForm {
    /// Appends an empty ingredient row unless the last one is still blank.
    pub fn push_ingredient(&mut self) -> Result<(), FieldError> {
        push_row(&mut self.ingredients, "ingredients")
    }

    pub fn push_instruction(&mut self) -> Result<(), FieldError> {
        push_row(&mut self.instructions, "instructions")
    }

    /// Replaces the fields present in the JSON object `patch`, keeping the rest.
    pub fn overlay(&self, patch: Value) -> serde_json::Result<Self> {
        let Value::Object(patch) = patch else {
            return Err(serde_json::Error::custom("recipe must be a JSON object"));
        };
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut value {
            fields.extend(patch);
        }
        serde_json::from_value(value)
    }

    pub fn validate(&self, mode: FormMode) -> Result<RecipePayload, FormErrors> {
        let rules = mode.rules();
        let mut errors = FormErrors::default();

        if self.name.chars().count() < MIN_NAME {
            errors.push(
                "name",
                format!("must have at least {} characters", MIN_NAME),
            );
        }

        check_rows(
            &mut errors,
            "ingredients",
            &self.ingredients,
            rules.min_ingredient,
            &rules,
        );
        check_rows(
            &mut errors,
            "instructions",
            &self.instructions,
            rules.min_instruction,
            &rules,
        );

        let prep_time_minutes =
            check_positive(&mut errors, "prepTimeMinutes", self.prep_time_minutes, 1);
        let cook_time_minutes =
            check_positive(&mut errors, "cookTimeMinutes", self.cook_time_minutes, 1);
        let servings = check_positive(&mut errors, "servings", self.servings, 1);
        let calories_per_serving = check_positive(
            &mut errors,
            "caloriesPerServing",
            self.calories_per_serving,
            rules.min_calories,
        );

        let image_ok = if self.image.is_empty() {
            !rules.image_required
        } else {
            is_url(&self.image)
        };
        if !image_ok {
            errors.push("image", "must be a valid URL");
        }

        errors.into_result(RecipePayload {
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            prep_time_minutes,
            cook_time_minutes,
            servings,
            difficulty: self.difficulty,
            cuisine: self.cuisine.clone().unwrap_or_default(),
            calories_per_serving,
            tags: self.tags.clone(),
            meal_type: self.meal_type.clone(),
            image: self.image.clone(),
            user_id: None,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.identifier.is_empty() {
            errors.push("identifier", "email or username is required");
        }
        if self.password.is_empty() {
            errors.push("password", "password is required");
        }
        errors.into_result(())
    }

    pub fn is_email(&self) -> bool {
        is_email(&self.identifier)
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Loose `local@domain.tld` check, enough to tell an email from a username.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
