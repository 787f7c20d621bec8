//! Menu item domain model.
//!
//! # Responsibility
//! - Define the fixed-shape record rendered by list and filter views.
//! - Validate raw form input before any item is created.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - `name`, `description` and `course` are trimmed and non-empty.
//! - `price` is finite and strictly greater than zero.
//!
//! # See also
//! - crate::store::menu_store

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one menu item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MenuItemId = String;

/// Input field of the add-item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuField {
    Name,
    Description,
    Price,
    Course,
}

impl MenuField {
    /// Stable lowercase field name used in messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Course => "course",
        }
    }
}

impl Display for MenuField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert text shown when a form field is left empty.
pub const MISSING_FIELD_MESSAGE: &str = "Please fill in all fields.";
/// Alert text shown when the price is not a positive number.
pub const INVALID_PRICE_MESSAGE: &str = "Please enter a valid price greater than 0.";

/// Validation failures for menu item input.
///
/// All variants are user-correctable; callers re-prompt instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuValidationError {
    /// One or more required fields are empty, listed in form order.
    MissingField(Vec<MenuField>),
    /// Price is not a finite number greater than zero. Holds the raw input.
    InvalidPrice(String),
}

impl MenuValidationError {
    /// Stable error code for logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidPrice(_) => "invalid_price",
        }
    }
}

impl Display for MenuValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(_) => f.write_str(MISSING_FIELD_MESSAGE),
            Self::InvalidPrice(_) => f.write_str(INVALID_PRICE_MESSAGE),
        }
    }
}

impl Error for MenuValidationError {}

/// Failures when building a `MenuItem` from an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRecordError {
    EmptyId,
    Field(MenuValidationError),
}

impl Display for MenuRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "menu item id must not be empty"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MenuRecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyId => None,
            Self::Field(err) => Some(err),
        }
    }
}

impl From<MenuValidationError> for MenuRecordError {
    fn from(value: MenuValidationError) -> Self {
        Self::Field(value)
    }
}

/// Raw add-item form values exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    /// Unparsed price text.
    pub price: String,
    pub course: String,
}

impl MenuItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            course: course.into(),
        }
    }

    /// Validates the draft and returns normalized field values.
    ///
    /// Missing fields are checked before the price is parsed, so an empty
    /// price reports `MissingField`, never `InvalidPrice`. Whitespace-only
    /// input counts as empty.
    pub fn validate(&self) -> Result<ValidatedDraft, MenuValidationError> {
        let fields = [
            (MenuField::Name, self.name.as_str()),
            (MenuField::Description, self.description.as_str()),
            (MenuField::Price, self.price.as_str()),
            (MenuField::Course, self.course.as_str()),
        ];
        let missing = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(MenuValidationError::MissingField(missing));
        }

        let price = parse_price(&self.price)?;
        Ok(ValidatedDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            course: self.course.trim().to_string(),
        })
    }
}

/// Normalized field values produced by [`MenuItemDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    name: String,
    description: String,
    price: f64,
    course: String,
}

/// Parses user price text into a positive finite value.
pub fn parse_price(raw: &str) -> Result<f64, MenuValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(MenuValidationError::InvalidPrice(raw.to_string())),
    }
}

/// One entry of the menu.
///
/// Constructed only by the store (from a validated draft) or by
/// deserialization, which re-checks every invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MenuItemRecord")]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: String,
    price: f64,
    course: String,
}

impl MenuItem {
    pub(crate) fn from_validated(id: MenuItemId, draft: ValidatedDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            course: draft.course,
        }
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used by import paths where identity already exists, e.g. restoring a
    /// session snapshot. Text fields are trimmed before validation.
    pub fn with_id(
        id: impl Into<MenuItemId>,
        name: &str,
        description: &str,
        price: f64,
        course: &str,
    ) -> Result<Self, MenuRecordError> {
        Self::try_from(MenuItemRecord {
            id: id.into(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            course: course.to_string(),
        })
    }

    /// Unchecked constructor for built-in data.
    pub(crate) fn from_parts(
        id: &str,
        name: &str,
        description: &str,
        price: f64,
        course: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            course: course.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Free-text course label, e.g. `Starters`.
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), MenuRecordError> {
        if self.id.trim().is_empty() {
            return Err(MenuRecordError::EmptyId);
        }
        let missing = [
            (MenuField::Name, self.name.as_str()),
            (MenuField::Description, self.description.as_str()),
            (MenuField::Course, self.course.as_str()),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(MenuValidationError::MissingField(missing).into());
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(MenuValidationError::InvalidPrice(self.price.to_string()).into());
        }
        Ok(())
    }
}

/// Unchecked wire shape used as the deserialization source.
#[derive(Deserialize)]
struct MenuItemRecord {
    id: MenuItemId,
    name: String,
    description: String,
    price: f64,
    course: String,
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = MenuRecordError;

    fn try_from(value: MenuItemRecord) -> Result<Self, Self::Error> {
        let item = Self {
            id: value.id,
            name: value.name.trim().to_string(),
            description: value.description.trim().to_string(),
            price: value.price,
            course: value.course.trim().to_string(),
        };
        item.validate()?;
        Ok(item)
    }
}
