//! Outreach forms: edit, validate, submit, reset.
//!
//! A [`Form`] holds the values of one of the site's forms. Submitting checks
//! that every required field is filled in, then logs the submission locally,
//! shows a confirmation toast and clears the form. There is no backend: the
//! returned [`Submission`] is the hand-off point for one.

pub mod notify;
pub mod schema;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};

pub use notify::{Notification, Notifier, Toaster, Variant};
pub use schema::{FieldKind, FieldSpec, FormKind, FormSchema};

/// Title of the toast shown when required fields are missing.
pub const MISSING_FIELDS_TITLE: &str = "Please fill in all required fields";

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// Value held by a field. Serializes as a bare string, array, or bool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choices(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Select(_) => FieldValue::Text(String::new()),
            FieldKind::Checkboxes(_) => FieldValue::Choices(Vec::new()),
            FieldKind::Flag => FieldValue::Flag(false),
        }
    }

    /// Whether the value counts as filled in for a required field.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Choices(choices) => !choices.is_empty(),
            FieldValue::Flag(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            FieldValue::Choices(choices) => Some(choices),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A validated form payload: field name to value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: FormKind,
    pub fields: BTreeMap<&'static str, FieldValue>,
}

impl Submission {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Editable state of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    schema: &'static FormSchema,
    values: Vec<FieldValue>,
}

impl Form {
    /// An empty form of the given kind.
    pub fn new(kind: FormKind) -> Self {
        let schema = kind.schema();
        Self {
            schema,
            values: schema
                .fields
                .iter()
                .map(|spec| FieldValue::empty(spec.kind))
                .collect(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        let (index, _) = self.schema.field(name)?;
        self.values.get(index)
    }

    /// Set a free-text field.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let (index, spec) = self.lookup(name)?;
        match spec.kind {
            FieldKind::Text => {
                self.values[index] = FieldValue::Text(value.into());
                Ok(())
            }
            _ => Err(kind_error(spec, "text")),
        }
    }

    /// Pick an option of a select field. An empty value clears the selection.
    pub fn select(&mut self, name: &str, option: &str) -> Result<()> {
        let (index, spec) = self.lookup(name)?;
        let FieldKind::Select(options) = spec.kind else {
            return Err(kind_error(spec, "a single option"));
        };
        if !option.is_empty() && !options.contains(&option) {
            return Err(Error::UnknownOption {
                field: spec.name,
                value: option.to_owned(),
            });
        }
        self.values[index] = FieldValue::Text(option.to_owned());
        Ok(())
    }

    /// Check or uncheck one option of a checkbox group. Options keep the
    /// order in which they were checked.
    pub fn toggle_choice(&mut self, name: &str, option: &str, checked: bool) -> Result<()> {
        let (index, spec) = self.lookup(name)?;
        let FieldKind::Checkboxes(options) = spec.kind else {
            return Err(kind_error(spec, "a set of options"));
        };
        if !options.contains(&option) {
            return Err(Error::UnknownOption {
                field: spec.name,
                value: option.to_owned(),
            });
        }
        if let FieldValue::Choices(choices) = &mut self.values[index] {
            if checked {
                if !choices.iter().any(|c| c == option) {
                    choices.push(option.to_owned());
                }
            } else {
                choices.retain(|c| c != option);
            }
        }
        Ok(())
    }

    /// Set a yes/no field.
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        let (index, spec) = self.lookup(name)?;
        match spec.kind {
            FieldKind::Flag => {
                self.values[index] = FieldValue::Flag(value);
                Ok(())
            }
            _ => Err(kind_error(spec, "a flag")),
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| spec.required && !value.is_present())
            .map(|(spec, _)| spec.name)
            .collect()
    }

    /// Validate and submit.
    ///
    /// On a missing required field the visitor is told so, nothing is
    /// submitted and the form keeps its values. On success the submission is
    /// logged, a confirmation is shown and the form is cleared.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<Submission> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            warn!(form = %self.kind(), ?missing, "submission rejected");
            let variant = if self.schema.destructive_validation {
                Variant::Destructive
            } else {
                Variant::Default
            };
            notifier.notify(Notification::new(MISSING_FIELDS_TITLE).with_variant(variant));
            return Err(Error::Validation { missing });
        }

        let submission = Submission {
            form: self.kind(),
            fields: self
                .schema
                .fields
                .iter()
                .map(|spec| spec.name)
                .zip(self.values.iter().cloned())
                .collect(),
        };
        let payload = submission.to_json()?;
        info!(form = %self.kind(), %payload, "{}", self.schema.log_label);

        notifier.notify(
            Notification::new(self.schema.success_title)
                .with_description(self.schema.success_description),
        );
        self.reset();
        Ok(submission)
    }

    /// Clear every field back to its empty default.
    pub fn reset(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(self.schema.fields) {
            *value = FieldValue::empty(spec.kind);
        }
    }

    /// Whether every field holds its empty default.
    pub fn is_pristine(&self) -> bool {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .all(|(spec, value)| *value == FieldValue::empty(spec.kind))
    }

    fn lookup(&self, name: &str) -> Result<(usize, &'static FieldSpec)> {
        self.schema.field(name).ok_or_else(|| Error::UnknownField {
            form: self.schema.kind.name(),
            field: name.to_owned(),
        })
    }
}

fn kind_error(spec: &FieldSpec, attempted: &'static str) -> Error {
    Error::FieldKind {
        field: spec.name,
        attempted,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
