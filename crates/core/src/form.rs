//! Field-level validation primitives shared by every input form.
//!
//! A submission arrives as [`FormData`] (raw field name -> raw string value).
//! Each field is described once by a [`FieldSpec`]; cleaning a field either
//! yields its normalized value or records a [`FieldError`] under the field's
//! name in a [`FieldErrors`] accumulator. Forms keep going after the first
//! failure so the caller sees every invalid field at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw submitted values, keyed by field name.
///
/// Absent keys and empty strings are treated identically by required-field
/// checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for tests and prefill.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Category of a field-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required value absent or empty after normalization.
    MissingField,
    /// Value not among the permitted choices.
    InvalidChoice,
    /// Value longer than the field allows.
    LengthExceeded,
    /// Value must equal another field and does not.
    Mismatch,
    /// Value is not a parseable calendar date.
    MalformedDate,
    /// Value has the wrong shape (e.g. email, username characters).
    InvalidFormat,
    /// Value was rejected by a persistence collaborator (e.g. already taken).
    Rejected,
}

/// A single error attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "code")]
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing() -> Self {
        Self::new(ErrorKind::MissingField, "This field is required.")
    }

    pub fn invalid_choice(value: &str) -> Self {
        Self::new(
            ErrorKind::InvalidChoice,
            format!("Select a valid choice. {value} is not one of the available choices."),
        )
    }

    pub fn length_exceeded(max: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::LengthExceeded,
            format!("Ensure this value has at most {max} characters (it has {actual})."),
        )
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Mismatch, message)
    }

    pub fn malformed_date() -> Self {
        Self::new(ErrorKind::MalformedDate, "Enter a valid date.")
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Rejected, message)
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Accumulated field errors: field name -> one or more errors.
///
/// Serializes as a JSON object so a web layer can hand it straight back to
/// the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single error.
    pub fn single(field: impl Into<String>, error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.add(field, error);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.entry(field.into()).or_default().push(error);
    }

    /// Fold another set of errors into this one, preserving per-field order.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, errors) in other.0 {
            self.0.entry(field).or_default().extend(errors);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields carrying at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> &[FieldError] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` carries an error of the given kind.
    pub fn has(&self, field: &str, kind: ErrorKind) -> bool {
        self.get(field).iter().any(|e| e.kind == kind)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value())` when no errors were recorded, otherwise `Err(self)`.
    ///
    /// `value` only runs on success, so it may rely on every field having
    /// cleaned successfully.
    pub fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        if !self.is_empty() {
            return Err(self);
        }
        value().ok_or(self)
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, errors) in &self.0 {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// How a field is rendered by a form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Widget {
    Text,
    Email,
    Password,
    Select,
    Date,
    TextArea { rows: Option<u8> },
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Maximum length in characters (not bytes).
    pub max_length: Option<usize>,
    /// Strip leading/trailing whitespace before validating.
    pub strip: bool,
    pub widget: Widget,
    pub help_text: Option<&'static str>,
}

impl FieldSpec {
    /// A required, stripped text field with no length limit.
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            max_length: None,
            strip: true,
            widget: Widget::Text,
            help_text: None,
        }
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn unstripped(mut self) -> Self {
        self.strip = false;
        self
    }

    pub const fn widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub const fn help_text(mut self, text: &'static str) -> Self {
        self.help_text = Some(text);
        self
    }

    /// Apply presence and length rules to this field's raw value.
    ///
    /// Returns the normalized value, or `None` when the field is empty (optional
    /// fields) or invalid (the error is recorded in `errors`).
    pub fn clean(&self, data: &FormData, errors: &mut FieldErrors) -> Option<String> {
        let raw = data.get(self.name).unwrap_or("");
        let value = if self.strip { raw.trim() } else { raw };

        if value.is_empty() {
            if self.required {
                errors.add(self.name, FieldError::missing());
            }
            return None;
        }

        if let Some(max) = self.max_length {
            let actual = value.chars().count();
            if actual > max {
                errors.add(self.name, FieldError::length_exceeded(max, actual));
                return None;
            }
        }

        Some(value.to_string())
    }
}
