use std::{borrow::Cow, fmt};

use regex::Regex;
use serde_json::{Map, Value};
use validator::{validate_email, validate_length, ValidationError};

use super::{input::RequestInput, outcome::ValidationOutcome};

lazy_static! {
    static ref TLD_REGEX: Regex = Regex::new(r"(?i)\.(\p{L}{2,}|xn[a-z0-9-]{2,})$").unwrap();
}

/// Email syntax plus a dotted domain ending in a top level domain.
pub fn is_email(value: &str) -> bool {
    let domain = match value.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => return false,
    };

    validate_email(value) && TLD_REGEX.is_match(domain)
}

pub type CustomCheck = fn(&str) -> Result<(), ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Skipped entirely when the field is absent or null.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitizer {
    Trim,
    Escape,
}

impl Sanitizer {
    pub fn apply(&self, value: &str) -> String {
        match *self {
            Self::Trim => value.trim().to_string(),
            Self::Escape => escape(value),
        }
    }
}

/// Replaces the characters that are unsafe in HTML with their entities.
pub fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '/' => result.push_str("&#x2F;"),
            '\\' => result.push_str("&#x5C;"),
            '`' => result.push_str("&#96;"),
            _ => result.push(c),
        }
    }

    result
}

#[derive(Clone)]
pub enum Constraint {
    Length { min: Option<u64>, max: Option<u64> },
    Email,
    Custom(CustomCheck),
    NotEmpty,
    /// Passes when a file was uploaded under the rule's field.
    FileExists,
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { min, max } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Email => f.write_str("Email"),
            Self::Custom(_) => f.write_str("Custom"),
            Self::NotEmpty => f.write_str("NotEmpty"),
            Self::FileExists => f.write_str("FileExists"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Key(&'static str),
    /// Completed with the request's upload error, lower-cased.
    Upload(&'static str),
}

pub const UPLOAD_ERROR_PARAM: &str = "upload_error";

#[derive(Debug, Clone)]
pub struct Check {
    pub constraint: Constraint,
    pub message: Message,
}

impl Check {
    fn test(&self, field: &str, value: &str, input: &RequestInput) -> Result<(), ValidationError> {
        let result = match &self.constraint {
            Constraint::Length { min, max } => match validate_length(value, *min, *max, None) {
                true => Ok(()),
                false => Err(ValidationError::new("length")),
            },
            Constraint::Email => match is_email(value) {
                true => Ok(()),
                false => Err(ValidationError::new("email")),
            },
            Constraint::Custom(check) => check(value),
            Constraint::NotEmpty => match value.is_empty() {
                true => Err(ValidationError::new("required")),
                false => Ok(()),
            },
            Constraint::FileExists => match input.files.first(field) {
                Some(_) => Ok(()),
                None => Err(ValidationError::new("file")),
            },
        };

        result.map_err(|error| self.describe(error, input))
    }

    fn describe(&self, mut error: ValidationError, input: &RequestInput) -> ValidationError {
        match self.message {
            Message::Key(key) => {
                error.message = Some(Cow::Borrowed(key));
            }
            Message::Upload(prefix) => {
                error.message = Some(Cow::Borrowed(prefix));
                error.add_param(
                    Cow::Borrowed(UPLOAD_ERROR_PARAM),
                    &input.upload_error.message().to_lowercase(),
                );
            }
        }

        error
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    Sanitize(Sanitizer),
    Check(Check),
}

/// Ordered chain of sanitizers and checks for a single request field.
///
/// Steps run in declaration order against a running value, so a check only
/// sees the sanitizers declared before it.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: &'static str,
    presence: Presence,
    steps: Vec<Step>,
}

#[derive(Debug, Default)]
pub struct FieldOutcome {
    /// Sanitized value to write back, when the field was present and changed.
    pub value: Option<String>,
    pub errors: Vec<ValidationError>,
}

impl FieldRule {
    pub fn body(field: &'static str) -> Self {
        Self {
            field,
            presence: Presence::Required,
            steps: Vec::new(),
        }
    }

    pub fn file(field: &'static str, message_prefix: &'static str) -> Self {
        Self::body(field).check(Constraint::FileExists, Message::Upload(message_prefix))
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn trim(self) -> Self {
        self.sanitize(Sanitizer::Trim)
    }

    pub fn escape(self) -> Self {
        self.sanitize(Sanitizer::Escape)
    }

    pub fn length(self, min: Option<u64>, max: Option<u64>, message: &'static str) -> Self {
        self.check(Constraint::Length { min, max }, Message::Key(message))
    }

    pub fn min_length(self, min: u64, message: &'static str) -> Self {
        self.length(Some(min), None, message)
    }

    pub fn max_length(self, max: u64, message: &'static str) -> Self {
        self.length(None, Some(max), message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.check(Constraint::Email, Message::Key(message))
    }

    pub fn custom(self, check: CustomCheck, message: &'static str) -> Self {
        self.check(Constraint::Custom(check), Message::Key(message))
    }

    pub fn not_empty(self, message: &'static str) -> Self {
        self.check(Constraint::NotEmpty, Message::Key(message))
    }

    fn sanitize(mut self, sanitizer: Sanitizer) -> Self {
        self.steps.push(Step::Sanitize(sanitizer));
        self
    }

    fn check(mut self, constraint: Constraint, message: Message) -> Self {
        self.steps.push(Step::Check(Check {
            constraint,
            message,
        }));
        self
    }

    fn required_check(&self) -> Option<&Check> {
        self.steps.iter().find_map(|step| match step {
            Step::Check(check) if matches!(check.constraint, Constraint::NotEmpty) => Some(check),
            _ => None,
        })
    }

    fn sanitizes(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, Step::Sanitize(_)))
    }

    pub fn run(&self, input: &RequestInput) -> FieldOutcome {
        let raw = match input.body.get(self.field) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.to_string()),
            Some(other) => Some(other.to_string()),
        };

        let mut outcome = FieldOutcome::default();
        let present = raw.is_some();
        let stringified = matches!(
            input.body.get(self.field),
            Some(Value::Number(_) | Value::Bool(_))
        );

        let mut value = match raw {
            Some(value) => value,
            None => match self.presence {
                Presence::Optional => return outcome,
                Presence::Required => {
                    if let Some(check) = self.required_check() {
                        let error = ValidationError::new("required");
                        outcome.errors.push(check.describe(error, input));
                        return outcome;
                    }

                    String::new()
                }
            },
        };

        for step in &self.steps {
            match step {
                Step::Sanitize(sanitizer) => value = sanitizer.apply(&value),
                Step::Check(check) => {
                    if let Err(error) = check.test(self.field, &value, input) {
                        outcome.errors.push(error);
                    }
                }
            }
        }

        if present && (stringified || self.sanitizes()) {
            outcome.value = Some(value);
        }

        outcome
    }
}

/// The rules guarding one route, evaluated together in order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet(Vec<FieldRule>);

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.0
    }

    /// Runs every rule and returns the sanitized body with all failures.
    pub fn run(&self, input: &RequestInput) -> (Map<String, Value>, ValidationOutcome) {
        let mut body = input.body.clone();
        let mut outcome = ValidationOutcome::default();

        for rule in &self.0 {
            let result = rule.run(input);

            if let Some(value) = result.value {
                body.insert(rule.field.to_string(), Value::String(value));
            }

            for error in result.errors {
                outcome.push(rule.field, error);
            }
        }

        (body, outcome)
    }
}
