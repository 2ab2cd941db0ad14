use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::i18n::translator::Translator;

use super::rules::UPLOAD_ERROR_PARAM;

#[derive(Debug, Clone)]
pub struct FieldViolation {
    pub field: &'static str,
    pub error: ValidationError,
}

impl FieldViolation {
    /// Message key of the violation, falling back to its code.
    pub fn key(&self) -> &str {
        self.error.message.as_deref().unwrap_or(&*self.error.code)
    }

    pub fn render(&self, translator: &Translator, locale: &str) -> String {
        let message = translator.translate(locale, self.key());

        match self
            .error
            .params
            .get(UPLOAD_ERROR_PARAM)
            .and_then(Value::as_str)
        {
            Some(detail) => format!("{}: {}", message, detail),
            None => message,
        }
    }
}

/// Every violation found while validating one request, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome(Vec<FieldViolation>);

impl ValidationOutcome {
    pub fn push(&mut self, field: &'static str, error: ValidationError) {
        self.0.push(FieldViolation { field, error });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn messages(&self, translator: &Translator, locale: &str) -> Vec<String> {
        self.0
            .iter()
            .map(|violation| violation.render(translator, locale))
            .collect()
    }
}

impl From<ValidationErrors> for ValidationOutcome {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        let mut outcome = Self::default();
        for (field, errors) in fields {
            for error in errors {
                outcome.push(field, error.clone());
            }
        }

        outcome
    }
}
