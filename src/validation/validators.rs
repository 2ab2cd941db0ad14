use regex::Regex;
use validator::ValidationError;

use super::rules::FieldRule;

pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

lazy_static! {
    static ref PASSWORD_CHARSET_REGEX: Regex = Regex::new(r"^[A-Za-z0-9@$!%*?&]{6,}$").unwrap();
}

/// At least six characters drawn from letters, digits and [`PASSWORD_SYMBOLS`],
/// with one of each of lowercase, uppercase, digit and symbol.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    let strong = PASSWORD_CHARSET_REGEX.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    match strong {
        true => Ok(()),
        false => Err(ValidationError::new("password_validation")),
    }
}

pub fn name_validation() -> FieldRule {
    FieldRule::body("name")
        .trim()
        .min_length(3, "Minimum 3 characters required for the name")
        .escape()
        .not_empty("Name can not be empty!")
}

pub fn title_validation() -> FieldRule {
    FieldRule::body("title")
        .trim()
        .length(
            Some(3),
            Some(255),
            "Required characters for the title are between 3 and 255!",
        )
        .escape()
        .not_empty("title can not be empty!")
}

pub fn content_validation() -> FieldRule {
    FieldRule::body("content")
        .trim()
        .length(
            Some(3),
            Some(500),
            "Required characters for the content are between 3 and 500!",
        )
        .escape()
        .not_empty("Content can not be empty!")
}

pub fn code_validation() -> FieldRule {
    FieldRule::body("code")
        .trim()
        .max_length(3, "Maximum 3 characters required for the code")
        .escape()
        .not_empty("code can not be empty!")
}

pub fn language_direction_validation() -> FieldRule {
    FieldRule::body("direction")
        .trim()
        .max_length(3, "Maximum 3 characters required for the direction")
        .escape()
        .not_empty("direction can not be empty!")
}

pub fn email_validation() -> FieldRule {
    FieldRule::body("email")
        .trim()
        .email("errors.email")
        .not_empty("errors.email")
}

pub fn password_validation() -> FieldRule {
    FieldRule::body("password")
        .custom(
            validate_password,
            "Password should be at least 6 charaters and contains capital, small ,numbers and spical charaters",
        )
        .not_empty("Password can not be empty!")
}

pub fn phone_validation() -> FieldRule {
    FieldRule::body("phone")
        .min_length(6, "Minimum 6 characters required for the phone!")
        .optional()
}

// Enforces a minimum even though the message speaks of a maximum.
pub fn bio_validation() -> FieldRule {
    FieldRule::body("bio")
        .min_length(250, "Maxmium 250 characters required for the bio!")
        .optional()
}

pub fn description_validation() -> FieldRule {
    FieldRule::body("description")
        .max_length(250, "Maxmium 250 characters required for the description!")
        .optional()
}

pub fn address_validation() -> FieldRule {
    FieldRule::body("address")
        .max_length(250, "Maxmium 250 characters required for the address!")
        .optional()
}

pub fn image_validation() -> FieldRule {
    FieldRule::file("image", "The icon is invalid")
}

pub fn logo_validation() -> FieldRule {
    FieldRule::file("logo", "The logo is invalid")
}

pub fn banner_validation() -> FieldRule {
    FieldRule::file("banner", "The banner image is invalid")
}
