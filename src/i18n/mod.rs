pub mod locale;
pub mod translator;
