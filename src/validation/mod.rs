pub mod errors;
pub mod input;
pub mod middleware;
pub mod outcome;
pub mod predicates;
pub mod rules;
pub mod upload;
pub mod validators;
