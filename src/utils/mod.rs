pub mod error;
pub mod post_validation;
