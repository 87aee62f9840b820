pub mod error;
pub mod features;
pub mod logger;
pub mod validation;
