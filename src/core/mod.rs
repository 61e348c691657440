pub mod normalizer;
pub mod rules;

pub use crate::domain::model::{Outcome, RunReport, Variant};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
