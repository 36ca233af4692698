pub mod calculator;
pub mod catalog;
pub mod engine;
pub mod formatter;
pub mod report;

pub use crate::domain::model::{Complexity, LineItem, Module, ProjectDuration, QuoteRequest, QuoteResult};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
