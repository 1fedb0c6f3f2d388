pub mod generator;
pub mod formatters;

pub use generator::{ReportFormat, ReportGenerator};
pub use formatters::{DotFormatter, JsonFormatter, MarkdownFormatter, TextFormatter};
