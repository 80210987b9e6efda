pub mod carousel;
pub mod display;
pub mod prediction;
pub mod route;
pub mod slider;
pub mod workflow;

pub use display::ResultSummary;
pub use prediction::{PredictionResult, SubmissionError};
pub use route::Route;
pub use workflow::{Ticket, Workflow, WorkflowError, WorkflowStatus};
