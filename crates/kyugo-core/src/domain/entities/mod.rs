pub mod common;
pub mod generation_plan;
pub mod template_data;

pub use common::RelativePath;
pub use generation_plan::{GenerationPlan, PlannedFile};
pub use template_data::TemplateData;
