//! Agent tool adapter exposing the provider lookup as a function tool.

mod find_doctors;

pub use find_doctors::{FIND_DOCTORS_TOOL_NAME, FindDoctorsTool, ToolDefinition};
