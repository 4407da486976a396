//! `find_doctors_for_specialty` function tool.
//!
//! Agent hosts register [`FindDoctorsTool::definition`] and forward the
//! model-supplied JSON arguments to [`FindDoctorsTool::call`]. The return value
//! is always the `success`/`error` lookup object.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::domain::LookupResult;
use crate::domain::ports::{LookupRequest, ProviderLookup};

/// Name under which the tool is registered with agent hosts.
pub const FIND_DOCTORS_TOOL_NAME: &str = "find_doctors_for_specialty";

const FIND_DOCTORS_DESCRIPTION: &str = "Find doctors in the public NPI registry who practise a \
     given medical specialty, optionally narrowed to a city and a state (usually a two-letter \
     abbreviation). Returns up to 10 providers with name, credentials, address and phone.";

/// Function-tool definition as exchanged with agent hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Registered tool name.
    pub name: &'static str,
    /// Natural-language description shown to the model.
    pub description: &'static str,
    /// JSON Schema describing the accepted arguments.
    pub parameters: Value,
}

/// Tool adapter over the provider lookup port.
#[derive(Clone)]
pub struct FindDoctorsTool {
    lookup: Arc<dyn ProviderLookup>,
}

impl FindDoctorsTool {
    /// Build the tool around a lookup port implementation.
    pub fn new(lookup: Arc<dyn ProviderLookup>) -> Self {
        Self { lookup }
    }

    /// Definition advertised to agent hosts.
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: FIND_DOCTORS_TOOL_NAME,
            description: FIND_DOCTORS_DESCRIPTION,
            parameters: json!({
                "type": "object",
                "properties": {
                    "specialty": {
                        "type": "string",
                        "description": "Medical specialty, e.g. Dermatology or Cardiology."
                    },
                    "city": {
                        "type": "string",
                        "description": "Optional city to search in."
                    },
                    "state": {
                        "type": "string",
                        "description": "Optional state, usually a two-letter abbreviation such as NY."
                    }
                },
                "required": ["specialty"],
                "additionalProperties": false
            }),
        }
    }

    /// Run the tool with JSON arguments and return the lookup object.
    pub async fn call(&self, arguments: Value) -> Value {
        debug!(tool = FIND_DOCTORS_TOOL_NAME, ?arguments, "tool called");
        let result = match serde_json::from_value::<LookupRequest>(arguments) {
            Ok(request) => self.lookup.lookup(request).await,
            Err(error) => {
                warn!(tool = FIND_DOCTORS_TOOL_NAME, %error, "failed to parse tool arguments");
                LookupResult::Error(format!("invalid arguments: {error}"))
            }
        };
        to_json(&result)
    }

    /// Run the tool with arguments encoded as a JSON string, as most agent
    /// hosts deliver them.
    pub async fn call_raw(&self, arguments: &str) -> Value {
        match serde_json::from_str::<Value>(arguments) {
            Ok(value) => self.call(value).await,
            Err(error) => {
                warn!(tool = FIND_DOCTORS_TOOL_NAME, %error, "tool arguments are not JSON");
                to_json(&LookupResult::Error(format!("invalid arguments: {error}")))
            }
        }
    }
}

fn to_json(result: &LookupResult) -> Value {
    match serde_json::to_value(result) {
        Ok(value) => value,
        Err(error) => json!({ "error": format!("failed to encode lookup result: {error}") }),
    }
}
