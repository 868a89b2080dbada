//! Tool Definitions
//!
//! Declares the callable operations and their JSON input schemas as the
//! protocol front-end advertises them.

use serde::Serialize;
use serde_json::{json, Value};

// == Tool Names ==
pub const GET_PACKAGE_README: &str = "get_package_readme";
pub const GET_PACKAGE_INFO: &str = "get_package_info";
pub const SEARCH_PACKAGES: &str = "search_packages";

// == Tool Definition ==
/// A callable operation: name, human description and JSON input schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The three operations this server exposes.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_PACKAGE_README,
            description: "Get package README and usage examples from npm registry",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "package_name": {
                        "type": "string",
                        "description": "The name of the npm package",
                    },
                    "version": {
                        "type": "string",
                        "description": "The version of the package (default: \"latest\")",
                        "default": "latest",
                    },
                    "include_examples": {
                        "type": "boolean",
                        "description": "Whether to include usage examples (default: true)",
                        "default": true,
                    },
                },
                "required": ["package_name"],
            }),
        },
        ToolDefinition {
            name: GET_PACKAGE_INFO,
            description: "Get package basic information and dependencies from npm registry",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "package_name": {
                        "type": "string",
                        "description": "The name of the npm package",
                    },
                    "include_dependencies": {
                        "type": "boolean",
                        "description": "Whether to include dependencies (default: true)",
                        "default": true,
                    },
                    "include_dev_dependencies": {
                        "type": "boolean",
                        "description": "Whether to include development dependencies (default: false)",
                        "default": false,
                    },
                },
                "required": ["package_name"],
            }),
        },
        ToolDefinition {
            name: SEARCH_PACKAGES,
            description: "Search for packages in npm registry",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query",
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of results to return (default: 20)",
                        "default": 20,
                        "minimum": 1,
                        "maximum": 250,
                    },
                    "quality": {
                        "type": "number",
                        "description": "Minimum quality score (0-1)",
                        "minimum": 0,
                        "maximum": 1,
                    },
                    "popularity": {
                        "type": "number",
                        "description": "Minimum popularity score (0-1)",
                        "minimum": 0,
                        "maximum": 1,
                    },
                },
                "required": ["query"],
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tools_declared() {
        let tools = tool_definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![GET_PACKAGE_README, GET_PACKAGE_INFO, SEARCH_PACKAGES]
        );
    }

    #[test]
    fn test_schemas_declare_required_fields() {
        for tool in tool_definitions() {
            let required = tool.input_schema["required"].as_array().unwrap();
            assert!(!required.is_empty(), "tool {} has no required fields", tool.name);
        }
    }

    #[test]
    fn test_definition_serializes_input_schema_key() {
        let json = serde_json::to_value(&tool_definitions()[0]).unwrap();
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }
}
