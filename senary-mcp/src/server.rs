//! JSON-RPC request handling and tool implementations

use senary::{Dimension, EditOutcome, MeasurementSystem, Senary, SenaryError, Value};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "senary";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }

    /// Response for a line that is not valid JSON-RPC
    pub fn parse_error(err: &serde_json::Error) -> Self {
        Self::failure(None, McpError {
            code: PARSE_ERROR,
            message: format!("Parse error: {}", err),
            data: None,
        })
    }
}

pub fn handle_request(senary: &Senary, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(tools_list()),
        "tools/call" => handle_tool_call(senary, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse::success(request.id.clone(), r),
        Err(e) => McpResponse::failure(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Measurement conversion between SI, US customary and seximal (base-6) units"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'list_dimensions' and 'list_units' to discover units, 'convert' for a single conversion and 'sync_panels' to see one value in all three systems at once. Seximal values are base-6 numerals using only the digits 0-5."
    }))
}

fn system_schema() -> JsonValue {
    json!({ "type": "string", "enum": ["si", "us", "seximal"] })
}

fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a measurement between units of the SI, US customary or seximal systems. Seximal targets are returned as base-6 numerals.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert; a base-6 numeral when from_system is seximal"
                        },
                        "dimension": { "type": "string", "description": "Dimension key, e.g. LENGTH" },
                        "from_unit": { "type": "string", "description": "Source unit key, e.g. meter" },
                        "from_system": system_schema(),
                        "to_unit": { "type": "string", "description": "Target unit key, e.g. foot" },
                        "to_system": system_schema()
                    },
                    "required": ["value", "dimension", "from_unit", "from_system", "to_unit", "to_system"]
                }
            },
            {
                "name": "sync_panels",
                "description": "Enter a value in one system and see it in all three (SI, US customary, seximal).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dimension": { "type": "string", "description": "Dimension key, e.g. TEMPERATURE" },
                        "system": system_schema(),
                        "text": { "type": "string", "description": "Value as typed into the panel of that system" },
                        "units": {
                            "type": "object",
                            "description": "Unit per system; defaults to each system's first unit",
                            "properties": {
                                "si": { "type": "string" },
                                "us": { "type": "string" },
                                "seximal": { "type": "string" }
                            }
                        }
                    },
                    "required": ["dimension", "system", "text"]
                }
            },
            {
                "name": "to_seximal",
                "description": "Encode a decimal number as a base-6 numeral.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": "number" },
                        "precision": { "type": "integer", "description": "Maximum fractional base-6 digits" }
                    },
                    "required": ["value"]
                }
            },
            {
                "name": "from_seximal",
                "description": "Decode a base-6 numeral to a decimal number.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "numeral": { "type": "string", "description": "Digits 0-5, optional '-' and one '.'" }
                    },
                    "required": ["numeral"]
                }
            },
            {
                "name": "convert_base",
                "description": "Convert a number literal between decimal and seximal notation.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": "string" },
                        "from_base": { "type": "string", "enum": ["decimal", "seximal"] },
                        "to_base": { "type": "string", "enum": ["decimal", "seximal"] },
                        "precision": { "type": "integer" }
                    },
                    "required": ["value", "from_base", "to_base"]
                }
            },
            {
                "name": "list_dimensions",
                "description": "List the thirteen supported dimensions.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units of one dimension in one system.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dimension": { "type": "string" },
                        "system": system_schema()
                    },
                    "required": ["dimension", "system"]
                }
            },
            {
                "name": "help",
                "description": "Get documentation for a function, or general help.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Function name. Omit for general help." }
                    }
                }
            },
            {
                "name": "list_functions",
                "description": "List all available functions, optionally by category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "enum": ["units", "seximal"] }
                    }
                }
            }
        ]
    })
}

fn handle_tool_call(senary: &Senary, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));
    debug!(tool = name, "tool call");

    match name {
        "convert" => tool_convert(senary, &args),
        "sync_panels" => tool_sync_panels(senary, &args),
        "to_seximal" => tool_function(senary, "to_seximal", &args, &["value", "precision"], 1),
        "from_seximal" => tool_function(senary, "from_seximal", &args, &["numeral"], 1),
        "convert_base" => tool_function(senary, "convert_base", &args, &["value", "from_base", "to_base", "precision"], 3),
        "list_dimensions" => tool_function(senary, "list_dimensions", &args, &[], 0),
        "list_units" => tool_function(senary, "list_units", &args, &["dimension", "system"], 2),
        "help" => {
            let name = args.get("name").and_then(|v| v.as_str());
            let help = senary.help(name);
            Ok(tool_result(format_help(&help), &help))
        }
        "list_functions" => {
            let category = args.get("category").and_then(|v| v.as_str());
            let functions = senary.list_functions(category);
            Ok(tool_result("Functions listed".to_string(), &functions))
        }
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

/// Collect named arguments in order; the first `required` must be present, the rest stop at the first gap
fn positional_args(args: &JsonValue, names: &[&str], required: usize) -> Result<Vec<Value>, McpError> {
    let mut values = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        match args.get(*name) {
            Some(v) if !v.is_null() => values.push(json_to_value(v)),
            _ if i < required => {
                return Err(McpError::invalid_params(format!("Missing {} argument", name)));
            }
            _ => break,
        }
    }
    Ok(values)
}

fn tool_function(
    senary: &Senary,
    function: &str,
    args: &JsonValue,
    names: &[&str],
    required: usize,
) -> Result<JsonValue, McpError> {
    let values = positional_args(args, names, required)?;
    let result = senary.call(function, &values);
    Ok(tool_result(result.to_string(), &result))
}

fn tool_convert(senary: &Senary, args: &JsonValue) -> Result<JsonValue, McpError> {
    let names = ["value", "dimension", "from_unit", "from_system", "to_unit", "to_system"];
    let values = positional_args(args, &names, names.len())?;
    let result = senary.call("convert", &values);

    let text = match &result {
        Value::Error(_) => result.to_string(),
        converted => format!(
            "{} {} = {} {}",
            values[0], values[2], converted, values[4]
        ),
    };
    Ok(tool_result(text, &result))
}

fn tool_sync_panels(senary: &Senary, args: &JsonValue) -> Result<JsonValue, McpError> {
    let dimension: Dimension = match required_str(args, "dimension")?.parse() {
        Ok(d) => d,
        Err(e) => return Ok(tool_error(&SenaryError::from(e))),
    };
    let system: MeasurementSystem = match required_str(args, "system")?.parse() {
        Ok(s) => s,
        Err(e) => return Ok(tool_error(&SenaryError::from(e))),
    };
    let text = required_str(args, "text")?;

    let mut panels = senary.panels(dimension);
    if let Some(units) = args.get("units").and_then(|u| u.as_object()) {
        for target in MeasurementSystem::ALL {
            if let Some(unit) = units.get(target.key()).and_then(|u| u.as_str()) {
                if let Err(e) = panels.select_unit(target, unit) {
                    return Ok(tool_error(&SenaryError::from(e)));
                }
            }
        }
    }

    let outcome = panels.edit(system, text);
    let summary = panels.panels().iter()
        .map(|p| format!("{} ({}): {}", p.system, p.unit, p.text))
        .collect::<Vec<_>>()
        .join("\n");

    let (outcome_json, is_error) = match &outcome {
        EditOutcome::Cleared => (json!({ "kind": "cleared" }), false),
        EditOutcome::SourceOnly(e) => (
            json!({ "kind": "source_only", "error": serde_json::to_value(e).unwrap_or_default() }),
            true,
        ),
        EditOutcome::Synced { failures } => (json!({ "kind": "synced", "failures": failures }), *failures > 0),
    };

    Ok(json!({
        "content": [{ "type": "text", "text": summary }],
        "dimension": dimension.key(),
        "active": panels.active().key(),
        "panels": serde_json::to_value(panels.panels()).unwrap_or_default(),
        "outcome": outcome_json,
        "isError": is_error
    }))
}

fn tool_error(err: &SenaryError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": format!("Error: {}", err) }],
        "error": serde_json::to_value(err).unwrap_or_default(),
        "isError": true
    })
}

/// Wrap a function result; `Value::Error` becomes a tool-level error
fn tool_result(text: String, value: &Value) -> JsonValue {
    match value {
        Value::Error(e) => tool_error(e),
        other => json!({
            "content": [{ "type": "text", "text": text }],
            "data": value_to_json(other),
            "isError": false
        }),
    }
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if out.is_empty() {
                out = help.to_string();
            }
            out
        }
        Value::Error(e) => format!("Error: {}", e.message),
        other => other.to_string(),
    }
}

pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map(Value::Number).unwrap_or_else(|| Value::Text(n.to_string())),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        // JSON has no infinities or NaN
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(n.to_string())),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({ "_error": serde_json::to_value(e).unwrap_or_default() }),
    }
}
