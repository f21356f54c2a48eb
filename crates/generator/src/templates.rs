//! Template loading and the service attribute filters

use listtags_gen_common::{naming, services, GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Name the tag listing template is registered under
pub const LIST_TAGS_TEMPLATE: &str = "list_tags.rs";

/// Load the tag listing template with all filters registered
pub fn load_templates() -> Result<Tera> {
    load_templates_from(include_str!("../templates/list_tags.rs.tera"))
}

pub(crate) fn load_templates_from(source: &str) -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("capitalize", capitalize_filter);
    tera.register_filter("snake_case", snake_case_filter);
    tera.register_filter("list_tags_function", list_tags_function_filter);
    tera.register_filter("identifier_field", identifier_field_filter);
    tera.register_filter("identifier_requires_slice", identifier_requires_slice_filter);
    tera.register_filter("resource_type_field", resource_type_field_filter);
    tera.register_filter("tags_field", tags_field_filter);
    tera.register_filter("tags_expression", tags_expression_filter);
    tera.register_filter("sdk_crate", sdk_crate_filter);
    tera.register_filter("client_type", client_type_filter);

    tera.add_raw_template(LIST_TAGS_TEMPLATE, source)
        .map_err(|e| GeneratorError::TemplateParse(error_chain(&e)))?;

    Ok(tera)
}

/// Flatten a tera error and its sources into one message
///
/// Tera's top-level message only names the template; the cause is in the chain.
pub(crate) fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

fn string_arg<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{} filter expects a string", filter)))
}

/// Filter to capitalize first letter, leaving the rest as is
fn capitalize_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg("capitalize", value)?;
    Ok(Value::String(naming::title_case(s)))
}

fn snake_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = string_arg("snake_case", value)?;
    Ok(Value::String(naming::snake_case(s)))
}

fn list_tags_function_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let service = string_arg("list_tags_function", value)?;
    Ok(Value::String(services::list_tags_function(service).to_string()))
}

fn identifier_field_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let service = string_arg("identifier_field", value)?;
    Ok(Value::String(services::identifier_field(service).to_string()))
}

fn identifier_requires_slice_filter(
    value: &Value,
    _args: &HashMap<String, Value>,
) -> tera::Result<Value> {
    let service = string_arg("identifier_requires_slice", value)?;
    Ok(Value::Bool(services::identifier_requires_slice(service)))
}

/// Empty string when the service takes no resource type, so `if` treats it as false
fn resource_type_field_filter(
    value: &Value,
    _args: &HashMap<String, Value>,
) -> tera::Result<Value> {
    let service = string_arg("resource_type_field", value)?;
    let field = services::resource_type_field(service).unwrap_or_default();
    Ok(Value::String(field.to_string()))
}

fn tags_field_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let service = string_arg("tags_field", value)?;
    Ok(Value::String(services::tags_field(service).to_string()))
}

fn tags_expression_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let path = string_arg("tags_expression", value)?;
    Ok(Value::String(naming::tags_expression(path)))
}

fn sdk_crate_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let service = string_arg("sdk_crate", value)?;
    Ok(Value::String(services::sdk_crate(service)))
}

fn client_type_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let service = string_arg("client_type", value)?;
    Ok(Value::String(services::client_type(service)))
}
