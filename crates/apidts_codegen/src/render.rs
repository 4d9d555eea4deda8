use std::sync::LazyLock;

use handlebars::Handlebars;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::{
    CodegenResult, FieldMap, TypeMap,
    case::property_key,
    handlers::HandlerTypes,
    model::FieldDescriptor,
};

/// Declaration template used when no custom template is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/dts.hbs");

const TEMPLATE_NAME: &str = "dts";

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid html tag regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

#[derive(Debug, Serialize)]
struct DeclarationContext<'a> {
    module_name: &'a str,
    services: Vec<ServiceContext>,
}

#[derive(Debug, Serialize)]
struct ServiceContext {
    name: String,
    handlers: Vec<HandlerContext>,
}

#[derive(Debug, Serialize)]
struct HandlerContext {
    name: String,
    method: String,
    url: String,
    title: Option<String>,
    request_type: Option<String>,
    response_type: Option<String>,
    interfaces: Vec<InterfaceContext>,
}

#[derive(Debug, Serialize)]
struct InterfaceContext {
    name: String,
    fields: Vec<PropertyContext>,
}

#[derive(Debug, Serialize)]
struct PropertyContext {
    key: String,
    optional: bool,
    ty: String,
    description: Option<String>,
}

/// Renders grouped handler types into a declaration file.
///
/// `template` is a handlebars template; [`DEFAULT_TEMPLATE`] is used when `None`.
///
/// # Errors
///
/// Fails if the template does not parse or cannot be rendered.
pub fn render_declarations(
    module_name: &str,
    services: &IndexMap<String, Vec<HandlerTypes>>,
    template: Option<&str>,
) -> CodegenResult<String> {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(handlebars::no_escape);
    hb.register_template_string(TEMPLATE_NAME, template.unwrap_or(DEFAULT_TEMPLATE))
        .map_err(Box::new)?;

    let ctx = DeclarationContext {
        module_name,
        services: services
            .iter()
            .map(|(name, handlers)| ServiceContext {
                name: name.clone(),
                handlers: handlers.iter().map(handler_context).collect(),
            })
            .collect(),
    };
    debug!(
        "Rendering {} services for module `{module_name}`",
        ctx.services.len()
    );

    Ok(hb.render(TEMPLATE_NAME, &ctx).map_err(Box::new)?)
}

fn handler_context(handler: &HandlerTypes) -> HandlerContext {
    let interfaces = [&handler.request, &handler.response]
        .into_iter()
        .flatten()
        .flat_map(TypeMap::iter)
        .map(|(name, fields)| interface_context(name, fields))
        .collect();

    HandlerContext {
        name: handler.name.clone(),
        method: handler.method.clone(),
        url: comment_text(&handler.url),
        title: handler.title.as_deref().and_then(doc_comment),
        request_type: handler.request_type().map(str::to_string),
        response_type: handler.response_type().map(str::to_string),
        interfaces,
    }
}

fn interface_context(name: &str, fields: &FieldMap) -> InterfaceContext {
    InterfaceContext {
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(key, field)| PropertyContext {
                key: property_key(key),
                optional: field.optional,
                ty: ts_type(field),
                description: field.description.as_deref().and_then(doc_comment),
            })
            .collect(),
    }
}

/// TypeScript type expression for a descriptor.
///
/// Array suffixes are kept, known apidoc primitives are lowered
/// (`String` -> `string`) and any other token, including synthetic type
/// names, is used verbatim. Allowed values become a literal union.
pub fn ts_type(field: &FieldDescriptor) -> String {
    let (base, dims) = peel_arrays(field.ty.trim());

    let ty = match field.allowed_values.as_deref() {
        Some(values) if !values.is_empty() => values
            .iter()
            .map(|v| literal(base, v))
            .collect::<Vec<_>>()
            .join(" | "),
        _ => primitive(base).map_or_else(|| base.to_string(), str::to_string),
    };

    if dims == 0 {
        ty
    } else if ty.contains(" | ") {
        format!("({ty}){}", "[]".repeat(dims))
    } else {
        format!("{ty}{}", "[]".repeat(dims))
    }
}

fn peel_arrays(mut ty: &str) -> (&str, usize) {
    let mut dims = 0;
    while let Some(inner) = ty.strip_suffix("[]") {
        ty = inner.trim_end();
        dims += 1;
    }
    (ty, dims)
}

fn primitive(token: &str) -> Option<&'static str> {
    let ty = match token.to_ascii_lowercase().as_str() {
        "string" => "string",
        "number" | "integer" | "int" | "float" | "double" => "number",
        "boolean" | "bool" => "boolean",
        "object" => "object",
        "null" => "null",
        "any" | "mixed" => "any",
        _ => return None,
    };
    Some(ty)
}

/// Literal type for an allowed value. apidoc keeps the quotes it was given,
/// so quoted values are unwrapped before being re-quoted.
fn literal(base: &str, value: &str) -> String {
    let value = value.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)));

    if let Some(inner) = unquoted {
        return serde_json::Value::String(inner.into()).to_string();
    }

    match primitive(base) {
        Some("number") if value.parse::<f64>().is_ok() => value.to_string(),
        Some("boolean") if value == "true" || value == "false" => value.to_string(),
        _ => serde_json::Value::String(value.into()).to_string(),
    }
}

/// Single-line doc comment text from apidoc's HTML description
fn doc_comment(html: &str) -> Option<String> {
    let text = comment_text(&HTML_TAG.replace_all(html, " "));
    (!text.is_empty()).then_some(text)
}

/// Collapses whitespace so `text` stays on one line and cannot close the comment
fn comment_text(text: &str) -> String {
    WHITESPACE
        .replace_all(text.trim(), " ")
        .replace("*/", "*\\/")
}
