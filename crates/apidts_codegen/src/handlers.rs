use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    CodegenResult, TypeMap,
    case::service_name,
    model::{ApiHandler, FieldGroups},
    typegen::generate_types,
};

/// Which parts of `api_data.json` become types, and how they are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// HTTP methods to include, compared case-insensitively. Empty includes all.
    pub methods: Vec<String>,
    /// Parameter group used for request types
    pub request_group: String,
    /// Success group used for response types
    pub response_group: String,
    /// Appended to the handler name to form the request root type
    pub request_suffix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            methods: vec![],
            request_group: "Parameter".into(),
            response_group: "Success 200".into(),
            request_suffix: "Params".into(),
        }
    }
}

impl GenerateOptions {
    pub fn includes_method(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

/// Request and response types synthesized for one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerTypes {
    pub name: String,
    pub method: String,
    pub url: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<TypeMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<TypeMap>,
}

impl HandlerTypes {
    /// Builds the request and response types of `handler`. Each side is built
    /// independently and is `None` when its field group is absent.
    ///
    /// # Errors
    ///
    /// Propagates type synthesis errors, tagged with the handler name.
    pub fn build(handler: &ApiHandler, options: &GenerateOptions) -> CodegenResult<Self> {
        let request = section_types(
            handler.parameter.as_ref(),
            &options.request_group,
            &format!("{}{}", handler.name, options.request_suffix),
        )
        .map_err(|e| e.in_handler(&handler.name))?;

        let response = section_types(
            handler.success.as_ref(),
            &options.response_group,
            &handler.name,
        )
        .map_err(|e| e.in_handler(&handler.name))?;

        Ok(Self {
            name: handler.name.clone(),
            method: handler.method.to_uppercase(),
            url: handler.url.clone(),
            group: handler.group.clone(),
            title: handler.title.clone(),
            request,
            response,
        })
    }

    /// Root name of the request type, if any
    pub fn request_type(&self) -> Option<&str> {
        self.request.as_ref()?.keys().next().map(String::as_str)
    }

    /// Root name of the response type, if any
    pub fn response_type(&self) -> Option<&str> {
        self.response.as_ref()?.keys().next().map(String::as_str)
    }
}

fn section_types(
    section: Option<&FieldGroups>,
    group: &str,
    type_name: &str,
) -> CodegenResult<Option<TypeMap>> {
    section
        .and_then(|s| s.group(group))
        .map(|fields| generate_types(fields, type_name))
        .transpose()
}

/// Builds types for every handler matching `options`.
///
/// Handlers with neither a request nor a response group are skipped.
///
/// # Errors
///
/// Stops at the first handler whose fields are malformed.
pub fn build_handler_types(
    handlers: &[ApiHandler],
    options: &GenerateOptions,
) -> CodegenResult<Vec<HandlerTypes>> {
    let mut built = Vec::new();

    for handler in handlers {
        if !options.includes_method(&handler.method) {
            debug!(
                "Skipping {} {} ({}): method not selected",
                handler.method, handler.url, handler.name
            );
            continue;
        }

        let types = HandlerTypes::build(handler, options)?;
        if types.request.is_none() && types.response.is_none() {
            warn!(
                "Skipping `{}`: no `{}` or `{}` fields documented",
                handler.name, options.request_group, options.response_group
            );
            continue;
        }

        built.push(types);
    }

    Ok(built)
}

/// Groups handlers by service name, keeping first-seen order
pub fn group_by_service(handlers: Vec<HandlerTypes>) -> IndexMap<String, Vec<HandlerTypes>> {
    let mut services: IndexMap<String, Vec<HandlerTypes>> = IndexMap::new();
    for handler in handlers {
        services
            .entry(service_name(&handler.group))
            .or_default()
            .push(handler);
    }
    services
}
