use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single documented field, as extracted by apidoc.
///
/// `field` is a dotted path (`user.address.city`). A path starting with `.`
/// continues the most recently declared top-level field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub group: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub optional: bool,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FieldDescriptor {
    pub fn new(field: &str, ty: &str) -> Self {
        Self {
            group: String::new(),
            ty: ty.into(),
            optional: false,
            field: field.into(),
            allowed_values: None,
            description: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: &str) -> Self {
        self.group = group.into();
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn with_allowed_values(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(|v| (*v).to_string()).collect());
        self
    }

    /// Path segments of `field`, split on `.`
    pub fn segments(&self) -> Vec<&str> {
        self.field.split('.').collect()
    }
}

/// Field groups of a handler section, keyed by apidoc group name
/// (`Parameter`, `Success 200`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroups {
    #[serde(default)]
    pub fields: IndexMap<String, Vec<FieldDescriptor>>,
}

impl FieldGroups {
    pub fn group(&self, name: &str) -> Option<&[FieldDescriptor]> {
        self.fields.get(name).map(Vec::as_slice)
    }
}

/// One entry of `api_data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHandler {
    /// HTTP method, e.g. `get`
    #[serde(rename = "type")]
    pub method: String,
    #[serde(default)]
    pub url: String,
    pub name: String,
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<FieldGroups>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<FieldGroups>,
}

/// Contents of `api_project.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
