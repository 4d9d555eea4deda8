use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    CodegenError, CodegenResult, FieldMap, TypeMap,
    case::upper_first,
    model::FieldDescriptor,
    tree::{FieldNode, FieldTree, SELF_KEY, build_field_tree},
};

/// apidoc emits a `Link` entry alongside real fields; it is never a field.
const LINK_KEY: &str = "Link";

const OBJECT_ARRAY: &str = "Object[]";

/// Builds the tree for `fields` and synthesizes its types under `type_name`.
///
/// # Errors
///
/// Fails on orphan continuation fields and on nested fields whose parent was
/// never documented.
pub fn generate_types(fields: &[FieldDescriptor], type_name: &str) -> CodegenResult<TypeMap> {
    debug!("Generating types for `{type_name}` from {} fields", fields.len());
    let tree = build_field_tree(fields)?;
    synthesize_types(&tree, type_name)
}

/// Walks `tree` and returns every type it describes, starting with
/// `type_name` itself.
///
/// Nested shapes are named `{parent}_{Field}`. A branch documented as
/// `Object[]` is referenced as an array of its synthetic type; any other
/// branch is referenced by the bare synthetic name.
///
/// # Errors
///
/// Returns [`CodegenError::MissingTypeDefinition`] when a node has children
/// but no descriptor of its own.
pub fn synthesize_types(tree: &FieldTree, type_name: &str) -> CodegenResult<TypeMap> {
    assign_type_names(&tree.root, type_name)
}

/// Iterates through the provided nodes, assigning type names recursively
fn assign_type_names(
    nodes: &IndexMap<String, FieldNode>,
    type_name: &str,
) -> CodegenResult<TypeMap> {
    let mut types = TypeMap::new();
    types.insert(type_name.to_string(), FieldMap::new());

    for (field_name, node) in nodes {
        if field_name == SELF_KEY || field_name == LINK_KEY {
            continue;
        }

        let Some(spec) = &node.spec else {
            return Err(CodegenError::MissingTypeDefinition {
                field: field_name.clone(),
                type_name: type_name.to_string(),
            });
        };

        if !node.is_branch() {
            insert_field(&mut types, type_name, field_name, spec.clone());
            continue;
        }

        let child_type = format!("{type_name}_{}", upper_first(field_name));
        trace!("{type_name}.{field_name} -> {child_type}");

        let ty = if spec.ty == OBJECT_ARRAY {
            format!("{child_type}[]")
        } else {
            child_type.clone()
        };
        insert_field(
            &mut types,
            type_name,
            field_name,
            FieldDescriptor {
                ty,
                ..spec.clone()
            },
        );

        let child_types = assign_type_names(&node.children, &child_type)?;
        merge_types(&mut types, child_types);
    }

    Ok(types)
}

fn insert_field(types: &mut TypeMap, type_name: &str, field_name: &str, spec: FieldDescriptor) {
    types
        .entry(type_name.to_string())
        .or_default()
        .insert(field_name.to_string(), spec);
}

/// Merges `other` into `types`. Types present in both are merged field by
/// field, with `other` winning.
pub(crate) fn merge_types(types: &mut TypeMap, other: TypeMap) {
    for (name, fields) in other {
        types.entry(name).or_default().extend(fields);
    }
}
