/// Upper-cases the first character and leaves the rest untouched.
///
/// `items` -> `Items`, `userId` -> `UserId`, `user_id` -> `User_id`
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `name` can be used unquoted as a TypeScript property key
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (unicode_ident::is_xid_start(first) || first == '_' || first == '$')
        && chars.all(|c| unicode_ident::is_xid_continue(c) || c == '$')
}

/// Quotes a property key when it is not a valid identifier
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.into()).to_string()
    }
}

/// Service namespace for an apidoc group: `User_Profile` -> `User.Profile`
pub fn service_name(group: &str) -> String {
    group.replace('_', ".")
}
