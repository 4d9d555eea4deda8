// Various default functions to be used by serde

pub(crate) fn default_request_group() -> String {
    "Parameter".into()
}

pub(crate) fn default_response_group() -> String {
    "Success 200".into()
}

pub(crate) fn default_request_suffix() -> String {
    "Params".into()
}
