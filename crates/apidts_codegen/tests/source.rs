use std::fs;

use apidts_codegen::{
    CodegenError,
    handlers::{GenerateOptions, build_handler_types, group_by_service},
    render::render_declarations,
    source::{API_DATA_FILE, API_PROJECT_FILE, ApidocSource},
};
use camino::Utf8PathBuf;
use serde_json::json;

fn apidoc_folder(project: &serde_json::Value, data: &serde_json::Value) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(API_PROJECT_FILE), project.to_string()).expect("write project");
    fs::write(dir.path().join(API_DATA_FILE), data.to_string()).expect("write data");
    dir
}

fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 path")
}

#[test]
fn test_load_and_render() {
    let dir = apidoc_folder(
        &json!({ "name": "petstore", "version": "1.0.0" }),
        &json!([
            {
                "type": "get",
                "url": "/pets/:id",
                "title": "Read a pet",
                "name": "GetPet",
                "group": "Pet",
                "version": "1.0.0",
                "parameter": {
                    "fields": {
                        "Parameter": [
                            { "group": "Parameter", "type": "Number", "optional": false, "field": "id",
                              "description": "<p>Pet id</p>" }
                        ]
                    }
                },
                "success": {
                    "fields": {
                        "Success 200": [
                            { "group": "Success 200", "type": "String", "optional": false, "field": "name" },
                            { "group": "Success 200", "type": "Object[]", "optional": true, "field": "tags" },
                            { "group": "Success 200", "type": "String", "optional": false, "field": ".label" }
                        ]
                    }
                }
            }
        ]),
    );

    let source = ApidocSource::load(&utf8(&dir)).expect("load");
    assert_eq!(source.project.name, "petstore");
    assert_eq!(source.handlers.len(), 1);

    let built = build_handler_types(&source.handlers, &GenerateOptions::default()).expect("types");
    let out = render_declarations(&source.project.name, &group_by_service(built), None)
        .expect("render");

    assert!(out.contains(r#"declare module "petstore" {"#), "{out}");
    assert!(out.contains("export namespace Pet {"), "{out}");
    assert!(out.contains("export interface GetPetParams {"), "{out}");
    assert!(out.contains("/** Pet id */"), "{out}");
    assert!(out.contains("tags?: GetPet_Tags[];"), "{out}");
    assert!(out.contains("export interface GetPet_Tags {"), "{out}");
    assert!(out.contains("label: string;"), "{out}");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(API_PROJECT_FILE), r#"{"name": "x"}"#).expect("write project");

    let err = ApidocSource::load(&utf8(&dir)).expect_err("should fail");
    assert!(
        matches!(&err, CodegenError::Io { path, .. } if path.ends_with(API_DATA_FILE)),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_load_invalid_json() {
    let dir = apidoc_folder(&json!({ "name": "x" }), &json!({ "not": "a list" }));

    let err = ApidocSource::load(&utf8(&dir)).expect_err("should fail");
    assert!(matches!(err, CodegenError::Json { .. }), "unexpected error: {err:?}");
}
