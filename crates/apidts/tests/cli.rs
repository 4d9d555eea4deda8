use std::fs;

use apidts::{Cli, Commands};
use clap::Parser;

#[test]
fn test_parse_generate() {
    let cli = Cli::try_parse_from(["apidts", "generate", "./apidoc", "-o", "api.d.ts", "-vv"])
        .expect("parse");

    assert_eq!(cli.verbose, 2);
    assert!(cli.config.is_none());
    match cli.command {
        Commands::Generate(cmd) => {
            assert_eq!(cmd.folder.as_str(), "./apidoc");
            assert_eq!(cmd.output.as_ref().map(|o| o.as_str()), Some("api.d.ts"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_generate_requires_folder() {
    assert!(Cli::try_parse_from(["apidts", "generate"]).is_err());
}

#[test]
fn test_init_then_generate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().to_str().expect("utf8 path");
    let config = format!("{root}/apidts.json");
    let output = format!("{root}/out.d.ts");

    fs::write(dir.path().join("api_project.json"), r#"{"name": "todo"}"#).expect("write");
    fs::write(
        dir.path().join("api_data.json"),
        r#"[{
            "type": "get", "url": "/todos/:id", "name": "GetTodo", "group": "Todo",
            "success": { "fields": { "Success 200": [
                { "group": "Success 200", "type": "Boolean", "optional": false, "field": "done" }
            ] } }
        }]"#,
    )
    .expect("write");

    Cli::try_parse_from(["apidts", "-q", "init", "-c", config.as_str()])
        .expect("parse")
        .handle()
        .expect("init");
    assert!(fs::metadata(&config).is_ok());

    Cli::try_parse_from(["apidts", "generate", root, "-c", config.as_str(), "-o", output.as_str()])
        .expect("parse")
        .handle()
        .expect("generate");

    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains(r#"declare module "todo" {"#), "{written}");
    assert!(written.contains("done: boolean;"), "{written}");
}

#[test]
fn test_generate_fails_on_malformed_docs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().to_str().expect("utf8 path");

    fs::write(dir.path().join("api_project.json"), r#"{"name": "todo"}"#).expect("write");
    fs::write(
        dir.path().join("api_data.json"),
        r#"[{
            "type": "get", "url": "/todos", "name": "ListTodos", "group": "Todo",
            "success": { "fields": { "Success 200": [
                { "group": "Success 200", "type": "Number", "optional": false, "field": "todo.id" }
            ] } }
        }]"#,
    )
    .expect("write");

    let err = Cli::try_parse_from(["apidts", "-q", "generate", root])
        .expect("parse")
        .handle()
        .expect_err("should fail");

    let message = format!("{err:#}");
    assert!(message.contains("ListTodos"), "{message}");
    assert!(message.contains("todo of ListTodos has no apidoc definition"), "{message}");
}
