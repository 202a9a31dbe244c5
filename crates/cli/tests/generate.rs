//! End-to-end tests for `shieldgen generate`: request file in, shield.ts out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use serde_json::json;
use shieldgen_cli::generate::{GenerateArgs, Outcome, generate, write_shield};
use tempfile::TempDir;

/// Write a request whose schema lives in `<root>/prisma` and whose output
/// goes to `<root>/prisma/generated`.
fn write_request(root: &Path, extra: serde_json::Value) -> GenerateArgs {
    let mut request = json!({
        "schemaPath": root.join("prisma").join("schema.prisma"),
        "generator": {
            "output": { "value": root.join("prisma").join("generated") },
            "config": { "contextPath": "../src/context" }
        }
    });
    if let (Some(request), Some(extra)) = (request.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            request.insert(key.clone(), value.clone());
        }
    }

    let path = root.join("request.json");
    fs::write(&path, serde_json::to_string_pretty(&request).unwrap()).unwrap();
    GenerateArgs {
        request: path,
        stdout: false,
    }
}

#[test]
fn test_generate_writes_shield_from_model_operations() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let args = write_request(
        dir.path(),
        json!({
            "modelOperations": [
                {
                    "model": "User",
                    "plural": "users",
                    "findUnique": "findUniqueUser",
                    "findMany": "findManyUser",
                    "createOne": "createOneUser",
                    "findRaw": null
                }
            ]
        }),
    );

    let outcome = generate(&args).unwrap();
    let expected_path = dir.path().join("prisma").join("generated").join("shield.ts");
    assert_eq!(outcome, Outcome::Written(expected_path.clone()));

    let text = fs::read_to_string(&expected_path).unwrap();
    assert!(text.contains("import { Context } from '../../src/context';"));
    assert!(text.contains("query: {\n  findManyUser: allow,\n  findUniqueUser: allow\n},"));
    assert!(text.contains("mutation: {\n  createOneUser: allow\n},"));
    assert!(text.contains("export type QueryKeys = 'findManyUser' | 'findUniqueUser';"));
    assert!(!text.contains("SubscriptionKeys"));
}

#[test]
fn test_generate_skips_when_no_operations() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let args = write_request(dir.path(), json!({}));

    assert_eq!(generate(&args).unwrap(), Outcome::Skipped);
    assert!(!dir.path().join("prisma").join("generated").exists());
}

#[test]
fn test_generate_stdout_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut args = write_request(
        dir.path(),
        json!({ "operations": { "queries": ["getUser"] } }),
    );
    args.stdout = true;

    assert_eq!(generate(&args).unwrap(), Outcome::Printed);
    assert!(!dir.path().join("prisma").join("generated").exists());
}

#[test]
fn test_generate_classic_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let args = write_request(
        dir.path(),
        json!({ "operations": { "queries": ["a", "b"] } }),
    );
    // Override the config written by write_request.
    let mut request: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&args.request).unwrap()).unwrap();
    request["generator"]["config"]["layout"] = json!("classic");
    fs::write(&args.request, request.to_string()).unwrap();

    let Outcome::Written(path) = generate(&args).unwrap() else {
        unreachable!("classic request has operations");
    };
    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("  a: allow,\r\nb: allow\n"));
    assert!(text.ends_with("  };"));
}

#[test]
fn test_generate_reports_bad_request() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("request.json");
    fs::write(&path, "{ not json").unwrap();

    let err = generate(&GenerateArgs {
        request: path,
        stdout: false,
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid generator request"));
}

#[test]
fn test_generate_reports_missing_request_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = generate(&GenerateArgs {
        request: dir.path().join("missing.json"),
        stdout: false,
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn test_run_exit_codes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let args = write_request(
        dir.path(),
        json!({ "operations": { "mutations": ["createPost"] } }),
    );
    assert_eq!(shieldgen_cli::generate::run(args), 0);

    let missing = GenerateArgs {
        request: dir.path().join("missing.json"),
        stdout: false,
    };
    assert_eq!(shieldgen_cli::generate::run(missing), 1);
}

#[test]
fn test_write_shield_creates_directories_and_skips_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = dir.path().join("a").join("b");

    assert_eq!(write_shield(&output_dir, "").unwrap(), None);
    assert!(!output_dir.exists());

    let path = write_shield(&output_dir, "export {};\n").unwrap().unwrap();
    assert_eq!(path, output_dir.join("shield.ts"));
    assert_eq!(fs::read_to_string(path).unwrap(), "export {};\n");
}
