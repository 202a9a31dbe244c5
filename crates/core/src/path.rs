//! Import specifier resolution for the context module.
//!
//! Relative inputs are anchored at a base directory (the working directory
//! by default) and then normalized component by component. The filesystem
//! is never consulted, so symlinks are not followed.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// Module specifier for importing `context_path` from a file generated into
/// `output_dir`.
///
/// `context_path` is relative to the directory containing `schema_path`
/// (an absolute `context_path` is taken as is). Relative paths are anchored
/// at the working directory, which is only read when one of them is
/// relative. The result always uses `/` and always starts with `.`, so it is
/// never mistaken for a package name.
pub fn resolve_import_path(
    output_dir: &Path,
    context_path: &str,
    schema_path: &Path,
) -> Result<String, Error> {
    let target = context_target(context_path, schema_path);
    let base = if output_dir.is_absolute() && target.is_absolute() {
        PathBuf::new()
    } else {
        env::current_dir().map_err(Error::WorkingDir)?
    };
    Ok(resolve_import_path_from(
        &base,
        output_dir,
        context_path,
        schema_path,
    ))
}

/// [`resolve_import_path`] with relative paths anchored at `base` instead of
/// the working directory.
pub fn resolve_import_path_from(
    base: &Path,
    output_dir: &Path,
    context_path: &str,
    schema_path: &Path,
) -> String {
    let target = normalize(&base.join(context_target(context_path, schema_path)));
    let from = normalize(&base.join(output_dir));

    let specifier = to_module_specifier(&relative_to(&from, &target));
    if specifier.starts_with('.') {
        specifier
    } else {
        format!("./{specifier}")
    }
}

fn context_target(context_path: &str, schema_path: &Path) -> PathBuf {
    let schema_dir = schema_path.parent().unwrap_or_else(|| Path::new(""));
    schema_dir.join(context_path)
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// Leading `..` components of a relative path are kept; `..` directly under
/// the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Path leading from `from` to `to`; both must already be normalized and
/// share the same anchor.
fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let shared = from
        .iter()
        .zip(&to)
        .take_while(|(left, right)| left == right)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..from.len() {
        relative.push("..");
    }
    for component in &to[shared..] {
        relative.push(component.as_os_str());
    }
    relative
}

fn to_module_specifier(path: &Path) -> String {
    let specifier = path
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if specifier.is_empty() {
        ".".to_string()
    } else {
        specifier
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_context_path_above_root_is_clamped() {
        let resolved = resolve_import_path(
            Path::new("/app/prisma/generated/shield"),
            "../../../../src/context",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        // Four levels up from /app/prisma stops at /, so the target is /src/context.
        assert_eq!(resolved, "../../../../src/context");
    }

    #[test]
    fn test_default_context_path_from_nested_output() {
        let resolved = resolve_import_path(
            Path::new("/home/dev/app/packages/db/prisma/generated"),
            crate::config::DEFAULT_CONTEXT_PATH,
            Path::new("/home/dev/app/packages/db/prisma/schema.prisma"),
        )
        .unwrap();
        // Four levels up from the schema directory is /home/dev.
        assert_eq!(resolved, "../../../../../src/context");
    }

    #[test]
    fn test_context_next_to_schema() {
        let resolved = resolve_import_path(
            Path::new("/app/prisma/generated"),
            "../src/context",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        assert_eq!(resolved, "../../src/context");
    }

    #[test]
    fn test_context_inside_output_gets_dot_prefix() {
        let resolved = resolve_import_path(
            Path::new("/app/prisma/generated"),
            "./generated/context",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        assert_eq!(resolved, "./context");
    }

    #[test]
    fn test_relative_inputs() {
        let resolved = resolve_import_path_from(
            Path::new("/work"),
            Path::new("prisma/generated"),
            "../src/context",
            Path::new("prisma/schema.prisma"),
        );
        assert_eq!(resolved, "../../src/context");
    }

    #[test]
    fn test_relative_output_with_absolute_schema() {
        let resolved = resolve_import_path_from(
            Path::new("/work"),
            Path::new("generated"),
            "../src/context",
            Path::new("/app/prisma/schema.prisma"),
        );
        assert!(!resolved.contains("//"));
        assert_eq!(resolved, "../../app/src/context");
    }

    #[test]
    fn test_relative_output_above_base() {
        let resolved = resolve_import_path_from(
            Path::new("/home/me/proj"),
            Path::new("../out"),
            "./ctx",
            Path::new("schema.prisma"),
        );
        assert!(!resolved.contains("//"));
        assert_eq!(resolved, "../proj/ctx");
    }

    #[test]
    fn test_relative_inputs_anchor_at_working_directory() {
        let cwd = env::current_dir().unwrap();
        let cwd_name = cwd.file_name().unwrap().to_string_lossy().into_owned();

        let resolved =
            resolve_import_path(Path::new("../out"), "./ctx", Path::new("schema.prisma")).unwrap();
        assert!(!resolved.contains("//"));
        assert_eq!(resolved, format!("../{cwd_name}/ctx"));

        let resolved = resolve_import_path(
            Path::new("generated"),
            "../src/context",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        assert!(!resolved.contains("//"));
        assert_eq!(
            resolved,
            resolve_import_path_from(
                &cwd,
                Path::new("generated"),
                "../src/context",
                Path::new("/app/prisma/schema.prisma"),
            )
        );
        assert!(resolved.ends_with("/app/src/context"));
    }

    #[test]
    fn test_absolute_context_path() {
        let resolved = resolve_import_path(
            Path::new("/app/out"),
            "/app/src/context",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        assert_eq!(resolved, "../src/context");
    }

    #[test]
    fn test_same_directory() {
        let resolved = resolve_import_path(
            Path::new("/app/prisma"),
            ".",
            Path::new("/app/prisma/schema.prisma"),
        )
        .unwrap();
        assert_eq!(resolved, ".");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("../a/../../b")), PathBuf::from("../../b"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}
