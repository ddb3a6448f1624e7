//! Discovery of the compiler-generated GlobalUsings file.
//!
//! With implicit usings enabled, the SDK writes a `GlobalUsings.g.cs` under
//! `obj/Debug/<tfm>/` listing the namespaces every file can use without a
//! `using` directive. New files should not repeat those.

use std::path::Path;

use tracing::debug;

/// Namespaces declared in the generated GlobalUsings file, empty when the
/// project has not been built or the file is absent.
pub fn find_global_usings(project_file: &Path, target_framework: &str) -> Vec<String> {
    let Some(project_dir) = project_file.parent() else {
        return Vec::new();
    };
    let build_dir = project_dir.join("obj").join("Debug").join(target_framework);

    let Ok(entries) = std::fs::read_dir(&build_dir) else {
        debug!(dir = %build_dir.display(), "no build folder, skipping global usings");
        return Vec::new();
    };

    let Some(path) = entries
        .flatten()
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains("GlobalUsings.g.cs"))
        })
    else {
        return Vec::new();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Vec::new();
    };
    parse_global_usings(&content)
}

/// Extract namespaces from `global using global::X;` lines.
pub fn parse_global_usings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.starts_with("global"))
        .map(|line| {
            line.replacen("global using global::", "", 1)
                .replace(';', "")
                .trim()
                .to_string()
        })
        .filter(|ns| !ns.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL_USINGS: &str = "\
// <auto-generated/>
global using global::System;
global using global::System.Collections.Generic;
global using global::System.Linq;
";

    #[test]
    fn parses_global_using_lines() {
        assert_eq!(
            parse_global_usings(GLOBAL_USINGS),
            vec!["System", "System.Collections.Generic", "System.Linq"]
        );
    }

    #[test]
    fn finds_the_generated_file_in_the_build_folder() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("obj/Debug/net8.0");
        std::fs::create_dir_all(&build).unwrap();
        std::fs::write(build.join("App.GlobalUsings.g.cs"), GLOBAL_USINGS).unwrap();
        let project_file = dir.path().join("App.csproj");

        let usings = find_global_usings(&project_file, "net8.0");
        assert_eq!(usings.len(), 3);
    }

    #[test]
    fn missing_build_folder_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_global_usings(&dir.path().join("App.csproj"), "net8.0").is_empty());
    }
}
