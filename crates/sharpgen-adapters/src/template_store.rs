//! Template store adapters.
//!
//! `BuiltinStore` serves the embedded defaults; `DirStore` reads
//! `<name>.tmpl` files from a user directory and falls back to the embedded
//! resource when a file is absent.

use std::path::PathBuf;

use tracing::debug;

use sharpgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::SharpgenResult,
};

use crate::builtin_templates;

/// Store serving the templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinStore {
    fn content(&self, kind: TemplateKind) -> SharpgenResult<String> {
        Ok(builtin_templates::content(kind).to_string())
    }
}

/// Store reading `<name>.tmpl` files from a directory, with builtin fallback.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for DirStore {
    fn content(&self, kind: TemplateKind) -> SharpgenResult<String> {
        let path = kind.template_path(&self.dir);
        if !path.exists() {
            debug!(path = %path.display(), "no template override, using builtin");
            return Ok(builtin_templates::content(kind).to_string());
        }
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateRead {
                kind: kind.name().to_string(),
                reason: format!("{}: {}", path.display(), e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_serves_all_kinds() {
        let store = BuiltinStore::new();
        for kind in TemplateKind::ALL {
            assert!(!store.content(kind).unwrap().is_empty());
        }
    }

    #[test]
    fn dir_store_prefers_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("class.tmpl"), "custom ${classname}").unwrap();

        let store = DirStore::new(dir.path());
        assert_eq!(
            store.content(TemplateKind::Class).unwrap(),
            "custom ${classname}"
        );
        // no interface.tmpl in the directory, so the builtin is served
        assert_eq!(
            store.content(TemplateKind::Interface).unwrap(),
            builtin_templates::content(TemplateKind::Interface)
        );
    }
}
