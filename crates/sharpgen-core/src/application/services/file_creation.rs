//! File creation service - template-to-file orchestrator.
//!
//! Coordinates the whole scaffolding workflow for one artifact:
//! 1. Resolve which template kinds the artifact expands to
//! 2. Check every destination for collisions before writing anything
//! 3. Read project metadata and detect the namespace
//! 4. Render each template and write it
//! 5. Report the created files with their caret positions

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, NamespaceDetector, ProjectInfo, ProjectReader, TemplateStore},
    },
    domain::{Artifact, CursorPosition, Template, TemplateConfiguration, TemplateKind},
    error::SharpgenResult,
};

/// Per-invocation rendering options, resolved from config file and flags.
#[derive(Debug, Clone)]
pub struct CreationOptions {
    /// Explicit namespace; skips detection when set.
    pub namespace_override: Option<String>,
    /// `"\n"`, `"\r\n"`, or anything else for the platform default.
    pub eol_setting: String,
    pub include_namespaces: bool,
    pub use_file_scoped_namespace: bool,
}

impl Default for CreationOptions {
    fn default() -> Self {
        Self {
            namespace_override: None,
            eol_setting: "auto".to_string(),
            include_namespaces: true,
            use_file_scoped_namespace: false,
        }
    }
}

/// One file written by [`FileCreationService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub path: PathBuf,
    pub kind: TemplateKind,
    /// Where an editor should place the caret, when the template says so.
    pub cursor: Option<CursorPosition>,
}

/// Main scaffolding service.
pub struct FileCreationService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    namespace_detector: Box<dyn NamespaceDetector>,
    project_reader: Box<dyn ProjectReader>,
}

impl FileCreationService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        namespace_detector: Box<dyn NamespaceDetector>,
        project_reader: Box<dyn ProjectReader>,
    ) -> Self {
        Self {
            store,
            filesystem,
            namespace_detector,
            project_reader,
        }
    }

    /// Create all files for `artifact` under `destination_dir`.
    ///
    /// Writes proceed independently; the first failure aborts the run but
    /// already-written siblings are not rolled back. Source files are
    /// created (and reported) before their markup counterparts.
    #[instrument(
        skip_all,
        fields(artifact = %artifact, name = %name, dir = %destination_dir.display())
    )]
    pub fn create(
        &self,
        artifact: Artifact,
        destination_dir: &Path,
        name: &str,
        options: &CreationOptions,
    ) -> SharpgenResult<Vec<CreatedFile>> {
        let name = name.strip_suffix(".cs").unwrap_or(name);

        let mut kinds: Vec<TemplateKind> = artifact.template_kinds().to_vec();
        kinds.sort_by_key(|k| !k.is_source());

        let destinations: Vec<PathBuf> = kinds
            .iter()
            .map(|k| destination_dir.join(format!("{name}{}", k.extension())))
            .collect();
        for destination in &destinations {
            if self.filesystem.exists(destination) {
                return Err(ApplicationError::FileExists {
                    path: destination.clone(),
                }
                .into());
            }
        }

        let project = self.project_info(destination_dir);
        let namespace = match &options.namespace_override {
            Some(namespace) => namespace.clone(),
            None => self.namespace_detector.namespace_for(destination_dir)?,
        };
        info!(namespace = %namespace, net6_plus = project.is_net6_plus, "creating files");

        let mut created = Vec::with_capacity(kinds.len());
        for (kind, destination) in kinds.into_iter().zip(destinations) {
            let config = TemplateConfiguration::create(
                kind,
                &options.eol_setting,
                options.include_namespaces,
                options.use_file_scoped_namespace,
                project.is_net6_plus,
                project.implicit_usings,
                project.effective_global_usings(),
            )?;
            let text = self.store.content(kind)?;
            let template = Template::new(text, config);

            let content = template.build(&namespace, name);
            self.filesystem.write_file(&destination, &content)?;

            created.push(CreatedFile {
                cursor: template.cursor_position(&namespace, name),
                path: destination,
                kind,
            });
        }

        info!(files = created.len(), "creation completed");
        Ok(created)
    }

    fn project_info(&self, destination_dir: &Path) -> ProjectInfo {
        match self.project_reader.project_for(destination_dir) {
            Ok(project) => project,
            Err(error) => {
                warn!(%error, "project metadata unavailable, using defaults");
                ProjectInfo::default()
            }
        }
    }
}
