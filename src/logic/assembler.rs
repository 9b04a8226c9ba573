use log::info;

use crate::{
    config::DocSettings,
    error::DocResult,
    logic::paths::{build_paths, ConflictPolicy},
    models::document::{Components, Info, SpecDocument, OAS_VERSION},
    registry::MetadataSource,
};

/// Assembles a [`SpecDocument`] from registered controller metadata.
///
/// Header fields are configured with the `set_*` methods before calling
/// [`DocumentBuilder::build`]; unset fields keep their defaults. Every call to
/// `build` produces a fresh document from the current source and settings.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<S> {
    source: S,
    info: Info,
    conflict_policy: ConflictPolicy,
}

impl<S: MetadataSource> DocumentBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            info: Info::default(),
            conflict_policy: ConflictPolicy::default(),
        }
    }

    pub fn from_settings(source: S, settings: &DocSettings) -> Self {
        let mut builder = Self::new(source);
        if let Some(title) = &settings.title {
            builder.set_title(title.clone());
        }
        if let Some(description) = &settings.description {
            builder.set_description(description.clone());
        }
        if let Some(version) = &settings.app_version {
            builder.set_application_version(version.clone());
        }
        builder.set_conflict_policy(settings.conflict_policy);
        builder
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.info.title = title.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.info.description = description.into();
        self
    }

    pub fn set_application_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.info.version = version.into();
        self
    }

    pub fn set_conflict_policy(&mut self, policy: ConflictPolicy) -> &mut Self {
        self.conflict_policy = policy;
        self
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the full pipeline. Only fails under [`ConflictPolicy::Reject`].
    pub fn build(&self) -> DocResult<SpecDocument> {
        let paths = build_paths(&self.source, self.conflict_policy)?;
        let document = SpecDocument {
            openapi: OAS_VERSION.to_string(),
            info: self.info.clone(),
            paths,
            components: Components::default(),
        };
        info!(
            "assembled '{}' v{}: {} path(s), {} operation(s)",
            document.info.title,
            document.info.version,
            document.paths.len(),
            document.operation_count()
        );
        Ok(document)
    }
}
