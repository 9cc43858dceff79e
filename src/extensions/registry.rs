use crate::configuration::ExtensionSettings;
use crate::extensions::{ExtensionContext, HelloWorldResource, ServerExtension};
use actix_web::web;
use std::sync::Arc;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("No extension called `{0}` is available.")]
    UnknownExtension(String),
    #[error("`{0}` is not a valid mount point: it must start with `/` and hold no path parameters or whitespace.")]
    InvalidMountPoint(String),
    #[error("Mount point `{0}` is already taken by another extension.")]
    DuplicateMountPoint(String),
}

#[derive(Clone)]
struct Mount {
    mount_point: String,
    extension: Arc<dyn ServerExtension>,
}

/// The extensions the host serves, each under its own mount point.
///
/// Cheap to clone: every actix worker gets its own copy.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    mounts: Vec<Mount>,
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.mounts
                    .iter()
                    .map(|m| (display_mount_point(&m.mount_point), m.extension.name())),
            )
            .finish()
    }
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every extension listed in the configuration.
    #[tracing::instrument(name = "Load extensions", skip(context))]
    pub fn from_settings(
        settings: &[ExtensionSettings],
        context: &ExtensionContext,
    ) -> Result<Self, ExtensionError> {
        settings.iter().try_fold(Self::new(), |registry, s| {
            let extension = build_extension(&s.name, context)?;
            registry.mount(&s.mount_point, extension)
        })
    }

    /// Serve `extension` under `mount_point`. `/` and `` both mean the root.
    pub fn mount(
        mut self,
        mount_point: &str,
        extension: impl ServerExtension + 'static,
    ) -> Result<Self, ExtensionError> {
        let mount_point = normalise_mount_point(mount_point)?;
        if self.mounts.iter().any(|m| m.mount_point == mount_point) {
            return Err(ExtensionError::DuplicateMountPoint(mount_point));
        }

        tracing::info!(
            extension = extension.name(),
            mount_point = %display_mount_point(&mount_point),
            "Mounted extension"
        );
        self.mounts.push(Mount {
            mount_point,
            extension: Arc::new(extension),
        });
        Ok(self)
    }

    /// Normalised mount points, in the order they were mounted.
    pub fn mount_points(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(|m| m.mount_point.as_str())
    }

    /// Register one scope per extension.
    ///
    /// actix never falls through from a matched scope to the next one, so the
    /// longest mount point goes first - otherwise the root mount would swallow
    /// every request meant for `/examples/...`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let mut mounts: Vec<&Mount> = self.mounts.iter().collect();
        mounts.sort_by(|a, b| b.mount_point.len().cmp(&a.mount_point.len()));

        for mount in mounts {
            let extension = Arc::clone(&mount.extension);
            cfg.service(
                web::scope(&mount.mount_point).configure(move |cfg| extension.configure(cfg)),
            );
        }
    }
}

// the extensions this server knows how to build, by configured name
fn build_extension(
    name: &str,
    context: &ExtensionContext,
) -> Result<impl ServerExtension + 'static, ExtensionError> {
    match name {
        HelloWorldResource::NAME => Ok(HelloWorldResource::new(context.database.clone())),
        other => Err(ExtensionError::UnknownExtension(other.to_string())),
    }
}

// "/examples/unmanaged/" -> "/examples/unmanaged", "/" -> ""
fn normalise_mount_point(mount_point: &str) -> Result<String, ExtensionError> {
    let valid = (mount_point.is_empty() || mount_point.starts_with('/'))
        && !mount_point
            .chars()
            .any(|c| c == '{' || c == '}' || c.is_whitespace());
    if !valid {
        return Err(ExtensionError::InvalidMountPoint(mount_point.to_string()));
    }
    Ok(mount_point.trim_end_matches('/').to_string())
}

fn display_mount_point(mount_point: &str) -> &str {
    if mount_point.is_empty() {
        "/"
    } else {
        mount_point
    }
}
