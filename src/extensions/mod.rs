//! Unmanaged extensions: handler bundles the host server mounts under a
//! configured url prefix.
//!
//! An extension only describes its own routes, relative to its mount point.
//! Which extensions are loaded, and where, is decided by the configuration
//! (see [`ExtensionRegistry::from_settings`]).

mod helloworld;
mod registry;

pub use helloworld::*;
pub use registry::*;

use crate::database::Database;
use actix_web::web;

/// A bundle of routes the host server can mount.
///
/// Implementors are shared between actix workers, hence `Send + Sync`.
pub trait ServerExtension: Send + Sync {
    /// The name the extension is referred to by in the configuration.
    fn name(&self) -> &'static str;

    /// Register the extension's routes and data, relative to its mount point.
    fn configure(&self, cfg: &mut web::ServiceConfig);
}

/// The collaborators the host hands to an extension when it is built.
#[derive(Clone, Debug)]
pub struct ExtensionContext {
    pub database: Database,
}
