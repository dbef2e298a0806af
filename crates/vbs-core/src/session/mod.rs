//! Volume session: the entry point callers use to mutate volumes.
mod config;
pub use config::{ConfigError, SessionConfig};

mod update;

use std::{fmt, sync::Arc};

use vbs_model::TagMatch;

use crate::{
    error::{ErrorFactoryHandle, catalog_errors},
    retry::{BackoffRetry, RetryHandle},
    service::VolumeServiceHandle,
};

/// Bundles a backend with the collaborators every operation needs.
#[derive(Clone)]
pub struct VolumeSession {
    service: VolumeServiceHandle,
    retry: RetryHandle,
    errors: ErrorFactoryHandle,
    tag_match: TagMatch,
}

impl VolumeSession {
    /// Create a session with the default [`SessionConfig`].
    pub fn new(service: VolumeServiceHandle) -> Self {
        Self::from_config(service, &SessionConfig::default())
    }

    /// Create a session whose retry policy and tag comparison come from `cfg`.
    pub fn from_config(service: VolumeServiceHandle, cfg: &SessionConfig) -> Self {
        Self {
            service,
            retry: Arc::new(BackoffRetry::new(cfg.retry.clone())),
            errors: catalog_errors(),
            tag_match: cfg.tag_match,
        }
    }

    /// Replace the retry policy and return the updated session.
    pub fn with_retry(mut self, retry: RetryHandle) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the error factory and return the updated session.
    pub fn with_error_factory(mut self, errors: ErrorFactoryHandle) -> Self {
        self.errors = errors;
        self
    }

    /// Replace the tag comparison mode and return the updated session.
    pub fn with_tag_match(mut self, tag_match: TagMatch) -> Self {
        self.tag_match = tag_match;
        self
    }

    pub fn tag_match(&self) -> TagMatch {
        self.tag_match
    }
}

impl fmt::Debug for VolumeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeSession")
            .field("service", &"<handle>")
            .field("max_attempts", &self.retry.max_attempts())
            .field("tag_match", &self.tag_match)
            .finish()
    }
}
