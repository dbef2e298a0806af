use tracing::{error, info, instrument, warn};
use vbs_model::{VolumePatch, VolumeRequest};

use super::VolumeSession;
use crate::{
    error::{ErrorCause, ErrorCode, ErrorKind, UserError},
    retry::retry_with_min_retries,
};

impl VolumeSession {
    /// Make sure the volume carries every tag in `request.tags`.
    ///
    /// Each attempt fetches the volume with its etag, requires it to be available, and writes
    /// the existing tags followed by the requested ones under that etag. When the existing tags
    /// already cover the request nothing is written. Failed attempts (a stale etag included)
    /// start over from the fetch, as allowed by the retry policy.
    ///
    /// Errors:
    /// - [`ErrorKind::InvalidVolumeRequest`] for a blank volume id, no backend call is made.
    /// - [`ErrorKind::FailedToUpdateVolume`] once retries end, with the last attempt's error as
    ///   its cause: a backend error, or [`ErrorKind::VolumeNotInValidState`].
    ///
    /// # Examples
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use vbs_core::{MemoryVolumeService, VolumeSession};
    /// use vbs_model::{UserTags, Volume, VolumeRequest, VolumeStatus};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let backend = Arc::new(MemoryVolumeService::new().with_volume(Volume::new(
    ///     "r006-1",
    ///     VolumeStatus::Available,
    ///     UserTags::from(vec!["env:prod"]),
    /// )));
    /// let session = VolumeSession::new(backend.clone());
    ///
    /// session
    ///     .update_volume(&VolumeRequest::new("r006-1", vec!["Team:X"]))
    ///     .await
    ///     .unwrap();
    ///
    /// let tags = backend.volume("r006-1").unwrap().user_tags;
    /// assert_eq!(tags, UserTags::from(vec!["env:prod", "Team:X"]));
    /// # }
    /// ```
    #[instrument(skip_all, fields(volume_id = %request.volume_id))]
    pub async fn update_volume(&self, request: &VolumeRequest) -> Result<(), UserError> {
        if let Err(e) = request.validate() {
            warn!(error = %e, "rejecting volume update request");
            return Err(self
                .errors
                .make(ErrorKind::InvalidVolumeRequest, None, &request.volume_id));
        }

        let result =
            retry_with_min_retries(&*self.retry, move || self.try_update(request)).await;

        result.map_err(|cause| {
            error!(code = cause.code(), backend_error = %cause, "failed to update volume tags");
            self.errors
                .make(ErrorKind::FailedToUpdateVolume, Some(cause), &request.volume_id)
        })
    }

    async fn try_update(&self, request: &VolumeRequest) -> Result<(), ErrorCause> {
        let volume_id = request.volume_id.as_str();
        let (volume, etag) = self.service.get_volume_etag(volume_id).await?;

        if !volume.status.is_available() {
            warn!(status = %volume.status, "volume is not in valid state");
            return Err(self
                .errors
                .make(ErrorKind::VolumeNotInValidState, None, volume_id)
                .into());
        }
        info!(etag = %etag, "volume got valid (available) state");

        if volume.user_tags.covers(&request.tags, self.tag_match) {
            info!(
                existing = ?volume.user_tags,
                requested = ?request.tags,
                "no change in user tags, skipping volume update"
            );
            return Ok(());
        }

        let patch = VolumePatch::with_tags(volume.user_tags.merged(&request.tags));

        info!(tags = ?patch.user_tags, "updating volume tags with etag");
        self.service
            .update_volume_with_etag(volume_id, &etag, &patch)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vbs_model::{RetryStrategy, UserTags, Volume, VolumeStatus};

    use super::*;
    use crate::{service::MemoryVolumeService, session::SessionConfig};

    fn session(svc: &Arc<MemoryVolumeService>) -> VolumeSession {
        let cfg = SessionConfig {
            retry: RetryStrategy::immediate(3),
            ..Default::default()
        };
        VolumeSession::from_config(svc.clone(), &cfg)
    }

    fn available(tags: Vec<&str>) -> Arc<MemoryVolumeService> {
        Arc::new(MemoryVolumeService::new().with_volume(Volume::new(
            "r006-1",
            VolumeStatus::Available,
            UserTags::from(tags),
        )))
    }

    #[tokio::test]
    async fn blank_id_never_reaches_backend() {
        let svc = available(vec![]);
        let err = session(&svc)
            .update_volume(&VolumeRequest::new("", vec!["a"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidVolumeRequest);
        assert_eq!(svc.lookup_calls(), 0);
    }

    #[tokio::test]
    async fn unavailable_volume_is_wrapped_as_failed_update() {
        let svc = Arc::new(MemoryVolumeService::new().with_volume(Volume::new(
            "r006-1",
            VolumeStatus::Pending,
            UserTags::new(),
        )));
        let err = session(&svc)
            .update_volume(&VolumeRequest::new("r006-1", vec!["a"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedToUpdateVolume);
        assert_eq!(err.cause_kind(), Some(ErrorKind::VolumeNotInValidState));
        assert_eq!(svc.update_calls(), 0);
    }

    #[tokio::test]
    async fn merged_write_preserves_request_case() {
        let svc = available(vec!["env:prod"]);
        session(&svc)
            .update_volume(&VolumeRequest::new("r006-1", vec!["Team:X"]))
            .await
            .unwrap();

        let v = svc.volume("r006-1").unwrap();
        assert_eq!(v.user_tags, UserTags::from(vec!["env:prod", "Team:X"]));
    }
}
