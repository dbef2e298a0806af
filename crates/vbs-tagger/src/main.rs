use std::sync::Arc;

use tracing::{info, warn};

use vbs_core::{MemoryVolumeService, ServiceError, SessionConfig, VolumeSession};
use vbs_model::{
    BackoffStrategy, JitterStrategy, RetryStrategy, UserTags, Volume, VolumeRequest, VolumeStatus,
};
use vbs_observe::{LoggerConfig, LoggerTimeZone, init_local_offset, init_logger};

const SESSION_CONFIG_ENV: &str = "VBS_SESSION_CONFIG";

fn main() -> anyhow::Result<()> {
    // 1) logger, offset detection must happen before the runtime spawns threads
    let log_cfg = LoggerConfig::from_env()?;
    if log_cfg.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&log_cfg)?;
    info!(format = %log_cfg.format, "logger initialized");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run())
}

async fn run() -> anyhow::Result<()> {
    // 2) session config: JSON from VBS_SESSION_CONFIG, short gaps otherwise
    let cfg = match std::env::var(SESSION_CONFIG_ENV) {
        Ok(json) => SessionConfig::from_json(&json)?,
        Err(_) => SessionConfig {
            retry: RetryStrategy {
                min_attempts: 3,
                backoff: BackoffStrategy {
                    jitter: JitterStrategy::Equal,
                    first_ms: 200,
                    max_ms: 1_000,
                    factor: 2.0,
                },
                ..Default::default()
            },
            ..Default::default()
        },
    };

    // 3) backend with two volumes, one still provisioning
    let backend = Arc::new(
        MemoryVolumeService::new()
            .with_volume(
                Volume::new(
                    "r006-data-01",
                    VolumeStatus::Available,
                    UserTags::from(vec!["env:prod"]),
                )
                .with_name("data-01"),
            )
            .with_volume(
                Volume::new("r006-data-02", VolumeStatus::Pending, UserTags::new())
                    .with_name("data-02"),
            ),
    );
    let session = VolumeSession::from_config(backend.clone(), &cfg);
    info!(?session, "session ready");

    // 4) add a tag, racing with another writer once
    backend.conflict_next_update();
    session
        .update_volume(&VolumeRequest::new("r006-data-01", vec!["Team:Storage"]))
        .await?;

    // 5) same request again, nothing to write
    session
        .update_volume(&VolumeRequest::new("r006-data-01", vec!["team:storage"]))
        .await?;

    if let Some(v) = backend.volume("r006-data-01") {
        info!(volume_id = %v.id, tags = ?v.user_tags, "final tags");
    }

    // 6) volume that never becomes available
    if let Err(e) = session
        .update_volume(&VolumeRequest::new("r006-data-02", vec!["env:dev"]))
        .await
    {
        warn!(code = %e.kind(), cause = ?e.cause_kind(), action = e.action(), "{e}");
    }

    // 7) backend outage
    for _ in 0..cfg.retry.min_attempts.max(1) {
        backend.fail_next_lookup(ServiceError::Transport("connection refused".into()));
    }
    if let Err(e) = session
        .update_volume(&VolumeRequest::new("r006-data-01", vec!["tier:gold"]))
        .await
    {
        warn!(code = %e.kind(), backend = ?e.backend(), "{e}");
    }

    info!(
        lookups = backend.lookup_calls(),
        updates = backend.update_calls(),
        "done"
    );
    Ok(())
}
