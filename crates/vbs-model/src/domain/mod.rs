mod etag;
pub use etag::Etag;

mod tags;
pub use tags::UserTags;

/// Stable identifier of a block-storage volume as issued by the provider.
pub type VolumeId = String;
