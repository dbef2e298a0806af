mod status;
pub use status::VolumeStatus;

mod snapshot;
pub use snapshot::Volume;

mod patch;
pub use patch::VolumePatch;

mod request;
pub use request::VolumeRequest;
