pub mod artifacts;
pub mod database;
pub mod launch;
pub mod patch_descriptor;
pub mod provision;
pub mod sync_sources;
