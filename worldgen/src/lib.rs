//! Procedurally generated terrain, streamed in square chunks around a viewer.
//!
//! The host owns the update loop: it builds a [`ChunkStreamer`] once per
//! session and calls [`ChunkStreamer::tick`] (or `on_viewer_moved`) whenever
//! the viewer may have moved. Everything else is deterministic math over the
//! session's [`WorldConfig`] and world seed.

pub mod config;
pub mod error;
pub mod terrain;

pub use config::WorldConfig;
pub use error::{Result, WorldError};
pub use terrain::{ChunkStreamer, FixedViewer, ReconcileReport, TerrainTile, ViewerSource};
