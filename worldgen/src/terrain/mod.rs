pub mod chunk;
pub mod generator;
pub mod streamer;
pub mod viewer;

pub use chunk::TerrainTile;
pub use streamer::{ChunkStreamer, ReconcileReport};
pub use viewer::{FixedViewer, ViewerSource};
