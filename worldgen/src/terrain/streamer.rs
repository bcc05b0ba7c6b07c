// src/terrain/streamer.rs

use std::collections::{HashMap, HashSet};

use log::{debug, error, info, warn};
use terrain_types::coords::{ChunkCoords, Vec3, WorldSeed};

use crate::config::{TerrainConfig, WorldConfig};
use crate::error::{Result, WorldError};
use crate::terrain::chunk::TerrainTile;
use crate::terrain::generator::BiomeClassifier;
use crate::terrain::viewer::ViewerSource;

/// What a reconciliation pass changed. Both lists are sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<ChunkCoords>,
    pub removed: Vec<ChunkCoords>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Keeps exactly the square of tiles within `view_distance` chunks of the
/// viewer loaded.
///
/// Tiles are owned by the map; dropping an entry frees the tile.
pub struct ChunkStreamer {
    config: WorldConfig,
    seed: WorldSeed,
    classifier: BiomeClassifier,
    viewer: Box<dyn ViewerSource>,
    tiles: HashMap<ChunkCoords, TerrainTile>,
    center: Option<ChunkCoords>,
}

impl std::fmt::Debug for ChunkStreamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStreamer")
            .field("seed", &self.seed)
            .field("center", &self.center)
            .field("loaded", &self.tiles.len())
            .finish_non_exhaustive()
    }
}

impl ChunkStreamer {
    /// Starts a session: validates the config, fixes the world seed, and
    /// loads the tiles around the viewer's current position.
    pub fn new(config: WorldConfig, viewer: Box<dyn ViewerSource>) -> Result<Self> {
        if let Err(err) = config.validate() {
            error!("Refusing to start terrain streaming: {}", err);
            return Err(err);
        }

        let seed = config.resolve_seed(&mut rand::thread_rng());
        if config.world_seed_offset == [0.0, 0.0] {
            warn!("No world seed configured, using random offset ({:.3}, {:.3})", seed.x, seed.z);
        }

        let Some(position) = viewer.viewer_position() else {
            error!("Viewer not found, terrain streaming not started");
            return Err(WorldError::ViewerUnavailable);
        };

        info!(
            "Starting terrain session: chunk_size={} view_distance={} map_size={} seed=({:.3}, {:.3})",
            config.streaming.chunk_size,
            config.streaming.view_distance,
            config.terrain.map_size,
            seed.x,
            seed.z
        );

        let classifier = BiomeClassifier::new(&config.biome, seed);
        let mut streamer = Self {
            config,
            seed,
            classifier,
            viewer,
            tiles: HashMap::new(),
            center: None,
        };
        streamer.on_viewer_moved(position)?;
        Ok(streamer)
    }

    /// Polls the viewer source and reconciles if it crossed a chunk boundary.
    pub fn tick(&mut self) -> Result<ReconcileReport> {
        let position = self
            .viewer
            .viewer_position()
            .ok_or(WorldError::ViewerUnavailable)?;
        self.on_viewer_moved(position)
    }

    pub fn on_viewer_moved(&mut self, position: Vec3) -> Result<ReconcileReport> {
        let center = ChunkCoords::from_world(position.x, position.z, self.config.streaming.chunk_size);
        if self.center == Some(center) {
            return Ok(ReconcileReport::default());
        }

        let report = self.reconcile(center)?;
        self.center = Some(center);
        Ok(report)
    }

    // New tiles are all built before the map is touched, so a failed pass
    // leaves the previous window intact.
    fn reconcile(&mut self, center: ChunkCoords) -> Result<ReconcileReport> {
        let view_distance = self.config.streaming.view_distance;
        let required: HashSet<ChunkCoords> = center.square(view_distance).collect();

        let mut missing: Vec<ChunkCoords> = required
            .iter()
            .filter(|coords| !self.tiles.contains_key(*coords))
            .copied()
            .collect();
        missing.sort();

        let built = self.build_tiles(&missing)?;

        let mut removed: Vec<ChunkCoords> = self
            .tiles
            .keys()
            .filter(|coords| !required.contains(*coords))
            .copied()
            .collect();
        removed.sort();

        for coords in &removed {
            self.tiles.remove(coords);
            debug!("Dropped tile {:?}", coords);
        }
        for tile in built {
            self.tiles.insert(tile.coords(), tile);
        }

        info!(
            "Reconciled around {:?}: +{} -{} ({} loaded)",
            center,
            missing.len(),
            removed.len(),
            self.tiles.len()
        );

        Ok(ReconcileReport { added: missing, removed })
    }

    fn build_tiles(&self, coords: &[ChunkCoords]) -> Result<Vec<TerrainTile>> {
        coords
            .iter()
            .map(|&c| build_tile(c, &self.config, &self.classifier, self.seed))
            .collect()
    }

    /// The loaded tile covering `world`, if any.
    pub fn tile_at(&self, world: Vec3) -> Option<&TerrainTile> {
        let coords = ChunkCoords::from_world(world.x, world.z, self.config.streaming.chunk_size);
        self.tiles.get(&coords)
    }

    pub fn tile(&self, coords: ChunkCoords) -> Option<&TerrainTile> {
        self.tiles.get(&coords)
    }

    /// Terrain height under `world`, or `None` when no tile is loaded there.
    pub fn height_at(&self, world: Vec3) -> Option<f32> {
        self.tile_at(world).map(|tile| tile.height_at(world))
    }

    /// Swaps the terrain parameters and rebuilds every loaded tile in place.
    pub fn reconfigure_terrain(&mut self, terrain: TerrainConfig) -> Result<()> {
        terrain.validate()?;
        terrain.check_tile_grid(self.config.streaming.chunk_size)?;

        let chunk_size = self.config.streaming.chunk_size;
        for (coords, tile) in self.tiles.iter_mut() {
            tile.build(&terrain, &self.classifier, self.seed.tile_offset(*coords, chunk_size))?;
        }
        info!("Rebuilt {} tiles with new terrain settings", self.tiles.len());

        self.config.terrain = terrain;
        Ok(())
    }

    pub fn loaded(&self) -> impl Iterator<Item = ChunkCoords> + '_ {
        self.tiles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The viewer's chunk as of the last reconciliation.
    pub fn center(&self) -> Option<ChunkCoords> {
        self.center
    }

    pub fn world_seed(&self) -> WorldSeed {
        self.seed
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn classifier(&self) -> &BiomeClassifier {
        &self.classifier
    }
}

fn build_tile(
    coords: ChunkCoords,
    config: &WorldConfig,
    classifier: &BiomeClassifier,
    seed: WorldSeed,
) -> Result<TerrainTile> {
    let chunk_size = config.streaming.chunk_size;
    TerrainTile::generate(
        coords,
        coords.origin(chunk_size),
        &config.terrain,
        classifier,
        seed.tile_offset(coords, chunk_size),
    )
}
