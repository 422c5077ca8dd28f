//! Headless smoke run: wires an in-memory world holding a single jukebox,
//! then drives one scan tick and a few render ticks, logging what would
//! be handed to the renderer.

use std::collections::HashMap;

use anyhow::Result;
use jukebox_visuals::render::{MeshBatch, RenderSink};
use jukebox_visuals::tag::Tag;
use jukebox_visuals::texture::{RawImage, TextureHost, TexturePath, TextureStatus};
use jukebox_visuals::world::{BlockId, BlockPos, ChunkPos, ChunkView, WorldHost};
use jukebox_visuals::{JukeboxVisuals, VisualConfig};

struct DemoChunk {
    jukeboxes: Vec<BlockPos>,
}

impl ChunkView for DemoChunk {
    fn find_blocks(&self, _block: BlockId) -> Vec<BlockPos> {
        self.jukeboxes.clone()
    }
}

struct DemoWorld {
    chunks: HashMap<ChunkPos, DemoChunk>,
    tags: HashMap<BlockPos, Tag>,
    time: f32,
}

impl WorldHost for DemoWorld {
    fn observer_chunk(&self) -> Option<ChunkPos> {
        Some(ChunkPos { x: 0, z: 0 })
    }

    fn block_id(&self, name: &str) -> Option<BlockId> {
        (name == "jukebox").then_some(BlockId(1))
    }

    fn chunk(&self, pos: ChunkPos) -> Option<&dyn ChunkView> {
        self.chunks.get(&pos).map(|chunk| chunk as &dyn ChunkView)
    }

    fn block_entity(&self, pos: BlockPos) -> Option<Tag> {
        self.tags.get(&pos).cloned()
    }

    fn time_of_day(&self) -> f32 {
        self.time
    }
}

struct DemoTextures;

impl TextureHost for DemoTextures {
    fn status(&self, _path: &TexturePath) -> TextureStatus {
        TextureStatus::Loaded
    }

    fn load_image(&self, path: &TexturePath) -> Option<RawImage> {
        if path.as_str() == "textures/blocks/glass" {
            Some(RawImage::new(2, 2, vec![255; 16]))
        } else {
            Some(disc_sprite())
        }
    }
}

/// 16x16 disc: an opaque ring with a transparent spindle hole.
fn disc_sprite() -> RawImage {
    let size = 16u32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - 8.0;
            let dy = y as f32 + 0.5 - 8.0;
            let radius = (dx * dx + dy * dy).sqrt();
            if (1.5..=7.5).contains(&radius) {
                let idx = ((y * size + x) * 4) as usize;
                pixels[idx..idx + 4].copy_from_slice(&[40, 40, 46, 255]);
            }
        }
    }
    RawImage::new(size, size, pixels)
}

#[derive(Default)]
struct LogSink {
    batches: usize,
    quads: usize,
}

impl RenderSink for LogSink {
    fn set_ambient_light(&mut self, device: BlockPos, brightness: u8) {
        log::info!("ambient override {brightness} at {device:?}");
    }

    fn submit(&mut self, batch: MeshBatch) {
        self.batches += 1;
        self.quads += batch.mesh.quad_count();
        log::info!(
            "batch {} ({:?}): {} quads",
            batch.texture.as_str(),
            batch.material,
            batch.mesh.quad_count()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let pos = BlockPos::new(4, 70, 9);
    let mut item = HashMap::new();
    item.insert(
        "Name".to_owned(),
        Tag::String("minecraft:music_disc_cat".to_owned()),
    );
    let mut root = HashMap::new();
    root.insert("RecordItem".to_owned(), Tag::Compound(item));

    let mut chunks = HashMap::new();
    chunks.insert(
        ChunkPos { x: 0, z: 0 },
        DemoChunk {
            jukeboxes: vec![pos],
        },
    );
    let world = DemoWorld {
        chunks,
        tags: HashMap::from([(pos, Tag::Compound(root))]),
        time: 0.5,
    };

    let mut plugin = JukeboxVisuals::new(VisualConfig::default());
    plugin.on_scan_tick(&world);
    anyhow::ensure!(!plugin.scanner().is_empty(), "scan found no jukebox");

    let mut sink = LogSink::default();
    for _ in 0..3 {
        plugin.on_render_tick(1.0 / 60.0, &DemoTextures, &mut sink);
    }
    println!(
        "{} devices, {} batches, {} quads over 3 frames",
        plugin.scanner().len(),
        sink.batches,
        sink.quads
    );
    Ok(())
}
