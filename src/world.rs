use cgmath::Vector3;

use crate::tag::Tag;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Center of the unit cell this position names.
    pub fn center(&self) -> Vector3<f32> {
        Vector3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

/// Opaque handle for a block type registered with the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockId(pub u32);

/// Read-only view of the host world, consumed once per scan tick.
pub trait WorldHost {
    /// Chunk the observer currently stands in, if there is an observer.
    fn observer_chunk(&self) -> Option<ChunkPos>;

    /// Registry lookup for a named block type.
    fn block_id(&self, name: &str) -> Option<BlockId>;

    /// Loaded chunk at `pos`, or `None` while it is still streaming in.
    fn chunk(&self, pos: ChunkPos) -> Option<&dyn ChunkView>;

    /// Decoded metadata record attached to the block at `pos`.
    fn block_entity(&self, pos: BlockPos) -> Option<Tag>;

    /// World clock in [0, 1).
    fn time_of_day(&self) -> f32;
}

pub trait ChunkView {
    /// World positions of every instance of `block` within this chunk.
    fn find_blocks(&self, block: BlockId) -> Vec<BlockPos>;
}
