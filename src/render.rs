use crate::mesh::MeshData;
use crate::texture::TexturePath;
use crate::world::BlockPos;

/// Material class a batch is drawn with, matching the host's pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Opaque,
    Cutout,
    Translucent,
}

/// One texture's worth of quads, built and submitted within a single
/// render tick and never retained.
pub struct MeshBatch {
    pub texture: TexturePath,
    pub material: Material,
    pub mesh: MeshData,
}

/// Host-side geometry acceptor.
pub trait RenderSink {
    /// Override ambient light around a device cell for its upcoming draws.
    fn set_ambient_light(&mut self, device: BlockPos, brightness: u8);

    /// Take ownership of a finished batch for drawing this frame.
    fn submit(&mut self, batch: MeshBatch);
}
