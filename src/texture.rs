/// Logical path into the host's texture pack.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TexturePath(String);

impl TexturePath {
    pub fn game(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Loaded,
    Pending,
}

/// Decoded RGBA8 image, rows from the top-left corner.
#[derive(Clone, Debug)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RawImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Alpha at (x, y); out-of-range reads are transparent.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let idx = ((y * self.width + x) * 4 + 3) as usize;
        self.pixels.get(idx).copied().unwrap_or(0)
    }
}

/// Host-side texture resolver.
pub trait TextureHost {
    fn status(&self, path: &TexturePath) -> TextureStatus;

    /// Pixel data for a texture; `None` while it cannot be decoded.
    fn load_image(&self, path: &TexturePath) -> Option<RawImage>;
}

/// Texture name a record identifier renders with.
///
/// Vanilla identifiers swap their `minecraft:music_disc_` prefix for
/// `record_`; four discs ship under their own name instead. Anything else
/// passes through unchanged.
pub fn disc_texture_name(record_id: &str) -> String {
    let name = match record_id.strip_prefix("minecraft:music_disc_") {
        Some(suffix) => format!("record_{suffix}"),
        None => record_id.to_owned(),
    };
    match name.as_str() {
        "record_creator" => "music_disc_creator".to_owned(),
        "record_creator_music_box" => "music_disc_creator_music_box".to_owned(),
        "record_precipice" => "music_disc_precipice".to_owned(),
        "record_relic" => "music_disc_relic".to_owned(),
        _ => name,
    }
}

pub fn disc_texture_path(record_id: &str) -> TexturePath {
    TexturePath::game(format!("textures/items/{}", disc_texture_name(record_id)))
}

pub fn glass_texture_path() -> TexturePath {
    TexturePath::game("textures/blocks/glass")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn vanilla_disc_ids_map_to_record_textures() {
        assert_eq!(disc_texture_name("minecraft:music_disc_13"), "record_13");
        assert_eq!(disc_texture_name("minecraft:music_disc_cat"), "record_cat");
        assert_eq!(
            disc_texture_path("minecraft:music_disc_cat").as_str(),
            "textures/items/record_cat"
        );
    }

    #[test]
    fn four_discs_keep_their_own_texture_names() {
        assert_eq!(
            disc_texture_name("minecraft:music_disc_creator"),
            "music_disc_creator"
        );
        assert_eq!(
            disc_texture_name("minecraft:music_disc_creator_music_box"),
            "music_disc_creator_music_box"
        );
        assert_eq!(
            disc_texture_name("minecraft:music_disc_precipice"),
            "music_disc_precipice"
        );
        assert_eq!(
            disc_texture_name("minecraft:music_disc_relic"),
            "music_disc_relic"
        );
    }

    #[test]
    fn unknown_identifiers_pass_through() {
        assert_eq!(disc_texture_name("mymod:vinyl"), "mymod:vinyl");
    }

    #[test]
    fn alpha_reads_out_of_bounds_as_transparent() {
        let image = RawImage::new(2, 1, vec![10, 20, 30, 200, 40, 50, 60, 0]);
        assert_eq!(image.alpha(0, 0), 200);
        assert_eq!(image.alpha(1, 0), 0);
        assert_eq!(image.alpha(2, 0), 0);
        assert_eq!(image.alpha(0, 1), 0);
    }
}
