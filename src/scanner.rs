use std::collections::HashMap;

use crate::tag::Tag;
use crate::world::{BlockPos, ChunkPos, WorldHost};

/// Registry name of the device block the scanner looks for.
pub const DEVICE_BLOCK: &str = "jukebox";

/// Chunks scanned on each side of the observer's chunk.
const WINDOW_REACH: i32 = 2;

/// Piecewise-linear day/night brightness over the world clock in [0, 1).
pub fn sun_brightness(time: f32) -> u8 {
    let d = (time - 0.5).abs();
    if d < 0.2 {
        90
    } else if d > 0.3 {
        255
    } else {
        // 1650 = 165 / 0.1 keeps the ramp continuous at both breakpoints.
        (1650.0 * (d - 0.2) + 90.0).round() as u8
    }
}

/// Record identifier a device's metadata names, if any.
///
/// Reads the `RecordItem.Name` path; any other shape along the way means
/// the device is empty or carries an unsupported payload.
pub fn record_name(tag: &Tag) -> Option<&str> {
    tag.get("RecordItem")?.get("Name")?.as_str()
}

/// Per-device state captured by the last completed scan.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceState {
    pub record_id: Option<String>,
    pub brightness: u8,
}

/// Rebuilds the device table from the chunks around the observer once per
/// scan tick. Renders read the table untouched between scans.
pub struct DeviceScanner {
    devices: HashMap<BlockPos, DeviceState>,
}

impl DeviceScanner {
    pub fn new() -> Self {
        Self {
            devices: HashMap::new(),
        }
    }

    pub fn devices(&self) -> impl Iterator<Item = (&BlockPos, &DeviceState)> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Full rebuild of the device table. An aborted scan (no observer, or
    /// the device block missing from the registry) leaves the previous
    /// table in place; unloaded chunks and empty devices are skipped
    /// silently and heal on a later tick.
    pub fn scan(&mut self, world: &dyn WorldHost) {
        let Some(observer) = world.observer_chunk() else {
            log::trace!("device scan skipped: no observer");
            return;
        };
        let Some(device_block) = world.block_id(DEVICE_BLOCK) else {
            log::debug!("device scan skipped: {DEVICE_BLOCK} not in block registry");
            return;
        };

        self.devices.clear();
        let brightness = sun_brightness(world.time_of_day());

        for dx in -WINDOW_REACH..=WINDOW_REACH {
            for dz in -WINDOW_REACH..=WINDOW_REACH {
                let chunk_pos = ChunkPos {
                    x: observer.x + dx,
                    z: observer.z + dz,
                };
                let Some(chunk) = world.chunk(chunk_pos) else {
                    continue;
                };
                for pos in chunk.find_blocks(device_block) {
                    let Some(tag) = world.block_entity(pos) else {
                        continue;
                    };
                    let Some(name) = record_name(&tag) else {
                        continue;
                    };
                    self.devices.insert(
                        pos,
                        DeviceState {
                            record_id: Some(name.to_owned()),
                            brightness,
                        },
                    );
                }
            }
        }
    }
}

impl Default for DeviceScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brightness_floor_at_midcycle() {
        assert_eq!(sun_brightness(0.5), 90);
        assert_eq!(sun_brightness(0.45), 90);
        assert_eq!(sun_brightness(0.65), 90);
    }

    #[test]
    fn brightness_ceiling_at_cycle_edges() {
        assert_eq!(sun_brightness(0.0), 255);
        assert_eq!(sun_brightness(1.0), 255);
        assert_eq!(sun_brightness(0.1), 255);
    }

    #[test]
    fn brightness_ramp_is_continuous_at_both_breakpoints() {
        assert_eq!(sun_brightness(0.7), 90);
        assert_eq!(sun_brightness(0.8), 255);
        assert_eq!(sun_brightness(0.3), 90);
        assert_eq!(sun_brightness(0.2), 255);
    }

    #[test]
    fn brightness_never_decreases_away_from_midcycle() {
        let mut previous = 0;
        for step in 0..=50 {
            let time = 0.5 + step as f32 * 0.01;
            let value = sun_brightness(time);
            assert!(value >= previous, "dip at time {time}");
            assert!((90..=255).contains(&value));
            previous = value;
        }
    }

    fn compound(fields: Vec<(&str, Tag)>) -> Tag {
        Tag::Compound(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn record_name_reads_the_nested_field() {
        let tag = compound(vec![(
            "RecordItem",
            compound(vec![
                ("Name", Tag::String("minecraft:music_disc_cat".to_owned())),
                ("Count", Tag::Byte(1)),
            ]),
        )]);
        assert_eq!(record_name(&tag), Some("minecraft:music_disc_cat"));
    }

    #[test]
    fn record_name_rejects_missing_or_misshapen_fields() {
        assert_eq!(record_name(&compound(vec![])), None);
        assert_eq!(
            record_name(&compound(vec![("RecordItem", Tag::Int(3))])),
            None
        );
        assert_eq!(
            record_name(&compound(vec![(
                "RecordItem",
                compound(vec![("Name", Tag::Int(9))])
            )])),
            None
        );
        assert_eq!(record_name(&Tag::String("RecordItem".to_owned())), None);
    }
}
