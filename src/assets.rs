//! Startup asset loading
//!
//! Sprites, the background and both sound clips are loaded once before the
//! first frame. Any missing or unreadable file aborts startup with the path
//! in the error chain.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::IVec2;
use image::DynamicImage;
use image::imageops::FilterType;

use crate::audio::SoundClip;
use crate::config::GameConfig;
use crate::sim::Side;

pub const RED_SHIP_FILE: &str = "spaceship_red.png";
pub const YELLOW_SHIP_FILE: &str = "spaceship_yellow.png";
pub const BACKGROUND_FILE: &str = "space.png";
pub const FIRE_SOUND_FILE: &str = "fire.wav";
pub const HIT_SOUND_FILE: &str = "hit.wav";

/// Decoded RGBA8 pixels ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Sprite {
    /// A sprite filled with one color
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let rgba = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let image = image.to_rgba8();
        Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        }
    }
}

/// Turn a ship image toward the opponent: red a quarter turn
/// counter-clockwise, yellow a quarter turn clockwise.
pub fn face_opponent(image: DynamicImage, side: Side) -> DynamicImage {
    match side {
        Side::Red => image.rotate270(),
        Side::Yellow => image.rotate90(),
    }
}

/// Scale a ship image to the ship size, then turn it to face inward
pub fn prepare_ship(image: DynamicImage, size: IVec2, side: Side) -> Sprite {
    let scaled = image.resize_exact(size.x as u32, size.y as u32, FilterType::Triangle);
    Sprite::from_image(face_opponent(scaled, side))
}

/// Stretch the background over the whole arena
pub fn prepare_background(image: DynamicImage, width: i32, height: i32) -> Sprite {
    Sprite::from_image(image.resize_exact(width as u32, height as u32, FilterType::Triangle))
}

/// Everything the game needs from disk
pub struct Assets {
    pub red_ship: Sprite,
    pub yellow_ship: Sprite,
    pub background: Sprite,
    pub fire_sound: SoundClip,
    pub hit_sound: SoundClip,
}

impl Assets {
    /// The `assets/` directory shipped next to the crate manifest
    pub fn default_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    }

    pub fn load(dir: &Path, config: &GameConfig) -> Result<Self> {
        let ship_size = config.ship.size;
        let red_ship = prepare_ship(open_image(&dir.join(RED_SHIP_FILE))?, ship_size, Side::Red);
        let yellow_ship = prepare_ship(
            open_image(&dir.join(YELLOW_SHIP_FILE))?,
            ship_size,
            Side::Yellow,
        );
        let background = prepare_background(
            open_image(&dir.join(BACKGROUND_FILE))?,
            config.arena.width,
            config.arena.height,
        );
        let fire_sound = open_sound(&dir.join(FIRE_SOUND_FILE))?;
        let hit_sound = open_sound(&dir.join(HIT_SOUND_FILE))?;

        log::info!("Loaded assets from {}", dir.display());
        Ok(Self {
            red_ship,
            yellow_ship,
            background,
            fire_sound,
            hit_sound,
        })
    }
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("failed to load image {}", path.display()))
}

fn open_sound(path: &Path) -> Result<SoundClip> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read sound {}", path.display()))?;
    let clip = SoundClip::from_bytes(bytes)
        .with_context(|| format!("failed to decode sound {}", path.display()))?;
    log::debug!(
        "Decoded {}: {} Hz, {} channel(s)",
        path.display(),
        clip.sample_rate(),
        clip.channels()
    );
    Ok(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const MARK: Rgba<u8> = Rgba([255, 0, 0, 255]);

    /// 2x2 image with only the top-left pixel marked
    fn marked_corner() -> DynamicImage {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, MARK);
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_red_turns_counter_clockwise() {
        let turned = face_opponent(marked_corner(), Side::Red).to_rgba8();
        assert_eq!(*turned.get_pixel(0, 1), MARK);
    }

    #[test]
    fn test_yellow_turns_clockwise() {
        let turned = face_opponent(marked_corner(), Side::Yellow).to_rgba8();
        assert_eq!(*turned.get_pixel(1, 0), MARK);
    }

    #[test]
    fn test_prepare_ship_scales_to_ship_size() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(120, 80));
        let sprite = prepare_ship(image, IVec2::new(55, 55), Side::Red);
        assert_eq!((sprite.width, sprite.height), (55, 55));
        assert_eq!(sprite.rgba.len(), 55 * 55 * 4);
    }

    #[test]
    fn test_prepare_background_fills_arena() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(64, 64));
        let sprite = prepare_background(image, 900, 500);
        assert_eq!((sprite.width, sprite.height), (900, 500));
    }

    #[test]
    fn test_solid_sprite() {
        let sprite = Sprite::solid(2, 1, [1, 2, 3, 4]);
        assert_eq!(sprite.rgba, vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_asset_names_the_file() {
        let dir = std::env::temp_dir().join("spaceship-duel-missing-assets");
        let err = match Assets::load(&dir, &GameConfig::standard()) {
            Ok(_) => panic!("loading from an empty directory must fail"),
            Err(err) => err,
        };
        assert!(format!("{:#}", err).contains(RED_SHIP_FILE));
    }

    #[test]
    fn test_shipped_assets_load() {
        let assets = Assets::load(&Assets::default_dir(), &GameConfig::standard())
            .expect("assets directory should be complete");
        assert_eq!((assets.red_ship.width, assets.red_ship.height), (55, 55));
        assert_eq!((assets.background.width, assets.background.height), (900, 500));
    }
}
