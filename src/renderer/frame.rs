//! Frame composition
//!
//! Turns the round state into an ordered list of textured quads. Nothing
//! here touches the GPU, so the layout of a frame can be checked in tests.

use std::ops::Range;

use glam::IVec2;

use super::shapes::{filled_rect, sprite};
use super::text::PixelFont;
use super::vertex::Vertex;
use crate::config::GameConfig;
use crate::sim::{Rect, RoundState, Side};

/// Gap between the HUD labels and the arena edges
const HUD_MARGIN: i32 = 10;

/// Texture a batch of quads samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// 1x1 white, for solid shapes and text
    White,
    Background,
    RedShip,
    YellowShip,
}

impl TextureSlot {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            TextureSlot::White => 0,
            TextureSlot::Background => 1,
            TextureSlot::RedShip => 2,
            TextureSlot::YellowShip => 3,
        }
    }

    pub fn ship(side: Side) -> Self {
        match side {
            Side::Red => TextureSlot::RedShip,
            Side::Yellow => TextureSlot::YellowShip,
        }
    }
}

/// A run of consecutive vertices sharing one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: TextureSlot,
    pub vertices: Range<u32>,
}

/// Vertices in painter's order plus the batches that slice them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    pub fn push_quad(&mut self, texture: TextureSlot, quad: [Vertex; 6]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad);
        let end = self.vertices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.end = end,
            _ => self.batches.push(DrawBatch {
                texture,
                vertices: start..end,
            }),
        }
    }

    fn push_text(&mut self, font: &PixelFont, text: &str, origin: IVec2, color: [f32; 4]) {
        for cell in font.layout(text, origin) {
            self.push_quad(TextureSlot::White, filled_rect(&cell, color));
        }
    }
}

/// The two font sizes the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub hud: PixelFont,
    pub banner: PixelFont,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            hud: PixelFont::HUD,
            banner: PixelFont::BANNER,
        }
    }
}

pub fn health_label(health: u32) -> String {
    format!("Health: {}", health)
}

pub fn winner_label(winner: Side) -> String {
    format!("{} Wins!", winner.label())
}

/// Compose one play frame: background, barrier, health labels, ships,
/// then projectiles.
pub fn compose(config: &GameConfig, round: &RoundState, fonts: &Fonts) -> DrawList {
    let arena = Rect::new(0, 0, config.arena.width, config.arena.height);
    let palette = &config.palette;
    let mut list = DrawList::default();

    list.push_quad(TextureSlot::Background, sprite(&arena));
    list.push_quad(TextureSlot::White, filled_rect(&config.barrier(), palette.barrier));

    let red_text = health_label(round.red.health);
    list.push_text(
        &fonts.hud,
        &red_text,
        IVec2::new(HUD_MARGIN, HUD_MARGIN),
        palette.text,
    );
    let yellow_text = health_label(round.yellow.health);
    let yellow_width = fonts.hud.measure(&yellow_text).x;
    list.push_text(
        &fonts.hud,
        &yellow_text,
        IVec2::new(config.arena.width - yellow_width - HUD_MARGIN, HUD_MARGIN),
        palette.text,
    );

    for side in Side::ALL {
        list.push_quad(TextureSlot::ship(side), sprite(&round.ship(side).rect));
    }

    for side in Side::ALL {
        let color = palette.projectile(side);
        for projectile in round.projectiles(side) {
            list.push_quad(TextureSlot::White, filled_rect(&projectile.rect, color));
        }
    }

    list
}

/// Compose the winner screen: the final play frame with the banner centred
/// on top of it.
pub fn compose_winner(
    config: &GameConfig,
    round: &RoundState,
    fonts: &Fonts,
    winner: Side,
) -> DrawList {
    let mut list = compose(config, round, fonts);
    let text = winner_label(winner);
    let size = fonts.banner.measure(&text);
    let origin = IVec2::new(
        config.arena.width / 2 - size.x / 2,
        config.arena.height / 2 - size.y / 2,
    );
    list.push_text(&fonts.banner, &text, origin, config.palette.text);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Projectile, spawn_projectile};

    fn textures(list: &DrawList) -> Vec<TextureSlot> {
        list.batches.iter().map(|b| b.texture).collect()
    }

    #[test]
    fn test_painter_order() {
        let config = GameConfig::standard();
        let round = RoundState::new(&config);
        let list = compose(&config, &round, &Fonts::default());

        assert_eq!(
            textures(&list),
            vec![
                TextureSlot::Background,
                TextureSlot::White,
                TextureSlot::RedShip,
                TextureSlot::YellowShip,
            ]
        );
    }

    #[test]
    fn test_batches_cover_all_vertices() {
        let config = GameConfig::standard();
        let mut round = RoundState::new(&config);
        let shot = spawn_projectile(Side::Red, &round.red.rect, &config.projectile);
        round.red_projectiles.push(shot);

        let list = compose(&config, &round, &Fonts::default());
        let mut next = 0;
        for batch in &list.batches {
            assert_eq!(batch.vertices.start, next);
            next = batch.vertices.end;
        }
        assert_eq!(next as usize, list.vertices.len());
    }

    #[test]
    fn test_projectiles_drawn_last_in_owner_color() {
        let config = GameConfig::standard();
        let mut round = RoundState::new(&config);
        round.yellow_projectiles.push(Projectile {
            owner: Side::Yellow,
            rect: Rect::new(600, 100, 12, 6),
            velocity: -7,
        });

        let list = compose(&config, &round, &Fonts::default());
        let last = list.batches.last().expect("projectile batch");
        assert_eq!(last.texture, TextureSlot::White);
        assert_eq!(last.vertices.len(), 6);
        let vertex = list.vertices[last.vertices.start as usize];
        assert_eq!(vertex.color, config.palette.yellow_projectile);
    }

    #[test]
    fn test_yellow_hud_right_aligned() {
        let config = GameConfig::standard();
        let round = RoundState::new(&config);
        let fonts = Fonts::default();
        let list = compose(&config, &round, &fonts);

        // Barrier and both labels share the batch after the background
        let batch = &list.batches[1];
        let text: Vec<&Vertex> = list.vertices[batch.vertices.start as usize..batch.vertices.end as usize]
            .iter()
            .filter(|v| v.color == config.palette.text)
            .collect();
        let min_x = text.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = text.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);

        assert_eq!(min_x, 10.0);
        assert_eq!(max_x, (config.arena.width - 10) as f32);
    }

    #[test]
    fn test_winner_banner_is_centred() {
        let config = GameConfig::standard();
        let round = RoundState::new(&config);
        let fonts = Fonts::default();
        let play = compose(&config, &round, &fonts);
        let winner = compose_winner(&config, &round, &fonts, Side::Yellow);

        let banner = &winner.vertices[play.vertices.len()..];
        assert!(!banner.is_empty());
        let size = fonts.banner.measure("Yellow Wins!");
        let min_x = banner.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = banner.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        let min_y = banner.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_eq!(min_x, (config.arena.width / 2 - size.x / 2) as f32);
        assert_eq!(min_y, (config.arena.height / 2 - size.y / 2) as f32);
        assert!(max_x <= min_x + size.x as f32);
    }

    #[test]
    fn test_labels() {
        assert_eq!(health_label(7), "Health: 7");
        assert_eq!(winner_label(Side::Red), "Red Wins!");
    }
}
