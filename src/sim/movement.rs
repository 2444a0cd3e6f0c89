//! Ship movement
//!
//! Each held direction moves the ship one step, but only if the step keeps
//! the ship strictly inside its bounds. A step that would touch or cross a
//! bound is skipped for that tick, never clamped.

use super::rect::Rect;
use crate::config::Bounds;

/// Held direction keys for one ship
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Move `rect` by `speed` for every held direction that passes its check
pub fn move_ship(rect: &mut Rect, input: ShipInput, bounds: &Bounds, speed: i32) {
    if input.left && rect.left() - speed > bounds.min_x {
        rect.pos.x -= speed;
    }
    if input.right && rect.right() + speed < bounds.max_x {
        rect.pos.x += speed;
    }
    if input.up && rect.top() - speed > bounds.min_y {
        rect.pos.y -= speed;
    }
    if input.down && rect.bottom() + speed < bounds.max_y {
        rect.pos.y += speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Side;
    use proptest::prelude::*;

    fn held(left: bool, right: bool, up: bool, down: bool) -> ShipInput {
        ShipInput {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn test_single_step() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Red);
        let mut rect = Rect::new(100, 300, 55, 55);

        move_ship(&mut rect, held(false, true, false, false), &bounds, 5);
        assert_eq!(rect.pos.x, 105);
        assert_eq!(rect.pos.y, 300);
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Red);
        let mut rect = Rect::new(100, 300, 55, 55);

        move_ship(&mut rect, held(true, false, true, false), &bounds, 5);
        assert_eq!((rect.pos.x, rect.pos.y), (95, 295));
    }

    #[test]
    fn test_blocked_step_is_skipped_not_clamped() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Red);

        // 5 - 5 == 0 is not strictly greater than the left bound
        let mut rect = Rect::new(5, 100, 55, 55);
        move_ship(&mut rect, held(true, false, false, false), &bounds, 5);
        assert_eq!(rect.pos.x, 5);

        // 6 - 5 == 1 passes
        let mut rect = Rect::new(6, 100, 55, 55);
        move_ship(&mut rect, held(true, false, false, false), &bounds, 5);
        assert_eq!(rect.pos.x, 1);

        // 3 units from the left edge: skipped instead of clamped to 0
        let mut rect = Rect::new(3, 100, 55, 55);
        move_ship(&mut rect, held(true, false, false, false), &bounds, 5);
        assert_eq!(rect.pos.x, 3);
    }

    #[test]
    fn test_red_ship_stops_before_barrier() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Red);
        let mut rect = Rect::new(100, 300, 55, 55);

        for _ in 0..200 {
            move_ship(&mut rect, held(false, true, false, false), &bounds, 5);
        }
        // 385 + 5 + 55 < 448 lets one more step through; 390 + 5 + 55 does not
        assert_eq!(rect.pos.x, 390);
        assert!(rect.right() < config.barrier().left());
    }

    #[test]
    fn test_yellow_ship_stops_after_barrier() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Yellow);
        let mut rect = Rect::new(745, 300, 55, 55);

        for _ in 0..200 {
            move_ship(&mut rect, held(true, false, false, false), &bounds, 5);
        }
        assert_eq!(rect.pos.x, 455);
        assert!(rect.left() > config.barrier().right());
    }

    #[test]
    fn test_vertical_bounds() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Yellow);
        let mut rect = Rect::new(745, 300, 55, 55);

        for _ in 0..200 {
            move_ship(&mut rect, held(false, false, false, true), &bounds, 5);
        }
        assert_eq!(rect.pos.y, 440);

        for _ in 0..200 {
            move_ship(&mut rect, held(false, false, true, false), &bounds, 5);
        }
        assert_eq!(rect.pos.y, 5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let config = GameConfig::standard();
        let bounds = config.bounds(Side::Red);
        let mut rect = Rect::new(100, 300, 55, 55);

        move_ship(&mut rect, held(true, true, true, true), &bounds, 5);
        assert_eq!((rect.pos.x, rect.pos.y), (100, 300));
    }

    proptest! {
        #[test]
        fn prop_ship_stays_strictly_inside_its_half(
            red_side in any::<bool>(),
            moves in proptest::collection::vec(any::<(bool, bool, bool, bool)>(), 0..400),
        ) {
            let config = GameConfig::standard();
            let side = if red_side { Side::Red } else { Side::Yellow };
            let bounds = config.bounds(side);
            let mut rect = Rect::from_parts(config.spawn(side), config.ship.size);

            for (left, right, up, down) in moves {
                move_ship(&mut rect, held(left, right, up, down), &bounds, config.ship.speed);
                prop_assert!(rect.left() > bounds.min_x);
                prop_assert!(rect.right() < bounds.max_x);
                prop_assert!(rect.top() > bounds.min_y);
                prop_assert!(rect.bottom() < bounds.max_y);
            }
        }
    }
}
