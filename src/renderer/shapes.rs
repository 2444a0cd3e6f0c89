//! Quad generation for rectangles and sprites

use super::vertex::{Vertex, WHITE};
use crate::sim::Rect;

/// Two triangles covering `rect`, sampling the `uv` box `[u0, v0, u1, v1]`
fn quad(rect: &Rect, uv: [f32; 4], color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (rect.left() as f32, rect.top() as f32);
    let (x1, y1) = (rect.right() as f32, rect.bottom() as f32);
    let [u0, v0, u1, v1] = uv;

    let tl = Vertex::new(x0, y0, u0, v0, color);
    let tr = Vertex::new(x1, y0, u1, v0, color);
    let bl = Vertex::new(x0, y1, u0, v1, color);
    let br = Vertex::new(x1, y1, u1, v1, color);

    [tl, bl, tr, tr, bl, br]
}

/// Solid rectangle, drawn with the plain white texture
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    quad(rect, [0.0, 0.0, 1.0, 1.0], color)
}

/// Whole texture stretched over `rect`
pub fn sprite(rect: &Rect) -> [Vertex; 6] {
    quad(rect, [0.0, 0.0, 1.0, 1.0], WHITE)
}
