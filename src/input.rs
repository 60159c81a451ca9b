use glam::Vec2;

/// Bounding rectangle of the render target in client (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Client coordinates to normalized device coordinates: x in [-1, 1] left to
/// right, y in [-1, 1] bottom to top. Pointers outside the rect map outside
/// that range; a zero-sized rect maps everything to the origin.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, rect: ClientRect) -> Vec2 {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x - rect.left) / rect.width;
    let y = (client_y - rect.top) / rect.height;
    Vec2::new(x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}
