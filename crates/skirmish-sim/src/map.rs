//! Static arena geometry: bounds and rectangular obstacles.

use glam::Vec2;

use skirmish_core::types::Rect;

#[derive(Debug, Clone)]
pub struct ArenaMap {
    pub bounds: Rect,
    pub obstacles: Vec<Rect>,
}

impl ArenaMap {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
        }
    }

    pub fn add_obstacle(&mut self, rect: Rect) {
        self.obstacles.push(rect);
    }

    /// Outside the bounds or inside (or on the edge of) any obstacle.
    pub fn is_blocked(&self, position: Vec2) -> bool {
        !self.bounds.contains(position) || self.obstacles.iter().any(|o| o.contains(position))
    }

    /// Like `is_blocked`, with every obstacle grown by `margin` and the
    /// bounds shrunk by it.
    pub fn is_blocked_with_margin(&self, position: Vec2, margin: f32) -> bool {
        !self.bounds.inflate(-margin).contains(position)
            || self
                .obstacles
                .iter()
                .any(|o| o.inflate(margin).contains(position))
    }
}
