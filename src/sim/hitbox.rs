//! Axis-aligned hitboxes
//!
//! Screen space, y grows downward. The overlap test is deliberately
//! one-directional: it asks whether `self` sits above `other` while sharing
//! part of its horizontal span. Swapping the operands changes the answer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hitbox {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Hitbox {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        let mut hitbox = Self::default();
        hitbox.update(top, bottom, left, right);
        hitbox
    }

    /// Replace all four edges at once
    pub fn update(&mut self, top: i32, bottom: i32, left: i32, right: i32) {
        debug_assert!(top <= bottom && left <= right, "inverted hitbox");
        *self = Self {
            top,
            bottom,
            left,
            right,
        };
    }

    /// Shift horizontally by `dx`
    pub fn translate_x(&mut self, dx: i32) {
        self.left += dx;
        self.right += dx;
    }

    /// Horizontal center, rounded toward the left edge
    pub fn midpoint(&self) -> i32 {
        self.left + (self.right - self.left) / 2
    }

    /// `self` is at or above `other` and one of its vertical edges lies in
    /// `other`'s horizontal span
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let above = self.bottom <= other.top;
        let left_inside = self.left >= other.left && self.left <= other.right;
        let right_inside = self.right >= other.left && self.right <= other.right;
        above && (left_inside || right_inside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_one_directional() {
        let player = Hitbox::new(100, 150, 200, 240);
        let obstacle = Hitbox::new(150, 200, 220, 300);

        assert!(player.overlaps(&obstacle));
        assert!(!obstacle.overlaps(&player));
    }

    #[test]
    fn test_no_overlap_without_shared_span() {
        let player = Hitbox::new(100, 150, 0, 40);
        let obstacle = Hitbox::new(160, 200, 50, 90);
        assert!(!player.overlaps(&obstacle));
    }

    #[test]
    fn test_no_overlap_when_below() {
        let player = Hitbox::new(100, 170, 200, 240);
        let obstacle = Hitbox::new(160, 200, 200, 240);
        assert!(!player.overlaps(&obstacle));
    }

    #[test]
    fn test_edges_touching_count() {
        let player = Hitbox::new(0, 10, 0, 10);
        let obstacle = Hitbox::new(10, 20, 10, 20);
        assert!(player.overlaps(&obstacle));
    }

    #[test]
    fn test_wider_self_spanning_other_misses() {
        // Neither edge of the wide box falls inside the narrow one
        let wide = Hitbox::new(0, 10, 0, 100);
        let narrow = Hitbox::new(20, 30, 40, 60);
        assert!(!wide.overlaps(&narrow));
    }

    #[test]
    fn test_translate_and_midpoint() {
        let mut hitbox = Hitbox::new(0, 10, 490, 530);
        assert_eq!(hitbox.midpoint(), 510);
        hitbox.translate_x(-10);
        assert_eq!(hitbox, Hitbox::new(0, 10, 480, 520));
    }
}
