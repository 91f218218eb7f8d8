//! Scrolling background layers

use serde::{Deserialize, Serialize};

use crate::presentation::{AssetId, Presentation};
use crate::tuning::LayerTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub sprite: AssetId,
    /// Scroll offset in [0, width)
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub speed: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parallax {
    pub layers: Vec<Layer>,
}

impl Parallax {
    pub fn new(layers: &[LayerTuning]) -> Self {
        Self {
            layers: layers
                .iter()
                .map(|l| Layer {
                    sprite: l.sprite,
                    x: 0,
                    y: l.y,
                    width: l.width.max(1),
                    speed: l.speed,
                })
                .collect(),
        }
    }

    /// Scroll every layer left by its speed, wrapping at its width
    pub fn advance(&mut self) {
        for layer in &mut self.layers {
            layer.x = (layer.x - layer.speed).rem_euclid(layer.width);
        }
    }

    /// Each layer is drawn twice, side by side, to cover the wrap seam
    pub fn draw(&self, view: &mut dyn Presentation) {
        for layer in &self.layers {
            view.draw_entity(layer.sprite, layer.x, layer.y);
            view.draw_entity(layer.sprite, layer.x - layer.width, layer.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_layers_wrap() {
        let mut parallax = Parallax::new(&Tuning::default().layers);
        assert_eq!(parallax.layers.len(), 3);
        parallax.advance();
        assert_eq!(parallax.layers[0].x, 919);
        assert_eq!(parallax.layers[2].x, 916);
        for _ in 0..919 {
            parallax.advance();
        }
        assert_eq!(parallax.layers[0].x, 0);
    }
}
