//! Title card slide animation

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCard {
    pub pos: IVec2,
    target: IVec2,
    shown: IVec2,
    hidden: IVec2,
    speed: i32,
    /// Stop drawing once the target is reached
    erase_on_arrival: bool,
    visible: bool,
    done: bool,
}

impl TitleCard {
    /// Parked off-screen with nothing to animate
    pub fn new(tuning: &Tuning) -> Self {
        let hidden = IVec2::new(tuning.title_hidden.0, tuning.title_hidden.1);
        Self {
            pos: hidden,
            target: hidden,
            shown: IVec2::new(tuning.title_shown.0, tuning.title_shown.1),
            hidden,
            speed: tuning.title_speed.max(1),
            erase_on_arrival: true,
            visible: false,
            done: true,
        }
    }

    /// Drop in from above and stay
    pub fn slide_in(&mut self) {
        self.start(self.hidden, self.shown, false);
    }

    /// Leave from wherever it is and disappear
    pub fn slide_out(&mut self) {
        self.start(self.pos, self.hidden, true);
    }

    fn start(&mut self, from: IVec2, to: IVec2, erase_on_arrival: bool) {
        self.pos = from;
        self.target = to;
        self.erase_on_arrival = erase_on_arrival;
        self.visible = true;
        self.done = from == to;
        if self.done && erase_on_arrival {
            self.visible = false;
        }
    }

    /// Step toward the target
    pub fn advance(&mut self) {
        if self.done {
            return;
        }
        let delta = (self.target - self.pos).clamp(IVec2::splat(-self.speed), IVec2::splat(self.speed));
        self.pos += delta;
        if self.pos == self.target {
            self.done = true;
            if self.erase_on_arrival {
                self.visible = false;
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
