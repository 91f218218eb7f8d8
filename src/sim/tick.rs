//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one tick and reports what
//! to draw and play through the host collaborators.

use serde::{Deserialize, Serialize};

use super::hitbox::Hitbox;
use super::spawner::EnemyPool;
use super::state::{GameSession, Mode};
use crate::persistence::Store;
use crate::presentation::{
    AUTHOR_LINE, AssetId, AudioSink, HEALTH_LABEL, HIGHSCORE_LABEL, OPTIONS_HINT, Presentation,
    SCORE_LABEL,
};

/// Discrete player inputs, queued and applied at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Leave the title screen
    Start,
    Jump,
    /// Pause, or resume when paused with options closed
    Pause,
    /// Toggle the options screen (menu, or while paused)
    Options,
    /// New run from the game over screen
    Restart,
    /// Space: start, jump, resume or restart, whichever the mode accepts
    Confirm,
    /// Enter: options on the title screen or while paused, otherwise pause
    PauseOrOptions,
}

impl InputEvent {
    /// Settle a key-level event against the mode it is applied in
    fn resolve(self, mode: Mode) -> Option<InputEvent> {
        use InputEvent::*;
        match (self, mode) {
            (Confirm, Mode::Menu { .. }) => Some(Start),
            (Confirm, Mode::Play { paused: true, .. }) => Some(Pause),
            (Confirm, Mode::Play { .. }) => Some(Jump),
            (Confirm, Mode::Death { .. }) => Some(Restart),
            (PauseOrOptions, Mode::Menu { .. }) => Some(Options),
            (PauseOrOptions, Mode::Play { paused: true, .. }) => Some(Options),
            (PauseOrOptions, Mode::Play { .. }) => Some(Pause),
            (Confirm | PauseOrOptions, _) => None,
            (input, _) => Some(input),
        }
    }
}

/// External collaborators for one tick
pub struct Host<'a> {
    pub view: &'a mut dyn Presentation,
    pub audio: &'a mut dyn AudioSink,
    pub store: &'a mut dyn Store,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, host: &mut Host) {
    if session.time_ticks == 0 {
        host.audio.set_music_volume(session.settings.music_volume);
        host.audio.set_sfx_volume(session.settings.sfx_volume);
        host.audio.play_track(AssetId::BootSfx, false);
    }
    session.time_ticks += 1;

    for input in session.take_inputs() {
        apply_input(session, input, host);
    }

    // Background scrolls behind everything but the boot logo
    if !matches!(session.mode, Mode::Boot { .. }) {
        if !session.mode.motion_frozen() {
            session.parallax.advance();
        }
        session.parallax.draw(host.view);
    }

    match session.mode {
        Mode::Boot { .. } => boot(session, host),
        Mode::Menu { .. } => menu(session, host),
        Mode::Play { .. } => play(session, host),
        Mode::Death { .. } => death(session, host),
    }
}

/// Apply one queued input; anything the current mode doesn't accept is dropped
fn apply_input(session: &mut GameSession, input: InputEvent, host: &mut Host) {
    let Some(input) = input.resolve(session.mode) else {
        log::trace!("Ignored {:?} in {:?}", input, session.mode.kind());
        return;
    };
    let mut mode = session.mode;
    match (&mut mode, input) {
        (
            Mode::Menu {
                title_done: true,
                starting,
                options_open: false,
            },
            InputEvent::Start,
        ) if !*starting => {
            *starting = true;
            session.title_card.slide_out();
            host.audio.play_sfx(AssetId::StartSfx);
            host.audio.stop_track();
            host.audio.play_track(AssetId::MainSong, true);
            log::info!("Start pressed, leaving title screen");
        }
        (
            Mode::Menu {
                starting: false,
                options_open,
                ..
            },
            InputEvent::Options,
        )
        | (
            Mode::Play {
                paused: true,
                options_open,
            },
            InputEvent::Options,
        ) => {
            *options_open = !*options_open;
            if !*options_open {
                host.view.clear_overlay();
            }
        }
        (Mode::Play { paused: false, .. }, InputEvent::Jump) => {
            if session.player.jump() {
                host.audio.play_sfx(AssetId::JumpSfx);
            }
        }
        (
            Mode::Play {
                paused,
                options_open,
            },
            InputEvent::Pause,
        ) => {
            if !*paused {
                *paused = true;
                log::debug!("Paused");
            } else if !*options_open {
                *paused = false;
                host.view.clear_overlay();
                log::debug!("Resumed");
            }
        }
        (Mode::Death { .. }, InputEvent::Restart) => {
            if !session.restart(host) {
                log::trace!("Restart refused during cooldown");
            }
            return;
        }
        (_, input) => {
            log::trace!("Ignored {:?} in {:?}", input, session.mode.kind());
            return;
        }
    }
    session.mode = mode;
}

fn boot(session: &mut GameSession, host: &mut Host) {
    let Mode::Boot { mut timer } = session.mode else {
        return;
    };
    host.view.draw_entity(AssetId::BootLogo, 0, 0);
    if timer.tick() || timer.is_elapsed() {
        session.enter_menu(host);
    } else {
        session.mode = Mode::Boot { timer };
    }
}

fn menu(session: &mut GameSession, host: &mut Host) {
    let Mode::Menu {
        mut title_done,
        starting,
        options_open,
    } = session.mode
    else {
        return;
    };

    if !options_open {
        session.title_card.advance();
        if starting {
            session.player.move_to_start();
        } else if session.title_card.is_done() {
            title_done = true;
        }
    }
    session.mode = Mode::Menu {
        title_done,
        starting,
        options_open,
    };

    if session.title_card.is_visible() {
        let pos = session.title_card.pos;
        host.view.draw_entity(AssetId::TitleCard, pos.x, pos.y);
    }

    if starting {
        draw_player(session, host.view);
        if session.title_card.is_done() && session.player.is_at_start() {
            session.enter_play();
            draw_hud(session, host.view);
            return;
        }
    } else {
        host.view.draw_score(OPTIONS_HINT, None);
        host.view.draw_highscore(AUTHOR_LINE, None);
        if title_done {
            host.view.show_start_prompt();
        }
    }

    if options_open {
        host.view.show_options_screen();
    }
}

fn play(session: &mut GameSession, host: &mut Host) {
    let Mode::Play {
        paused,
        options_open,
    } = session.mode
    else {
        return;
    };

    if paused {
        draw_world(session, host.view);
        draw_hud(session, host.view);
        if options_open {
            host.view.show_options_screen();
        } else {
            host.view.show_pause_screen();
        }
        return;
    }

    session.spawner.advance(&mut session.enemies);
    session.enemies.advance(session.tuning.viewport_width);

    let mut hit = false;
    for obstacle in session.enemies.iter() {
        if session.player.hitbox.overlaps(&obstacle.hitbox) && session.player.take_damage() {
            log::debug!(
                "Hit by {:?}, {} hp left",
                obstacle.kind,
                session.player.hitpoints()
            );
            hit = true;
        }
    }

    session.player.update();

    let passed = score_passes(&session.player.hitbox, &mut session.enemies);
    for _ in 0..passed {
        host.audio.play_sfx(AssetId::ScoreSfx);
    }
    session.score += passed;

    draw_world(session, host.view);
    draw_hud(session, host.view);

    if !session.player.is_alive() {
        session.enter_death(host);
    } else if hit {
        host.audio.play_sfx(AssetId::HitSfx);
    }
}

fn death(session: &mut GameSession, host: &mut Host) {
    let Mode::Death {
        mut cooldown,
        new_high_score,
    } = session.mode
    else {
        return;
    };
    cooldown.tick();
    session.mode = Mode::Death {
        cooldown,
        new_high_score,
    };

    draw_world(session, host.view);
    draw_hud(session, host.view);
    host.view
        .show_game_over_screen(cooldown.is_elapsed(), new_high_score, session.score);
}

/// Latch every obstacle the player has just passed; returns how many
pub fn score_passes(player: &Hitbox, enemies: &mut EnemyPool) -> u32 {
    let mut passed = 0;
    for obstacle in enemies.iter_mut() {
        if obstacle.check_passed(player) {
            log::debug!("Passed {:?}", obstacle.kind);
            passed += 1;
        }
    }
    passed
}

fn draw_player(session: &GameSession, view: &mut dyn Presentation) {
    let pos = session.player.pos;
    view.draw_entity(AssetId::PlayerSprite, pos.x, pos.y);
}

fn draw_world(session: &GameSession, view: &mut dyn Presentation) {
    for obstacle in session.enemies.iter() {
        view.draw_entity(obstacle.sprite(), obstacle.pos.x, obstacle.pos.y);
    }
    draw_player(session, view);
}

fn draw_hud(session: &GameSession, view: &mut dyn Presentation) {
    view.draw_score(SCORE_LABEL, Some(session.score));
    view.draw_health(HEALTH_LABEL, session.player.hitpoints());
    view.draw_highscore(HIGHSCORE_LABEL, Some(session.high_score.best()));
}
