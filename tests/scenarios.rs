//! End-to-end runs of the tick orchestrator through recording collaborators

use arctic_jumper::Tuning;
use arctic_jumper::persistence::{MemoryStore, Store};
use arctic_jumper::presentation::{AssetId, Intent, RecordingSink};
use arctic_jumper::sim::{Flags, GameSession, Host, InputEvent, ModeKind, tick};

struct Harness {
    session: GameSession,
    view: RecordingSink,
    audio: RecordingSink,
    store: MemoryStore,
}

impl Harness {
    fn new(store: MemoryStore) -> Self {
        Self {
            session: GameSession::new(Tuning::default(), 2024, &store),
            view: RecordingSink::new(),
            audio: RecordingSink::new(),
            store,
        }
    }

    fn playing(store: MemoryStore) -> Self {
        let mut harness = Self::new(store);
        harness.session.skip_intro();
        harness
    }

    fn with_host<R>(&mut self, f: impl FnOnce(&mut GameSession, &mut Host<'_>) -> R) -> R {
        let mut host = Host {
            view: &mut self.view,
            audio: &mut self.audio,
            store: &mut self.store,
        };
        f(&mut self.session, &mut host)
    }

    fn tick(&mut self) {
        self.with_host(|session, host| tick(session, host));
    }

    fn press(&mut self, input: InputEvent) {
        self.session.push_input(input);
        self.tick();
    }

    /// Tick until `done` holds; returns the ticks taken, or None past `limit`
    fn run_until(&mut self, limit: u32, done: impl Fn(&GameSession) -> bool) -> Option<u32> {
        for n in 1..=limit {
            self.tick();
            if done(&self.session) {
                return Some(n);
            }
        }
        None
    }

    fn count_sfx(&self, id: AssetId) -> usize {
        self.audio.sfx().into_iter().filter(|s| *s == id).count()
    }
}

fn in_mode(kind: ModeKind) -> impl Fn(&GameSession) -> bool {
    move |s| s.mode_kind() == kind
}

#[test]
fn boot_title_and_start_sequence() {
    let mut h = Harness::new(MemoryStore::new());
    let boot_ticks = h.session.tuning.boot_ticks();

    assert_eq!(h.run_until(10_000, in_mode(ModeKind::Menu)), Some(boot_ticks));
    assert!(h.audio.contains(&Intent::Track(AssetId::BootSfx, false)));
    assert!(h.audio.contains(&Intent::Track(AssetId::TitleSong, true)));

    // Start is refused until the title card has landed
    h.press(InputEvent::Start);
    assert!(!h.session.flags().game_starting);

    h.run_until(500, |s| s.flags().title_sequence_done)
        .expect("title card never landed");
    assert!(h.view.contains(&Intent::StartPrompt));

    h.press(InputEvent::Start);
    assert!(h.session.flags().game_starting);
    assert!(h.audio.contains(&Intent::Sfx(AssetId::StartSfx)));
    assert!(h.audio.contains(&Intent::StopTrack));
    assert!(h.audio.contains(&Intent::Track(AssetId::MainSong, true)));

    h.run_until(500, in_mode(ModeKind::Play))
        .expect("intro never finished");
    assert!(h.session.player.is_at_start());
    assert!(!h.session.title_card.is_visible());
    assert_eq!(h.session.score, 0);
    assert_eq!(h.session.flags(), Flags::default());
}

#[test]
fn grounded_player_scores_every_obstacle_unharmed() {
    let mut h = Harness::playing(MemoryStore::new());
    for _ in 0..3000 {
        h.tick();
        assert!(h.session.enemies.occupied() <= 3);
    }
    assert!(h.session.score > 0);
    assert_eq!(h.session.player.hitpoints(), 3);
    assert_eq!(h.count_sfx(AssetId::ScoreSfx), h.session.score as usize);
    assert!(
        h.view
            .contains(&Intent::Score("Score:".to_string(), Some(h.session.score)))
    );
}

#[test]
fn jumping_into_obstacles_ends_the_run() {
    let mut store = MemoryStore::new();
    store.set_high_score(1000);
    let mut h = Harness::playing(store);

    // Keep hopping; an airborne player is what the obstacles catch
    let mut ticks = 0;
    while h.session.mode_kind() != ModeKind::Death && ticks < 20_000 {
        if h.session.player.grounded {
            h.session.push_input(InputEvent::Jump);
        }
        h.tick();
        ticks += 1;
    }

    assert_eq!(h.session.mode_kind(), ModeKind::Death);
    assert_eq!(h.session.player.hitpoints(), 0);
    assert_eq!(h.count_sfx(AssetId::HitSfx), 2);
    assert_eq!(h.count_sfx(AssetId::GameOverSfx), 1);
    assert!(!h.session.flags().new_high_score_achieved);
    assert_eq!(h.store.high_score(), Some(1000));
    assert!(h.view.contains(&Intent::ShowDeathOverlay));
}

#[test]
fn restart_clears_run_but_keeps_best() {
    let mut h = Harness::playing(MemoryStore::new());
    while h.session.mode_kind() != ModeKind::Death {
        if h.session.player.grounded {
            h.session.push_input(InputEvent::Jump);
        }
        h.tick();
        assert!(h.session.time_ticks < 50_000, "player never died");
    }

    let score = h.session.score;
    let best = h.session.high_score.best();
    assert_eq!(best, score);
    assert_eq!(h.session.flags().new_high_score_achieved, score > 0);
    if score > 0 {
        assert_eq!(h.store.high_score(), Some(score));
    }

    h.press(InputEvent::Restart);
    assert_eq!(h.session.mode_kind(), ModeKind::Death);

    let cooldown = h.session.tuning.cooldown_ticks();
    assert!(h.run_until(cooldown, |s| s.flags().game_over_timer_elapsed).is_some());
    assert!(h.view.contains(&Intent::GameOverScreen {
        timer_done: true,
        new_high_score: score > 0,
        score,
    }));

    h.press(InputEvent::Restart);
    assert_eq!(h.session.mode_kind(), ModeKind::Play);
    assert_eq!(h.session.score, 0);
    assert_eq!(h.session.player.hitpoints(), 3);
    assert!(!h.session.player.is_hurt());
    assert!(h.session.player.grounded);
    assert_eq!(h.session.enemies.occupied(), 0);
    assert_eq!(h.session.high_score.best(), best);
    assert!(h.view.contains(&Intent::HideDeathOverlay));
}

#[test]
fn menu_options_freeze_title_and_persist_settings() {
    let mut store = MemoryStore::new();
    store.set_high_score(9);
    let mut h = Harness::new(store);
    h.run_until(10_000, in_mode(ModeKind::Menu)).expect("boot never ended");
    h.tick();

    h.press(InputEvent::Options);
    assert!(h.session.flags().is_options_open);
    let card = h.session.title_card.pos;
    let layer = h.session.parallax.layers[0].x;
    for _ in 0..20 {
        h.tick();
    }
    assert_eq!(h.session.title_card.pos, card);
    assert_eq!(h.session.parallax.layers[0].x, layer);
    assert!(h.view.contains(&Intent::OptionsScreen));

    h.with_host(|session, host| {
        session.set_music_volume(0.8, host);
        session.set_sfx_volume(1.7, host);
        session.delete_high_score(host);
    });
    assert_eq!(h.store.music_volume(), Some(0.8));
    assert_eq!(h.store.sfx_volume(), Some(1.0));
    assert!(h.audio.contains(&Intent::MusicVolume(0.8)));
    assert!(h.audio.contains(&Intent::SfxVolume(1.0)));
    assert_eq!(h.store.high_score(), Some(0));
    assert_eq!(h.session.high_score.best(), 0);

    h.press(InputEvent::Options);
    assert!(!h.session.flags().is_options_open);
    assert!(h.view.contains(&Intent::ClearOverlay));
    h.tick();
    assert_ne!(h.session.parallax.layers[0].x, layer);
}

#[test]
fn stored_settings_reach_audio_on_first_tick() {
    let mut store = MemoryStore::new();
    store.set_music_volume(0.25);
    store.set_high_score(12);
    let mut h = Harness::new(store);
    assert_eq!(h.session.high_score.best(), 12);

    h.tick();
    assert!(h.audio.contains(&Intent::MusicVolume(0.25)));
    assert!(h.audio.contains(&Intent::SfxVolume(0.5)));
}

#[test]
fn delete_high_score_during_play_redraws_hud() {
    let mut store = MemoryStore::new();
    store.set_high_score(40);
    let mut h = Harness::playing(store);
    h.press(InputEvent::Pause);
    h.press(InputEvent::Options);

    h.with_host(|session, host| session.delete_high_score(host));
    assert!(
        h.view
            .contains(&Intent::Highscore("High Score:".to_string(), Some(0)))
    );
    assert_eq!(h.store.high_score(), Some(0));
}
