//! Arctic Jumper entry point
//!
//! Native builds run a headless session: an autopilot presses the keys, the
//! frame limiter turns a synthetic 60 Hz display clock into simulation ticks,
//! and every draw/audio request goes to the log. Set `RUST_LOG=debug` to see
//! spawns, hits and sound cues.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use arctic_jumper::Tuning;
    use arctic_jumper::persistence::JsonFileStore;
    use arctic_jumper::platform::{FrameLimiter, Key, init_logging};
    use arctic_jumper::presentation::{AssetId, AssetLocator, AssetManifest, AudioSink, Presentation};
    use arctic_jumper::sim::{GameSession, Host, ModeKind, tick};

    /// Display refresh rate of the simulated host
    const DISPLAY_HZ: f64 = 60.0;
    /// Autopilot jumps when the nearest obstacle is this close (px)
    const JUMP_DISTANCE: i32 = 120;

    #[derive(Parser, Debug)]
    #[command(name = "arctic-jumper")]
    #[command(about = "Headless Arctic Jumper run driven by a naive autopilot")]
    struct Options {
        /// Simulated wall-clock seconds to run
        #[arg(long, default_value_t = 60)]
        seconds: u32,
        /// RNG seed; defaults to the current time
        #[arg(long)]
        seed: Option<u64>,
        /// JSON balance overrides
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// JSON asset manifest overrides
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Save file for high score and volume settings
        #[arg(long, default_value = "arctic_jumper_save.json")]
        save: PathBuf,
    }

    fn load_tuning(path: Option<&PathBuf>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match fs::read_to_string(path).map(|json| Tuning::from_json(&json)) {
            Ok(Ok(tuning)) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(Err(e)) => {
                log::warn!("Bad tuning file {}: {}, using defaults", path.display(), e);
                Tuning::default()
            }
            Err(e) => {
                log::warn!("Can't read {}: {}, using defaults", path.display(), e);
                Tuning::default()
            }
        }
    }

    fn load_manifest(path: Option<&PathBuf>) -> AssetManifest {
        let Some(path) = path else {
            return AssetManifest::default();
        };
        match fs::read_to_string(path).map(|json| AssetManifest::from_json(&json)) {
            Ok(Ok(manifest)) => manifest,
            Ok(Err(e)) => {
                log::warn!("Bad asset manifest {}: {}, using defaults", path.display(), e);
                AssetManifest::default()
            }
            Err(e) => {
                log::warn!("Can't read {}: {}, using defaults", path.display(), e);
                AssetManifest::default()
            }
        }
    }

    /// Writes every presentation and audio request to the log
    struct LogSink {
        manifest: AssetManifest,
        overlay: Option<&'static str>,
    }

    impl LogSink {
        fn file(&self, id: AssetId) -> String {
            self.manifest
                .locate(id)
                .unwrap_or_else(|| id.as_str().to_string())
        }

        fn overlay(&mut self, name: &'static str) {
            if self.overlay != Some(name) {
                log::info!("[screen] {}", name);
                self.overlay = Some(name);
            }
        }
    }

    impl Presentation for LogSink {
        fn draw_score(&mut self, text: &str, value: Option<u32>) {
            log::trace!("[hud] {} {:?}", text, value);
        }

        fn draw_health(&mut self, text: &str, hp: u8) {
            log::trace!("[hud] {} {}", text, hp);
        }

        fn draw_highscore(&mut self, text: &str, value: Option<u32>) {
            log::trace!("[hud] {} {:?}", text, value);
        }

        fn show_start_prompt(&mut self) {
            self.overlay("press space to start");
        }

        fn show_pause_screen(&mut self) {
            self.overlay("paused");
        }

        fn show_options_screen(&mut self) {
            self.overlay("options");
        }

        fn clear_overlay(&mut self) {
            self.overlay = None;
        }

        fn show_game_over_screen(&mut self, timer_done: bool, is_new_high_score: bool, score: u32) {
            if timer_done {
                self.overlay(if is_new_high_score {
                    "game over, new high score"
                } else {
                    "game over"
                });
            }
            log::trace!("[screen] game over, score {}", score);
        }

        fn show_death_overlay(&mut self) {
            log::debug!("[screen] death overlay on");
        }

        fn hide_death_overlay(&mut self) {
            log::debug!("[screen] death overlay off");
        }

        fn draw_entity(&mut self, sprite: AssetId, x: i32, y: i32) {
            log::trace!("[draw] {} at ({}, {})", self.file(sprite), x, y);
        }
    }

    impl AudioSink for LogSink {
        fn play_sfx(&mut self, id: AssetId) {
            log::debug!("[sfx] {}", self.file(id));
        }

        fn play_track(&mut self, id: AssetId, looped: bool) {
            log::info!("[music] {} (looped: {})", self.file(id), looped);
        }

        fn stop_track(&mut self) {
            log::debug!("[music] stop");
        }

        fn set_music_volume(&mut self, volume: f32) {
            log::debug!("[music] volume {:.2}", volume);
        }

        fn set_sfx_volume(&mut self, volume: f32) {
            log::debug!("[sfx] volume {:.2}", volume);
        }
    }

    /// Press whatever key a naive player would press right now
    fn autopilot(session: &GameSession) -> Option<Key> {
        let flags = session.flags();
        match session.mode_kind() {
            ModeKind::Menu if flags.title_sequence_done && !flags.game_starting => Some(Key::Space),
            ModeKind::Death if flags.game_over_timer_elapsed => Some(Key::Space),
            ModeKind::Play if session.player.grounded => {
                let player = session.player.hitbox;
                session
                    .obstacles()
                    .map(|o| o.hitbox.left - player.right)
                    .any(|gap| (0..=JUMP_DISTANCE).contains(&gap))
                    .then_some(Key::Space)
            }
            _ => None,
        }
    }

    pub fn run() {
        init_logging();
        log::info!("Arctic Jumper (headless) starting...");

        let options = Options::parse();
        let tuning = load_tuning(options.tuning.as_ref());
        let seed = options.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut store = JsonFileStore::load(options.save.clone());
        let mut view = LogSink {
            manifest: load_manifest(options.assets.as_ref()),
            overlay: None,
        };
        let mut audio = LogSink {
            manifest: view.manifest.clone(),
            overlay: None,
        };

        let mut session = GameSession::new(tuning, seed, &store);
        let mut limiter = FrameLimiter::new(session.tuning.tick_ms());
        let mut runs = 0u32;
        let frames = (options.seconds as f64 * DISPLAY_HZ) as u64;

        for frame in 0..=frames {
            let now_ms = frame as f64 * 1000.0 / DISPLAY_HZ;
            for _ in 0..limiter.advance(now_ms) {
                if let Some(key) = autopilot(&session) {
                    session.push_input(key.input());
                }

                let was = session.mode_kind();
                let mut host = Host {
                    view: &mut view,
                    audio: &mut audio,
                    store: &mut store,
                };
                tick(&mut session, &mut host);

                if was != ModeKind::Death && session.mode_kind() == ModeKind::Death {
                    runs += 1;
                    log::info!("Run {} ended with score {}", runs, session.score);
                }
            }
        }

        log::info!(
            "Simulated {} ticks, {} runs, best score {} (saved in {})",
            session.time_ticks,
            runs,
            session.high_score.best(),
            store.path().display()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly, this is just to satisfy the compiler
}
