//! Invariants that must hold for any input sequence

use arctic_jumper::Tuning;
use arctic_jumper::persistence::{MemoryStore, Store};
use arctic_jumper::presentation::RecordingSink;
use arctic_jumper::sim::{
    EnemyPool, Flags, GameSession, Hitbox, Host, InputEvent, ModeKind, Player, Spawner, tick,
};
use proptest::prelude::*;

/// Short boot and cooldown so random runs visit every mode
fn quick_tuning() -> Tuning {
    Tuning {
        boot_ms: 100,
        game_over_cooldown_ms: 200,
        invincibility_ticks: 30,
        ..Tuning::default()
    }
}

fn input() -> impl Strategy<Value = Option<InputEvent>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(InputEvent::Start)),
        3 => Just(Some(InputEvent::Jump)),
        1 => Just(Some(InputEvent::Pause)),
        1 => Just(Some(InputEvent::Options)),
        1 => Just(Some(InputEvent::Restart)),
        2 => Just(Some(InputEvent::Confirm)),
        1 => Just(Some(InputEvent::PauseOrOptions)),
    ]
}

fn hitbox() -> impl Strategy<Value = Hitbox> {
    (-500..500i32, 0..200i32, -500..500i32, 0..200i32)
        .prop_map(|(top, h, left, w)| Hitbox::new(top, top + h, left, left + w))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        stored_best in 0u32..20,
        inputs in prop::collection::vec(input(), 200..1500),
    ) {
        let mut store = MemoryStore::new();
        store.set_high_score(stored_best);
        let mut view = RecordingSink::new();
        let mut audio = RecordingSink::new();
        let mut session = GameSession::new(quick_tuning(), seed, &store);

        for input in inputs {
            if let Some(input) = input {
                session.push_input(input);
            }
            let before_mode = session.mode_kind();
            let before_score = session.score;
            let before_best = session.high_score.best();
            let before_hp = session.player.hitpoints();
            let was_hurt = session.player.is_hurt();

            let mut host = Host { view: &mut view, audio: &mut audio, store: &mut store };
            tick(&mut session, &mut host);
            view.intents.clear();
            audio.intents.clear();

            let mode = session.mode_kind();
            let flags = session.flags();

            // Flags only exist in the mode that owns them
            match mode {
                ModeKind::Boot => prop_assert_eq!(flags, Flags::default()),
                ModeKind::Menu => {
                    prop_assert!(!flags.is_paused);
                    prop_assert!(!flags.new_high_score_achieved && !flags.game_over_timer_elapsed);
                }
                ModeKind::Play => {
                    prop_assert!(!flags.title_sequence_done && !flags.game_starting);
                    prop_assert!(!flags.new_high_score_achieved && !flags.game_over_timer_elapsed);
                    prop_assert!(flags.is_paused || !flags.is_options_open);
                }
                ModeKind::Death => {
                    prop_assert!(!flags.is_paused && !flags.is_options_open);
                    prop_assert!(!flags.title_sequence_done && !flags.game_starting);
                }
            }

            // Score only drops when a new run begins
            let new_run = mode == ModeKind::Play && before_mode != ModeKind::Play;
            if new_run {
                prop_assert_eq!(session.score, 0);
            } else {
                prop_assert!(session.score >= before_score);
            }

            prop_assert!(session.high_score.best() >= before_best);
            prop_assert_eq!(store.high_score(), Some(session.high_score.best()));
            prop_assert!(session.enemies.occupied() <= session.enemies.capacity());
            prop_assert!(session.player.hitpoints() <= session.player.max_hitpoints());

            if was_hurt && before_mode == ModeKind::Play && mode != ModeKind::Play {
                prop_assert!(false, "died while invincible");
            }
            if was_hurt && !new_run {
                prop_assert_eq!(session.player.hitpoints(), before_hp);
            }
            if !new_run {
                prop_assert!(session.player.hitpoints() + 1 >= before_hp);
            }
        }
    }

    #[test]
    fn pool_never_exceeds_capacity(
        seed in any::<u64>(),
        capacity in 1usize..5,
        delays in prop::collection::vec(1u32..6, 1..4),
        ticks in 50usize..600,
    ) {
        let tuning = Tuning {
            enemy_capacity: capacity,
            initial_spawn_delay: 1,
            spawn_delays: delays,
            ..Tuning::default()
        };
        let mut spawner = Spawner::new(&tuning, seed);
        let mut pool = EnemyPool::new(tuning.enemy_capacity);
        for _ in 0..ticks {
            spawner.advance(&mut pool);
            pool.advance(tuning.viewport_width);
            prop_assert!(pool.occupied() <= capacity);
        }
    }

    #[test]
    fn jump_lands_where_it_started(start_y in -200..600i32, force in 1u8..12, wait in 1u8..4) {
        let mut tuning = Tuning {
            player_start: (160, start_y),
            ..Tuning::default()
        };
        tuning.jump.force = force;
        tuning.jump.frame_wait = wait;
        let mut player = Player::new(&tuning);

        prop_assert!(player.jump());
        let mut ticks = 0;
        while !player.grounded {
            player.update();
            ticks += 1;
            prop_assert!(player.pos.y <= start_y);
            prop_assert!(ticks < 10_000);
        }
        prop_assert_eq!(player.pos.y, start_y);
    }

    #[test]
    fn strictly_above_overlap_is_never_mutual(a in hitbox(), b in hitbox()) {
        if a.overlaps(&b) && a.bottom < b.top {
            prop_assert!(!b.overlaps(&a));
        }
    }

    #[test]
    fn damage_lands_once_per_window(hits in 1usize..50) {
        let mut player = Player::new(&Tuning::default());
        let window = Tuning::default().invincibility_ticks;
        prop_assert!(player.take_damage());
        for _ in 0..hits {
            prop_assert!(!player.take_damage());
        }
        prop_assert_eq!(player.hitpoints(), player.max_hitpoints() - 1);
        prop_assert_eq!(player.invincibility_remaining(), window);

        // The window closes after exactly its length in ticks
        for _ in 0..window {
            prop_assert!(player.is_hurt());
            player.update();
        }
        prop_assert_eq!(player.invincibility_remaining(), 0);
        prop_assert!(player.take_damage());
    }
}
