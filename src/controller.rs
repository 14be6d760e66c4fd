//! Top-level game controller
//!
//! A small finite-state machine over [`GamePhase`]. Each frame the controller
//! gathers an [`Observation`] (start-key edge, ship and asteroid status), asks
//! the pure [`next_phase`] function where to go, and then runs the side effects
//! of the transition itself: building a wave, respawning the ship, swapping the
//! on-screen text.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, SoundEffect};
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::level::Level;
use crate::render::{Label, LabelKind, Renderer};
use crate::sim::{FrameInput, Wave};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Inactive,
    /// One frame: build a fresh wave
    Loading,
    /// Normal play
    Active,
    /// Ship destroyed, waiting for start to continue
    Paused,
    /// One frame: respawn the ship
    Continue,
    /// Won or lost, waiting for start to restart
    Complete,
}

/// Everything the transition function looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Observation {
    /// Start key went down this frame
    pub start_pressed: bool,
    pub ship_alive: bool,
    pub asteroids_cleared: bool,
    pub lives_exhausted: bool,
}

/// Pure phase transition; at most one step per frame
pub fn next_phase(phase: GamePhase, obs: &Observation) -> GamePhase {
    use GamePhase::*;
    match phase {
        Inactive if obs.start_pressed => Loading,
        Loading => Active,
        Active if obs.asteroids_cleared => Complete,
        Active if !obs.ship_alive => Paused,
        Paused if obs.lives_exhausted => Complete,
        Paused if obs.start_pressed => Continue,
        Continue => Active,
        Complete if obs.start_pressed => Loading,
        other => other,
    }
}

/// Things the host should react to after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Sound(SoundEffect),
}

/// Forward every sound trigger in `events` to `sink`
pub fn dispatch_sounds<A: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut A) {
    for event in events {
        if let GameEvent::Sound(effect) = event {
            sink.play(*effect);
        }
    }
}

/// Game controller: owns the phase, the current wave and the display text
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    level: Level,
    phase: GamePhase,
    /// None until the first wave is loaded
    wave: Option<Wave>,
    title: Option<&'static str>,
    message: Option<&'static str>,
    /// Set when a start press is consumed, cleared once Loading or Continue has run
    start_was_down: bool,
}

impl Game {
    /// New game on the title screen
    pub fn new(config: GameConfig, level: Level) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            level,
            phase: GamePhase::Inactive,
            wave: None,
            title: Some(TITLE_TEXT),
            message: Some(START_MESSAGE),
            start_was_down: false,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn wave(&self) -> Option<&Wave> {
        self.wave.as_ref()
    }

    pub fn title(&self) -> Option<&'static str> {
        self.title
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Lives left in the current wave (None before the first wave)
    pub fn lives(&self) -> Option<u32> {
        self.wave.as_ref().map(Wave::lives)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Advance one frame; returns the events the host should handle
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
        let start_pressed = input.start && !self.start_was_down;

        let mut events = Vec::new();
        match self.phase {
            GamePhase::Active => {
                if let Some(wave) = self.wave.as_mut() {
                    wave.update(input, dt);
                }
                if input.fire {
                    events.push(GameEvent::Sound(SoundEffect::Fire));
                }
            }
            GamePhase::Continue if input.fire => {
                events.push(GameEvent::Sound(SoundEffect::Fire));
            }
            _ => {}
        }

        let obs = self.observe(start_pressed);
        let next = next_phase(self.phase, &obs);
        if next != self.phase {
            let from = self.phase;
            self.phase = next;
            self.enter(from, next);
            events.push(GameEvent::PhaseChanged { from, to: next });
        }
        events
    }

    fn observe(&self, start_pressed: bool) -> Observation {
        match &self.wave {
            Some(wave) => Observation {
                start_pressed,
                ship_alive: wave.ship().is_some(),
                asteroids_cleared: wave.is_won(),
                lives_exhausted: wave.is_lost(),
            },
            None => Observation {
                start_pressed,
                ..Default::default()
            },
        }
    }

    /// Side effects of entering `to` from `from`
    fn enter(&mut self, from: GamePhase, to: GamePhase) {
        log::info!("Phase {:?} -> {:?}", from, to);
        match to {
            GamePhase::Loading | GamePhase::Continue => {
                self.start_was_down = true;
                self.title = None;
                self.message = None;
            }
            GamePhase::Active => match from {
                GamePhase::Loading => {
                    self.start_was_down = false;
                    self.wave = Some(Wave::new(self.config.clone(), self.level.clone()));
                }
                GamePhase::Continue => {
                    self.start_was_down = false;
                    if let Some(wave) = self.wave.as_mut() {
                        wave.respawn_ship();
                    }
                }
                _ => {}
            },
            GamePhase::Paused => {
                if self.wave.as_ref().is_some_and(|w| !w.is_lost()) {
                    self.message = Some(CONTINUE_MESSAGE);
                }
            }
            GamePhase::Complete => {
                if let Some(wave) = &self.wave {
                    if wave.is_lost() {
                        self.title = Some(GAME_OVER_TEXT);
                    } else if wave.is_won() {
                        self.title = Some(WIN_TEXT);
                    }
                }
                self.message = Some(RESTART_MESSAGE);
            }
            GamePhase::Inactive => {}
        }
    }

    /// Read-only draw pass: wave, then message, then title
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(wave) = &self.wave {
            wave.draw(renderer);
        }
        if let Some(text) = self.message {
            renderer.draw_label(&Label {
                kind: LabelKind::Message,
                text,
            });
        }
        if let Some(text) = self.title {
            renderer.draw_label(&Label {
                kind: LabelKind::Title,
                text,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SpriteRecorder;
    use crate::sim::{Key, Vector2};

    /// Ship at the center with a small asteroid already touching it and a
    /// large one far away
    const CRASH_LEVEL: &str = r#"{
        "ship": { "position": [400, 350], "angle": 0 },
        "asteroids": [
            { "size": "small", "position": [440, 350], "direction": [1, 0] },
            { "size": "large", "position": [100, 100], "direction": [0, -1] }
        ]
    }"#;

    const QUIET_LEVEL: &str = r#"{
        "ship": { "position": [400, 350], "angle": 0 },
        "asteroids": [
            { "size": "large", "position": [100, 600], "direction": [1, 0] }
        ]
    }"#;

    fn game(json: &str, config: GameConfig) -> Game {
        Game::new(config, Level::from_json(json).expect("valid level")).expect("valid config")
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn start() -> FrameInput {
        FrameInput::with_keys(&[Key::Start])
    }

    /// Press start, then let Loading run
    fn begin(game: &mut Game) {
        game.update(&start(), 0.0);
        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn test_initial_title_screen() {
        let game = game(QUIET_LEVEL, GameConfig::default());
        assert_eq!(game.phase(), GamePhase::Inactive);
        assert!(game.wave().is_none());
        assert_eq!(game.title(), Some(TITLE_TEXT));
        assert_eq!(game.message(), Some(START_MESSAGE));
        assert_eq!(game.lives(), None);
    }

    #[test]
    fn test_start_loads_then_activates() {
        let mut game = game(QUIET_LEVEL, GameConfig::default());

        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Inactive);

        let events = game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Loading);
        assert_eq!(game.title(), None);
        assert_eq!(game.message(), None);
        assert_eq!(
            events,
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Inactive,
                to: GamePhase::Loading
            }]
        );

        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Active);
        let wave = game.wave().expect("wave built");
        assert_eq!(wave.asteroids().len(), 1);
        assert_eq!(wave.ship().map(|s| s.pos), Some(Vector2::new(400.0, 350.0)));
        assert_eq!(game.lives(), Some(GameConfig::default().starting_lives));

        // Start has no meaning during play
        game.update(&idle(), 0.0);
        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn test_held_start_is_one_press() {
        let mut game = game(QUIET_LEVEL, GameConfig::default());
        for _ in 0..5 {
            game.update(&start(), 0.0);
        }
        // Loading then Active, never a second transition out of Inactive
        assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn test_held_start_rearms_after_loading() {
        let mut game = game(CRASH_LEVEL, GameConfig::default());
        let phases: Vec<GamePhase> = (0..6)
            .map(|_| {
                game.update(&start(), 0.0);
                game.phase()
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                GamePhase::Loading,
                GamePhase::Active,
                GamePhase::Paused,
                GamePhase::Continue,
                GamePhase::Active,
                GamePhase::Active,
            ]
        );
        assert_eq!(game.lives(), Some(2));
    }

    #[test]
    fn test_crash_pauses_then_continues() {
        let mut game = game(CRASH_LEVEL, GameConfig::default());
        begin(&mut game);

        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Paused);
        assert_eq!(game.lives(), Some(2));
        assert_eq!(game.message(), Some(CONTINUE_MESSAGE));
        assert!(game.wave().and_then(Wave::ship).is_none());

        // Paused waits for a start press
        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Paused);

        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Continue);
        assert_eq!(game.message(), None);

        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Active);
        let wave = game.wave().expect("wave kept");
        assert_eq!(wave.ship().map(|s| s.pos), Some(Vector2::new(400.0, 350.0)));
        // Same wave: the surviving asteroid is still there
        assert_eq!(wave.asteroids().len(), 1);
        assert_eq!(wave.lives(), 2);
    }

    #[test]
    fn test_last_life_ends_game() {
        let config = GameConfig {
            starting_lives: 1,
            ..Default::default()
        };
        let mut game = game(CRASH_LEVEL, config);
        begin(&mut game);

        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Paused);
        assert_eq!(game.message(), None);

        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Complete);
        assert_eq!(game.title(), Some(GAME_OVER_TEXT));
        assert_eq!(game.message(), Some(RESTART_MESSAGE));

        // Restart builds a brand new wave
        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Loading);
        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Active);
        let wave = game.wave().expect("fresh wave");
        assert_eq!(wave.lives(), 1);
        assert_eq!(wave.asteroids().len(), 2);
        assert!(wave.ship().is_some());
    }

    #[test]
    fn test_clearing_asteroids_wins() {
        let mut game = game(
            r#"{ "ship": { "position": [400, 350], "angle": 0 }, "asteroids": [] }"#,
            GameConfig::default(),
        );
        begin(&mut game);
        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Complete);
        assert_eq!(game.title(), Some(WIN_TEXT));
        assert_eq!(game.message(), Some(RESTART_MESSAGE));
    }

    #[test]
    fn test_fire_sound_only_during_play() {
        let mut game = game(QUIET_LEVEL, GameConfig::default());
        let fire = FrameInput::with_keys(&[Key::Fire]);

        assert!(game.update(&fire, 0.0).is_empty());
        begin(&mut game);
        let events = game.update(&fire, 0.0);
        assert_eq!(events, vec![GameEvent::Sound(SoundEffect::Fire)]);

        struct Count(usize);
        impl AudioSink for Count {
            fn play(&mut self, _effect: SoundEffect) {
                self.0 += 1;
            }
        }
        let mut sink = Count(0);
        dispatch_sounds(&events, &mut sink);
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn test_fire_sound_while_continuing() {
        let mut game = game(CRASH_LEVEL, GameConfig::default());
        let fire = FrameInput::with_keys(&[Key::Fire]);
        begin(&mut game);

        game.update(&idle(), 0.0);
        assert_eq!(game.phase(), GamePhase::Paused);
        // No sound while paused
        assert!(game.update(&fire, 0.0).is_empty());

        game.update(&start(), 0.0);
        assert_eq!(game.phase(), GamePhase::Continue);
        let events = game.update(&fire, 0.0);
        assert_eq!(
            events,
            vec![
                GameEvent::Sound(SoundEffect::Fire),
                GameEvent::PhaseChanged {
                    from: GamePhase::Continue,
                    to: GamePhase::Active
                },
            ]
        );
    }

    #[test]
    fn test_transition_table() {
        use GamePhase::*;
        let pressed = Observation {
            start_pressed: true,
            ship_alive: true,
            ..Default::default()
        };
        let idle = Observation {
            ship_alive: true,
            ..Default::default()
        };
        assert_eq!(next_phase(Inactive, &idle), Inactive);
        assert_eq!(next_phase(Inactive, &pressed), Loading);
        assert_eq!(next_phase(Loading, &idle), Active);
        assert_eq!(next_phase(Active, &pressed), Active);
        assert_eq!(next_phase(Continue, &idle), Active);
        assert_eq!(next_phase(Complete, &idle), Complete);
        assert_eq!(next_phase(Complete, &pressed), Loading);

        let crashed = Observation::default();
        assert_eq!(next_phase(Active, &crashed), Paused);
        assert_eq!(next_phase(Paused, &crashed), Paused);
        assert_eq!(
            next_phase(
                Paused,
                &Observation {
                    start_pressed: true,
                    ..Default::default()
                }
            ),
            Continue
        );
        // Exhausted lives win over a start press
        assert_eq!(
            next_phase(
                Paused,
                &Observation {
                    start_pressed: true,
                    lives_exhausted: true,
                    ..Default::default()
                }
            ),
            Complete
        );
        // Clearing the field wins over a crash
        assert_eq!(
            next_phase(
                Active,
                &Observation {
                    asteroids_cleared: true,
                    ..Default::default()
                }
            ),
            Complete
        );
    }

    #[test]
    fn test_draw_title_screen_and_play() {
        let mut game = game(QUIET_LEVEL, GameConfig::default());
        let mut recorder = SpriteRecorder::default();
        game.draw(&mut recorder);
        assert!(recorder.sprites.is_empty());
        assert_eq!(
            recorder.labels,
            vec![
                (LabelKind::Message, START_MESSAGE.to_string()),
                (LabelKind::Title, TITLE_TEXT.to_string()),
            ]
        );

        begin(&mut game);
        recorder.clear();
        game.draw(&mut recorder);
        assert_eq!(recorder.sprites.len(), 2);
        assert!(recorder.labels.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            width: 0.0,
            ..Default::default()
        };
        let level = Level::from_json(QUIET_LEVEL).expect("valid level");
        assert!(Game::new(config, level).is_err());
    }
}
