//! Planetoids headless runner
//!
//! Loads a level (first argument, or the bundled first wave) and an optional
//! JSON config override (second argument), then plays a scripted session and
//! logs what a renderer and audio backend would have been asked to do.
//!
//! Run with `RUST_LOG=debug` to see every split and shot.

use std::error::Error;
use std::fs;

use planetoids::audio::{AudioSink, SoundEffect};
use planetoids::controller::dispatch_sounds;
use planetoids::render::{Label, Renderer, Sprite};
use planetoids::sim::{FrameInput, Key, KeySource};
use planetoids::{Game, GameConfig, GameEvent, GamePhase, Level};

const BUNDLED_LEVEL: &str = include_str!("../levels/wave1.json");
const FRAME_DT: f32 = 1.0 / 60.0;
const SESSION_FRAMES: u32 = 3600;

/// Counts draw calls instead of drawing
#[derive(Default)]
struct TallyRenderer {
    sprites: usize,
    labels: Vec<String>,
}

impl Renderer for TallyRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        match sprite.visual.image_key() {
            Some(image) => log::trace!("image {} at {}", image, sprite.pos),
            None => log::trace!("circle r={} at {}", sprite.radius, sprite.pos),
        }
        self.sprites += 1;
    }

    fn draw_label(&mut self, label: &Label<'_>) {
        self.labels.push(label.text.to_string());
    }
}

#[derive(Default)]
struct TallyAudio {
    shots: usize,
}

impl AudioSink for TallyAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("play {}", effect.asset());
        self.shots += 1;
    }
}

/// Scripted pilot: tap start whenever the game waits for it, otherwise
/// spin slowly, thrust in bursts and keep the trigger down
struct ScriptedPilot {
    frame: u32,
    phase: GamePhase,
}

impl KeySource for ScriptedPilot {
    fn is_key_down(&self, key: Key) -> bool {
        let waiting = matches!(
            self.phase,
            GamePhase::Inactive | GamePhase::Paused | GamePhase::Complete
        );
        match key {
            Key::Start => waiting && self.frame % 30 == 0,
            Key::Fire | Key::TurnLeft => !waiting,
            Key::Thrust => !waiting && (self.frame / 45) % 3 == 0,
            Key::TurnRight => false,
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let level = match args.next() {
        Some(path) => {
            log::info!("Loading level from {}", path);
            Level::from_json(&fs::read_to_string(&path)?)?
        }
        None => Level::from_json(BUNDLED_LEVEL)?,
    };
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {}", path);
            GameConfig::from_json(&fs::read_to_string(&path)?)?
        }
        None => GameConfig::default(),
    };

    let mut game = Game::new(config, level)?;
    log::info!(
        "Playfield {}x{}, {} asteroids in the level",
        game.config().width,
        game.config().height,
        game.level().asteroids().len()
    );
    let mut audio = TallyAudio::default();
    let mut renderer = TallyRenderer::default();
    let mut completions = 0;

    for frame in 0..SESSION_FRAMES {
        let input = FrameInput::sample(&ScriptedPilot {
            frame,
            phase: game.phase(),
        });
        let events = game.update(&input, FRAME_DT);
        dispatch_sounds(&events, &mut audio);

        for event in &events {
            if let GameEvent::PhaseChanged {
                to: GamePhase::Complete,
                ..
            } = event
            {
                completions += 1;
                log::info!(
                    "Frame {}: {}",
                    frame,
                    game.title().unwrap_or("wave complete")
                );
            }
        }

        renderer.sprites = 0;
        renderer.labels.clear();
        game.draw(&mut renderer);
        if frame % 600 == 0 {
            log::info!(
                "Frame {}: {:?}, {} sprites, lives {:?}, labels {:?}",
                frame,
                game.phase(),
                renderer.sprites,
                game.lives(),
                renderer.labels
            );
        }
    }

    log::info!(
        "Session over: {} frames, {} completed waves, {} fire sounds",
        SESSION_FRAMES,
        completions,
        audio.shots
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Planetoids (headless) starting...");

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
