//! Kid-friendly falling-block game (default binary).
//!
//! Fixed 16 ms loop: render, poll input until the next tick, then advance
//! gravity and carry out the effects the engine asked for.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use kid_tetris::config::RunConfig;
use kid_tetris::core::{Effects, GameSnapshot, GameState};
use kid_tetris::input::{
    handle_key_event, is_guide_key, settings_toggle, should_quit, InputHandler, Toggle,
};
use kid_tetris::settings::{settings_path, toggle_hint, Settings};
use kid_tetris::term::{
    EffectDispatcher, FrameBuffer, GameView, HudView, TerminalRenderer, Viewport,
};
use kid_tetris::types::TICK_MS;

const GUIDE_HINT: &str = "Read the guide, then press Enter to start.";

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let path = settings_path(config.settings_path.as_deref());
    let settings = Settings::load(&path);
    let seed = config.seed_or_clock();
    eprintln!("[Settings] {} ({:?})", path.display(), settings);
    eprintln!("[Game] seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut app = App::new(settings, path, seed, config.show_guide);
    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(err) = app.save_error.take() {
        eprintln!("[Settings] could not save: {:#}", err);
    }
    eprintln!(
        "[Game] seed {} score {} lines {}",
        app.game.seed(),
        app.game.score(),
        app.game.lines()
    );
    result
}

struct App {
    game: GameState,
    settings: Settings,
    settings_path: PathBuf,
    dispatcher: EffectDispatcher,
    input: InputHandler,
    show_guide: bool,
    save_error: Option<anyhow::Error>,
}

enum Flow {
    Continue,
    Quit,
}

impl App {
    fn new(settings: Settings, settings_path: PathBuf, seed: u32, show_guide: bool) -> Self {
        let mut app = Self {
            game: GameState::new(seed),
            settings,
            settings_path,
            dispatcher: EffectDispatcher::new(settings.voice_enabled),
            input: InputHandler::new(),
            show_guide: false,
            save_error: None,
        };
        let effects = app.game.start();
        app.dispatch(&effects);
        if show_guide {
            app.open_guide();
        }
        app
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view_fallback = Viewport::new(80, 24);
        let mut snap = GameSnapshot::default();
        let mut fb = FrameBuffer::new(view_fallback.width, view_fallback.height);

        let tick = Duration::from_millis(TICK_MS as u64);
        let mut last_tick = Instant::now();

        loop {
            // Render.
            let (w, h) = crossterm::terminal::size()
                .unwrap_or((view_fallback.width, view_fallback.height));
            let viewport = Viewport::new(w, h);
            self.game.snapshot_into(&mut snap);
            let hud = HudView {
                hint: self.dispatcher.hint(),
                flash: self.dispatcher.flash_active(),
                show_guide: self.show_guide,
                touch_lock: self.settings.touch_lock_enabled,
                voice: self.settings.voice_enabled,
                kid_mode: self.settings.kid_mode_enabled,
            };
            GameView::for_viewport(self.settings.kid_mode_enabled, viewport)
                .render_into(&snap, &hud, viewport, &mut fb);
            if self.dispatcher.take_bell() {
                term.ring_bell();
            }
            term.draw_swap(&mut fb)?;

            // Input until the next tick.
            let timeout = tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Flow::Quit = self.on_key(key, term) {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
            }

            // Tick.
            if last_tick.elapsed() >= tick {
                last_tick = Instant::now();
                for action in self.input.update(TICK_MS) {
                    let effects = self.game.apply_action(action);
                    self.dispatch(&effects);
                }
                let effects = self.game.tick(TICK_MS);
                self.dispatch(&effects);
                self.dispatcher.advance(TICK_MS);
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent, term: &mut TerminalRenderer) -> Flow {
        match key.kind {
            KeyEventKind::Release => {
                if let Some(action) = handle_key_event(key) {
                    self.input.handle_release(action);
                }
                return Flow::Continue;
            }
            KeyEventKind::Repeat if self.settings.touch_lock_enabled => return Flow::Continue,
            KeyEventKind::Press | KeyEventKind::Repeat => {}
        }

        if should_quit(key) {
            return Flow::Quit;
        }

        if let Some(toggle) = settings_toggle(key) {
            self.flip(toggle);
            if toggle == Toggle::KidMode {
                term.invalidate();
            }
            return Flow::Continue;
        }

        if is_guide_key(key) {
            self.open_guide();
            return Flow::Continue;
        }

        let action = handle_key_event(key);
        if self.show_guide {
            if action.is_some() || key.code == KeyCode::Enter {
                self.close_guide();
            }
            return Flow::Continue;
        }

        if let Some(action) = action.and_then(|a| self.input.handle_press(a)) {
            let effects = self.game.apply_action(action);
            self.dispatch(&effects);
        }
        Flow::Continue
    }

    fn dispatch(&mut self, effects: &Effects) {
        self.dispatcher.dispatch(effects);
    }

    fn open_guide(&mut self) {
        self.show_guide = true;
        self.input.reset();
        // The guide has its own hint; the pause notice would hide it.
        let _ = self.game.set_paused(true);
        self.dispatcher.set_hint(GUIDE_HINT, false);
    }

    fn close_guide(&mut self) {
        self.show_guide = false;
        self.input.reset();
        // The start greeting replaces the resume notice.
        let _ = self.game.set_paused(false);
        self.dispatcher.round_started();
    }

    fn flip(&mut self, toggle: Toggle) {
        let on = self.settings.toggle(toggle);
        self.dispatcher.set_voice_enabled(self.settings.voice_enabled);
        // Turning voice off should be quiet.
        let speak = toggle != Toggle::Voice || on;
        self.dispatcher.set_hint(toggle_hint(toggle, on), speak);
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.settings.save(&self.settings_path) {
            self.save_error = Some(err);
        }
    }
}
