//! Application state and event loop.

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::DefaultTerminal;
use tokio::sync::oneshot::{self, error::TryRecvError};

use tabla_dsp::{
    decor::{FloatingEmojis, SPAWN_INTERVAL},
    hype::{gemini::GeminiClient, get_encouragement, NETWORK_FALLBACK},
    AudioEngine, RhythmHandle, SoundKind,
};

use super::ui;

/// ~60 fps redraw
const FRAME: Duration = Duration::from_millis(16);

/// How long a beat pulse stays on screen.
const PULSE_LENGTH: Duration = Duration::from_millis(100);
const BEAT_PULSE: f32 = 1.3;
const TAP_PULSE: f32 = 1.4;
const CLAP_PULSE: f32 = 1.5;

/// Quick moods: (key label, text filled in)
pub const PRESETS: [(&str, &str); 3] = [
    ("أنا مخنوق", "أنا مخنوق أوي"),
    ("تعبت مذاكرة", "تعبت من المذاكرة"),
    ("محدش مقدرني", "محدش مقدرني"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing a mood
    Input,
    /// Waiting for the encouragement text
    Loading,
    Hyping,
}

#[derive(Debug, Clone, Copy)]
struct Pulse {
    scale: f32,
    until: Instant,
}

impl Pulse {
    fn new(scale: f32) -> Self {
        Self {
            scale,
            until: Instant::now() + PULSE_LENGTH,
        }
    }
}

pub struct App {
    engine: AudioEngine,
    client: Rc<GeminiClient>,
    mood: String,
    phase: Phase,
    message: Option<String>,
    pending: Option<oneshot::Receiver<String>>,
    rhythm: Option<RhythmHandle>,
    pulse: Rc<Cell<Option<Pulse>>>,
    decor: FloatingEmojis,
    next_spawn: Instant,
    rng: StdRng,
    started: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(engine: AudioEngine, client: GeminiClient) -> Self {
        let now = Instant::now();
        Self {
            engine,
            client: Rc::new(client),
            mood: String::new(),
            phase: Phase::Input,
            message: None,
            pending: None,
            rhythm: None,
            pulse: Rc::new(Cell::new(None)),
            decor: FloatingEmojis::new(),
            next_spawn: now,
            rng: StdRng::from_os_rng(),
            started: now,
            should_quit: false,
        }
    }

    /// Run the UI event loop. Must run inside a `LocalSet`.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_encouragement();
            self.tick_decor();

            terminal.draw(|frame| ui::render(frame, &self))?;

            // Drain input without blocking the timers sharing this thread
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await;
                    }
                }
            }

            tokio::time::sleep(FRAME).await;
        }

        self.stop_hype();
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn audio_enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    pub fn decor(&self) -> &FloatingEmojis {
        &self.decor
    }

    /// Milliseconds since start, the clock floating items are stamped with.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn pulse_scale(&self) -> f32 {
        match self.pulse.get() {
            Some(pulse) if Instant::now() < pulse.until => pulse.scale,
            _ => 1.0,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match self.phase {
            Phase::Input => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.start_hype().await,
                KeyCode::F(n @ 1..=3) => {
                    self.mood = PRESETS[n as usize - 1].1.to_string();
                }
                KeyCode::Backspace => {
                    self.mood.pop();
                }
                KeyCode::Char(c) => self.mood.push(c),
                _ => {}
            },
            Phase::Loading => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
            Phase::Hyping => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(' ') => self.clap(TAP_PULSE),
                KeyCode::Char('c') => self.clap(CLAP_PULSE),
                KeyCode::Char('d') => self.engine.play(SoundKind::Drum),
                KeyCode::Char('s') => self.stop_hype(),
                _ => {}
            },
        }
    }

    async fn start_hype(&mut self) {
        if self.mood.trim().is_empty() {
            return;
        }

        self.engine.init().await;

        self.phase = Phase::Loading;
        self.message = None;

        let (tx, rx) = oneshot::channel();
        let client = Rc::clone(&self.client);
        let mood = self.mood.clone();
        tokio::task::spawn_local(async move {
            let text = get_encouragement(client.as_ref(), &mood).await;
            let _ = tx.send(text);
        });
        self.pending = Some(rx);
    }

    fn poll_encouragement(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let text = match rx.try_recv() {
            Ok(text) => text,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => NETWORK_FALLBACK.to_string(),
        };

        self.pending = None;
        self.message = Some(text);
        self.phase = Phase::Hyping;
        self.decor.set_active(true);
        self.start_rhythm();
    }

    fn start_rhythm(&mut self) {
        if let Some(previous) = self.rhythm.take() {
            previous.cancel();
        }

        self.engine.play(SoundKind::Cheer);

        let pulse = Rc::clone(&self.pulse);
        self.rhythm = Some(
            self.engine
                .start_rhythm_loop(move || pulse.set(Some(Pulse::new(BEAT_PULSE)))),
        );
    }

    fn clap(&mut self, scale: f32) {
        self.engine.play(SoundKind::Clap);
        self.pulse.set(Some(Pulse::new(scale)));
    }

    fn stop_hype(&mut self) {
        if let Some(rhythm) = self.rhythm.take() {
            rhythm.cancel();
        }
        self.phase = Phase::Input;
        self.mood.clear();
        self.message = None;
        self.pending = None;
        self.decor.set_active(false);
    }

    fn tick_decor(&mut self) {
        let now = Instant::now();
        if !self.decor.is_active() || now < self.next_spawn {
            return;
        }

        let now_ms = self.now_ms();
        self.decor.spawn(now_ms, &mut self.rng);
        self.next_spawn = now + SPAWN_INTERVAL;
    }
}
