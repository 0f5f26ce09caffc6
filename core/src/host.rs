use crate::*;

/// Draws the game for the player. Input flows back in as [`Command`]s.
pub trait Renderer {
    fn render(&mut self, minefield: &Minefield, status: GameStatus, time: u32);

    /// Shown while no game runs.
    fn render_setup(&mut self, _selected: Difficulty) {}
}

/// Glue between a [`GameSession`], where it is saved and how it is drawn.
///
/// Every change to the session is persisted before it is rendered, so a reload at any point
/// resumes from what the player last saw.
#[derive(Debug)]
pub struct GameHost<S, R> {
    store: S,
    renderer: R,
    difficulty: Difficulty,
    session: Option<GameSession>,
}

impl<S: GameStore, R: Renderer> GameHost<S, R> {
    pub fn new(store: S, renderer: R) -> Self {
        Self {
            store,
            renderer,
            difficulty: Difficulty::default(),
            session: None,
        }
    }

    /// Resumes the stored game if it was still running, otherwise shows the setup screen.
    /// Returns whether a game was resumed.
    pub fn initialize(&mut self) -> bool {
        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(err) => {
                log::warn!("Could not load saved game: {:?}", err);
                None
            }
        };

        let session = saved
            .filter(SavedGame::is_resumable)
            .and_then(|saved| match GameSession::restore(saved) {
                Ok(session) => Some(session),
                Err(err) => {
                    log::warn!("Discarding saved game: {}", err);
                    None
                }
            });

        match session {
            Some(session) => {
                log::info!(
                    "Resuming {}x{} game at {}s",
                    session.minefield().width(),
                    session.minefield().height(),
                    session.time()
                );
                self.session = Some(session);
                self.redraw();
                true
            }
            None => {
                self.setup_new_game();
                false
            }
        }
    }

    /// Drops the current game and goes back to picking a difficulty.
    pub fn setup_new_game(&mut self) {
        self.session = None;
        self.renderer.render_setup(self.difficulty);
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.setup_new_game();
    }

    pub fn start_game(&mut self, seed: u64) -> Result<()> {
        let session = GameSession::with_difficulty(self.difficulty, seed)?;
        log::info!("Starting {} game", self.difficulty);
        self.session = Some(session);
        self.persist();
        self.redraw();
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        let session = self.session.as_mut().ok_or(GameError::NoGame)?;
        let outcome = session.apply(command).inspect_err(|err| {
            log::warn!("Rejected {:?}: {}", command, err);
        })?;

        if outcome.has_update() {
            self.persist();
            self.redraw();
        }
        Ok(outcome)
    }

    /// One second of wall clock passed.
    pub fn tick(&mut self) -> bool {
        let advanced = self.session.as_mut().is_some_and(GameSession::tick);
        if advanced {
            self.persist();
            self.redraw();
        }
        advanced
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn persist(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        if let Err(err) = self.store.save(&session.snapshot()) {
            log::error!("Could not save game: {:?}", err);
        }
    }

    fn redraw(&mut self) {
        if let Some(session) = &self.session {
            self.renderer
                .render(session.minefield(), session.status(), session.time());
        }
    }
}
