use crate::{
    AppConfig, AudioBackend, InputEvent, Intent, KeyBindings, PlaybackSession, RenderTarget,
    Viewport, Visualizer,
};

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Everything one run of the player owns: the playback session, the live
/// window size and the visualiser.
///
/// The windowing layer feeds events in with [`Player::handle_events`] and
/// then calls [`Player::render`] once per frame.
#[derive(Debug)]
pub struct Player<B> {
    session: PlaybackSession<B>,
    viewport: Viewport,
    bindings: KeyBindings,
    visualizer: Visualizer,
}

impl<B: AudioBackend> Player<B> {
    /// Builds the player and starts playback right away.
    pub fn new(config: &AppConfig, backend: B) -> Self {
        Self {
            session: PlaybackSession::start(backend, config.controls.initial_volume),
            viewport: Viewport::from_config(&config.window),
            bindings: KeyBindings::new(config.controls.clone()),
            visualizer: Visualizer::new(config),
        }
    }

    pub fn session(&self) -> &PlaybackSession<B> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PlaybackSession<B> {
        &mut self.session
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    /// Applies every pending event in order. Stops at the first event that
    /// asks to quit; the rest are dropped with the window.
    pub fn handle_events<I>(&mut self, events: I) -> LoopControl
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(&event) == LoopControl::Quit {
                return LoopControl::Quit;
            }
        }
        LoopControl::Continue
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> LoopControl {
        for intent in self.bindings.intents(event) {
            if self.apply(intent) == LoopControl::Quit {
                return LoopControl::Quit;
            }
        }
        LoopControl::Continue
    }

    pub fn apply(&mut self, intent: Intent) -> LoopControl {
        tracing::debug!(?intent, "applying intent");

        let outcome = match intent {
            Intent::Quit => return LoopControl::Quit,
            Intent::AdjustVolume(delta) => {
                self.session.adjust_volume(delta);
                Ok(())
            }
            Intent::Seek(delta) => self.session.seek_relative(delta),
            Intent::SeekFraction(tenth) => self.session.seek_to_fraction(tenth),
            Intent::TogglePlay => {
                self.session.toggle();
                Ok(())
            }
            Intent::Resize { width, height } => {
                if self.viewport.resize(width, height) {
                    tracing::debug!(width, height, "window resized");
                }
                Ok(())
            }
        };

        if let Err(err) = outcome {
            tracing::warn!(?intent, %err, "ignoring failed intent");
        }
        LoopControl::Continue
    }

    /// Draws the current frame.
    pub fn render(&mut self, target: &mut impl RenderTarget) {
        let offset = self.session.offset_seconds();
        let duration = self.session.duration_seconds();
        self.visualizer.draw(&self.viewport, offset, duration, target);
    }
}
