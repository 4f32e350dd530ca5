//! Audio cues over `<audio>` elements
//!
//! Three independently controllable cues: an idle-screen loop, an in-play
//! loop, and a one-shot death sting. Every call is fire-and-forget - a
//! missing element or a rejected play() promise is the page's problem, not
//! the tick loop's.

use web_sys::HtmlAudioElement;

use crate::settings::Settings;

/// The three cue slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Looping idle-screen music
    Idle,
    /// Looping in-play music
    Play,
    /// One-shot death sting
    Death,
}

impl Cue {
    /// DOM id of the backing `<audio>` element
    fn element_id(&self) -> &'static str {
        match self {
            Cue::Idle => "idle-audio",
            Cue::Play => "play-audio",
            Cue::Death => "death-audio",
        }
    }
}

/// Handles to the page's cue elements
pub struct AudioCues {
    idle: Option<HtmlAudioElement>,
    play: Option<HtmlAudioElement>,
    death: Option<HtmlAudioElement>,
}

impl AudioCues {
    /// Look up the cue elements in the document
    ///
    /// Missing elements disable that cue and log a warning once.
    pub fn new() -> Self {
        let cues = Self {
            idle: lookup(Cue::Idle),
            play: lookup(Cue::Play),
            death: lookup(Cue::Death),
        };
        if let Some(idle) = &cues.idle {
            idle.set_loop(true);
        }
        if let Some(play) = &cues.play {
            play.set_loop(true);
        }
        cues
    }

    fn element(&self, cue: Cue) -> Option<&HtmlAudioElement> {
        match cue {
            Cue::Idle => self.idle.as_ref(),
            Cue::Play => self.play.as_ref(),
            Cue::Death => self.death.as_ref(),
        }
    }

    /// Apply the current volume preference to every cue
    pub fn apply_settings(&self, settings: &Settings) {
        let volume = settings.effective_volume() as f64;
        for cue in [Cue::Idle, Cue::Play, Cue::Death] {
            if let Some(el) = self.element(cue) {
                el.set_volume(volume);
            }
        }
    }

    /// Start a cue from the top
    ///
    /// Browsers reject play() before a user gesture; the error is dropped
    /// and the cue simply starts on the next transition.
    pub fn play(&self, cue: Cue) {
        if let Some(el) = self.element(cue) {
            el.set_current_time(0.0);
            let _ = el.play();
        }
    }

    /// Pause a cue, keeping its position
    pub fn pause(&self, cue: Cue) {
        if let Some(el) = self.element(cue) {
            let _ = el.pause();
        }
    }

    /// Rewind a cue to the start without changing play state
    pub fn rewind(&self, cue: Cue) {
        if let Some(el) = self.element(cue) {
            el.set_current_time(0.0);
        }
    }

    /// Idle-screen entry: idle loop on, play loop off
    pub fn enter_idle(&self) {
        self.pause(Cue::Play);
        self.rewind(Cue::Play);
        self.play(Cue::Idle);
    }

    /// Run start: play loop on, idle loop off
    pub fn enter_running(&self) {
        self.pause(Cue::Idle);
        self.rewind(Cue::Idle);
        self.play(Cue::Play);
    }

    /// Death: sting over the idle entry
    pub fn game_over(&self) {
        self.play(Cue::Death);
        self.enter_idle();
    }
}

impl Default for AudioCues {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(cue: Cue) -> Option<HtmlAudioElement> {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()?
        .document()?
        .get_element_by_id(cue.element_id());
    match element {
        Some(el) => el.dyn_into::<HtmlAudioElement>().ok(),
        None => {
            log::warn!("Audio element #{} not found - cue disabled", cue.element_id());
            None
        }
    }
}
