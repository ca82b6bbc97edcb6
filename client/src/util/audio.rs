//! Browser audio output for the timeline player.
//!
//! ARCHITECTURE
//! ============
//! `AudioController` owns the one shared `<audio>` element and turns
//! [`PlaybackCommand`]s into media calls. Media events and play-request
//! outcomes are fed back into the `PlaybackState` signal tagged with the item
//! id they belong to: the item whose source was loaded for media events, the
//! requesting item for play outcomes. Requires a browser environment.
//!
//! PROGRESS SAMPLING
//! =================
//! Position is sampled once per animation frame while playing. Each sampler
//! loop carries a generation number; bumping the generation retires the
//! running loop on its next frame, so at most one loop keeps rescheduling.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, DomException, HtmlAudioElement};

use crate::net::types::asset_url;
use crate::state::playback::{PlaybackCommand, PlaybackError, PlaybackState, PlaybackStatus};
use crate::util::platform::PlaybackCapabilities;

const MEDIA_EVENTS: [&str; 5] = ["loadedmetadata", "durationchange", "ended", "error", "pause"];
const UNLOCK_EVENTS: [&str; 2] = ["touchstart", "click"];

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;
type FrameClosure = Closure<dyn FnMut(f64)>;

/// Handle to the timeline's audio output. Cheap to clone.
#[derive(Clone)]
pub struct AudioController {
    inner: Rc<Inner>,
}

struct Inner {
    playback: RwSignal<PlaybackState>,
    capabilities: PlaybackCapabilities,
    element: RefCell<Option<HtmlAudioElement>>,
    /// Item whose source the element currently holds.
    loaded: Cell<Option<i64>>,
    media_listeners: RefCell<Vec<(&'static str, EventClosure)>>,
    unlock_listener: RefCell<Option<EventClosure>>,
    unlocked: Cell<bool>,
    audio_context: RefCell<Option<AudioContext>>,
    sampler_generation: Cell<u64>,
}

impl AudioController {
    /// Create the controller and, on gesture-gated platforms, arm the
    /// one-shot unlock listener.
    pub fn new(playback: RwSignal<PlaybackState>, capabilities: PlaybackCapabilities) -> Self {
        let controller = Self {
            inner: Rc::new(Inner {
                playback,
                capabilities,
                element: RefCell::new(None),
                loaded: Cell::new(None),
                media_listeners: RefCell::new(Vec::new()),
                unlock_listener: RefCell::new(None),
                unlocked: Cell::new(!capabilities.requires_gesture_unlock),
                audio_context: RefCell::new(None),
                sampler_generation: Cell::new(0),
            }),
        };
        controller.install_unlock_listener();
        controller
    }

    /// Handle a play/pause press on item `id`.
    ///
    /// Must be called from the press handler itself: on gesture-gated
    /// platforms the output is unlocked synchronously before playing.
    pub fn select(&self, id: i64, audio_path: &str) {
        unlock_output(&self.inner);
        let command = self.inner.playback.try_update(|state| state.select(id));
        match command {
            Some(PlaybackCommand::Start { id, stop }) => self.start(id, stop, audio_path),
            Some(PlaybackCommand::Pause) => self.pause(),
            Some(PlaybackCommand::Resume) => request_play(&self.inner, id),
            Some(PlaybackCommand::Ignore) | None => {}
        }
    }

    /// Move the active item to `position` seconds. No-op for other items.
    pub fn seek(&self, id: i64, position: f64) {
        let moved = self
            .inner
            .playback
            .try_update(|state| state.seek(id, position))
            .unwrap_or(false);
        if moved {
            if let Some(element) = self.inner.element.borrow().as_ref() {
                element.set_current_time(position);
            }
        }
    }

    /// Release the element, its listeners, and the unlock listener.
    pub fn teardown(&self) {
        stop_sampler(&self.inner);
        detach_unlock_listener(&self.inner);
        self.inner.unlock_listener.borrow_mut().take();
        self.inner.loaded.set(None);
        if let Some(element) = self.inner.element.borrow_mut().take() {
            for (name, listener) in self.inner.media_listeners.borrow_mut().drain(..) {
                let _ = element.remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
            }
            let _ = element.pause();
            let _ = element.remove_attribute("src");
            element.load();
        }
        if let Some(context) = self.inner.audio_context.borrow_mut().take() {
            let _ = context.close();
        }
    }

    fn start(&self, id: i64, stop: Option<i64>, audio_path: &str) {
        stop_sampler(&self.inner);
        let Some(element) = ensure_element(&self.inner) else {
            log::warn!("audio element unavailable for item {id}");
            self.inner.playback.update(|state| state.play_failed(id, PlaybackError::Failed));
            return;
        };
        if let Some(previous) = stop {
            log::debug!("stopping item {previous} before item {id}");
        }
        // The element is shared, so whatever it holds is stopped at zero
        // before the source is swapped.
        let _ = element.pause();
        element.set_current_time(0.0);
        element.set_preload(self.inner.capabilities.preload_attr());
        self.inner.loaded.set(Some(id));
        element.set_src(&asset_url(audio_path));
        element.load();
        request_play(&self.inner, id);
    }

    fn pause(&self) {
        stop_sampler(&self.inner);
        if let Some(element) = self.inner.element.borrow().as_ref() {
            let _ = element.pause();
        }
    }

    fn install_unlock_listener(&self) {
        if self.inner.unlocked.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let listener = EventClosure::new(move |_ev: web_sys::Event| {
            if let Some(inner) = weak.upgrade() {
                unlock_output(&inner);
            }
        });
        for name in UNLOCK_EVENTS {
            // Capture phase so the unlock runs before any delegated handler.
            let _ = window.add_event_listener_with_callback_and_bool(name, listener.as_ref().unchecked_ref(), true);
        }
        *self.inner.unlock_listener.borrow_mut() = Some(listener);
    }
}

/// Unlock audio output inside a user gesture. Runs at most once.
fn unlock_output(inner: &Rc<Inner>) {
    if inner.unlocked.replace(true) {
        return;
    }
    match AudioContext::new() {
        Ok(context) => {
            let _ = context.resume();
            *inner.audio_context.borrow_mut() = Some(context);
        }
        Err(err) => log::warn!("audio context unavailable: {err:?}"),
    }
    let _ = ensure_element(inner);
    detach_unlock_listener(inner);
    log::debug!("audio output unlocked");
}

fn detach_unlock_listener(inner: &Inner) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(listener) = inner.unlock_listener.borrow().as_ref() {
        for name in UNLOCK_EVENTS {
            let _ = window.remove_event_listener_with_callback_and_bool(name, listener.as_ref().unchecked_ref(), true);
        }
    }
}

fn ensure_element(inner: &Rc<Inner>) -> Option<HtmlAudioElement> {
    if let Some(element) = inner.element.borrow().as_ref() {
        return Some(element.clone());
    }
    let element = match HtmlAudioElement::new() {
        Ok(element) => element,
        Err(err) => {
            log::warn!("failed to create audio element: {err:?}");
            return None;
        }
    };
    element.set_preload(inner.capabilities.preload_attr());

    let mut listeners = inner.media_listeners.borrow_mut();
    for name in MEDIA_EVENTS {
        let weak = Rc::downgrade(inner);
        let listener = EventClosure::new(move |_ev: web_sys::Event| {
            if let Some(inner) = weak.upgrade() {
                on_media_event(&inner, name);
            }
        });
        if element
            .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            .is_ok()
        {
            listeners.push((name, listener));
        }
    }
    drop(listeners);

    *inner.element.borrow_mut() = Some(element.clone());
    Some(element)
}

fn on_media_event(inner: &Rc<Inner>, name: &str) {
    let Some(id) = inner.playback.with_untracked(|state| state.event_owner(inner.loaded.get())) else {
        return;
    };
    let Some(element) = inner.element.borrow().clone() else {
        return;
    };
    match name {
        "loadedmetadata" | "durationchange" => {
            let duration = element.duration();
            inner.playback.update(|state| state.metadata_loaded(id, duration));
        }
        "ended" => {
            stop_sampler(inner);
            element.set_current_time(0.0);
            inner.playback.update(|state| state.ended(id));
        }
        "error" => {
            let error = PlaybackError::classify_media_code(element.error().map(|e| e.code()));
            log::warn!("media error for item {id}: {error}");
            fail(inner, id, error);
        }
        "pause" => {
            // `pause` also precedes `ended`; only external pauses matter here.
            if element.paused() && !element.ended() {
                stop_sampler(inner);
                inner.playback.update(|state| state.paused(id));
            }
        }
        _ => {}
    }
}

fn request_play(inner: &Rc<Inner>, id: i64) {
    let Some(element) = inner.element.borrow().clone() else {
        return;
    };
    let promise = match element.play() {
        Ok(promise) => promise,
        Err(err) => {
            if let Some(error) = PlaybackError::classify_exception(exception_name(&err).as_deref()) {
                fail(inner, id, error);
            }
            return;
        }
    };
    let inner = Rc::clone(inner);
    leptos::task::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                inner.playback.update(|state| state.play_resolved(id));
                let playing = inner
                    .playback
                    .with_untracked(|state| state.is_active(id) && state.status == PlaybackStatus::Playing);
                if playing {
                    start_sampler(&inner);
                }
            }
            Err(err) => {
                let name = exception_name(&err);
                if let Some(error) = PlaybackError::classify_exception(name.as_deref()) {
                    log::warn!("play request for item {id} rejected ({name:?}): {error}");
                    fail(&inner, id, error);
                }
            }
        }
    });
}

fn exception_name(err: &JsValue) -> Option<String> {
    err.dyn_ref::<DomException>().map(DomException::name)
}

fn fail(inner: &Rc<Inner>, id: i64, error: PlaybackError) {
    if !inner.playback.with_untracked(|state| state.is_active(id)) {
        return;
    }
    stop_sampler(inner);
    if let Some(element) = inner.element.borrow().as_ref() {
        let _ = element.pause();
        element.set_current_time(0.0);
    }
    inner.playback.update(|state| state.play_failed(id, error));
}

fn stop_sampler(inner: &Inner) {
    inner
        .sampler_generation
        .set(inner.sampler_generation.get().wrapping_add(1));
}

fn start_sampler(inner: &Rc<Inner>) {
    stop_sampler(inner);
    schedule_sample(inner, inner.sampler_generation.get());
}

fn schedule_sample(inner: &Rc<Inner>, generation: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let inner_for_cb = Rc::clone(inner);
    let holder: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if inner_for_cb.sampler_generation.get() == generation && sample_position(&inner_for_cb) {
            schedule_sample(&inner_for_cb, generation);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    }
}

/// Record the current position. Returns `false` once the track is no longer
/// actively playing, which ends the sampler loop.
fn sample_position(inner: &Inner) -> bool {
    let active = inner
        .playback
        .with_untracked(|state| state.active.filter(|_| state.status == PlaybackStatus::Playing));
    let Some(id) = active else {
        return false;
    };
    let Some(element) = inner.element.borrow().clone() else {
        return false;
    };
    if element.paused() || element.ended() {
        return false;
    }
    let position = element.current_time();
    inner.playback.update(|state| state.position_sampled(id, position));
    true
}
