//! Exported `LrcPlayer` class
//!
//! Wraps a `LyricPlayer` over the real document, `performance.now()` and
//! `requestAnimationFrame`. The player lives in an `Rc<RefCell<..>>` shared
//! with the animation-frame closure (which holds only a weak reference).
//!
//! `onLyricChange` is never called while the player is borrowed: the core
//! listener queues lines and the queue is flushed after each operation or
//! frame, so the callback may call straight back into the player.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::browser::{AnimationFrameScheduler, FrameCallback, PerformanceClock};
use crate::api::helpers::{deserialize, player_error, serialize};
use crate::models::{LyricLine, PlayerConfig};
use crate::playback::{LyricListener, LyricPlayer, PlayerError};
use crate::renderers::DomTarget;
use crate::{wasm_info, wasm_log, wasm_warn};

type BrowserPlayer = LyricPlayer<DomTarget, PerformanceClock, AnimationFrameScheduler>;

/// Lines waiting for the JS callback, plus the callback itself
#[derive(Clone, Default)]
struct Notifier {
    queue: Rc<RefCell<VecDeque<LyricLine>>>,
    callback: Rc<RefCell<Option<js_sys::Function>>>,
}

/// Core listener that only records the line
struct QueueListener {
    queue: Rc<RefCell<VecDeque<LyricLine>>>,
}

impl LyricListener for QueueListener {
    fn on_lyric_change(&mut self, _text: &str, line: &LyricLine) {
        self.queue.borrow_mut().push_back(line.clone());
    }
}

impl Notifier {
    fn listener(&self) -> QueueListener {
        QueueListener {
            queue: Rc::clone(&self.queue),
        }
    }

    /// Call `onLyricChange(text, line)` for every queued line
    fn dispatch(&self) {
        loop {
            let Some(line) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            // cloned so the callback may replace itself
            let Some(callback) = self.callback.borrow().clone() else {
                self.queue.borrow_mut().clear();
                break;
            };

            let line_js = match serialize(&line, "Failed to serialize lyric line") {
                Ok(value) => value,
                Err(_) => continue,
            };
            let text = JsValue::from_str(&line.text);
            if let Err(e) = callback.call2(&JsValue::NULL, &text, &line_js) {
                wasm_warn!("onLyricChange threw: {:?}", e);
            }
        }
    }
}

/// Browser lyric player
#[wasm_bindgen(js_name = LrcPlayer)]
pub struct WasmLrcPlayer {
    inner: Rc<RefCell<BrowserPlayer>>,
    notifier: Notifier,
}

#[wasm_bindgen(js_class = LrcPlayer)]
impl WasmLrcPlayer {
    /// Parse `lrcText` and append the lyrics container to `document.body`
    #[wasm_bindgen(constructor)]
    pub fn new(lrc_text: &str, container_id: Option<String>) -> Result<WasmLrcPlayer, JsValue> {
        let config = container_id
            .map(PlayerConfig::with_container_id)
            .unwrap_or_default();
        Self::create(lrc_text, config)
    }

    /// Same as the constructor
    pub fn init(lrc_text: &str, container_id: Option<String>) -> Result<WasmLrcPlayer, JsValue> {
        Self::new(lrc_text, container_id)
    }

    /// Construct with a `{ containerId, lineHeightFallback, textClass,
    /// highlightClass }` options object; missing keys take their defaults
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(lrc_text: &str, options: JsValue) -> Result<WasmLrcPlayer, JsValue> {
        let config: PlayerConfig = if options.is_undefined() || options.is_null() {
            PlayerConfig::default()
        } else {
            deserialize(options, "Invalid player options")?
        };
        Self::create(lrc_text, config)
    }

    /// Start tracking from zero; ignored while already playing
    pub fn play(&self) -> Result<(), JsValue> {
        self.run("play", |player| player.play())
    }

    pub fn pause(&self) {
        let mut player = self.inner.borrow_mut();
        player.pause();
        wasm_log!("pause '{}' at {:?}s", player.config().container_id, player.elapsed());
    }

    /// Continue from the position recorded by the last pause or seek
    pub fn resume(&self) -> Result<(), JsValue> {
        self.run("resume", |player| player.resume())
    }

    #[wasm_bindgen(js_name = setTimeSecond)]
    pub fn set_time_second(&self, seconds: f64) -> Result<(), JsValue> {
        self.run("setTimeSecond", |player| player.set_time_seconds(seconds))
    }

    #[wasm_bindgen(js_name = setTimeMillisecond)]
    pub fn set_time_millisecond(&self, milliseconds: f64) -> Result<(), JsValue> {
        self.run("setTimeMillisecond", |player| player.set_time_milliseconds(milliseconds))
    }

    /// Restart the clock from zero
    pub fn replay(&self) -> Result<(), JsValue> {
        self.run("replay", |player| player.replay())
    }

    /// Stop the loop and remove the container from the page
    pub fn destroy(&self) {
        let mut player = self.inner.borrow_mut();
        player.destroy();
        self.notifier.queue.borrow_mut().clear();
        wasm_log!("LrcPlayer '{}' destroyed", player.config().container_id);
    }

    #[wasm_bindgen(getter = onLyricChange)]
    pub fn on_lyric_change(&self) -> JsValue {
        self.notifier
            .callback
            .borrow()
            .as_ref()
            .map(|f| f.clone().into())
            .unwrap_or(JsValue::NULL)
    }

    /// Anything that is not a function clears the callback
    #[wasm_bindgen(setter = onLyricChange)]
    pub fn set_on_lyric_change(&self, callback: JsValue) {
        *self.notifier.callback.borrow_mut() = callback.dyn_into::<js_sys::Function>().ok();
    }

    #[wasm_bindgen(getter = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.borrow().is_playing()
    }

    /// Parsed lines as an array of `{ time, text }`
    #[wasm_bindgen(getter)]
    pub fn lines(&self) -> JsValue {
        serialize(&self.inner.borrow().lines(), "Failed to serialize lyric lines")
            .unwrap_or(JsValue::UNDEFINED)
    }

    /// Elapsed seconds, `undefined` before the first start or seek
    #[wasm_bindgen(getter = currentTime)]
    pub fn current_time(&self) -> Option<f64> {
        self.inner.borrow().elapsed()
    }

    /// Index of the highlighted line, `undefined` if none
    #[wasm_bindgen(getter = activeIndex)]
    pub fn active_index(&self) -> Option<u32> {
        self.inner
            .borrow()
            .active_index()
            .and_then(|index| u32::try_from(index).ok())
    }

    #[wasm_bindgen(getter = containerId)]
    pub fn container_id(&self) -> String {
        self.inner.borrow().config().container_id.clone()
    }
}

impl WasmLrcPlayer {
    fn create(lrc_text: &str, config: PlayerConfig) -> Result<WasmLrcPlayer, JsValue> {
        let build = || -> Result<BrowserPlayer, PlayerError> {
            let target = DomTarget::from_window()?;
            let clock = PerformanceClock::from_window()?;
            let scheduler = AnimationFrameScheduler::from_window()?;
            LyricPlayer::new(lrc_text, config, target, clock, scheduler)
        };
        let mut player = build().map_err(|e| player_error("LrcPlayer construction", e))?;

        let notifier = Notifier::default();
        player.set_listener(notifier.listener());

        let inner = Rc::new(RefCell::new(player));
        let callback = frame_callback(Rc::downgrade(&inner), notifier.clone());
        inner.borrow().scheduler().install(callback);

        {
            let player = inner.borrow();
            wasm_info!(
                "LrcPlayer '{}' ready with {} lines",
                player.config().container_id,
                player.lines().len()
            );
        }

        Ok(WasmLrcPlayer { inner, notifier })
    }

    fn run(
        &self,
        operation: &str,
        f: impl FnOnce(&mut BrowserPlayer) -> Result<(), PlayerError>,
    ) -> Result<(), JsValue> {
        let result = {
            let mut player = self.inner.borrow_mut();
            f(&mut *player)
        };
        self.notifier.dispatch();
        result.map_err(|e| player_error(operation, e))
    }
}

/// The `requestAnimationFrame` callback shared by every frame of one player
fn frame_callback(player: Weak<RefCell<BrowserPlayer>>, notifier: Notifier) -> FrameCallback {
    Closure::wrap(Box::new(move |_timestamp: f64| {
        let Some(player) = player.upgrade() else {
            return;
        };
        let result = player.borrow_mut().run_frame();
        notifier.dispatch();
        if let Err(e) = result {
            wasm_warn!("frame update failed: {}", e);
        }
    }) as Box<dyn FnMut(f64)>)
}
