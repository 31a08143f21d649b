//! Feed Client
//!
//! Server-sent-events subscription to the Realtime Database streaming
//! endpoint for live sensor updates.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use super::{feed_stream_url, parse_feed_event};
use crate::state::global::GlobalState;

/// SSE client for live sensor snapshots
pub struct FeedClient {
    es: Rc<RefCell<Option<EventSource>>>,
    url: String,
    closed: Rc<Cell<bool>>,
    reconnect_attempts: Rc<RefCell<u32>>,
    max_reconnect_attempts: u32,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new(url: &str) -> Self {
        Self {
            es: Rc::new(RefCell::new(None)),
            url: url.to_string(),
            closed: Rc::new(Cell::new(false)),
            reconnect_attempts: Rc::new(RefCell::new(0)),
            max_reconnect_attempts: 5,
        }
    }

    /// Open the event stream
    pub fn connect(&self, state: GlobalState) {
        if self.closed.get() {
            return;
        }

        match EventSource::new(&self.url) {
            Ok(es) => {
                self.setup_handlers(&es, state);
                *self.es.borrow_mut() = Some(es);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Feed connection failed: {:?}", e).into());
                state.feed_error("No se pudo conectar a la base de datos");
                self.schedule_reconnect(state);
            }
        }
    }

    /// Set up event stream handlers
    fn setup_handlers(&self, es: &EventSource, state: GlobalState) {
        let closed = Rc::clone(&self.closed);
        let es_ref = Rc::clone(&self.es);
        let url = self.url.clone();
        let reconnect_attempts = Rc::clone(&self.reconnect_attempts);

        // On open
        let reconnect_clone = Rc::clone(&reconnect_attempts);
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"Feed stream opened".into());
            *reconnect_clone.borrow_mut() = 0;
            // Connectivity is driven by data: the status flips to connected
            // only once a non-null snapshot arrives.
        }) as Box<dyn FnMut(JsValue)>);
        es.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // `put` events carry the watched record
        let state_clone = state.clone();
        let closed_clone = Rc::clone(&closed);
        let on_put = Closure::wrap(Box::new(move |event: MessageEvent| {
            // A notification may still be queued when the view tears the
            // subscription down; drop it instead of touching dead state.
            if closed_clone.get() {
                return;
            }
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text_str: String = text.into();
                handle_put(&text_str, &state_clone);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        es.add_event_listener_with_callback("put", on_put.as_ref().unchecked_ref())
            .expect("failed to register put listener");
        on_put.forget();

        // The server revokes the stream with `cancel` / `auth_revoked`
        for revoked in ["cancel", "auth_revoked"] {
            let state_clone = state.clone();
            let closed_clone = Rc::clone(&closed);
            let on_revoked = Closure::wrap(Box::new(move |_: MessageEvent| {
                if closed_clone.get() {
                    return;
                }
                web_sys::console::error_1(&"Feed stream revoked by server".into());
                state_clone.feed_error("Conexión cancelada por el servidor");
            }) as Box<dyn FnMut(MessageEvent)>);
            es.add_event_listener_with_callback(revoked, on_revoked.as_ref().unchecked_ref())
                .expect("failed to register revocation listener");
            on_revoked.forget();
        }

        // On error. EventSource retries on its own while the stream is
        // recoverable; once it reaches CLOSED we take over with backoff.
        let state_clone = state;
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            if closed.get() {
                return;
            }
            web_sys::console::error_1(&format!("Feed stream error: {:?}", e).into());
            state_clone.feed_error("Error de conexión con la base de datos");

            let is_closed = es_ref
                .borrow()
                .as_ref()
                .map(|es| es.ready_state() == EventSource::CLOSED)
                .unwrap_or(true);
            if !is_closed {
                return;
            }

            let attempts = *reconnect_attempts.borrow();
            if attempts < 5 {
                let delay = (2_u32.pow(attempts) * 1000).min(30000);
                *reconnect_attempts.borrow_mut() = attempts + 1;

                let state_inner = state_clone.clone();
                let url_inner = url.clone();
                let es_inner = Rc::clone(&es_ref);
                let closed_inner = Rc::clone(&closed);
                let reconnect_inner = Rc::clone(&reconnect_attempts);

                gloo_timers::callback::Timeout::new(delay, move || {
                    web_sys::console::log_1(
                        &format!("Reconnecting feed (attempt {})", reconnect_inner.borrow()).into(),
                    );
                    let client = FeedClient {
                        es: es_inner,
                        url: url_inner,
                        closed: closed_inner,
                        reconnect_attempts: reconnect_inner,
                        max_reconnect_attempts: 5,
                    };
                    client.connect(state_inner);
                })
                .forget();
            }
        }) as Box<dyn FnMut(JsValue)>);
        es.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    /// Schedule a reconnect attempt
    fn schedule_reconnect(&self, state: GlobalState) {
        let attempts = *self.reconnect_attempts.borrow();
        if attempts >= self.max_reconnect_attempts {
            web_sys::console::error_1(&"Max feed reconnect attempts reached".into());
            return;
        }

        let delay = (2_u32.pow(attempts) * 1000).min(30000);
        *self.reconnect_attempts.borrow_mut() = attempts + 1;

        let es_ref = Rc::clone(&self.es);
        let url = self.url.clone();
        let closed = Rc::clone(&self.closed);
        let reconnect_attempts = Rc::clone(&self.reconnect_attempts);
        let max_attempts = self.max_reconnect_attempts;

        gloo_timers::callback::Timeout::new(delay, move || {
            let client = FeedClient {
                es: es_ref,
                url,
                closed,
                reconnect_attempts,
                max_reconnect_attempts: max_attempts,
            };
            client.connect(state);
        })
        .forget();
    }

    /// Release the subscription. Safe to call once; later queued
    /// notifications are dropped by the handlers.
    pub fn close(&self) {
        self.closed.set(true);
        if let Some(es) = self.es.borrow().as_ref() {
            es.close();
        }
    }
}

/// Handle the body of a `put` event
fn handle_put(text: &str, state: &GlobalState) {
    match parse_feed_event(text) {
        Ok(event) => {
            if event.is_snapshot() {
                state.apply_snapshot(event.snapshot_payload());
            } else {
                // The firmware rewrites the whole record, so child-path
                // puts are unexpected; skip rather than guess at a merge.
                web_sys::console::log_1(
                    &format!("Ignoring partial feed update at {}", event.path).into(),
                );
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse feed event: {}", e).into());
        }
    }
}

/// Open the feed subscription (call from the app root). The returned client
/// must be closed exactly once on teardown.
pub fn init_feed(state: GlobalState, feed_base: &str) -> FeedClient {
    let url = feed_stream_url(feed_base);
    let client = FeedClient::new(&url);
    client.connect(state);
    client
}
