//! `#[wasm_bindgen]` surface of the chat widget.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::ChatConfig;
use crate::session::ChatSession;
use crate::transport;

#[wasm_bindgen]
pub fn chat_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct ChatWidget {
    session: Rc<RefCell<ChatSession>>,
    /// Called with no arguments whenever the log or state changes.
    on_change: Rc<RefCell<Option<js_sys::Function>>>,
}

fn notify(on_change: &RefCell<Option<js_sys::Function>>) {
    if let Some(callback) = on_change.borrow().as_ref() {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::error!("chat on_change callback threw: {:?}", err);
        }
    }
}

#[wasm_bindgen]
impl ChatWidget {
    /// `config_json` may be omitted; bad JSON falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> ChatWidget {
        let config = match config_json.as_deref().map(ChatConfig::from_json) {
            None => ChatConfig::default(),
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("invalid chat config, using defaults: {err}");
                ChatConfig::default()
            }
        };
        log::info!("chat widget posting to {}", config.endpoint);
        ChatWidget {
            session: Rc::new(RefCell::new(ChatSession::new(config))),
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_on_change(&self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    /// Returns false if nothing was sent (blank text or a request in flight).
    pub fn submit(&self, text: &str) -> bool {
        let Some(request) = self.session.borrow_mut().submit(text) else {
            return false;
        };
        notify(&self.on_change);

        let session = Rc::clone(&self.session);
        let on_change = Rc::clone(&self.on_change);
        wasm_bindgen_futures::spawn_local(async move {
            let result = transport::post(&request).await;
            session.borrow_mut().complete(result);
            notify(&on_change);
        });
        true
    }

    pub fn is_sending(&self) -> bool {
        self.session.borrow().state().is_sending()
    }

    pub fn thread_id(&self) -> Option<String> {
        self.session.borrow().thread_id().map(str::to_string)
    }

    /// Clears the log and, when configured, resets the server-side
    /// conversation. Returns false while a reply is pending.
    pub fn new_conversation(&self) -> bool {
        let Some(restart) = self.session.borrow_mut().new_conversation() else {
            return false;
        };
        transport::revoke_object_urls(restart.released_urls.iter().map(String::as_str));
        notify(&self.on_change);

        if let Some(reset) = restart.reset {
            wasm_bindgen_futures::spawn_local(async move {
                match transport::send(&reset).await {
                    Ok(()) => log::info!("conversation reset at {}", reset.endpoint),
                    Err(err) => log::error!("conversation reset failed: {err}"),
                }
            });
        }
        true
    }

    /// `{ sending, thread_id, entries: [{ kind, text | url }] }`
    pub fn snapshot(&self) -> String {
        self.session.borrow().snapshot_json().unwrap_or_else(|err| {
            log::error!("chat snapshot serialization failed: {err}");
            String::from("{}")
        })
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        match self.session.try_borrow() {
            Ok(session) => transport::revoke_object_urls(session.log().image_urls()),
            Err(_) => log::warn!("chat widget dropped mid-update, image URLs not revoked"),
        }
    }
}
