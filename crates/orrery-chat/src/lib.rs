pub mod config;
pub mod error;
pub mod history;
pub mod protocol;
pub mod session;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod transport;
#[cfg(target_arch = "wasm32")]
pub mod widget;

pub use config::{ChatConfig, RequestField};
pub use error::{ChatError, ChatResult};
pub use history::{ChatEntry, ChatLog};
pub use protocol::{PendingRequest, Reply, TextReply};
pub use session::{ChatSession, ChatSnapshot, Restart};
pub use state::ChatState;
