#![forbid(unsafe_code)]

//! WASM entry point for the CheapFan site.
//!
//! The exported [`boot`] reads an optional configuration object, waits for
//! `DOMContentLoaded` if needed, and wires every `cheapfan-core` controller to
//! the live document. All behavior lives in `cheapfan-core`; the `wasm`
//! module only translates between DOM events and controller commands.
//!
//! ```js
//! import init, { boot, bootSummary } from "./pkg/cheapfan_web.js";
//! await init();
//! boot({ faq: { exclusive: true } });
//! ```

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{boot, boot_summary};

mod banner;
mod summary;

pub use banner::BANNER;
pub use summary::BootSummary;
