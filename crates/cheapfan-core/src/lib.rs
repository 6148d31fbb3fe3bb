#![forbid(unsafe_code)]

//! Core: page-behavior controllers for the CheapFan site.
//!
//! Nothing in this crate touches the DOM. Controllers take plain inputs
//! (element ids in DOM order, intersection batches, scroll offsets,
//! timestamps) and hand back commands that the `cheapfan-web` host applies.

pub mod analytics;
pub mod animation;
pub mod config;
pub mod element;
pub mod error;
pub mod faq;
pub mod format;
pub mod frame_guard;
pub mod header;
pub mod lazy_images;
pub mod nav;
pub mod newsletter;
pub mod scroll;

pub use config::SiteConfig;
pub use element::{ElementId, IntersectionEntry, ObserverOptions};
pub use error::{Result, SiteError};
