//! # pageprefs
//!
//! Page-level preference utilities for the budgeting frontend: currency
//! formatting and display, light/dark theme persistence, and cross-tab
//! synchronization through the origin's shared key-value storage.
//!
//! Compiled to WebAssembly with the `hydrate` feature, the crate attaches to
//! `localStorage` and `document`. Without it, everything runs natively
//! against the in-memory [`store::MemoryStore`] and [`page::MemoryPage`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`service`] | `PreferenceService`: theme, currency displays, cross-tab sync |
//! | [`currency`] | Currency codes, symbols, placement |
//! | [`number`] | `parseFloat`-compatible parsing and `en-US` two-decimal formatting |
//! | [`theme`] | Theme preference and `auto` resolution |
//! | [`store`] | `PreferenceStore` seam, subscriptions, in-memory multi-tab store |
//! | [`page`] | `PageSurface` seam and in-memory page |
//! | [`config`] | Storage keys, element ids, class names, defaults |
//! | [`error`] | `PrefsError` |
//! | [`consts`] | Stock keys, ids, and class names |
//! | `web` | `web_sys` backends and JS bindings (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod currency;
pub mod error;
pub mod number;
pub mod page;
pub mod service;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;

pub use config::PageConfig;
pub use currency::{Currency, currency_symbol, format_amount};
pub use error::PrefsError;
pub use page::{MemoryPage, PageSurface};
pub use service::PreferenceService;
pub use store::{MemoryStore, PreferenceStore, StorageChange, Subscription};
pub use theme::{EffectiveTheme, Theme};
