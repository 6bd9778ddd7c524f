//! shift-request - monthly shift-availability requests
//!
//! Staff pick the shops they can work at for each day of a month. Each
//! (date, shop) pair becomes a page in a Notion database and the whole
//! request is summarized in one Chatwork message.

pub mod calendar;
pub mod config;
pub mod error;
pub mod services;
pub mod submit;
pub mod types;
