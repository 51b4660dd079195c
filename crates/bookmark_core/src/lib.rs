//! Bookmark core: pure, IO-free helpers shared by the bookmark UI and the HTTP app.
//!
//! The server only needs [`is_valid_url`] and [`extract_domain`]. The rest is the
//! display layer for bookmark clients: favicon links for list rows, relative
//! "saved N days ago" labels, and splitting pasted text into importable URLs.
mod date;
mod links;

pub use date::{format_relative_date, format_relative_date_now, RELATIVE_WINDOW_DAYS};
pub use links::{extract_domain, favicon_url, is_valid_url, valid_urls};
