//! Helpers shared by the page and form handlers.

mod cookies;
mod labels;
mod mails;

pub use cookies::{VIEWED_ARTICLES_COOKIE, ViewedArticles};
pub use labels::{opportunities_label, reading_time_label, views_label};
pub use mails::{application_email, contact_email, text_direction};
