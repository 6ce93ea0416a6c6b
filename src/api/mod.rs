mod client;
mod meetings;
mod users;

pub use client::ZoomClient;
pub use meetings::{meeting_body, DEFAULT_TIMEZONE};
