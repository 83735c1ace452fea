//! Static datasets rendered by the pages. Nothing here is ever written back.

pub mod activity;
pub mod analytics;
pub mod bots;
pub mod channels;
pub mod knowledge;
pub mod review;
pub mod workspace;

pub(crate) fn s(value: &str) -> String {
    value.to_string()
}
