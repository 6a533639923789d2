pub mod footer;

pub use footer::{Footer, ANCHOR_ID, CENTER_NAME};
