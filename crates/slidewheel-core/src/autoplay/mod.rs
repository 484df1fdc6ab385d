pub mod service;

pub use service::{AutoplayEvent, AutoplayService};
