//! Honor provider.

mod descriptor;
mod provider;

pub use descriptor::{HONOR_EVENTS, honor_descriptor};
pub use provider::HonorProvider;
