pub mod config;
pub mod error;
pub mod gpio;
pub mod relay;
pub mod server;
pub mod util;

pub use config::RelayConfig;
pub use relay::{RelayCoordinator, RelayStatus};
