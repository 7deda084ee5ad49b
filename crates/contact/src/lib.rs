mod capture;
mod gateway;
pub mod relay;
mod remote;
mod submission;

pub use capture::*;
pub use gateway::*;
pub use relay::{Relay, RelayConfig, RelayError, RelayKind, RelayResponse, build_relay};
pub use remote::*;
pub use submission::*;
