/*!
Data structures produced and consumed by a route import: network primitives, route records, and
import configuration.
*/
mod config;
mod network;
mod route;

pub use config::*;
pub use network::*;
pub use route::*;
