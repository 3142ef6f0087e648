pub mod api;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod status;

pub use api::*;
pub use health::*;
pub use metrics::*;
pub use middleware::*;
pub use status::*;
