pub mod csrf;
pub mod http;
pub mod traits;
pub mod wire;

pub use http::HttpGateway;
pub use traits::SummaryGateway;
pub use wire::ConnectionReport;
