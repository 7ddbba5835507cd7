pub mod mock_resolver;

pub use mock_resolver::{domain_list, ip, MockIpResolver};
