pub mod file;
pub mod http;
pub mod traits;

// Re-export
pub use file::FileContributionSource;
pub use http::HttpContributionSource;
pub use traits::ContributionSource;
