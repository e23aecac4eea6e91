pub mod analysis;
pub mod fetcher;

pub use analysis::AnalysisService;
pub use fetcher::FetchService;
