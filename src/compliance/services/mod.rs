mod license_matcher;
mod report_builder;
mod report_merger;
mod stats_aggregator;

pub use license_matcher::LicenseMatcher;
pub use report_builder::ReportBuilder;
pub use report_merger::{ManifestOutcome, MergeResult, ReportMerger};
pub use stats_aggregator::StatsAggregator;
