/// Use cases module containing application business logic orchestration
mod analyze_licenses;

pub use analyze_licenses::AnalyzeLicensesUseCase;
