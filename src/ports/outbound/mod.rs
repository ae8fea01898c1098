/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (knowledge catalog, results store, logs).
pub mod knowledge_repository;
pub mod progress_reporter;
pub mod results_store;

pub use knowledge_repository::{KnowledgeRepository, PackageRecord};
pub use progress_reporter::ProgressReporter;
pub use results_store::{ResultsStore, StoredResult};
