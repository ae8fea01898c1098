/// Mock implementations for testing
mod mock_knowledge_repository;
mod mock_progress_reporter;
mod mock_results_store;

pub use mock_knowledge_repository::MockKnowledgeRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_results_store::MockResultsStore;
