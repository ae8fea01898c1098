/// Filesystem adapters for the results store and the knowledge catalog
mod file_results_store;
mod json_knowledge_catalog;

pub use file_results_store::FileSystemResultsStore;
pub use json_knowledge_catalog::JsonKnowledgeCatalog;
