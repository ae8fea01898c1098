/// In-memory decorators for outbound ports
mod caching_knowledge_repository;

pub use caching_knowledge_repository::CachingKnowledgeRepository;
