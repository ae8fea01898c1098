/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the compliance services and talks to
/// infrastructure only through ports.
pub mod dto;
pub mod use_cases;
