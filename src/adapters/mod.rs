/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The binary is the only
/// inbound driver, so there is no inbound adapter module.
pub mod outbound;
