/// Domain layer - license resolution and compliance merging
///
/// `domain` holds value objects and aggregates, `services` the matcher,
/// merger, statistics and report logic that operate on them.
pub mod domain;
pub mod services;
