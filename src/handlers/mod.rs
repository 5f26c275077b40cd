// Handlers are split by security tier: public (no authentication) and
// protected (bearer token required, applied as route middleware in main).
pub mod protected;
pub mod public;
