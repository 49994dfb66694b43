// Reminder notification module.
//
// Architecture:
// - engine.rs: due-time evaluation with a tolerance window and per-day
//   de-duplication; the app layer turns fired events into UI notifications

pub mod engine;
