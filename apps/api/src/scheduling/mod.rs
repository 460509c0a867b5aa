// Interview scheduling: slot offers with fixed 24h expiry, confirmation,
// and interviewer feedback. Slot storage goes through the injected
// SlotRepository — there is no process-wide registry.

pub mod handlers;
pub mod repository;
pub mod slots;
