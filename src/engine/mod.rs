pub mod scoring;
pub mod timers;
