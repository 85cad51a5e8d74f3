pub mod booking;
pub mod busy;
pub mod extraction;
pub mod service;
pub mod slot;

pub use booking::BookingRequest;
pub use busy::BusyInterval;
pub use extraction::VoiceExtraction;
pub use service::{catalogue, ServiceInfo, ServiceKind};
pub use slot::{day_slots, TimeSlot};
