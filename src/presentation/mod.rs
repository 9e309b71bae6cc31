/// Appointment availability presentation models
pub mod visits;

pub use visits::{AppointmentDay, AppointmentSlot};
