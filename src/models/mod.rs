pub mod appointment;

pub use appointment::{
    slot_duration, Appointment, Booking, Employee, StoredAppointment, SLOT_MINUTES,
};
