pub mod appointment_query;
pub mod appointment_repository;

pub use appointment_query::{AppointmentQuery, AppointmentQueryError};
pub use appointment_repository::{
    AppointmentRepository, AppointmentRepositoryError, NewAppointment,
};
