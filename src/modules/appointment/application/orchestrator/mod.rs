pub mod appointment_booking;
