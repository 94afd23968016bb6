mod list_doctors;

pub use list_doctors::{ListDoctorsError, ListDoctorsUseCase};
