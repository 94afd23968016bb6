mod list_doctors_service;

pub use list_doctors_service::ListDoctorsService;
