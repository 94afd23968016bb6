use std::sync::Arc;

use crate::directory::application::ports::incoming::use_cases::ListDoctorsUseCase;

#[derive(Clone)]
pub struct DirectoryUseCases {
    pub doctors: Arc<dyn ListDoctorsUseCase + Send + Sync>,
}
