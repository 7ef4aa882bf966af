use crate::{config::Config, validation::status::AttendanceValidator};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub validator: AttendanceValidator,
}

impl AppState {
    pub fn new(config: Config, validator: AttendanceValidator) -> Self {
        Self { config, validator }
    }
}
