use crate::config::AppConfig;
use crate::services::dispatch::Dispatcher;

pub struct AppState {
    pub config: AppConfig,
    pub dispatcher: Dispatcher,
}
