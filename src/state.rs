use crate::config::AppConfig;
use crate::services::ai::VoiceProvider;
use crate::services::calendar::CalendarProvider;
use crate::services::delivery::DeliveryProvider;

pub struct AppState {
    pub config: AppConfig,
    pub calendar: Box<dyn CalendarProvider>,
    pub delivery: Box<dyn DeliveryProvider>,
    pub voice: Box<dyn VoiceProvider>,
}
