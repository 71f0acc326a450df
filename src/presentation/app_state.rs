// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::dispatch_service::DispatchService;
use crate::application::unit_service::UnitService;

#[derive(Clone)]
pub struct AppState {
    pub unit_service: UnitService,
    pub dashboard_service: DashboardService,
    pub dispatch_service: DispatchService,
}
