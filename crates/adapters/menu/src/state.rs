//! Application services the menu dispatches to.

use carservice_app::ports::{CarRepository, ServiceRecordRepository};
use carservice_app::services::car_service::CarService;
use carservice_app::services::schedule_service::ScheduleService;

/// Services shared by every menu entry.
///
/// Generic over the repository types to avoid dynamic dispatch.
pub struct App<CR, SR> {
    /// Car registry.
    pub car_service: CarService<CR>,
    /// Appointment scheduling and queries.
    pub schedule_service: ScheduleService<CR, SR>,
}

impl<CR, SR> App<CR, SR>
where
    CR: CarRepository + Clone,
    SR: ServiceRecordRepository,
{
    /// Build both services over the given repositories.
    ///
    /// The car repository is cloned so the scheduling service can check
    /// that a car exists before booking it.
    pub fn new(car_repo: CR, service_repo: SR) -> Self {
        Self {
            car_service: CarService::new(car_repo.clone()),
            schedule_service: ScheduleService::new(car_repo, service_repo),
        }
    }
}
