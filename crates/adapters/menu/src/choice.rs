//! Main menu entries.

/// Header and entries printed before every choice prompt.
pub const MAIN_MENU: &str = "\
Car Service Schedule System
1. Add Car
2. Schedule Service
3. List All Services
4. View Service Details
5. Exit";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCar,
    ScheduleService,
    ListServices,
    ViewServiceDetails,
    Exit,
}

impl MenuChoice {
    /// Interpret a line typed at the main menu.
    ///
    /// Returns `None` for anything other than the integers `1` to `5`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::AddCar),
            2 => Some(Self::ScheduleService),
            3 => Some(Self::ListServices),
            4 => Some(Self::ViewServiceDetails),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}
