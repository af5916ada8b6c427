//! The read-eval-print loop behind the numeric menu.

use std::io::{BufRead, Write};

use carservice_app::ports::{CarRepository, ServiceRecordRepository};
use carservice_domain::car::Car;
use carservice_domain::error::{CarServiceError, ValidationError};
use carservice_domain::id::{CarId, ServiceId};
use carservice_domain::service_record::NewServiceRecord;
use carservice_domain::time::{self, INPUT_PATTERN};

use crate::choice::{MAIN_MENU, MenuChoice};
use crate::error::{InputError, MenuError};
use crate::state::App;
use crate::terminal::Terminal;

/// Whether the loop goes back to the main menu after an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu bound to a set of services and a terminal.
pub struct Menu<'a, CR, SR, R, W> {
    app: &'a App<CR, SR>,
    terminal: Terminal<R, W>,
}

impl<'a, CR, SR, R, W> Menu<'a, CR, SR, R, W>
where
    CR: CarRepository,
    SR: ServiceRecordRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(app: &'a App<CR, SR>, input: R, output: W) -> Self {
        Self {
            app,
            terminal: Terminal::new(input, output),
        }
    }

    /// Run until the user picks "Exit" or the input ends.
    ///
    /// Operation failures are reported to the user and the loop carries on.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Io`] when the terminal itself fails.
    pub async fn run(&mut self) -> Result<(), MenuError> {
        loop {
            self.terminal.say(format_args!("\n{MAIN_MENU}"))?;
            let choice = match self.terminal.prompt("Enter your choice: ") {
                Ok(Some(line)) => MenuChoice::parse(&line),
                Ok(None) => return self.exit(),
                Err(InputError::NotUtf8) => None,
                Err(InputError::Io(err)) => return Err(err.into()),
            };

            let outcome = match choice {
                Some(MenuChoice::AddCar) => self.add_car().await,
                Some(MenuChoice::ScheduleService) => self.schedule_service().await,
                Some(MenuChoice::ListServices) => self.list_services().await,
                Some(MenuChoice::ViewServiceDetails) => self.view_service_details().await,
                Some(MenuChoice::Exit) => Ok(Flow::Exit),
                None => {
                    tracing::debug!("invalid menu choice");
                    self.terminal.say("Invalid choice, please try again.")?;
                    Ok(Flow::Continue)
                }
            };

            let flow = match outcome {
                Ok(flow) => flow,
                Err(err @ InputError::NotUtf8) => {
                    tracing::debug!(error = %err, "sub-flow input rejected");
                    self.terminal.say(format_args!("Invalid input: {err}"))?;
                    Flow::Continue
                }
                Err(InputError::Io(err)) => return Err(err.into()),
            };

            if flow == Flow::Exit {
                return self.exit();
            }
        }
    }

    fn exit(&mut self) -> Result<(), MenuError> {
        self.terminal.say("Exiting...")?;
        Ok(())
    }

    async fn add_car(&mut self) -> Result<Flow, InputError> {
        let Some(id) = self.terminal.prompt("Enter car ID (number): ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(id) = id.parse::<CarId>() else {
            self.terminal.say(
                "Invalid input. Please ensure the car ID is a number and model/owner are strings.",
            )?;
            return Ok(Flow::Continue);
        };
        let Some(model) = self.terminal.prompt("Enter car model (string): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(owner) = self.terminal.prompt("Enter car owner name (string): ")? else {
            return Ok(Flow::Exit);
        };

        let car = Car { id, model, owner };
        match self.app.car_service.add_car(car).await {
            Ok(_) => self.terminal.say("Car added successfully!")?,
            Err(err) => {
                log_failure("add car", &err);
                self.terminal.say(format_args!("Error adding car: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn schedule_service(&mut self) -> Result<Flow, InputError> {
        let Some(car_id) = self.terminal.prompt("Enter car ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(car_id) = car_id.parse::<CarId>() else {
            self.terminal
                .say("Invalid input. Please ensure the car ID is a number.")?;
            return Ok(Flow::Continue);
        };
        let Some(service_type) = self.terminal.prompt("Enter service type: ")? else {
            return Ok(Flow::Exit);
        };
        let label = format!("Enter service date and time ({INPUT_PATTERN}): ");
        let Some(date_time) = self.terminal.prompt(&label)? else {
            return Ok(Flow::Exit);
        };
        let Ok(scheduled_at) = time::parse_input(&date_time) else {
            self.terminal.say(format_args!(
                "Invalid date and time format. Please enter in the format: {INPUT_PATTERN}"
            ))?;
            return Ok(Flow::Continue);
        };

        let record = NewServiceRecord {
            car_id,
            service_type,
            scheduled_at,
        };
        match self.app.schedule_service.schedule_service(record).await {
            Ok(stored) => self.terminal.say(format_args!(
                "Service scheduled successfully! (Service ID: {})",
                stored.id
            ))?,
            Err(CarServiceError::NotFound(_)) => {
                self.terminal.say("No car found with the given ID.")?;
            }
            Err(CarServiceError::Validation(ValidationError::ScheduledInPast { .. })) => {
                self.terminal
                    .say("Invalid date and time. You cannot schedule a service in the past.")?;
            }
            Err(err) => {
                log_failure("schedule service", &err);
                self.terminal
                    .say(format_args!("Error scheduling service: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn list_services(&mut self) -> Result<Flow, InputError> {
        match self.app.schedule_service.list_services().await {
            Ok(services) if services.is_empty() => self.terminal.say("No services scheduled.")?,
            Ok(services) => {
                for details in &services {
                    self.terminal.say(details)?;
                }
            }
            Err(err) => {
                log_failure("list services", &err);
                self.terminal
                    .say(format_args!("Error listing services: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn view_service_details(&mut self) -> Result<Flow, InputError> {
        let Some(id) = self.terminal.prompt("Enter service ID to view: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(id) = id.parse::<ServiceId>() else {
            self.terminal
                .say("Invalid input. Please ensure the service ID is a number.")?;
            return Ok(Flow::Continue);
        };

        match self.app.schedule_service.get_service_details(id).await {
            Ok(Some(details)) => self.terminal.say(details)?,
            Ok(None) => self.terminal.say("No service found with the given ID.")?,
            Err(err) => {
                log_failure("view service details", &err);
                self.terminal
                    .say(format_args!("Error viewing service details: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }
}

fn log_failure(operation: &str, err: &CarServiceError) {
    match err {
        CarServiceError::Storage(source) => {
            tracing::error!(operation, error = %source, "store operation failed");
        }
        other => tracing::info!(operation, error = %other, "operation rejected"),
    }
}
