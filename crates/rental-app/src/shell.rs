//! Interactive menu shell
//!
//! Reads a menu choice and its fields line by line, runs the matching fleet
//! operation and prints the outcome. The shell owns the fleet registry for the
//! whole session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rental_domain::model::Car;
use rental_domain::service::FleetRegistry;
use rental_types::{FleetError, OutputFormat, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::report;

const MENU: &str = "\n==== Car Rental System Menu ====\n\
1. Add Car\n\
2. Remove Car\n\
3. View All Cars\n\
4. Search Car by ID\n\
5. Search Car by Model\n\
6. Rent a Car\n\
7. Return a Car\n\
8. Update Car Price\n\
0. Exit\n";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_NUMBER: &str = "❌ Please enter a valid number.";

/// Rendering options for a shell session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub format: OutputFormat,
    pub show_menu: bool,
    pub price_decimals: u8,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ShellOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.output_format,
            show_menu: config.show_menu,
            price_decimals: config.price_decimals,
        }
    }
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddCar,
    RemoveCar,
    ViewAll,
    SearchById,
    SearchByModel,
    RentCar,
    ReturnCar,
    UpdatePrice,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::AddCar),
            2 => Some(MenuChoice::RemoveCar),
            3 => Some(MenuChoice::ViewAll),
            4 => Some(MenuChoice::SearchById),
            5 => Some(MenuChoice::SearchByModel),
            6 => Some(MenuChoice::RentCar),
            7 => Some(MenuChoice::ReturnCar),
            8 => Some(MenuChoice::UpdatePrice),
            _ => None,
        }
    }
}

/// Whether the session keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over any line input and output stream
pub struct Shell<R, W> {
    input: R,
    output: W,
    fleet: FleetRegistry,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Start a session with an empty fleet
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self::with_fleet(input, output, options, FleetRegistry::new())
    }

    pub fn with_fleet(input: R, output: W, options: ShellOptions, fleet: FleetRegistry) -> Self {
        Self {
            input,
            output,
            fleet,
            options,
        }
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    /// Consume the shell, returning the output stream and the final fleet
    pub fn into_parts(self) -> (W, FleetRegistry) {
        (self.output, self.fleet)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(format = %self.options.format, "shell session started");
        let mut steps = 0usize;
        while self.step()? == Flow::Continue {
            steps += 1;
        }
        self.output.flush()?;
        info!(steps, cars = self.fleet.len(), "shell session ended");
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        if self.options.show_menu {
            write!(self.output, "{}", MENU)?;
        }
        let Some(number) = self.read_number::<i32>(CHOICE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let Some(choice) = MenuChoice::from_number(number) else {
            self.say("❌ Invalid choice. Try again.")?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Exit => {
                self.say("👋 Exiting Car Rental System...")?;
                Ok(Flow::Exit)
            }
            MenuChoice::AddCar => self.add_car(),
            MenuChoice::RemoveCar => self.remove_car(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::SearchById => self.search_by_id(),
            MenuChoice::SearchByModel => self.search_by_model(),
            MenuChoice::RentCar => self.rent_car(),
            MenuChoice::ReturnCar => self.return_car(),
            MenuChoice::UpdatePrice => self.update_price(),
        }
    }

    fn add_car(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.read_text("Enter Model Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.read_number("Enter Price per Day: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.fleet.add(Car::new(id, model, price));
        self.report(outcome, "✅ Car added successfully.")?;
        Ok(Flow::Continue)
    }

    fn remove_car(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID to remove: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.fleet.remove(id).map(|_| ());
        self.report(outcome, "✅ Car removed successfully.")?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        let text = report::render_listing(
            self.fleet.list_all(),
            self.options.format,
            self.options.price_decimals,
        )?;
        write!(self.output, "{}", text)?;
        Ok(Flow::Continue)
    }

    fn search_by_id(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID to search: ")? else {
            return Ok(Flow::Exit);
        };

        let text = match self.fleet.find_by_id(id) {
            Some(car) => report::render_car(car, self.options.format, self.options.price_decimals)?,
            None => format!("❌ {}\n", FleetError::NotFound(id)),
        };
        write!(self.output, "{}", text)?;
        Ok(Flow::Continue)
    }

    fn search_by_model(&mut self) -> Result<Flow> {
        let Some(model) = self.read_text("Enter Model Name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let found = self.fleet.find_by_model(&model);
        let text = if found.is_empty() {
            "❌ No cars found with that model.\n".to_string()
        } else {
            report::render_cars(&found, self.options.format, self.options.price_decimals)?
        };
        write!(self.output, "{}", text)?;
        Ok(Flow::Continue)
    }

    fn rent_car(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID to rent: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(customer) = self.read_text("Enter Customer Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(days) = self.read_number("Enter Rental Duration (days): ")? else {
            return Ok(Flow::Exit);
        };

        match self.fleet.rent(id, &customer, days) {
            Ok(rental) => {
                let slip = report::render_receipt(&rental, self.options.format)?;
                write!(self.output, "{}", slip)?;
            }
            Err(err) => self.reject(err)?,
        }
        Ok(Flow::Continue)
    }

    fn return_car(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID to return: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.fleet.return_car(id);
        self.report(outcome, "✅ Car returned successfully.")?;
        Ok(Flow::Continue)
    }

    fn update_price(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number("Enter Car ID to update price: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.read_number("Enter new Price per Day: ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.fleet.update_price(id, price);
        self.report(outcome, "✅ Car price updated successfully.")?;
        Ok(Flow::Continue)
    }

    /// Print the success line, or the error's message
    fn report(&mut self, outcome: std::result::Result<(), FleetError>, success: &str) -> Result<()> {
        match outcome {
            Ok(()) => self.say(success),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&mut self, err: FleetError) -> Result<()> {
        debug!(car_id = err.car_id(), error = ?err, "fleet operation rejected");
        self.say(&format!("❌ {}", err))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prompt for one line of text. `None` means input ended.
    fn read_text(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(prompt, "input ended");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the line parses as a number. `None` means input ended.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(text) = self.read_text(prompt)? else {
                return Ok(None);
            };
            match text.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!(input = %text, "rejected non-numeric input");
                    self.say(INVALID_NUMBER)?;
                }
            }
        }
    }
}
