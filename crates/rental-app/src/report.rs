//! Text and JSON rendering for cars, listings and rental slips
//!
//! Every function here is pure: it takes domain values and returns the text to
//! print. The shell decides where it goes.

use rental_domain::model::{Car, Rental};
use rental_domain::service::FleetListing;
use rental_types::{OutputFormat, Result};

/// Notice printed when the fleet has no cars
pub const EMPTY_FLEET_NOTICE: &str = "📂 No cars available in the system.";

const SEPARATOR_WIDTH: usize = 48;

/// Render an amount the way the rental slip shows it: shortest exact digits
/// with a fractional part (`50.0`, `49.99`). Magnitudes outside
/// `[1e-3, 1e7)` use an exponent (`1.0E16`, `1.0E-5`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", amount);
    }

    let scientific = format!("{:e}", amount);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

/// Column header matching [`car_row`]
pub fn table_header() -> String {
    format!("{:<5} {:<15} {:<10} {:<10}", "ID", "Model", "Price/Day", "Status")
}

/// One fixed-width table row for a car
pub fn car_row(car: &Car, price_decimals: u8) -> String {
    format!(
        "{:<5} {:<15} {:<10.*} {:<10}",
        car.id,
        car.model_name,
        usize::from(price_decimals),
        car.price_per_day,
        car.status_label()
    )
}

/// Render the full fleet listing, or the empty-fleet notice
pub fn render_listing(
    listing: FleetListing<'_>,
    format: OutputFormat,
    price_decimals: u8,
) -> Result<String> {
    let cars = match listing {
        FleetListing::Cars(cars) => cars,
        FleetListing::Empty if format == OutputFormat::Json => return Ok("[]\n".to_string()),
        FleetListing::Empty => return Ok(format!("{}\n", EMPTY_FLEET_NOTICE)),
    };

    if format == OutputFormat::Json {
        return to_json(&cars);
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    out.push_str(&table_header());
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for car in cars {
        out.push_str(&car_row(car, price_decimals));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    Ok(out)
}

/// Render a single car (search by id)
pub fn render_car(car: &Car, format: OutputFormat, price_decimals: u8) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(car),
        OutputFormat::Table => Ok(format!("{}\n", car_row(car, price_decimals))),
    }
}

/// Render search results, one row per car without header
pub fn render_cars(cars: &[&Car], format: OutputFormat, price_decimals: u8) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&cars),
        OutputFormat::Table => Ok(cars
            .iter()
            .map(|car| format!("{}\n", car_row(car, price_decimals)))
            .collect()),
    }
}

/// Render the rental slip for a successful rent
pub fn render_receipt(rental: &Rental, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(rental);
    }

    let mut slip = String::new();
    slip.push_str("\n===== RENTAL SLIP =====\n");
    slip.push_str(&format!("Customer Name: {}\n", rental.customer_name));
    slip.push_str(&format!("Car ID: {}\n", rental.car_id));
    slip.push_str(&format!("Car Model: {}\n", rental.model_name));
    slip.push_str(&format!("Price per Day: {}\n", format_amount(rental.price_per_day)));
    slip.push_str(&format!("Rental Duration: {} days\n", rental.days));
    slip.push_str(&format!("Total Cost: {}\n", format_amount(rental.total_cost)));
    slip.push_str(&format!("Status: {}\n", rental.status_label()));
    slip.push_str("=======================\n\n");
    Ok(slip)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}
