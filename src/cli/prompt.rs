//! Interactive quickstart asking for every input value on the console.
//!
//! Enter keeps the shown default. Invalid numbers are reported and asked
//! again; a decimal comma is accepted for amounts and distances. End of input
//! is treated like Enter, so piped answers never loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculation::Calculator;
use crate::models::{AllowanceInput, TravelCostInput};
use crate::report::format_breakdown;

use super::CliError;

const INVALID_ENTRY: &str = "Bitte eine gültige Eingabe machen.";
const PROMPT_VEHICLES: [&str; 3] = ["car", "motorcycle", "bike"];

/// Console dialogue over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask<T>(
        &mut self,
        message: &str,
        default_label: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let prompt = format!("{} [{}]: ", message, default_label);
        loop {
            let answer = self.read_answer(&prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{}", INVALID_ENTRY)?,
            }
        }
    }

    /// Asks for a whole number, defaulting to 0.
    pub fn ask_count(&mut self, message: &str) -> io::Result<i32> {
        Ok(self
            .ask(message, "0", |s| s.parse::<i32>().ok())?
            .unwrap_or(0))
    }

    /// Asks for an amount or distance, defaulting to 0.
    pub fn ask_amount(&mut self, message: &str) -> io::Result<Decimal> {
        Ok(self
            .ask(message, "0.0", parse_decimal)?
            .unwrap_or(Decimal::ZERO))
    }

    /// Asks for an optional amount; Enter leaves it absent.
    pub fn ask_optional_amount(&mut self, message: &str) -> io::Result<Option<Decimal>> {
        self.ask(message, "leer", parse_decimal)
    }

    /// Asks for the vehicle, defaulting to `car`.
    pub fn ask_vehicle(&mut self) -> io::Result<String> {
        let prompt = format!("Fortbewegungsmittel {{{}}} [car]: ", PROMPT_VEHICLES.join(", "));
        loop {
            let answer = self.read_answer(&prompt)?.to_lowercase();
            if answer.is_empty() {
                return Ok("car".to_string());
            }
            if PROMPT_VEHICLES.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Bitte 'car', 'motorcycle' oder 'bike' eingeben.")?;
        }
    }

    /// Asks for every field of both input records.
    pub fn collect_inputs(&mut self) -> io::Result<(AllowanceInput, TravelCostInput)> {
        let allowance = AllowanceInput {
            full_days: self.ask_count("Anzahl voller Abwesenheitstage")?,
            arrival_departure_days: self.ask_count("Anzahl An-/Abreisetage")?,
            partial_days: self.ask_count("Anzahl weiterer Tage mit >8h Abwesenheit")?,
            overnight_stays_with_receipts: self.ask_count("Übernachtungen mit Beleg")?,
            overnight_costs_total: self.ask_amount("Summe belegter Übernachtungskosten (EUR)")?,
            overnight_stays_without_receipts: self.ask_count("Übernachtungen ohne Beleg")?,
        };

        let travel = TravelCostInput {
            vehicle: self.ask_vehicle()?,
            initial_trip_distance_km: self.ask_amount("Kilometer Anreise")?,
            initial_trip_actual_cost: self
                .ask_optional_amount("Tatsächliche Kosten Anreise (EUR)")?,
            return_trip_distance_km: self.ask_amount("Kilometer Rückreise")?,
            return_trip_actual_cost: self
                .ask_optional_amount("Tatsächliche Kosten Rückreise (EUR)")?,
            weekly_home_trips: self.ask_count("Anzahl Heimfahrten")?,
            home_trip_distance_km: self.ask_amount("Entfernung einer Heimfahrt (km)")?,
            home_trip_actual_cost: self
                .ask_optional_amount("Tatsächliche Kosten einer Heimfahrt (EUR)")?,
            commuting_days: self.ask_count("Anzahl Pendeltage")?,
            commuting_distance_km: self.ask_amount("Pendeldistanz (km)")?,
            commuting_actual_cost_per_day: self
                .ask_optional_amount("Tatsächliche Pendelkosten pro Tag (EUR)")?,
            additional_costs: self.ask_amount("Weitere erstattungsfähige Kosten (EUR)")?,
        };

        Ok((allowance, travel))
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', ".")).ok()
}

/// Runs the whole quickstart: greeting, questions, calculation and report.
pub fn run_prompt<R: BufRead, W: Write>(
    input: R,
    output: W,
    calculator: &Calculator,
) -> Result<W, CliError> {
    let mut prompter = Prompter::new(input, output);
    writeln!(prompter.output, "Trennungsgeld Schnelleinstieg")?;
    writeln!(prompter.output, "(Eingabe mit Enter übernimmt den Standardwert)")?;

    let (allowance, travel) = prompter.collect_inputs()?;
    let result = calculator.calculate(&allowance, &travel)?;

    let mut output = prompter.into_output();
    writeln!(output)?;
    for line in format_breakdown(&result) {
        writeln!(output, "{}", line)?;
    }
    Ok(output)
}
