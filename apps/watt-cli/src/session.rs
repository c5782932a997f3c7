//! # Interactive Session
//!
//! Reads one command per line, runs it, prints the outcome.
//!
//! ```text
//! watt> add fridge
//! added Fridge as fridge-6f1c…  (2.4 kWh)
//! Standard Rate · 1 appliance · 2.40 kWh/day · est. $18.00/month
//! watt> plan green
//! Eco-Green Rate · 1 appliance · 2.40 kWh/day · est. $21.60/month
//! ```
//!
//! Errors are printed and the session goes on; only `quit` or end of input
//! stops it.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;
use watt_core::billing::BillingSummary;

use crate::cli::{SessionCommand, SessionLine};
use crate::commands::catalog::{list_catalog, CatalogResponse};
use crate::commands::energy::{self, EnergyResponse};
use crate::commands::profile::submit_profile;
use crate::error::ApiError;
use crate::state::{AppConfig, CatalogState, CatalogStatus, EnergyStore};

const PROMPT: &str = "watt> ";

/// Everything a session works with.
#[derive(Debug)]
pub struct Session {
    pub config: AppConfig,
    pub catalog: CatalogState,
    pub store: EnergyStore,
}

/// What the loop does after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(config: AppConfig, catalog: CatalogState, store: EnergyStore) -> Self {
        Session {
            config,
            catalog,
            store,
        }
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        if let CatalogStatus::Failed { reason } = self.catalog.status() {
            writeln!(out, "appliance catalog unavailable ({reason}); adding is disabled")?;
        }

        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            if self.handle_line(line.trim(), out).await? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    async fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        debug!(line = %line, "session input");

        let command = match SessionLine::parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                // Covers `help` too: clap reports it as an error kind
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            SessionCommand::Catalog => {
                self.print_catalog(out, &list_catalog(&self.catalog))?;
            }
            SessionCommand::Add { catalog_id } => {
                match energy::add_appliance(&self.store, &self.catalog, &catalog_id) {
                    Ok((appliance, response)) => {
                        writeln!(
                            out,
                            "added {} as {} ({} kWh)",
                            appliance.name, appliance.id, appliance.kwh
                        )?;
                        self.print_totals(out, &response.totals)?;
                    }
                    Err(e) => print_error(out, &e)?,
                }
            }
            SessionCommand::Remove { appliance_id } => {
                let response = energy::remove_appliance(&self.store, &appliance_id);
                self.print_totals(out, &response.totals)?;
            }
            SessionCommand::Plan { plan } => {
                let response = energy::change_plan(&self.store, plan);
                self.print_totals(out, &response.totals)?;
            }
            SessionCommand::Profile(args) => {
                writeln!(out, "syncing profile...")?;
                out.flush()?;
                match submit_profile(&self.store, &self.config, args.into()).await {
                    Ok(response) => {
                        writeln!(
                            out,
                            "profile saved for {}; plan set to {}",
                            response.submitted.profile.first_name,
                            response.submitted.plan.label()
                        )?;
                        self.print_totals(out, &response.energy.totals)?;
                    }
                    Err(e) => print_error(out, &e)?,
                }
            }
            SessionCommand::Show { json } => {
                let response = energy::get_energy(&self.store);
                if json {
                    match serde_json::to_string_pretty(&response) {
                        Ok(text) => writeln!(out, "{text}")?,
                        Err(e) => print_error(out, &ApiError::internal(e.to_string()))?,
                    }
                } else {
                    self.print_energy(out, &response)?;
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_catalog<W: Write>(&self, out: &mut W, response: &CatalogResponse) -> std::io::Result<()> {
        if let CatalogStatus::Failed { reason } = &response.status {
            return writeln!(out, "catalog unavailable: {reason}");
        }
        if response.entries.is_empty() {
            return writeln!(out, "catalog is empty");
        }
        for entry in &response.entries {
            writeln!(out, "  {:<16} {} ({} kWh/h)", entry.id, entry.name, entry.kwh)?;
        }
        Ok(())
    }

    fn print_energy<W: Write>(&self, out: &mut W, response: &EnergyResponse) -> std::io::Result<()> {
        if response.appliances.is_empty() {
            writeln!(out, "  no appliances selected")?;
        }
        for appliance in &response.appliances {
            writeln!(out, "  {:<48} {:<16} {} kWh", appliance.id, appliance.name, appliance.kwh)?;
        }
        self.print_totals(out, &response.totals)
    }

    fn print_totals<W: Write>(&self, out: &mut W, totals: &BillingSummary) -> std::io::Result<()> {
        writeln!(
            out,
            "{} · {} appliance{} · {:.2} kWh/day · est. {}/month",
            totals.plan.label(),
            totals.appliance_count,
            if totals.appliance_count == 1 { "" } else { "s" },
            totals.daily_load_kwh,
            self.config.format_currency(totals.monthly_bill.cents())
        )
    }
}

fn print_error<W: Write>(out: &mut W, err: &ApiError) -> std::io::Result<()> {
    writeln!(out, "error: {}", err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use watt_core::{Catalog, PlanType, SequentialIdGenerator};

    fn session(catalog: CatalogState) -> Session {
        let config = AppConfig {
            submit_delay_ms: 0,
            ..AppConfig::default()
        };
        let store = EnergyStore::with_id_generator(
            PlanType::Standard,
            Box::new(SequentialIdGenerator::new()),
        );
        Session::new(config, catalog, store)
    }

    fn ready_catalog() -> CatalogState {
        CatalogState::ready(
            Catalog::from_json(
                r#"[
                    {"id":"fridge","name":"Fridge","kwh":2.4},
                    {"id":"heater","name":"Heater","kwh":1.0},
                    {"id":"dryer","name":"Dryer","kwh":3.5}
                ]"#,
            )
            .unwrap(),
        )
    }

    async fn run(session: &Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_fridge_scenario() {
        let session = session(ready_catalog());

        let output = run(&session, "add fridge\nplan green\n").await;

        assert!(output.contains("added Fridge as fridge-1 (2.4 kWh)"));
        assert!(output.contains("Standard Rate · 1 appliance · 2.40 kWh/day · est. $18.00/month"));
        assert!(output.contains("Eco-Green Rate · 1 appliance · 2.40 kWh/day · est. $21.60/month"));
    }

    #[tokio::test]
    async fn test_remove_scenario() {
        let session = session(ready_catalog());

        let output = run(&session, "add heater\nadd dryer\nremove heater-1\n").await;

        assert!(output.contains("4.50 kWh/day · est. $33.75/month"));
        assert!(output.contains("1 appliance · 3.50 kWh/day · est. $26.25/month"));
        assert_eq!(session.store.snapshot().appliances[0].id, "dryer-2");
    }

    #[tokio::test]
    async fn test_commercial_profile_sets_green() {
        let session = session(ready_catalog());

        let output = run(
            &session,
            "profile --first-name Alinta --email alinta@energy.com.au --postcode 3000 --connection commercial\n",
        )
        .await;

        assert!(output.contains("plan set to Eco-Green Rate"));
        assert_eq!(session.store.snapshot().plan, PlanType::Green);
    }

    #[tokio::test]
    async fn test_profile_with_quoted_two_word_name() {
        let session = session(ready_catalog());

        let output = run(
            &session,
            "profile --first-name \"Mary Ann\" --email a@b.io --postcode 3000 --connection commercial\n",
        )
        .await;

        assert!(output.contains("profile saved for Mary Ann; plan set to Eco-Green Rate"));
        assert_eq!(session.store.snapshot().plan, PlanType::Green);
    }

    #[tokio::test]
    async fn test_unbalanced_quote_does_not_mutate() {
        let session = session(ready_catalog());

        let output = run(
            &session,
            "profile --first-name \"Mary Ann --email a@b.io --postcode 3000 --connection commercial\n",
        )
        .await;

        assert!(output.contains("unbalanced quote"));
        assert_eq!(session.store.snapshot().plan, PlanType::Standard);
    }

    #[tokio::test]
    async fn test_invalid_profile_reports_error() {
        let session = session(ready_catalog());

        let output = run(
            &session,
            "profile --first-name Alinta --email nope --postcode 3000 --connection commercial\n",
        )
        .await;

        assert!(output.contains("error: email has invalid format"));
        assert_eq!(session.store.snapshot().plan, PlanType::Standard);
    }

    #[tokio::test]
    async fn test_failed_catalog_session() {
        let session = session(CatalogState::failed("No such file"));

        let output = run(&session, "catalog\nadd fridge\nshow\n").await;

        assert!(output.contains("adding is disabled"));
        assert!(output.contains("catalog unavailable: No such file"));
        assert!(output.contains("error: Appliance catalog is unavailable"));
        assert!(output.contains("no appliances selected"));
    }

    #[tokio::test]
    async fn test_unknown_command_does_not_mutate() {
        let session = session(ready_catalog());

        let output = run(&session, "add fridge\nreset\n").await;

        assert!(output.contains("unrecognized subcommand"));
        assert_eq!(session.store.snapshot().appliance_count(), 1);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let session = session(ready_catalog());

        run(&session, "quit\nadd fridge\n").await;

        assert!(session.store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_show_json() {
        let session = session(ready_catalog());

        let output = run(&session, "add fridge\nshow --json\n").await;

        assert!(output.contains("\"monthlyBill\": 1800"));
        assert!(output.contains("\"id\": \"fridge-1\""));
    }
}
