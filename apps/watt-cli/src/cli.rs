//! Command-line and session-line argument definitions.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use watt_core::{ConnectionType, CustomerProfile, PlanType};

#[derive(Debug, Parser)]
#[command(
    name = "watt",
    version,
    about = "Household energy planner - estimate a monthly bill from your appliances",
    long_about = "Starts an interactive session reading one command per line from stdin.\n\n\
                  Type `help` inside the session for the command list."
)]
pub struct Cli {
    /// Appliance catalog JSON file (overrides WATT_CATALOG_PATH).
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Plan the session starts on (overrides WATT_PLAN).
    #[arg(long, value_name = "PLAN")]
    pub plan: Option<PlanType>,

    /// Simulated profile submit latency in milliseconds (overrides WATT_SUBMIT_DELAY_MS).
    #[arg(long = "submit-delay-ms", value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One line of session input.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, name = "watt", disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

impl SessionLine {
    /// Parses one input line. Words are split the way a shell would, so
    /// `--first-name "Mary Ann"` is a single value.
    pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
        // None on an unterminated quote or a trailing backslash
        let Some(words) = shlex::split(line) else {
            return Err(
                clap::Error::raw(ErrorKind::ValueValidation, "unbalanced quote in input\n")
                    .format(&mut Self::command()),
            );
        };

        Self::try_parse_from(words).map(|parsed| parsed.command)
    }
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// List the appliances that can be added.
    Catalog,

    /// Add an appliance from the catalog.
    Add {
        /// Catalog id, as shown by `catalog`.
        catalog_id: String,
    },

    /// Remove an added appliance.
    Remove {
        /// Appliance id, as shown by `show`.
        appliance_id: String,
    },

    /// Switch billing plan.
    Plan {
        /// standard | green
        plan: PlanType,
    },

    /// Submit your profile; commercial connections move to the green plan.
    Profile(ProfileArgs),

    /// Show added appliances and the estimated monthly bill.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, clap::Args)]
pub struct ProfileArgs {
    #[arg(long = "first-name")]
    pub first_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub postcode: String,

    /// residential | commercial
    #[arg(long = "connection", default_value = "residential")]
    pub connection_type: ConnectionType,

    /// A smart meter is installed at the premises.
    #[arg(long = "smart-meter")]
    pub has_smart_meter: bool,
}

impl From<ProfileArgs> for CustomerProfile {
    fn from(args: ProfileArgs) -> Self {
        CustomerProfile {
            first_name: args.first_name,
            email: args.email,
            postcode: args.postcode,
            connection_type: args.connection_type,
            has_smart_meter: args.has_smart_meter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<SessionCommand, clap::Error> {
        SessionLine::parse_line(line)
    }

    #[test]
    fn test_parse_plan() {
        assert!(matches!(
            parse("plan green").unwrap(),
            SessionCommand::Plan { plan: PlanType::Green }
        ));
        assert!(parse("plan premium").is_err());
    }

    #[test]
    fn test_parse_profile_defaults() {
        let cmd = parse("profile --first-name Alinta --email a@b.io --postcode 3000").unwrap();
        let SessionCommand::Profile(args) = cmd else {
            panic!("expected profile command");
        };
        let profile = CustomerProfile::from(args);
        assert_eq!(profile.connection_type, ConnectionType::Residential);
        assert!(!profile.has_smart_meter);
    }

    #[test]
    fn test_parse_profile_commercial() {
        let cmd = parse(
            "profile --first-name Alinta --email a@b.io --postcode 3000 --connection commercial --smart-meter",
        )
        .unwrap();
        let SessionCommand::Profile(args) = cmd else {
            panic!("expected profile command");
        };
        assert_eq!(args.connection_type, ConnectionType::Commercial);
        assert!(args.has_smart_meter);
    }

    #[test]
    fn test_parse_quoted_values() {
        let cmd =
            parse(r#"profile --first-name "Mary Ann" --email 'a@b.io' --postcode 3000"#).unwrap();
        let SessionCommand::Profile(args) = cmd else {
            panic!("expected profile command");
        };
        assert_eq!(args.first_name, "Mary Ann");
        assert_eq!(args.email, "a@b.io");
    }

    #[test]
    fn test_unbalanced_quote_is_error() {
        let err = parse(r#"profile --first-name "Mary Ann --postcode 3000"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unbalanced quote"));
    }

    #[test]
    fn test_unknown_command_is_error() {
        assert!(parse("reset").is_err());
        assert!(matches!(parse("exit").unwrap(), SessionCommand::Quit));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["watt", "--plan", "green", "--submit-delay-ms", "0", "-vv"])
            .unwrap();
        assert_eq!(cli.plan, Some(PlanType::Green));
        assert_eq!(cli.submit_delay_ms, Some(0));
        assert_eq!(cli.verbose, 2);
    }
}
