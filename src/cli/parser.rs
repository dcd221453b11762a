use crate::errors::{AppResult, RangeError};
use crate::models::{AdvancedParams, CostType, Granularity, GroupBy, PresetName, Selection};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for czfilter
/// CLI application to resolve date ranges and patch cost dashboard URLs
#[derive(Parser)]
#[command(
    name = "czfilter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve date ranges (presets or free text) and apply them to cost dashboard URLs",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// A preset or a free-form range expression.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Range expression, e.g. "last 45 days" or "01/15/2025 to 02/28/2025"
    #[arg(value_name = "RANGE")]
    pub expr: Option<String>,

    /// Named preset: last-7-days, last-14-days, last-28-days, last-30-days, last-90-days
    #[arg(long, short = 'p', conflicts_with = "expr")]
    pub preset: Option<PresetName>,
}

impl SelectionArgs {
    pub fn selection(&self) -> AppResult<Option<Selection>> {
        match (&self.expr, self.preset) {
            (Some(expr), _) => Ok(Some(Selection::Custom(expr.clone()))),
            (None, Some(PresetName::Custom)) => Err(RangeError::EmptyInput.into()),
            (None, Some(preset)) => Ok(Some(Selection::Preset(preset))),
            (None, None) => Ok(None),
        }
    }
}

/// Cost-reporting overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Cost type, e.g. real_cost, billed_cost, amortized_cost
    #[arg(long = "cost-type")]
    pub cost_type: Option<CostType>,

    /// daily, weekly or monthly
    #[arg(long)]
    pub granularity: Option<Granularity>,

    /// Group-by dimension, e.g. service, region, account
    #[arg(long = "group-by")]
    pub group_by: Option<String>,
}

impl ParamArgs {
    pub fn to_params(&self) -> AppResult<AdvancedParams> {
        let group_by = match &self.group_by {
            Some(raw) => GroupBy::parse_optional(raw)?,
            None => None,
        };
        Ok(AdvancedParams {
            cost_type: self.cost_type,
            granularity: self.granularity,
            group_by,
            filters: None,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Resolve a preset or range expression and print the dates
    Range {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Patch a dashboard URL with a date range
    Apply {
        #[arg(long, value_name = "URL", help = "URL of the open dashboard page")]
        url: String,

        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(
            long,
            value_name = "NAME|INDEX",
            conflicts_with_all = ["expr", "preset"],
            help = "Use a saved filter"
        )]
        filter: Option<String>,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Save a filter for later use
    Save {
        #[arg(long, short = 'n', help = "Filter name")]
        name: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// List saved filters
    List,

    /// Delete a saved filter by name or index
    Del {
        #[arg(value_name = "NAME|INDEX")]
        key: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change user settings
    Settings {
        #[arg(long = "print", help = "Print current settings")]
        print: bool,

        #[arg(long = "set", value_name = "KEY=VALUE", help = "Change a setting")]
        set: Vec<String>,

        #[arg(long = "reset", help = "Restore default settings")]
        reset: bool,
    },

    /// Export saved filters and settings to a JSON file
    Export {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import saved filters and settings from a JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Remove all saved filters and settings
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_preset_and_expression() {
        let cli = Cli::try_parse_from(["czfilter", "range", "--preset", "Last 7 Days"]).unwrap();
        match cli.command {
            Commands::Range { selection } => assert_eq!(
                selection.selection().unwrap(),
                Some(Selection::Preset(PresetName::Last7Days))
            ),
            _ => panic!("wrong command"),
        }

        let cli = Cli::try_parse_from(["czfilter", "range", "last 45 days"]).unwrap();
        match cli.command {
            Commands::Range { selection } => assert_eq!(
                selection.selection().unwrap(),
                Some(Selection::Custom("last 45 days".into()))
            ),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn preset_and_expression_conflict() {
        assert!(
            Cli::try_parse_from(["czfilter", "range", "last 5 days", "-p", "last-7-days"]).is_err()
        );
    }

    #[test]
    fn unknown_preset_is_a_usage_error() {
        assert!(Cli::try_parse_from(["czfilter", "range", "-p", "last-8-days"]).is_err());
    }

    #[test]
    fn custom_preset_needs_an_expression() {
        let args = SelectionArgs {
            expr: None,
            preset: Some(PresetName::Custom),
        };
        assert!(args.selection().is_err());
    }

    #[test]
    fn param_args_convert() {
        let args = ParamArgs {
            cost_type: Some(CostType::BilledCost),
            granularity: None,
            group_by: Some("none".into()),
        };
        let p = args.to_params().unwrap();
        assert_eq!(p.cost_type, Some(CostType::BilledCost));
        assert_eq!(p.group_by, None);
        let bad = ParamArgs {
            group_by: Some("colour".into()),
            ..Default::default()
        };
        assert!(bad.to_params().is_err());
    }
}
