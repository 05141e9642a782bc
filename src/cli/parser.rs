use crate::export::ExportFormat;
use crate::models::report_type::ReportType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to schedule shifts and produce timesheet reports
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule shifts from templates and generate payroll timesheet reports",
    long_about = None
)]
pub struct Cli {
    /// Override event store path (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the event store
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add an event manually
    Add {
        /// Event title; its letters select the report category (n, u, p, d, t, w)
        title: String,

        #[arg(long = "start", help = "Start (YYYY-MM-DDTHH:MM)")]
        start: String,

        #[arg(long = "end", help = "End (YYYY-MM-DDTHH:MM); defaults to the start")]
        end: Option<String>,

        #[arg(long = "color", help = "Display color, e.g. #4F46E5")]
        color: Option<String>,
    },

    /// Delete an event by id
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List events
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day (YYYY, YYYY-MM, YYYY-MM-DD); default: current month"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's events")]
        now: bool,
    },

    /// Manage event templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Print a report to the terminal
    Report {
        #[arg(value_enum)]
        kind: ReportType,

        #[arg(long = "from", help = "First day of the report (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", help = "Last day of the report (YYYY-MM-DD), taken at 00:00")]
        to: String,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,

        #[arg(long = "plain", help = "Disable colors")]
        plain: bool,
    },

    /// Export a report to a file
    Export {
        #[arg(value_enum)]
        kind: ReportType,

        #[arg(long = "from", help = "First day of the report (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", help = "Last day of the report (YYYY-MM-DD), taken at 00:00")]
        to: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Create a template
    Add {
        title: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM); earlier than start means next day")]
        end: String,

        #[arg(long = "color", help = "Display color, e.g. #4F46E5")]
        color: Option<String>,
    },

    /// List templates with their quick-add keys
    List,

    /// Delete a template by id
    Del { id: String },

    /// Place an event from a template on a day
    Apply {
        /// Template id, 1-based position or first letter of its title
        key: String,

        /// Day of the event (YYYY-MM-DD)
        date: String,
    },
}
