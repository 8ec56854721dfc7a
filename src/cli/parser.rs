use crate::export::{ExportFormat, ExportTarget};
use crate::models::GoalMetric;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Controlarva
#[derive(Parser)]
#[command(
    name = "controlarva",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sales manager CLI: customers, sales, after-sales follow-up, visits and goals in a local store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, stored keys)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "clear-key",
            value_name = "KEY",
            help = "Remove one stored document (e.g. a corrupted 'sales' value)"
        )]
        clear_key: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the backup as a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Open a session
    Login,

    /// Close the session
    Logout,

    /// Show session and settings summary
    Status,

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage sales
    Sale {
        #[command(subcommand)]
        action: SaleAction,
    },

    /// After-sales follow-up queue
    #[command(name = "aftersales")]
    AfterSales {
        #[command(subcommand)]
        action: AfterSalesAction,
    },

    /// Manage visits
    Visit {
        #[command(subcommand)]
        action: VisitAction,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Show the dashboard summary
    Dashboard,

    /// Revenue by month and top customers
    Report,

    /// Export customers, sales or visits
    Export {
        #[arg(value_enum)]
        target: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// View or change user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Interactive session with tab navigation
    Shell,
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Add a customer
    Add {
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Use this id instead of a generated one")]
        id: Option<String>,
    },

    /// List customers
    List {
        #[arg(long, short, help = "Filter by name, phone, email or city")]
        search: Option<String>,

        #[arg(long, help = "Print customer notes below the table")]
        notes: bool,
    },

    /// Update fields of a customer (an empty value clears optional fields)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a customer (sales and visits are kept)
    Del {
        id: String,

        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SaleAction {
    /// Record a sale
    Add {
        #[arg(long)]
        customer: String,

        #[arg(long, help = "Sale date (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(
            long = "item",
            value_name = "DESC:QTY:PRICE",
            help = "Sale item; repeat for several items"
        )]
        items: Vec<String>,

        #[arg(long, help = "Single-line sale amount (alternative to --item)")]
        amount: Option<String>,

        #[arg(long, default_value = "Venda")]
        description: String,

        #[arg(long, value_name = "SALE_ID", help = "Prior sale this one supersedes")]
        replace: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        id: Option<String>,
    },

    /// List sales
    List {
        #[arg(long)]
        customer: Option<String>,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        period: Option<String>,
    },

    /// Show the items of a sale
    Show { id: String },

    /// Delete a sale
    Del {
        id: String,

        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum AfterSalesAction {
    /// List sales due for a follow-up contact
    List,

    /// Record a follow-up contact for a sale
    Contact {
        sale_id: String,

        #[arg(long, help = "Contact date (YYYY-MM-DD or 'today')")]
        date: Option<String>,
    },

    /// Start a new sale for the same customer, superseding this one
    Renew {
        sale_id: String,

        #[arg(long, help = "Sale date (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(long = "item", value_name = "DESC:QTY:PRICE")]
        items: Vec<String>,

        #[arg(long)]
        amount: Option<String>,

        #[arg(long, default_value = "Venda")]
        description: String,
    },
}

#[derive(Subcommand)]
pub enum VisitAction {
    /// Schedule or log a visit
    Add {
        contact: String,

        #[arg(long, help = "Visit date (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(long, help = "Visit time (HH:MM)")]
        time: Option<String>,

        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Log the visit as already done")]
        done: bool,

        #[arg(long)]
        id: Option<String>,
    },

    /// List visits (upcoming scheduled ones unless --all)
    List {
        #[arg(long)]
        all: bool,
    },

    /// Mark a visit as done
    Done { id: String },

    /// Mark a visit as cancelled
    Cancel { id: String },

    /// Delete a visit
    Del { id: String },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a goal
    Add {
        title: String,

        #[arg(long, value_enum)]
        metric: GoalMetric,

        #[arg(long)]
        target: String,

        #[arg(long, help = "Month the goal applies to (YYYY-MM); all time if omitted")]
        month: Option<String>,

        #[arg(long)]
        id: Option<String>,
    },

    /// List goals with their progress
    List,

    /// Delete a goal
    Del { id: String },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,

    /// Change settings
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "Days after a sale before a follow-up is due")]
        interval: Option<u32>,

        #[arg(long, help = "light or dark")]
        theme: Option<String>,
    },

    /// Switch between light and dark theme
    Theme,
}
