//! Clap derive structures for the `storekeep` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// storekeep -- retail-management dashboard from the command line
#[derive(Debug, Parser)]
#[command(
    name = "storekeep",
    version,
    about = "Manage products, customers, employees, and suppliers from the command line",
    long_about = "A CLI for the storekeep retail-management API.\n\n\
        Sign in once with `storekeep login`; the session token is stored\n\
        locally and attached to every subsequent request.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "STOREKEEP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "STOREKEEP_SERVER", global = true)]
    pub server: Option<String>,

    /// Bearer token (overrides stored session)
    #[arg(long, env = "STOREKEEP_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STOREKEEP_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "STOREKEEP_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login(LoginArgs),

    /// Drop the stored session
    Logout,

    /// Manage products and their variants
    #[command(alias = "prod", alias = "p")]
    Products(ProductsArgs),

    /// Manage product categories
    #[command(alias = "cat")]
    Categories(CategoriesArgs),

    /// Manage customers
    #[command(alias = "cust", alias = "c")]
    Customers(CustomersArgs),

    /// Manage employees
    #[command(alias = "emp", alias = "e")]
    Employees(EmployeesArgs),

    /// Manage suppliers
    #[command(alias = "sup")]
    Suppliers(SuppliersArgs),

    /// Metrics overview, sales targets, and activity feed
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared pagination arguments for all list commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Max results per page
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: u32,
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

// ── Products ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    #[command(alias = "ls")]
    List(ProductListArgs),

    /// Show one product
    Get {
        /// Product id
        id: String,
    },

    /// Create a product
    Create(ProductCreateArgs),

    /// Update a product
    Update(ProductUpdateArgs),

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,
    },

    /// List a product's variants (fetched lazily, cached per product)
    Variants {
        /// Parent product id
        id: String,
    },

    /// Add a variant to a product
    AddVariant(VariantAddArgs),
}

#[derive(Debug, Args)]
pub struct ProductListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Substring match on name/SKU (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by category id
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by status (active, inactive, archived)
    #[arg(long)]
    pub status: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum price
    #[arg(long)]
    pub price_max: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ProductCreateArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,

    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Initial stock count
    #[arg(long)]
    pub stock: Option<i64>,

    /// Category id
    #[arg(long)]
    pub category: Option<String>,

    /// Status (active, inactive, archived)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProductUpdateArgs {
    /// Product id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub stock: Option<i64>,

    /// Category id
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct VariantAddArgs {
    /// Parent product id
    pub id: String,

    #[arg(long)]
    pub size: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    /// Stock count for this variant
    #[arg(long, default_value = "0")]
    pub stock: i64,

    #[arg(long)]
    pub sku: Option<String>,
}

// ── Categories ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    #[command(alias = "ls")]
    List,

    /// Create a category
    Create {
        /// Category name
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },
}

// ── Customers ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Substring match on name/email (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a customer
    Create(CustomerCreateArgs),
}

#[derive(Debug, Args)]
pub struct CustomerCreateArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

// ── Employees ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EmployeesArgs {
    #[command(subcommand)]
    pub command: EmployeesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List employees
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Substring match on name/position (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Filter by status locally (active, on_leave, terminated)
        #[arg(long)]
        status: Option<String>,
    },

    /// Create an employee
    Create(EmployeeCreateArgs),

    /// Update an employee
    Update(EmployeeUpdateArgs),

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        /// Employee id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct EmployeeCreateArgs {
    /// Employee name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Status (active, on_leave, terminated)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct EmployeeUpdateArgs {
    /// Employee id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub status: Option<String>,
}

// ── Suppliers ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SuppliersArgs {
    #[command(subcommand)]
    pub command: SuppliersCommand,
}

#[derive(Debug, Subcommand)]
pub enum SuppliersCommand {
    /// List suppliers
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one supplier
    Get {
        /// Supplier id
        id: String,
    },

    /// Create a supplier
    Create(SupplierCreateArgs),
}

#[derive(Debug, Args)]
pub struct SupplierCreateArgs {
    /// Supplier name
    #[arg(long)]
    pub name: String,

    /// Contact person
    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

// ── Dashboard ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Aggregate store metrics
    Overview,

    /// Sales targets for a reporting period
    Targets {
        /// Reporting window (week, month, year)
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// Recent activity feed
    Activity {
        /// Max entries
        #[arg(long, short = 'l', default_value = "20")]
        limit: u32,

        /// Filter by activity kind (sale, restock, ...)
        #[arg(long)]
        kind: Option<String>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Server base URL
        #[arg(long)]
        server: String,
    },

    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
