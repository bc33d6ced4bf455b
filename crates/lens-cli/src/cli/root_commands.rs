use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the analysis report for a session document.
    Report(ReportArgs),
    /// Check a session document without building a report.
    Validate(ValidateArgs),
    /// Print a registered JSON Schema.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Session document to read (defaults to `general.default_dataset`)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Session document to check
    pub file: String,
}

/// Schemas exposed on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SchemaName {
    #[default]
    SessionData,
    Report,
}

impl SchemaName {
    #[must_use]
    pub const fn registry_name(self) -> &'static str {
        match self {
            Self::SessionData => lens_schema::SESSION_DATA,
            Self::Report => lens_schema::REPORT,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which schema to print
    #[arg(value_enum, default_value_t = SchemaName::SessionData)]
    pub name: SchemaName,
}
