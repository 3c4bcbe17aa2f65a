use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Fetch the catalogs into the active identity's cache
    Sync,

    /// Show cached catalog items
    List {
        /// Only one catalog (all when omitted)
        #[arg(long, value_enum)]
        kind: Option<CatalogKind>,

        /// Include hidden benefits
        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Benefits,
    Offers,
    Medicines,
}
