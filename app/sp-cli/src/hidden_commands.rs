use clap::Subcommand;

#[derive(Subcommand)]
pub enum HiddenCommands {
    /// Hide a benefit, or show it again if already hidden
    Toggle { benefit_id: String },

    /// List hidden benefit ids
    List,
}
