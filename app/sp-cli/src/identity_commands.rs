use clap::Subcommand;

#[derive(Subcommand)]
pub enum IdentityCommands {
    /// Use an identity without signing in (ignored while signed in)
    Set {
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove the manual identity
    Clear,
}
