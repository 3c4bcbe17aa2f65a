use crate::{
    catalog_commands::CatalogCommands, hidden_commands::HiddenCommands,
    identity_commands::IdentityCommands, login_commands::LoginCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the active identity, resolver state and cached catalog counts
    Status,

    /// Sign in with a one-time code
    Login {
        #[command(subcommand)]
        method: LoginCommands,
    },

    /// Manual (device-local) identity
    Identity {
        #[command(subcommand)]
        action: IdentityCommands,
    },

    /// Profile of the active identity
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Benefit, offer and medicine catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },

    /// Benefits hidden by the user
    Hidden {
        #[command(subcommand)]
        action: HiddenCommands,
    },

    /// Sign out and forget the active identity on this device
    Logout,

    /// Delete the remote profile and the cached data of the active identity
    DeleteAccount {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
