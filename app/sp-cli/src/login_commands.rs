use clap::Subcommand;

#[derive(Subcommand)]
pub enum LoginCommands {
    /// Receive a code by SMS
    Phone {
        /// Phone number, e.g. +79991234567 or 8 999 123-45-67
        phone: String,

        /// Code to verify with (prompted for when omitted)
        #[arg(long)]
        code: Option<String>,
    },

    /// Receive a code by e-mail
    Email {
        email: String,

        /// Code to verify with (prompted for when omitted)
        #[arg(long)]
        code: Option<String>,
    },
}
