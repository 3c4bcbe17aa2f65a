use crate::error::Result as AppErrorResult;

use sp_core::{Category, ProfileUpdate, Role};

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the loaded profile
    Show,

    /// Reload the profile from the remote store (retry after an error)
    Refresh,

    /// Change profile fields
    Update {
        #[command(flatten)]
        changes: ProfileUpdateArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Region code, or "all"
    #[arg(long)]
    pub region: Option<String>,

    /// pensioner, disabled, veteran, large-family, low-income, child or russia
    #[arg(long)]
    pub category: Option<String>,

    /// Insurance account number (SNILS), 11 digits
    #[arg(long = "snils")]
    pub document_number: Option<String>,

    /// self or relative
    #[arg(long)]
    pub role: Option<String>,

    /// Repeat for several interests; replaces the current list
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    #[arg(long)]
    pub simple_mode: Option<bool>,
}

impl ProfileUpdateArgs {
    /// Parse category and role codes; backend codes such as `woman_55_plus`
    /// are accepted for the category.
    pub fn into_update(self) -> AppErrorResult<ProfileUpdate> {
        let category = match self.category {
            Some(code) => Some(match Category::normalize(&code) {
                Some(category) => category,
                None => code.parse::<Category>()?,
            }),
            None => None,
        };
        let role = self.role.map(|role| role.parse::<Role>()).transpose()?;

        Ok(ProfileUpdate {
            full_name: self.name,
            email: self.email,
            phone: self.phone,
            region: self.region,
            category,
            document_number: self.document_number,
            role,
            interests: (!self.interests.is_empty()).then_some(self.interests),
            simple_mode_enabled: self.simple_mode,
        })
    }
}
