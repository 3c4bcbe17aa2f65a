//! Clients for the remote collaborators of Support Plus: the auth provider,
//! the profile store, the catalog source and the phone OTP service.

pub mod auth;
pub mod catalog;
pub mod error;
pub(crate) mod http;
pub mod otp;
pub mod profiles;

pub use auth::{AUTH_SESSION_KEY, AuthEvent, AuthProvider, SupabaseAuthClient};
pub use catalog::{CatalogSource, HttpCatalog};
pub use error::{ClientError, Result};
pub use otp::{OtpClient, OtpQrBlock, OtpRequestResponse, OtpVerifyResponse};
pub use profiles::{EnsureProfileRequest, HttpProfileStore, ProfileStore};
