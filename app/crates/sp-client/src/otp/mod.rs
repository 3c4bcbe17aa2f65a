mod otp_client;

pub use otp_client::{OtpClient, OtpQrBlock, OtpRequestResponse, OtpVerifyResponse};
