//! EchoShield claim store client
//!
//! HTTP collaborator for the verification pipeline. It fetches the current
//! claim batch from the claim store and pushes dashboard updates back.
//!
//! # Endpoints
//!
//! - `GET {base_url}/claims`: JSON array of claims
//! - `POST {base_url}/dashboard-update`: JSON dashboard update
//!
//! # Example
//!
//! ```no_run
//! use echoshield_client::BackendClient;
//!
//! # async fn example() -> Result<(), echoshield_client::ClientError> {
//! let client = BackendClient::new("http://localhost:8000")?;
//! let claims = client.fetch_claims().await?;
//! println!("Fetched {} claims", claims.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
pub mod wire;

pub use client::{BackendClient, DEFAULT_TIMEOUT_SECS};
pub use error::ClientError;
