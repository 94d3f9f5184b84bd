pub mod error;
pub mod ideas;
pub mod ids;
pub mod responses;

use serde::{Deserialize, Serialize};

/// Envelope every API payload is wrapped in.
#[derive(Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}
