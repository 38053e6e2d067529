use serde::{Deserialize, Serialize};

/// A confirmed booking. Worker fields are a snapshot taken at confirmation
/// time, so the record stays stable even if the catalog changes afterwards.
/// `total` is computed once at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub worker_id: String,
    pub worker_name: String,
    pub skill: String,
    pub rate: f64,
    pub hours: f64,
    pub date: String,
    pub total: f64,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDetails {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

/// What the booking form submits: everything except the worker, which comes
/// from the current selection.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub hours: f64,
    pub date: String,
    pub customer: CustomerDetails,
}
