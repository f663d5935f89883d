//! Client profile loaded from an address document.

use serde::{Deserialize, Serialize};

/// A client with its addresses, delivery days and shop settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Unique client identifier (`AdrNr`).
    pub client_number: String,
    pub search_term: String,
    pub status: String,
    pub tax_number: String,
    pub vat_id: String,
    pub is_blocked: bool,
    pub price_group: String,
    pub billing_address: Address,
    pub delivery_address: Address,
    pub delivery_schedule: DeliverySchedule,
    pub settings: ClientSettings,
    /// Extra addresses in document order.
    pub additional_addresses: Vec<AdditionalAddress>,
}

/// Postal and contact data. Billing and delivery addresses share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub salutation: String,
    pub name: String,
    pub name3: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
}

/// Delivery day flags, kept as the raw export text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliverySchedule {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
}

/// Web shop settings of a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub webshop_enabled: bool,
    pub ds_addresses: bool,
    pub no_pickup_app: bool,
    pub minimum_order_value: Option<f64>,
    pub articles_not_in_history: String,
}

/// An entry of the client's additional address list.
///
/// The two default flags are independent; an address may be both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalAddress {
    pub address_number: String,
    #[serde(flatten)]
    pub address: Address,
    pub is_default_billing: bool,
    pub is_default_delivery: bool,
}
