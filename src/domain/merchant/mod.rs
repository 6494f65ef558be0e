//! Merchant domain — business account and location models.

pub mod client;

use serde::{Deserialize, Serialize};

/// A business account, or one of its locations.
///
/// The locations endpoint returns the same shape as the business
/// endpoint, one entry per location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub country_code: String,
    pub language_code: String,
    pub account_type: String,
    #[serde(default)]
    pub account_capabilities: Vec<String>,
    pub currency_code: String,
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<GlobalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<PhoneNumber>,
    #[serde(default)]
    pub business_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<GlobalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_details: Option<MerchantLocationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_url: Option<String>,
}

/// A physical address in the general global format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlobalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality_5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_coordinates: Option<Coordinates>,
}

/// A phone number split into calling code and local number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhoneNumber {
    pub calling_code: String,
    pub number: String,
}

/// Location-specific details for a merchant location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MerchantLocationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Geographic coordinates, as decimal strings on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_decodes_with_optional_fields_absent() {
        let merchant: Merchant = serde_json::from_str(
            r#"{
                "id": "JGHJ0343",
                "name": "Jo Doe",
                "country_code": "US",
                "language_code": "en-US",
                "account_type": "LOCATION",
                "currency_code": "USD",
                "business_name": "Jo's Pizzeria"
            }"#,
        )
        .unwrap();
        assert_eq!(merchant.id, "JGHJ0343");
        assert!(merchant.email.is_none());
        assert!(merchant.business_address.is_none());
        assert!(merchant.account_capabilities.is_empty());
    }

    #[test]
    fn merchant_decodes_nested_address() {
        let merchant: Merchant = serde_json::from_str(
            r#"{
                "id": "JGHJ0343",
                "name": "Jo Doe",
                "country_code": "US",
                "language_code": "en-US",
                "account_type": "LOCATION",
                "currency_code": "USD",
                "business_name": "Jo's Pizzeria",
                "business_address": {
                    "address_line_1": "1455 Market St",
                    "locality": "San Francisco",
                    "postal_code": "94103",
                    "address_coordinates": {"latitude": "37.7749", "longitude": "-122.4194"}
                }
            }"#,
        )
        .unwrap();
        let address = merchant.business_address.unwrap();
        assert_eq!(address.address_line_1.as_deref(), Some("1455 Market St"));
        assert_eq!(
            address.address_coordinates.unwrap().latitude.as_deref(),
            Some("37.7749")
        );
    }
}
