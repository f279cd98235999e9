use serde::{Deserialize, Serialize};

/// Raw registry-lookup record as returned by the suggestion API.
///
/// The shape mirrors the upstream payload, so every block is optional and
/// nested. The secondary engine reads it defensively field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub name: Option<RegistryName>,
    pub inn: Option<String>,
    pub ogrn: Option<String>,
    pub state: Option<RegistryState>,
    pub capital: Option<RegistryCapital>,
    /// Primary industry classifier code.
    pub okved: Option<String>,
    pub management: Option<RegistryManagement>,
    pub address: Option<RegistryAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryName {
    pub short_with_opf: Option<String>,
    pub full: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryState {
    pub status: Option<String>,
    pub registration_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryCapital {
    /// Amount is delivered as a string by the upstream API.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryManagement {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryAddress {
    pub value: Option<String>,
    pub data: Option<RegistryAddressData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryAddressData {
    /// Geo-quality code; "4" and "5" flag mass-registration addresses.
    pub qc_geo: Option<String>,
}
