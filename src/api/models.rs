use serde::{Deserialize, Serialize};

/// One row of the customer-onboarding dashboard table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub full_name: String,
    pub iqama_id: String,
    pub mobile_number: String,
    pub dep_reference_number: String,
    pub created_at: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<String>,
}

/// Full onboarded-customer record as served by the customer store.
///
/// The KYC block is sparsely populated for most customers, hence the
/// optional fields with serde defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    // Identity
    pub iqama_id: String,
    pub full_name: String,
    #[serde(default)]
    pub arabic_name: Option<String>,
    pub mobile_number: String,
    #[serde(default)]
    pub additional_mobile_number: Option<String>,
    pub dep_reference_number: String,
    pub status: String,
    pub created_at: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_birth_hijri: Option<String>,
    pub expiry_date: String,
    #[serde(default)]
    pub expiry_date_hijri: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    pub gender: String,
    pub nationality: String,

    // Address
    pub building_number: String,
    pub street: String,
    pub neighbourhood: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,

    // Device
    pub device_id: String,
    pub device_type: String,
    pub location: String,

    // KYC
    #[serde(default)]
    pub account_purpose: Option<String>,
    #[serde(default)]
    pub estimated_withdrawal: Option<serde_json::Value>,
    #[serde(default)]
    pub pep_flag: Option<String>,
    #[serde(default)]
    pub disability_flag: Option<String>,
    #[serde(default)]
    pub tax_residency_outside_ksa: Option<String>,
    #[serde(default)]
    pub source_of_income: Option<String>,
    #[serde(default)]
    pub employment_sector: Option<String>,
    #[serde(default)]
    pub employer_industry: Option<String>,
    #[serde(default)]
    pub business_industry: Option<String>,
    #[serde(default)]
    pub salary_income: Option<serde_json::Value>,
    #[serde(default)]
    pub business_income: Option<serde_json::Value>,
    #[serde(default)]
    pub investment_income: Option<serde_json::Value>,
    #[serde(default)]
    pub rental_income: Option<serde_json::Value>,
    #[serde(default)]
    pub housewife_allowance: Option<serde_json::Value>,
    #[serde(default)]
    pub student_allowance: Option<serde_json::Value>,
    #[serde(default)]
    pub pension_income: Option<serde_json::Value>,
    #[serde(default)]
    pub other_income: Option<serde_json::Value>,
}
