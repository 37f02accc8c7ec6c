use serde::{Deserialize, Serialize};

/// Demo bank account shown on the wallets screen. There is no backing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub reference_name: String,
    pub account_number: String,
    pub account_name: String,
    pub product_name: String,
    pub kyc_compliant: bool,
}

#[must_use]
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            account_id: "123456789".into(),
            reference_name: "Main Savings".into(),
            account_number: "000123456789".into(),
            account_name: "John Doe".into(),
            product_name: "Savings Account".into(),
            kyc_compliant: true,
        },
        Account {
            account_id: "987654321".into(),
            reference_name: "Business Account".into(),
            account_number: "000987654321".into(),
            account_name: "John Doe Enterprises".into(),
            product_name: "Business Current Account".into(),
            kyc_compliant: false,
        },
    ]
}
