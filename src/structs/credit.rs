use serde::Deserialize;

/// Account credit details. Figures are provider-formatted strings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Credit {
    #[serde(rename = "freeCredit")]
    pub free_credit: String,
    #[serde(rename = "paidCredit")]
    pub paid_credit: String,
    #[serde(rename = "charsAvailable")]
    pub chars_available: String,
}

/// Response from `getCredit`, wrapping a single `credit` element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetCreditResponse {
    pub credit: Credit,
}
