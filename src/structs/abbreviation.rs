use serde::Deserialize;

/// Parameters for the `uploadAbbreviations` operation. `abbreviation_file`
/// is a path sent to the server as a field value, never read from local disk.
#[derive(Debug, Clone, Default)]
pub struct UploadAbbreviationsInput {
    pub abbreviation_file: String,
    pub language: String,
}

/// Details about one stored abbreviation file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Abbreviation {
    pub url: String,
    pub language: String,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    pub size: String,
}

/// Response from `uploadAbbreviations`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadAbbreviationsResponse {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultDescription")]
    pub result_description: String,
}

/// Response from `listAbbreviations`. Entries are nested as
/// `abbreviationFile` elements inside an `abbreviationList` wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAbbreviationsResponse {
    #[serde(rename = "abbreviationList")]
    pub abbreviation_list: AbbreviationList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbbreviationList {
    #[serde(rename = "abbreviationFile")]
    pub abbreviations: Vec<Abbreviation>,
}
