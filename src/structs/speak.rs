use serde::Deserialize;

/// Parameters for the `speakSimple` operation.
#[derive(Debug, Clone, Default)]
pub struct SpeakSimpleInput {
    pub voice: String,
    pub text: String,
}

/// Parameters for the `speakExtended` operation.
#[derive(Debug, Clone, Default)]
pub struct SpeakExtendedInput {
    pub voice: String,
    pub text: String,
    pub audio_format: String,
    pub sample_rate: String,
    pub audio_3d: bool,
    pub metadata: bool,
}

/// Response from `speakSimple`.
///
/// `char_count` and `result_code` are kept as strings; the provider does not
/// guarantee a numeric format for them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpeakSimpleResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "charCount")]
    pub char_count: String,
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultDescription")]
    pub result_description: String,
}

/// Response from `speakExtended`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpeakExtendedResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "charCount")]
    pub char_count: String,
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultDescription")]
    pub result_description: String,
    #[serde(rename = "metadataUrl")]
    pub metadata_url: String,
}
