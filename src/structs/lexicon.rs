use serde::Deserialize;

/// Parameters for the `uploadLexicon` operation. `lexicon_file` is a path
/// sent to the server as a field value, never read from local disk.
#[derive(Debug, Clone, Default)]
pub struct UploadLexiconInput {
    pub lexicon_file: String,
    pub language: String,
    pub accent: String,
}

/// Details about one stored lexicon file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Lexicon {
    pub url: String,
    pub language: String,
    pub accent: String,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
    pub size: String,
}

/// Response from `uploadLexicon`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadLexiconResponse {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultDescription")]
    pub result_description: String,
}

/// Response from `listLexicons`. Entries are nested as `lexiconFile`
/// elements inside a `lexiconList` wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListLexiconsResponse {
    #[serde(rename = "lexiconList")]
    pub lexicon_list: LexiconList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexiconList {
    #[serde(rename = "lexiconFile")]
    pub lexicons: Vec<Lexicon>,
}
