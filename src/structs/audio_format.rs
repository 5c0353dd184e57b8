use serde::Deserialize;

/// Response from `listAudioFormats`. Format names are nested as `format`
/// elements inside a `formatList` wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAudioFormatsResponse {
    #[serde(rename = "formatList")]
    pub format_list: FormatList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormatList {
    #[serde(rename = "format")]
    pub formats: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_format_list() {
        let xml = "<listAudioFormats><formatList>\
            <format>wav</format>\
            <format>ogg</format>\
            <format>mp3</format>\
            </formatList></listAudioFormats>";
        let response: ListAudioFormatsResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.format_list.formats, vec!["wav", "ogg", "mp3"]);
    }
}
