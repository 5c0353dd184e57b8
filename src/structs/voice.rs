use serde::Deserialize;

/// Details about one available voice.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Voice {
    #[serde(rename = "sampleRate")]
    pub sample_rate: String,
    #[serde(rename = "voiceName")]
    pub voice_name: String,
    #[serde(rename = "languageCodeISO")]
    pub language_code_iso: String,
    #[serde(rename = "countryCodeISO")]
    pub country_code_iso: String,
    #[serde(rename = "accentCode")]
    pub accent_code: String,
    pub sex: String,
    #[serde(rename = "languageCodeMicrosoft")]
    pub language_code_microsoft: String,
    pub country: String,
    pub region: String,
    pub accent: String,
}

/// Response from `listVoices`. The provider nests the voices inside a
/// `voicesList` wrapper element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListVoicesResponse {
    #[serde(rename = "voicesList")]
    pub voices_list: VoiceList,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoiceList {
    #[serde(rename = "voice")]
    pub voices: Vec<Voice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_voice_list() {
        let xml = "<listVoices><voicesList>\
            <voice>\
            <sampleRate>48000</sampleRate>\
            <voiceName>Jess</voiceName>\
            <languageCodeISO>en</languageCodeISO>\
            <countryCodeISO>GB</countryCodeISO>\
            <accentCode>rp</accentCode>\
            <sex>female</sex>\
            <languageCodeMicrosoft>en-GB</languageCodeMicrosoft>\
            <country>United Kingdom</country>\
            <region>England</region>\
            <accent>Received Pronunciation</accent>\
            </voice>\
            <voice><voiceName>Stuart</voiceName></voice>\
            </voicesList></listVoices>";
        let response: ListVoicesResponse = quick_xml::de::from_str(xml).unwrap();
        let voices = response.voices_list.voices;
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].voice_name, "Jess");
        assert_eq!(voices[0].language_code_microsoft, "en-GB");
        assert_eq!(voices[1].voice_name, "Stuart");
        assert_eq!(voices[1].accent, "");
    }

    #[test]
    fn test_decode_empty_voice_list() {
        let response: ListVoicesResponse =
            quick_xml::de::from_str("<listVoices></listVoices>").unwrap();
        assert!(response.voices_list.voices.is_empty());
    }
}
