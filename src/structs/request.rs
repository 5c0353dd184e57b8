use quick_xml::se::Serializer;
use quick_xml::SeError;
use serde::Serialize;

/// XML declaration prepended to every request body.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Request envelope for the CereVoice Cloud API.
///
/// The serialized document's root element carries the operation name and the
/// children are `accountID`, `password` and whichever operation-specific
/// fields are set. Empty strings and `false` flags are omitted, matching the
/// provider's `omitempty` wire contract.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Envelope {
    #[serde(rename = "accountID")]
    pub account_id: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub voice: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(rename = "audioFormat", skip_serializing_if = "String::is_empty")]
    pub audio_format: String,
    #[serde(rename = "sampleRate", skip_serializing_if = "String::is_empty")]
    pub sample_rate: String,
    #[serde(rename = "audio3D", skip_serializing_if = "is_false")]
    pub audio_3d: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub metadata: bool,
    #[serde(rename = "lexiconFile", skip_serializing_if = "String::is_empty")]
    pub lexicon_file: String,
    #[serde(rename = "abbreviationFile", skip_serializing_if = "String::is_empty")]
    pub abbreviation_file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub accent: String,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl Envelope {
    /// Serialize the envelope with `operation` as the root element name.
    pub fn to_xml(&self, operation: &str) -> Result<String, SeError> {
        let mut body = String::from(XML_DECLARATION);
        let serializer = Serializer::with_root(&mut body, Some(operation))?;
        self.serialize(serializer)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_envelope() -> Envelope {
        Envelope {
            account_id: "acct".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_root_element_matches_operation() {
        let xml = base_envelope().to_xml("listVoices").unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<listVoices>"));
        assert!(xml.ends_with("</listVoices>"));
    }

    #[test]
    fn test_credentials_always_present() {
        let xml = base_envelope().to_xml("getCredit").unwrap();
        assert!(xml.contains("<accountID>acct</accountID>"));
        assert!(xml.contains("<password>pw</password>"));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let xml = base_envelope().to_xml("speakSimple").unwrap();
        assert!(!xml.contains("<voice"));
        assert!(!xml.contains("<text"));
        assert!(!xml.contains("<accent"));
        assert!(!xml.contains("<audio3D"));
        assert!(!xml.contains("<metadata"));
    }

    #[test]
    fn test_set_fields_are_emitted() {
        let envelope = Envelope {
            voice: "Jess".to_string(),
            text: "Hello world!".to_string(),
            audio_format: "wav".to_string(),
            sample_rate: "48000".to_string(),
            audio_3d: true,
            metadata: true,
            lexicon_file: "lex.xml".to_string(),
            abbreviation_file: "abbr.xml".to_string(),
            language: "en".to_string(),
            ..base_envelope()
        };
        let xml = envelope.to_xml("speakExtended").unwrap();
        assert!(xml.contains("<voice>Jess</voice>"));
        assert!(xml.contains("<text>Hello world!</text>"));
        assert!(xml.contains("<audioFormat>wav</audioFormat>"));
        assert!(xml.contains("<sampleRate>48000</sampleRate>"));
        assert!(xml.contains("<audio3D>true</audio3D>"));
        assert!(xml.contains("<metadata>true</metadata>"));
        assert!(xml.contains("<lexiconFile>lex.xml</lexiconFile>"));
        assert!(xml.contains("<abbreviationFile>abbr.xml</abbreviationFile>"));
        assert!(xml.contains("<language>en</language>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let envelope = Envelope {
            text: "a < b & c".to_string(),
            ..base_envelope()
        };
        let xml = envelope.to_xml("speakSimple").unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));
    }
}
