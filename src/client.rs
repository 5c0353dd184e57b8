use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::Result;
use crate::structs::abbreviation::{
    Abbreviation, ListAbbreviationsResponse, UploadAbbreviationsInput, UploadAbbreviationsResponse,
};
use crate::structs::audio_format::ListAudioFormatsResponse;
use crate::structs::credit::{Credit, GetCreditResponse};
use crate::structs::lexicon::{
    Lexicon, ListLexiconsResponse, UploadLexiconInput, UploadLexiconResponse,
};
use crate::structs::request::Envelope;
use crate::structs::speak::{
    SpeakExtendedInput, SpeakExtendedResponse, SpeakSimpleInput, SpeakSimpleResponse,
};
use crate::structs::voice::{ListVoicesResponse, Voice};

/// Client for the CereVoice Cloud REST API.
///
/// Calls are stateless and independent; the client can be cloned and shared
/// across tasks, all clones reusing one HTTP connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Envelope pre-filled with the account credentials.
    fn envelope(&self) -> Envelope {
        Envelope {
            account_id: self.config.account_id.clone(),
            password: self.config.password.clone(),
            ..Default::default()
        }
    }

    /// One request/response cycle: serialize the envelope under the
    /// operation's root tag, POST it as `text/xml`, read the full body and
    /// decode it into `T`.
    #[tracing::instrument(skip(self, envelope))]
    async fn query<T: DeserializeOwned>(&self, operation: &str, envelope: Envelope) -> Result<T> {
        let body = envelope.to_xml(operation)?;
        let response = self
            .http
            .post(&self.config.api_url)
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?;
        debug!(status = %response.status(), "received response");
        let raw = response.text().await?;
        Ok(quick_xml::de::from_str(&raw)?)
    }

    /// Synthesise input text with the selected voice.
    #[tracing::instrument(skip(self))]
    pub async fn speak_simple(&self, input: SpeakSimpleInput) -> Result<SpeakSimpleResponse> {
        let envelope = Envelope {
            voice: input.voice,
            text: input.text,
            ..self.envelope()
        };
        self.query("speakSimple", envelope).await
    }

    /// Synthesise input text with control over format, sample rate, 3D audio
    /// and timing metadata.
    #[tracing::instrument(skip(self))]
    pub async fn speak_extended(&self, input: SpeakExtendedInput) -> Result<SpeakExtendedResponse> {
        let envelope = Envelope {
            voice: input.voice,
            text: input.text,
            audio_format: input.audio_format,
            sample_rate: input.sample_rate,
            audio_3d: input.audio_3d,
            metadata: input.metadata,
            ..self.envelope()
        };
        self.query("speakExtended", envelope).await
    }

    /// List the voices available to the account.
    #[tracing::instrument(skip(self))]
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        let response: ListVoicesResponse = self.query("listVoices", self.envelope()).await?;
        Ok(response.voices_list.voices)
    }

    /// Register a custom lexicon file with the account.
    #[tracing::instrument(skip(self))]
    pub async fn upload_lexicon(&self, input: UploadLexiconInput) -> Result<UploadLexiconResponse> {
        let envelope = Envelope {
            lexicon_file: input.lexicon_file,
            language: input.language,
            accent: input.accent,
            ..self.envelope()
        };
        self.query("uploadLexicon", envelope).await
    }

    /// List the account's stored lexicon files.
    #[tracing::instrument(skip(self))]
    pub async fn list_lexicons(&self) -> Result<Vec<Lexicon>> {
        let response: ListLexiconsResponse = self.query("listLexicons", self.envelope()).await?;
        Ok(response.lexicon_list.lexicons)
    }

    /// Register a custom abbreviations file with the account.
    ///
    /// The service expects the file path under the `lexiconFile` tag for
    /// this operation too, not the envelope's `abbreviationFile` field.
    #[tracing::instrument(skip(self))]
    pub async fn upload_abbreviations(
        &self,
        input: UploadAbbreviationsInput,
    ) -> Result<UploadAbbreviationsResponse> {
        let envelope = Envelope {
            lexicon_file: input.abbreviation_file,
            language: input.language,
            ..self.envelope()
        };
        self.query("uploadAbbreviations", envelope).await
    }

    /// List the account's stored abbreviation files.
    #[tracing::instrument(skip(self))]
    pub async fn list_abbreviations(&self) -> Result<Vec<Abbreviation>> {
        let response: ListAbbreviationsResponse =
            self.query("listAbbreviations", self.envelope()).await?;
        Ok(response.abbreviation_list.abbreviations)
    }

    /// List the audio format names the service can produce.
    #[tracing::instrument(skip(self))]
    pub async fn list_audio_formats(&self) -> Result<Vec<String>> {
        let response: ListAudioFormatsResponse =
            self.query("listAudioFormats", self.envelope()).await?;
        Ok(response.format_list.formats)
    }

    /// Look up the account's remaining synthesis credit.
    #[tracing::instrument(skip(self))]
    pub async fn get_credit(&self) -> Result<Credit> {
        let response: GetCreditResponse = self.query("getCredit", self.envelope()).await?;
        Ok(response.credit)
    }
}
