/// A voice a speech backend can use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Backend-specific identifier (passed to the synthesizer)
    pub id: String,
    pub name: String,
    /// BCP-47 language tag, e.g. `en-US`
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Static description of a built-in voice
#[derive(Debug, Clone, Copy)]
pub struct VoiceConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub lang: &'static str,
}

impl VoiceConfig {
    pub const fn new(id: &'static str, name: &'static str, lang: &'static str) -> Self {
        Self { id, name, lang }
    }
}

/// Voices shipped with espeak-ng that the presets care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    AmericanEnglish,
    BritishEnglish,
    Korean,
    Mandarin,
    Cantonese,
    Japanese,
    French,
    German,
    Spanish,
    Italian,
    BrazilianPortuguese,
    Russian,
    Hindi,
}

impl Voice {
    pub const fn config(&self) -> VoiceConfig {
        match self {
            Voice::AmericanEnglish => VoiceConfig::new("en-us", "English (America)", "en-US"),
            Voice::BritishEnglish => VoiceConfig::new("en-gb", "English (Great Britain)", "en-GB"),
            Voice::Korean => VoiceConfig::new("ko", "Korean", "ko-KR"),
            Voice::Mandarin => VoiceConfig::new("cmn", "Chinese (Mandarin)", "zh-CN"),
            Voice::Cantonese => VoiceConfig::new("yue", "Chinese (Cantonese)", "zh-HK"),
            Voice::Japanese => VoiceConfig::new("ja", "Japanese", "ja-JP"),
            Voice::French => VoiceConfig::new("fr-fr", "French (France)", "fr-FR"),
            Voice::German => VoiceConfig::new("de", "German", "de-DE"),
            Voice::Spanish => VoiceConfig::new("es", "Spanish (Spain)", "es-ES"),
            Voice::Italian => VoiceConfig::new("it", "Italian", "it-IT"),
            Voice::BrazilianPortuguese => VoiceConfig::new("pt-br", "Portuguese (Brazil)", "pt-BR"),
            Voice::Russian => VoiceConfig::new("ru", "Russian", "ru-RU"),
            Voice::Hindi => VoiceConfig::new("hi", "Hindi", "hi-IN"),
        }
    }

    pub const fn all() -> [Voice; 13] {
        [
            Voice::AmericanEnglish,
            Voice::BritishEnglish,
            Voice::Korean,
            Voice::Mandarin,
            Voice::Cantonese,
            Voice::Japanese,
            Voice::French,
            Voice::German,
            Voice::Spanish,
            Voice::Italian,
            Voice::BrazilianPortuguese,
            Voice::Russian,
            Voice::Hindi,
        ]
    }

    pub fn info(&self) -> VoiceInfo {
        let config = self.config();
        VoiceInfo::new(config.id, config.name, config.lang)
    }

    pub fn catalog() -> Vec<VoiceInfo> {
        Self::all().iter().map(Voice::info).collect()
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(&['-', '_'][..]).next().unwrap_or(tag)
}

/// Pick the voice for `preferred_lang`.
///
/// Exact tag match first, then any voice sharing the primary language
/// subtag (`ko` for `ko-KR`), then whatever voice comes first.
pub fn select_voice<'a>(voices: &'a [VoiceInfo], preferred_lang: &str) -> Option<&'a VoiceInfo> {
    let wanted = preferred_lang.replace('_', "-");

    voices
        .iter()
        .find(|v| v.lang.eq_ignore_ascii_case(&wanted))
        .or_else(|| {
            let language = primary_subtag(&wanted);
            voices
                .iter()
                .find(|v| primary_subtag(&v.lang).eq_ignore_ascii_case(language))
        })
        .or_else(|| voices.first())
}
