//! Language registry: the ISO 639-1 languages an alias may collide with.
//!
//! This module provides a centralized, read-only table of ISO 639-1
//! languages. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// A language from the ISO 639-1 standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoLanguage {
    /// Two-letter ISO 639-1 code (e.g., "en", "es", "fr")
    pub alpha2: &'static str,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub english: &'static str,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<IsoLanguage>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: iso639_languages(),
        })
    }

    /// Get a language by its two-letter code.
    ///
    /// The lookup ignores case and surrounding whitespace.
    pub fn get_by_code(&self, code: &str) -> Option<&IsoLanguage> {
        let code = code.trim();
        self.languages
            .iter()
            .find(|lang| lang.alpha2.eq_ignore_ascii_case(code))
    }

    /// Check if `code` is a known ISO 639-1 code.
    pub fn is_iso_code(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Get all languages in the registry.
    pub fn list_all(&self) -> &[IsoLanguage] {
        &self.languages
    }
}

macro_rules! iso {
    ($alpha2:literal, $english:literal) => {
        IsoLanguage {
            alpha2: $alpha2,
            english: $english,
        }
    };
}

/// The ISO 639-1 code table.
fn iso639_languages() -> Vec<IsoLanguage> {
    vec![
        iso!("aa", "Afar"),
        iso!("ab", "Abkhazian"),
        iso!("ae", "Avestan"),
        iso!("af", "Afrikaans"),
        iso!("ak", "Akan"),
        iso!("am", "Amharic"),
        iso!("an", "Aragonese"),
        iso!("ar", "Arabic"),
        iso!("as", "Assamese"),
        iso!("av", "Avaric"),
        iso!("ay", "Aymara"),
        iso!("az", "Azerbaijani"),
        iso!("ba", "Bashkir"),
        iso!("be", "Belarusian"),
        iso!("bg", "Bulgarian"),
        iso!("bi", "Bislama"),
        iso!("bm", "Bambara"),
        iso!("bn", "Bengali"),
        iso!("bo", "Tibetan"),
        iso!("br", "Breton"),
        iso!("bs", "Bosnian"),
        iso!("ca", "Catalan"),
        iso!("ce", "Chechen"),
        iso!("ch", "Chamorro"),
        iso!("co", "Corsican"),
        iso!("cr", "Cree"),
        iso!("cs", "Czech"),
        iso!("cu", "Church Slavic"),
        iso!("cv", "Chuvash"),
        iso!("cy", "Welsh"),
        iso!("da", "Danish"),
        iso!("de", "German"),
        iso!("dv", "Dhivehi"),
        iso!("dz", "Dzongkha"),
        iso!("ee", "Ewe"),
        iso!("el", "Greek"),
        iso!("en", "English"),
        iso!("eo", "Esperanto"),
        iso!("es", "Spanish"),
        iso!("et", "Estonian"),
        iso!("eu", "Basque"),
        iso!("fa", "Persian"),
        iso!("ff", "Fulah"),
        iso!("fi", "Finnish"),
        iso!("fj", "Fijian"),
        iso!("fo", "Faroese"),
        iso!("fr", "French"),
        iso!("fy", "Western Frisian"),
        iso!("ga", "Irish"),
        iso!("gd", "Gaelic"),
        iso!("gl", "Galician"),
        iso!("gn", "Guarani"),
        iso!("gu", "Gujarati"),
        iso!("gv", "Manx"),
        iso!("ha", "Hausa"),
        iso!("he", "Hebrew"),
        iso!("hi", "Hindi"),
        iso!("ho", "Hiri Motu"),
        iso!("hr", "Croatian"),
        iso!("ht", "Haitian"),
        iso!("hu", "Hungarian"),
        iso!("hy", "Armenian"),
        iso!("hz", "Herero"),
        iso!("ia", "Interlingua"),
        iso!("id", "Indonesian"),
        iso!("ie", "Interlingue"),
        iso!("ig", "Igbo"),
        iso!("ii", "Sichuan Yi"),
        iso!("ik", "Inupiaq"),
        iso!("io", "Ido"),
        iso!("is", "Icelandic"),
        iso!("it", "Italian"),
        iso!("iu", "Inuktitut"),
        iso!("ja", "Japanese"),
        iso!("jv", "Javanese"),
        iso!("ka", "Georgian"),
        iso!("kg", "Kongo"),
        iso!("ki", "Kikuyu"),
        iso!("kj", "Kuanyama"),
        iso!("kk", "Kazakh"),
        iso!("kl", "Kalaallisut"),
        iso!("km", "Central Khmer"),
        iso!("kn", "Kannada"),
        iso!("ko", "Korean"),
        iso!("kr", "Kanuri"),
        iso!("ks", "Kashmiri"),
        iso!("ku", "Kurdish"),
        iso!("kv", "Komi"),
        iso!("kw", "Cornish"),
        iso!("ky", "Kirghiz"),
        iso!("la", "Latin"),
        iso!("lb", "Luxembourgish"),
        iso!("lg", "Ganda"),
        iso!("li", "Limburgan"),
        iso!("ln", "Lingala"),
        iso!("lo", "Lao"),
        iso!("lt", "Lithuanian"),
        iso!("lu", "Luba-Katanga"),
        iso!("lv", "Latvian"),
        iso!("mg", "Malagasy"),
        iso!("mh", "Marshallese"),
        iso!("mi", "Maori"),
        iso!("mk", "Macedonian"),
        iso!("ml", "Malayalam"),
        iso!("mn", "Mongolian"),
        iso!("mr", "Marathi"),
        iso!("ms", "Malay"),
        iso!("mt", "Maltese"),
        iso!("my", "Burmese"),
        iso!("na", "Nauru"),
        iso!("nb", "Norwegian Bokmål"),
        iso!("nd", "North Ndebele"),
        iso!("ne", "Nepali"),
        iso!("ng", "Ndonga"),
        iso!("nl", "Dutch"),
        iso!("nn", "Norwegian Nynorsk"),
        iso!("no", "Norwegian"),
        iso!("nr", "South Ndebele"),
        iso!("nv", "Navajo"),
        iso!("ny", "Chichewa"),
        iso!("oc", "Occitan"),
        iso!("oj", "Ojibwa"),
        iso!("om", "Oromo"),
        iso!("or", "Oriya"),
        iso!("os", "Ossetian"),
        iso!("pa", "Punjabi"),
        iso!("pi", "Pali"),
        iso!("pl", "Polish"),
        iso!("ps", "Pashto"),
        iso!("pt", "Portuguese"),
        iso!("qu", "Quechua"),
        iso!("rm", "Romansh"),
        iso!("rn", "Rundi"),
        iso!("ro", "Romanian"),
        iso!("ru", "Russian"),
        iso!("rw", "Kinyarwanda"),
        iso!("sa", "Sanskrit"),
        iso!("sc", "Sardinian"),
        iso!("sd", "Sindhi"),
        iso!("se", "Northern Sami"),
        iso!("sg", "Sango"),
        iso!("si", "Sinhala"),
        iso!("sk", "Slovak"),
        iso!("sl", "Slovenian"),
        iso!("sm", "Samoan"),
        iso!("sn", "Shona"),
        iso!("so", "Somali"),
        iso!("sq", "Albanian"),
        iso!("sr", "Serbian"),
        iso!("ss", "Swati"),
        iso!("st", "Southern Sotho"),
        iso!("su", "Sundanese"),
        iso!("sv", "Swedish"),
        iso!("sw", "Swahili"),
        iso!("ta", "Tamil"),
        iso!("te", "Telugu"),
        iso!("tg", "Tajik"),
        iso!("th", "Thai"),
        iso!("ti", "Tigrinya"),
        iso!("tk", "Turkmen"),
        iso!("tl", "Tagalog"),
        iso!("tn", "Tswana"),
        iso!("to", "Tonga"),
        iso!("tr", "Turkish"),
        iso!("ts", "Tsonga"),
        iso!("tt", "Tatar"),
        iso!("tw", "Twi"),
        iso!("ty", "Tahitian"),
        iso!("ug", "Uighur"),
        iso!("uk", "Ukrainian"),
        iso!("ur", "Urdu"),
        iso!("uz", "Uzbek"),
        iso!("ve", "Venda"),
        iso!("vi", "Vietnamese"),
        iso!("vo", "Volapük"),
        iso!("wa", "Walloon"),
        iso!("wo", "Wolof"),
        iso!("xh", "Xhosa"),
        iso!("yi", "Yiddish"),
        iso!("yo", "Yoruba"),
        iso!("za", "Zhuang"),
        iso!("zh", "Chinese"),
        iso!("zu", "Zulu"),
    ]
}
