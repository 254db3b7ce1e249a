use phf::{phf_map, Map};

/// Built-in language table, code -> English display name.
///
/// Codes follow ISO 639-1 where one exists; a handful of entries keep the
/// legacy code their upstream translation services still answer to (tl, jw).
pub static LANGUAGES: Map<&'static str, &'static str> = phf_map! {
    "af" => "Afrikaans",
    "am" => "Amharic",
    "ar" => "Arabic",
    "az" => "Azerbaijani",
    "be" => "Belarusian",
    "bg" => "Bulgarian",
    "bn" => "Bengali",
    "bs" => "Bosnian",
    "ca" => "Catalan",
    "ceb" => "Cebuano",
    "co" => "Corsican",
    "cs" => "Czech",
    "cy" => "Welsh",
    "da" => "Danish",
    "de" => "German",
    "el" => "Greek",
    "en" => "English",
    "eo" => "Esperanto",
    "es" => "Spanish",
    "et" => "Estonian",
    "eu" => "Basque",
    "fa" => "Persian",
    "fi" => "Finnish",
    "fr" => "French",
    "fy" => "Frisian",
    "ga" => "Irish",
    "gd" => "Scots Gaelic",
    "gl" => "Galician",
    "gu" => "Gujarati",
    "ha" => "Hausa",
    "haw" => "Hawaiian",
    "he" => "Hebrew",
    "hi" => "Hindi",
    "hmn" => "Hmong",
    "hr" => "Croatian",
    "ht" => "Haitian Creole",
    "hu" => "Hungarian",
    "hy" => "Armenian",
    "id" => "Indonesian",
    "ig" => "Igbo",
    "is" => "Icelandic",
    "it" => "Italian",
    "ja" => "Japanese",
    "jw" => "Javanese",
    "ka" => "Georgian",
    "kk" => "Kazakh",
    "km" => "Khmer",
    "kn" => "Kannada",
    "ko" => "Korean",
    "ku" => "Kurdish",
    "ky" => "Kyrgyz",
    "la" => "Latin",
    "lb" => "Luxembourgish",
    "lo" => "Lao",
    "lt" => "Lithuanian",
    "lv" => "Latvian",
    "mg" => "Malagasy",
    "mi" => "Maori",
    "mk" => "Macedonian",
    "ml" => "Malayalam",
    "mn" => "Mongolian",
    "mr" => "Marathi",
    "ms" => "Malay",
    "mt" => "Maltese",
    "my" => "Burmese",
    "ne" => "Nepali",
    "nl" => "Dutch",
    "no" => "Norwegian",
    "ny" => "Chichewa",
    "or" => "Odia",
    "pa" => "Punjabi",
    "pl" => "Polish",
    "ps" => "Pashto",
    "pt" => "Portuguese",
    "ro" => "Romanian",
    "ru" => "Russian",
    "rw" => "Kinyarwanda",
    "sd" => "Sindhi",
    "si" => "Sinhala",
    "sk" => "Slovak",
    "sl" => "Slovenian",
    "sm" => "Samoan",
    "sn" => "Shona",
    "so" => "Somali",
    "sq" => "Albanian",
    "sr" => "Serbian",
    "st" => "Sesotho",
    "su" => "Sundanese",
    "sv" => "Swedish",
    "sw" => "Swahili",
    "ta" => "Tamil",
    "te" => "Telugu",
    "tg" => "Tajik",
    "th" => "Thai",
    "tk" => "Turkmen",
    "tl" => "Filipino",
    "tr" => "Turkish",
    "tt" => "Tatar",
    "ug" => "Uyghur",
    "uk" => "Ukrainian",
    "ur" => "Urdu",
    "uz" => "Uzbek",
    "vi" => "Vietnamese",
    "xh" => "Xhosa",
    "yi" => "Yiddish",
    "yo" => "Yoruba",
    "zh" => "Chinese",
    "zu" => "Zulu",
};
