use std::fmt;

/// Language codes based on ISO 639-1 and BCP 47.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
    /// Ukrainian.
    Uk,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// German.
    De,
    /// Italian.
    It,
    /// Portuguese (Portugal/Brazil unified).
    Pt,
    /// Japanese.
    Ja,
    /// Korean.
    Ko,
    /// Chinese (Simplified, China).
    ZhCn,
    /// Chinese (Traditional, Taiwan).
    ZhTw,
    /// Polish.
    Pl,
    /// Turkish.
    Tr,
    /// Dutch.
    Nl,
    /// Arabic.
    Ar,
    /// Hebrew.
    He,
    /// Hindi.
    Hi,
    /// Bengali.
    Bn,
    /// Vietnamese.
    Vi,
    /// Thai.
    Th,
    /// Indonesian.
    ID,
    /// Malay.
    Ms,
    /// Czech.
    Cs,
    /// Slovak.
    Sk,
    /// Romanian.
    Ro,
    /// Hungarian.
    Hu,
    /// Greek.
    El,
    /// Bulgarian.
    Bg,
    /// Serbian.
    Sr,
    /// Croatian.
    Hr,
    /// Slovenian.
    Sl,
    /// Lithuanian.
    Lt,
    /// Latvian.
    Lv,
    /// Estonian.
    Et,
    /// Finnish.
    Fi,
    /// Swedish.
    Sv,
    /// Norwegian.
    No,
    /// Danish.
    Da,
    /// Icelandic.
    Is,
    /// Filipino.
    Fil,
    /// Swahili.
    Sw,
    /// Azerbaijani.
    Az,
    /// Armenian.
    Hy,
    /// Georgian.
    Ka,
    /// Kazakh.
    Kk,
    /// Uzbek.
    Uz,
    /// Turkmen.
    Tk,
    /// Kyrgyz.
    Ky,
    /// Tajik.
    Tg,
    /// Pashto.
    Ps,
    /// Persian (Farsi).
    Fa,
    /// Kurdish.
    Ku,
    /// Mongolian.
    Mn,
    /// Nepali.
    Ne,
    /// Sinhala.
    Si,
    /// Tamil.
    Ta,
    /// Telugu.
    Te,
    /// Kannada.
    Kn,
    /// Malayalam.
    Ml,
    /// Marathi.
    Mr,
    /// Gujarati.
    Gu,
    /// Punjabi.
    Pa,
    /// Lao.
    Lo,
    /// Burmese.
    My,
    /// Khmer.
    Km,
    /// Basque.
    Eu,
    /// Galician.
    Gl,
    /// Catalan.
    Ca,
    /// Welsh.
    Cy,
    /// Irish.
    Ga,
    /// Scottish Gaelic.
    Gd,
    /// Haitian Creole.
    Ht,
    /// Afrikaans.
    Af,
    /// Zulu.
    Zu,
    /// Xhosa.
    Xh,
    /// Yoruba.
    Yo,
    /// Igbo.
    Ig,
    /// Amharic.
    Am,
    /// Malagasy.
    Mg,
    /// Maori.
    Mi,
    /// Samoan.
    Sm,
    /// Tongan.
    To,
    /// Esperanto.
    Eo,
    /// Latin.
    La,
}

impl LocaleCode {
    /// Every supported locale, in seeding order.
    pub const ALL: &'static [LocaleCode] = &[
        Self::En,
        Self::Ru,
        Self::Uk,
        Self::Fr,
        Self::Es,
        Self::De,
        Self::It,
        Self::Pt,
        Self::Ja,
        Self::Ko,
        Self::ZhCn,
        Self::ZhTw,
        Self::Pl,
        Self::Tr,
        Self::Nl,
        Self::Ar,
        Self::He,
        Self::Hi,
        Self::Bn,
        Self::Vi,
        Self::Th,
        Self::ID,
        Self::Ms,
        Self::Cs,
        Self::Sk,
        Self::Ro,
        Self::Hu,
        Self::El,
        Self::Bg,
        Self::Sr,
        Self::Hr,
        Self::Sl,
        Self::Lt,
        Self::Lv,
        Self::Et,
        Self::Fi,
        Self::Sv,
        Self::No,
        Self::Da,
        Self::Is,
        Self::Fil,
        Self::Sw,
        Self::Az,
        Self::Hy,
        Self::Ka,
        Self::Kk,
        Self::Uz,
        Self::Tk,
        Self::Ky,
        Self::Tg,
        Self::Ps,
        Self::Fa,
        Self::Ku,
        Self::Mn,
        Self::Ne,
        Self::Si,
        Self::Ta,
        Self::Te,
        Self::Kn,
        Self::Ml,
        Self::Mr,
        Self::Gu,
        Self::Pa,
        Self::Lo,
        Self::My,
        Self::Km,
        Self::Eu,
        Self::Gl,
        Self::Ca,
        Self::Cy,
        Self::Ga,
        Self::Gd,
        Self::Ht,
        Self::Af,
        Self::Zu,
        Self::Xh,
        Self::Yo,
        Self::Ig,
        Self::Am,
        Self::Mg,
        Self::Mi,
        Self::Sm,
        Self::To,
        Self::Eo,
        Self::La,
    ];

    /// The wire form stored in the `locale_codes` table.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uk => "uk",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::Pl => "pl",
            Self::Tr => "tr",
            Self::Nl => "nl",
            Self::Ar => "ar",
            Self::He => "he",
            Self::Hi => "hi",
            Self::Bn => "bn",
            Self::Vi => "vi",
            Self::Th => "th",
            Self::ID => "id",
            Self::Ms => "ms",
            Self::Cs => "cs",
            Self::Sk => "sk",
            Self::Ro => "ro",
            Self::Hu => "hu",
            Self::El => "el",
            Self::Bg => "bg",
            Self::Sr => "sr",
            Self::Hr => "hr",
            Self::Sl => "sl",
            Self::Lt => "lt",
            Self::Lv => "lv",
            Self::Et => "et",
            Self::Fi => "fi",
            Self::Sv => "sv",
            Self::No => "no",
            Self::Da => "da",
            Self::Is => "is",
            Self::Fil => "fil",
            Self::Sw => "sw",
            Self::Az => "az",
            Self::Hy => "hy",
            Self::Ka => "ka",
            Self::Kk => "kk",
            Self::Uz => "uz",
            Self::Tk => "tk",
            Self::Ky => "ky",
            Self::Tg => "tg",
            Self::Ps => "ps",
            Self::Fa => "fa",
            Self::Ku => "ku",
            Self::Mn => "mn",
            Self::Ne => "ne",
            Self::Si => "si",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Kn => "kn",
            Self::Ml => "ml",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Pa => "pa",
            Self::Lo => "lo",
            Self::My => "my",
            Self::Km => "km",
            Self::Eu => "eu",
            Self::Gl => "gl",
            Self::Ca => "ca",
            Self::Cy => "cy",
            Self::Ga => "ga",
            Self::Gd => "gd",
            Self::Ht => "ht",
            Self::Af => "af",
            Self::Zu => "zu",
            Self::Xh => "xh",
            Self::Yo => "yo",
            Self::Ig => "ig",
            Self::Am => "am",
            Self::Mg => "mg",
            Self::Mi => "mi",
            Self::Sm => "sm",
            Self::To => "to",
            Self::Eo => "eo",
            Self::La => "la",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::LocaleCode;

    #[test]
    fn every_code_is_unique() {
        let distinct: HashSet<&str> = LocaleCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(distinct.len(), LocaleCode::ALL.len());
    }

    #[test]
    fn seeding_order_is_pinned() {
        assert_eq!(LocaleCode::ALL.len(), 85);
        assert_eq!(LocaleCode::ALL[0], LocaleCode::En);
        assert_eq!(LocaleCode::ALL[1], LocaleCode::Ru);
        assert_eq!(LocaleCode::ALL.last(), Some(&LocaleCode::La));
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(LocaleCode::En.to_string(), "en");
        assert_eq!(LocaleCode::ZhCn.to_string(), "zh_CN");
        assert_eq!(LocaleCode::ZhTw.to_string(), "zh_TW");
    }
}
