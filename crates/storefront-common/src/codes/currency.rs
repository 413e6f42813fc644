use std::fmt;

/// Currency codes according to ISO 4217.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    /// UAE Dirham (United Arab Emirates), 2 decimals.
    Aed,
    /// Afghan Afghani (Afghanistan), 2 decimals.
    Afn,
    /// Albanian Lek (Albania), 2 decimals.
    All,
    /// Armenian Dram (Armenia), 2 decimals.
    Amd,
    /// Netherlands Antillean Guilder (Netherlands Antilles), 2 decimals.
    Ang,
    /// Angolan Kwanza (Angola), 2 decimals.
    Aoa,
    /// Argentine Peso (Argentina), 2 decimals.
    Ars,
    /// Australian Dollar (Australia), 2 decimals.
    Aud,
    /// Aruban Florin (Aruba), 2 decimals.
    Awg,
    /// Azerbaijani Manat (Azerbaijan), 2 decimals.
    Azn,
    /// Bosnia-Herzegovina Convertible Mark (Bosnia and Herzegovina), 2 decimals.
    Bam,
    /// Barbadian Dollar (Barbados), 2 decimals.
    Bbd,
    /// Bangladeshi Taka (Bangladesh), 2 decimals.
    Bdt,
    /// Bulgarian Lev (Bulgaria), 2 decimals.
    Bgn,
    /// Bahraini Dinar (Bahrain), 3 decimals.
    Bhd,
    /// Burundian Franc (Burundi), 0 decimals.
    Bif,
    /// Bermudian Dollar (Bermuda), 2 decimals.
    Bmd,
    /// Brunei Dollar (Brunei), 2 decimals.
    Bnd,
    /// Bolivian Boliviano (Bolivia), 2 decimals.
    Bob,
    /// Brazilian Real (Brazil), 2 decimals.
    Brl,
    /// Bahamian Dollar (Bahamas), 2 decimals.
    Bsd,
    /// Bhutanese Ngultrum (Bhutan), 2 decimals.
    Btn,
    /// Botswana Pula (Botswana), 2 decimals.
    Bwp,
    /// Belarusian Ruble (Belarus), 2 decimals.
    Byn,
    /// Belize Dollar (Belize), 2 decimals.
    Bzd,
    /// Canadian Dollar (Canada), 2 decimals.
    Cad,
    /// Congolese Franc (Democratic Republic of the Congo), 2 decimals.
    Cdf,
    /// Swiss Franc (Switzerland), 2 decimals.
    Chf,
    /// Chilean Peso (Chile), 0 decimals.
    Clp,
    /// Chinese Yuan (China), 2 decimals.
    Cny,
    /// Colombian Peso (Colombia), 2 decimals.
    Cop,
    /// Costa Rican Colon (Costa Rica), 2 decimals.
    Crc,
    /// Cuban Peso (Cuba), 2 decimals.
    Cup,
    /// Cape Verdean Escudo (Cape Verde), 2 decimals.
    Cve,
    /// Czech Koruna (Czech Republic), 2 decimals.
    Czk,
    /// Djiboutian Franc (Djibouti), 0 decimals.
    Djf,
    /// Danish Krone (Denmark), 2 decimals.
    Dkk,
    /// Dominican Peso (Dominican Republic), 2 decimals.
    Dop,
    /// Algerian Dinar (Algeria), 2 decimals.
    Dzd,
    /// Egyptian Pound (Egypt), 2 decimals.
    Egp,
    /// Eritrean Nakfa (Eritrea), 2 decimals.
    Ern,
    /// Ethiopian Birr (Ethiopia), 2 decimals.
    Etb,
    /// Euro (European Union), 2 decimals.
    Eur,
    /// Fijian Dollar (Fiji), 2 decimals.
    Fjd,
    /// Falkland Islands Pound (Falkland Islands), 2 decimals.
    Fkp,
    /// Faroese Króna (Faroe Islands), 2 decimals.
    Fok,
    /// Pound Sterling (United Kingdom), 2 decimals.
    Gbp,
    /// Georgian Lari (Georgia), 2 decimals.
    Gel,
    /// Guernsey Pound (Guernsey), 2 decimals.
    Ggp,
    /// Ghanaian Cedi (Ghana), 2 decimals.
    Ghs,
    /// Gibraltar Pound (Gibraltar), 2 decimals.
    Gip,
    /// Gambian Dalasi (Gambia), 2 decimals.
    Gmd,
    /// Guinean Franc (Guinea), 0 decimals.
    Gnf,
    /// Guatemalan Quetzal (Guatemala), 2 decimals.
    Gtq,
    /// Guyanese Dollar (Guyana), 2 decimals.
    Gyd,
    /// Hong Kong Dollar (Hong Kong), 2 decimals.
    Hkd,
    /// Honduran Lempira (Honduras), 2 decimals.
    Hnl,
    /// Croatian Kuna (Croatia), 2 decimals.
    Hrk,
    /// Haitian Gourde (Haiti), 2 decimals.
    Htg,
    /// Hungarian Forint (Hungary), 2 decimals.
    Huf,
    /// Indonesian Rupiah (Indonesia), 0 decimals.
    IDR,
    /// Israeli New Shekel (Israel), 2 decimals.
    Ils,
    /// Isle of Man Pound (Isle of Man), 2 decimals.
    Imp,
    /// Indian Rupee (India), 2 decimals.
    Inr,
    /// Iraqi Dinar (Iraq), 3 decimals.
    Iqd,
    /// Iranian Rial (Iran), 2 decimals.
    Irr,
    /// Icelandic Króna (Iceland), 0 decimals.
    Isk,
    /// Jersey Pound (Jersey), 2 decimals.
    Jep,
    /// Jamaican Dollar (Jamaica), 2 decimals.
    Jmd,
    /// Jordanian Dinar (Jordan), 3 decimals.
    Jod,
    /// Japanese Yen (Japan), 0 decimals.
    Jpy,
    /// Kenyan Shilling (Kenya), 2 decimals.
    Kes,
    /// Kyrgyzstani Som (Kyrgyzstan), 2 decimals.
    Kgs,
    /// Cambodian Riel (Cambodia), 2 decimals.
    Khr,
    /// Comorian Franc (Comoros), 2 decimals.
    Kmf,
    /// North Korean Won (North Korea), 2 decimals.
    Kpw,
    /// South Korean Won (South Korea), 2 decimals.
    Krw,
    /// Kuwaiti Dinar (Kuwait), 3 decimals.
    Kwd,
    /// Cayman Islands Dollar (Cayman Islands), 2 decimals.
    Kyd,
    /// Kazakhstani Tenge (Kazakhstan), 2 decimals.
    Kzt,
    /// Lao Kip (Laos), 2 decimals.
    Lak,
    /// Lebanese Pound (Lebanon), 2 decimals.
    Lbp,
    /// Sri Lankan Rupee (Sri Lanka), 2 decimals.
    Lkr,
    /// Liberian Dollar (Liberia), 3 decimals.
    Lrd,
    /// Libyan Dinar (Libya), 3 decimals.
    Lyd,
    /// Moroccan Dirham (Morocco), 2 decimals.
    Mad,
    /// Moldovan Leu (Moldova), 2 decimals.
    Mdl,
    /// Malagasy Ariary (Madagascar), 2 decimals.
    Mga,
    /// Macedonian Denar (North Macedonia), 2 decimals.
    Mkd,
    /// Burmese Kyat (Myanmar), 2 decimals.
    Mmk,
    /// Mongolian Tögrög (Mongolia), 2 decimals.
    Mnt,
    /// Macanese Pataca (Macau), 2 decimals.
    Mop,
    /// Mauritanian Ouguiya (Mauritania), 2 decimals.
    Mru,
    /// Mauritian Rupee (Mauritius), 2 decimals.
    Mur,
    /// Maldivian Rufiyaa (Maldives), 2 decimals.
    Mvr,
    /// Malawian Kwacha (Malawi), 2 decimals.
    Mwk,
    /// Mexican Peso (Mexico), 2 decimals.
    Mxn,
    /// Malaysian Ringgit (Malaysia), 2 decimals.
    Myr,
    /// Mozambican Metical (Mozambique), 2 decimals.
    Mzn,
    /// Namibian Dollar (Namibia), 2 decimals.
    Nad,
    /// Nigerian Naira (Nigeria), 2 decimals.
    Ngn,
    /// Nicaraguan Córdoba (Nicaragua), 2 decimals.
    Nio,
    /// Norwegian Krone (Norway), 2 decimals.
    Nok,
    /// Nepalese Rupee (Nepal), 2 decimals.
    Npr,
    /// New Zealand Dollar (New Zealand), 2 decimals.
    Nzd,
    /// Omani Rial (Oman), 2 decimals.
    Omr,
    /// Panamanian Balboa (Panama), 2 decimals.
    Pab,
    /// Peruvian Sol (Peru), 2 decimals.
    Pen,
    /// Papua New Guinean Kina (Papua New Guinea), 0 decimals.
    Pgk,
    /// Philippine Peso (Philippines), 2 decimals.
    Php,
    /// Pakistani Rupee (Pakistan), 2 decimals.
    Pkr,
    /// Polish Zloty (Poland), 0 decimals.
    Pln,
    /// Paraguayan Guaraní (Paraguay), 2 decimals.
    Pyg,
    /// Qatari Riyal (Qatar), 2 decimals.
    Qar,
    /// Romanian Leu (Romania), 2 decimals.
    Ron,
    /// Serbian Dinar (Serbia), 2 decimals.
    Rsd,
    /// Russian Ruble (Russia), 2 decimals.
    Rub,
    /// Rwandan Franc (Rwanda), 2 decimals.
    Rwf,
    /// Saudi Riyal (Saudi Arabia), 2 decimals.
    Sar,
    /// Solomon Islands Dollar (Solomon Islands), 2 decimals.
    Sbd,
    /// Seychelles Rupee (Seychelles), 2 decimals.
    Scr,
    /// Sudanese Pound (Sudan), 2 decimals.
    Sdg,
    /// Swedish Krona (Sweden), 2 decimals.
    Sek,
    /// Singapore Dollar (Singapore), 2 decimals.
    Sgd,
    /// Saint Helena Pound (Saint Helena), 0 decimals.
    Shp,
    /// Sierra Leonean Leone (Sierra Leone), 2 decimals.
    Sle,
    /// Somali Shilling (Somalia), 2 decimals.
    Sos,
    /// Surinamese Dollar (Suriname), 2 decimals.
    Srd,
    /// South Sudanese Pound (South Sudan), 2 decimals.
    Ssp,
    /// São Tomé and Príncipe Dobra (São Tomé and Príncipe), 2 decimals.
    Stn,
    /// Salvadoran Colón (El Salvador), 2 decimals.
    Svc,
    /// Syrian Pound (Syria), 2 decimals.
    Syp,
    /// Eswatini Lilangeni (Eswatini), 2 decimals.
    Szl,
    /// Thai Baht (Thailand), 2 decimals.
    Thb,
    /// Tajikistani Somoni (Tajikistan), 2 decimals.
    Tjs,
    /// Turkmenistani Manat (Turkmenistan), 2 decimals.
    Tmt,
    /// Tunisian Dinar (Tunisia), 2 decimals.
    Tnd,
    /// Tongan Paʻanga (Tonga), 2 decimals.
    Top,
    /// Turkish Lira (Türkiye), 2 decimals.
    Try,
    /// Trinidad and Tobago Dollar (Trinidad and Tobago), 2 decimals.
    Ttd,
    /// New Taiwan Dollar (Taiwan), 2 decimals.
    Twd,
    /// Tanzanian Shilling (Tanzania), 0 decimals.
    Tzs,
    /// Ukrainian Hryvnia (Ukraine), 2 decimals.
    Uah,
    /// Ugandan Shilling (Uganda), 2 decimals.
    Ugx,
    /// United States Dollar (United States), 2 decimals.
    Usd,
    /// Uruguayan Peso (Uruguay), 2 decimals.
    Uyu,
    /// Uzbekistan Som (Uzbekistan), 2 decimals.
    Uzs,
    /// Venezuelan Bolívar (Venezuela), 2 decimals.
    Ves,
    /// Vietnamese Dong (Vietnam), 0 decimals.
    Vnd,
    /// Vanuatu Vatu (Vanuatu), 2 decimals.
    Vuv,
    /// Samoan Tala (Samoa), 2 decimals.
    Wst,
    /// Central African CFA Franc (CEMAC), 2 decimals.
    Xaf,
    /// East Caribbean Dollar (OECS), 0 decimals.
    Xcd,
    /// Special Drawing Rights (IMF), 0 decimals.
    Xdr,
    /// West African CFA Franc (UEMOA), 0 decimals.
    Xof,
    /// CFP Franc (French overseas territories), 0 decimals.
    Xpf,
    /// Yemeni Rial (Yemen), 2 decimals.
    Yer,
    /// South African Rand (South Africa), 2 decimals.
    Zar,
    /// Zambian Kwacha (Zambia), 2 decimals.
    Zmw,
    /// Zimbabwean Dollar (Zimbabwe), 2 decimals.
    Zwl,
}

impl CurrencyCode {
    /// Every supported currency, in seeding order.
    pub const ALL: &'static [CurrencyCode] = &[
        Self::Aed,
        Self::Afn,
        Self::All,
        Self::Amd,
        Self::Ang,
        Self::Aoa,
        Self::Ars,
        Self::Aud,
        Self::Awg,
        Self::Azn,
        Self::Bam,
        Self::Bbd,
        Self::Bdt,
        Self::Bgn,
        Self::Bhd,
        Self::Bif,
        Self::Bmd,
        Self::Bnd,
        Self::Bob,
        Self::Brl,
        Self::Bsd,
        Self::Btn,
        Self::Bwp,
        Self::Byn,
        Self::Bzd,
        Self::Cad,
        Self::Cdf,
        Self::Chf,
        Self::Clp,
        Self::Cny,
        Self::Cop,
        Self::Crc,
        Self::Cup,
        Self::Cve,
        Self::Czk,
        Self::Djf,
        Self::Dkk,
        Self::Dop,
        Self::Dzd,
        Self::Egp,
        Self::Ern,
        Self::Etb,
        Self::Eur,
        Self::Fjd,
        Self::Fkp,
        Self::Fok,
        Self::Gbp,
        Self::Gel,
        Self::Ggp,
        Self::Ghs,
        Self::Gip,
        Self::Gmd,
        Self::Gnf,
        Self::Gtq,
        Self::Gyd,
        Self::Hkd,
        Self::Hnl,
        Self::Hrk,
        Self::Htg,
        Self::Huf,
        Self::IDR,
        Self::Ils,
        Self::Imp,
        Self::Inr,
        Self::Iqd,
        Self::Irr,
        Self::Isk,
        Self::Jep,
        Self::Jmd,
        Self::Jod,
        Self::Jpy,
        Self::Kes,
        Self::Kgs,
        Self::Khr,
        Self::Kmf,
        Self::Kpw,
        Self::Krw,
        Self::Kwd,
        Self::Kyd,
        Self::Kzt,
        Self::Lak,
        Self::Lbp,
        Self::Lkr,
        Self::Lrd,
        Self::Lyd,
        Self::Mad,
        Self::Mdl,
        Self::Mga,
        Self::Mkd,
        Self::Mmk,
        Self::Mnt,
        Self::Mop,
        Self::Mru,
        Self::Mur,
        Self::Mvr,
        Self::Mwk,
        Self::Mxn,
        Self::Myr,
        Self::Mzn,
        Self::Nad,
        Self::Ngn,
        Self::Nio,
        Self::Nok,
        Self::Npr,
        Self::Nzd,
        Self::Omr,
        Self::Pab,
        Self::Pen,
        Self::Pgk,
        Self::Php,
        Self::Pkr,
        Self::Pln,
        Self::Pyg,
        Self::Qar,
        Self::Ron,
        Self::Rsd,
        Self::Rub,
        Self::Rwf,
        Self::Sar,
        Self::Sbd,
        Self::Scr,
        Self::Sdg,
        Self::Sek,
        Self::Sgd,
        Self::Shp,
        Self::Sle,
        Self::Sos,
        Self::Srd,
        Self::Ssp,
        Self::Stn,
        Self::Svc,
        Self::Syp,
        Self::Szl,
        Self::Thb,
        Self::Tjs,
        Self::Tmt,
        Self::Tnd,
        Self::Top,
        Self::Try,
        Self::Ttd,
        Self::Twd,
        Self::Tzs,
        Self::Uah,
        Self::Ugx,
        Self::Usd,
        Self::Uyu,
        Self::Uzs,
        Self::Ves,
        Self::Vnd,
        Self::Vuv,
        Self::Wst,
        Self::Xaf,
        Self::Xcd,
        Self::Xdr,
        Self::Xof,
        Self::Xpf,
        Self::Yer,
        Self::Zar,
        Self::Zmw,
        Self::Zwl,
    ];

    /// The wire form stored in the `currency_codes` table.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aed => "AED",
            Self::Afn => "AFN",
            Self::All => "ALL",
            Self::Amd => "AMD",
            Self::Ang => "ANG",
            Self::Aoa => "AOA",
            Self::Ars => "ARS",
            Self::Aud => "AUD",
            Self::Awg => "AWG",
            Self::Azn => "AZN",
            Self::Bam => "BAM",
            Self::Bbd => "BBD",
            Self::Bdt => "BDT",
            Self::Bgn => "BGN",
            Self::Bhd => "BHD",
            Self::Bif => "BIF",
            Self::Bmd => "BMD",
            Self::Bnd => "BND",
            Self::Bob => "BOB",
            Self::Brl => "BRL",
            Self::Bsd => "BSD",
            Self::Btn => "BTN",
            Self::Bwp => "BWP",
            Self::Byn => "BYN",
            Self::Bzd => "BZD",
            Self::Cad => "CAD",
            Self::Cdf => "CDF",
            Self::Chf => "CHF",
            Self::Clp => "CLP",
            Self::Cny => "CNY",
            Self::Cop => "COP",
            Self::Crc => "CRC",
            Self::Cup => "CUP",
            Self::Cve => "CVE",
            Self::Czk => "CZK",
            Self::Djf => "DJF",
            Self::Dkk => "DKK",
            Self::Dop => "DOP",
            Self::Dzd => "DZD",
            Self::Egp => "EGP",
            Self::Ern => "ERN",
            Self::Etb => "ETB",
            Self::Eur => "EUR",
            Self::Fjd => "FJD",
            Self::Fkp => "FKP",
            Self::Fok => "FOK",
            Self::Gbp => "GBP",
            Self::Gel => "GEL",
            Self::Ggp => "GGP",
            Self::Ghs => "GHS",
            Self::Gip => "GIP",
            Self::Gmd => "GMD",
            Self::Gnf => "GNF",
            Self::Gtq => "GTQ",
            Self::Gyd => "GYD",
            Self::Hkd => "HKD",
            Self::Hnl => "HNL",
            Self::Hrk => "HRK",
            Self::Htg => "HTG",
            Self::Huf => "HUF",
            Self::IDR => "IDR",
            Self::Ils => "ILS",
            Self::Imp => "IMP",
            Self::Inr => "INR",
            Self::Iqd => "IQD",
            Self::Irr => "IRR",
            Self::Isk => "ISK",
            Self::Jep => "JEP",
            Self::Jmd => "JMD",
            Self::Jod => "JOD",
            Self::Jpy => "JPY",
            Self::Kes => "KES",
            Self::Kgs => "KGS",
            Self::Khr => "KHR",
            Self::Kmf => "KMF",
            Self::Kpw => "KPW",
            Self::Krw => "KRW",
            Self::Kwd => "KWD",
            Self::Kyd => "KYD",
            Self::Kzt => "KZT",
            Self::Lak => "LAK",
            Self::Lbp => "LBP",
            Self::Lkr => "LKR",
            Self::Lrd => "LRD",
            Self::Lyd => "LYD",
            Self::Mad => "MAD",
            Self::Mdl => "MDL",
            Self::Mga => "MGA",
            Self::Mkd => "MKD",
            Self::Mmk => "MMK",
            Self::Mnt => "MNT",
            Self::Mop => "MOP",
            Self::Mru => "MRU",
            Self::Mur => "MUR",
            Self::Mvr => "MVR",
            Self::Mwk => "MWK",
            Self::Mxn => "MXN",
            Self::Myr => "MYR",
            Self::Mzn => "MZN",
            Self::Nad => "NAD",
            Self::Ngn => "NGN",
            Self::Nio => "NIO",
            Self::Nok => "NOK",
            Self::Npr => "NPR",
            Self::Nzd => "NZD",
            Self::Omr => "OMR",
            Self::Pab => "PAB",
            Self::Pen => "PEN",
            Self::Pgk => "PGK",
            Self::Php => "PHP",
            Self::Pkr => "PKR",
            Self::Pln => "PLN",
            Self::Pyg => "PYG",
            Self::Qar => "QAR",
            Self::Ron => "RON",
            Self::Rsd => "RSD",
            Self::Rub => "RUB",
            Self::Rwf => "RWF",
            Self::Sar => "SAR",
            Self::Sbd => "SBD",
            Self::Scr => "SCR",
            Self::Sdg => "SDG",
            Self::Sek => "SEK",
            Self::Sgd => "SGD",
            Self::Shp => "SHP",
            Self::Sle => "SLE",
            Self::Sos => "SOS",
            Self::Srd => "SRD",
            Self::Ssp => "SSP",
            Self::Stn => "STN",
            Self::Svc => "SVC",
            Self::Syp => "SYP",
            Self::Szl => "SZL",
            Self::Thb => "THB",
            Self::Tjs => "TJS",
            Self::Tmt => "TMT",
            Self::Tnd => "TND",
            Self::Top => "TOP",
            Self::Try => "TRY",
            Self::Ttd => "TTD",
            Self::Twd => "TWD",
            Self::Tzs => "TZS",
            Self::Uah => "UAH",
            Self::Ugx => "UGX",
            Self::Usd => "USD",
            Self::Uyu => "UYU",
            Self::Uzs => "UZS",
            Self::Ves => "VES",
            Self::Vnd => "VND",
            Self::Vuv => "VUV",
            Self::Wst => "WST",
            Self::Xaf => "XAF",
            Self::Xcd => "XCD",
            Self::Xdr => "XDR",
            Self::Xof => "XOF",
            Self::Xpf => "XPF",
            Self::Yer => "YER",
            Self::Zar => "ZAR",
            Self::Zmw => "ZMW",
            Self::Zwl => "ZWL",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::CurrencyCode;

    #[test]
    fn every_code_is_unique() {
        let distinct: HashSet<&str> = CurrencyCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(distinct.len(), CurrencyCode::ALL.len());
        assert_eq!(CurrencyCode::ALL.len(), 160);
    }

    #[test]
    fn codes_are_sorted_alphabetically() {
        let forms: Vec<&str> = CurrencyCode::ALL.iter().map(|c| c.as_str()).collect();
        let mut sorted = forms.clone();
        sorted.sort_unstable();
        assert_eq!(forms, sorted);
    }

    #[test]
    fn wire_form_is_iso_4217_alpha() {
        for code in CurrencyCode::ALL {
            let s = code.as_str();
            assert_eq!(s.len(), 3, "{s} is not three letters");
            assert!(s.chars().all(|c| c.is_ascii_uppercase()), "{s} is not uppercase");
        }
    }
}
