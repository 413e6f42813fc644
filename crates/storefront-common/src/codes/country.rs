use std::fmt;

/// Country codes according to ISO 3166-1 alpha-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    /// United States.
    Us,
    /// Canada.
    Ca,
    /// Mexico.
    Mx,
    /// United Kingdom.
    Gb,
    /// Germany.
    De,
    /// France.
    Fr,
    /// Italy.
    It,
    /// Spain.
    Es,
    /// Australia.
    Au,
    /// New Zealand.
    Nz,
    /// Japan.
    Jp,
    /// China.
    Cn,
    /// South Korea.
    Kr,
    /// India.
    In,
    /// Brazil.
    Br,
    /// Argentina.
    Ar,
    /// South Africa.
    Za,
    /// Russia.
    Ru,
    /// Ukraine.
    Ua,
    /// Poland.
    Pl,
    /// Netherlands.
    Nl,
    /// Belgium.
    Be,
    /// Sweden.
    Se,
    /// Norway.
    No,
    /// Denmark.
    Dk,
    /// Finland.
    Fi,
    /// Switzerland.
    Ch,
    /// Austria.
    At,
    /// Portugal.
    Pt,
    /// Ireland.
    Ie,
    /// Czech Republic.
    Cz,
    /// Hungary.
    Hu,
    /// Slovakia.
    Sk,
    /// Slovenia.
    Si,
    /// Croatia.
    Hr,
    /// Greece.
    Gr,
    /// Turkey.
    Tr,
    /// Romania.
    Ro,
    /// Bulgaria.
    Bg,
    /// Estonia.
    Ee,
    /// Latvia.
    Lv,
    /// Lithuania.
    Lt,
    /// Iceland.
    Is,
    /// Luxembourg.
    Lu,
    /// Liechtenstein.
    Li,
    /// Malta.
    Mt,
    /// Cyprus.
    Cy,
    /// Israel.
    Il,
    /// Saudi Arabia.
    Sa,
    /// United Arab Emirates.
    Ae,
    /// Qatar.
    Qa,
    /// Kuwait.
    Kw,
    /// Oman.
    Om,
    /// Jordan.
    Jo,
    /// Egypt.
    Eg,
    /// Morocco.
    Ma,
    /// Tunisia.
    Tn,
    /// Algeria.
    Dz,
    /// Nigeria.
    Ng,
    /// Kenya.
    Ke,
    /// Ethiopia.
    Et,
    /// Ghana.
    Gh,
    /// Senegal.
    Sn,
    /// Ivory Coast.
    Ci,
    /// Tanzania.
    Tz,
    /// Uganda.
    Ug,
    /// Cameroon.
    Cm,
    /// Zambia.
    Zm,
    /// Zimbabwe.
    Zw,
    /// Mozambique.
    Mz,
    /// Botswana.
    Bw,
    /// Namibia.
    Na,
    /// Angola.
    Ao,
    /// Democratic Republic of the Congo.
    Cd,
    /// Sudan.
    Sd,
    /// Pakistan.
    Pk,
    /// Bangladesh.
    Bd,
    /// Nepal.
    Np,
    /// Thailand.
    Th,
    /// Vietnam.
    Vn,
    /// Malaysia.
    My,
    /// Singapore.
    Sg,
    /// Indonesia.
    ID,
    /// Philippines.
    Ph,
    /// Myanmar.
    Mm,
    /// Cambodia.
    Kh,
    /// Laos.
    La,
    /// Brunei.
    Bn,
    /// Kazakhstan.
    Kz,
    /// Uzbekistan.
    Uz,
    /// Turkmenistan.
    Tm,
    /// Kyrgyzstan.
    Kg,
    /// Tajikistan.
    Tj,
    /// Georgia.
    Ge,
    /// Armenia.
    Am,
    /// Azerbaijan.
    Az,
    /// Belarus.
    By,
    /// Moldova.
    Md,
    /// Serbia.
    Rs,
    /// Montenegro.
    Me,
    /// North Macedonia.
    Mk,
    /// Bosnia and Herzegovina.
    Ba,
    /// Albania.
    Al,
    /// Kosovo.
    Xk,
    /// Greenland.
    Gl,
    /// Panama.
    Pa,
    /// Costa Rica.
    Cr,
    /// El Salvador.
    Sv,
    /// Guatemala.
    Gt,
    /// Honduras.
    Hn,
    /// Nicaragua.
    Ni,
    /// Jamaica.
    Jm,
    /// Cuba.
    Cu,
    /// Dominican Republic.
    Do,
    /// Haiti.
    Ht,
    /// Trinidad and Tobago.
    Tt,
    /// Barbados.
    Bb,
    /// Bahamas.
    Bs,
    /// Paraguay.
    Py,
    /// Uruguay.
    Uy,
    /// Chile.
    Cl,
    /// Peru.
    Pe,
    /// Colombia.
    Co,
    /// Venezuela.
    Ve,
    /// Bolivia.
    Bo,
    /// Ecuador.
    Ec,
    /// Suriname.
    Sr,
    /// Guyana.
    Gy,
    /// Fiji.
    Fj,
    /// Papua New Guinea.
    Pg,
    /// Samoa.
    Ws,
    /// Tonga.
    To,
    /// Solomon Islands.
    Sb,
    /// Vanuatu.
    Vu,
    /// New Caledonia.
    Nc,
    /// Marshall Islands.
    Mh,
    /// Micronesia.
    Fm,
    /// Palau.
    Pw,
    /// Maldives.
    Mv,
    /// Seychelles.
    Sc,
    /// Mauritius.
    Mu,
    /// Sri Lanka.
    Lk,
    /// Bhutan.
    Bt,
    /// Mongolia.
    Mn,
    /// North Korea.
    Kp,
    /// Iraq.
    Iq,
    /// Iran.
    Ir,
    /// Afghanistan.
    Af,
    /// Yemen.
    Ye,
    /// Syria.
    Sy,
    /// Lebanon.
    Lb,
    /// Palestine.
    Ps,
    /// Bahrain.
    Bh,
    /// Malawi.
    Mw,
    /// Rwanda.
    Rw,
    /// Burundi.
    Bi,
    /// South Sudan.
    Ss,
    /// Lesotho.
    Ls,
    /// Swaziland (Eswatini).
    Sz,
    /// Madagascar.
    Mg,
    /// Central African Republic.
    Cf,
    /// Republic of the Congo.
    Cg,
    /// Gabon.
    Ga,
    /// Guinea.
    Gn,
    /// Guinea-Bissau.
    Gw,
    /// Equatorial Guinea.
    Gq,
    /// Sierra Leone.
    Sl,
    /// Liberia.
    Lr,
    /// Benin.
    Bj,
    /// Togo.
    Tg,
    /// Niger.
    Ne,
    /// Mali.
    Ml,
    /// Burkina Faso.
    Bf,
    /// Chad.
    Td,
    /// Mauritania.
    Mr,
    /// Gambia.
    Gm,
    /// Cape Verde.
    Cv,
    /// Eritrea.
    Er,
    /// Djibouti.
    Dj,
    /// Comoros.
    Km,
    /// Andorra.
    Ad,
    /// Monaco.
    Mc,
    /// San Marino.
    Sm,
    /// Vatican City.
    Va,
    /// Timor-Leste (East Timor).
    Tl,
    /// Antigua and Barbuda.
    Ag,
    /// Saint Kitts and Nevis.
    Kn,
    /// Saint Lucia.
    Lc,
    /// Saint Vincent and the Grenadines.
    Vc,
    /// Grenada.
    Gd,
    /// Dominica.
    Dm,
    /// Belize.
    Bz,
    /// Aruba.
    Aw,
    /// Curaçao.
    Cw,
    /// Bermuda.
    Bm,
    /// Faroe Islands.
    Fo,
    /// Isle of Man.
    Im,
    /// Jersey.
    Je,
    /// Guernsey.
    Gg,
    /// Åland Islands.
    Ax,
    /// Western Sahara.
    Eh,
    /// British Virgin Islands.
    Vg,
    /// US Virgin Islands.
    Vi,
}

impl CountryCode {
    /// Every supported country, in declaration order.
    pub const ALL: &'static [CountryCode] = &[
        Self::Us,
        Self::Ca,
        Self::Mx,
        Self::Gb,
        Self::De,
        Self::Fr,
        Self::It,
        Self::Es,
        Self::Au,
        Self::Nz,
        Self::Jp,
        Self::Cn,
        Self::Kr,
        Self::In,
        Self::Br,
        Self::Ar,
        Self::Za,
        Self::Ru,
        Self::Ua,
        Self::Pl,
        Self::Nl,
        Self::Be,
        Self::Se,
        Self::No,
        Self::Dk,
        Self::Fi,
        Self::Ch,
        Self::At,
        Self::Pt,
        Self::Ie,
        Self::Cz,
        Self::Hu,
        Self::Sk,
        Self::Si,
        Self::Hr,
        Self::Gr,
        Self::Tr,
        Self::Ro,
        Self::Bg,
        Self::Ee,
        Self::Lv,
        Self::Lt,
        Self::Is,
        Self::Lu,
        Self::Li,
        Self::Mt,
        Self::Cy,
        Self::Il,
        Self::Sa,
        Self::Ae,
        Self::Qa,
        Self::Kw,
        Self::Om,
        Self::Jo,
        Self::Eg,
        Self::Ma,
        Self::Tn,
        Self::Dz,
        Self::Ng,
        Self::Ke,
        Self::Et,
        Self::Gh,
        Self::Sn,
        Self::Ci,
        Self::Tz,
        Self::Ug,
        Self::Cm,
        Self::Zm,
        Self::Zw,
        Self::Mz,
        Self::Bw,
        Self::Na,
        Self::Ao,
        Self::Cd,
        Self::Sd,
        Self::Pk,
        Self::Bd,
        Self::Np,
        Self::Th,
        Self::Vn,
        Self::My,
        Self::Sg,
        Self::ID,
        Self::Ph,
        Self::Mm,
        Self::Kh,
        Self::La,
        Self::Bn,
        Self::Kz,
        Self::Uz,
        Self::Tm,
        Self::Kg,
        Self::Tj,
        Self::Ge,
        Self::Am,
        Self::Az,
        Self::By,
        Self::Md,
        Self::Rs,
        Self::Me,
        Self::Mk,
        Self::Ba,
        Self::Al,
        Self::Xk,
        Self::Gl,
        Self::Pa,
        Self::Cr,
        Self::Sv,
        Self::Gt,
        Self::Hn,
        Self::Ni,
        Self::Jm,
        Self::Cu,
        Self::Do,
        Self::Ht,
        Self::Tt,
        Self::Bb,
        Self::Bs,
        Self::Py,
        Self::Uy,
        Self::Cl,
        Self::Pe,
        Self::Co,
        Self::Ve,
        Self::Bo,
        Self::Ec,
        Self::Sr,
        Self::Gy,
        Self::Fj,
        Self::Pg,
        Self::Ws,
        Self::To,
        Self::Sb,
        Self::Vu,
        Self::Nc,
        Self::Mh,
        Self::Fm,
        Self::Pw,
        Self::Mv,
        Self::Sc,
        Self::Mu,
        Self::Lk,
        Self::Bt,
        Self::Mn,
        Self::Kp,
        Self::Iq,
        Self::Ir,
        Self::Af,
        Self::Ye,
        Self::Sy,
        Self::Lb,
        Self::Ps,
        Self::Bh,
        Self::Mw,
        Self::Rw,
        Self::Bi,
        Self::Ss,
        Self::Ls,
        Self::Sz,
        Self::Mg,
        Self::Cf,
        Self::Cg,
        Self::Ga,
        Self::Gn,
        Self::Gw,
        Self::Gq,
        Self::Sl,
        Self::Lr,
        Self::Bj,
        Self::Tg,
        Self::Ne,
        Self::Ml,
        Self::Bf,
        Self::Td,
        Self::Mr,
        Self::Gm,
        Self::Cv,
        Self::Er,
        Self::Dj,
        Self::Km,
        Self::Ad,
        Self::Mc,
        Self::Sm,
        Self::Va,
        Self::Tl,
        Self::Ag,
        Self::Kn,
        Self::Lc,
        Self::Vc,
        Self::Gd,
        Self::Dm,
        Self::Bz,
        Self::Aw,
        Self::Cw,
        Self::Bm,
        Self::Fo,
        Self::Im,
        Self::Je,
        Self::Gg,
        Self::Ax,
        Self::Eh,
        Self::Vg,
        Self::Vi,
    ];

    /// The two-letter uppercase form used across the platform.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Ca => "CA",
            Self::Mx => "MX",
            Self::Gb => "GB",
            Self::De => "DE",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Es => "ES",
            Self::Au => "AU",
            Self::Nz => "NZ",
            Self::Jp => "JP",
            Self::Cn => "CN",
            Self::Kr => "KR",
            Self::In => "IN",
            Self::Br => "BR",
            Self::Ar => "AR",
            Self::Za => "ZA",
            Self::Ru => "RU",
            Self::Ua => "UA",
            Self::Pl => "PL",
            Self::Nl => "NL",
            Self::Be => "BE",
            Self::Se => "SE",
            Self::No => "NO",
            Self::Dk => "DK",
            Self::Fi => "FI",
            Self::Ch => "CH",
            Self::At => "AT",
            Self::Pt => "PT",
            Self::Ie => "IE",
            Self::Cz => "CZ",
            Self::Hu => "HU",
            Self::Sk => "SK",
            Self::Si => "SI",
            Self::Hr => "HR",
            Self::Gr => "GR",
            Self::Tr => "TR",
            Self::Ro => "RO",
            Self::Bg => "BG",
            Self::Ee => "EE",
            Self::Lv => "LV",
            Self::Lt => "LT",
            Self::Is => "IS",
            Self::Lu => "LU",
            Self::Li => "LI",
            Self::Mt => "MT",
            Self::Cy => "CY",
            Self::Il => "IL",
            Self::Sa => "SA",
            Self::Ae => "AE",
            Self::Qa => "QA",
            Self::Kw => "KW",
            Self::Om => "OM",
            Self::Jo => "JO",
            Self::Eg => "EG",
            Self::Ma => "MA",
            Self::Tn => "TN",
            Self::Dz => "DZ",
            Self::Ng => "NG",
            Self::Ke => "KE",
            Self::Et => "ET",
            Self::Gh => "GH",
            Self::Sn => "SN",
            Self::Ci => "CI",
            Self::Tz => "TZ",
            Self::Ug => "UG",
            Self::Cm => "CM",
            Self::Zm => "ZM",
            Self::Zw => "ZW",
            Self::Mz => "MZ",
            Self::Bw => "BW",
            Self::Na => "NA",
            Self::Ao => "AO",
            Self::Cd => "CD",
            Self::Sd => "SD",
            Self::Pk => "PK",
            Self::Bd => "BD",
            Self::Np => "NP",
            Self::Th => "TH",
            Self::Vn => "VN",
            Self::My => "MY",
            Self::Sg => "SG",
            Self::ID => "ID",
            Self::Ph => "PH",
            Self::Mm => "MM",
            Self::Kh => "KH",
            Self::La => "LA",
            Self::Bn => "BN",
            Self::Kz => "KZ",
            Self::Uz => "UZ",
            Self::Tm => "TM",
            Self::Kg => "KG",
            Self::Tj => "TJ",
            Self::Ge => "GE",
            Self::Am => "AM",
            Self::Az => "AZ",
            Self::By => "BY",
            Self::Md => "MD",
            Self::Rs => "RS",
            Self::Me => "ME",
            Self::Mk => "MK",
            Self::Ba => "BA",
            Self::Al => "AL",
            Self::Xk => "XK",
            Self::Gl => "GL",
            Self::Pa => "PA",
            Self::Cr => "CR",
            Self::Sv => "SV",
            Self::Gt => "GT",
            Self::Hn => "HN",
            Self::Ni => "NI",
            Self::Jm => "JM",
            Self::Cu => "CU",
            Self::Do => "DO",
            Self::Ht => "HT",
            Self::Tt => "TT",
            Self::Bb => "BB",
            Self::Bs => "BS",
            Self::Py => "PY",
            Self::Uy => "UY",
            Self::Cl => "CL",
            Self::Pe => "PE",
            Self::Co => "CO",
            Self::Ve => "VE",
            Self::Bo => "BO",
            Self::Ec => "EC",
            Self::Sr => "SR",
            Self::Gy => "GY",
            Self::Fj => "FJ",
            Self::Pg => "PG",
            Self::Ws => "WS",
            Self::To => "TO",
            Self::Sb => "SB",
            Self::Vu => "VU",
            Self::Nc => "NC",
            Self::Mh => "MH",
            Self::Fm => "FM",
            Self::Pw => "PW",
            Self::Mv => "MV",
            Self::Sc => "SC",
            Self::Mu => "MU",
            Self::Lk => "LK",
            Self::Bt => "BT",
            Self::Mn => "MN",
            Self::Kp => "KP",
            Self::Iq => "IQ",
            Self::Ir => "IR",
            Self::Af => "AF",
            Self::Ye => "YE",
            Self::Sy => "SY",
            Self::Lb => "LB",
            Self::Ps => "PS",
            Self::Bh => "BH",
            Self::Mw => "MW",
            Self::Rw => "RW",
            Self::Bi => "BI",
            Self::Ss => "SS",
            Self::Ls => "LS",
            Self::Sz => "SZ",
            Self::Mg => "MG",
            Self::Cf => "CF",
            Self::Cg => "CG",
            Self::Ga => "GA",
            Self::Gn => "GN",
            Self::Gw => "GW",
            Self::Gq => "GQ",
            Self::Sl => "SL",
            Self::Lr => "LR",
            Self::Bj => "BJ",
            Self::Tg => "TG",
            Self::Ne => "NE",
            Self::Ml => "ML",
            Self::Bf => "BF",
            Self::Td => "TD",
            Self::Mr => "MR",
            Self::Gm => "GM",
            Self::Cv => "CV",
            Self::Er => "ER",
            Self::Dj => "DJ",
            Self::Km => "KM",
            Self::Ad => "AD",
            Self::Mc => "MC",
            Self::Sm => "SM",
            Self::Va => "VA",
            Self::Tl => "TL",
            Self::Ag => "AG",
            Self::Kn => "KN",
            Self::Lc => "LC",
            Self::Vc => "VC",
            Self::Gd => "GD",
            Self::Dm => "DM",
            Self::Bz => "BZ",
            Self::Aw => "AW",
            Self::Cw => "CW",
            Self::Bm => "BM",
            Self::Fo => "FO",
            Self::Im => "IM",
            Self::Je => "JE",
            Self::Gg => "GG",
            Self::Ax => "AX",
            Self::Eh => "EH",
            Self::Vg => "VG",
            Self::Vi => "VI",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::CountryCode;

    #[test]
    fn every_code_is_unique() {
        let distinct: HashSet<&str> = CountryCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(distinct.len(), CountryCode::ALL.len());
        assert_eq!(CountryCode::ALL.len(), 203);
    }

    #[test]
    fn declaration_order_is_pinned() {
        assert_eq!(CountryCode::ALL[0], CountryCode::Us);
        assert_eq!(CountryCode::ALL[1], CountryCode::Ca);
        assert_eq!(CountryCode::ALL.last(), Some(&CountryCode::Vi));
    }

    #[test]
    fn wire_form_is_iso_3166_alpha2() {
        for code in CountryCode::ALL {
            let s = code.as_str();
            assert_eq!(s.len(), 2, "{s} is not two letters");
            assert!(s.chars().all(|c| c.is_ascii_uppercase()), "{s} is not uppercase");
        }
    }
}
