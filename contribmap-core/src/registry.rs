//! ISO 3166-1 registry with the fuzzy lookup used as the resolver's
//! second tier.

use crate::subdivision::SUBDIVISIONS;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Lowercase alpha-2 code.
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
}

impl Country {
    const fn new(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> Self {
        Self {
            alpha2,
            alpha3,
            name,
            official_name: None,
            common_name: None,
        }
    }

    const fn official(mut self, official_name: &'static str) -> Self {
        self.official_name = Some(official_name);
        self
    }

    const fn common(mut self, common_name: &'static str) -> Self {
        self.common_name = Some(common_name);
        self
    }

    /// Registry name, official name and common name, in that order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.name), self.official_name, self.common_name]
            .into_iter()
            .flatten()
    }
}

/// Score for an exact match on any code or name.
const EXACT_MATCH_SCORE: i64 = 50;

/// Score for an exact match on a subdivision name, credited to its country.
const SUBDIVISION_MATCH_SCORE: i64 = 49;

/// Exact, case-insensitive match on alpha-2, alpha-3 or any of the names.
pub fn lookup(query: &str) -> Option<&'static Country> {
    let query = fold_accents(&query.trim().to_lowercase());
    if query.is_empty() {
        return None;
    }

    COUNTRIES.iter().find(|country| {
        [country.alpha2, country.alpha3]
            .into_iter()
            .chain(country.names())
            .any(|candidate| fold_accents(&candidate.to_lowercase()) == query)
    })
}

/// Ranked fuzzy search, scored in four tiers that add up per country:
///
/// 1. exact match on a code or name: 50
/// 2. exact match on a subdivision name: 49
/// 3. a name containing the query: `max(5, 30 - 2 * position)`, first
///    matching name only
/// 4. a subdivision name containing the query: `max(1, 5 - position)`
///
/// Ties break on the alpha-2 code. An empty result means the fuzzy tier
/// found nothing.
pub fn search_fuzzy(query: &str) -> Vec<&'static Country> {
    let query = fold_accents(&query.trim().to_lowercase());
    if query.is_empty() {
        return Vec::new();
    }

    let mut scores: BTreeMap<&'static str, i64> = BTreeMap::new();

    if let Some(country) = lookup(&query) {
        *scores.entry(country.alpha2).or_default() += EXACT_MATCH_SCORE;
    }

    for subdivision in SUBDIVISIONS {
        if fold_accents(&subdivision.name.to_lowercase()) == query {
            *scores.entry(subdivision.country).or_default() += SUBDIVISION_MATCH_SCORE;
        }
    }

    for country in COUNTRIES {
        let position = country
            .names()
            .find_map(|name| char_position(&fold_accents(&name.to_lowercase()), &query));
        if let Some(position) = position {
            *scores.entry(country.alpha2).or_default() += (30 - 2 * position).max(5);
        }
    }

    for subdivision in SUBDIVISIONS {
        let name = fold_accents(&subdivision.name.to_lowercase());
        if let Some(position) = char_position(&name, &query) {
            *scores.entry(subdivision.country).or_default() += (5 - position).max(1);
        }
    }

    let mut ranked: Vec<(&'static str, i64)> = scores.into_iter().collect();
    // BTreeMap iteration is already alpha-2 ordered, so a stable sort keeps ties in code order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .filter_map(|(alpha2, _)| by_alpha2(alpha2))
        .collect()
}

/// Character offset of `needle` in `haystack`.
fn char_position(haystack: &str, needle: &str) -> Option<i64> {
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count() as i64)
}

/// Last-resort scan: the country with a name (registry, official or common)
/// appearing literally in `text`. When several do ("Oman" inside "Romania")
/// the longest name wins.
pub fn find_name_in(text: &str) -> Option<&'static Country> {
    let text = fold_accents(&text.to_lowercase());
    COUNTRIES
        .iter()
        .filter_map(|country| {
            country
                .names()
                .map(|name| fold_accents(&name.to_lowercase()))
                .filter(|name| text.contains(name.as_str()))
                .map(|name| name.chars().count())
                .max()
                .map(|len| (country, len))
        })
        .fold(None, |best: Option<(&'static Country, usize)>, (country, len)| match best {
            Some((_, best_len)) if best_len >= len => best,
            _ => Some((country, len)),
        })
        .map(|(country, _)| country)
}

pub fn by_alpha2(alpha2: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.alpha2.eq_ignore_ascii_case(alpha2))
}

/// Strips the diacritics that show up in country names and common
/// profile locations. Other characters pass through unchanged.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
            'Ç' => 'C',
            'È' | 'É' | 'Ê' | 'Ë' => 'E',
            'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
            'Ñ' => 'N',
            'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
            'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
            'Ý' => 'Y',
            other => other,
        })
        .collect()
}

pub static COUNTRIES: &[Country] = &[
    Country::new("ad", "AND", "Andorra").official("Principality of Andorra"),
    Country::new("ae", "ARE", "United Arab Emirates"),
    Country::new("af", "AFG", "Afghanistan").official("Islamic Republic of Afghanistan"),
    Country::new("ag", "ATG", "Antigua and Barbuda"),
    Country::new("ai", "AIA", "Anguilla"),
    Country::new("al", "ALB", "Albania").official("Republic of Albania"),
    Country::new("am", "ARM", "Armenia").official("Republic of Armenia"),
    Country::new("ao", "AGO", "Angola").official("Republic of Angola"),
    Country::new("aq", "ATA", "Antarctica"),
    Country::new("ar", "ARG", "Argentina").official("Argentine Republic"),
    Country::new("as", "ASM", "American Samoa"),
    Country::new("at", "AUT", "Austria").official("Republic of Austria"),
    Country::new("au", "AUS", "Australia"),
    Country::new("aw", "ABW", "Aruba"),
    Country::new("ax", "ALA", "Åland Islands"),
    Country::new("az", "AZE", "Azerbaijan").official("Republic of Azerbaijan"),
    Country::new("ba", "BIH", "Bosnia and Herzegovina").official("Republic of Bosnia and Herzegovina"),
    Country::new("bb", "BRB", "Barbados"),
    Country::new("bd", "BGD", "Bangladesh").official("People's Republic of Bangladesh"),
    Country::new("be", "BEL", "Belgium").official("Kingdom of Belgium"),
    Country::new("bf", "BFA", "Burkina Faso"),
    Country::new("bg", "BGR", "Bulgaria").official("Republic of Bulgaria"),
    Country::new("bh", "BHR", "Bahrain").official("Kingdom of Bahrain"),
    Country::new("bi", "BDI", "Burundi").official("Republic of Burundi"),
    Country::new("bj", "BEN", "Benin").official("Republic of Benin"),
    Country::new("bl", "BLM", "Saint Barthélemy"),
    Country::new("bm", "BMU", "Bermuda"),
    Country::new("bn", "BRN", "Brunei Darussalam"),
    Country::new("bo", "BOL", "Bolivia, Plurinational State of").official("Plurinational State of Bolivia").common("Bolivia"),
    Country::new("bq", "BES", "Bonaire, Sint Eustatius and Saba"),
    Country::new("br", "BRA", "Brazil").official("Federative Republic of Brazil"),
    Country::new("bs", "BHS", "Bahamas").official("Commonwealth of the Bahamas"),
    Country::new("bt", "BTN", "Bhutan").official("Kingdom of Bhutan"),
    Country::new("bv", "BVT", "Bouvet Island"),
    Country::new("bw", "BWA", "Botswana").official("Republic of Botswana"),
    Country::new("by", "BLR", "Belarus").official("Republic of Belarus"),
    Country::new("bz", "BLZ", "Belize"),
    Country::new("ca", "CAN", "Canada"),
    Country::new("cc", "CCK", "Cocos (Keeling) Islands"),
    Country::new("cd", "COD", "Congo, The Democratic Republic of the"),
    Country::new("cf", "CAF", "Central African Republic"),
    Country::new("cg", "COG", "Congo").official("Republic of the Congo"),
    Country::new("ch", "CHE", "Switzerland").official("Swiss Confederation"),
    Country::new("ci", "CIV", "Côte d'Ivoire").official("Republic of Côte d'Ivoire"),
    Country::new("ck", "COK", "Cook Islands"),
    Country::new("cl", "CHL", "Chile").official("Republic of Chile"),
    Country::new("cm", "CMR", "Cameroon").official("Republic of Cameroon"),
    Country::new("cn", "CHN", "China").official("People's Republic of China"),
    Country::new("co", "COL", "Colombia").official("Republic of Colombia"),
    Country::new("cr", "CRI", "Costa Rica").official("Republic of Costa Rica"),
    Country::new("cu", "CUB", "Cuba").official("Republic of Cuba"),
    Country::new("cv", "CPV", "Cabo Verde").official("Republic of Cabo Verde"),
    Country::new("cw", "CUW", "Curaçao"),
    Country::new("cx", "CXR", "Christmas Island"),
    Country::new("cy", "CYP", "Cyprus").official("Republic of Cyprus"),
    Country::new("cz", "CZE", "Czechia").official("Czech Republic"),
    Country::new("de", "DEU", "Germany").official("Federal Republic of Germany"),
    Country::new("dj", "DJI", "Djibouti").official("Republic of Djibouti"),
    Country::new("dk", "DNK", "Denmark").official("Kingdom of Denmark"),
    Country::new("dm", "DMA", "Dominica").official("Commonwealth of Dominica"),
    Country::new("do", "DOM", "Dominican Republic"),
    Country::new("dz", "DZA", "Algeria").official("People's Democratic Republic of Algeria"),
    Country::new("ec", "ECU", "Ecuador").official("Republic of Ecuador"),
    Country::new("ee", "EST", "Estonia").official("Republic of Estonia"),
    Country::new("eg", "EGY", "Egypt").official("Arab Republic of Egypt"),
    Country::new("eh", "ESH", "Western Sahara"),
    Country::new("er", "ERI", "Eritrea").official("the State of Eritrea"),
    Country::new("es", "ESP", "Spain").official("Kingdom of Spain"),
    Country::new("et", "ETH", "Ethiopia").official("Federal Democratic Republic of Ethiopia"),
    Country::new("fi", "FIN", "Finland").official("Republic of Finland"),
    Country::new("fj", "FJI", "Fiji").official("Republic of Fiji"),
    Country::new("fk", "FLK", "Falkland Islands (Malvinas)"),
    Country::new("fm", "FSM", "Micronesia, Federated States of").official("Federated States of Micronesia"),
    Country::new("fo", "FRO", "Faroe Islands"),
    Country::new("fr", "FRA", "France").official("French Republic"),
    Country::new("ga", "GAB", "Gabon").official("Gabonese Republic"),
    Country::new("gb", "GBR", "United Kingdom").official("United Kingdom of Great Britain and Northern Ireland"),
    Country::new("gd", "GRD", "Grenada"),
    Country::new("ge", "GEO", "Georgia"),
    Country::new("gf", "GUF", "French Guiana"),
    Country::new("gg", "GGY", "Guernsey"),
    Country::new("gh", "GHA", "Ghana").official("Republic of Ghana"),
    Country::new("gi", "GIB", "Gibraltar"),
    Country::new("gl", "GRL", "Greenland"),
    Country::new("gm", "GMB", "Gambia").official("Republic of the Gambia"),
    Country::new("gn", "GIN", "Guinea").official("Republic of Guinea"),
    Country::new("gp", "GLP", "Guadeloupe"),
    Country::new("gq", "GNQ", "Equatorial Guinea").official("Republic of Equatorial Guinea"),
    Country::new("gr", "GRC", "Greece").official("Hellenic Republic"),
    Country::new("gs", "SGS", "South Georgia and the South Sandwich Islands"),
    Country::new("gt", "GTM", "Guatemala").official("Republic of Guatemala"),
    Country::new("gu", "GUM", "Guam"),
    Country::new("gw", "GNB", "Guinea-Bissau").official("Republic of Guinea-Bissau"),
    Country::new("gy", "GUY", "Guyana").official("Republic of Guyana"),
    Country::new("hk", "HKG", "Hong Kong").official("Hong Kong Special Administrative Region of China"),
    Country::new("hm", "HMD", "Heard Island and McDonald Islands"),
    Country::new("hn", "HND", "Honduras").official("Republic of Honduras"),
    Country::new("hr", "HRV", "Croatia").official("Republic of Croatia"),
    Country::new("ht", "HTI", "Haiti").official("Republic of Haiti"),
    Country::new("hu", "HUN", "Hungary"),
    Country::new("id", "IDN", "Indonesia").official("Republic of Indonesia"),
    Country::new("ie", "IRL", "Ireland"),
    Country::new("il", "ISR", "Israel").official("State of Israel"),
    Country::new("im", "IMN", "Isle of Man"),
    Country::new("in", "IND", "India").official("Republic of India"),
    Country::new("io", "IOT", "British Indian Ocean Territory"),
    Country::new("iq", "IRQ", "Iraq").official("Republic of Iraq"),
    Country::new("ir", "IRN", "Iran, Islamic Republic of").official("Islamic Republic of Iran").common("Iran"),
    Country::new("is", "ISL", "Iceland").official("Republic of Iceland"),
    Country::new("it", "ITA", "Italy").official("Italian Republic"),
    Country::new("je", "JEY", "Jersey"),
    Country::new("jm", "JAM", "Jamaica"),
    Country::new("jo", "JOR", "Jordan").official("Hashemite Kingdom of Jordan"),
    Country::new("jp", "JPN", "Japan"),
    Country::new("ke", "KEN", "Kenya").official("Republic of Kenya"),
    Country::new("kg", "KGZ", "Kyrgyzstan").official("Kyrgyz Republic"),
    Country::new("kh", "KHM", "Cambodia").official("Kingdom of Cambodia"),
    Country::new("ki", "KIR", "Kiribati").official("Republic of Kiribati"),
    Country::new("km", "COM", "Comoros").official("Union of the Comoros"),
    Country::new("kn", "KNA", "Saint Kitts and Nevis"),
    Country::new("kp", "PRK", "Korea, Democratic People's Republic of").official("Democratic People's Republic of Korea").common("North Korea"),
    Country::new("kr", "KOR", "Korea, Republic of").common("South Korea"),
    Country::new("kw", "KWT", "Kuwait").official("State of Kuwait"),
    Country::new("ky", "CYM", "Cayman Islands"),
    Country::new("kz", "KAZ", "Kazakhstan").official("Republic of Kazakhstan"),
    Country::new("la", "LAO", "Lao People's Democratic Republic").common("Laos"),
    Country::new("lb", "LBN", "Lebanon").official("Lebanese Republic"),
    Country::new("lc", "LCA", "Saint Lucia"),
    Country::new("li", "LIE", "Liechtenstein").official("Principality of Liechtenstein"),
    Country::new("lk", "LKA", "Sri Lanka").official("Democratic Socialist Republic of Sri Lanka"),
    Country::new("lr", "LBR", "Liberia").official("Republic of Liberia"),
    Country::new("ls", "LSO", "Lesotho").official("Kingdom of Lesotho"),
    Country::new("lt", "LTU", "Lithuania").official("Republic of Lithuania"),
    Country::new("lu", "LUX", "Luxembourg").official("Grand Duchy of Luxembourg"),
    Country::new("lv", "LVA", "Latvia").official("Republic of Latvia"),
    Country::new("ly", "LBY", "Libya"),
    Country::new("ma", "MAR", "Morocco").official("Kingdom of Morocco"),
    Country::new("mc", "MCO", "Monaco").official("Principality of Monaco"),
    Country::new("md", "MDA", "Moldova, Republic of").official("Republic of Moldova").common("Moldova"),
    Country::new("me", "MNE", "Montenegro"),
    Country::new("mf", "MAF", "Saint Martin (French part)"),
    Country::new("mg", "MDG", "Madagascar").official("Republic of Madagascar"),
    Country::new("mh", "MHL", "Marshall Islands").official("Republic of the Marshall Islands"),
    Country::new("mk", "MKD", "North Macedonia").official("Republic of North Macedonia"),
    Country::new("ml", "MLI", "Mali").official("Republic of Mali"),
    Country::new("mm", "MMR", "Myanmar").official("Republic of Myanmar"),
    Country::new("mn", "MNG", "Mongolia"),
    Country::new("mo", "MAC", "Macao").official("Macao Special Administrative Region of China"),
    Country::new("mp", "MNP", "Northern Mariana Islands").official("Commonwealth of the Northern Mariana Islands"),
    Country::new("mq", "MTQ", "Martinique"),
    Country::new("mr", "MRT", "Mauritania").official("Islamic Republic of Mauritania"),
    Country::new("ms", "MSR", "Montserrat"),
    Country::new("mt", "MLT", "Malta").official("Republic of Malta"),
    Country::new("mu", "MUS", "Mauritius").official("Republic of Mauritius"),
    Country::new("mv", "MDV", "Maldives").official("Republic of Maldives"),
    Country::new("mw", "MWI", "Malawi").official("Republic of Malawi"),
    Country::new("mx", "MEX", "Mexico").official("United Mexican States"),
    Country::new("my", "MYS", "Malaysia"),
    Country::new("mz", "MOZ", "Mozambique").official("Republic of Mozambique"),
    Country::new("na", "NAM", "Namibia").official("Republic of Namibia"),
    Country::new("nc", "NCL", "New Caledonia"),
    Country::new("ne", "NER", "Niger").official("Republic of the Niger"),
    Country::new("nf", "NFK", "Norfolk Island"),
    Country::new("ng", "NGA", "Nigeria").official("Federal Republic of Nigeria"),
    Country::new("ni", "NIC", "Nicaragua").official("Republic of Nicaragua"),
    Country::new("nl", "NLD", "Netherlands").official("Kingdom of the Netherlands"),
    Country::new("no", "NOR", "Norway").official("Kingdom of Norway"),
    Country::new("np", "NPL", "Nepal").official("Federal Democratic Republic of Nepal"),
    Country::new("nr", "NRU", "Nauru").official("Republic of Nauru"),
    Country::new("nu", "NIU", "Niue"),
    Country::new("nz", "NZL", "New Zealand"),
    Country::new("om", "OMN", "Oman").official("Sultanate of Oman"),
    Country::new("pa", "PAN", "Panama").official("Republic of Panama"),
    Country::new("pe", "PER", "Peru").official("Republic of Peru"),
    Country::new("pf", "PYF", "French Polynesia"),
    Country::new("pg", "PNG", "Papua New Guinea").official("Independent State of Papua New Guinea"),
    Country::new("ph", "PHL", "Philippines").official("Republic of the Philippines"),
    Country::new("pk", "PAK", "Pakistan").official("Islamic Republic of Pakistan"),
    Country::new("pl", "POL", "Poland").official("Republic of Poland"),
    Country::new("pm", "SPM", "Saint Pierre and Miquelon"),
    Country::new("pn", "PCN", "Pitcairn"),
    Country::new("pr", "PRI", "Puerto Rico"),
    Country::new("ps", "PSE", "Palestine, State of").official("the State of Palestine"),
    Country::new("pt", "PRT", "Portugal").official("Portuguese Republic"),
    Country::new("pw", "PLW", "Palau").official("Republic of Palau"),
    Country::new("py", "PRY", "Paraguay").official("Republic of Paraguay"),
    Country::new("qa", "QAT", "Qatar").official("State of Qatar"),
    Country::new("re", "REU", "Réunion"),
    Country::new("ro", "ROU", "Romania"),
    Country::new("rs", "SRB", "Serbia").official("Republic of Serbia"),
    Country::new("ru", "RUS", "Russian Federation").common("Russia"),
    Country::new("rw", "RWA", "Rwanda").official("Rwandese Republic"),
    Country::new("sa", "SAU", "Saudi Arabia").official("Kingdom of Saudi Arabia"),
    Country::new("sb", "SLB", "Solomon Islands"),
    Country::new("sc", "SYC", "Seychelles").official("Republic of Seychelles"),
    Country::new("sd", "SDN", "Sudan").official("Republic of the Sudan"),
    Country::new("se", "SWE", "Sweden").official("Kingdom of Sweden"),
    Country::new("sg", "SGP", "Singapore").official("Republic of Singapore"),
    Country::new("sh", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    Country::new("si", "SVN", "Slovenia").official("Republic of Slovenia"),
    Country::new("sj", "SJM", "Svalbard and Jan Mayen"),
    Country::new("sk", "SVK", "Slovakia").official("Slovak Republic"),
    Country::new("sl", "SLE", "Sierra Leone").official("Republic of Sierra Leone"),
    Country::new("sm", "SMR", "San Marino").official("Republic of San Marino"),
    Country::new("sn", "SEN", "Senegal").official("Republic of Senegal"),
    Country::new("so", "SOM", "Somalia").official("Federal Republic of Somalia"),
    Country::new("sr", "SUR", "Suriname").official("Republic of Suriname"),
    Country::new("ss", "SSD", "South Sudan").official("Republic of South Sudan"),
    Country::new("st", "STP", "Sao Tome and Principe").official("Democratic Republic of Sao Tome and Principe"),
    Country::new("sv", "SLV", "El Salvador").official("Republic of El Salvador"),
    Country::new("sx", "SXM", "Sint Maarten (Dutch part)"),
    Country::new("sy", "SYR", "Syrian Arab Republic").common("Syria"),
    Country::new("sz", "SWZ", "Eswatini").official("Kingdom of Eswatini"),
    Country::new("tc", "TCA", "Turks and Caicos Islands"),
    Country::new("td", "TCD", "Chad").official("Republic of Chad"),
    Country::new("tf", "ATF", "French Southern Territories"),
    Country::new("tg", "TGO", "Togo").official("Togolese Republic"),
    Country::new("th", "THA", "Thailand").official("Kingdom of Thailand"),
    Country::new("tj", "TJK", "Tajikistan").official("Republic of Tajikistan"),
    Country::new("tk", "TKL", "Tokelau"),
    Country::new("tl", "TLS", "Timor-Leste").official("Democratic Republic of Timor-Leste"),
    Country::new("tm", "TKM", "Turkmenistan"),
    Country::new("tn", "TUN", "Tunisia").official("Republic of Tunisia"),
    Country::new("to", "TON", "Tonga").official("Kingdom of Tonga"),
    Country::new("tr", "TUR", "Türkiye").official("Republic of Türkiye"),
    Country::new("tt", "TTO", "Trinidad and Tobago").official("Republic of Trinidad and Tobago"),
    Country::new("tv", "TUV", "Tuvalu"),
    Country::new("tw", "TWN", "Taiwan, Province of China").official("Taiwan, Province of China").common("Taiwan"),
    Country::new("tz", "TZA", "Tanzania, United Republic of").official("United Republic of Tanzania").common("Tanzania"),
    Country::new("ua", "UKR", "Ukraine"),
    Country::new("ug", "UGA", "Uganda").official("Republic of Uganda"),
    Country::new("um", "UMI", "United States Minor Outlying Islands"),
    Country::new("us", "USA", "United States").official("United States of America"),
    Country::new("uy", "URY", "Uruguay").official("Eastern Republic of Uruguay"),
    Country::new("uz", "UZB", "Uzbekistan").official("Republic of Uzbekistan"),
    Country::new("va", "VAT", "Holy See (Vatican City State)"),
    Country::new("vc", "VCT", "Saint Vincent and the Grenadines"),
    Country::new("ve", "VEN", "Venezuela, Bolivarian Republic of").official("Bolivarian Republic of Venezuela").common("Venezuela"),
    Country::new("vg", "VGB", "Virgin Islands, British").official("British Virgin Islands"),
    Country::new("vi", "VIR", "Virgin Islands, U.S.").official("Virgin Islands of the United States"),
    Country::new("vn", "VNM", "Viet Nam").official("Socialist Republic of Viet Nam").common("Vietnam"),
    Country::new("vu", "VUT", "Vanuatu").official("Republic of Vanuatu"),
    Country::new("wf", "WLF", "Wallis and Futuna"),
    Country::new("ws", "WSM", "Samoa").official("Independent State of Samoa"),
    Country::new("ye", "YEM", "Yemen").official("Republic of Yemen"),
    Country::new("yt", "MYT", "Mayotte"),
    Country::new("za", "ZAF", "South Africa").official("Republic of South Africa"),
    Country::new("zm", "ZMB", "Zambia").official("Republic of Zambia"),
    Country::new("zw", "ZWE", "Zimbabwe").official("Republic of Zimbabwe"),
];
