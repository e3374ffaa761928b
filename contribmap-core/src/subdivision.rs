//! First-level ISO 3166-2 subdivisions that show up in profile locations.
//!
//! States, provinces and regions of the countries most GitHub profiles name,
//! under their English name and, where it differs, the local one. Used by
//! the registry's fuzzy search so "Texas" or "Bavaria" still places a
//! contributor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    /// Lowercase alpha-2 code of the parent country.
    pub country: &'static str,
    pub name: &'static str,
}

impl Subdivision {
    const fn new(country: &'static str, name: &'static str) -> Self {
        Self { country, name }
    }
}

pub static SUBDIVISIONS: &[Subdivision] = &[
    Subdivision::new("us", "Alabama"),
    Subdivision::new("us", "Alaska"),
    Subdivision::new("us", "Arizona"),
    Subdivision::new("us", "Arkansas"),
    Subdivision::new("us", "California"),
    Subdivision::new("us", "Colorado"),
    Subdivision::new("us", "Connecticut"),
    Subdivision::new("us", "Delaware"),
    Subdivision::new("us", "District of Columbia"),
    Subdivision::new("us", "Florida"),
    Subdivision::new("us", "Georgia"),
    Subdivision::new("us", "Hawaii"),
    Subdivision::new("us", "Idaho"),
    Subdivision::new("us", "Illinois"),
    Subdivision::new("us", "Indiana"),
    Subdivision::new("us", "Iowa"),
    Subdivision::new("us", "Kansas"),
    Subdivision::new("us", "Kentucky"),
    Subdivision::new("us", "Louisiana"),
    Subdivision::new("us", "Maine"),
    Subdivision::new("us", "Maryland"),
    Subdivision::new("us", "Massachusetts"),
    Subdivision::new("us", "Michigan"),
    Subdivision::new("us", "Minnesota"),
    Subdivision::new("us", "Mississippi"),
    Subdivision::new("us", "Missouri"),
    Subdivision::new("us", "Montana"),
    Subdivision::new("us", "Nebraska"),
    Subdivision::new("us", "Nevada"),
    Subdivision::new("us", "New Hampshire"),
    Subdivision::new("us", "New Jersey"),
    Subdivision::new("us", "New Mexico"),
    Subdivision::new("us", "New York"),
    Subdivision::new("us", "North Carolina"),
    Subdivision::new("us", "North Dakota"),
    Subdivision::new("us", "Ohio"),
    Subdivision::new("us", "Oklahoma"),
    Subdivision::new("us", "Oregon"),
    Subdivision::new("us", "Pennsylvania"),
    Subdivision::new("us", "Rhode Island"),
    Subdivision::new("us", "South Carolina"),
    Subdivision::new("us", "South Dakota"),
    Subdivision::new("us", "Tennessee"),
    Subdivision::new("us", "Texas"),
    Subdivision::new("us", "Utah"),
    Subdivision::new("us", "Vermont"),
    Subdivision::new("us", "Virginia"),
    Subdivision::new("us", "Washington"),
    Subdivision::new("us", "West Virginia"),
    Subdivision::new("us", "Wisconsin"),
    Subdivision::new("us", "Wyoming"),
    Subdivision::new("ca", "Alberta"),
    Subdivision::new("ca", "British Columbia"),
    Subdivision::new("ca", "Manitoba"),
    Subdivision::new("ca", "New Brunswick"),
    Subdivision::new("ca", "Newfoundland and Labrador"),
    Subdivision::new("ca", "Nova Scotia"),
    Subdivision::new("ca", "Ontario"),
    Subdivision::new("ca", "Prince Edward Island"),
    Subdivision::new("ca", "Québec"),
    Subdivision::new("ca", "Saskatchewan"),
    Subdivision::new("ca", "Northwest Territories"),
    Subdivision::new("ca", "Nunavut"),
    Subdivision::new("ca", "Yukon"),
    Subdivision::new("au", "New South Wales"),
    Subdivision::new("au", "Victoria"),
    Subdivision::new("au", "Queensland"),
    Subdivision::new("au", "South Australia"),
    Subdivision::new("au", "Western Australia"),
    Subdivision::new("au", "Tasmania"),
    Subdivision::new("au", "Northern Territory"),
    Subdivision::new("au", "Australian Capital Territory"),
    Subdivision::new("de", "Baden-Württemberg"),
    Subdivision::new("de", "Bayern"),
    Subdivision::new("de", "Bavaria"),
    Subdivision::new("de", "Berlin"),
    Subdivision::new("de", "Brandenburg"),
    Subdivision::new("de", "Bremen"),
    Subdivision::new("de", "Hamburg"),
    Subdivision::new("de", "Hessen"),
    Subdivision::new("de", "Hesse"),
    Subdivision::new("de", "Niedersachsen"),
    Subdivision::new("de", "Lower Saxony"),
    Subdivision::new("de", "Mecklenburg-Vorpommern"),
    Subdivision::new("de", "Mecklenburg-Western Pomerania"),
    Subdivision::new("de", "Nordrhein-Westfalen"),
    Subdivision::new("de", "North Rhine-Westphalia"),
    Subdivision::new("de", "Rheinland-Pfalz"),
    Subdivision::new("de", "Rhineland-Palatinate"),
    Subdivision::new("de", "Saarland"),
    Subdivision::new("de", "Sachsen"),
    Subdivision::new("de", "Saxony"),
    Subdivision::new("de", "Sachsen-Anhalt"),
    Subdivision::new("de", "Saxony-Anhalt"),
    Subdivision::new("de", "Schleswig-Holstein"),
    Subdivision::new("de", "Thüringen"),
    Subdivision::new("de", "Thuringia"),
    Subdivision::new("gb", "England"),
    Subdivision::new("gb", "Scotland"),
    Subdivision::new("gb", "Wales"),
    Subdivision::new("gb", "Northern Ireland"),
    Subdivision::new("in", "Andhra Pradesh"),
    Subdivision::new("in", "Arunachal Pradesh"),
    Subdivision::new("in", "Assam"),
    Subdivision::new("in", "Bihar"),
    Subdivision::new("in", "Chhattisgarh"),
    Subdivision::new("in", "Goa"),
    Subdivision::new("in", "Gujarat"),
    Subdivision::new("in", "Haryana"),
    Subdivision::new("in", "Himachal Pradesh"),
    Subdivision::new("in", "Jharkhand"),
    Subdivision::new("in", "Karnataka"),
    Subdivision::new("in", "Kerala"),
    Subdivision::new("in", "Madhya Pradesh"),
    Subdivision::new("in", "Maharashtra"),
    Subdivision::new("in", "Manipur"),
    Subdivision::new("in", "Meghalaya"),
    Subdivision::new("in", "Mizoram"),
    Subdivision::new("in", "Nagaland"),
    Subdivision::new("in", "Odisha"),
    Subdivision::new("in", "Punjab"),
    Subdivision::new("in", "Rajasthan"),
    Subdivision::new("in", "Sikkim"),
    Subdivision::new("in", "Tamil Nadu"),
    Subdivision::new("in", "Telangana"),
    Subdivision::new("in", "Tripura"),
    Subdivision::new("in", "Uttar Pradesh"),
    Subdivision::new("in", "Uttarakhand"),
    Subdivision::new("in", "West Bengal"),
    Subdivision::new("in", "Delhi"),
    Subdivision::new("in", "Jammu and Kashmir"),
    Subdivision::new("in", "Ladakh"),
    Subdivision::new("in", "Puducherry"),
    Subdivision::new("in", "Chandigarh"),
    Subdivision::new("in", "Andaman and Nicobar Islands"),
    Subdivision::new("in", "Lakshadweep"),
    Subdivision::new("in", "Dadra and Nagar Haveli and Daman and Diu"),
    Subdivision::new("br", "Acre"),
    Subdivision::new("br", "Alagoas"),
    Subdivision::new("br", "Amapá"),
    Subdivision::new("br", "Amazonas"),
    Subdivision::new("br", "Bahia"),
    Subdivision::new("br", "Ceará"),
    Subdivision::new("br", "Distrito Federal"),
    Subdivision::new("br", "Espírito Santo"),
    Subdivision::new("br", "Goiás"),
    Subdivision::new("br", "Maranhão"),
    Subdivision::new("br", "Mato Grosso"),
    Subdivision::new("br", "Mato Grosso do Sul"),
    Subdivision::new("br", "Minas Gerais"),
    Subdivision::new("br", "Pará"),
    Subdivision::new("br", "Paraíba"),
    Subdivision::new("br", "Paraná"),
    Subdivision::new("br", "Pernambuco"),
    Subdivision::new("br", "Piauí"),
    Subdivision::new("br", "Rio de Janeiro"),
    Subdivision::new("br", "Rio Grande do Norte"),
    Subdivision::new("br", "Rio Grande do Sul"),
    Subdivision::new("br", "Rondônia"),
    Subdivision::new("br", "Roraima"),
    Subdivision::new("br", "Santa Catarina"),
    Subdivision::new("br", "São Paulo"),
    Subdivision::new("br", "Sergipe"),
    Subdivision::new("br", "Tocantins"),
    Subdivision::new("cn", "Beijing"),
    Subdivision::new("cn", "Tianjin"),
    Subdivision::new("cn", "Hebei"),
    Subdivision::new("cn", "Shanxi"),
    Subdivision::new("cn", "Nei Mongol"),
    Subdivision::new("cn", "Inner Mongolia"),
    Subdivision::new("cn", "Liaoning"),
    Subdivision::new("cn", "Jilin"),
    Subdivision::new("cn", "Heilongjiang"),
    Subdivision::new("cn", "Shanghai"),
    Subdivision::new("cn", "Jiangsu"),
    Subdivision::new("cn", "Zhejiang"),
    Subdivision::new("cn", "Anhui"),
    Subdivision::new("cn", "Fujian"),
    Subdivision::new("cn", "Jiangxi"),
    Subdivision::new("cn", "Shandong"),
    Subdivision::new("cn", "Henan"),
    Subdivision::new("cn", "Hubei"),
    Subdivision::new("cn", "Hunan"),
    Subdivision::new("cn", "Guangdong"),
    Subdivision::new("cn", "Guangxi"),
    Subdivision::new("cn", "Hainan"),
    Subdivision::new("cn", "Chongqing"),
    Subdivision::new("cn", "Sichuan"),
    Subdivision::new("cn", "Guizhou"),
    Subdivision::new("cn", "Yunnan"),
    Subdivision::new("cn", "Xizang"),
    Subdivision::new("cn", "Tibet"),
    Subdivision::new("cn", "Shaanxi"),
    Subdivision::new("cn", "Gansu"),
    Subdivision::new("cn", "Qinghai"),
    Subdivision::new("cn", "Ningxia"),
    Subdivision::new("cn", "Xinjiang"),
    Subdivision::new("jp", "Hokkaido"),
    Subdivision::new("jp", "Aomori"),
    Subdivision::new("jp", "Iwate"),
    Subdivision::new("jp", "Miyagi"),
    Subdivision::new("jp", "Akita"),
    Subdivision::new("jp", "Yamagata"),
    Subdivision::new("jp", "Fukushima"),
    Subdivision::new("jp", "Ibaraki"),
    Subdivision::new("jp", "Tochigi"),
    Subdivision::new("jp", "Gunma"),
    Subdivision::new("jp", "Saitama"),
    Subdivision::new("jp", "Chiba"),
    Subdivision::new("jp", "Tokyo"),
    Subdivision::new("jp", "Kanagawa"),
    Subdivision::new("jp", "Niigata"),
    Subdivision::new("jp", "Toyama"),
    Subdivision::new("jp", "Ishikawa"),
    Subdivision::new("jp", "Fukui"),
    Subdivision::new("jp", "Yamanashi"),
    Subdivision::new("jp", "Nagano"),
    Subdivision::new("jp", "Gifu"),
    Subdivision::new("jp", "Shizuoka"),
    Subdivision::new("jp", "Aichi"),
    Subdivision::new("jp", "Mie"),
    Subdivision::new("jp", "Shiga"),
    Subdivision::new("jp", "Kyoto"),
    Subdivision::new("jp", "Osaka"),
    Subdivision::new("jp", "Hyogo"),
    Subdivision::new("jp", "Nara"),
    Subdivision::new("jp", "Wakayama"),
    Subdivision::new("jp", "Tottori"),
    Subdivision::new("jp", "Shimane"),
    Subdivision::new("jp", "Okayama"),
    Subdivision::new("jp", "Hiroshima"),
    Subdivision::new("jp", "Yamaguchi"),
    Subdivision::new("jp", "Tokushima"),
    Subdivision::new("jp", "Kagawa"),
    Subdivision::new("jp", "Ehime"),
    Subdivision::new("jp", "Kochi"),
    Subdivision::new("jp", "Fukuoka"),
    Subdivision::new("jp", "Saga"),
    Subdivision::new("jp", "Nagasaki"),
    Subdivision::new("jp", "Kumamoto"),
    Subdivision::new("jp", "Oita"),
    Subdivision::new("jp", "Miyazaki"),
    Subdivision::new("jp", "Kagoshima"),
    Subdivision::new("jp", "Okinawa"),
    Subdivision::new("es", "Andalucía"),
    Subdivision::new("es", "Andalusia"),
    Subdivision::new("es", "Aragón"),
    Subdivision::new("es", "Asturias"),
    Subdivision::new("es", "Illes Balears"),
    Subdivision::new("es", "Balearic Islands"),
    Subdivision::new("es", "Canarias"),
    Subdivision::new("es", "Canary Islands"),
    Subdivision::new("es", "Cantabria"),
    Subdivision::new("es", "Castilla y León"),
    Subdivision::new("es", "Castilla-La Mancha"),
    Subdivision::new("es", "Catalunya"),
    Subdivision::new("es", "Catalonia"),
    Subdivision::new("es", "Comunitat Valenciana"),
    Subdivision::new("es", "Valencian Community"),
    Subdivision::new("es", "Extremadura"),
    Subdivision::new("es", "Galicia"),
    Subdivision::new("es", "Comunidad de Madrid"),
    Subdivision::new("es", "Madrid"),
    Subdivision::new("es", "Región de Murcia"),
    Subdivision::new("es", "Murcia"),
    Subdivision::new("es", "Navarra"),
    Subdivision::new("es", "País Vasco"),
    Subdivision::new("es", "Basque Country"),
    Subdivision::new("es", "La Rioja"),
    Subdivision::new("es", "Ceuta"),
    Subdivision::new("es", "Melilla"),
    Subdivision::new("it", "Abruzzo"),
    Subdivision::new("it", "Basilicata"),
    Subdivision::new("it", "Calabria"),
    Subdivision::new("it", "Campania"),
    Subdivision::new("it", "Emilia-Romagna"),
    Subdivision::new("it", "Friuli Venezia Giulia"),
    Subdivision::new("it", "Lazio"),
    Subdivision::new("it", "Liguria"),
    Subdivision::new("it", "Lombardia"),
    Subdivision::new("it", "Lombardy"),
    Subdivision::new("it", "Marche"),
    Subdivision::new("it", "Molise"),
    Subdivision::new("it", "Piemonte"),
    Subdivision::new("it", "Piedmont"),
    Subdivision::new("it", "Puglia"),
    Subdivision::new("it", "Apulia"),
    Subdivision::new("it", "Sardegna"),
    Subdivision::new("it", "Sardinia"),
    Subdivision::new("it", "Sicilia"),
    Subdivision::new("it", "Sicily"),
    Subdivision::new("it", "Toscana"),
    Subdivision::new("it", "Tuscany"),
    Subdivision::new("it", "Trentino-Alto Adige"),
    Subdivision::new("it", "Umbria"),
    Subdivision::new("it", "Valle d'Aosta"),
    Subdivision::new("it", "Veneto"),
    Subdivision::new("fr", "Auvergne-Rhône-Alpes"),
    Subdivision::new("fr", "Bourgogne-Franche-Comté"),
    Subdivision::new("fr", "Bretagne"),
    Subdivision::new("fr", "Brittany"),
    Subdivision::new("fr", "Centre-Val de Loire"),
    Subdivision::new("fr", "Corse"),
    Subdivision::new("fr", "Corsica"),
    Subdivision::new("fr", "Grand Est"),
    Subdivision::new("fr", "Hauts-de-France"),
    Subdivision::new("fr", "Île-de-France"),
    Subdivision::new("fr", "Normandie"),
    Subdivision::new("fr", "Normandy"),
    Subdivision::new("fr", "Nouvelle-Aquitaine"),
    Subdivision::new("fr", "Occitanie"),
    Subdivision::new("fr", "Pays de la Loire"),
    Subdivision::new("fr", "Provence-Alpes-Côte d'Azur"),
    Subdivision::new("nl", "Drenthe"),
    Subdivision::new("nl", "Flevoland"),
    Subdivision::new("nl", "Fryslân"),
    Subdivision::new("nl", "Friesland"),
    Subdivision::new("nl", "Gelderland"),
    Subdivision::new("nl", "Groningen"),
    Subdivision::new("nl", "Limburg"),
    Subdivision::new("nl", "Noord-Brabant"),
    Subdivision::new("nl", "North Brabant"),
    Subdivision::new("nl", "Noord-Holland"),
    Subdivision::new("nl", "North Holland"),
    Subdivision::new("nl", "Overijssel"),
    Subdivision::new("nl", "Utrecht"),
    Subdivision::new("nl", "Zeeland"),
    Subdivision::new("nl", "Zuid-Holland"),
    Subdivision::new("nl", "South Holland"),
    Subdivision::new("be", "Brussels-Capital Region"),
    Subdivision::new("be", "Vlaanderen"),
    Subdivision::new("be", "Flanders"),
    Subdivision::new("be", "Wallonie"),
    Subdivision::new("be", "Wallonia"),
    Subdivision::new("ch", "Zürich"),
    Subdivision::new("ch", "Bern"),
    Subdivision::new("ch", "Luzern"),
    Subdivision::new("ch", "Lucerne"),
    Subdivision::new("ch", "Uri"),
    Subdivision::new("ch", "Schwyz"),
    Subdivision::new("ch", "Obwalden"),
    Subdivision::new("ch", "Nidwalden"),
    Subdivision::new("ch", "Glarus"),
    Subdivision::new("ch", "Zug"),
    Subdivision::new("ch", "Fribourg"),
    Subdivision::new("ch", "Solothurn"),
    Subdivision::new("ch", "Basel-Stadt"),
    Subdivision::new("ch", "Basel-Landschaft"),
    Subdivision::new("ch", "Schaffhausen"),
    Subdivision::new("ch", "Appenzell Ausserrhoden"),
    Subdivision::new("ch", "Appenzell Innerrhoden"),
    Subdivision::new("ch", "St. Gallen"),
    Subdivision::new("ch", "Graubünden"),
    Subdivision::new("ch", "Aargau"),
    Subdivision::new("ch", "Thurgau"),
    Subdivision::new("ch", "Ticino"),
    Subdivision::new("ch", "Vaud"),
    Subdivision::new("ch", "Valais"),
    Subdivision::new("ch", "Neuchâtel"),
    Subdivision::new("ch", "Genève"),
    Subdivision::new("ch", "Geneva"),
    Subdivision::new("ch", "Jura"),
    Subdivision::new("at", "Burgenland"),
    Subdivision::new("at", "Kärnten"),
    Subdivision::new("at", "Carinthia"),
    Subdivision::new("at", "Niederösterreich"),
    Subdivision::new("at", "Lower Austria"),
    Subdivision::new("at", "Oberösterreich"),
    Subdivision::new("at", "Upper Austria"),
    Subdivision::new("at", "Salzburg"),
    Subdivision::new("at", "Steiermark"),
    Subdivision::new("at", "Styria"),
    Subdivision::new("at", "Tirol"),
    Subdivision::new("at", "Tyrol"),
    Subdivision::new("at", "Vorarlberg"),
    Subdivision::new("at", "Wien"),
    Subdivision::new("at", "Vienna"),
    Subdivision::new("mx", "Aguascalientes"),
    Subdivision::new("mx", "Baja California"),
    Subdivision::new("mx", "Baja California Sur"),
    Subdivision::new("mx", "Campeche"),
    Subdivision::new("mx", "Chiapas"),
    Subdivision::new("mx", "Chihuahua"),
    Subdivision::new("mx", "Ciudad de México"),
    Subdivision::new("mx", "Mexico City"),
    Subdivision::new("mx", "Coahuila"),
    Subdivision::new("mx", "Colima"),
    Subdivision::new("mx", "Durango"),
    Subdivision::new("mx", "Guanajuato"),
    Subdivision::new("mx", "Guerrero"),
    Subdivision::new("mx", "Hidalgo"),
    Subdivision::new("mx", "Estado de México"),
    Subdivision::new("mx", "Michoacán"),
    Subdivision::new("mx", "Morelos"),
    Subdivision::new("mx", "Nayarit"),
    Subdivision::new("mx", "Nuevo León"),
    Subdivision::new("mx", "Oaxaca"),
    Subdivision::new("mx", "Puebla"),
    Subdivision::new("mx", "Querétaro"),
    Subdivision::new("mx", "Quintana Roo"),
    Subdivision::new("mx", "San Luis Potosí"),
    Subdivision::new("mx", "Sinaloa"),
    Subdivision::new("mx", "Sonora"),
    Subdivision::new("mx", "Tabasco"),
    Subdivision::new("mx", "Tamaulipas"),
    Subdivision::new("mx", "Tlaxcala"),
    Subdivision::new("mx", "Veracruz"),
    Subdivision::new("mx", "Yucatán"),
    Subdivision::new("mx", "Zacatecas"),
    Subdivision::new("ar", "Buenos Aires"),
    Subdivision::new("ar", "Ciudad Autónoma de Buenos Aires"),
    Subdivision::new("ar", "Córdoba"),
    Subdivision::new("ar", "Mendoza"),
    Subdivision::new("ar", "Santa Fe"),
    Subdivision::new("ar", "Tucumán"),
    Subdivision::new("co", "Antioquia"),
    Subdivision::new("co", "Cundinamarca"),
    Subdivision::new("co", "Valle del Cauca"),
    Subdivision::new("co", "Bogotá"),
    Subdivision::new("ng", "Lagos"),
    Subdivision::new("ng", "Federal Capital Territory"),
    Subdivision::new("ng", "Kano"),
    Subdivision::new("ng", "Oyo"),
    Subdivision::new("ng", "Kaduna"),
    Subdivision::new("ng", "Enugu"),
    Subdivision::new("ng", "Ogun"),
    Subdivision::new("ng", "Anambra"),
    Subdivision::new("ng", "Edo"),
    Subdivision::new("kr", "Seoul"),
    Subdivision::new("kr", "Busan"),
    Subdivision::new("kr", "Incheon"),
    Subdivision::new("kr", "Daegu"),
    Subdivision::new("kr", "Daejeon"),
    Subdivision::new("kr", "Gwangju"),
    Subdivision::new("kr", "Ulsan"),
    Subdivision::new("kr", "Sejong"),
    Subdivision::new("kr", "Gyeonggi-do"),
    Subdivision::new("kr", "Gangwon-do"),
    Subdivision::new("kr", "Jeju"),
    Subdivision::new("ua", "Lviv Oblast"),
    Subdivision::new("ua", "Kharkiv Oblast"),
    Subdivision::new("ua", "Odesa Oblast"),
    Subdivision::new("ua", "Dnipropetrovsk Oblast"),
    Subdivision::new("ua", "Kyiv Oblast"),
    Subdivision::new("ua", "Zaporizhzhia Oblast"),
    Subdivision::new("ua", "Vinnytsia Oblast"),
    Subdivision::new("ru", "Moscow Oblast"),
    Subdivision::new("ru", "Saint Petersburg"),
    Subdivision::new("ru", "Tatarstan"),
    Subdivision::new("ru", "Novosibirsk Oblast"),
    Subdivision::new("ru", "Sverdlovsk Oblast"),
    Subdivision::new("id", "Jakarta"),
    Subdivision::new("id", "Jawa Barat"),
    Subdivision::new("id", "West Java"),
    Subdivision::new("id", "Jawa Tengah"),
    Subdivision::new("id", "Central Java"),
    Subdivision::new("id", "Jawa Timur"),
    Subdivision::new("id", "East Java"),
    Subdivision::new("id", "Bali"),
    Subdivision::new("id", "Yogyakarta"),
    Subdivision::new("pk", "Punjab"),
    Subdivision::new("pk", "Sindh"),
    Subdivision::new("pk", "Khyber Pakhtunkhwa"),
    Subdivision::new("pk", "Balochistan"),
    Subdivision::new("pk", "Islamabad"),
    Subdivision::new("za", "Gauteng"),
    Subdivision::new("za", "Western Cape"),
    Subdivision::new("za", "Eastern Cape"),
    Subdivision::new("za", "KwaZulu-Natal"),
    Subdivision::new("za", "Free State"),
    Subdivision::new("za", "Limpopo"),
    Subdivision::new("za", "Mpumalanga"),
    Subdivision::new("za", "Northern Cape"),
    Subdivision::new("ke", "Nairobi City"),
    Subdivision::new("ke", "Mombasa"),
    Subdivision::new("tr", "Istanbul"),
    Subdivision::new("tr", "Ankara"),
    Subdivision::new("tr", "Izmir"),
    Subdivision::new("vn", "Hanoi"),
    Subdivision::new("vn", "Ho Chi Minh City"),
    Subdivision::new("vn", "Da Nang"),
    Subdivision::new("pt", "Lisboa"),
    Subdivision::new("pt", "Lisbon"),
    Subdivision::new("pt", "Porto"),
    Subdivision::new("nz", "Auckland"),
    Subdivision::new("nz", "Wellington"),
    Subdivision::new("nz", "Canterbury"),
];
