use crate::flavor_wheel::LocalName;
use crate::lang::Lang;

#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub code: &'static str,
    pub flag: &'static str,
    pub name: LocalName,
}

const fn country(code: &'static str, flag: &'static str, ko: &'static str, en: &'static str) -> Country {
    Country { code, flag, name: LocalName { ko, en } }
}

pub const COUNTRIES: &[Country] = &[
    country("SC", "🏴󠁧󠁢󠁳󠁣󠁴󠁿", "스코틀랜드", "Scotland"),
    country("IE", "🇮🇪", "아일랜드", "Ireland"),
    country("US", "🇺🇸", "미국", "USA"),
    country("JP", "🇯🇵", "일본", "Japan"),
    country("CA", "🇨🇦", "캐나다", "Canada"),
    country("TW", "🇹🇼", "대만", "Taiwan"),
    country("IN", "🇮🇳", "인도", "India"),
    country("AU", "🇦🇺", "호주", "Australia"),
    country("KR", "🇰🇷", "한국", "South Korea"),
    country("FR", "🇫🇷", "프랑스", "France"),
    country("DE", "🇩🇪", "독일", "Germany"),
    country("GB", "🇬🇧", "영국 (기타)", "UK (Other)"),
    country("NZ", "🇳🇿", "뉴질랜드", "New Zealand"),
    country("SE", "🇸🇪", "스웨덴", "Sweden"),
    country("OTHER", "🌍", "기타", "Other"),
];

pub fn country_name(code: &str, lang: Lang) -> &str {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.name.get(lang))
        .unwrap_or(code)
}

pub fn country_flag(code: &str) -> &'static str {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.flag)
        .unwrap_or("🌍")
}
