use crate::flavor_wheel::LocalName;
use crate::lang::Lang;

/// One step on the 0.0-2.0 whisky color scale.
#[derive(Debug, Clone, Copy)]
pub struct ColorSwatch {
    pub value: f64,
    pub name: LocalName,
    pub hex: &'static str,
}

const fn swatch(value: f64, ko: &'static str, en: &'static str, hex: &'static str) -> ColorSwatch {
    ColorSwatch { value, name: LocalName { ko, en }, hex }
}

pub const WHISKY_COLORS: &[ColorSwatch] = &[
    swatch(0.0, "진 클리어", "Gin Clear", "#FFFFFF"),
    swatch(0.1, "화이트 와인", "White Wine", "#FFFDE7"),
    swatch(0.2, "페일 스트로", "Pale Straw", "#FFF9C4"),
    swatch(0.3, "페일 골드", "Pale Gold", "#FFF176"),
    swatch(0.4, "연한 금색", "Jonquil", "#FFEE58"),
    swatch(0.5, "옐로우 골드", "Yellow Gold", "#FFD54F"),
    swatch(0.6, "올드 골드", "Old Gold", "#FFCA28"),
    swatch(0.7, "앰버", "Amber", "#FFB300"),
    swatch(0.8, "딥 골드", "Deep Gold", "#FFA000"),
    swatch(0.9, "아몬티야도", "Amontillado", "#FF8F00"),
    swatch(1.0, "딥 코퍼", "Deep Copper", "#E65100"),
    swatch(1.1, "버니시드", "Burnished", "#D84315"),
    swatch(1.2, "올로로소", "Oloroso", "#BF360C"),
    swatch(1.3, "러셋", "Russet", "#A1260D"),
    swatch(1.4, "토니", "Tawny", "#8D1C0A"),
    swatch(1.5, "오번", "Auburn", "#7B1508"),
    swatch(1.6, "마호가니", "Mahogany", "#6D1106"),
    swatch(1.7, "번트 엄버", "Burnt Umber", "#5D0F05"),
    swatch(1.8, "올드 오크", "Old Oak", "#4E0D04"),
    swatch(1.9, "브라운 셰리", "Brown Sherry", "#3E0A03"),
    swatch(2.0, "트리클", "Treacle", "#2E0802"),
];

/// Nearest swatch for an arbitrary color value; values outside the scale
/// clamp to the ends. Returns None only for non-finite input.
pub fn color_swatch(value: f64) -> Option<&'static ColorSwatch> {
    if !value.is_finite() {
        return None;
    }
    let index = (value * 10.0).round().clamp(0.0, (WHISKY_COLORS.len() - 1) as f64) as usize;
    Some(&WHISKY_COLORS[index])
}

pub fn color_name(value: f64, lang: Lang) -> Option<&'static str> {
    color_swatch(value).map(|s| s.name.get(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_steps() {
        assert_eq!(color_swatch(0.0).unwrap().name.en, "Gin Clear");
        assert_eq!(color_swatch(0.7).unwrap().name.en, "Amber");
        assert_eq!(color_swatch(2.0).unwrap().name.en, "Treacle");
    }

    #[test]
    fn test_nearest_and_clamped() {
        assert_eq!(color_swatch(0.74).unwrap().name.en, "Amber");
        assert_eq!(color_swatch(0.76).unwrap().name.en, "Deep Gold");
        assert_eq!(color_swatch(-1.0).unwrap().name.en, "Gin Clear");
        assert_eq!(color_swatch(5.0).unwrap().name.en, "Treacle");
        assert!(color_swatch(f64::NAN).is_none());
    }
}
