use crate::lang::Lang;

/// A ko/en display-name pair for static reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalName {
    pub ko: &'static str,
    pub en: &'static str,
}

impl LocalName {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.ko,
            Lang::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlavorTag {
    pub id: &'static str,
    pub name: LocalName,
}

#[derive(Debug, Clone, Copy)]
pub struct FlavorSubCategory {
    pub id: &'static str,
    pub name: LocalName,
    pub tags: &'static [FlavorTag],
}

#[derive(Debug, Clone, Copy)]
pub struct FlavorCategory {
    pub id: &'static str,
    pub name: LocalName,
    pub sub_categories: &'static [FlavorSubCategory],
}

const fn tag(id: &'static str, ko: &'static str, en: &'static str) -> FlavorTag {
    FlavorTag { id, name: LocalName { ko, en } }
}

/// The tasting wheel: category -> sub-category -> tag. Tag ids are the
/// values stored in review flavor lists.
pub const FLAVOR_WHEEL: &[FlavorCategory] = &[
    FlavorCategory {
        id: "cereal",
        name: LocalName { ko: "곡물", en: "Cereal" },
        sub_categories: &[
            FlavorSubCategory {
                id: "malt",
                name: LocalName { ko: "몰트", en: "Malt" },
                tags: &[
                    tag("malt", "몰트", "Malt"),
                    tag("barley", "보리", "Barley"),
                    tag("porridge", "오트밀", "Porridge"),
                    tag("cereal", "시리얼", "Cereal"),
                    tag("nurungji", "누룽지", "Nurungji"),
                ],
            },
            FlavorSubCategory {
                id: "bread",
                name: LocalName { ko: "빵/비스킷", en: "Bread" },
                tags: &[
                    tag("bread", "빵", "Bread"),
                    tag("toast", "토스트", "Toast"),
                    tag("biscuit", "비스킷", "Biscuit"),
                    tag("cake", "케이크", "Cake"),
                ],
            },
            FlavorSubCategory {
                id: "yeasty",
                name: LocalName { ko: "효모", en: "Yeasty" },
                tags: &[
                    tag("yeast", "효모", "Yeast"),
                    tag("dough", "반죽", "Dough"),
                    tag("beer", "맥주", "Beer"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "fruity",
        name: LocalName { ko: "과일", en: "Fruity" },
        sub_categories: &[
            FlavorSubCategory {
                id: "citrus",
                name: LocalName { ko: "시트러스", en: "Citrus" },
                tags: &[
                    tag("lemon", "레몬", "Lemon"),
                    tag("orange", "오렌지", "Orange"),
                    tag("orange_peel", "오렌지필", "Orange Peel"),
                    tag("lime", "라임", "Lime"),
                    tag("grapefruit", "자몽", "Grapefruit"),
                    tag("yuja", "유자", "Yuja"),
                ],
            },
            FlavorSubCategory {
                id: "orchard",
                name: LocalName { ko: "과수원", en: "Orchard" },
                tags: &[
                    tag("apple", "사과", "Apple"),
                    tag("green_apple", "청사과", "Green Apple"),
                    tag("pear", "배", "Pear"),
                    tag("peach", "복숭아", "Peach"),
                    tag("apricot", "살구", "Apricot"),
                    tag("plum", "자두", "Plum"),
                    tag("cherry", "체리", "Cherry"),
                ],
            },
            FlavorSubCategory {
                id: "tropical",
                name: LocalName { ko: "열대과일", en: "Tropical" },
                tags: &[
                    tag("banana", "바나나", "Banana"),
                    tag("pineapple", "파인애플", "Pineapple"),
                    tag("mango", "망고", "Mango"),
                    tag("coconut", "코코넛", "Coconut"),
                    tag("passion_fruit", "패션프루트", "Passion Fruit"),
                ],
            },
            FlavorSubCategory {
                id: "dried",
                name: LocalName { ko: "건과일", en: "Dried Fruit" },
                tags: &[
                    tag("raisin", "건포도", "Raisin"),
                    tag("prune", "푸룬", "Prune"),
                    tag("fig", "무화과", "Fig"),
                    tag("date", "대추야자", "Date"),
                    tag("fruit_cake", "과일케이크", "Fruit Cake"),
                    tag("gotgam", "곶감", "Dried Persimmon"),
                ],
            },
            FlavorSubCategory {
                id: "berry",
                name: LocalName { ko: "베리", en: "Berry" },
                tags: &[
                    tag("strawberry", "딸기", "Strawberry"),
                    tag("raspberry", "라즈베리", "Raspberry"),
                    tag("blackberry", "블랙베리", "Blackberry"),
                    tag("blueberry", "블루베리", "Blueberry"),
                ],
            },
            FlavorSubCategory {
                id: "cooked",
                name: LocalName { ko: "조리된 과일", en: "Cooked Fruit" },
                tags: &[
                    tag("stewed_apple", "조린 사과", "Stewed Apple"),
                    tag("marmalade", "마말레이드", "Marmalade"),
                    tag("jam", "잼", "Jam"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "floral",
        name: LocalName { ko: "꽃/허브", en: "Floral" },
        sub_categories: &[
            FlavorSubCategory {
                id: "floral",
                name: LocalName { ko: "꽃", en: "Floral" },
                tags: &[
                    tag("rose", "장미", "Rose"),
                    tag("lavender", "라벤더", "Lavender"),
                    tag("jasmine", "자스민", "Jasmine"),
                    tag("heather", "헤더", "Heather"),
                ],
            },
            FlavorSubCategory {
                id: "herbal",
                name: LocalName { ko: "허브", en: "Herbal" },
                tags: &[
                    tag("mint", "민트", "Mint"),
                    tag("eucalyptus", "유칼립투스", "Eucalyptus"),
                    tag("thyme", "타임", "Thyme"),
                    tag("rosemary", "로즈마리", "Rosemary"),
                    tag("tea", "차", "Tea"),
                ],
            },
            FlavorSubCategory {
                id: "green",
                name: LocalName { ko: "풀/잎", en: "Green" },
                tags: &[
                    tag("grass", "풀", "Grass"),
                    tag("hay", "건초", "Hay"),
                    tag("green_leaves", "푸른 잎", "Green Leaves"),
                    tag("pine_needle", "솔잎", "Pine Needle"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "peaty",
        name: LocalName { ko: "피트/스모키", en: "Peaty" },
        sub_categories: &[
            FlavorSubCategory {
                id: "smoky",
                name: LocalName { ko: "훈연", en: "Smoky" },
                tags: &[
                    tag("bonfire", "모닥불", "Bonfire"),
                    tag("charcoal", "숯", "Charcoal"),
                    tag("ash", "재", "Ash"),
                    tag("incense", "향", "Incense"),
                    tag("peat_smoke", "피트 연기", "Peat Smoke"),
                ],
            },
            FlavorSubCategory {
                id: "medicinal",
                name: LocalName { ko: "약품", en: "Medicinal" },
                tags: &[
                    tag("iodine", "요오드", "Iodine"),
                    tag("bandage", "반창고", "Bandage"),
                    tag("tar", "타르", "Tar"),
                    tag("diesel", "디젤", "Diesel"),
                ],
            },
            FlavorSubCategory {
                id: "maritime",
                name: LocalName { ko: "바다", en: "Maritime" },
                tags: &[
                    tag("sea_salt", "바다소금", "Sea Salt"),
                    tag("seaweed", "해초", "Seaweed"),
                    tag("brine", "염수", "Brine"),
                    tag("oyster", "굴", "Oyster"),
                ],
            },
            FlavorSubCategory {
                id: "earthy",
                name: LocalName { ko: "흙", en: "Earthy" },
                tags: &[
                    tag("earth", "흙", "Earth"),
                    tag("moss", "이끼", "Moss"),
                    tag("mushroom", "버섯", "Mushroom"),
                    tag("wet_earth", "젖은 흙", "Wet Earth"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "winey",
        name: LocalName { ko: "와인/셰리", en: "Winey" },
        sub_categories: &[
            FlavorSubCategory {
                id: "wine",
                name: LocalName { ko: "와인", en: "Wine" },
                tags: &[
                    tag("sherry", "셰리", "Sherry"),
                    tag("port", "포트", "Port"),
                    tag("red_wine", "레드와인", "Red Wine"),
                    tag("madeira", "마데이라", "Madeira"),
                    tag("brandy", "브랜디", "Brandy"),
                ],
            },
            FlavorSubCategory {
                id: "nutty",
                name: LocalName { ko: "견과류", en: "Nutty" },
                tags: &[
                    tag("almond", "아몬드", "Almond"),
                    tag("walnut", "호두", "Walnut"),
                    tag("hazelnut", "헤이즐넛", "Hazelnut"),
                    tag("chestnut", "밤", "Chestnut"),
                    tag("marzipan", "마지팬", "Marzipan"),
                ],
            },
            FlavorSubCategory {
                id: "chocolate",
                name: LocalName { ko: "초콜릿", en: "Chocolate" },
                tags: &[
                    tag("dark_chocolate", "다크초콜릿", "Dark Chocolate"),
                    tag("milk_chocolate", "밀크초콜릿", "Milk Chocolate"),
                    tag("cocoa", "코코아", "Cocoa"),
                ],
            },
            FlavorSubCategory {
                id: "coffee",
                name: LocalName { ko: "커피", en: "Coffee" },
                tags: &[
                    tag("coffee", "커피", "Coffee"),
                    tag("espresso", "에스프레소", "Espresso"),
                    tag("mocha", "모카", "Mocha"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "woody",
        name: LocalName { ko: "오크/나무", en: "Woody" },
        sub_categories: &[
            FlavorSubCategory {
                id: "wood",
                name: LocalName { ko: "나무", en: "Wood" },
                tags: &[
                    tag("oak", "오크", "Oak"),
                    tag("cedar", "시더", "Cedar"),
                    tag("sandalwood", "백단향", "Sandalwood"),
                    tag("sawdust", "톱밥", "Sawdust"),
                    tag("cigar_box", "시가박스", "Cigar Box"),
                ],
            },
            FlavorSubCategory {
                id: "vanilla",
                name: LocalName { ko: "바닐라/단맛", en: "Vanilla" },
                tags: &[
                    tag("vanilla", "바닐라", "Vanilla"),
                    tag("caramel", "카라멜", "Caramel"),
                    tag("toffee", "토피", "Toffee"),
                    tag("butterscotch", "버터스카치", "Butterscotch"),
                    tag("honey", "꿀", "Honey"),
                    tag("maple", "메이플", "Maple"),
                    tag("custard", "커스터드", "Custard"),
                ],
            },
            FlavorSubCategory {
                id: "spice",
                name: LocalName { ko: "스파이스", en: "Spice" },
                tags: &[
                    tag("cinnamon", "시나몬", "Cinnamon"),
                    tag("nutmeg", "넛맥", "Nutmeg"),
                    tag("clove", "정향", "Clove"),
                    tag("ginger", "생강", "Ginger"),
                    tag("black_pepper", "후추", "Black Pepper"),
                    tag("licorice", "감초", "Licorice"),
                ],
            },
            FlavorSubCategory {
                id: "toasted",
                name: LocalName { ko: "토스트/로스팅", en: "Toasted" },
                tags: &[
                    tag("charred_oak", "탄 오크", "Charred Oak"),
                    tag("burnt_toast", "탄 토스트", "Burnt Toast"),
                    tag("roasted", "로스팅", "Roasted"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "feinty",
        name: LocalName { ko: "가죽/담배", en: "Feinty" },
        sub_categories: &[
            FlavorSubCategory {
                id: "leather",
                name: LocalName { ko: "가죽", en: "Leather" },
                tags: &[tag("leather", "가죽", "Leather"), tag("suede", "스웨이드", "Suede")],
            },
            FlavorSubCategory {
                id: "tobacco",
                name: LocalName { ko: "담배", en: "Tobacco" },
                tags: &[
                    tag("tobacco", "담배잎", "Tobacco"),
                    tag("cigar", "시가", "Cigar"),
                    tag("pipe_tobacco", "파이프 담배", "Pipe Tobacco"),
                ],
            },
            FlavorSubCategory {
                id: "honey_wax",
                name: LocalName { ko: "꿀/왁스", en: "Honey/Wax" },
                tags: &[
                    tag("beeswax", "밀랍", "Beeswax"),
                    tag("polish", "광택제", "Polish"),
                    tag("candle_wax", "양초", "Candle Wax"),
                ],
            },
            FlavorSubCategory {
                id: "dairy",
                name: LocalName { ko: "유제품", en: "Dairy" },
                tags: &[
                    tag("butter", "버터", "Butter"),
                    tag("cream", "크림", "Cream"),
                    tag("cheese", "치즈", "Cheese"),
                ],
            },
        ],
    },
    FlavorCategory {
        id: "sulphury",
        name: LocalName { ko: "황/기타", en: "Sulphury" },
        sub_categories: &[
            FlavorSubCategory {
                id: "sulphur",
                name: LocalName { ko: "황", en: "Sulphur" },
                tags: &[tag("match", "성냥", "Match"), tag("gunpowder", "화약", "Gunpowder")],
            },
            FlavorSubCategory {
                id: "rubber",
                name: LocalName { ko: "고무", en: "Rubber" },
                tags: &[tag("rubber", "고무", "Rubber"), tag("eraser", "지우개", "Eraser")],
            },
            FlavorSubCategory {
                id: "vegetal",
                name: LocalName { ko: "채소", en: "Vegetal" },
                tags: &[
                    tag("cabbage", "양배추", "Cabbage"),
                    tag("onion", "양파", "Onion"),
                    tag("cooked_veg", "익힌 채소", "Cooked Vegetables"),
                ],
            },
            FlavorSubCategory {
                id: "solvent",
                name: LocalName { ko: "용제", en: "Solvent" },
                tags: &[
                    tag("nail_polish", "매니큐어", "Nail Polish"),
                    tag("paint", "페인트", "Paint"),
                    tag("varnish", "니스", "Varnish"),
                ],
            },
            FlavorSubCategory {
                id: "savory",
                name: LocalName { ko: "감칠맛", en: "Savory" },
                tags: &[
                    tag("soy_sauce", "간장", "Soy Sauce"),
                    tag("miso", "된장", "Miso"),
                    tag("umami", "감칠맛", "Umami"),
                    tag("meaty", "고기", "Meaty"),
                ],
            },
        ],
    },
];

pub fn find_tag(id: &str) -> Option<&'static FlavorTag> {
    FLAVOR_WHEEL
        .iter()
        .flat_map(|cat| cat.sub_categories)
        .flat_map(|sub| sub.tags)
        .find(|t| t.id == id)
}

/// Localized tag name, falling back to the raw id for tags that are not
/// on the wheel (free-form ids from imported collections).
pub fn tag_name(id: &str, lang: Lang) -> &str {
    match find_tag(id) {
        Some(t) => t.name.get(lang),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup_both_languages() {
        assert_eq!(tag_name("honey", Lang::En), "Honey");
        assert_eq!(tag_name("honey", Lang::Ko), "꿀");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_id() {
        assert_eq!(tag_name("mystery_dram", Lang::En), "mystery_dram");
    }

    #[test]
    fn test_tag_ids_unique_across_wheel() {
        let mut seen = std::collections::HashSet::new();
        for cat in FLAVOR_WHEEL {
            for sub in cat.sub_categories {
                for t in sub.tags {
                    assert!(seen.insert(t.id), "duplicate tag id: {}", t.id);
                }
            }
        }
    }
}
