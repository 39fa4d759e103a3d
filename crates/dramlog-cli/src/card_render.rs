use dramlog_models::{
    color_name, country_flag, country_name, tag_name, BottlingType, FlavorEntry, Lang, Rebuy,
    Review,
};

const RULE: &str = "────────────────────────────────────────";

/// Plain-text tasting card, the CLI's stand-in for the original image
/// card. Pure transformation; callers decide where it goes.
pub fn render_card(review: &Review, lang: Lang) -> String {
    let mut lines: Vec<String> = Vec::new();
    let whisky = &review.whisky;

    lines.push(RULE.to_string());
    lines.push(format!("  {}", whisky.name));

    let mut origin = Vec::new();
    if !whisky.distillery.is_empty() {
        origin.push(whisky.distillery.clone());
    }
    if let Some(code) = &whisky.country {
        origin.push(format!("{} {}", country_flag(code), country_name(code, lang)));
    }
    if !origin.is_empty() {
        lines.push(format!("  {}", origin.join(" · ")));
    }

    let mut bottle = Vec::new();
    if let Some(age) = &whisky.age {
        bottle.push(format!("{}y", age));
    }
    if let Some(abv) = &whisky.abv {
        bottle.push(format!("{}%", abv));
    }
    if let Some(cask) = &whisky.cask {
        bottle.push(cask.clone());
    }
    if let Some(value) = whisky.color {
        if let Some(name) = color_name(value, lang) {
            bottle.push(name.to_string());
        }
    }
    if let Some(bottling) = whisky.bottling_type {
        bottle.push(bottling_label(bottling, lang).to_string());
    }
    if let Some(number) = &whisky.bottle_number {
        bottle.push(format!("#{}", number));
    }
    if !bottle.is_empty() {
        lines.push(format!("  {}", bottle.join(" · ")));
    }

    lines.push(RULE.to_string());
    push_section(&mut lines, section_label("nose", lang), review.scores.nose, &review.notes.nose, &review.flavors.nose, lang);
    push_section(&mut lines, section_label("palate", lang), review.scores.palate, &review.notes.palate, &review.flavors.palate, lang);
    push_section(&mut lines, section_label("finish", lang), review.scores.finish, &review.notes.finish, &review.flavors.finish, lang);
    lines.push(format!("  {:<8} {:>2}/25", section_label("balance", lang), review.scores.balance));

    lines.push(RULE.to_string());
    let mut summary = format!("  {} {}/100", section_label("total", lang), review.scores.total());
    if let Some(rebuy) = review.would_rebuy {
        summary.push_str(&format!(" · {} {}", section_label("rebuy", lang), rebuy_label(rebuy, lang)));
    }
    lines.push(summary);

    if let Some(overall) = &review.notes.overall {
        lines.push(format!("  {}", overall));
    }

    let signature = match &review.reviewer {
        Some(reviewer) => format!("  {} · {}", reviewer, review.created_at.format("%Y-%m-%d")),
        None => format!("  {}", review.created_at.format("%Y-%m-%d")),
    };
    lines.push(signature);
    lines.push(RULE.to_string());

    lines.join("\n")
}

fn push_section(
    lines: &mut Vec<String>,
    label: &str,
    score: u8,
    note: &str,
    flavors: &[FlavorEntry],
    lang: Lang,
) {
    lines.push(format!("  {:<8} {:>2}/25", label, score));
    if !flavors.is_empty() {
        let tags: Vec<String> = flavors
            .iter()
            .map(|f| format!("{} {}", tag_name(&f.id, lang), strength_dots(f.strength)))
            .collect();
        lines.push(format!("           {}", tags.join(" / ")));
    }
    if !note.is_empty() {
        lines.push(format!("           {}", note));
    }
}

fn strength_dots(strength: u8) -> String {
    let filled = strength.min(5) as usize;
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

fn section_label(key: &str, lang: Lang) -> &'static str {
    match (key, lang) {
        ("nose", Lang::Ko) => "노즈",
        ("nose", Lang::En) => "Nose",
        ("palate", Lang::Ko) => "팔레트",
        ("palate", Lang::En) => "Palate",
        ("finish", Lang::Ko) => "피니시",
        ("finish", Lang::En) => "Finish",
        ("balance", Lang::Ko) => "밸런스",
        ("balance", Lang::En) => "Balance",
        ("total", Lang::Ko) => "총점",
        ("total", Lang::En) => "Total",
        ("rebuy", Lang::Ko) => "재구매:",
        ("rebuy", Lang::En) => "Would rebuy:",
        _ => "",
    }
}

fn bottling_label(bottling: BottlingType, lang: Lang) -> &'static str {
    match (bottling, lang) {
        (BottlingType::Official, Lang::Ko) => "오피셜",
        (BottlingType::Official, Lang::En) => "Official",
        (BottlingType::Independent, Lang::Ko) => "독립병입",
        (BottlingType::Independent, Lang::En) => "Independent",
        (BottlingType::SingleCask, Lang::Ko) => "싱글캐스크",
        (BottlingType::SingleCask, Lang::En) => "Single Cask",
    }
}

fn rebuy_label(rebuy: Rebuy, lang: Lang) -> &'static str {
    match (rebuy, lang) {
        (Rebuy::Yes, Lang::Ko) => "예",
        (Rebuy::Yes, Lang::En) => "yes",
        (Rebuy::No, Lang::Ko) => "아니오",
        (Rebuy::No, Lang::En) => "no",
        (Rebuy::Maybe, Lang::Ko) => "글쎄요",
        (Rebuy::Maybe, Lang::En) => "maybe",
    }
}

/// Export file name derived from the whisky's display name, like the
/// original's image downloads.
pub fn card_file_name(whisky_name: &str) -> String {
    let mut slug = String::new();
    for c in whisky_name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "tasting-card.txt".to_string()
    } else {
        format!("{}-tasting-card.txt", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dramlog_models::{FlavorSet, Notes, ReviewInput, ScoreCard, Whisky};

    fn review() -> Review {
        ReviewInput {
            reviewer: Some("mina".to_string()),
            whisky: Whisky {
                name: "Ardbeg Uigeadail".to_string(),
                distillery: "Ardbeg".to_string(),
                country: Some("SC".to_string()),
                abv: Some("54.2".to_string()),
                color: Some(1.0),
                ..Default::default()
            },
            scores: ScoreCard { nose: 23, palate: 22, finish: 23, balance: 22 },
            notes: Notes { nose: "coal smoke".to_string(), ..Default::default() },
            flavors: FlavorSet {
                nose: vec![FlavorEntry::new("peat_smoke", 5)],
                ..Default::default()
            },
            would_rebuy: Some(Rebuy::Yes),
        }
        .into_review("card-test".to_string(), Utc::now())
    }

    #[test]
    fn test_card_shows_total_and_localized_tags() {
        let card = render_card(&review(), Lang::En);
        assert!(card.contains("Total 90/100"));
        assert!(card.contains("Peat Smoke ●●●●●"));
        assert!(card.contains("Deep Copper"));
        assert!(card.contains("Scotland"));

        let card_ko = render_card(&review(), Lang::Ko);
        assert!(card_ko.contains("피트 연기"));
        assert!(card_ko.contains("총점 90/100"));
    }

    #[test]
    fn test_strength_dots() {
        assert_eq!(strength_dots(1), "●○○○○");
        assert_eq!(strength_dots(5), "●●●●●");
        assert_eq!(strength_dots(9), "●●●●●");
    }

    #[test]
    fn test_card_file_name() {
        assert_eq!(card_file_name("Ardbeg Uigeadail"), "ardbeg-uigeadail-tasting-card.txt");
        assert_eq!(card_file_name("Ledaig 10 (2019)"), "ledaig-10-2019-tasting-card.txt");
        assert_eq!(card_file_name("???"), "tasting-card.txt");
    }
}
