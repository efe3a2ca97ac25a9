use crate::data::Civility;
use regex::Regex;
use std::sync::OnceLock;

const UNITS: [&str; 10] = [
    "", "UN", "DEUX", "TROIS", "QUATRE", "CINQ", "SIX", "SEPT", "HUIT", "NEUF",
];

const TEENS: [&str; 10] = [
    "DIX", "ONZE", "DOUZE", "TREIZE", "QUATORZE", "QUINZE", "SEIZE", "DIX-SEPT", "DIX-HUIT",
    "DIX-NEUF",
];

const TENS: [&str; 7] = [
    "", "DIX", "VINGT", "TRENTE", "QUARANTE", "CINQUANTE", "SOIXANTE",
];

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Converts a number below 100 to uppercase French words.
///
/// `final_position` is false when another numeral follows (e.g. "MILLE"),
/// in which case "QUATRE-VINGTS" loses its S ("QUATRE-VINGT MILLE").
fn under_100(n: u64, final_position: bool) -> String {
    debug_assert!(n < 100);
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=69 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{} ET UN", tens),
                u => format!("{}-{}", tens, UNITS[u as usize]),
            }
        }
        70 => "SOIXANTE-DIX".to_string(),
        71 => "SOIXANTE ET ONZE".to_string(),
        72..=79 => format!("SOIXANTE-{}", TEENS[(n - 70) as usize]),
        80 => {
            if final_position {
                "QUATRE-VINGTS".to_string()
            } else {
                "QUATRE-VINGT".to_string()
            }
        }
        81..=89 => format!("QUATRE-VINGT-{}", UNITS[(n - 80) as usize]),
        _ => format!("QUATRE-VINGT-{}", TEENS[(n - 90) as usize]),
    }
}

/// Converts a number below 1000 to uppercase French words.
fn under_1000(n: u64, final_position: bool) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;
    match hundreds {
        0 => under_100(rest, final_position),
        1 => {
            if rest == 0 {
                "CENT".to_string()
            } else {
                format!("CENT {}", under_100(rest, final_position))
            }
        }
        h => {
            if rest == 0 {
                // "DEUX CENTS" but "DEUX CENT MILLE"
                if final_position {
                    format!("{} CENTS", UNITS[h as usize])
                } else {
                    format!("{} CENT", UNITS[h as usize])
                }
            } else {
                format!("{} CENT {}", UNITS[h as usize], under_100(rest, final_position))
            }
        }
    }
}

/// Converts a non-negative integer into uppercase French words, following
/// the irregular French numeral rules (11–16, "SOIXANTE-DIX",
/// "QUATRE-VINGTS", ...). "UN" is omitted before "MILLE" but kept before
/// "MILLION" and "MILLIARD".
pub fn number_to_french_words(n: u64) -> String {
    if n == 0 {
        return "ZÉRO".to_string();
    }

    let billions = n / 1_000_000_000;
    let millions = (n / 1_000_000) % 1_000;
    let thousands = (n / 1_000) % 1_000;
    let rest = n % 1_000;

    let mut parts: Vec<String> = Vec::new();

    if billions > 0 {
        let noun = if billions > 1 { "MILLIARDS" } else { "MILLIARD" };
        parts.push(format!("{} {}", under_1000(billions, false), noun));
    }
    if millions > 0 {
        let noun = if millions > 1 { "MILLIONS" } else { "MILLION" };
        parts.push(format!("{} {}", under_1000(millions, false), noun));
    }
    if thousands > 0 {
        if thousands == 1 {
            parts.push("MILLE".to_string());
        } else {
            parts.push(format!("{} MILLE", under_1000(thousands, false)));
        }
    }
    if rest > 0 {
        parts.push(under_1000(rest, true));
    }

    parts.join(" ")
}

/// Thousands-grouped decimal representation, French convention
/// (space separator): 1234567 -> "1 234 567".
pub fn format_french_number(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount as `"<grouped> € (<WORDS> <CURRENCY>)"`, the canonical
/// way capital amounts are written out in the statuts.
///
/// The currency noun is singularized when the amount is 0 or 1.
pub fn format_amount_with_words(amount: u64, currency: &str) -> String {
    let currency = if amount <= 1 {
        currency.strip_suffix('S').unwrap_or(currency)
    } else {
        currency
    };
    format!(
        "{} € ({} {})",
        format_french_number(amount),
        number_to_french_words(amount),
        currency
    )
}

/// Renders an ISO date "YYYY-MM-DD" as "<day> <month> <year>"
/// (e.g. "3 juillet 2024"). Returns the input unchanged when it cannot be
/// parsed; the document must still render with whatever the user typed.
pub fn format_french_date(iso_date: &str) -> String {
    let parts: Vec<&str> = iso_date.split('-').collect();
    if parts.len() != 3 {
        return iso_date.to_string();
    }
    let (year, month, day) = (parts[0], parts[1], parts[2]);
    let month_index: usize = match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m - 1,
        _ => return iso_date.to_string(),
    };
    let day_number: u32 = match day.parse() {
        Ok(d) => d,
        Err(_) => return iso_date.to_string(),
    };
    format!("{} {} {}", day_number, MONTHS[month_index], year)
}

/// Renders a "DD-MM" day/month pair as "<day> <month>" ("01-01" ->
/// "1er janvier"). Input unchanged on parse failure.
pub fn format_day_month(day_month: &str) -> String {
    let parts: Vec<&str> = day_month.split('-').collect();
    if parts.len() != 2 {
        return day_month.to_string();
    }
    let month_index: usize = match parts[1].parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m - 1,
        _ => return day_month.to_string(),
    };
    let day_number: u32 = match parts[0].parse() {
        Ok(d) => d,
        Err(_) => return day_month.to_string(),
    };
    let day_label = if day_number == 1 {
        "1er".to_string()
    } else {
        day_number.to_string()
    };
    format!("{} {}", day_label, MONTHS[month_index])
}

/// Renders an ISO date "YYYY-MM-DD" as "DD-MM-YYYY". Input unchanged on
/// parse failure.
pub fn format_short_date(iso_date: &str) -> String {
    let parts: Vec<&str> = iso_date.split('-').collect();
    if parts.len() != 3 {
        return iso_date.to_string();
    }
    match parts[1].parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => {}
        _ => return iso_date.to_string(),
    }
    if parts[2].parse::<u32>().is_err() {
        return iso_date.to_string();
    }
    format!("{}-{}-{}", parts[2], parts[1], parts[0])
}

/// Masculine-to-feminine substitutions over the closed vocabulary of the
/// legal templates, most specific phrase first so a phrase is never
/// transformed twice. `\b` keeps "associé" from matching inside an already
/// feminized "associée".
fn feminine_substitutions() -> &'static Vec<(Regex, &'static str)> {
    static SUBSTITUTIONS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    SUBSTITUTIONS.get_or_init(|| {
        [
            (r"né\(e\)", "née"),
            (r"dénommé\(e\)", "dénommée"),
            (r"soussigné\(e\)", "soussignée"),
            (r"\bl'associé unique\b", "l'associée unique"),
            (r"\bL'associé unique\b", "L'associée unique"),
            (r"\bassocié unique\b", "associée unique"),
            (r"\bl'associé\b", "l'associée"),
            (r"\bassocié\b", "associée"),
            (r"\ble soussigné\b", "la soussignée"),
            (r"\bLe soussigné\b", "La soussignée"),
            (r"\bsoussigné\b", "soussignée"),
            (r"\ble gérant\b", "la gérante"),
            (r"\bLe gérant\b", "La gérante"),
            (r"\bgérant\b", "gérante"),
            (r"\ble Président\b", "la Présidente"),
            (r"\bLe Président\b", "La Présidente"),
            (r"\bPrésident\b", "Présidente"),
            (r"\bné\b", "née"),
            (r"\bdénommé\b", "dénommée"),
            (r"\bfondateur\b", "fondatrice"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect()
    })
}

/// Applies grammatical gender agreement over the fixed legal vocabulary.
///
/// For `Mme`, runs the ordered masculine-to-feminine substitution table.
/// For `M`, only strips the "(e)" neutral markers ("né(e)" -> "né").
pub fn apply_gender_agreement(text: &str, civility: Civility) -> String {
    match civility {
        Civility::M => text.replace("(e)", ""),
        Civility::Mme => {
            let mut result = text.to_string();
            for (regex, replacement) in feminine_substitutions() {
                result = regex.replace_all(&result, *replacement).into_owned();
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_words_zero() {
        assert_eq!(number_to_french_words(0), "ZÉRO");
    }

    #[test]
    fn test_number_to_words_irregulars() {
        assert_eq!(number_to_french_words(11), "ONZE");
        assert_eq!(number_to_french_words(16), "SEIZE");
        assert_eq!(number_to_french_words(17), "DIX-SEPT");
        assert_eq!(number_to_french_words(21), "VINGT ET UN");
        assert_eq!(number_to_french_words(70), "SOIXANTE-DIX");
        assert_eq!(number_to_french_words(71), "SOIXANTE ET ONZE");
        assert_eq!(number_to_french_words(75), "SOIXANTE-QUINZE");
        assert_eq!(number_to_french_words(80), "QUATRE-VINGTS");
        assert_eq!(number_to_french_words(81), "QUATRE-VINGT-UN");
        assert_eq!(number_to_french_words(91), "QUATRE-VINGT-ONZE");
        assert_eq!(number_to_french_words(99), "QUATRE-VINGT-DIX-NEUF");
    }

    #[test]
    fn test_number_to_words_hundreds_agreement() {
        assert_eq!(number_to_french_words(100), "CENT");
        assert_eq!(number_to_french_words(200), "DEUX CENTS");
        assert_eq!(number_to_french_words(201), "DEUX CENT UN");
        assert_eq!(number_to_french_words(999), "NEUF CENT QUATRE-VINGT-DIX-NEUF");
    }

    #[test]
    fn test_number_to_words_thousands() {
        assert_eq!(number_to_french_words(1000), "MILLE");
        assert_eq!(number_to_french_words(1500), "MILLE CINQ CENTS");
        assert_eq!(number_to_french_words(7500), "SEPT MILLE CINQ CENTS");
        assert_eq!(number_to_french_words(10000), "DIX MILLE");
        // no S before another numeral
        assert_eq!(number_to_french_words(80000), "QUATRE-VINGT MILLE");
        assert_eq!(number_to_french_words(200000), "DEUX CENT MILLE");
    }

    #[test]
    fn test_number_to_words_millions() {
        assert_eq!(number_to_french_words(1_000_000), "UN MILLION");
        assert_eq!(number_to_french_words(2_000_000), "DEUX MILLIONS");
        assert_eq!(
            number_to_french_words(1_000_001_000),
            "UN MILLIARD MILLE"
        );
    }

    #[test]
    fn test_format_french_number() {
        assert_eq!(format_french_number(0), "0");
        assert_eq!(format_french_number(999), "999");
        assert_eq!(format_french_number(1000), "1 000");
        assert_eq!(format_french_number(1234567), "1 234 567");
    }

    #[test]
    fn test_format_amount_singular() {
        assert_eq!(format_amount_with_words(1, "EUROS"), "1 € (UN EURO)");
        assert_eq!(format_amount_with_words(0, "EUROS"), "0 € (ZÉRO EURO)");
    }

    #[test]
    fn test_format_amount_plural() {
        assert_eq!(
            format_amount_with_words(1000, "EUROS"),
            "1 000 € (MILLE EUROS)"
        );
    }

    #[test]
    fn test_format_french_date() {
        assert_eq!(format_french_date("2024-07-03"), "3 juillet 2024");
        assert_eq!(format_french_date("2024-01-15"), "15 janvier 2024");
    }

    #[test]
    fn test_format_french_date_invalid_passthrough() {
        assert_eq!(format_french_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_french_date("demain"), "demain");
        assert_eq!(format_french_date(""), "");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-07-03"), "03-07-2024");
        assert_eq!(format_short_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_short_date_invalid_parts_passthrough() {
        // never rearrange what isn't a real date
        assert_eq!(format_short_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_short_date("2024-00-15"), "2024-00-15");
        assert_eq!(format_short_date("2024-07-xx"), "2024-07-xx");
    }

    #[test]
    fn test_gender_masculine_strips_neutral_marker() {
        let text = "né(e) le 3 juillet, dénommé(e) ci-après";
        assert_eq!(
            apply_gender_agreement(text, Civility::M),
            "né le 3 juillet, dénommé ci-après"
        );
    }

    #[test]
    fn test_gender_masculine_passthrough() {
        let text = "Le gérant de la Société, l'associé unique";
        assert_eq!(apply_gender_agreement(text, Civility::M), text);
    }

    #[test]
    fn test_gender_feminine_no_double_application() {
        assert_eq!(
            apply_gender_agreement("l'associé unique", Civility::Mme),
            "l'associée unique"
        );
        // A second pass must not corrupt the already feminized text.
        assert_eq!(
            apply_gender_agreement("l'associée unique", Civility::Mme),
            "l'associée unique"
        );
    }

    #[test]
    fn test_gender_feminine_full_sentence() {
        let text = "Le soussigné, né le 3 juillet, agissant en qualité de gérant";
        assert_eq!(
            apply_gender_agreement(text, Civility::Mme),
            "La soussignée, née le 3 juillet, agissant en qualité de gérante"
        );
    }

    #[test]
    fn test_gender_feminine_president() {
        assert_eq!(
            apply_gender_agreement("Le Président de la Société", Civility::Mme),
            "La Présidente de la Société"
        );
    }
}
