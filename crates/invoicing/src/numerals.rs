//! English number words in the Indian numbering system.
//!
//! Magnitudes are grouped as Crore (10^7), Lakh (10^5), Thousand and Hundred, so
//! `1_234_567` reads "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven".

use storefront_core::Amount;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Magnitude tiers, largest first.
const TIERS: [(u64, &str); 4] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

/// Spell out `n`, e.g. `21` → `"Twenty One"`, `0` → `"Zero"`.
///
/// Quotients of a tier are themselves spelled recursively, so values beyond
/// 99 Crore compose ("One Hundred Crore").
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut words = Vec::new();
    push_words(n, &mut words);
    words.join(" ")
}

fn push_words(mut n: u64, words: &mut Vec<&'static str>) {
    for (threshold, name) in TIERS {
        if n >= threshold {
            push_words(n / threshold, words);
            words.push(name);
            n %= threshold;
        }
    }

    match n {
        20.. => {
            words.push(TENS[(n / 10) as usize]);
            if n % 10 != 0 {
                words.push(ONES[(n % 10) as usize]);
            }
        }
        10..=19 => words.push(TEENS[(n - 10) as usize]),
        1..=9 => words.push(ONES[n as usize]),
        0 => {}
    }
}

/// Invoice wording for an amount:
/// `"<rupees> Rupees and <paise> Paise Only"`.
pub fn amount_in_words(amount: Amount) -> String {
    format!(
        "{} Rupees and {} Paise Only",
        number_to_words(amount.rupee_part()),
        number_to_words(amount.paise_part()),
    )
}
