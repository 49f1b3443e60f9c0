use std::sync::LazyLock;

use regex::Regex;

/// Intent of a recognized price command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Lower,
    Raise,
}

/// Numeric adjustment extracted from a command, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// `NN%` - percentage of the original price.
    Percent(u64),
    /// `$NN` or a bare number - absolute price, taken verbatim.
    Amount(u64),
    /// No number found - fall back to a 20% adjustment.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCommand {
    pub direction: Direction,
    pub magnitude: Magnitude,
}

/// Result of interpreting free text against a product's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub changed: bool,
    pub new_price: u64,
}

/// Direction keywords, evaluated in order - Lower wins when a message
/// matches both sets. Keywords are mixed English/Spanish, matched as
/// case-insensitive substrings.
const DIRECTION_RULES: &[(Direction, &[&str])] = &[
    (
        Direction::Lower,
        &[
            "lower", "reduce", "bajar", "reducir", "menos", "descuento", "discount",
        ],
    ),
    (
        Direction::Raise,
        &[
            "higher", "increase", "subir", "aumentar", "más", "premium", "raise",
        ],
    ),
];

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("valid percent pattern"));
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+)").expect("valid amount pattern"));

/// Parse free text into a price command. Returns `None` when no direction
/// keyword matches - unrecognized text is a no-op, not an error.
pub fn parse(text: &str) -> Option<PriceCommand> {
    let lowered = text.to_lowercase();
    let direction = DIRECTION_RULES.iter().find_map(|(direction, keywords)| {
        keywords
            .iter()
            .any(|kw| lowered.contains(kw))
            .then_some(*direction)
    })?;
    Some(PriceCommand {
        direction,
        magnitude: detect_magnitude(&lowered),
    })
}

/// Percentage takes priority over an absolute amount; both fail closed into
/// the default 20% adjustment.
fn detect_magnitude(lowered: &str) -> Magnitude {
    if let Some(caps) = PERCENT_RE.captures(lowered) {
        if let Ok(pct) = caps[1].parse() {
            return Magnitude::Percent(pct);
        }
    }
    if let Some(caps) = AMOUNT_RE.captures(lowered) {
        if let Ok(amount) = caps[1].parse() {
            return Magnitude::Amount(amount);
        }
    }
    Magnitude::Default
}

/// All math is anchored on `original` so repeated commands stay idempotent
/// relative to the baseline instead of compounding. Prices never go
/// negative: a discount past 100% saturates at zero.
fn apply(command: PriceCommand, original: u64) -> u64 {
    match (command.direction, command.magnitude) {
        (Direction::Lower, Magnitude::Percent(pct)) => {
            original.saturating_mul(100u64.saturating_sub(pct)) / 100
        }
        (Direction::Raise, Magnitude::Percent(pct)) => {
            original.saturating_mul(pct.saturating_add(100)) / 100
        }
        (_, Magnitude::Amount(amount)) => amount,
        (Direction::Lower, Magnitude::Default) => original.saturating_mul(80) / 100,
        (Direction::Raise, Magnitude::Default) => original.saturating_mul(120) / 100,
    }
}

/// Interpret a free-text command against the displayed product.
///
/// `changed` is true whenever a direction keyword was recognized, even if
/// the computed price happens to equal the current one - the intent was
/// understood, so the UI surfaces feedback.
pub fn interpret(text: &str, price: u64, original_price: u64) -> Interpretation {
    match parse(text) {
        Some(command) => Interpretation {
            changed: true,
            new_price: apply(command, original_price),
        },
        None => Interpretation {
            changed: false,
            new_price: price,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_discount() {
        let res = interpret("20% discount", 1000, 1000);
        assert_eq!(
            res,
            Interpretation {
                changed: true,
                new_price: 800
            }
        );
    }

    #[test]
    fn absolute_price_with_dollar_sign() {
        let res = interpret("Lower price to $1500", 2999, 2999);
        assert_eq!(
            res,
            Interpretation {
                changed: true,
                new_price: 1500
            }
        );
    }

    #[test]
    fn percentage_increase_floors() {
        // floor(1899 * 1.1) = 2088
        let res = interpret("Increase price 10%", 1899, 1899);
        assert_eq!(
            res,
            Interpretation {
                changed: true,
                new_price: 2088
            }
        );
    }

    #[test]
    fn unrecognized_text_is_a_noop() {
        let res = interpret("hello there", 500, 500);
        assert_eq!(
            res,
            Interpretation {
                changed: false,
                new_price: 500
            }
        );
    }

    #[test]
    fn default_discount_without_magnitude() {
        let res = interpret("bajar el precio", 2999, 2999);
        assert_eq!(res.new_price, 2999 * 80 / 100);
        assert!(res.changed);
    }

    #[test]
    fn default_increase_without_magnitude() {
        let res = interpret("premium", 1299, 1299);
        assert_eq!(res.new_price, 1299 * 120 / 100);
        assert!(res.changed);
    }

    #[test]
    fn spanish_keywords_match() {
        let res = interpret("Subir precio 10%", 1899, 1899);
        assert_eq!(res.new_price, 2088);
        let res = interpret("más caro", 1000, 1000);
        assert_eq!(res.new_price, 1200);
    }

    #[test]
    fn lower_wins_when_both_directions_match() {
        let cmd = parse("raise it, no wait, lower it by 10%").expect("direction matched");
        assert_eq!(cmd.direction, Direction::Lower);
        let res = interpret("raise it, no wait, lower it by 10%", 1000, 1000);
        assert_eq!(res.new_price, 900);
    }

    #[test]
    fn percentage_takes_priority_over_amount() {
        let cmd = parse("lower by 15% or to $500").expect("direction matched");
        assert_eq!(cmd.magnitude, Magnitude::Percent(15));
    }

    #[test]
    fn idempotent_relative_to_baseline() {
        let first = interpret("30% discount", 2000, 2000);
        assert_eq!(first.new_price, 1400);
        // Price already discounted; same command computes from the original.
        let second = interpret("30% discount", first.new_price, 2000);
        assert_eq!(second.new_price, 1400);
    }

    #[test]
    fn oversized_discount_saturates_at_zero() {
        let res = interpret("150% discount", 1000, 1000);
        assert!(res.changed);
        assert_eq!(res.new_price, 0);
    }

    #[test]
    fn changed_even_when_price_is_numerically_unchanged() {
        // 0% raise keeps the number but the intent was still recognized.
        let res = interpret("increase 0%", 1000, 1000);
        assert!(res.changed);
        assert_eq!(res.new_price, 1000);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let res = interpret("DISCOUNT 25%", 400, 400);
        assert_eq!(res.new_price, 300);
    }
}
