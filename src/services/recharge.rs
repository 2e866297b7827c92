//! Wallet recharge requests
//!
//! No payment is taken here; a valid request only produces the hand-off
//! message for the payment gateway.

/// Quick-pick amounts offered by the recharge prompt
pub const PRESET_AMOUNTS: [&str; 3] = ["25", "50", "100"];

/// Longest amount the prompt accepts
pub const MAX_AMOUNT_LEN: usize = 10;

/// What happened to a recharge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RechargeOutcome {
    /// Empty, unparseable, or not above zero
    Invalid,
    /// Accepted; carries the amount as typed
    Redirecting(String),
}

impl RechargeOutcome {
    /// Status bar text
    pub fn message(&self) -> String {
        match self {
            RechargeOutcome::Invalid => "Please enter a valid amount".to_string(),
            RechargeOutcome::Redirecting(amount) => {
                format!("Redirecting to payment gateway for ${}...", amount)
            }
        }
    }
}

/// Validate the amount typed into the recharge prompt
pub fn request_recharge(input: &str) -> RechargeOutcome {
    let amount = input.trim();
    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            RechargeOutcome::Redirecting(amount.to_string())
        }
        _ => RechargeOutcome::Invalid,
    }
}

/// Whether `c` may be typed into the amount field
pub fn accepts_amount_char(input: &str, c: char) -> bool {
    input.len() < MAX_AMOUNT_LEN && (c.is_ascii_digit() || (c == '.' && !input.contains('.')))
}

/// The preset after `current`, wrapping around. Anything that is not a
/// preset starts from the first one.
pub fn next_preset(current: &str) -> &'static str {
    let index = PRESET_AMOUNTS
        .iter()
        .position(|p| *p == current)
        .map_or(0, |i| (i + 1) % PRESET_AMOUNTS.len());
    PRESET_AMOUNTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_non_positive() {
        for input in ["", "   ", "0", "0.00", ".", "1.2.3"] {
            assert_eq!(request_recharge(input), RechargeOutcome::Invalid, "{:?}", input);
        }
        assert_eq!(
            RechargeOutcome::Invalid.message(),
            "Please enter a valid amount"
        );
    }

    #[test]
    fn test_accepts_positive_amount_as_typed() {
        let outcome = request_recharge("50");
        assert_eq!(outcome, RechargeOutcome::Redirecting("50".to_string()));
        assert_eq!(outcome.message(), "Redirecting to payment gateway for $50...");
        assert_eq!(
            request_recharge("12.5"),
            RechargeOutcome::Redirecting("12.5".to_string())
        );
    }

    #[test]
    fn test_amount_characters() {
        assert!(accepts_amount_char("12", '3'));
        assert!(accepts_amount_char("12", '.'));
        assert!(!accepts_amount_char("12.5", '.'));
        assert!(!accepts_amount_char("12", '-'));
        assert!(!accepts_amount_char(&"9".repeat(MAX_AMOUNT_LEN), '9'));
    }

    #[test]
    fn test_presets_cycle() {
        assert_eq!(next_preset(""), "25");
        assert_eq!(next_preset("25"), "50");
        assert_eq!(next_preset("50"), "100");
        assert_eq!(next_preset("100"), "25");
        assert_eq!(next_preset("37"), "25");
    }
}
