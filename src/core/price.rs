use crate::models::BudgetBracket;

/// Parse the numeric amount out of a display price string.
///
/// Prices arrive as display strings like "UGX 45,000"; every non-digit
/// character is dropped before parsing. A string with no digits parses
/// to 0, which fails every non-"Any" bracket instead of erroring.
#[inline]
pub fn parse_price_amount(price: &str) -> u64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

impl BudgetBracket {
    /// Test an amount against this bracket. Bounds are inclusive.
    #[inline]
    pub fn fits(&self, amount: u64) -> bool {
        match self {
            Self::Any => true,
            Self::From40kTo50k => (40_000..=50_000).contains(&amount),
            Self::From50kTo60k => (50_000..=60_000).contains(&amount),
            Self::Above60k => amount >= 60_000,
        }
    }
}
