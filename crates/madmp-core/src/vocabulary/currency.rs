/// Three-letter currency codes recognized in cost units.
pub const CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL",
    "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF", "CLP", "CNY",
    "COP", "CRC", "CUC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GGP", "GHS",
    "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF",
    "IDR", "ILS", "IMP", "INR", "IQD", "IRR", "ISK", "JEP", "JMD", "JOD",
    "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT",
    "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD",
    "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MYR", "MZN",
    "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK",
    "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR",
    "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLL", "SOS", "SPL", "SRD",
    "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TVD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS", "VEF",
    "VND", "VUV", "WST", "XAF", "XCD", "XDR", "XOF", "XPF", "YER", "ZAR",
    "ZMW", "ZWD",
];

/// Best-effort currency detection from a free-text unit string.
///
/// The unit is upper-cased and cut to its first three characters; the
/// fragment is returned only if `is_known` accepts it. `"Euro"`, `"eur"` and
/// `"EUR"` all yield `EUR`, while `"hours"` yields nothing. This is not a
/// currency validator.
pub fn detect_currency(unit: &str, is_known: impl Fn(&str) -> bool) -> Option<String> {
    let fragment: String = unit.to_uppercase().chars().take(3).collect();
    is_known(&fragment).then_some(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(code: &str) -> bool {
        CURRENCY_CODES.contains(&code)
    }

    #[test]
    fn test_euro_spellings() {
        for unit in ["EUR", "eur", "Euro", "euros per year"] {
            assert_eq!(detect_currency(unit, builtin).as_deref(), Some("EUR"), "unit {unit}");
        }
    }

    #[test]
    fn test_non_currency_units() {
        assert!(detect_currency("hours", builtin).is_none());
        assert!(detect_currency("", builtin).is_none());
        assert!(detect_currency("EU", builtin).is_none());
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(detect_currency("usd", builtin).as_deref(), Some("USD"));
        assert_eq!(detect_currency("CHF (net)", builtin).as_deref(), Some("CHF"));
    }

    #[test]
    fn test_code_list_is_well_formed() {
        assert_eq!(CURRENCY_CODES.len(), 162);
        assert!(CURRENCY_CODES
            .iter()
            .all(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_uppercase())));
    }
}
