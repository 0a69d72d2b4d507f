//! Input sanitization and validation rules

use std::sync::LazyLock;

use regex::Regex;

/// Accepted ISO 4217 currency codes
pub const VALID_CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "SEK", "NZD", "BDT", "INR", "PKR",
    "SGD", "MYR", "THB", "PHP", "IDR", "VND", "KRW", "TWD", "HKD", "AED", "SAR", "QAR", "KWD",
    "BHD", "OMR", "JOD", "LBP", "EGP", "ZAR", "NGN", "KES", "GHS", "MAD", "TND", "DZD", "ETB",
    "UGX", "TZS", "RWF", "XOF", "XAF", "MXN", "BRL", "ARS", "CLP", "COP", "PEN", "UYU", "BOB",
    "PYG", "VES", "DOP", "GTQ", "HNL", "NIO", "CRC", "PAB", "CUP", "JMD", "BBD", "XCD", "TTD",
    "BSD", "BZD", "GYD", "SRD", "AWG", "RUB", "PLN", "CZK", "HUF", "RON", "BGN", "HRK", "RSD",
    "BAM", "MKD", "ALL", "MDL", "UAH", "BYN", "GEL", "AMD", "AZN", "KZT", "KGS", "UZS", "TJS",
    "TMT", "AFN", "IRR", "IQD", "SYP", "YER", "LYD", "SDG", "SOS", "DJF", "ERN", "MRU", "CDF",
    "AOA", "ZMW", "BWP", "SZL", "LSL", "NAD", "MWK", "MZN", "MGA", "KMF", "SCR", "MUR", "MVR",
    "LKR", "NPR", "BTN", "MMK", "LAK", "KHR", "BND", "FJD", "PGK", "SBD", "VUV", "TOP", "WST",
    "TVD", "NRU", "KID",
];

/// Accepted ISO 3166-1 alpha-2 country codes
pub const VALID_COUNTRIES: &[&str] = &[
    "US", "CA", "GB", "AU", "DE", "FR", "IT", "ES", "NL", "BE", "BD", "IN", "PK", "SG", "MY",
    "TH", "PH", "ID", "VN", "KR", "TW", "HK", "AE", "SA", "QA", "KW", "BH", "OM", "JO", "LB",
    "EG", "ZA", "NG", "KE", "GH", "MA", "TN", "DZ", "ET", "UG", "TZ", "RW", "BF", "CM", "MX",
    "BR", "AR", "CL", "CO", "PE", "UY", "BO", "PY", "VE", "DO", "GT", "HN", "NI", "CR", "PA",
    "CU", "JM", "BB", "AG", "TT", "BS", "BZ", "GY", "SR", "AW", "RU", "PL", "CZ", "HU", "RO",
    "BG", "HR", "RS", "BA", "MK", "AL", "MD", "UA", "BY", "GE", "AM", "AZ", "KZ", "KG", "UZ",
    "TJ", "TM", "AF", "IR", "IQ", "SY", "YE", "LY", "SD", "SO", "DJ", "ER", "MR", "CD", "AO",
    "ZM", "BW", "SZ", "LS", "NA", "MW", "MZ", "MG", "KM", "SC", "MU", "MV", "LK", "NP", "BT",
    "MM", "LA", "KH", "BN", "FJ", "PG", "SB", "VU", "TO", "WS", "TV", "NR", "KI", "PW",
];

/// Text values treated as `true`
const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

/// Compile a constant pattern
#[allow(clippy::expect_used)]
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex")
}

static SCRIPT_OR_STYLE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>"));
static TAG: LazyLock<Regex> = LazyLock::new(|| literal(r"<[^>]*>"));
static ENCODED_OCTET: LazyLock<Regex> = LazyLock::new(|| literal(r"%[a-fA-F0-9]{2}"));
static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| literal(r"[\r\n\t ]+"));
static EMAIL_LOCAL: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~.\-]+$"));
static DOMAIN_LABEL: LazyLock<Regex> = LazyLock::new(|| literal(r"^[a-zA-Z0-9\-]+$"));

pub fn is_valid_currency(code: &str) -> bool {
    let code = code.to_uppercase();
    VALID_CURRENCIES.contains(&code.as_str())
}

pub fn is_valid_country(code: &str) -> bool {
    let code = code.to_uppercase();
    VALID_COUNTRIES.contains(&code.as_str())
}

/// Email format check: `local@label.label[...]`, at least 6 characters
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 6 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !EMAIL_LOCAL.is_match(local) {
        return false;
    }
    if domain.contains("..") || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        DOMAIN_LABEL.is_match(label) && !label.starts_with('-') && !label.ends_with('-')
    })
}

fn strip_tags(value: &str) -> String {
    let without_blocks = SCRIPT_OR_STYLE.replace_all(value, "");
    TAG.replace_all(&without_blocks, "").into_owned()
}

/// Single-line text: tags and encoded octets removed, whitespace collapsed, trimmed
pub fn sanitize_text_field(value: &str) -> String {
    let stripped = strip_tags(value);
    let stripped = ENCODED_OCTET.replace_all(&stripped, "");
    LINE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Multi-line text: like [`sanitize_text_field`] but line breaks are kept
pub fn sanitize_textarea_field(value: &str) -> String {
    let stripped = strip_tags(value);
    let stripped = ENCODED_OCTET.replace_all(&stripped, "");
    stripped
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn sanitize_email(value: &str) -> String {
    value.trim().to_string()
}

/// `true`, `1`, `yes`, `on` (any case, surrounding whitespace ignored)
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    TRUTHY.contains(&value.as_str())
}

/// `business_type` -> `Business type`
pub fn humanize_field_name(field: &str) -> String {
    let mut chars = field.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalized.replace('_', " ")
}

/// URL-friendly slug derived from a term name
pub fn slugify(value: &str) -> String {
    let lowered = strip_tags(value).to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// First of `base`, `base-2`, `base-3`, ... that is not taken
pub fn unique_slug(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    (2u32..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
