//! Custom Askama template filters and number formatting helpers.
//!
//! The formatting helpers are plain functions so route handlers and the
//! CLI report command can share them.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Insert thousands separators into a string of decimal digits.
///
/// A single leading `-` is preserved. Anything after the digits is the
/// caller's problem; pass the integer part only.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Format a count with thousands separators, e.g. `1,234,567`.
#[must_use]
pub fn format_count(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Format a dollar amount, e.g. `$1,234.56`.
#[must_use]
pub fn format_usd(value: Decimal) -> String {
    let text = grouped_2dp(value);
    match text.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${text}"),
    }
}

/// Format a dollar amount scaled to millions, e.g. `$129.75 M`.
#[must_use]
pub fn format_usd_millions(value: Decimal) -> String {
    format!("{} M", format_usd(value / Decimal::from(1_000_000)))
}

/// Format an amount scaled to millions without a currency sign,
/// e.g. `129.75 M`.
#[must_use]
pub fn format_millions(value: Decimal) -> String {
    format!("{} M", grouped_2dp(value / Decimal::from(1_000_000)))
}

/// Round to two decimal places and group the integer part.
fn grouped_2dp(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let abs = rounded.abs();
    let text = format!("{abs:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}{}.{cents}", group_thousands(whole))
}
