use crate::core::Result;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

pub const DEFAULT_AMOUNT: i64 = 1500;
pub const DEFAULT_SUBJECT: &str = "Cobro demo CSM";
pub const DEFAULT_PAYER_EMAIL: &str = "test@example.com";
pub const DEFAULT_PAYER_NAME: &str = "Cliente Demo";

/// Largest integer a double represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Body of `POST /create-payment`.
///
/// Every field is optional and loosely typed. A key that is absent takes its
/// default; a key that is present, even as `null`, is coerced instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaymentInput {
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub subject: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub payer_email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub payer_name: Option<Value>,
}

/// Keeps an explicit `null` distinguishable from a missing key.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CreatePaymentInput {
    /// Decode a request body. Anything other than a JSON object yields the
    /// all-defaults input.
    pub fn from_body(body: Option<Value>) -> Result<Self> {
        match body {
            Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    /// Amount coerced to a number; `None` when it is not a number.
    pub fn amount(&self) -> Option<Number> {
        match &self.amount {
            None => Some(Number::from(DEFAULT_AMOUNT)),
            Some(value) => to_number(value),
        }
    }

    pub fn subject(&self) -> String {
        match &self.subject {
            None => DEFAULT_SUBJECT.to_string(),
            Some(value) => to_text(value),
        }
    }

    pub fn payer_email(&self) -> Option<String> {
        optional_text(self.payer_email.as_ref(), DEFAULT_PAYER_EMAIL)
    }

    pub fn payer_name(&self) -> Option<String> {
        optional_text(self.payer_name.as_ref(), DEFAULT_PAYER_NAME)
    }
}

fn optional_text(value: Option<&Value>, default: &str) -> Option<String> {
    match value {
        None => Some(default.to_string()),
        Some(value) if is_truthy(value) => Some(to_text(value)),
        Some(_) => None,
    }
}

/// Loose numeric coercion: numeric strings parse, booleans become 1/0,
/// `null` and blank strings become 0, everything else is not a number.
pub fn to_number(value: &Value) -> Option<Number> {
    match value {
        Value::Null => Some(Number::from(0)),
        Value::Bool(flag) => Some(Number::from(u8::from(*flag))),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => normalize(float),
            _ => Some(number.clone()),
        },
        Value::String(text) => parse_number(text),
        Value::Array(_) => parse_number(&to_text(value)),
        Value::Object(_) => None,
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Number::from(0));
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .ok()
                .and_then(|n| normalize(n as f64));
        }
    }

    // Rust accepts "inf" and "nan" spellings; both come out non-finite.
    text.parse::<f64>().ok().and_then(normalize)
}

/// Integral values become JSON integers; non-finite values are dropped.
fn normalize(float: f64) -> Option<Number> {
    if !float.is_finite() {
        return None;
    }
    if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(float as i64));
    }
    Number::from_f64(float)
}

/// Loose string coercion.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => float_text(float),
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Decimal notation for magnitudes in [1e-6, 1e21), exponent with an
/// explicit sign outside it: `0.000001`, `1e+21`, `1.5e-7`.
fn float_text(float: f64) -> String {
    if float == 0.0 {
        return "0".to_string();
    }

    let magnitude = float.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", float);
    }

    let exponential = format!("{:e}", float);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
