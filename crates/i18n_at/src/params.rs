use std::borrow::Cow;
use std::fmt;

/// A parameter value substituted into a template.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) if *v == 0.0 => f.write_str("0"),
            Self::Float(v) if v.is_nan() => f.write_str("NaN"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Float(v) => write_float(f, *v),
        }
    }
}

/// Shortest round-trip digits of a finite, non-zero `v`, laid out like
/// JavaScript's `Number.prototype.toString`: plain decimals for exponents
/// in `-7..21`, `1.5e+21` / `1e-7` outside that range.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if v < 0.0 {
        f.write_str("-")?;
    }
    if k <= n && n <= 21 {
        write!(f, "{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        write!(f, "{int}.{frac}")
    } else if -6 < n && n <= 0 {
        write!(f, "0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if n > 0 { '+' } else { '-' };
        let exp = (n - 1).unsigned_abs();
        if rest.is_empty() {
            write!(f, "{first}e{sign}{exp}")
        } else {
            write!(f, "{first}.{rest}e{sign}{exp}")
        }
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

/// Named parameters for one translation call.
///
/// Order is significant: substitution runs parameter by parameter in
/// insertion order. Setting an existing name replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(Cow<'static, str>, ArgValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Cow<'static, str>>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Build [`Params`] from `name: value` pairs.
///
/// - `params!()`
/// - `params!(name: user_name, count: 3)`
#[macro_export]
macro_rules! params {
    ($($name:ident : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut p = $crate::Params::new();
        $(
            p.set(stringify!($name), $value);
        )*
        p
    }};
}
