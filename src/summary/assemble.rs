//! Turns configured sections and their values into a [`TokenLine`].

use config::ConfigError;

use super::quantity::{Quantity, QuantityFormats, QuantityKind, Separator, Visibility};
use super::tokens::{DisplayToken, TokenLine};

/// The current value of a quantity. `None` means absent, which is distinct
/// from zero: a branch without an upstream has no remote counts at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityValue {
    Count(Option<usize>),
    Text(Option<String>),
}

impl QuantityValue {
    pub fn kind(&self) -> QuantityKind {
        match self {
            QuantityValue::Count(_) => QuantityKind::Numeric,
            QuantityValue::Text(_) => QuantityKind::String,
        }
    }
}

/// Assemble the compact summary line.
///
/// `values` is asked once per section. A separator token precedes every
/// visible quantity except the first. The [`Quantity::Branch`] value token
/// is marked as the line's branch name.
pub fn assemble(
    sections: &[Quantity],
    values: impl Fn(Quantity) -> QuantityValue,
    formats: &QuantityFormats,
    separator: &Separator,
) -> Result<TokenLine, ConfigError> {
    let mut line = TokenLine::new();
    let mut first = true;

    for &quantity in sections {
        let format = formats.get(quantity);
        let value = values(quantity);
        check_visibility(quantity, format.show, value.kind())?;

        // (show value?, value text)
        let shown = match (format.show, value) {
            (Visibility::Num, QuantityValue::Count(Some(n))) if n > 0 => Some(Some(n.to_string())),
            (Visibility::Boolean, QuantityValue::Count(Some(n))) if n > 0 => Some(None),
            (Visibility::Yes, QuantityValue::Text(Some(text))) => Some(Some(text)),
            _ => None,
        };
        let Some(text) = shown else {
            continue;
        };

        // A piece that renders to nothing, such as `boolean` with an empty
        // prefix, counts as hidden.
        let prefix = format.prefix.as_str();
        let suffix = text.as_ref().map_or("", |_| format.suffix.as_str());
        if prefix.is_empty() && suffix.is_empty() && text.as_deref().is_none_or(str::is_empty) {
            continue;
        }

        if !first {
            line.push(DisplayToken::new(&separator.style, separator.text.as_str()));
        }
        first = false;

        if !prefix.is_empty() {
            line.push(DisplayToken::new(&format.style, prefix));
        }
        if let Some(text) = text {
            let token = DisplayToken::new(&format.style, text);
            if quantity == Quantity::Branch {
                line.push_branch_name(token);
            } else {
                line.push(token);
            }
            if !suffix.is_empty() {
                line.push(DisplayToken::new(&format.style, suffix));
            }
        }
    }

    Ok(line)
}

/// Reject a visibility that makes no sense for the quantity's kind, such as
/// `boolean` for a branch name.
pub fn check_visibility(
    quantity: Quantity,
    show: Visibility,
    kind: QuantityKind,
) -> Result<(), ConfigError> {
    if show.is_allowed_for(kind) {
        return Ok(());
    }
    let allowed: Vec<String> = Visibility::allowed(kind)
        .iter()
        .map(ToString::to_string)
        .collect();
    Err(ConfigError::Message(format!(
        "Invalid show = \"{show}\" for {quantity} (a {kind} quantity); expected one of: {}",
        allowed.join(", ")
    )))
}
