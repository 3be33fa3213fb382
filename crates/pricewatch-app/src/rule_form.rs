//! Create/edit form for alert rules
//!
//! The form is an upsert: submitting a symbol that already exists replaces
//! that rule on the backend. Values typed here are validated locally before
//! any request is made.

use pricewatch_core::prelude::*;
use pricewatch_core::{Rule, RuleDraft};

/// Message shown when a required field is empty
pub const REQUIRED_FIELDS_MESSAGE: &str = "Ticker, base price, up and down prices are required.";

/// Input fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleField {
    #[default]
    Symbol,
    BasePrice,
    Up,
    Down,
    NoteUp,
    NoteDown,
}

impl RuleField {
    pub const ALL: [RuleField; 6] = [
        RuleField::Symbol,
        RuleField::BasePrice,
        RuleField::Up,
        RuleField::Down,
        RuleField::NoteUp,
        RuleField::NoteDown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleField::Symbol => "Ticker",
            RuleField::BasePrice => "Base price",
            RuleField::Up => "Up price",
            RuleField::Down => "Down price",
            RuleField::NoteUp => "Up note",
            RuleField::NoteDown => "Down note",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, RuleField::NoteUp | RuleField::NoteDown)
    }

    pub fn next(&self) -> RuleField {
        let idx = (self.index() + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn previous(&self) -> RuleField {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Values copied into the form when the user edits an existing rule
#[derive(Debug, Clone, PartialEq)]
pub struct RulePrefill {
    pub symbol: String,
    pub base_price: Option<f64>,
    pub up: f64,
    pub down: f64,
    pub note_up: String,
    pub note_down: String,
}

impl RulePrefill {
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            symbol: rule.symbol.clone(),
            base_price: rule.base_price,
            up: rule.up,
            down: rule.down,
            note_up: rule.note_up.clone(),
            note_down: rule.note_down.clone(),
        }
    }
}

/// Text buffers of the rule form plus the focused field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleFormState {
    pub symbol: String,
    pub base_price: String,
    pub up: String,
    pub down: String,
    pub note_up: String,
    pub note_down: String,
    pub focused: RuleField,
    /// Values were copied from an existing rule by Edit
    pub from_prefill: bool,
}

impl RuleFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: RuleField) -> &str {
        match field {
            RuleField::Symbol => &self.symbol,
            RuleField::BasePrice => &self.base_price,
            RuleField::Up => &self.up,
            RuleField::Down => &self.down,
            RuleField::NoteUp => &self.note_up,
            RuleField::NoteDown => &self.note_down,
        }
    }

    fn value_mut(&mut self, field: RuleField) -> &mut String {
        match field {
            RuleField::Symbol => &mut self.symbol,
            RuleField::BasePrice => &mut self.base_price,
            RuleField::Up => &mut self.up,
            RuleField::Down => &mut self.down,
            RuleField::NoteUp => &mut self.note_up,
            RuleField::NoteDown => &mut self.note_down,
        }
    }

    pub fn focused_value(&self) -> &str {
        self.value(self.focused)
    }

    /// Replace the focused field's text
    pub fn set_focused(&mut self, text: String) {
        *self.value_mut(self.focused) = text;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Copy a rule's values verbatim and focus the first field.
    ///
    /// An absent base price leaves that field empty.
    pub fn prefill(&mut self, prefill: &RulePrefill) {
        self.symbol = prefill.symbol.clone();
        self.base_price = prefill
            .base_price
            .map(|p| p.to_string())
            .unwrap_or_default();
        self.up = prefill.up.to_string();
        self.down = prefill.down.to_string();
        self.note_up = prefill.note_up.clone();
        self.note_down = prefill.note_down.clone();
        self.focused = RuleField::Symbol;
        self.from_prefill = true;
    }

    /// Empty every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        RuleField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Build the request body, or explain why the form cannot be submitted
    pub fn validate(&self) -> Result<RuleDraft> {
        let missing = RuleField::ALL
            .iter()
            .filter(|f| f.is_required())
            .any(|f| self.value(*f).trim().is_empty());
        if missing {
            return Err(Error::validation(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(RuleDraft {
            symbol: self.symbol.trim().to_uppercase(),
            base_price: Some(self.parse_price(RuleField::BasePrice)?),
            up: self.parse_price(RuleField::Up)?,
            down: self.parse_price(RuleField::Down)?,
            note_up: self.note_up.clone(),
            note_down: self.note_down.clone(),
        })
    }

    fn parse_price(&self, field: RuleField) -> Result<f64> {
        match self.value(field).trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::validation(format!(
                "{} must be a number.",
                field.label()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(symbol: &str, base: &str, up: &str, down: &str) -> RuleFormState {
        RuleFormState {
            symbol: symbol.to_string(),
            base_price: base.to_string(),
            up: up.to_string(),
            down: down.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_builds_draft() {
        let mut form = filled(" aapl ", "150", "160", "140.5");
        form.note_up = "breakout".to_string();

        let draft = form.validate().unwrap();
        assert_eq!(draft.symbol, "AAPL");
        assert_eq!(draft.base_price, Some(150.0));
        assert_eq!(draft.up, 160.0);
        assert_eq!(draft.down, 140.5);
        assert_eq!(draft.note_up, "breakout");
        assert_eq!(draft.note_down, "");
    }

    #[test]
    fn test_validate_rejects_missing_required() {
        for form in [
            filled("", "150", "160", "140"),
            filled("AAPL", "", "160", "140"),
            filled("AAPL", "150", "", "140"),
            filled("AAPL", "150", "160", "  "),
        ] {
            let err = form.validate().unwrap_err();
            assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_validate_rejects_non_numeric() {
        let err = filled("AAPL", "150", "lots", "140").validate().unwrap_err();
        assert_eq!(err.to_string(), "Up price must be a number.");

        let err = filled("AAPL", "inf", "160", "140").validate().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_prefill_copies_verbatim() {
        let mut form = RuleFormState::new();
        form.focused = RuleField::Down;
        form.prefill(&RulePrefill {
            symbol: "TSLA".to_string(),
            base_price: None,
            up: 300.0,
            down: 180.25,
            note_up: "sell half".to_string(),
            note_down: String::new(),
        });

        assert_eq!(form.symbol, "TSLA");
        assert_eq!(form.base_price, "");
        assert_eq!(form.up, "300");
        assert_eq!(form.down, "180.25");
        assert_eq!(form.note_up, "sell half");
        assert_eq!(form.focused, RuleField::Symbol);
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = RuleFormState::new();
        for expected in RuleField::ALL.iter().skip(1) {
            form.focus_next();
            assert_eq!(form.focused, *expected);
        }
        form.focus_next();
        assert_eq!(form.focused, RuleField::Symbol);
        form.focus_previous();
        assert_eq!(form.focused, RuleField::NoteDown);
    }

    #[test]
    fn test_set_focused_and_clear() {
        let mut form = RuleFormState::new();
        form.set_focused("NVDA".to_string());
        assert_eq!(form.focused_value(), "NVDA");
        assert!(!form.is_blank());

        form.clear();
        assert!(form.is_blank());
    }
}
