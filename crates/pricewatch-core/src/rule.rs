//! Price-alert rules and the ordered rule set returned by the backend
//!
//! The backend serves rules as a JSON object keyed by ticker symbol. The
//! object's key order is the display order, so [`RuleSet`] decodes it into an
//! ordered list instead of a hash map. Two schema generations exist: the
//! older one has no `base_price`, the newer one carries it (possibly `null`).
//! Both decode into the same [`Rule`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A per-ticker alert configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Ticker symbol, the primary key of every rule operation
    pub symbol: String,
    /// Reference price; absent in the older schema
    pub base_price: Option<f64>,
    /// Upper threshold
    pub up: f64,
    /// Lower threshold
    pub down: f64,
    /// Annotation shown with the upper alert (empty when unset)
    pub note_up: String,
    /// Annotation shown with the lower alert (empty when unset)
    pub note_down: String,
    /// Whether the backend currently evaluates this rule
    pub active: bool,
}

impl Rule {
    /// Signed percentage distance of `price` from the base price.
    ///
    /// `None` when there is no base price or it is zero.
    pub fn change_from_base(&self, price: f64) -> Option<f64> {
        match self.base_price {
            Some(base) if base != 0.0 => Some((price - base) / base * 100.0),
            _ => None,
        }
    }

    /// Distance of the upper threshold from the base price, in percent
    pub fn up_change_pct(&self) -> Option<f64> {
        self.change_from_base(self.up)
    }

    /// Distance of the lower threshold from the base price, in percent
    pub fn down_change_pct(&self) -> Option<f64> {
        self.change_from_base(self.down)
    }
}

/// Format a signed percentage the way alert messages do (`+6.67%`)
pub fn format_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Wire shape of a rule inside the `symbol -> rule` object
#[derive(Debug, Deserialize)]
struct RuleFields {
    #[serde(default)]
    base_price: Option<f64>,
    up: f64,
    down: f64,
    #[serde(default, rename = "anotacion_up", deserialize_with = "null_as_empty")]
    note_up: String,
    #[serde(default, rename = "anotacion_down", deserialize_with = "null_as_empty")]
    note_down: String,
    #[serde(default = "default_active")]
    active: bool,
}

impl RuleFields {
    fn into_rule(self, symbol: String) -> Rule {
        Rule {
            symbol,
            base_price: self.base_price,
            up: self.up,
            down: self.down,
            note_up: self.note_up,
            note_down: self.note_down,
            active: self.active,
        }
    }
}

fn default_active() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered, symbol-unique collection of rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any rule with the same symbol in place.
    ///
    /// Returns the replaced rule, if any.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        match self.rules.iter_mut().find(|r| r.symbol == rule.symbol) {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    pub fn remove(&mut self, symbol: &str) -> Option<Rule> {
        let idx = self.rules.iter().position(|r| r.symbol == symbol)?;
        Some(self.rules.remove(idx))
    }

    pub fn get(&self, symbol: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.symbol == symbol)
    }

    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|r| r.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.symbol.as_str())
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping ticker symbols to rules")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RuleSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = RuleSet::new();
                while let Some((symbol, fields)) = map.next_entry::<String, RuleFields>()? {
                    set.insert(fields.into_rule(symbol));
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────
// Request payloads
// ─────────────────────────────────────────────────────────────────

/// Body of `POST /api/add`: create-or-update keyed by symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDraft {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    pub up: f64,
    pub down: f64,
    #[serde(rename = "anotacion_up")]
    pub note_up: String,
    #[serde(rename = "anotacion_down")]
    pub note_down: String,
}

impl RuleDraft {
    /// Materialize the draft as a stored rule with the given activity flag
    pub fn into_rule(self, active: bool) -> Rule {
        Rule {
            symbol: self.symbol,
            base_price: self.base_price,
            up: self.up,
            down: self.down,
            note_up: self.note_up,
            note_down: self.note_down,
            active,
        }
    }
}

/// Body of `POST /api/update` when flipping a rule on or off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleActivation {
    pub symbol: String,
    pub active: bool,
}

/// Body of `POST /api/delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleKey {
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(symbol: &str, active: bool) -> Rule {
        Rule {
            symbol: symbol.to_string(),
            base_price: None,
            up: 10.0,
            down: 5.0,
            note_up: String::new(),
            note_down: String::new(),
            active,
        }
    }

    #[test]
    fn test_decode_preserves_object_order() {
        let json = r#"{
            "MSFT": {"base_price": 400.0, "up": 420.0, "down": 380.0, "anotacion_up": "", "anotacion_down": "", "active": true},
            "AAPL": {"base_price": 150.0, "up": 160.0, "down": 140.0, "anotacion_up": "", "anotacion_down": "", "active": false},
            "GGAL": {"base_price": null, "up": 5.0, "down": 3.0, "anotacion_up": "", "anotacion_down": "", "active": true}
        }"#;

        let set: RuleSet = serde_json::from_str(json).unwrap();
        let symbols: Vec<&str> = set.symbols().collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "GGAL"]);
    }

    #[test]
    fn test_decode_older_schema_without_base_price() {
        let json = r#"{"YPF": {"up": 30.5, "down": 20.0, "anotacion_up": "vender", "anotacion_down": "", "active": true}}"#;

        let set: RuleSet = serde_json::from_str(json).unwrap();
        let ypf = set.get("YPF").unwrap();
        assert_eq!(ypf.base_price, None);
        assert_eq!(ypf.up, 30.5);
        assert_eq!(ypf.note_up, "vender");
    }

    #[test]
    fn test_decode_null_annotations_and_missing_active() {
        let json = r#"{"BMA": {"base_price": 7.5, "up": 8.0, "down": 7.0, "anotacion_up": null}}"#;

        let set: RuleSet = serde_json::from_str(json).unwrap();
        let bma = set.get("BMA").unwrap();
        assert_eq!(bma.note_up, "");
        assert_eq!(bma.note_down, "");
        assert!(bma.active);
    }

    #[test]
    fn test_decode_empty_object() {
        let set: RuleSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(serde_json::from_str::<RuleSet>("[1, 2]").is_err());
    }

    #[test]
    fn test_duplicate_key_keeps_one_rule_per_symbol() {
        let json = r#"{
            "AAPL": {"up": 1.0, "down": 0.5},
            "TSLA": {"up": 2.0, "down": 1.0},
            "AAPL": {"up": 9.0, "down": 8.0}
        }"#;

        let set: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("AAPL").unwrap().up, 9.0);
        let symbols: Vec<&str> = set.symbols().collect();
        assert_eq!(symbols, vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set: RuleSet = vec![rule("A", true), rule("B", true)].into_iter().collect();
        let replaced = set.insert(rule("A", false));

        assert!(replaced.unwrap().active);
        assert!(!set.get("A").unwrap().active);
        assert_eq!(set.symbols().next(), Some("A"));
    }

    #[test]
    fn test_remove() {
        let mut set: RuleSet = vec![rule("A", true), rule("B", true)].into_iter().collect();
        assert!(set.remove("A").is_some());
        assert!(set.remove("A").is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_change_from_base() {
        let mut r = rule("AAPL", true);
        r.base_price = Some(150.0);
        r.up = 160.0;
        r.down = 140.0;

        assert_eq!(format_pct(r.up_change_pct().unwrap()), "+6.67%");
        assert_eq!(format_pct(r.down_change_pct().unwrap()), "-6.67%");
    }

    #[test]
    fn test_change_from_base_requires_nonzero_base() {
        let mut r = rule("X", true);
        assert!(r.up_change_pct().is_none());
        r.base_price = Some(0.0);
        assert!(r.up_change_pct().is_none());
    }

    #[test]
    fn test_draft_serializes_wire_names() {
        let draft = RuleDraft {
            symbol: "AAPL".into(),
            base_price: Some(150.0),
            up: 160.0,
            down: 140.0,
            note_up: String::new(),
            note_down: "stop".into(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "symbol": "AAPL",
                "base_price": 150.0,
                "up": 160.0,
                "down": 140.0,
                "anotacion_up": "",
                "anotacion_down": "stop"
            })
        );
    }

    #[test]
    fn test_activation_payload() {
        let body = RuleActivation {
            symbol: "AAPL".into(),
            active: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"symbol": "AAPL", "active": false})
        );
    }
}
