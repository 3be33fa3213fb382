//! Rule list state and its declarative card view
//!
//! [`render`] turns a rule set into a [`RuleListView`]: either a placeholder
//! or one [`RuleCard`] per rule, in backend order. Each card carries the
//! messages its actions emit, built once per render.

use chrono::{DateTime, Local};
use pricewatch_core::{format_pct, Rule, RuleSet};

use crate::message::Message;
use crate::rule_form::RulePrefill;

/// Shown instead of cards when no rule exists
pub const EMPTY_PLACEHOLDER: &str = "No rules configured yet. Press n to add one.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Active,
    Inactive,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Active => "ACTIVE",
            Badge::Inactive => "INACTIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Toggle,
    Edit,
    Delete,
}

/// A card action wired to the message it emits
#[derive(Debug, Clone)]
pub struct CardBinding {
    pub action: CardAction,
    pub label: &'static str,
    pub message: Message,
}

/// Display model of one rule
#[derive(Debug, Clone)]
pub struct RuleCard {
    pub symbol: String,
    pub badge: Badge,
    /// Base price text, `-` when absent
    pub base_price: String,
    pub up: String,
    pub down: String,
    /// Signed distance of `up` from the base price
    pub up_change: Option<String>,
    /// Signed distance of `down` from the base price
    pub down_change: Option<String>,
    pub note_up: Option<String>,
    pub note_down: Option<String>,
    pub bindings: Vec<CardBinding>,
}

impl RuleCard {
    fn from_rule(rule: &Rule) -> Self {
        let badge = if rule.active {
            Badge::Active
        } else {
            Badge::Inactive
        };

        let bindings = vec![
            CardBinding {
                action: CardAction::Toggle,
                label: if rule.active { "Deactivate" } else { "Activate" },
                message: Message::ToggleRule {
                    symbol: rule.symbol.clone(),
                    active: !rule.active,
                },
            },
            CardBinding {
                action: CardAction::Edit,
                label: "Edit",
                message: Message::PrefillForm(RulePrefill::from_rule(rule)),
            },
            CardBinding {
                action: CardAction::Delete,
                label: "Delete",
                message: Message::RequestDelete {
                    symbol: rule.symbol.clone(),
                },
            },
        ];

        Self {
            symbol: rule.symbol.clone(),
            badge,
            base_price: rule
                .base_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            up: rule.up.to_string(),
            down: rule.down.to_string(),
            up_change: rule.up_change_pct().map(format_pct),
            down_change: rule.down_change_pct().map(format_pct),
            note_up: non_empty(&rule.note_up),
            note_down: non_empty(&rule.note_down),
            bindings,
        }
    }

    pub fn is_active(&self) -> bool {
        self.badge == Badge::Active
    }

    pub fn binding(&self, action: CardAction) -> Option<&CardBinding> {
        self.bindings.iter().find(|b| b.action == action)
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Debug, Clone)]
pub enum RuleListView {
    Placeholder(&'static str),
    Cards(Vec<RuleCard>),
}

impl RuleListView {
    pub fn cards(&self) -> &[RuleCard] {
        match self {
            RuleListView::Placeholder(_) => &[],
            RuleListView::Cards(cards) => cards,
        }
    }
}

/// Build the view for a rule set; `None` (never loaded) renders like empty
pub fn render(rules: Option<&RuleSet>) -> RuleListView {
    match rules {
        Some(rules) if !rules.is_empty() => {
            RuleListView::Cards(rules.iter().map(RuleCard::from_rule).collect())
        }
        _ => RuleListView::Placeholder(EMPTY_PLACEHOLDER),
    }
}

/// Rule set as last fetched, plus the rendered cards and selection
#[derive(Debug, Clone)]
pub struct RuleListState {
    rules: Option<RuleSet>,
    view: RuleListView,
    pub selected: usize,
    pub loading: bool,
    pub last_loaded: Option<DateTime<Local>>,
}

impl Default for RuleListState {
    fn default() -> Self {
        Self {
            rules: None,
            view: render(None),
            selected: 0,
            loading: false,
            last_loaded: None,
        }
    }
}

impl RuleListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    pub fn view(&self) -> &RuleListView {
        &self.view
    }

    pub fn cards(&self) -> &[RuleCard] {
        self.view.cards()
    }

    /// Discard the previous set and re-render from `rules`
    pub fn replace(&mut self, rules: RuleSet) {
        self.view = render(Some(&rules));
        self.rules = Some(rules);
        self.loading = false;
        self.last_loaded = Some(Local::now());
        self.clamp_selection();
    }

    pub fn selected_card(&self) -> Option<&RuleCard> {
        self.cards().get(self.selected)
    }

    /// The message the selected card emits for `action`
    pub fn selected_binding(&self, action: CardAction) -> Option<Message> {
        self.selected_card()
            .and_then(|card| card.binding(action))
            .map(|binding| binding.message.clone())
    }

    pub fn select_next(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Move the cursor onto `symbol` if it is listed
    pub fn select_symbol(&mut self, symbol: &str) {
        if let Some(idx) = self.cards().iter().position(|c| c.symbol == symbol) {
            self.selected = idx;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.cards().len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }
}
