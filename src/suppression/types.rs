//! Suppression directive data model

/// Which rules a directive applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleSelector {
    /// Every rule
    All,
    /// A single rule, matched case-insensitively
    Named(String),
}

impl RuleSelector {
    pub fn named(rule: &str) -> Self {
        RuleSelector::Named(rule.to_ascii_lowercase())
    }

    pub fn matches(&self, rule_name: &str) -> bool {
        match self {
            RuleSelector::All => true,
            RuleSelector::Named(name) => name.eq_ignore_ascii_case(rule_name),
        }
    }
}

/// An inline instruction to ignore a rule on a line or a line range
///
/// Line numbers are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressionDirective {
    /// Applies to exactly one line
    Line { rule: RuleSelector, line: usize },
    /// Applies to every line in `start_line..=end_line`
    Range {
        rule: RuleSelector,
        start_line: usize,
        end_line: usize,
    },
}

impl SuppressionDirective {
    pub fn line(rule: RuleSelector, line: usize) -> Self {
        SuppressionDirective::Line { rule, line }
    }

    /// A range directive, or `None` if the range is empty or inverted
    pub fn range(rule: RuleSelector, start_line: usize, end_line: usize) -> Option<Self> {
        if start_line == 0 || end_line < start_line {
            return None;
        }
        Some(SuppressionDirective::Range {
            rule,
            start_line,
            end_line,
        })
    }

    pub fn rule(&self) -> &RuleSelector {
        match self {
            SuppressionDirective::Line { rule, .. } | SuppressionDirective::Range { rule, .. } => {
                rule
            }
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, SuppressionDirective::Range { .. })
    }

    /// True when this directive silences `rule_name` at `line`
    pub fn suppresses(&self, rule_name: &str, line: usize) -> bool {
        let covers_line = match self {
            SuppressionDirective::Line { line: at, .. } => *at == line,
            SuppressionDirective::Range {
                start_line,
                end_line,
                ..
            } => (*start_line..=*end_line).contains(&line),
        };
        covers_line && self.rule().matches(rule_name)
    }
}

/// Every suppression directive found in one unit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionSet {
    directives: Vec<SuppressionDirective>,
}

impl SuppressionSet {
    pub fn new(directives: Vec<SuppressionDirective>) -> Self {
        Self { directives }
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuppressionDirective> {
        self.directives.iter()
    }

    /// True when any directive silences `rule_name` at `line`
    pub fn suppresses(&self, rule_name: &str, line: usize) -> bool {
        self.directives
            .iter()
            .any(|directive| directive.suppresses(rule_name, line))
    }

    /// End lines of the range directives that start at `start_line`
    pub fn range_ends_from(&self, start_line: usize) -> impl Iterator<Item = usize> + '_ {
        self.directives.iter().filter_map(move |directive| match directive {
            SuppressionDirective::Range {
                start_line: start,
                end_line,
                ..
            } if *start == start_line => Some(*end_line),
            _ => None,
        })
    }
}

impl FromIterator<SuppressionDirective> for SuppressionSet {
    fn from_iter<I: IntoIterator<Item = SuppressionDirective>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
