use blockaudit_types::RuleId;
use std::collections::BTreeSet;

/// Default cap on array/object nesting accepted by the content parser.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// The rules enabled for one audit. Membership is all that matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeSet<RuleId>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        RuleId::ALL.into_iter().collect()
    }

    /// Build an activation set from wire identifiers.
    ///
    /// Duplicates collapse. Identifiers that name no known rule are returned separately, in
    /// input order, so the caller can report them.
    pub fn resolve<I, S>(ids: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = BTreeSet::new();
        let mut unknown = Vec::new();
        for id in ids {
            let id = id.as_ref();
            match RuleId::parse(id) {
                Some(rule) => {
                    rules.insert(rule);
                }
                None => unknown.push(id.to_string()),
            }
        }
        (Self { rules }, unknown)
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.rules.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().copied()
    }

    pub fn without(mut self, rule: RuleId) -> Self {
        self.rules.remove(&rule);
        self
    }
}

impl FromIterator<RuleId> for RuleSet {
    fn from_iter<T: IntoIterator<Item = RuleId>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Knobs that bound the work a single audit may do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditOptions {
    pub max_depth: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
