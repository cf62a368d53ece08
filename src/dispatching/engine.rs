//! Rule composition engine.

use super::types::PriorityRule;

/// Engine for composing and applying multiple priority rules.
///
/// # Examples
///
/// ```ignore
/// let engine = RuleEngine::new()
///     .with_rule(ByPriority)
///     .with_rule(ByReportTime);
///
/// let order = engine.sort_indices(&incidents, &());
/// ```
pub struct RuleEngine<T, C: ?Sized> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
}

impl<T, C: ?Sized> RuleEngine<T, C> {
    /// Creates an engine with no rules. Without rules every item ties.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; it is consulted only when all earlier rules tie.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Composite key of an item: one score per rule, compared
    /// lexicographically.
    fn key(&self, item: &T, context: &C) -> Vec<i64> {
        self.rules
            .iter()
            .map(|rule| rule.score(item, context))
            .collect()
    }

    /// Sorts items by priority and returns indices into the original slice.
    ///
    /// The sort is stable: fully tied items keep their slice order.
    pub fn sort_indices(&self, items: &[T], context: &C) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let keys: Vec<Vec<i64>> = items.iter().map(|item| self.key(item, context)).collect();
        indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        indices
    }

    /// Sorts items by priority and returns references in sorted order.
    pub fn sort<'a>(&self, items: &'a [T], context: &C) -> Vec<&'a T> {
        self.sort_indices(items, context)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns the highest-priority candidate.
    ///
    /// On a full tie the first candidate yielded wins. Returns `None` when
    /// there are no candidates.
    pub fn select_best<'a, I>(&self, candidates: I, context: &C) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut best: Option<(&'a T, Vec<i64>)> = None;
        for item in candidates {
            let key = self.key(item, context);
            match &best {
                Some((_, best_key)) if *best_key <= key => {}
                _ => best = Some((item, key)),
            }
        }
        best.map(|(item, _)| item)
    }
}

impl<T, C: ?Sized> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
