//! Core trait for priority rules.

/// A scoring rule that assigns a priority key to an item.
///
/// Rules return integer scores where **lower is served first**.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context the score is computed against
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatching::PriorityRule;
///
/// struct Shortest;
///
/// impl PriorityRule<String, ()> for Shortest {
///     fn name(&self) -> &str { "Shortest" }
///     fn score(&self, item: &String, _ctx: &()) -> i64 {
///         item.len() as i64
///     }
/// }
/// ```
pub trait PriorityRule<T, C: ?Sized>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the score of `item`. Lower scores rank first.
    fn score(&self, item: &T, context: &C) -> i64;
}
