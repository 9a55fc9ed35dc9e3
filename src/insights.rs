use rand::seq::IndexedRandom;

/// Built-in insight pool. One entry is shown after the verdict; the pool
/// can be replaced through the configuration file.
pub const DEFAULT_INSIGHTS: [&str; 4] = [
    "Recommendation: increase cross-team collaboration for higher efficiency.",
    "Insight: small teams work efficiently when given clear weekly targets.",
    "Suggestion: use automated tracking tools to monitor daily progress.",
    "Optimization: a 15% deadline speed-up looks within reach.",
];

/// Pick one insight uniformly at random, `None` on an empty pool.
pub fn pick(pool: &[String]) -> Option<&str> {
    pool.choose(&mut rand::rng()).map(String::as_str)
}

#[test]
fn test_pick_stays_in_pool() {
    let pool = DEFAULT_INSIGHTS.map(String::from);
    for _ in 0..100 {
        let insight = pick(&pool).unwrap();
        assert!(pool.iter().any(|p| p == insight));
    }
}

#[test]
fn test_pick_from_empty_pool() {
    assert_eq!(pick(&[]), None);
}
