use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a>
{
    Country(&'a str),
    Exhausted,
}

/// Draws uniformly from `pool - used`. Neither input is modified.
pub fn pick_country<'a, R: Rng + ?Sized>(
    rng: &mut R,
    used: &HashSet<String>,
    pool: &'a [String],
) -> Selection<'a>
{
    let available: Vec<&'a String> = pool
        .iter()
        .filter(|country| !used.contains(*country))
        .collect();
    match available.choose(rng) {
        Some(&country) => Selection::Country(country.as_str()),
        None => Selection::Exhausted,
    }
}
