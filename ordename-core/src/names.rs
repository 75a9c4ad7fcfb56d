/// Build the card-rank target-name list for one suit prefix.
///
/// Produces `A`, `2` through `11`, then `J`, `Q`, `K`, each with `prefix`
/// prepended (14 names total). The numeric run ends at 11 because the sprite
/// sets this scheme was built for carry an 11 card.
pub fn suit_rank_names(prefix: &str) -> Vec<String> {
    let mut names = vec![format!("{prefix}A")];
    names.extend((2..=11).map(|rank| format!("{prefix}{rank}")));
    for face in ["J", "Q", "K"] {
        names.push(format!("{prefix}{face}"));
    }
    names
}
