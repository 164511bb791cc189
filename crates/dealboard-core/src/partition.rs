use crate::offers::Offer;

/// Splits `deals` into consecutive groups of `items_per_group`; the last
/// group may be shorter.
///
/// Always recomputed from scratch, so identical input gives identical
/// groups. An `items_per_group` of zero is treated as one.
#[must_use]
pub fn partition(deals: &[Offer], items_per_group: usize) -> Vec<Vec<Offer>> {
    deals
        .chunks(items_per_group.max(1))
        .map(<[Offer]>::to_vec)
        .collect()
}
