use crate::keys::event::KeyEventLike;
use crate::keys::pattern::ParsedPattern;
use crate::keys::tables::ModifierProp;

/// Cartesian product of `groups`, picking one element from each group.
///
/// The product of no groups is a single empty combination.
pub fn combinations<T: Copy>(groups: &[Vec<T>]) -> Vec<Vec<T>> {
    groups.iter().fold(vec![Vec::new()], |acc, group| {
        acc.iter()
            .flat_map(|prefix| {
                group.iter().map(move |item| {
                    let mut combination = prefix.clone();
                    combination.push(*item);
                    combination
                })
            })
            .collect()
    })
}

/// Decides whether `event` satisfies a single pattern.
///
/// Without `Any`, the held modifiers must be exactly one substitution of the
/// declared groups: `Ctrl+A` accepts Control or Command but not both. With
/// `Any`, each declared group needs one held property and everything else is
/// ignored.
pub fn match_single_pattern(pattern: &ParsedPattern, event: &KeyEventLike) -> bool {
    if !pattern.trigger.matches(event) {
        return false;
    }

    if pattern.modifier_groups.is_empty() {
        return pattern.allow_any_modifiers
            || ModifierProp::ALL.iter().all(|prop| !event.is_held(*prop));
    }

    if pattern.allow_any_modifiers {
        return pattern
            .modifier_groups
            .iter()
            .all(|group| group.iter().any(|prop| event.is_held(*prop)));
    }

    combinations(&pattern.modifier_groups)
        .iter()
        .any(|required| {
            ModifierProp::ALL
                .iter()
                .all(|prop| required.contains(prop) == event.is_held(*prop))
        })
}

/// True when any of the alternatives matches.
pub fn match_patterns(patterns: &[ParsedPattern], event: &KeyEventLike) -> bool {
    patterns
        .iter()
        .any(|pattern| match_single_pattern(pattern, event))
}
