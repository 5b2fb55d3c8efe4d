//! Default activity templates seeded into an empty catalog.

/// A built-in activity template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDefault {
    pub name: &'static str,
    pub description: &'static str,
}

/// Templates inserted by the seeding step when the catalog is empty.
pub const DEFAULT_ACTIVITIES: &[ActivityDefault] = &[
    ActivityDefault {
        name: "Climbing",
        description: "Rock climbing, bouldering, and alpine routes",
    },
    ActivityDefault {
        name: "Camping",
        description: "Overnight stays in a tent, hut, or bivy",
    },
    ActivityDefault {
        name: "Hiking",
        description: "Day hikes and multi-day treks on trails",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_unique_names() {
        let mut names: Vec<_> = DEFAULT_ACTIVITIES.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names, vec!["Camping", "Climbing", "Hiking"]);
    }

    #[test]
    fn defaults_have_descriptions() {
        assert!(DEFAULT_ACTIVITIES.iter().all(|a| !a.description.is_empty()));
    }
}
