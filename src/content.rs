//! Static page content.
//!
//! Read-only to the engine: only the fact list's length matters (it is
//! the rotation modulus).  The rest is carried for renderers.

use serde::{Deserialize, Serialize};

/// One point of the adoption chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionStat {
    pub label: String,
    pub value: u32,
}

/// Immutable content supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticContent {
    pub facts: Vec<String>,
    pub breeds: Vec<String>,
    pub care_tips: Vec<String>,
    pub adoption_stats: Vec<AdoptionStat>,
}

const FACTS: [&str; 10] = [
    "Cats have excellent night vision and can see at one-sixth the light level required for human vision.",
    "A group of cats is called a \"clowder\".",
    "Cats spend 70% of their lives sleeping.",
    "A cat's hearing is much more sensitive than humans and dogs.",
    "Cats have over 20 vocalizations, including the famous purr.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats can rotate their ears 180 degrees.",
    "The oldest known pet cat was found in a 9,500-year-old grave in Cyprus.",
    "Cats walk like camels and giraffes, moving both right legs then both left legs.",
    "A cat can jump up to six times its own length.",
];

const BREEDS: [&str; 5] = [
    "Siamese: Known for their distinctive coloring and vocal nature.",
    "Maine Coon: One of the largest domesticated cat breeds with a distinctive physical appearance.",
    "Persian: Recognized for their long fur and flat faces.",
    "Bengal: Noted for their wild appearance resembling leopards.",
    "Scottish Fold: Famous for their unique folded ears and owl-like appearance.",
];

const CARE_TIPS: [&str; 5] = [
    "Provide a balanced diet suitable for your cat's age and health condition.",
    "Ensure fresh water is always available.",
    "Regular grooming helps reduce hairballs and strengthens your bond.",
    "Schedule annual check-ups with your veterinarian.",
    "Offer plenty of mental stimulation with toys and play sessions.",
];

const ADOPTIONS: [(&str, u32); 6] = [
    ("Jan", 65),
    ("Feb", 59),
    ("Mar", 80),
    ("Apr", 81),
    ("May", 56),
    ("Jun", 55),
];

impl Default for StaticContent {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| (*s).to_owned()).collect()
        };
        Self {
            facts: owned(&FACTS),
            breeds: owned(&BREEDS),
            care_tips: owned(&CARE_TIPS),
            adoption_stats: ADOPTIONS
                .iter()
                .map(|&(label, value)| AdoptionStat {
                    label: label.to_owned(),
                    value,
                })
                .collect(),
        }
    }
}

impl StaticContent {
    /// Fact shown at rotation index `index`.
    pub fn fact(&self, index: usize) -> Option<&str> {
        self.facts.get(index).map(String::as_str)
    }
}
