//! Fixed vocabulary lists used by the row generators.
//!
//! These mirror the value sets the seeded application expects to find in
//! its lookup-style columns; the lists are closed, not samples.

/// Education values for artists.
pub const UNIVERSITIES: &[&str] = &[
    "University of Cambridge",
    "University of Oxford",
    "Stanford University",
    "Massachusetts Institute of Technology",
    "University of Chicago",
    "University of California",
    "University of Pennsylvania",
    "Yale University",
    "Columbia University",
    "Princeton University",
];

/// Art movement values for artists.
pub const MOVEMENTS: &[&str] = &[
    "Abstract Expressionism",
    "Baroque",
    "Cubism",
    "Dada",
    "Fauvism",
    "Impressionism",
    "Minimalism",
    "Pop Art",
    "Renaissance",
    "Romanticism",
    "Surrealism",
];

/// Leading adjectives for painting titles.
pub const DESCRIPTIVE_WORDS: &[&str] = &[
    "Majestic",
    "Ephemeral",
    "Whimsical",
    "Serene",
    "Mystical",
    "Vibrant",
    "Elegant",
    "Bold",
    "Surreal",
    "Dreamy",
];

/// Medium values for paintings.
pub const MEDIUMS: &[&str] = &["Oil", "Acrylic", "Watercolor", "Pastel", "Charcoal", "Digital"];

/// Subject values for paintings.
pub const SUBJECTS: &[&str] = &[
    "Landscape",
    "Portrait",
    "Still Life",
    "Abstract",
    "Cityscape",
    "Wildlife",
    "Floral",
    "Historical",
    "Mythological",
    "Religious",
    "Marine",
];
