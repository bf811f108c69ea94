//! Random human-readable token names.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brisk", "calm", "chief", "civil", "clear", "crisp", "deep", "eager",
    "early", "fancy", "fond", "frank", "glad", "grand", "happy", "keen", "light", "lively",
    "lucid", "mellow", "merry", "noble", "polar", "proud", "quick", "quiet", "rapid", "sharp",
    "shiny", "sleek", "solid", "stark", "steady", "sunny", "swift", "tidy", "vivid", "warm",
];

const NOUNS: &[&str] = &[
    "alder", "aspen", "badger", "bison", "brook", "cedar", "comet", "coral", "crane", "delta",
    "falcon", "fjord", "gecko", "glade", "harbor", "heron", "lagoon", "lark", "lynx", "maple",
    "marten", "meadow", "mesa", "otter", "owl", "pine", "plover", "prairie", "raven", "reef",
    "ridge", "river", "robin", "sparrow", "spruce", "stork", "summit", "tundra", "willow", "wren",
];

/// Generate an adjective-noun token name, e.g. `brisk-heron`.
///
/// Names identify the token in the Studio profile; uniqueness is
/// best-effort, not guaranteed.
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{adjective}-{noun}")
}
