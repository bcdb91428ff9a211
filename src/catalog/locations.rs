// src/catalog/locations.rs

/// A canonical place name and the strings accepted as meaning it.
pub struct AliasGroup {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl AliasGroup {
    pub fn matches_any(&self, haystack: &str) -> bool {
        self.variants.iter().any(|variant| haystack.contains(variant))
    }
}

pub const REGION_ALIASES: &[AliasGroup] = &[
    AliasGroup {
        name: "sri lanka",
        variants: &["sri lanka", "srilanka", "lk", "colombo", "kandy", "galle", "jaffna"],
    },
    AliasGroup {
        name: "usa",
        variants: &["united states", "usa", "us", "america"],
    },
    AliasGroup {
        name: "uk",
        variants: &["united kingdom", "uk", "england", "britain"],
    },
    AliasGroup {
        name: "india",
        variants: &["india", "bharat"],
    },
    AliasGroup {
        name: "singapore",
        variants: &["singapore", "sg"],
    },
    AliasGroup {
        name: "canada",
        variants: &["canada", "ca"],
    },
    AliasGroup {
        name: "australia",
        variants: &["australia", "au"],
    },
    AliasGroup {
        name: "remote",
        variants: &["remote", "work from home", "wfh", "anywhere", "distributed"],
    },
];

pub const CITY_ALIASES: &[AliasGroup] = &[
    AliasGroup {
        name: "colombo",
        variants: &["colombo", "sri lanka"],
    },
    AliasGroup {
        name: "kandy",
        variants: &["kandy", "sri lanka"],
    },
    AliasGroup {
        name: "new york",
        variants: &["new york", "ny", "usa", "united states"],
    },
    AliasGroup {
        name: "san francisco",
        variants: &["san francisco", "sf", "california", "usa"],
    },
    AliasGroup {
        name: "london",
        variants: &["london", "uk", "england", "united kingdom"],
    },
    AliasGroup {
        name: "mumbai",
        variants: &["mumbai", "india"],
    },
    AliasGroup {
        name: "bangalore",
        variants: &["bangalore", "bengaluru", "india"],
    },
    AliasGroup {
        name: "toronto",
        variants: &["toronto", "canada"],
    },
    AliasGroup {
        name: "sydney",
        variants: &["sydney", "australia"],
    },
];
