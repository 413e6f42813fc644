//! The compiled-in version registry.
//!
//! Every schema version ships as a module here and is listed in [`all`] in
//! ordinal order. Ordinals are strictly increasing but not contiguous:
//! version 3 was retired before release and its number is never reused.

pub mod v0001_init;
pub mod v0002_checkout_line_item_parent;
pub mod v0004_checkout_line_item_price_config;

use crate::version::Version;

/// Every version this binary can apply or revert, oldest first.
pub fn all() -> &'static [Version] {
    static VERSIONS: &[Version] = &[
        Version {
            ordinal: 1,
            name: "init",
            up: v0001_init::up,
            down: v0001_init::down,
        },
        Version {
            ordinal: 2,
            name: "checkout_line_item_parent",
            up: v0002_checkout_line_item_parent::up,
            down: v0002_checkout_line_item_parent::down,
        },
        Version {
            ordinal: 4,
            name: "checkout_line_item_price_config",
            up: v0004_checkout_line_item_price_config::up,
            down: v0004_checkout_line_item_price_config::down,
        },
    ];
    VERSIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version;

    #[test]
    fn registry_passes_validation() {
        version::validate(all()).unwrap();
    }

    #[test]
    fn shipped_ordinals_skip_the_retired_third() {
        let ordinals: Vec<i64> = all().iter().map(|v| v.ordinal).collect();
        assert_eq!(ordinals, [1, 2, 4]);
    }

    #[test]
    fn names_match_their_modules() {
        let names: Vec<&str> = all().iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            [
                "init",
                "checkout_line_item_parent",
                "checkout_line_item_price_config",
            ]
        );
    }
}
