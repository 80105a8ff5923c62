//! Media slots offered by the upload utility

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MediaItem {
    pub file_name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MediaSlot {
    /// Category path relative to the key prefix, e.g. `images/burgers`
    pub path: &'static str,
    pub label: &'static str,
    pub items: &'static [MediaItem],
    /// Counted in the upload status report
    #[serde(skip)]
    pub tracked: bool,
}

const fn m(file_name: &'static str, label: &'static str) -> MediaItem {
    MediaItem { file_name, label }
}

pub static MEDIA_SLOTS: &[MediaSlot] = &[
    MediaSlot {
        path: "images/branding",
        label: "Logo & Branding",
        items: &[
            m("logo-primary", "Primary Logo"),
            m("logo-white", "White Logo"),
            m("logo-dark", "Dark Logo"),
            m("logo-icon", "Logo Icon Only"),
            m("favicon", "Favicon"),
        ],
        tracked: false,
    },
    MediaSlot {
        path: "images/hero",
        label: "Hero Section",
        items: &[m("hero-burger", "Hero Burger Image"), m("hero-bg", "Hero Background")],
        tracked: true,
    },
    MediaSlot {
        path: "images/burgers",
        label: "Burgers",
        items: &[
            m("cheese-burger", "Cheese Burger"),
            m("double-cheese-burger", "Double Cheese Burger"),
            m("jalapeno-cheese-burger", "Jalapeño Cheese Burger"),
        ],
        tracked: true,
    },
    MediaSlot {
        path: "images/chicken",
        label: "Chicken",
        items: &[
            m("nashville-hot", "Nashville Hot Chicken"),
            m("buffalo-ranch", "Buffalo Ranch Chicken"),
            m("sweet-chili", "Sweet Chili Chicken"),
        ],
        tracked: true,
    },
    MediaSlot {
        path: "images/sides",
        label: "Sides",
        items: &[
            m("fries", "Fries"),
            m("loaded-beef-fries", "Loaded Beef Fries"),
            m("loaded-chicken-fries", "Loaded Chicken Fries"),
            m("hot-tenders", "Hot Tenders"),
            m("buttermilk-biscuit", "Buttermilk Biscuit"),
        ],
        tracked: true,
    },
    MediaSlot {
        path: "images/drinks",
        label: "Drinks",
        items: &[
            m("soft-drinks", "Soft Drinks"),
            m("vanilla-shake", "Vanilla Milkshake"),
            m("nutella-shake", "Nutella Milkshake"),
            m("strawberry-shake", "Strawberry Milkshake"),
            m("oreo-shake", "Oreo Milkshake"),
        ],
        tracked: true,
    },
    MediaSlot {
        path: "images/meals",
        label: "Combo Meals",
        items: &[
            m("cheese-burger-meal", "Cheese Burger Meal"),
            m("double-cheese-burger-meal", "Double Cheese Burger Meal"),
            m("jalapeno-burger-meal", "Jalapeño Burger Meal"),
            m("nashville-hot-meal", "Nashville Hot Chicken Meal"),
            m("buffalo-ranch-meal", "Buffalo Ranch Chicken Meal"),
            m("sweet-chili-meal", "Sweet Chili Chicken Meal"),
            m("loaded-fries-combo", "Loaded Fries Combo"),
            m("tenders-meal", "Hot Tenders Meal"),
        ],
        tracked: true,
    },
    MediaSlot {
        path: "images/restaurant",
        label: "Restaurant",
        items: &[m("interior", "Interior"), m("exterior", "Exterior"), m("kitchen", "Kitchen")],
        tracked: true,
    },
    MediaSlot {
        path: "images/history",
        label: "History",
        items: &[m("lionel-sternberger", "Lionel Sternberger Photo")],
        tracked: false,
    },
    MediaSlot {
        path: "videos",
        label: "Videos",
        items: &[m("hero-video", "Hero Video"), m("burger-making", "Burger Making Process")],
        tracked: false,
    },
];

/// Keys the site expects to find, as PNGs under `prefix`
pub fn expected_image_keys(prefix: &str) -> Vec<String> {
    let prefix = prefix.trim_end_matches('/');
    MEDIA_SLOTS
        .iter()
        .filter(|slot| slot.tracked)
        .flat_map(|slot| {
            slot.items
                .iter()
                .map(move |item| format!("{}/{}/{}.png", prefix, slot.path, item.file_name))
        })
        .collect()
}

/// Status of stored keys against the expected set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStatus {
    pub uploaded: usize,
    pub missing: Vec<String>,
}

pub fn media_status<'a>(prefix: &str, stored: impl IntoIterator<Item = &'a str>) -> MediaStatus {
    let stored: std::collections::HashSet<&str> = stored.into_iter().collect();
    let missing = expected_image_keys(prefix)
        .into_iter()
        .filter(|key| !stored.contains(key.as_str()))
        .collect();
    MediaStatus {
        uploaded: stored.len(),
        missing,
    }
}
