// ============================================================================
// Steiny Core - Page Composer
// File: crates/steiny-core/src/page.rs
// Description: Section order, scroll-driven view state, home page assembly
// ============================================================================

use serde::Serialize;

use crate::catalog::{Catalog, ImageRef, MenuItem};
use crate::site::{OpeningHours, SiteInfo};

const HERO_IMAGE: ImageRef =
    ImageRef::External("https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=800&q=80");
const HERO_BACKGROUND: ImageRef = ImageRef::Stored("steiny/images/hero/hero-bg.png");

/// Brochure sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Menu,
    Location,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Menu,
        SectionId::Location,
        SectionId::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Menu => "menu",
            SectionId::Location => "location",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "Our Story",
            SectionId::Menu => "Menu",
            SectionId::Location => "Location",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn toggle(self) -> Self {
        match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        }
    }

    pub fn close(self) -> Self {
        MobileMenu::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenu::Open)
    }
}

/// Vertical extent of one rendered section, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section containing the reference point `scroll_y + reference_offset`.
/// First match wins when bounds overlap.
pub fn active_section(
    bounds: &[SectionBounds],
    scroll_y: f64,
    reference_offset: f64,
) -> Option<SectionId> {
    let point = scroll_y + reference_offset;
    bounds.iter().find(|b| b.contains(point)).map(|b| b.section)
}

/// Client view state; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_section: SectionId,
    pub mobile_menu: MobileMenu,
    pub active_tab: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Hero,
            mobile_menu: MobileMenu::Closed,
            active_tab: None,
        }
    }
}

impl ViewState {
    /// Offset below the viewport top used as the scroll reference point,
    /// roughly the height of the fixed nav bar
    pub const REFERENCE_OFFSET: f64 = 100.0;

    pub fn on_scroll(&mut self, bounds: &[SectionBounds], scroll_y: f64) {
        if let Some(section) = active_section(bounds, scroll_y, Self::REFERENCE_OFFSET) {
            self.active_section = section;
        }
    }

    pub fn select_section(&mut self, section: SectionId) {
        self.active_section = section;
        self.mobile_menu = self.mobile_menu.close();
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu = self.mobile_menu.toggle();
    }

    pub fn select_tab(&mut self, key: impl Into<String>) {
        self.active_tab = Some(key.into());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuTab {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub addon: Option<&'static str>,
    pub image_url: Option<String>,
    pub popular: bool,
    pub spicy: bool,
}

impl MenuItemView {
    fn from_item(item: &MenuItem, media_base_url: &str) -> Self {
        Self {
            name: item.name,
            price: item.price,
            description: item.description,
            addon: item.addon,
            image_url: item.image.map(|i| i.resolve(media_base_url)),
            popular: item.popular,
            spicy: item.spicy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageSection {
    Hero {
        anchor: &'static str,
        title: &'static str,
        tagline: &'static str,
        image_url: String,
        background_url: String,
    },
    About {
        anchor: &'static str,
        paragraphs: &'static [&'static str],
    },
    Menu {
        anchor: &'static str,
        tabs: Vec<MenuTab>,
        items: Vec<MenuItemView>,
    },
    Location {
        anchor: &'static str,
        address: String,
        map_url: String,
        hours: &'static [OpeningHours],
    },
    Contact {
        anchor: &'static str,
        phone_display: &'static str,
        phone_e164: &'static str,
    },
}

impl PageSection {
    pub fn id(&self) -> SectionId {
        match self {
            PageSection::Hero { .. } => SectionId::Hero,
            PageSection::About { .. } => SectionId::About,
            PageSection::Menu { .. } => SectionId::Menu,
            PageSection::Location { .. } => SectionId::Location,
            PageSection::Contact { .. } => SectionId::Contact,
        }
    }
}

/// Fully assembled brochure page
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub site_name: &'static str,
    pub nav: Vec<NavLink>,
    pub mobile_menu_open: bool,
    pub active_tab: Option<String>,
    pub sections: Vec<PageSection>,
}

impl HomePage {
    pub fn compose(
        catalog: &Catalog,
        site: &'static SiteInfo,
        view: &ViewState,
        media_base_url: &str,
    ) -> Self {
        let active_tab = view
            .active_tab
            .clone()
            .or_else(|| catalog.first_key().map(str::to_string));

        let nav = SectionId::ALL
            .iter()
            .map(|s| NavLink {
                anchor: s.anchor(),
                label: s.label(),
                active: *s == view.active_section,
            })
            .collect();

        let sections = SectionId::ALL
            .iter()
            .map(|id| match id {
                SectionId::Hero => PageSection::Hero {
                    anchor: id.anchor(),
                    title: site.name,
                    tagline: site.tagline,
                    image_url: HERO_IMAGE.resolve(media_base_url),
                    background_url: HERO_BACKGROUND.resolve(media_base_url),
                },
                SectionId::About => PageSection::About {
                    anchor: id.anchor(),
                    paragraphs: site.story,
                },
                SectionId::Menu => {
                    let selected = active_tab.as_deref().unwrap_or_default();
                    PageSection::Menu {
                        anchor: id.anchor(),
                        tabs: catalog
                            .all_categories()
                            .map(|c| MenuTab {
                                key: c.key,
                                label: c.label,
                                active: c.key == selected,
                            })
                            .collect(),
                        items: catalog
                            .get_category(selected)
                            .iter()
                            .map(|i| MenuItemView::from_item(i, media_base_url))
                            .collect(),
                    }
                }
                SectionId::Location => PageSection::Location {
                    anchor: id.anchor(),
                    address: site.address.one_line(),
                    map_url: site.map_url(),
                    hours: site.hours,
                },
                SectionId::Contact => PageSection::Contact {
                    anchor: id.anchor(),
                    phone_display: site.phone_display,
                    phone_e164: site.phone_e164,
                },
            })
            .collect();

        Self {
            site_name: site.name,
            nav,
            mobile_menu_open: view.mobile_menu.is_open(),
            active_tab,
            sections,
        }
    }
}
