//! Restaurant facts shown on the brochure page

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub opens: &'static str,
    pub closes: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
}

impl Address {
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.locality, self.region, self.postal_code
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub story: &'static [&'static str],
    pub address: Address,
    pub phone_display: &'static str,
    pub phone_e164: &'static str,
    pub hours: &'static [OpeningHours],
    pub subscription_price: &'static str,
}

static STEINY: SiteInfo = SiteInfo {
    name: "Steiny B's",
    tagline: "Smashed to Perfection",
    story: &[
        "Back in 1924 a teenager named Lionel Sternberger dropped a slice of American cheese on a burger at his father's Pasadena sandwich shop, and the cheeseburger was born.",
        "Steiny B's carries his name and his idea to Flatbush Avenue: 100% halal beef, smashed hard on a screaming-hot griddle, never frozen, and Nashville hot chicken fried to order.",
    ],
    address: Address {
        street: "942 Flatbush Ave",
        locality: "Brooklyn",
        region: "NY",
        postal_code: "11226",
    },
    phone_display: "(212) 555-0123",
    phone_e164: "+12125550123",
    hours: &[
        OpeningHours {
            days: "Monday - Thursday",
            opens: "11:00",
            closes: "22:00",
        },
        OpeningHours {
            days: "Friday - Saturday",
            opens: "11:00",
            closes: "23:00",
        },
        OpeningHours {
            days: "Sunday",
            opens: "12:00",
            closes: "21:00",
        },
    ],
    subscription_price: "$29/month billed annually",
};

impl SiteInfo {
    pub fn steiny() -> &'static SiteInfo {
        &STEINY
    }

    /// Google Maps search link for the address
    pub fn map_url(&self) -> String {
        let query: String = self
            .address
            .one_line()
            .chars()
            .map(|c| match c {
                ' ' => '+',
                ',' => '+',
                other => other,
            })
            .collect();
        format!("https://www.google.com/maps/search/?api=1&query={}", query)
    }
}
