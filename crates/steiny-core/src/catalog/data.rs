use super::{ImageRef, MenuCategory, MenuItem};

const MEAL_ADDON: &str = "Make it a meal with fries and a drink +$4.99";
const EXTRA_PATTY: &str = "Add an extra patty +$2.50";

const fn item(name: &'static str, price: &'static str, description: &'static str) -> MenuItem {
    MenuItem {
        name,
        price,
        description,
        addon: None,
        image: None,
        popular: false,
        spicy: false,
    }
}

const fn stored(key: &'static str) -> Option<ImageRef> {
    Some(ImageRef::Stored(key))
}

const fn external(url: &'static str) -> Option<ImageRef> {
    Some(ImageRef::External(url))
}

static BURGERS: &[MenuItem] = &[
    MenuItem {
        addon: Some(MEAL_ADDON),
        image: stored("steiny/images/burgers/cheese-burger.png"),
        popular: true,
        ..item(
            "Cheese Burger",
            "8.99",
            "Smashed halal beef patty, American cheese, pickles, onions and Steiny sauce on a toasted potato bun.",
        )
    },
    MenuItem {
        addon: Some(MEAL_ADDON),
        image: stored("steiny/images/burgers/double-cheese-burger.png"),
        popular: true,
        ..item(
            "Double Cheese Burger",
            "11.99",
            "Two smashed patties, double American cheese, pickles, onions and Steiny sauce.",
        )
    },
    MenuItem {
        addon: Some(EXTRA_PATTY),
        image: stored("steiny/images/burgers/jalapeno-cheese-burger.png"),
        spicy: true,
        ..item(
            "Jalapeño Cheese Burger",
            "10.49",
            "Smashed patty, pepper jack, grilled jalapeños and chipotle mayo.",
        )
    },
];

static CHICKEN: &[MenuItem] = &[
    MenuItem {
        addon: Some(MEAL_ADDON),
        image: stored("steiny/images/chicken/nashville-hot.png"),
        popular: true,
        spicy: true,
        ..item(
            "Nashville Hot Chicken",
            "10.99",
            "Crispy fried thigh dipped in Nashville hot oil, slaw and pickles on a brioche bun.",
        )
    },
    MenuItem {
        addon: Some(MEAL_ADDON),
        image: stored("steiny/images/chicken/buffalo-ranch.png"),
        spicy: true,
        ..item(
            "Buffalo Ranch Chicken",
            "10.99",
            "Crispy chicken tossed in buffalo sauce with cool ranch and shredded lettuce.",
        )
    },
    MenuItem {
        addon: Some(MEAL_ADDON),
        image: stored("steiny/images/chicken/sweet-chili.png"),
        ..item(
            "Sweet Chili Chicken",
            "10.99",
            "Crispy chicken glazed in sweet chili sauce with pickled red onions.",
        )
    },
];

static SIDES: &[MenuItem] = &[
    MenuItem {
        image: external("https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=600&q=80"),
        popular: true,
        ..item("Fries", "3.99", "Hand-cut fries with sea salt.")
    },
    MenuItem {
        image: stored("steiny/images/sides/loaded-beef-fries.jpg"),
        ..item(
            "Loaded Beef Fries",
            "8.99",
            "Fries topped with chopped smash beef, cheese sauce and Steiny sauce.",
        )
    },
    MenuItem {
        image: stored("steiny/images/sides/loaded-chicken-fries.png"),
        ..item(
            "Loaded Chicken Fries",
            "8.99",
            "Fries topped with chopped hot chicken, cheese sauce and ranch.",
        )
    },
    MenuItem {
        addon: Some("Choose your heat: mild, medium or Nashville hot"),
        image: stored("steiny/images/sides/hot-tenders.png"),
        spicy: true,
        ..item("Hot Tenders", "7.99", "Three hand-breaded tenders with dipping sauce.")
    },
    MenuItem {
        addon: Some("Add honey butter +$0.75"),
        image: external("https://images.unsplash.com/photo-1555951015-2da9bab6e0e9?w=600&q=80"),
        ..item("Buttermilk Biscuit", "2.99", "Flaky buttermilk biscuit baked fresh daily.")
    },
];

static SHAKES: &[MenuItem] = &[
    MenuItem {
        image: stored("steiny/images/drinks/vanilla-shake.png"),
        ..item("Vanilla Milkshake", "6.49", "Hand-spun vanilla bean shake.")
    },
    MenuItem {
        image: stored("steiny/images/drinks/nutella-shake.png"),
        popular: true,
        ..item("Nutella Milkshake", "7.49", "Vanilla shake blended with Nutella.")
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1579954115545-a95591f28bfc?w=600&q=80"),
        ..item("Strawberry Milkshake", "6.49", "Hand-spun with real strawberries.")
    },
    MenuItem {
        image: stored("steiny/images/drinks/oreo-shake.png"),
        ..item("Oreo Milkshake", "6.99", "Vanilla shake with crushed Oreo cookies.")
    },
];

static DRINKS: &[MenuItem] = &[MenuItem {
    image: external("https://images.unsplash.com/photo-1622483767028-3f66f32aef97?w=600&q=80"),
    ..item("Soft Drinks", "2.49", "Coke, Diet Coke, Sprite or Fanta.")
}];

static MEALS: &[MenuItem] = &[
    MenuItem {
        image: stored("steiny/images/meals/cheese-burger-meal.png"),
        popular: true,
        ..item("Cheese Burger Meal", "13.49", "Cheese Burger, fries and a soft drink.")
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1561758033-d89a9ad46330?w=800&q=80"),
        ..item(
            "Double Cheese Burger Meal",
            "16.49",
            "Double Cheese Burger, fries and a soft drink.",
        )
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1603064752734-4c48eff53d05?w=800&q=80"),
        spicy: true,
        ..item(
            "Jalapeño Burger Meal",
            "14.99",
            "Jalapeño Cheese Burger, fries and a soft drink.",
        )
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?w=800&q=80"),
        spicy: true,
        ..item(
            "Nashville Hot Chicken Meal",
            "15.49",
            "Nashville Hot Chicken, fries and a soft drink.",
        )
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1610614819093-5b0ce6b8c7a5?w=800&q=80"),
        spicy: true,
        ..item(
            "Buffalo Ranch Chicken Meal",
            "15.49",
            "Buffalo Ranch Chicken, fries and a soft drink.",
        )
    },
    MenuItem {
        image: stored("steiny/images/meals/sweet-chili-meal.png"),
        ..item(
            "Sweet Chili Chicken Meal",
            "15.49",
            "Sweet Chili Chicken, fries and a soft drink.",
        )
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1630431341973-02e1b662ec35?w=800&q=80"),
        ..item(
            "Loaded Fries Combo",
            "12.99",
            "Loaded Beef Fries, Loaded Chicken Fries and a soft drink.",
        )
    },
    MenuItem {
        image: external("https://images.unsplash.com/photo-1619474387533-d1e4c0886c56?w=800&q=80"),
        spicy: true,
        ..item("Hot Tenders Meal", "12.49", "Hot Tenders, fries and a soft drink.")
    },
];

pub(super) static CATEGORIES: &[MenuCategory] = &[
    MenuCategory {
        key: "burgers",
        label: "Burgers",
        items: BURGERS,
    },
    MenuCategory {
        key: "chicken",
        label: "Chicken",
        items: CHICKEN,
    },
    MenuCategory {
        key: "sides",
        label: "Sides",
        items: SIDES,
    },
    MenuCategory {
        key: "shakes",
        label: "Shakes",
        items: SHAKES,
    },
    MenuCategory {
        key: "drinks",
        label: "Drinks",
        items: DRINKS,
    },
    MenuCategory {
        key: "meals",
        label: "Meals",
        items: MEALS,
    },
];
