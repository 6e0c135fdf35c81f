//! Built-in demo storefront content.

use crate::catalog::{Catalog, Category, Offering, Review, ShowcaseIds, Variant};

impl Catalog {
    /// The demo storefront: categories, a handful of services, and reviews.
    pub fn demo() -> Self {
        Self {
            categories: demo_categories(),
            offerings: demo_offerings(),
            reviews: demo_reviews(),
            showcase: ShowcaseIds {
                popular: vec!["ac-install".into(), "ac-master".into(), "home-deep-clean".into()],
                trending: vec!["carpet-clean".into(), "drill".into(), "ac-install".into()],
                recent: vec!["drill".into(), "home-deep-clean".into()],
            },
        }
    }
}

fn demo_categories() -> Vec<Category> {
    vec![
        Category::new("all", "All", "\u{1f7e2}"),
        Category::new("ac", "AC Services", "\u{2744}\u{fe0f}"),
        Category::new("cleaning", "Cleaning", "\u{1f9fc}"),
        Category::new("pest", "Pest Control", "\u{1f41c}"),
        Category::new("home-appliance", "Home Appliance", "\u{1f527}"),
        Category::new("gadgets", "Gadgets Repair", "\u{1f4bb}"),
        Category::new("electronics", "Electronics", "\u{1f4fa}"),
        Category::new("solar", "Solar Panel", "\u{1f506}"),
        Category::new("generator", "Generator", "\u{2699}\u{fe0f}"),
        Category::new("shifting", "Home/Office Shifting Services", "\u{1f4e6}"),
        Category::new("web", "Web Design & Dev.", "\u{1f468}\u{200d}\u{1f4bb}"),
    ]
}

fn demo_offerings() -> Vec<Offering> {
    let mut ac_master = Offering::new(
        "ac-master",
        "ac",
        "AC Master Services",
        vec![
            Variant::new("1-1.5", "1\u{2013}1.5 Ton", 1090).with_old_price(1590),
            Variant::new("2-3", "2\u{2013}3 Ton", 1290).with_old_price(1790),
            Variant::new("4-5", "4\u{2013}5 Ton", 2290).with_old_price(2790),
        ],
    );
    ac_master.image_url = Some(unsplash("photo-1581094651181-3592d5894073"));
    ac_master.badge = Some("\u{09f3}500 Off".to_string());
    ac_master.details = Some(
        "Regular servicing helps efficiency and extends AC lifespan. Includes panel cleaning & filter wash."
            .to_string(),
    );
    ac_master.included = vec!["Filter cleaning".to_string(), "Panel cleaning".to_string()];
    ac_master.excluded = vec!["Spare parts".to_string(), "Materials if used".to_string()];

    let mut ac_install = Offering::new(
        "ac-install",
        "ac",
        "AC Installation & Uninstallation or Shifting",
        vec![
            Variant::new("1ton", "1 Ton", 3000),
            Variant::new("1.5ton", "1.5 Ton", 3500),
            Variant::new("2ton", "2 Ton", 4200),
        ],
    );
    ac_install.image_url = Some(unsplash("photo-1581093588401-16b1a3a39a0b"));
    ac_install.details =
        Some("Installation/Uninstallation or shifting service by expert technicians.".to_string());

    let mut deep_clean = Offering::new(
        "home-deep-clean",
        "cleaning",
        "Home Deep Cleaning",
        vec![
            Variant::new("800-1200", "800-1200 sq. ft", 3990),
            Variant::new("1200-1600", "1200-1600 sq. ft", 5000),
        ],
    );
    deep_clean.image_url = Some(unsplash("photo-1503602642458-232111445657"));
    deep_clean.details = Some(
        "Deep clean for complete home with professional chemicals and machines.".to_string(),
    );

    let mut carpet = Offering::new(
        "carpet-clean",
        "cleaning",
        "Carpet Cleaning",
        vec![
            Variant::new("carpet-small", "Up to 80 sq. ft", 990),
            Variant::new("carpet-large", "Up to 200 sq. ft", 1690),
        ],
    );
    carpet.image_url = Some(unsplash("photo-1527515545081-5db817172677"));
    carpet.details = Some("Professional shampoo wash and dry.".to_string());

    let mut drill = Offering::new(
        "drill",
        "electronics",
        "Drilling Service",
        vec![
            Variant::new("4holes", "Up to 4 holes", 200),
            Variant::new("10holes", "Up to 10 holes", 450),
        ],
    );
    drill.image_url = Some(unsplash("photo-1593965461330-fd3f98b2d79b"));
    drill.details = Some("Drilling for wall mounts and fixtures.".to_string());

    vec![ac_master, ac_install, deep_clean, carpet, drill]
}

fn demo_reviews() -> Vec<Review> {
    [
        "Excellent service! The team was professional and efficient. My AC works like new now.",
        "Quick response time and thorough cleaning. Highly recommended!",
        "Friendly technicians and great value for money. Will use again!",
    ]
    .into_iter()
    .zip(1..)
    .map(|(text, id)| Review {
        id,
        author: "CN".to_string(),
        ago: "4 months ago".to_string(),
        rating: 5,
        text: text.to_string(),
    })
    .collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w=1200&auto=format&fit=crop")
}
