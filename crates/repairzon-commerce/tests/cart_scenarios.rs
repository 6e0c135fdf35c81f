//! End-to-end cart walkthrough against a hand-built offering.

use repairzon_commerce::prelude::*;

fn ac_master() -> Offering {
    Offering::new(
        "ac-master",
        "ac",
        "AC Master Services",
        vec![
            Variant::new("1-1.5", "1\u{2013}1.5 Ton", 1090).with_old_price(1590),
            Variant::new("2-3", "2\u{2013}3 Ton", 1290).with_old_price(1790),
        ],
    )
}

fn qtys(cart: &Cart) -> Vec<(String, u32)> {
    cart.items()
        .iter()
        .map(|i| (i.key.to_string(), i.qty))
        .collect()
}

#[test]
fn test_add_merge_dec_remove_walkthrough() {
    let offering = ac_master();
    let small = &offering.variants[0];
    let medium = &offering.variants[1];
    let mut cart = Cart::new();

    let small_key = cart.add(&offering, small);
    assert_eq!(qtys(&cart), vec![("ac-master-1-1.5".to_string(), 1)]);
    assert_eq!(cart.items()[0].price, Money::new(1090));
    assert_eq!(cart.total(), Money::new(1090));
    assert_eq!(cart.count(), 1);

    cart.add(&offering, small);
    assert_eq!(qtys(&cart), vec![("ac-master-1-1.5".to_string(), 2)]);
    assert_eq!(cart.total(), Money::new(2180));
    assert_eq!(cart.count(), 2);

    let medium_key = cart.add(&offering, medium);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), Money::new(3470));
    assert_eq!(cart.count(), 3);

    cart.dec(&small_key);
    assert_eq!(cart.get(&small_key).map(|l| l.qty), Some(1));
    cart.dec(&small_key);
    assert!(cart.get(&small_key).is_none());
    assert_eq!(qtys(&cart), vec![("ac-master-2-3".to_string(), 1)]);

    cart.remove(&medium_key);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Money::zero());
    assert_eq!(cart.count(), 0);
}

#[test]
fn test_text_keys_address_lines() {
    let offering = ac_master();
    let mut cart = Cart::new();
    cart.add(&offering, &offering.variants[1]);

    let key = cart.find_key("ac-master-2-3").expect("line should resolve");
    cart.inc(&key);
    assert_eq!(cart.count(), 2);

    assert!(cart.find_key("2-3").is_none());
}

#[test]
fn test_checkout_reads_cart_once() {
    let catalog = Catalog::demo();
    let mut cart = Cart::new();
    for (offering, variant) in [("ac-install", "2ton"), ("carpet-clean", "carpet-small")] {
        let (o, v) = catalog.variant(offering, variant).unwrap();
        cart.add(o, v);
    }

    let summary = CheckoutSummary::from_cart(&cart);
    assert_eq!(summary.total, Money::new(5190));
    assert_eq!(summary.total.display(), "\u{09f3}5,190");

    let order = summary.place_order().unwrap();
    assert_eq!(order.summary.lines.len(), 2);
    assert_eq!(cart.count(), 2);
}
