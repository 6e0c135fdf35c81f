//! Cart invariants under random operation sequences.

use proptest::prelude::*;
use repairzon_commerce::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Inc(usize),
    Dec(usize),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..6usize).prop_map(Op::Add),
        (0..8usize).prop_map(Op::Inc),
        (0..8usize).prop_map(Op::Dec),
        (0..8usize).prop_map(Op::Remove),
    ]
}

fn offerings() -> Vec<Offering> {
    vec![
        Offering::new(
            "ac-master",
            "ac",
            "AC Master Services",
            vec![
                Variant::new("1-1.5", "1\u{2013}1.5 Ton", 1090),
                Variant::new("2-3", "2\u{2013}3 Ton", 1290),
                Variant::new("4-5", "4\u{2013}5 Ton", 2290),
            ],
        ),
        Offering::new(
            "drill",
            "electronics",
            "Drilling Service",
            vec![
                Variant::new("4holes", "Up to 4 holes", 200),
                Variant::new("10holes", "Up to 10 holes", 0),
            ],
        ),
        Offering::new(
            "ac",
            "ac",
            "Colliding ids",
            vec![Variant::new("master-1-1.5", "Same text key as ac-master-1-1.5", 7)],
        ),
    ]
}

/// Every (offering, variant) pair, plus keys that are never in the catalog.
fn keys(catalog: &[Offering]) -> Vec<LineKey> {
    let mut keys: Vec<LineKey> = catalog
        .iter()
        .flat_map(|o| o.variants.iter().map(move |v| LineKey::of(o, v)))
        .collect();
    keys.push(LineKey::new("ghost", "1"));
    keys.push(LineKey::new("ac-master", "9-9"));
    keys
}

fn pairs(catalog: &[Offering]) -> Vec<(&Offering, &Variant)> {
    catalog
        .iter()
        .flat_map(|o| o.variants.iter().map(move |v| (o, v)))
        .collect()
}

fn assert_invariants(cart: &Cart) {
    let count: u64 = cart.items().iter().map(|i| u64::from(i.qty)).sum();
    let total: u64 = cart
        .items()
        .iter()
        .map(|i| i.price.amount() * u64::from(i.qty))
        .sum();
    assert_eq!(cart.count(), count);
    assert_eq!(cart.total(), Money::new(total));
    assert!(cart.items().iter().all(|i| i.qty >= 1));

    let mut seen = std::collections::HashSet::new();
    assert!(cart.items().iter().all(|i| seen.insert(i.key.clone())));
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..64)) {
        let catalog = offerings();
        let pairs = pairs(&catalog);
        let keys = keys(&catalog);
        let mut cart = Cart::new();

        for op in ops {
            match op {
                Op::Add(i) => { let (o, v) = pairs[i]; cart.add(o, v); }
                Op::Inc(i) => cart.inc(&keys[i]),
                Op::Dec(i) => cart.dec(&keys[i]),
                Op::Remove(i) => cart.remove(&keys[i]),
            }
            assert_invariants(&cart);
        }
    }

    #[test]
    fn repeated_add_merges_into_one_line(n in 1u32..50, which in 0..6usize) {
        let catalog = offerings();
        let (o, v) = pairs(&catalog)[which];
        let mut cart = Cart::new();

        for _ in 0..n {
            cart.add(o, v);
        }

        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.items()[0].qty, n);
        prop_assert_eq!(cart.count(), u64::from(n));
    }

    #[test]
    fn absent_keys_leave_cart_unchanged(adds in prop::collection::vec(0..6usize, 0..10)) {
        let catalog = offerings();
        let pairs = pairs(&catalog);
        let mut cart = Cart::new();
        for i in adds {
            let (o, v) = pairs[i];
            cart.add(o, v);
        }
        let before = cart.clone();

        for stale in [LineKey::new("ghost", "1"), LineKey::new("ac-master", "9-9")] {
            cart.inc(&stale);
            cart.dec(&stale);
            cart.remove(&stale);
        }

        prop_assert_eq!(cart, before);
    }

    #[test]
    fn first_added_stays_first(extra in 1u32..10) {
        let catalog = offerings();
        let pairs = pairs(&catalog);
        let mut cart = Cart::new();

        let a = cart.add(pairs[0].0, pairs[0].1);
        let b = cart.add(pairs[3].0, pairs[3].1);
        for _ in 0..extra {
            cart.add(pairs[0].0, pairs[0].1);
            cart.inc(&a);
        }

        let order: Vec<LineKey> = cart.items().iter().map(|i| i.key.clone()).collect();
        prop_assert_eq!(order, vec![a, b]);
    }
}
