use std::sync::{Arc, Mutex};
use std::thread;

use storecart_cart::{Cart, CartRegistry, Decimal, DomainError, LineItem, Product};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn checkout_session_flow() {
    storecart_observability::init();

    let notebook = Product::new(1, "Notebook");
    let pen = Product::new(2, "Pen");

    let mut registry = CartRegistry::new();

    let cart = registry.create("C1");
    cart.add_item(&notebook, dec("10.00"), 1).unwrap();
    assert_eq!(cart.total(), dec("10.00"));
    cart.add_item(&notebook, dec("10.00"), 2).unwrap();
    assert_eq!(cart.item(&notebook).unwrap().quantity(), 3);
    assert_eq!(cart.total(), dec("30.00"));

    let other = registry.create("C2");
    other.add_item(&pen, dec("1.25"), 4).unwrap();
    other.add_item(&notebook, dec("5.00"), 1).unwrap();
    assert!(other.remove_item_at(0));
    assert_eq!(other.total(), dec("5.00"));

    // (30.00 + 5.00) / 2
    assert_eq!(registry.average_ticket().unwrap().to_string(), "17.50");

    assert!(registry.invalidate("C1"));
    assert_eq!(registry.average_ticket().unwrap(), dec("5.00"));

    assert!(registry.invalidate("C2"));
    assert!(matches!(
        registry.average_ticket(),
        Err(DomainError::Arithmetic(_))
    ));
}

#[test]
fn rejected_add_surfaces_to_the_caller() {
    storecart_observability::init();

    let mut registry = CartRegistry::new();
    let cart = registry.create("C1");

    let err = cart
        .add_item(&Product::new(1, "Pen"), dec("-0.50"), 1)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: failed to add item: unit price is below zero"
    );
    assert!(cart.is_empty());
}

#[test]
fn bulk_add_re_checks_each_item() {
    let mut pen = LineItem::new(Product::new(2, "Pen"), dec("1.00"), 1).unwrap();
    let items = vec![
        LineItem::new(Product::new(1, "Notebook"), dec("3.00"), 1).unwrap(),
        pen.clone(),
    ];

    let mut cart = Cart::new();
    cart.add_items(&items).unwrap();
    assert_eq!(cart.total(), dec("4.00"));

    assert!(pen.set_quantity(-1).is_err());
    pen.set_quantity(2).unwrap();
    cart.add_items([&pen]).unwrap();
    assert_eq!(cart.item(pen.product()).unwrap().quantity(), 3);
}

#[test]
fn bulk_add_stops_at_first_rejected_item() {
    let pen = Product::new(2, "Pen");
    let items = vec![
        LineItem::new(Product::new(1, "Notebook"), dec("3.00"), 1).unwrap(),
        LineItem::new(pen.clone(), dec("1.00"), i64::MAX).unwrap(),
        LineItem::new(pen.clone(), dec("1.00"), 1).unwrap(),
        LineItem::new(Product::new(3, "Eraser"), dec("0.50"), 1).unwrap(),
    ];

    let mut cart = Cart::new();
    let err = cart.add_items(&items).unwrap_err();

    assert_eq!(
        err,
        DomainError::invalid_argument("failed to add item: quantity overflow")
    );
    assert_eq!(cart.len(), 2);
    assert!(!cart.contains(&Product::new(3, "Eraser")));
    assert_eq!(cart.item(&pen).unwrap().quantity(), i64::MAX);
}

#[test]
fn cart_snapshot_survives_a_session_store() {
    let mut registry = CartRegistry::new();
    let cart = registry.create("C1");
    cart.add_item(&Product::new(1, "  Notebook "), dec("10.00"), 2)
        .unwrap();
    cart.add_item(&Product::new(2, "Pen"), dec("1.50"), 3).unwrap();

    let stored = serde_json::to_value(&*cart).unwrap();
    assert_eq!(stored["items"][0]["product"]["description"], "Notebook");
    assert_eq!(stored["items"][0]["unit_price"], "10.00");

    let restored: Cart = serde_json::from_value(stored).unwrap();
    assert_eq!(restored.total(), dec("24.50"));
    assert_eq!(&restored, registry.get("C1").unwrap());
}

#[test]
fn tampered_snapshot_is_rejected() {
    let json = r#"{"items": [
        {"product": {"code": 1, "description": "Pen"}, "unit_price": "-1.00", "quantity": 1}
    ]}"#;
    assert!(serde_json::from_str::<Cart>(json).is_err());
}

#[test]
fn registry_shared_across_threads_behind_a_mutex() {
    storecart_observability::init();

    let registry = Arc::new(Mutex::new(CartRegistry::new()));
    let product = Product::new(1, "Pen");

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let registry = Arc::clone(&registry);
            let product = product.clone();
            thread::spawn(move || {
                let mut registry = registry.lock().unwrap();
                registry
                    .create(format!("customer-{}", n % 4))
                    .add_item(&product, dec("2.00"), 1)
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let registry = registry.lock().unwrap();
    assert_eq!(registry.len(), 4);
    for customer in registry.customers() {
        assert_eq!(registry.get(customer).unwrap().item(&product).unwrap().quantity(), 2);
    }
    assert_eq!(registry.average_ticket().unwrap(), dec("4.00"));
}
