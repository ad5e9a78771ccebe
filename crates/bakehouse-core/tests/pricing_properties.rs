//! End-to-end pricing scenarios, from API-shaped JSON to a breakdown.

use bakehouse_core::cart::{Cart, CartLine};
use bakehouse_core::pricing::{
    normalize_all, preview_variant_price, price_selection_json, resolve,
};
use bakehouse_core::shipping::{quote_shipping, FulfillmentMethod, ShippingZone};
use bakehouse_core::{CoreError, Money, PriceBehavior, RawVariant};
use serde_json::json;

fn cents(amount: i64) -> Money {
    Money::from_cents(amount)
}

fn decode(value: serde_json::Value) -> Vec<RawVariant> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn identity_without_variants() {
    let b = resolve(cents(500), &[]);
    assert_eq!(b.final_unit_price, cents(500));
    assert!(b.winning_override.is_none());
    assert!(b.additive_modifiers.is_empty());
}

#[test]
fn additive_sum_is_order_independent() {
    let forward = price_selection_json(
        cents(500),
        &json!([
            { "id": "a", "price_modifier": "1.10" },
            { "id": "b", "price_modifier": 1.2 }
        ]),
    )
    .unwrap();
    let backward = price_selection_json(
        cents(500),
        &json!([
            { "id": "b", "price_modifier": 1.2 },
            { "id": "a", "price_modifier": "1.10" }
        ]),
    )
    .unwrap();
    assert_eq!(forward.final_unit_price, cents(730));
    assert_eq!(forward.final_unit_price, backward.final_unit_price);
}

#[test]
fn override_priority_beats_selection_order() {
    let raws = decode(json!([
        { "id": "o1", "price_modifier": "10.00", "price_behavior": "override", "override_priority": 2 },
        { "id": "o2", "price_modifier": "12.00", "price_behavior": "override", "override_priority": 1 }
    ]));
    let b = resolve(cents(500), &normalize_all(&raws));
    assert_eq!(b.winning_override.unwrap().id.as_str(), "o2");
    assert_eq!(b.final_unit_price, cents(1200));
}

#[test]
fn absent_priority_first_selected_wins() {
    let raws = decode(json!([
        { "id": "o1", "price_modifier": "10.00", "price_behavior": "override" },
        { "id": "o2", "price_modifier": "12.00", "price_behavior": "override" }
    ]));
    let b = resolve(cents(500), &normalize_all(&raws));
    assert_eq!(b.winning_override.unwrap().id.as_str(), "o1");
    assert_eq!(b.final_unit_price, cents(1000));
}

#[test]
fn mixed_override_and_additive_ignores_base() {
    for base in [0, 500, 12_345] {
        let b = price_selection_json(
            cents(base),
            &json!([
                { "id": "o", "price_modifier": 10, "price_behavior": "override", "override_priority": 1 },
                { "id": "a", "price_modifier": 2 }
            ]),
        )
        .unwrap();
        assert_eq!(b.final_unit_price, cents(1200));
    }
}

#[test]
fn concrete_override_scenario() {
    let b = price_selection_json(
        cents(500),
        &json!([
            { "id": 1, "price_modifier": "8.00", "price_behavior": "override", "override_priority": 1 },
            { "id": 2, "price_modifier": "1.00", "price_behavior": "add" }
        ]),
    )
    .unwrap();
    assert_eq!(b.final_unit_price.to_string(), "$9.00");
    assert_eq!(b.base_price, cents(500));
    assert_eq!(b.additive_total(), cents(100));
}

#[test]
fn malformed_records_degrade_instead_of_failing() {
    let b = price_selection_json(
        cents(500),
        &json!([
            { "id": 1, "price_modifier": "not-a-number" },
            { "id": 2, "price_modifier": null },
            { "id": 3 },
            { "id": 4, "price_modifier": ["1.00"] },
            { "id": 5, "price_modifier": "0.25" }
        ]),
    )
    .unwrap();
    assert_eq!(b.final_unit_price, cents(525));
    assert_eq!(b.additive_modifiers.len(), 5);
}

#[test]
fn non_array_selection_is_a_caller_error() {
    let err = price_selection_json(cents(500), &json!({ "variants": [] })).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument { .. }));
}

#[test]
fn preview_after_resolving_a_selection() {
    let b = price_selection_json(
        cents(500),
        &json!([
            { "id": 1, "price_modifier": "1.50", "price_behavior": "add" },
            { "id": 2, "price_modifier": "0.75", "price_behavior": "add" }
        ]),
    )
    .unwrap();
    let candidate = normalize_all(&decode(json!([
        { "id": 3, "price_modifier": "2.00", "price_behavior": "add" }
    ])))
    .remove(0);

    let preview = preview_variant_price(b.final_unit_price, &candidate);
    assert_eq!(preview.unit_price, cents(925));
    assert_eq!(preview.addition_amount, cents(200));
    assert_eq!(preview.behavior_applied, PriceBehavior::Additive);
}

#[test]
fn checkout_subtotal_and_delivery_fee() {
    let variants = normalize_all(&decode(json!([
        { "id": "L", "group_name": "Size", "price_modifier": "8.00", "price_behavior": "override", "override_priority": 1 },
        { "id": "C", "group_name": "Extras", "price_modifier": "1.00" }
    ])));

    let mut cart = Cart::new();
    cart.add_line(CartLine::new("cake", "Birthday cake", cents(500), variants, 2).unwrap())
        .unwrap();
    assert_eq!(cart.subtotal().unwrap(), cents(1800));

    let zone = ShippingZone {
        id: "dt".to_string(),
        name: "Downtown".to_string(),
        fee: cents(350),
        free_shipping_threshold: Some(cents(2500)),
    };
    let quote = quote_shipping(cart.subtotal().unwrap(), FulfillmentMethod::Delivery, Some(&zone)).unwrap();
    assert_eq!(quote.fee, cents(350));
    assert_eq!(quote.amount_to_free_shipping, Some(cents(700)));
}
