//! End-to-end: catalog JSON + cart JSON → recalculated order.

use custopt_cli::process_json;
use custopt_core::Money;
use custopt_orders::CUSTOMER_OPTION_ADJUSTMENT;

const CATALOG: &str = r#"{
    "products": [
        {"code": "reading_glasses", "name": "Reading glasses"},
        {"code": "signet_ring", "name": "Signet ring"},
        {"code": "sunglasses", "name": "Sunglasses"}
    ],
    "customer_options": [
        {
            "code": "lens_coating",
            "type": "select",
            "translations": {"en_US": "Lens coating"},
            "values": [
                {"code": "anti_glare", "translations": {"en_US": "Anti-glare"},
                 "prices": [{"type": "fixed", "amount": 250}]},
                {"code": "blue_light", "translations": {"en_US": "Blue light filter"},
                 "prices": [{"type": "percent", "percent": 1000},
                            {"type": "fixed", "amount": 400, "channel_code": "WEB"}]}
            ]
        },
        {"code": "engraving", "type": "text", "required": true,
         "translations": {"en_US": "Engraving"}},
        {
            "code": "extras",
            "type": "multi_select",
            "translations": {"en_US": "Extras"},
            "values": [
                {"code": "case", "translations": {"en_US": "Hard case"},
                 "prices": [{"type": "fixed", "amount": 300}]},
                {"code": "cloth", "translations": {"en_US": "Cleaning cloth"},
                 "prices": [{"type": "fixed", "amount": 100}]}
            ]
        }
    ],
    "customer_option_groups": [
        {"code": "glasses", "translations": {"en_US": "Glasses"},
         "options": ["lens_coating", "extras"], "products": ["reading_glasses", "sunglasses"]},
        {"code": "jewellery", "translations": {"en_US": "Jewellery"},
         "options": ["engraving"], "products": ["signet_ring"]}
    ],
    "price_imports": [
        {"customer_option": "lens_coating", "value": "anti_glare",
         "price": {"type": "fixed", "amount": 150}, "products": ["sunglasses"]}
    ]
}"#;

#[test]
fn channel_price_applies_per_unit() {
    let cart = r#"{
        "currency_code": "EUR",
        "channel_code": "WEB",
        "items": [{"product_code": "reading_glasses", "unit_price": 1999, "quantity": 2,
                   "selections": [{"option": "lens_coating", "value": "blue_light"}]}]
    }"#;

    let order = process_json(CATALOG, cart).unwrap();

    let amounts: Vec<Money> = order
        .adjustments_recursively(Some(CUSTOMER_OPTION_ADJUSTMENT))
        .map(|a| a.amount())
        .collect();
    assert_eq!(amounts, vec![Money::from_minor(400), Money::from_minor(400)]);
    assert_eq!(order.total(), Money::from_minor(4798));
}

#[test]
fn percent_price_applies_outside_the_channel() {
    let cart = r#"{
        "currency_code": "EUR",
        "channel_code": "POS",
        "items": [{"product_code": "reading_glasses", "unit_price": 1999, "quantity": 1,
                   "selections": [{"option": "lens_coating", "value": "blue_light"}]}]
    }"#;

    let order = process_json(CATALOG, cart).unwrap();

    assert_eq!(order.total(), Money::from_minor(2199));
}

#[test]
fn text_option_adds_no_adjustment() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "signet_ring", "unit_price": 12900, "quantity": 1,
                   "selections": [{"option": "engraving", "text": "A.L."}]}]
    }"#;

    let order = process_json(CATALOG, cart).unwrap();

    assert_eq!(order.adjustments_recursively(None).count(), 0);
    assert_eq!(order.total(), Money::from_minor(12900));
    assert_eq!(
        order.items()[0].customer_option_configuration()[0].text_value(),
        Some("A.L.")
    );
}

#[test]
fn missing_required_option_is_rejected() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "signet_ring", "unit_price": 12900, "quantity": 1}]
    }"#;

    let err = process_json(CATALOG, cart).unwrap_err();
    assert!(format!("{err:#}").contains("is required"));
}

#[test]
fn option_not_offered_for_product_is_rejected() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "signet_ring", "unit_price": 12900, "quantity": 1,
                   "selections": [{"option": "lens_coating", "value": "anti_glare"},
                                  {"option": "engraving", "text": "x"}]}]
    }"#;

    let err = process_json(CATALOG, cart).unwrap_err();
    assert!(format!("{err:#}").contains("not offered"));
}

#[test]
fn output_serializes_to_json() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "reading_glasses", "unit_price": 1000, "quantity": 1,
                   "selections": [{"option": "lens_coating", "value": "anti_glare"}]}]
    }"#;

    let order = process_json(CATALOG, cart).unwrap();
    let json = serde_json::to_value(&order).unwrap();

    assert_eq!(json["total"], 1250);
    assert_eq!(json["currency_code"], "EUR");
}

#[test]
fn single_select_chosen_twice_is_rejected() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "reading_glasses", "unit_price": 1000, "quantity": 1,
                   "selections": [{"option": "lens_coating", "value": "anti_glare"},
                                  {"option": "lens_coating", "value": "anti_glare"}]}]
    }"#;

    let err = process_json(CATALOG, cart).unwrap_err();
    assert!(format!("{err:#}").contains("selected more than once"));
}

#[test]
fn multi_select_takes_distinct_values_once_each() {
    let distinct = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "reading_glasses", "unit_price": 1000, "quantity": 1,
                   "selections": [{"option": "extras", "value": "case"},
                                  {"option": "extras", "value": "cloth"}]}]
    }"#;
    let order = process_json(CATALOG, distinct).unwrap();
    assert_eq!(order.total(), Money::from_minor(1400));

    let repeated = r#"{
        "currency_code": "EUR",
        "items": [{"product_code": "reading_glasses", "unit_price": 1000, "quantity": 1,
                   "selections": [{"option": "extras", "value": "case"},
                                  {"option": "extras", "value": "case"}]}]
    }"#;
    let err = process_json(CATALOG, repeated).unwrap_err();
    assert!(format!("{err:#}").contains("selected more than once"));
}

#[test]
fn imported_product_price_applies_to_that_product_only() {
    let cart = r#"{
        "currency_code": "EUR",
        "items": [
            {"product_code": "sunglasses", "unit_price": 1000, "quantity": 1,
             "selections": [{"option": "lens_coating", "value": "anti_glare"}]},
            {"product_code": "reading_glasses", "unit_price": 1000, "quantity": 1,
             "selections": [{"option": "lens_coating", "value": "anti_glare"}]}
        ]
    }"#;

    let order = process_json(CATALOG, cart).unwrap();

    assert_eq!(order.items()[0].total(), Money::from_minor(1150));
    assert_eq!(order.items()[1].total(), Money::from_minor(1250));
}

#[test]
fn price_import_for_unknown_product_fails_the_load() {
    let catalog = CATALOG.replace(r#""products": ["sunglasses"]"#, r#""products": ["monocle"]"#);
    let cart = r#"{"currency_code": "EUR"}"#;

    let err = process_json(&catalog, cart).unwrap_err();
    assert!(format!("{err:#}").contains("unknown product 'monocle'"));
}
