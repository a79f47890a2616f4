use drillbook_types::{Book, Item, Person, Product, User};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Person ───────────────────────────────────────────────────────

#[test]
fn person_details_format() {
    let p = Person::new("Alice", 30.0);
    assert_eq!(p.details(), "Name: Alice, Age: 30");
}

#[test]
fn person_display_matches_details() {
    let p = Person::new("Bob", 0.0);
    assert_eq!(p.to_string(), p.details());
}

#[test]
fn person_details_does_not_validate() {
    let p = Person::new("", 200.0);
    assert_eq!(p.details(), "Name: , Age: 200");
}

#[test]
fn person_details_keeps_negative_and_fractional_ages() {
    assert_eq!(Person::new("X", -1.0).details(), "Name: X, Age: -1");
    assert_eq!(Person::new("Y", 30.5).details(), "Name: Y, Age: 30.5");
}

#[test]
fn person_reads_any_json_number_as_age() {
    let p: Person = serde_json::from_value(json!({"name": "X", "age": -1})).unwrap();
    assert_eq!(p, Person::new("X", -1.0));
    let p: Person = serde_json::from_value(json!({"name": "Y", "age": 30.5})).unwrap();
    assert_eq!(p.age, 30.5);
}

// ── Serde shapes ─────────────────────────────────────────────────

#[test]
fn user_uses_camel_case_fields() {
    let u = User::new(1.0, "Ann", "ann@example.com", true);
    let v = serde_json::to_value(&u).unwrap();
    assert_eq!(
        v,
        json!({"id": 1.0, "name": "Ann", "email": "ann@example.com", "isActive": true})
    );
}

#[test]
fn book_reads_camel_case_json() {
    let book: Book = serde_json::from_value(json!({
        "title": "T",
        "author": "Au",
        "publishedYear": 2000,
        "isAvailable": false
    }))
    .unwrap();
    assert_eq!(
        book,
        Book {
            title: "T".into(),
            author: "Au".into(),
            published_year: 2000.0,
            is_available: false,
        }
    );
}

#[test]
fn product_discount_defaults_to_none() {
    let p: Product =
        serde_json::from_value(json!({"name": "Pen", "price": 10, "quantity": 2})).unwrap();
    assert_eq!(p, Product::new("Pen", 10.0, 2.0));
    assert_eq!(p.discount, None);
}

#[test]
fn product_without_discount_omits_field() {
    let v = serde_json::to_value(Product::new("Pen", 10.0, 2.0)).unwrap();
    assert!(v.get("discount").is_none());
    let v = serde_json::to_value(Product::new("Pen", 10.0, 2.0).with_discount(5.0)).unwrap();
    assert_eq!(v["discount"], json!(5.0));
}

#[test]
fn item_missing_rating_is_rejected() {
    assert!(serde_json::from_value::<Item>(json!({"title": "A"})).is_err());
}
