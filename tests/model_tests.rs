use addrbook::model::*;
use addrbook::queries::contact_queries;
use serde_json::json;

fn dummy_user() -> serde_json::Value {
    json!({
        "id": 1,
        "firstName": "Emily",
        "lastName": "Johnson",
        "maidenName": "Smith",
        "age": 28,
        "gender": "female",
        "email": "emily.johnson@x.dummyjson.com",
        "phone": "+81 965-431-3024",
        "username": "emilys",
        "password": "emilyspass",
        "birthDate": "1996-5-30",
        "image": "https://dummyjson.com/icon/emilys/128",
        "bloodGroup": "O-",
        "height": 193.24,
        "weight": 63.16,
        "eyeColor": "Green",
        "hair": { "color": "Brown", "type": "Curly" },
        "ip": "42.48.100.32",
        "address": {
            "address": "626 Main Street",
            "city": "Phoenix",
            "state": "Mississippi",
            "stateCode": "MS",
            "postalCode": "29112",
            "coordinates": { "lat": -77.16213, "lng": -92.084824 },
            "country": "United States"
        },
        "macAddress": "47:fa:41:18:ec:eb",
        "university": "University of Wisconsin--Madison",
        "bank": { "cardExpire": "03/26", "cardNumber": "9289760655481815" },
        "company": {
            "department": "Engineering",
            "name": "Dooley, Kozey and Cronin",
            "title": "Sales Manager",
            "address": { "address": "263 Tenth Street", "city": "San Francisco" }
        },
        "ein": "977-175",
        "ssn": "900-590-289",
        "role": "admin"
    })
}

// ==========================================================================
// CONTACT
// ==========================================================================

#[test]
fn contact_parses_full_directory_record() {
    let contact: Contact = serde_json::from_value(dummy_user()).unwrap();

    assert_eq!(contact.id, Id::new(1));
    assert_eq!(contact.full_name(), "Emily Johnson");
    assert_eq!(contact.image.as_deref(), Some("https://dummyjson.com/icon/emilys/128"));
    assert_eq!(contact.hair.as_ref().map(|h| h.kind.as_str()), Some("Curly"));
    assert_eq!(contact.role, Some(Role::Admin));
    assert_eq!(contact.company.as_ref().unwrap().title, "Sales Manager");
    assert_eq!(
        contact.address.as_ref().unwrap().coordinates,
        Some(Coordinates { lat: -77.16213, lng: -92.084824 })
    );
}

#[test]
fn contact_does_not_keep_credentials() {
    let contact: Contact = serde_json::from_value(dummy_user()).unwrap();
    let out = serde_json::to_value(&contact).unwrap();
    assert!(out.get("password").is_none());
    assert!(out.get("ssn").is_none());
    assert!(out.get("bank").is_none());
}

#[test]
fn contact_with_only_required_fields_parses() {
    let contact: Contact = serde_json::from_value(json!({
        "id": 7,
        "firstName": "Ann",
        "lastName": "Lee",
        "phone": "555",
        "email": "ann@example.com",
        "image": "  "
    }))
    .unwrap();
    assert_eq!(contact.image, None);
    assert_eq!(contact.address, None);
    assert_eq!(contact_queries::initials(&contact), "AL");
}

#[test]
fn contact_with_mistyped_id_is_rejected() {
    let result = serde_json::from_value::<Contact>(json!({
        "id": "seven",
        "firstName": "Ann",
        "lastName": "Lee",
        "phone": "555",
        "email": "ann@example.com"
    }));
    assert!(result.is_err());
}

#[test]
fn display_helpers_on_directory_record() {
    let contact: Contact = serde_json::from_value(dummy_user()).unwrap();
    assert_eq!(
        contact_queries::format_address(contact.address.as_ref().unwrap()),
        "626 Main Street, Phoenix, Mississippi 29112"
    );
    assert_eq!(
        contact_queries::birthday(&contact),
        chrono::NaiveDate::from_ymd_opt(1996, 5, 30)
    );
}

// ==========================================================================
// PAGE
// ==========================================================================

#[test]
fn page_parses_service_body() {
    let page = DirectoryPage::from_json(json!({
        "users": [dummy_user()],
        "total": 208,
        "skip": 0,
        "limit": 1
    }))
    .unwrap();
    assert_eq!(page.items[0].username, "emilys");
    assert_eq!(page.next_skip(), 1);
    assert!(page.has_more());
}

#[test]
fn page_with_users_not_a_list_is_rejected() {
    let err = DirectoryPage::from_json(json!({
        "users": {},
        "total": 0,
        "skip": 0,
        "limit": 30
    }))
    .unwrap_err();
    assert_eq!(err.kind(), addrbook::error::ErrorKind::Validation);
}

// ==========================================================================
// ACCOUNT
// ==========================================================================

#[test]
fn login_response_round_trips_user_snapshot() {
    let body = json!({
        "id": 1,
        "username": "emilys",
        "email": "emily.johnson@x.dummyjson.com",
        "firstName": "Emily",
        "lastName": "Johnson",
        "gender": "female",
        "image": "https://dummyjson.com/icon/emilys/128",
        "accessToken": "a",
        "refreshToken": "r"
    });
    let login: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(login.user.display_name(), "Emily Johnson");

    let snapshot = serde_json::to_string(&login.user).unwrap();
    let restored: AuthUser = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, login.user);
    assert!(!snapshot.contains("accessToken"));
}

#[test]
fn display_name_falls_back_to_username() {
    let user: AuthUser = serde_json::from_value(json!({ "id": 3, "username": "kminchelle" })).unwrap();
    assert_eq!(user.display_name(), "kminchelle");
}

#[test]
fn credentials_omit_missing_ttl() {
    let body = serde_json::to_value(Credentials::new("emilys", "emilyspass")).unwrap();
    assert_eq!(body, json!({ "username": "emilys", "password": "emilyspass" }));

    let mut with_ttl = Credentials::new("emilys", "emilyspass");
    with_ttl.expires_in_mins = Some(30);
    let body = serde_json::to_value(with_ttl).unwrap();
    assert_eq!(body["expiresInMins"], 30);
}
