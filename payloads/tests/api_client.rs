use payloads::{
    APIClient, AdId, BearerToken, ClientError,
    requests::{AdQuery, ChangePassword, CreateAccount, ImageUpload, UpdateProfile},
    schema,
};

// Nothing listens here; any request that is actually sent fails with a
// network error instead of an authorization error.
const DEAD_ADDRESS: &str = "http://127.0.0.1:9";

fn valid_draft() -> payloads::AdDraft {
    let mut candidate = schema::initial_candidate();
    let fields = [
        ("title", serde_json::json!("Houseboat on the canal")),
        (
            "description",
            serde_json::json!(
                "A converted barge with a wood stove, a reading nook and a \
                 deck to watch the boats go by."
            ),
        ),
        ("rentalType", serde_json::json!("entire_home")),
        ("property.type", serde_json::json!("motorhome")),
        ("property.price.amount", serde_json::json!(140)),
        ("property.price.unit", serde_json::json!("night")),
        ("property.capacity.rooms", serde_json::json!(1)),
        ("property.capacity.beds", serde_json::json!(1)),
        ("property.capacity.bathrooms", serde_json::json!(1)),
        ("property.capacity.guests.adults", serde_json::json!(2)),
        ("property.capacity.guests.children", serde_json::json!(0)),
        ("property.address.country", serde_json::json!("Netherlands")),
        ("property.address.city", serde_json::json!("Amsterdam")),
        ("property.address.street", serde_json::json!("Prinsengracht 1")),
        ("property.address.postal_code", serde_json::json!(1015)),
        ("property.address.region", serde_json::json!("North Holland")),
        ("property.livingArea.value", serde_json::json!(30)),
        ("property.livingArea.unit", serde_json::json!("square_meter")),
        ("property.livingArea.symbol", serde_json::json!("m²")),
    ];
    for (path, value) in fields {
        payloads::FieldPath::parse(path)
            .unwrap()
            .set(&mut candidate, value);
    }
    schema::validate(&candidate).unwrap()
}

#[tokio::test]
async fn create_ad_without_token_fails_before_sending() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let err = client.create_ad(&valid_draft()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn upload_without_token_fails_before_sending() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let images = vec![ImageUpload {
        file_name: "deck.png".into(),
        mime_type: "image/png".into(),
        data: vec![0x89, b'P', b'N', b'G'],
    }];
    let err = client
        .upload_ad_images(&AdId::from("abc"), images)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn profile_without_token_fails_before_sending() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let err = client.user_profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert_eq!(err.to_string(), "You need to sign in first.");
    Ok(())
}

#[tokio::test]
async fn create_ad_with_token_reaches_the_network() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS)
        .with_token(Some(BearerToken::new("token-123")));
    let err = client.create_ad(&valid_draft()).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn public_lookup_needs_no_token() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let err = client.get_ad(&AdId::from("abc")).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn profile_changes_without_token_fail_before_sending() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let update = UpdateProfile {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: None,
    };
    let err = client.update_user_profile(&update).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "{err:?}");

    let password = ChangePassword { password: "engine".into() };
    let err = client.change_password(&password).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "{err:?}");

    let err = client
        .update_ad(&AdId::from("abc"), &valid_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn listing_and_sign_up_need_no_token() -> anyhow::Result<()> {
    let client = APIClient::new(DEAD_ADDRESS);
    let err = client
        .list_ads(&AdQuery::page(2).with_search("Amsterdam"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "{err:?}");

    let account =
        CreateAccount::from_full_name("Ada Lovelace", "ada@example.com", "pw");
    let err = client.create_account(&account).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "{err:?}");
    Ok(())
}

#[test]
fn bearer_token_is_redacted_in_debug_output() {
    let token = BearerToken::new("super-secret");
    assert_eq!(format!("{token:?}"), "BearerToken([REDACTED])");
    assert_eq!(token.expose(), "super-secret");
}
