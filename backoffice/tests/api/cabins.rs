use backoffice::Error;
use backoffice::cabins::{CabinFilter, CabinForm, CabinSort, table_rows};
use payloads::CabinImage;
use rust_decimal::dec;
use test_helpers::spawn_app;

use crate::backoffice;

fn new_cabin_form() -> CabinForm {
    CabinForm {
        name: "Hideaway".into(),
        max_capacity: Some(2),
        regular_price: Some(dec!(120)),
        discount: Some(dec!(0)),
        description: "A small cabin for two.".into(),
        image: Some(CabinImage::Upload {
            file_name: "hideaway.jpg".into(),
            data: vec![1, 2, 3],
        }),
    }
}

#[tokio::test]
async fn create_edit_duplicate_delete_cabin() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut ctx = backoffice(&app);

    let cabin = ctx.create_cabin(new_cabin_form()).await?;
    assert_eq!(
        cabin.image,
        CabinImage::url(format!(
            "/images/cabins/{}-hideaway.jpg",
            cabin.cabin_id
        ))
    );
    assert_eq!(ctx.cabins().await?.len(), 1);

    // editing without a new image keeps the stored one
    let form = CabinForm {
        discount: Some(dec!(20)),
        image: None,
        ..CabinForm::for_edit(&cabin)
    };
    let edited = ctx.edit_cabin(&cabin, form).await?;
    assert_eq!(edited.discount, dec!(20));
    assert_eq!(edited.image, cabin.image);

    let copy = ctx.duplicate_cabin(&edited).await?;
    assert_eq!(copy.name, "Copy of Hideaway");
    assert_eq!(copy.image, edited.image);
    assert_ne!(copy.cabin_id, edited.cabin_id);

    let with_discount = table_rows(
        ctx.cabins().await?,
        CabinFilter::WithDiscount,
        CabinSort::default(),
    );
    assert_eq!(with_discount.len(), 2);

    ctx.delete_cabin(copy.cabin_id).await?;
    let names: Vec<_> =
        ctx.cabins().await?.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, ["Hideaway"]);

    Ok(())
}

#[tokio::test]
async fn invalid_form_is_rejected_before_the_api() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut ctx = backoffice(&app);
    // would fail with a 503 if it reached the API
    app.fail_next_cabin_writes(1);

    let form = CabinForm {
        discount: Some(dec!(150)),
        ..new_cabin_form()
    };
    let err = ctx.create_cabin(form).await.unwrap_err();
    let Error::Validation(violations) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(
        violations.for_field("discount"),
        Some("Discount should be less than regular price")
    );

    // the armed fault is still pending
    assert!(ctx.create_cabin(new_cabin_form()).await.is_err());
    assert!(ctx.cabins().await?.is_empty());

    Ok(())
}
