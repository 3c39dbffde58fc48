//! Cabin inventory: the create/edit form, duplication, deletion and the
//! cabin table's filter and sort options.

use derive_more::Display;
use payloads::{CabinDetails, CabinId, CabinImage, requests, responses};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::table::{ParseOptionError, SortDirection, split_sort};
use crate::validation::{self, REQUIRED, Rule, ValidationError};
use crate::{Backoffice, BackofficeApi, Error, QueryKey};

pub const COPY_PREFIX: &str = "Copy of ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CabinId),
}

/// Raw values from the cabin form. Empty inputs are `None` or empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinForm {
    pub name: String,
    pub max_capacity: Option<i32>,
    pub regular_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub description: String,
    /// On edit, `None` keeps the cabin's current image.
    pub image: Option<CabinImage>,
}

impl Default for CabinForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_capacity: None,
            regular_price: None,
            discount: Some(Decimal::ZERO),
            description: String::new(),
            image: None,
        }
    }
}

static CABIN_SCHEMA: &[Rule<CabinForm, FormMode>] = &[
    Rule {
        field: "name",
        check: |form, _| form.name.trim().is_empty().then_some(REQUIRED),
    },
    Rule {
        field: "name",
        check: |form, _| {
            (form.name.trim().chars().count() > requests::CABIN_NAME_MAX_LEN)
                .then_some("Name should be at most 255 characters")
        },
    },
    Rule {
        field: "max_capacity",
        check: |form, _| match form.max_capacity {
            None => Some(REQUIRED),
            Some(capacity) if capacity < 1 => {
                Some("Capacity should be at least 1")
            }
            Some(_) => None,
        },
    },
    Rule {
        field: "regular_price",
        check: |form, _| match form.regular_price {
            None => Some(REQUIRED),
            Some(price) if price < Decimal::ONE => {
                Some("Price should be at least 1")
            }
            Some(_) => None,
        },
    },
    Rule {
        field: "discount",
        check: |form, _| match form.discount {
            None => Some(REQUIRED),
            Some(discount) if discount < Decimal::ZERO => {
                Some("Discount should not be negative")
            }
            Some(discount)
                if form.regular_price.is_some_and(|price| discount > price) =>
            {
                Some("Discount should be less than regular price")
            }
            Some(_) => None,
        },
    },
    Rule {
        field: "description",
        check: |form, _| form.description.trim().is_empty().then_some(REQUIRED),
    },
    Rule {
        field: "image",
        check: |form, mode| {
            (form.image.is_none() && *mode == FormMode::Create)
                .then_some(REQUIRED)
        },
    },
];

impl From<CabinDetails> for CabinForm {
    fn from(details: CabinDetails) -> Self {
        Self {
            name: details.name,
            max_capacity: Some(details.max_capacity),
            regular_price: Some(details.regular_price),
            discount: Some(details.discount),
            description: details.description,
            image: Some(details.image),
        }
    }
}

impl CabinForm {
    /// Form prefilled with an existing cabin, for an edit session.
    pub fn for_edit(cabin: &responses::Cabin) -> Self {
        cabin.cabin_details.clone().into()
    }

    pub fn validate(&self, mode: &FormMode) -> Result<(), ValidationError> {
        validation::validate(CABIN_SCHEMA, self, mode)
    }

    /// Validate and build the payload. `current_image` is used when an edit
    /// does not upload a new image.
    pub fn into_details(
        self,
        mode: &FormMode,
        current_image: Option<&CabinImage>,
    ) -> Result<CabinDetails, ValidationError> {
        self.validate(mode)?;
        let image = self.image.or_else(|| current_image.cloned());
        match (self.max_capacity, self.regular_price, self.discount, image) {
            (
                Some(max_capacity),
                Some(regular_price),
                Some(discount),
                Some(image),
            ) => Ok(CabinDetails {
                name: self.name.trim().to_string(),
                max_capacity,
                regular_price,
                discount,
                description: self.description.trim().to_string(),
                image,
            }),
            (.., None) => Err(ValidationError::single("image", REQUIRED)),
            _ => Err(ValidationError::single("form", "Incomplete cabin")),
        }
    }
}

/// Creation payload for a copy of `cabin`. The image reference is reused, not
/// uploaded again.
pub fn duplicate(cabin: &responses::Cabin) -> CabinDetails {
    CabinDetails {
        name: format!("{COPY_PREFIX}{}", cabin.name),
        ..cabin.cabin_details.clone()
    }
}

impl<A: BackofficeApi> Backoffice<A> {
    #[tracing::instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_cabin(
        &mut self,
        form: CabinForm,
    ) -> Result<responses::Cabin, Error> {
        let details = form.into_details(&FormMode::Create, None)?;
        self.submit_new_cabin(details, "New cabin successfully created")
            .await
    }

    #[tracing::instrument(skip(self, cabin, form), fields(cabin_id = %cabin.cabin_id))]
    pub async fn edit_cabin(
        &mut self,
        cabin: &responses::Cabin,
        form: CabinForm,
    ) -> Result<responses::Cabin, Error> {
        let details = form.into_details(
            &FormMode::Edit(cabin.cabin_id),
            Some(&cabin.cabin_details.image),
        )?;
        let result = self.api.update_cabin(cabin.cabin_id, &details).await;
        let updated = self.finish_cabin_write(result)?;
        self.notifications.success("Cabin successfully edited");
        Ok(updated)
    }

    #[tracing::instrument(skip(self, cabin), fields(cabin_id = %cabin.cabin_id))]
    pub async fn duplicate_cabin(
        &mut self,
        cabin: &responses::Cabin,
    ) -> Result<responses::Cabin, Error> {
        // the prefix can push a long name over the limit
        let details = CabinForm::from(duplicate(cabin))
            .into_details(&FormMode::Create, None)?;
        self.submit_new_cabin(details, "Cabin successfully duplicated")
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_cabin(&mut self, cabin_id: CabinId) -> Result<(), Error> {
        let result = self.api.delete_cabin(cabin_id).await;
        self.finish_cabin_write(result)?;
        self.notifications.success("Cabin successfully deleted");
        Ok(())
    }

    async fn submit_new_cabin(
        &mut self,
        details: CabinDetails,
        success: &str,
    ) -> Result<responses::Cabin, Error> {
        let result = self.api.create_cabin(&details).await;
        let cabin = self.finish_cabin_write(result)?;
        self.notifications.success(success);
        Ok(cabin)
    }

    fn finish_cabin_write<T>(
        &mut self,
        result: Result<T, payloads::ClientError>,
    ) -> Result<T, Error> {
        match result {
            Ok(value) => {
                self.cache.invalidate(QueryKey::Cabins);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!("cabin write failed: {e}");
                self.notifications.error(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CabinFilter {
    #[default]
    #[display("all")]
    All,
    #[display("no-discount")]
    NoDiscount,
    #[display("with-discount")]
    WithDiscount,
}

impl CabinFilter {
    pub fn matches(self, cabin: &responses::Cabin) -> bool {
        match self {
            Self::All => true,
            Self::NoDiscount => !cabin.has_discount(),
            Self::WithDiscount => cabin.has_discount(),
        }
    }
}

impl FromStr for CabinFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "no-discount" => Ok(Self::NoDiscount),
            "with-discount" => Ok(Self::WithDiscount),
            _ => Err(ParseOptionError {
                kind: "cabin filter",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CabinSortField {
    #[default]
    #[display("name")]
    Name,
    #[display("regular_price")]
    RegularPrice,
    #[display("max_capacity")]
    MaxCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[display("{field}-{direction}")]
pub struct CabinSort {
    pub field: CabinSortField,
    pub direction: SortDirection,
}

impl FromStr for CabinSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = split_sort("cabin sort", s)?;
        let field = match field {
            "name" => CabinSortField::Name,
            "regular_price" => CabinSortField::RegularPrice,
            "max_capacity" => CabinSortField::MaxCapacity,
            _ => {
                return Err(ParseOptionError {
                    kind: "cabin sort",
                    value: s.to_string(),
                });
            }
        };
        Ok(Self { field, direction })
    }
}

/// The rows of the cabin table, filtered and sorted.
pub fn table_rows(
    cabins: &[responses::Cabin],
    filter: CabinFilter,
    sort: CabinSort,
) -> Vec<&responses::Cabin> {
    let mut rows: Vec<_> = cabins.iter().filter(|c| filter.matches(c)).collect();
    rows.sort_by(|a, b| {
        let ordering = match sort.field {
            CabinSortField::Name => a.name.cmp(&b.name),
            CabinSortField::RegularPrice => {
                a.regular_price.cmp(&b.regular_price)
            }
            CabinSortField::MaxCapacity => a.max_capacity.cmp(&b.max_capacity),
        };
        sort.direction.apply(ordering)
    });
    rows
}
