use validator::{ValidationError, ValidationErrors};

use crate::constants::{MAX_PUBLIC_CONTACTS, MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use crate::types::models::property::contact::PublicContact;
use crate::types::requests::property::contact_request::ContactRequestBody;
use crate::types::requests::property::create_property_request::CreatePropertyRequest;
use crate::utils::validation_utils::add_error;
use crate::validations::email::validate_email;
use crate::validations::phone::validate_phone;

const MIN_TITLE_LENGTH: usize = 3;
const MAX_TITLE_LENGTH: usize = 120;
const MAX_DESCRIPTION_LENGTH: usize = 5000;

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.len() < MIN_TITLE_LENGTH || trimmed.len() > MAX_TITLE_LENGTH {
        return Err(add_error(
            "title.length",
            format!(
                "Title must be between {} and {} characters",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH
            ),
            title,
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() || description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(add_error(
            "description.length",
            format!(
                "Description must not be empty and at most {} characters",
                MAX_DESCRIPTION_LENGTH
            ),
            "",
        ));
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(add_error(
            "price.amount",
            "Price must be a positive number".to_string(),
            &amount.to_string(),
        ));
    }
    Ok(())
}

fn validate_area(area: f64) -> Result<(), ValidationError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(add_error(
            "details.area",
            "Area must be a positive number".to_string(),
            &area.to_string(),
        ));
    }
    Ok(())
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    if city.trim().is_empty() {
        return Err(add_error(
            "location.city",
            "City must not be empty".to_string(),
            city,
        ));
    }
    Ok(())
}

pub fn validate_public_contacts(contacts: &[PublicContact]) -> Result<(), ValidationError> {
    if contacts.len() > MAX_PUBLIC_CONTACTS {
        return Err(add_error(
            "public_contacts.too_many",
            format!("At most {} public contacts are allowed", MAX_PUBLIC_CONTACTS),
            &contacts.len().to_string(),
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&rating) {
        return Err(add_error(
            "rating.range",
            format!(
                "Rating must be between {} and {}",
                MIN_REVIEW_RATING, MAX_REVIEW_RATING
            ),
            &rating.to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_property(data: &CreatePropertyRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_title(&data.title) {
        errors.add("title", e);
    }
    if let Err(e) = validate_description(&data.description) {
        errors.add("description", e);
    }
    if let Err(e) = validate_amount(data.price.amount) {
        errors.add("price", e);
    }
    if let Err(e) = validate_area(data.details.area) {
        errors.add("details", e);
    }
    if let Err(e) = validate_city(&data.location.city) {
        errors.add("location", e);
    }
    if let Some(contacts) = &data.public_contacts {
        if let Err(e) = validate_public_contacts(contacts) {
            errors.add("public_contacts", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_contact_request(data: &ContactRequestBody) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.name.trim().is_empty() {
        errors.add(
            "name",
            add_error("name.empty", "Name must not be empty".to_string(), &data.name),
        );
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Some(phone) = data.phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
    }
    if data.message.trim().is_empty() {
        errors.add(
            "message",
            add_error("message.empty", "Message must not be empty".to_string(), ""),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::models::property::{
        details::PropertyDetails, location::Location, price::{Currency, Price},
        property_type::PropertyType, transaction_type::TransactionType,
    };

    fn request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "Sunny three-room flat".to_string(),
            description: "Near the beach promenade.".to_string(),
            property_type: PropertyType::Apartment,
            transaction_type: TransactionType::Sale,
            price: Price {
                amount: 2_400_000.0,
                currency: Currency::Ils,
                period: None,
            },
            location: Location {
                address: "12 Ben Yehuda St".to_string(),
                city: "Tel Aviv".to_string(),
                coordinates: None,
            },
            details: PropertyDetails {
                area: 78.0,
                rooms: 3,
                bedrooms: Some(2),
                bathrooms: 1,
                floor: Some(4),
                total_floors: Some(9),
                build_year: Some(1998),
                condition: None,
            },
            features: None,
            public_contacts: None,
            owner_id: None,
        }
    }

    #[test]
    fn accepts_a_complete_listing() {
        assert!(validate_new_property(&request()).is_ok());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut data = request();
        data.price.amount = 0.0;
        let errors = validate_new_property(&data).unwrap_err();
        assert!(errors.errors().contains_key("price"));
    }

    #[test]
    fn rejects_three_public_contacts() {
        let contact = PublicContact {
            name: "Office".to_string(),
            phone: "+97235551234".to_string(),
        };
        let mut data = request();
        data.public_contacts = Some(vec![contact.clone(), contact.clone(), contact]);
        let errors = validate_new_property(&data).unwrap_err();
        assert!(errors.errors().contains_key("public_contacts"));
    }

    #[test]
    fn two_public_contacts_are_allowed() {
        let contact = PublicContact {
            name: "Office".to_string(),
            phone: "+97235551234".to_string(),
        };
        assert!(validate_public_contacts(&[contact.clone(), contact]).is_ok());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
