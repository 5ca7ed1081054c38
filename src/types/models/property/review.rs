use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub user_id: ObjectId,
    /// 1 through 5.
    pub rating: u8,
    pub comment: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Mean of the current ratings, rounded to one decimal. Zero when empty.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

pub fn has_review_by(reviews: &[Review], user_id: &ObjectId) -> bool {
    reviews.iter().any(|r| r.user_id == *user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(user_id: ObjectId, rating: u8) -> Review {
        Review {
            user_id,
            rating,
            comment: "fine".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn average_of_five_three_four_is_four() {
        let reviews = vec![
            review(ObjectId::new(), 5),
            review(ObjectId::new(), 3),
            review(ObjectId::new(), 4),
        ];
        assert_eq!(average_rating(&reviews), 4.0);
    }

    #[test]
    fn average_of_empty_list_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let reviews = vec![review(ObjectId::new(), 4), review(ObjectId::new(), 5)];
        assert_eq!(average_rating(&reviews), 4.5);
    }

    #[test]
    fn detects_existing_review_by_user() {
        let rater = ObjectId::new();
        let reviews = vec![review(rater, 5), review(ObjectId::new(), 2)];
        assert!(has_review_by(&reviews, &rater));
        assert!(!has_review_by(&reviews, &ObjectId::new()));
    }
}
