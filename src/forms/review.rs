use serde::Deserialize;
use validator::Validate;

/// Form data for leaving a review on a listing.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewForm {
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(min = 10, message = "Comment must be at least 10 characters long"))]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_comment_fails_validation() {
        let form = ReviewForm {
            rating: 5,
            comment: "too short".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn out_of_scale_rating_fails_validation() {
        let form = ReviewForm {
            rating: 6,
            comment: "long enough comment".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
