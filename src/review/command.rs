/// Action requested by a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
    /// A reviewer asks the PR author to update the PR.
    RequestUpdate,
    /// The PR is ready to be reviewed (again).
    RequestReview,
}

/// Finds trigger phrases in comment text.
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    request_update: Trigger,
    request_review: Trigger,
}

#[derive(Debug, Clone)]
struct Trigger {
    /// Text as configured, used in messages.
    text: String,
    lowercase: String,
}

impl Trigger {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lowercase: text.to_lowercase(),
        }
    }
}

impl TriggerMatcher {
    pub fn new(request_update: &str, request_review: &str) -> Self {
        Self {
            request_update: Trigger::new(request_update),
            request_review: Trigger::new(request_review),
        }
    }

    pub fn request_update(&self) -> &str {
        &self.request_update.text
    }

    pub fn request_review(&self) -> &str {
        &self.request_review.text
    }

    /// Both triggers match exactly the same comments.
    pub fn is_ambiguous(&self) -> bool {
        self.request_update.lowercase == self.request_review.lowercase
    }

    /// Matching is case-insensitive and the trigger may appear anywhere in the text.
    /// When both triggers are present, the update request wins.
    pub fn parse(&self, text: &str) -> Option<ReviewCommand> {
        let text = text.to_lowercase();
        if text.contains(&self.request_update.lowercase) {
            Some(ReviewCommand::RequestUpdate)
        } else if text.contains(&self.request_review.lowercase) {
            Some(ReviewCommand::RequestReview)
        } else {
            None
        }
    }
}
